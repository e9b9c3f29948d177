//! # Session state and route access decisions
//!
//! [`AuthState`] is the value the UI keeps in context. It is updated from the
//! result of the current-user request by [`AuthState::apply_current_user`]:
//!
//! - success replaces the user,
//! - a 401 clears the user without surfacing an error,
//! - any other failure keeps whatever user was known and marks the portal
//!   offline.
//!
//! Route guards ask [`decide`] whether a [`Requirement`] is met.

use crate::models::{AppKey, User};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Whether the last current-user request reached the server.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: true,
        }
    }
}

/// How a current-user request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFailure {
    Unauthorized,
    Other,
}

impl AuthState {
    pub fn apply_current_user(&mut self, result: Result<User, SessionFailure>) {
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.online = true;
            }
            Err(SessionFailure::Unauthorized) => {
                self.user = None;
                self.online = true;
            }
            Err(SessionFailure::Other) => {
                self.online = false;
            }
        }
    }

    pub fn logged_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn can_use(&self, app: AppKey) -> bool {
        self.user.as_ref().is_some_and(|u| user_can_use(u, app))
    }

    /// Apps shown on the home screen, in display order.
    pub fn visible_apps(&self) -> Vec<AppKey> {
        AppKey::all()
            .into_iter()
            .filter(|app| self.can_use(*app))
            .collect()
    }
}

/// Admins and internal staff implicitly hold every app.
pub fn user_can_use(user: &User, app: AppKey) -> bool {
    user.is_admin || user.is_internal || user.has_app(app)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Admin,
    App(AppKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Loading,
    NeedsLogin,
    Forbidden,
    Granted,
}

pub fn decide(state: &AuthState, requirement: Requirement) -> Access {
    if state.loading {
        return Access::Loading;
    }
    let Some(user) = state.user.as_ref() else {
        return Access::NeedsLogin;
    };
    let allowed = match requirement {
        Requirement::Authenticated => true,
        Requirement::Admin => user.is_admin,
        Requirement::App(app) => user_can_use(user, app),
    };
    if allowed {
        Access::Granted
    } else {
        Access::Forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, is_internal: bool, apps: Vec<AppKey>) -> User {
        User {
            id: "u1".into(),
            email: "u1@example.com".into(),
            name: None,
            is_admin,
            is_internal,
            apps,
        }
    }

    fn loaded(user: Option<User>) -> AuthState {
        AuthState {
            user,
            loading: false,
            online: true,
        }
    }

    #[test]
    fn test_unauthorized_clears_user() {
        let mut state = loaded(Some(user(false, false, vec![])));
        state.apply_current_user(Err(SessionFailure::Unauthorized));
        assert!(state.user.is_none());
        assert!(state.online);
    }

    #[test]
    fn test_other_failure_keeps_prior_user() {
        let mut state = loaded(Some(user(false, false, vec![])));
        state.apply_current_user(Err(SessionFailure::Other));
        assert!(state.user.is_some());
        assert!(!state.online);
        assert!(!state.loading);
    }

    #[test]
    fn test_loading_then_needs_login() {
        let state = AuthState::default();
        assert_eq!(decide(&state, Requirement::Authenticated), Access::Loading);
        let state = loaded(None);
        assert_eq!(decide(&state, Requirement::Authenticated), Access::NeedsLogin);
    }

    #[test]
    fn test_admin_requirement() {
        let state = loaded(Some(user(false, true, vec![])));
        assert_eq!(decide(&state, Requirement::Admin), Access::Forbidden);
        let state = loaded(Some(user(true, false, vec![])));
        assert_eq!(decide(&state, Requirement::Admin), Access::Granted);
    }

    #[test]
    fn test_app_grants() {
        let guest = loaded(Some(user(false, false, vec![AppKey::Wiki])));
        assert_eq!(decide(&guest, Requirement::App(AppKey::Wiki)), Access::Granted);
        assert_eq!(decide(&guest, Requirement::App(AppKey::BrandVoice)), Access::Forbidden);
        assert_eq!(guest.visible_apps(), vec![AppKey::Wiki]);

        let staff = loaded(Some(user(false, true, vec![])));
        assert_eq!(staff.visible_apps().len(), 4);
    }
}
