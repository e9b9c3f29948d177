use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};
use domain::{AdminUser, AdminUserUpdate, AppKey};

use super::AppChecklist;
use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant, ConfirmDialog, InlineError, Spinner};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::toast::use_toasts;

#[component]
pub fn AdminUsersView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let auth = use_auth();
    let query = use_signal(ListQuery::default);
    let mut deleting = use_signal(|| Option::<AdminUser>::None);

    let list_client = client.clone();
    let mut users = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_users().await }
    });

    let update_client = client.clone();
    let update = move |(user, change): (AdminUser, AdminUserUpdate)| {
        let client = update_client.clone();
        spawn(async move {
            match client.update_user(&user.id, &change).await {
                Ok(updated) => {
                    toasts.success(format!("Updated {}", updated.email));
                    users.restart();
                }
                Err(e) => toasts.error(format!("Could not update {}: {e}", user.email)),
            }
        });
    };

    let delete = move |user: AdminUser| {
        let client = client.clone();
        spawn(async move {
            match client.delete_user(&user.id).await {
                Ok(()) => {
                    toasts.success(format!("Removed {}", user.email));
                    users.restart();
                }
                Err(e) => toasts.error(format!("Could not remove {}: {e}", user.email)),
            }
        });
    };

    let me = auth().user.map(|u| u.id).unwrap_or_default();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Users" }
            match &*users.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load users: {e}"), on_retry: move |_| users.restart() }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            sort_options: vec![(SortKey::Title, "Email"), (SortKey::Updated, "Last sign-in")],
                            placeholder: "Search users…",
                        }
                        table {
                            class: "admin-table",
                            thead {
                                tr { th { "User" } th { "Admin" } th { "Apps" } th { "Last sign-in" } th {} }
                            }
                            tbody {
                                for user in shown {
                                    UserRow {
                                        key: "{user.id}",
                                        is_self: user.id == me,
                                        user: user.clone(),
                                        on_update: update.clone(),
                                        on_delete: move |u: AdminUser| deleting.set(Some(u)),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(user) = deleting() {
            ConfirmDialog {
                title: "Remove user?",
                message: format!("{} loses access to the portal.", user.email),
                confirm_label: "Remove",
                on_cancel: move |_| deleting.set(None),
                on_confirm: move |_| {
                    deleting.set(None);
                    delete(user.clone());
                },
            }
        }
    }
}

#[component]
fn UserRow(
    user: AdminUser,
    is_self: bool,
    on_update: EventHandler<(AdminUser, AdminUserUpdate)>,
    on_delete: EventHandler<AdminUser>,
) -> Element {
    let admin_user = user.clone();
    let apps_user = user.clone();
    let delete_user = user.clone();

    rsx! {
        tr {
            td {
                div { "{user.email}" }
                if let Some(name) = &user.name {
                    div { class: "view-muted", "{name}" }
                }
            }
            td {
                input {
                    r#type: "checkbox",
                    checked: user.is_admin,
                    disabled: is_self,
                    title: if is_self { "You cannot remove your own admin rights" } else { "" },
                    onchange: move |e: FormEvent| {
                        on_update.call((
                            admin_user.clone(),
                            AdminUserUpdate { is_admin: Some(e.checked()), apps: None },
                        ));
                    },
                }
            }
            td {
                AppChecklist {
                    selected: user.apps.clone(),
                    on_change: move |apps: Vec<AppKey>| {
                        on_update.call((
                            apps_user.clone(),
                            AdminUserUpdate { is_admin: None, apps: Some(apps) },
                        ));
                    },
                }
            }
            td { {user.last_login_at.clone().unwrap_or_else(|| "never".to_string())} }
            td {
                class: "admin-table-actions",
                if !is_self {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_delete.call(delete_user.clone()),
                        "Remove"
                    }
                }
            }
        }
    }
}
