//! # Draft canvas: local edits reconciled against server drafts
//!
//! A [`DraftCanvas`] belongs to exactly one brand-voice thread and is rebuilt
//! from scratch whenever the active thread changes. It tracks three texts:
//!
//! - the canvas text the user sees and edits,
//! - the last server draft it has observed,
//! - an optional *pending* server draft that arrived while the user had
//!   unsaved edits.
//!
//! A server draft replaces the canvas only while there are no local edits.
//! Otherwise it waits in `pending_update` until [`DraftCanvas::apply_pending`]
//! is called, at which point the pending text wins outright.
//!
//! ## Autosave
//!
//! Each edit calls [`DraftCanvas::schedule_autosave`], which bumps a
//! generation counter and returns an [`AutosaveTicket`]. The UI sleeps for
//! the debounce delay and then calls [`DraftCanvas::begin_save`] with the
//! ticket; stale tickets are refused, so only the last edit in a burst saves.
//!
//! At most one save is in flight. `begin_*` hands out a [`SaveRequest`] and
//! only that request may complete: a result for any other request is
//! ignored. Edits made while a save is in flight keep the canvas `Unsaved`,
//! and the caller saves again once the request finishes.
//!
//! ```text
//! Idle ──edit──▶ Unsaved ──begin_save──▶ Saving ──finish_save──▶ Saved ──settle──▶ Idle
//!                   ▲                       │
//!                   └──────fail_save────────┘
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SAVE_ID: AtomicU64 = AtomicU64::new(1);

/// Save progress shown next to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Unsaved,
    Saving,
    Saved,
}

impl SaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "",
            SaveStatus::Unsaved => "Unsaved changes",
            SaveStatus::Saving => "Saving…",
            SaveStatus::Saved => "Saved",
        }
    }
}

/// Identifies one scheduled autosave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveTicket(u64);

/// One save of the canvas text, handed out by `begin_save` and
/// `begin_manual_save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftCanvas {
    thread_id: String,
    text: String,
    last_server_draft: String,
    pending_update: Option<String>,
    local_edits: bool,
    undo: VecDeque<String>,
    undo_limit: usize,
    status: SaveStatus,
    generation: u64,
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl DraftCanvas {
    /// Fresh canvas for `thread_id`, showing its latest server draft.
    pub fn for_thread(thread_id: impl Into<String>, server_draft: impl Into<String>, undo_limit: usize) -> Self {
        let draft = server_draft.into();
        Self {
            thread_id: thread_id.into(),
            text: draft.clone(),
            last_server_draft: draft,
            pending_update: None,
            local_edits: false,
            undo: VecDeque::new(),
            undo_limit,
            status: SaveStatus::Idle,
            generation: 0,
            in_flight: None,
            last_error: None,
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_server_draft(&self) -> &str {
        &self.last_server_draft
    }

    pub fn pending_update(&self) -> Option<&str> {
        self.pending_update.as_deref()
    }

    pub fn has_local_edits(&self) -> bool {
        self.local_edits
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Replace the canvas text with a user edit. Returns false for a no-op.
    pub fn edit(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        let previous = std::mem::replace(&mut self.text, text);
        self.push_undo(previous);
        self.mark_local_edit();
        true
    }

    /// The server reported a new draft for this thread.
    pub fn server_draft_changed(&mut self, draft: impl Into<String>) {
        let draft = draft.into();
        self.last_server_draft = draft.clone();
        if self.local_edits {
            self.pending_update = (draft != self.text).then_some(draft);
        } else {
            self.text = draft;
            self.pending_update = None;
        }
    }

    /// Take the held server draft as the canvas text. Returns false when
    /// nothing was pending.
    pub fn apply_pending(&mut self) -> bool {
        let Some(pending) = self.pending_update.take() else {
            return false;
        };
        if pending != self.text {
            let previous = std::mem::replace(&mut self.text, pending);
            self.push_undo(previous);
        }
        self.mark_local_edit();
        true
    }

    pub fn dismiss_pending(&mut self) {
        self.pending_update = None;
    }

    /// Pop one snapshot. Returns false when the stack is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.text = previous;
        self.mark_local_edit();
        true
    }

    /// Whether a version from the history may be restored.
    pub fn can_restore(version: u32, latest: u32) -> bool {
        version != latest
    }

    /// Make an older version the canvas text. It is not saved until the
    /// next autosave or explicit save.
    pub fn restore_version(&mut self, text: impl Into<String>) -> bool {
        self.edit(text)
    }

    pub fn schedule_autosave(&mut self) -> AutosaveTicket {
        self.generation += 1;
        AutosaveTicket(self.generation)
    }

    /// Save for `ticket`, or `None` when a later edit superseded it, a save
    /// is already in flight or there is nothing to save.
    pub fn begin_save(&mut self, ticket: AutosaveTicket) -> Option<SaveRequest> {
        if ticket.0 != self.generation {
            return None;
        }
        self.begin_manual_save()
    }

    /// Save right now, ignoring the debounce.
    pub fn begin_manual_save(&mut self) -> Option<SaveRequest> {
        if !self.local_edits || self.in_flight.is_some() {
            return None;
        }
        let id = NEXT_SAVE_ID.fetch_add(1, Ordering::Relaxed);
        self.in_flight = Some(id);
        self.status = SaveStatus::Saving;
        self.last_error = None;
        Some(SaveRequest {
            id,
            text: self.text.clone(),
        })
    }

    /// Unsaved text, whether or not a save is in flight. Used when the
    /// canvas is abandoned and its edits must still reach the server.
    pub fn unsaved_text(&self) -> Option<&str> {
        self.local_edits.then_some(self.text.as_str())
    }

    /// The server stored `request` and now reports `server_draft`. Returns
    /// true when edits made in the meantime still need saving.
    pub fn finish_save(&mut self, request: &SaveRequest, server_draft: impl Into<String>) -> bool {
        if self.in_flight != Some(request.id) {
            return false;
        }
        self.in_flight = None;
        self.last_server_draft = server_draft.into();
        if self.text == request.text {
            self.local_edits = false;
            self.status = SaveStatus::Saved;
            if self.pending_update.as_deref() == Some(self.text.as_str()) {
                self.pending_update = None;
            }
            false
        } else {
            self.status = SaveStatus::Unsaved;
            true
        }
    }

    pub fn fail_save(&mut self, request: &SaveRequest, message: impl Into<String>) {
        if self.in_flight != Some(request.id) {
            return;
        }
        self.in_flight = None;
        self.last_error = Some(message.into());
        self.status = SaveStatus::Unsaved;
    }

    /// Fade a `Saved` badge back to idle.
    pub fn settle(&mut self) {
        if self.status == SaveStatus::Saved {
            self.status = SaveStatus::Idle;
        }
    }

    fn mark_local_edit(&mut self) {
        self.local_edits = true;
        self.status = SaveStatus::Unsaved;
    }

    fn push_undo(&mut self, snapshot: String) {
        if self.undo_limit == 0 {
            return;
        }
        if self.undo.back() == Some(&snapshot) {
            return;
        }
        if self.undo.len() == self.undo_limit {
            self.undo.pop_front();
        }
        self.undo.push_back(snapshot);
    }
}

/// Which thread the brand-voice page shows and how far its load got.
///
/// Only a `Loading` or `Ready` thread is active: results for anything else
/// are dropped. A failed load is not active, so selecting the same thread
/// again starts a fresh load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThreadSelection {
    #[default]
    Empty,
    Loading(String),
    Ready(String),
    Failed { thread_id: String, error: String },
}

impl ThreadSelection {
    pub fn active(&self) -> Option<&str> {
        match self {
            ThreadSelection::Loading(id) | ThreadSelection::Ready(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_active(&self, thread_id: &str) -> bool {
        self.active() == Some(thread_id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ThreadSelection::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ThreadSelection::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Thread to load again after a failure.
    pub fn retry_target(&self) -> Option<&str> {
        match self {
            ThreadSelection::Failed { thread_id, .. } => Some(thread_id),
            _ => None,
        }
    }

    /// Start loading `thread_id`. Returns false when it is already active.
    pub fn open(&mut self, thread_id: &str) -> bool {
        if self.is_active(thread_id) {
            return false;
        }
        *self = ThreadSelection::Loading(thread_id.to_string());
        true
    }

    /// Record a finished load. Returns false when `thread_id` is no longer
    /// being loaded and the result must be dropped.
    pub fn finish(&mut self, thread_id: &str, result: Result<(), String>) -> bool {
        if !matches!(self, ThreadSelection::Loading(id) if id == thread_id) {
            return false;
        }
        *self = match result {
            Ok(()) => ThreadSelection::Ready(thread_id.to_string()),
            Err(error) => ThreadSelection::Failed {
                thread_id: thread_id.to_string(),
                error,
            },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(draft: &str) -> DraftCanvas {
        DraftCanvas::for_thread("t1", draft, 50)
    }

    #[test]
    fn test_starts_from_server_draft() {
        let c = canvas("hello");
        assert_eq!(c.text(), "hello");
        assert_eq!(c.status(), SaveStatus::Idle);
        assert!(!c.has_local_edits());
        assert!(!c.can_undo());
    }

    #[test]
    fn test_server_draft_replaces_canvas_without_local_edits() {
        let mut c = canvas("v1");
        c.server_draft_changed("v2");
        assert_eq!(c.text(), "v2");
        assert!(c.pending_update().is_none());
    }

    #[test]
    fn test_server_draft_held_while_local_edits_exist() {
        let mut c = canvas("v1");
        c.edit("mine");
        c.server_draft_changed("assistant v2");
        assert_eq!(c.text(), "mine");
        assert_eq!(c.pending_update(), Some("assistant v2"));

        c.server_draft_changed("assistant v3");
        assert_eq!(c.pending_update(), Some("assistant v3"));

        assert!(c.apply_pending());
        assert_eq!(c.text(), "assistant v3");
        assert!(c.pending_update().is_none());
        assert_eq!(c.status(), SaveStatus::Unsaved);
        assert!(c.undo());
        assert_eq!(c.text(), "mine");
    }

    #[test]
    fn test_apply_pending_without_pending_is_noop() {
        let mut c = canvas("v1");
        assert!(!c.apply_pending());
        assert_eq!(c.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_dismiss_pending() {
        let mut c = canvas("v1");
        c.edit("mine");
        c.server_draft_changed("theirs");
        c.dismiss_pending();
        assert!(c.pending_update().is_none());
        assert_eq!(c.text(), "mine");
        assert_eq!(c.last_server_draft(), "theirs");
    }

    #[test]
    fn test_identical_edit_is_not_pushed() {
        let mut c = canvas("a");
        assert!(!c.edit("a"));
        assert!(c.edit("b"));
        assert!(!c.edit("b"));
        assert_eq!(c.undo_depth(), 1);
    }

    #[test]
    fn test_undo_stack_is_bounded() {
        let mut c = DraftCanvas::for_thread("t1", "0", 3);
        for i in 1..=5 {
            c.edit(i.to_string());
        }
        assert_eq!(c.undo_depth(), 3);
        assert!(c.undo());
        assert_eq!(c.text(), "4");
        assert!(c.undo());
        assert!(c.undo());
        assert_eq!(c.text(), "2");
        assert!(!c.undo());
    }

    #[test]
    fn test_autosave_only_for_latest_ticket() {
        let mut c = canvas("v1");
        c.edit("a");
        let first = c.schedule_autosave();
        c.edit("ab");
        let second = c.schedule_autosave();

        assert_eq!(c.begin_save(first), None);
        let request = c.begin_save(second).unwrap();
        assert_eq!(request.text, "ab");
        assert_eq!(c.status(), SaveStatus::Saving);

        assert!(!c.finish_save(&request, "ab"));
        assert_eq!(c.status(), SaveStatus::Saved);
        assert!(!c.has_local_edits());

        c.settle();
        assert_eq!(c.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_edit_during_save_stays_unsaved() {
        let mut c = canvas("v1");
        c.edit("a");
        let ticket = c.schedule_autosave();
        let saving = c.begin_save(ticket).unwrap();
        c.edit("abc");
        assert!(c.finish_save(&saving, "a"));
        assert_eq!(c.status(), SaveStatus::Unsaved);
        assert!(c.has_local_edits());
        assert_eq!(c.last_server_draft(), "a");
    }

    #[test]
    fn test_nothing_to_save_without_edits() {
        let mut c = canvas("v1");
        let ticket = c.schedule_autosave();
        assert_eq!(c.begin_save(ticket), None);
        assert_eq!(c.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_failed_save_returns_to_unsaved() {
        let mut c = canvas("v1");
        c.edit("a");
        let request = c.begin_manual_save().unwrap();
        c.fail_save(&request, "HTTP 500");
        assert_eq!(c.status(), SaveStatus::Unsaved);
        assert_eq!(c.last_error(), Some("HTTP 500"));
        assert!(!c.is_saving());
        assert_eq!(c.begin_manual_save().map(|r| r.text), Some("a".to_string()));
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_restore_version_is_a_local_edit() {
        let mut c = canvas("v3");
        assert!(DraftCanvas::can_restore(1, 3));
        assert!(!DraftCanvas::can_restore(3, 3));
        assert!(c.restore_version("v1 text"));
        assert_eq!(c.text(), "v1 text");
        assert_eq!(c.status(), SaveStatus::Unsaved);
        assert!(c.has_local_edits());
    }

    #[test]
    fn test_server_echo_of_local_text_is_not_pending() {
        let mut c = canvas("v1");
        c.edit("mine");
        c.server_draft_changed("mine");
        assert!(c.pending_update().is_none());
    }

    #[test]
    fn test_server_echo_drops_older_pending() {
        let mut c = canvas("v1");
        c.edit("mine");
        c.server_draft_changed("assistant v2");
        c.server_draft_changed("mine");
        assert_eq!(c.last_server_draft(), "mine");
        assert!(c.pending_update().is_none());
        assert!(!c.apply_pending());
        assert_eq!(c.text(), "mine");
    }

    #[test]
    fn test_server_draft_after_save_replaces_canvas() {
        let mut c = canvas("v1");
        c.edit("mine");
        let request = c.begin_manual_save().unwrap();
        c.finish_save(&request, "mine");
        assert!(!c.has_local_edits());

        c.server_draft_changed("assistant v3");
        assert_eq!(c.text(), "assistant v3");
        assert!(c.pending_update().is_none());
    }

    #[test]
    fn test_one_save_in_flight() {
        let mut c = canvas("v1");
        c.edit("a");
        let first = c.schedule_autosave();
        let request = c.begin_save(first).unwrap();
        assert!(c.is_saving());

        c.edit("ab");
        let second = c.schedule_autosave();
        assert_eq!(c.begin_save(second), None);
        assert_eq!(c.begin_manual_save(), None);
        assert_eq!(c.status(), SaveStatus::Unsaved);

        // the finished save reports the newer edit as still unsaved
        assert!(c.finish_save(&request, "a"));
        assert_eq!(c.status(), SaveStatus::Unsaved);
        assert!(c.has_local_edits());

        let follow_up = c.begin_manual_save().unwrap();
        assert_eq!(follow_up.text, "ab");
        assert!(!c.finish_save(&follow_up, "ab"));
        assert_eq!(c.status(), SaveStatus::Saved);
        assert_eq!(c.last_server_draft(), "ab");
    }

    #[test]
    fn test_unknown_completion_is_ignored() {
        let mut stale = canvas("v1");
        stale.edit("a");
        let stale_request = stale.begin_manual_save().unwrap();

        let mut c = canvas("v1");
        c.edit("ab");
        let request = c.begin_manual_save().unwrap();
        assert!(!c.finish_save(&request, "ab"));

        assert!(!c.finish_save(&stale_request, "a"));
        c.fail_save(&stale_request, "HTTP 500");
        assert_eq!(c.status(), SaveStatus::Saved);
        assert_eq!(c.last_server_draft(), "ab");
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_unsaved_text_survives_in_flight_save() {
        let mut c = canvas("v1");
        assert_eq!(c.unsaved_text(), None);
        c.edit("a");
        let _request = c.begin_manual_save().unwrap();
        c.edit("ab");
        assert_eq!(c.unsaved_text(), Some("ab"));
    }

    #[test]
    fn test_failed_thread_can_be_opened_again() {
        let mut selection = ThreadSelection::default();
        assert!(selection.open("t1"));
        assert!(selection.is_loading());
        assert!(!selection.open("t1"));

        assert!(selection.finish("t1", Err("HTTP 500".into())));
        assert_eq!(selection.error(), Some("HTTP 500"));
        assert_eq!(selection.retry_target(), Some("t1"));
        assert!(!selection.is_active("t1"));

        assert!(selection.open("t1"));
        assert!(selection.finish("t1", Ok(())));
        assert_eq!(selection, ThreadSelection::Ready("t1".into()));
        assert!(!selection.open("t1"));
    }

    #[test]
    fn test_stale_thread_load_is_dropped() {
        let mut selection = ThreadSelection::default();
        selection.open("t1");
        selection.open("t2");
        assert!(!selection.finish("t1", Ok(())));
        assert!(selection.finish("t2", Ok(())));
        assert_eq!(selection.active(), Some("t2"));
    }
}
