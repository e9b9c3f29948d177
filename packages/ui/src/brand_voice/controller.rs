//! Drives a [`DraftCanvas`] from the page: thread switches, debounced
//! autosave and server drafts arriving from chat or rewrite replies.
//!
//! Every async result is checked against the active thread before it is
//! applied, so a slow load or save for a thread the user already left is
//! dropped.

use api::ApiClient;
use dioxus::prelude::*;
use domain::{AutosaveTicket, BrandVoiceThread, DraftCanvas, SaveRequest, SaveStatus, ThreadSelection};

use crate::timer::sleep_ms;
use crate::toast::Toasts;

const SAVED_BADGE_MS: u32 = 2000;

#[derive(Clone, Copy, PartialEq)]
pub struct CanvasHandle {
    pub selection: Signal<ThreadSelection>,
    pub thread: Signal<Option<BrandVoiceThread>>,
    pub canvas: Signal<Option<DraftCanvas>>,
    toasts: Toasts,
    debounce_ms: u32,
    undo_limit: usize,
}

/// Create the handle and provide it to the page's children.
pub fn use_canvas_provider(toasts: Toasts, debounce_ms: u32, undo_limit: usize) -> CanvasHandle {
    let selection = use_signal(ThreadSelection::default);
    let thread = use_signal(|| None);
    let canvas = use_signal(|| None);
    use_context_provider(|| CanvasHandle {
        selection,
        thread,
        canvas,
        toasts,
        debounce_ms,
        undo_limit,
    })
}

pub fn use_canvas() -> CanvasHandle {
    use_context::<CanvasHandle>()
}

impl CanvasHandle {
    pub fn is_active(&self, thread_id: &str) -> bool {
        self.selection.peek().is_active(thread_id)
    }

    pub fn active_id(&self) -> Option<String> {
        self.selection.peek().active().map(str::to_string)
    }

    pub fn status(&self) -> SaveStatus {
        self.canvas
            .read()
            .as_ref()
            .map(|c| c.status())
            .unwrap_or(SaveStatus::Idle)
    }

    /// Switch to `thread_id`, flushing unsaved edits of the thread being left.
    /// A failed load leaves no thread active, so opening it again retries.
    pub async fn open(mut self, client: ApiClient, thread_id: String) {
        if self.is_active(&thread_id) {
            return;
        }
        self.flush(&client);

        self.selection.write().open(&thread_id);
        self.thread.set(None);
        self.canvas.set(None);

        let result = client.thread(&thread_id).await;
        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.to_string());
        let current = self.selection.write().finish(&thread_id, outcome);
        if !current {
            tracing::debug!("dropping load of inactive thread {thread_id}");
            return;
        }
        match result {
            Ok(thread) => {
                let canvas = DraftCanvas::for_thread(&thread.id, &thread.draft, self.undo_limit);
                self.canvas.set(Some(canvas));
                self.thread.set(Some(thread));
            }
            Err(e) => tracing::warn!("loading thread {thread_id} failed: {e}"),
        }
    }

    /// Load the thread whose last load failed again.
    pub async fn retry(self, client: ApiClient) {
        let Some(thread_id) = self.selection.peek().retry_target().map(str::to_string) else {
            return;
        };
        self.open(client, thread_id).await;
    }

    /// Forget the active thread, e.g. after deleting it.
    pub fn close(mut self) {
        self.selection.set(ThreadSelection::Empty);
        self.thread.set(None);
        self.canvas.set(None);
    }

    /// A user edit of the canvas text.
    pub fn edit(mut self, client: &ApiClient, text: String) {
        let ticket = {
            let mut guard = self.canvas.write();
            let Some(canvas) = guard.as_mut() else {
                return;
            };
            if !canvas.edit(text) {
                return;
            }
            canvas.schedule_autosave()
        };
        self.autosave_later(client.clone(), ticket);
    }

    pub fn undo(mut self, client: &ApiClient) {
        let ticket = {
            let mut guard = self.canvas.write();
            let Some(canvas) = guard.as_mut() else {
                return;
            };
            if !canvas.undo() {
                return;
            }
            canvas.schedule_autosave()
        };
        self.autosave_later(client.clone(), ticket);
    }

    pub fn apply_pending(mut self, client: &ApiClient) {
        let ticket = {
            let mut guard = self.canvas.write();
            let Some(canvas) = guard.as_mut() else {
                return;
            };
            if !canvas.apply_pending() {
                return;
            }
            canvas.schedule_autosave()
        };
        self.autosave_later(client.clone(), ticket);
    }

    pub fn dismiss_pending(mut self) {
        if let Some(canvas) = self.canvas.write().as_mut() {
            canvas.dismiss_pending();
        }
    }

    /// Put an older version on the canvas. Saved like any other edit.
    pub fn restore(mut self, text: String) {
        if let Some(canvas) = self.canvas.write().as_mut() {
            canvas.restore_version(text);
        }
    }

    /// The server sent a fresh copy of a thread (chat reply, rewrite).
    pub fn server_thread(mut self, thread: BrandVoiceThread) {
        if !self.is_active(&thread.id) {
            return;
        }
        if let Some(canvas) = self.canvas.write().as_mut() {
            canvas.server_draft_changed(thread.draft.clone());
        }
        self.thread.set(Some(thread));
    }

    /// Save immediately, skipping the debounce.
    pub fn save_now(mut self, client: &ApiClient) {
        let Some((thread_id, request)) = self
            .canvas
            .write()
            .as_mut()
            .and_then(|c| c.begin_manual_save().map(|r| (c.thread_id().to_string(), r)))
        else {
            return;
        };
        let client = client.clone();
        spawn(async move { self.save(client, thread_id, request).await });
    }

    fn autosave_later(self, client: ApiClient, ticket: AutosaveTicket) {
        let delay = self.debounce_ms;
        spawn(async move {
            sleep_ms(delay).await;
            let mut canvas = self.canvas;
            let Some((thread_id, request)) = canvas
                .write()
                .as_mut()
                .and_then(|c| c.begin_save(ticket).map(|r| (c.thread_id().to_string(), r)))
            else {
                return;
            };
            self.save(client, thread_id, request).await;
        });
    }

    /// Save whatever the current canvas holds before it is replaced, even
    /// when an earlier save of it is still in flight.
    fn flush(&self, client: &ApiClient) {
        let Some((thread_id, text)) = self
            .canvas
            .peek()
            .as_ref()
            .and_then(|c| c.unsaved_text().map(|text| (c.thread_id().to_string(), text.to_string())))
        else {
            return;
        };
        let client = client.clone();
        let toasts = self.toasts;
        spawn(async move {
            if let Err(e) = client.save_draft(&thread_id, &text).await {
                toasts.error(format!("Draft was not saved: {e}"));
            }
        });
    }

    async fn save(mut self, client: ApiClient, thread_id: String, request: SaveRequest) {
        let result = client.save_draft(&thread_id, &request.text).await;
        if !self.is_active(&thread_id) {
            if let Err(e) = result {
                self.toasts.error(format!("Draft was not saved: {e}"));
            }
            return;
        }
        match result {
            Ok(thread) => {
                tracing::info!("saved draft v{} of {}", thread.draft_version, thread.id);
                let resave = match self.canvas.write().as_mut() {
                    Some(canvas) if canvas.finish_save(&request, thread.draft.clone()) => {
                        Some(canvas.schedule_autosave())
                    }
                    _ => None,
                };
                self.thread.set(Some(thread));
                if let Some(ticket) = resave {
                    self.autosave_later(client, ticket);
                    return;
                }
                spawn(async move {
                    sleep_ms(SAVED_BADGE_MS).await;
                    if let Some(canvas) = self.canvas.write().as_mut() {
                        if canvas.thread_id() == thread_id {
                            canvas.settle();
                        }
                    }
                });
            }
            Err(e) => {
                if let Some(canvas) = self.canvas.write().as_mut() {
                    canvas.fail_save(&request, e.to_string());
                }
                self.toasts.error(format!("Draft was not saved: {e}"));
            }
        }
    }
}
