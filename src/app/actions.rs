//! Session action handlers
//!
//! Every state transition goes through one of these methods; the
//! presentation layer never touches `AppState` directly.

use crate::app::state::EditorSession;

use super::App;

impl App {
    /// Submit email text for draft generation.
    ///
    /// On success the returned drafts replace the collection wholesale. On
    /// failure the previous drafts and selection stay usable so the user
    /// can correct and resubmit without losing anything.
    pub(crate) async fn submit_email(&mut self, raw_content: &str) -> bool {
        let sender_name = self.config.sender.name.clone();
        let sender_email = self.config.sender.email.clone();

        match self
            .controller
            .submit(raw_content, sender_name.as_deref(), sender_email.as_deref())
            .await
        {
            Ok(replies) => {
                let count = replies.len();
                self.state.install_replies(replies);
                self.state.status.clear_error();
                self.state.status.set_message(format!("{count} drafts ready"));
                true
            }
            Err(err) => {
                self.state.status.set_error(err);
                false
            }
        }
    }

    /// Select a draft by id and open an editor session on it.
    ///
    /// An unknown id indicates a logic bug in the caller; it is logged and
    /// the selection attempt aborted without touching the current session.
    pub(crate) fn select_reply(&mut self, id: &str) -> bool {
        match self.state.replies.select(id) {
            Ok(selected) => {
                self.state.editor = Some(EditorSession::open(selected));
                true
            }
            Err(err) => {
                tracing::error!("selection failed: {err}");
                false
            }
        }
    }

    /// Clear the selection and discard the editor session
    pub(crate) fn clear_selection(&mut self) {
        self.state.replies.clear_selection();
        self.state.editor = None;
    }

    /// Replace the working text of the open editor session
    pub(crate) fn edit_draft(&mut self, text: String) -> bool {
        match &mut self.state.editor {
            Some(editor) => {
                editor.edit(text);
                true
            }
            None => false,
        }
    }

    /// Restore the working text to the selected reply's original content
    pub(crate) fn reset_draft(&mut self) -> bool {
        match &mut self.state.editor {
            Some(editor) => {
                editor.reset();
                true
            }
            None => false,
        }
    }

    /// Copy the working draft to the system clipboard.
    ///
    /// Success and failure are both surfaced; a denied clipboard write
    /// shows up as an error, not as a silent no-op.
    pub(crate) fn copy_draft(&mut self) {
        let Some(editor) = &self.state.editor else {
            self.state.status.set_error("no draft selected");
            return;
        };

        match self.exporter.copy(editor.working()) {
            Ok(()) => self.state.status.set_message("Draft copied to clipboard"),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.state.status.set_error(err);
            }
        }
    }
}
