//! Session state types
//!
//! All state types live here to maintain clean dependency: the presentation
//! layer imports from the app layer, not vice versa.

use crate::api::Reply;
use crate::error::SelectionError;

/// The draft set from the last successful request, plus at most one
/// selection into it.
///
/// The collection is only ever replaced wholesale via [`install`], never
/// mutated element by element, so a selection can never outlive the set it
/// points into.
///
/// [`install`]: ReplyCollection::install
#[derive(Debug, Default)]
pub struct ReplyCollection {
    replies: Vec<Reply>,
    selected: Option<String>,
}

impl ReplyCollection {
    /// Replace the whole collection. Any prior selection is cleared.
    pub fn install(&mut self, replies: Vec<Reply>) {
        self.replies = replies;
        self.selected = None;
    }

    /// Mark the reply with the given id as selected and return it.
    pub fn select(&mut self, id: &str) -> Result<&Reply, SelectionError> {
        let index = self
            .replies
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SelectionError::NotFound { id: id.to_string() })?;

        self.selected = Some(self.replies[index].id.clone());
        Ok(&self.replies[index])
    }

    /// Idempotent; selection becomes none.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Reply> {
        let id = self.selected.as_deref()?;
        self.replies.iter().find(|r| r.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Reply by list position (0-based), for numeric selection
    pub fn get(&self, index: usize) -> Option<&Reply> {
        self.replies.get(index)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reply> {
        self.replies.iter()
    }
}

/// Mutable working copy of the selected draft's text.
///
/// `original_content` is captured once at [`open`] and never changes;
/// only `working_content` moves, via [`edit`] and [`reset`].
///
/// [`open`]: EditorSession::open
/// [`edit`]: EditorSession::edit
/// [`reset`]: EditorSession::reset
#[derive(Debug, Clone)]
pub struct EditorSession {
    source_reply_id: String,
    original_content: String,
    working_content: String,
}

impl EditorSession {
    pub fn open(reply: &Reply) -> Self {
        Self {
            source_reply_id: reply.id.clone(),
            original_content: reply.content.clone(),
            working_content: reply.content.clone(),
        }
    }

    #[allow(dead_code)]
    pub fn source_reply_id(&self) -> &str {
        &self.source_reply_id
    }

    #[allow(dead_code)]
    pub fn original(&self) -> &str {
        &self.original_content
    }

    pub fn working(&self) -> &str {
        &self.working_content
    }

    /// Replace the working text. Empty text is allowed; the user may clear
    /// a draft on purpose.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.working_content = text.into();
    }

    /// Restore the working text to the content captured at open
    pub fn reset(&mut self) {
        self.working_content = self.original_content.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.working_content != self.original_content
    }
}

/// Status message state for the lightweight acknowledgment line
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub error: Option<String>,
    pub message: String,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// All mutable session state. Owned by the `App` and mutated only from the
/// single task driving the session.
#[derive(Debug, Default)]
pub struct AppState {
    pub replies: ReplyCollection,
    /// At most one editor session; a new selection supersedes the old one
    pub editor: Option<EditorSession>,
    pub status: StatusState,
}

impl AppState {
    /// Install a fresh draft set, discarding the selection and any editor
    /// session tied to the previous set.
    pub fn install_replies(&mut self, replies: Vec<Reply>) {
        self.replies.install(replies);
        self.editor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(id: &str, tone: &str, content: &str) -> Reply {
        Reply {
            id: id.to_string(),
            tone: tone.to_string(),
            content: content.to_string(),
            preview: content.chars().take(20).collect(),
        }
    }

    #[test]
    fn test_install_replaces_wholesale_and_clears_selection() {
        let mut collection = ReplyCollection::default();
        collection.install(vec![reply("1", "professional", "Dear...")]);
        collection.select("1").unwrap();
        assert_eq!(collection.selected_id(), Some("1"));

        collection.install(vec![
            reply("a", "brief", "Ok."),
            reply("b", "detailed", "Certainly..."),
        ]);

        assert_eq!(collection.len(), 2);
        assert!(collection.selected().is_none());
        assert!(collection.selected_id().is_none());
    }

    #[test]
    fn test_select_unknown_id_is_not_found() {
        let mut collection = ReplyCollection::default();
        collection.install(vec![reply("1", "professional", "Dear...")]);

        let err = collection.select("99").unwrap_err();
        assert_eq!(
            err,
            SelectionError::NotFound {
                id: "99".to_string()
            }
        );
        // Failed selection leaves the previous state untouched.
        assert!(collection.selected().is_none());
    }

    #[test]
    fn test_clear_selection_is_idempotent() {
        let mut collection = ReplyCollection::default();
        collection.install(vec![reply("1", "friendly", "Hey...")]);
        collection.select("1").unwrap();

        collection.clear_selection();
        assert!(collection.selected().is_none());
        collection.clear_selection();
        assert!(collection.selected().is_none());
    }

    #[test]
    fn test_editor_opens_with_working_equal_to_content() {
        let session = EditorSession::open(&reply("2", "friendly", "Hey..."));
        assert_eq!(session.working(), "Hey...");
        assert_eq!(session.original(), "Hey...");
        assert_eq!(session.source_reply_id(), "2");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_editor_reset_restores_original_after_any_edits() {
        let mut session = EditorSession::open(&reply("1", "brief", "Ok, see you then."));

        session.edit("first rewrite");
        session.edit("second rewrite");
        session.edit("");
        assert!(session.is_dirty());
        assert_eq!(session.working(), "");

        session.reset();
        assert_eq!(session.working(), "Ok, see you then.");
        assert_eq!(session.original(), "Ok, see you then.");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_editor_allows_empty_working_text() {
        let mut session = EditorSession::open(&reply("1", "brief", "Ok."));
        session.edit("");
        assert_eq!(session.working(), "");
        // The original is untouched.
        assert_eq!(session.original(), "Ok.");
    }

    #[test]
    fn test_install_discards_open_editor_session() {
        let mut state = AppState::default();
        state.install_replies(vec![reply("1", "professional", "Dear...")]);
        let selected = state.replies.select("1").unwrap();
        state.editor = Some(EditorSession::open(selected));

        state.install_replies(vec![reply("2", "friendly", "Hey...")]);

        assert!(state.editor.is_none());
        assert!(state.replies.selected().is_none());
        assert_eq!(state.replies.len(), 1);
    }
}
