//! Note Endpoints

use super::{get_text, post_form, protocol, ApiError};

/// Whether a submit creates a note or edits a persisted one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteAction {
    Add,
    Edit,
}

impl NoteAction {
    fn path(&self) -> &'static str {
        match self {
            NoteAction::Add => "add_note",
            NoteAction::Edit => "edit_note",
        }
    }
}

/// Fields posted on note save
pub struct NoteForm<'a> {
    pub ino_id: &'a str,
    /// Existing display id, empty for a first save
    pub tag: &'a str,
    pub note: &'a str,
    pub color: u8,
}

/// POST the note to `/add_note/<target>` or `/edit_note/<target>`.
/// Returns the display id the server acknowledged with.
pub async fn post_note(action: NoteAction, target: &str, form: &NoteForm<'_>) -> Result<String, ApiError> {
    let url = format!("/{}/{}", action.path(), target);
    let color = form.color.to_string();
    let (ok, body) = post_form(
        &url,
        &[
            ("ino_id", form.ino_id),
            ("tag", form.tag),
            ("note", form.note),
            ("color", &color),
        ],
    )
    .await?;
    protocol::require_token(ok, &body)
}

/// GET `/del_note/<id>`. Returns the id from the reply body, which is the
/// one to clear (it may differ from the request id).
pub async fn del_note(id: &str) -> Result<String, ApiError> {
    let (ok, body) = get_text(&format!("/del_note/{}", id)).await?;
    protocol::require_token(ok, &body)
}
