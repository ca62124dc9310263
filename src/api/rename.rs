//! Rename Endpoint

use super::{post_form, protocol, ApiError};

/// Fields posted on rename
pub struct RenameForm<'a> {
    pub ino_id: &'a str,
    pub new_name: &'a str,
    pub new_name_ext: &'a str,
}

/// POST `/rename/<id>`. Success needs only the `!!` marker; the new
/// display name is the last colon-delimited segment of the reply.
pub async fn rename(id: &str, form: &RenameForm<'_>) -> Result<String, ApiError> {
    let (ok, body) = post_form(
        &format!("/rename/{}", id),
        &[
            ("ino_id", form.ino_id),
            ("new_name", form.new_name),
            ("new_name_ext", form.new_name_ext),
        ],
    )
    .await?;
    protocol::require_ack(ok, &body)?;
    Ok(protocol::rename_display_name(&body).to_string())
}
