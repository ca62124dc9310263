//! Shortcut Endpoints

use super::{get_text, protocol, ApiError};

/// Direction of a pin toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Add,
    Remove,
}

impl ShortcutAction {
    fn path(&self) -> &'static str {
        match self {
            ShortcutAction::Add => "add_shortcut",
            ShortcutAction::Remove => "del_shortcut",
        }
    }

    /// Pin state once this action is confirmed
    pub fn resulting_pinned(&self) -> bool {
        matches!(self, ShortcutAction::Add)
    }

    /// Action that moves a file or folder out of its current pin state
    pub fn for_pinned(pinned: bool) -> Self {
        if pinned {
            ShortcutAction::Remove
        } else {
            ShortcutAction::Add
        }
    }
}

/// GET `/add_shortcut/<id>` or `/del_shortcut/<id>`
pub async fn toggle_shortcut(id: &str, action: ShortcutAction) -> Result<(), ApiError> {
    let (ok, body) = get_text(&format!("/{}/{}", action.path(), id)).await?;
    protocol::require_ack(ok, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_pin_state() {
        assert_eq!(ShortcutAction::for_pinned(false), ShortcutAction::Add);
        assert_eq!(ShortcutAction::for_pinned(true), ShortcutAction::Remove);
        assert!(ShortcutAction::for_pinned(false).resulting_pinned());
        assert!(!ShortcutAction::for_pinned(true).resulting_pinned());
    }
}
