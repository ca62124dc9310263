//! Page Models
//!
//! Data the server embeds in the listing page, deserialized at startup.

use serde::{Deserialize, Serialize};

/// One file row of the current folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Transient container id, `<device>_<ino>`
    pub ino_id: String,
    pub name: String,
    /// Persisted note display id; empty until the first save
    #[serde(default)]
    pub tag: String,
    /// Rich HTML note body
    #[serde(default)]
    pub note: String,
    /// Color code, 0 = unset
    #[serde(default)]
    pub color: u8,
    #[serde(default)]
    pub pinned: bool,
    /// Row the user navigated here from
    #[serde(default)]
    pub active: bool,
}

/// One folder row of the current folder listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntry {
    pub ino_id: String,
    pub name: String,
    /// `/list/<dev_ino>` navigation link
    pub href: String,
}

/// Workspace menu entry, shape produced by the server's shortcut table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub id: u64,
    pub href: String,
}

/// Everything the server hands the page at render time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// Current folder id, `<device>_<ino>`
    pub dev_ino: String,
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub workspace_folders: Vec<MenuEntry>,
    #[serde(default)]
    pub workspace_files: Vec<MenuEntry>,
    /// Whether the current folder is already a workspace shortcut
    #[serde(default)]
    pub folder_pinned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_from_embedded_json() {
        let raw = r#"{
            "dev_ino": "16777218_42",
            "folders": [{"ino_id": "16777218_7", "name": "papers", "href": "/list/16777218_7"}],
            "files": [{"ino_id": "16777218_9", "name": "notes.txt", "tag": "ab12", "note": "<p>x</p>", "color": 3, "pinned": true}],
            "workspace_folders": [{"title": "CRISPR", "id": 1131, "href": "/list/16777218_1131"}],
            "folder_pinned": true
        }"#;
        let page: PageData = serde_json::from_str(raw).unwrap();
        assert_eq!(page.dev_ino, "16777218_42");
        assert_eq!(page.folders[0].name, "papers");
        assert_eq!(page.files[0].color, 3);
        assert!(page.files[0].pinned);
        assert!(page.workspace_files.is_empty());
        assert!(page.folder_pinned);
    }

    #[test]
    fn test_file_entry_defaults() {
        let raw = r#"{"ino_id": "1_2", "name": "README"}"#;
        let file: FileEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(file.tag, "");
        assert_eq!(file.note, "");
        assert_eq!(file.color, 0);
        assert!(!file.pinned);
        assert!(!file.active);
    }
}
