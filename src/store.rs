//! Page State Store
//!
//! Everything the page previously scattered across DOM attributes lives
//! here; components derive classes and attributes from it at render time.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::color;
use crate::models::{FileEntry, FolderEntry, MenuEntry, PageData};

/// Outcome marker of an in-flight shortcut toggle.
/// Serialized as the "0"/"1" attribute the stylesheet keys on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleStatus {
    #[default]
    Pending,
    Confirmed,
}

impl ToggleStatus {
    pub fn as_attr(&self) -> &'static str {
        match self {
            ToggleStatus::Pending => "0",
            ToggleStatus::Confirmed => "1",
        }
    }
}

/// Color indicator of a file row.
///
/// A row without a note shows the neutral dot; a saved note shows its
/// color through the client registry, which falls back to green for
/// out-of-range codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorDot {
    Default,
    Code(u8),
}

impl ColorDot {
    pub fn class(&self) -> String {
        match self {
            ColorDot::Default => color::DEFAULT_DOT_CLASS.to_string(),
            ColorDot::Code(code) => color::dot_class(*code),
        }
    }
}

/// Per-row state of one listed file
#[derive(Clone, Debug, PartialEq)]
pub struct FileState {
    /// Transient container id, `<device>_<ino>`
    pub ino_id: String,
    pub name: String,
    /// Persisted note display id; empty until the first save
    pub tag: String,
    /// Rich HTML note body
    pub note: String,
    pub dot: ColorDot,
    pub note_visible: bool,
    pub pinned: bool,
    pub pin_status: ToggleStatus,
    pub active: bool,
}

impl From<FileEntry> for FileState {
    fn from(entry: FileEntry) -> Self {
        let dot = if entry.color == 0 {
            ColorDot::Default
        } else {
            ColorDot::Code(entry.color)
        };
        FileState {
            note_visible: !entry.note.is_empty(),
            ino_id: entry.ino_id,
            name: entry.name,
            tag: entry.tag,
            note: entry.note,
            dot,
            pinned: entry.pinned,
            pin_status: ToggleStatus::default(),
            active: entry.active,
        }
    }
}

/// Whole-page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Current folder id, `<device>_<ino>`
    pub dev_ino: String,
    pub folders: Vec<FolderEntry>,
    pub files: Vec<FileState>,
    pub workspace_folders: Vec<MenuEntry>,
    pub workspace_files: Vec<MenuEntry>,
    /// Color currently picked in the color dropdown
    pub current_color: u8,
    /// View toggle: whether all note regions are spread open
    pub expanded: bool,
    /// Shortcut state of the current folder
    pub folder_pinned: bool,
    pub folder_status: ToggleStatus,
}

impl PageState {
    pub fn from_page(page: PageData) -> Self {
        PageState {
            dev_ino: page.dev_ino,
            folders: page.folders,
            files: page.files.into_iter().map(FileState::from).collect(),
            workspace_folders: page.workspace_folders,
            workspace_files: page.workspace_files,
            folder_pinned: page.folder_pinned,
            ..Default::default()
        }
    }
}

pub type PageStore = Store<PageState>;

pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Mutation Helpers
// ========================
// Pure functions over the file list so the save/delete/rename/pin
// transitions stay testable off-browser.

/// Apply a successful note save: new body, returned display id, picked color
pub fn apply_note_saved(files: &mut [FileState], ino_id: &str, note: &str, display_tag: &str, color: u8) {
    if let Some(file) = files.iter_mut().find(|f| f.ino_id == ino_id) {
        file.note = note.to_string();
        file.note_visible = true;
        file.tag = display_tag.to_string();
        file.dot = ColorDot::Code(color);
    }
}

/// Apply a successful delete, keyed by the id the server echoed back
pub fn apply_note_deleted(files: &mut [FileState], response_id: &str) {
    if let Some(file) = files.iter_mut().find(|f| f.ino_id == response_id) {
        file.note = String::new();
        file.dot = ColorDot::Default;
    }
}

/// Apply a successful rename with the display name from the reply
pub fn apply_renamed(files: &mut [FileState], ino_id: &str, new_name: &str) {
    if let Some(file) = files.iter_mut().find(|f| f.ino_id == ino_id) {
        file.name = new_name.to_string();
    }
}

/// Confirm a pin toggle: the direction that just succeeded becomes state
pub fn apply_pin_confirmed(files: &mut [FileState], ino_id: &str, now_pinned: bool) {
    if let Some(file) = files.iter_mut().find(|f| f.ino_id == ino_id) {
        file.pinned = now_pinned;
        file.pin_status = ToggleStatus::Confirmed;
    }
}

pub fn set_pin_pending(files: &mut [FileState], ino_id: &str) {
    if let Some(file) = files.iter_mut().find(|f| f.ino_id == ino_id) {
        file.pin_status = ToggleStatus::Pending;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(ino_id: &str, tag: &str, note: &str) -> FileState {
        FileState::from(FileEntry {
            ino_id: ino_id.to_string(),
            name: format!("file_{}", ino_id),
            tag: tag.to_string(),
            note: note.to_string(),
            color: 0,
            pinned: false,
            active: false,
        })
    }

    #[test]
    fn test_note_visible_follows_body() {
        assert!(!make_file("1_1", "", "").note_visible);
        assert!(make_file("1_2", "t", "<p>x</p>").note_visible);
    }

    #[test]
    fn test_apply_note_saved() {
        let mut files = vec![make_file("1_1", "", ""), make_file("1_2", "", "")];
        apply_note_saved(&mut files, "1_2", "<p>new</p>", "ab12", 2);
        assert_eq!(files[1].note, "<p>new</p>");
        assert_eq!(files[1].tag, "ab12");
        assert!(files[1].note_visible);
        assert_eq!(files[1].dot.class(), "color_red_dot");
        // untouched sibling
        assert_eq!(files[0].note, "");
    }

    #[test]
    fn test_saved_color_zero_falls_back_to_green_dot() {
        let mut files = vec![make_file("1_1", "", "")];
        apply_note_saved(&mut files, "1_1", "<p>n</p>", "cd34", 0);
        assert_eq!(files[0].dot.class(), "color_green_dot");
    }

    // The delete reply carries the id; only the row it names is cleared,
    // whatever id the request was fired with.
    #[test]
    fn test_apply_note_deleted_uses_response_id() {
        let mut files = vec![make_file("1_1", "t1", "<p>a</p>"), make_file("1_2", "t2", "<p>b</p>")];
        apply_note_deleted(&mut files, "1_2");
        assert_eq!(files[0].note, "<p>a</p>");
        assert_eq!(files[1].note, "");
        assert_eq!(files[1].dot.class(), color::DEFAULT_DOT_CLASS);
    }

    #[test]
    fn test_apply_renamed() {
        let mut files = vec![make_file("1_1", "", "")];
        apply_renamed(&mut files, "1_1", "renamed.txt");
        assert_eq!(files[0].name, "renamed.txt");
    }

    #[test]
    fn test_pin_confirm_flow() {
        let mut files = vec![make_file("1_1", "", "")];
        set_pin_pending(&mut files, "1_1");
        assert_eq!(files[0].pin_status, ToggleStatus::Pending);
        assert_eq!(files[0].pin_status.as_attr(), "0");
        apply_pin_confirmed(&mut files, "1_1", true);
        assert!(files[0].pinned);
        assert_eq!(files[0].pin_status.as_attr(), "1");
    }

    #[test]
    fn test_initial_dot_classes() {
        let mut entry = FileEntry {
            ino_id: "1_1".into(),
            name: "a".into(),
            tag: "t".into(),
            note: "<p>x</p>".into(),
            color: 3,
            pinned: false,
            active: false,
        };
        assert_eq!(FileState::from(entry.clone()).dot.class(), "color_blue_dot");
        entry.color = 0;
        assert_eq!(FileState::from(entry).dot.class(), "color_default_dot");
    }
}
