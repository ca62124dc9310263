//! File Row Component
//!
//! One file of the listing: color dot, name, pin marker, hover action
//! menu and the (collapsible) note region. Everything is derived from
//! the store; element ids stay stable for the stylesheet.

use leptos::prelude::*;

use crate::color;
use crate::components::FileActionMenu;
use crate::store::{use_page_store, FileState, PageStateStoreFields};

pub fn pin_class(pinned: bool) -> &'static str {
    if pinned {
        "file-pin pinned"
    } else {
        "file-pin unpinned"
    }
}

/// Note region class: present notes are marked `note_visible`, and spread
/// open only while the page-wide toggle is expanded
pub fn note_region_class(note_visible: bool, expanded: bool) -> String {
    let mut class = String::from("note-region");
    if note_visible {
        class.push_str(" note_visible");
        if expanded {
            class.push_str(" layui-show");
        }
    }
    class
}

#[component]
pub fn FileRow(ino_id: String) -> impl IntoView {
    let store = use_page_store();
    let id = StoredValue::new(ino_id);

    let file = Memo::new(move |_| {
        store
            .files()
            .get()
            .into_iter()
            .find(|f| f.ino_id == id.get_value())
    });
    let field = move |pick: fn(&FileState) -> String| file.get().as_ref().map(pick).unwrap_or_default();

    let row_class = move || {
        if file.get().map(|f| f.active).unwrap_or(false) {
            "file-row active"
        } else {
            "file-row"
        }
    };
    let dot_class = move || {
        file.get()
            .map(|f| f.dot.class())
            .unwrap_or_else(|| color::DEFAULT_DOT_CLASS.to_string())
    };
    let pin = move || pin_class(file.get().map(|f| f.pinned).unwrap_or(false));
    let pin_status = move || {
        file.get()
            .map(|f| f.pin_status.as_attr())
            .unwrap_or("0")
    };
    let note_class = move || {
        note_region_class(
            file.get().map(|f| f.note_visible).unwrap_or(false),
            store.expanded().get(),
        )
    };

    view! {
        <div class=row_class>
            <div class="file-title">
                <span id=format!("item_color_{}", id.get_value())>
                    <img class=dot_class src="/public/css/blank.png" />
                </span>
                <span id=format!("filename_{}", id.get_value()) class="filename">
                    {move || field(|f| f.name.clone())}
                </span>
                <i
                    id=format!("pin_{}", id.get_value())
                    class=pin
                    data-status=pin_status
                ></i>
                <FileActionMenu ino_id=id.get_value() />
            </div>
            <div
                id=format!("item_{}", id.get_value())
                class=note_class
                {leptos::tachys::html::attribute::custom::custom_attribute("value", move || field(|f| f.tag.clone()))}
                inner_html=move || field(|f| f.note.clone())
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_class() {
        assert_eq!(pin_class(true), "file-pin pinned");
        assert_eq!(pin_class(false), "file-pin unpinned");
    }

    #[test]
    fn test_note_region_class() {
        assert_eq!(note_region_class(false, false), "note-region");
        assert_eq!(note_region_class(false, true), "note-region");
        assert_eq!(note_region_class(true, false), "note-region note_visible");
        assert_eq!(note_region_class(true, true), "note-region note_visible layui-show");
    }
}
