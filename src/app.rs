//! Filegai Frontend App
//!
//! Bootstraps page state from the server-embedded JSON block and lays
//! out the folder listing with its menus and dialogs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FileRow, FolderPin, NoteDialog, RenameDialog, ViewToggle, WorkspaceMenu};
use crate::context::AppContext;
use crate::editor;
use crate::models::PageData;
use crate::store::{PageState, PageStateStoreFields};

/// Parse the `#page_data` JSON block the server embeds in the document
pub fn read_page_data() -> Option<PageData> {
    let doc = web_sys::window()?.document()?;
    let node = doc.get_element_by_id("page_data")?;
    let raw = node.text_content()?;
    match serde_json::from_str(&raw) {
        Ok(page) => Some(page),
        Err(e) => {
            web_sys::console::error_1(&format!("bad page_data block: {}", e).into());
            None
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = read_page_data().unwrap_or_default();
    let store = Store::new(PageState::from_page(page));
    provide_context(store);
    provide_context(AppContext::new());

    // TinyMCE binds to the dialog textarea once the tree is mounted
    Effect::new(move |_| {
        editor::init_note_editor();
    });

    view! {
        <div class="list-page">
            <header class="toolbar">
                <WorkspaceMenu />
                <FolderPin />
                <ViewToggle />
            </header>

            <ul class="folder-list">
                <For
                    each=move || store.folders().get()
                    key=|folder| folder.ino_id.clone()
                    children=move |folder| {
                        view! {
                            <li class="folder-row">
                                <a href=folder.href class="folder-name">{folder.name}</a>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="file-list">
                <For
                    each=move || store.files().get()
                    key=|file| file.ino_id.clone()
                    children=move |file| {
                        view! { <FileRow ino_id=file.ino_id /> }
                    }
                />
            </div>

            <NoteDialog />
            <RenameDialog />
        </div>
    }
}
