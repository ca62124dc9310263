//! Folder Pin Component
//!
//! Workspace shortcut star for the folder being listed. The icon commits
//! to its new state only once the server confirms the toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ShortcutAction};
use crate::store::{use_page_store, PageStateStoreFields, PageStore, ToggleStatus};

pub fn folder_icon_class(pinned: bool) -> &'static str {
    if pinned {
        "layui-icon layui-icon-rate-solid"
    } else {
        "layui-icon layui-icon-rate"
    }
}

#[component]
pub fn FolderPin() -> impl IntoView {
    let store = use_page_store();

    let on_click = move |_| {
        spawn_local(async move {
            toggle_folder_pin(store).await;
        });
    };

    view! {
        <button
            id="add_shortcut"
            type="button"
            class="folder-pin"
            data-status=move || store.folder_status().get().as_attr()
            on:click=on_click
        >
            <i
                id=move || format!("shortcut_icon_{}", store.dev_ino().get())
                class=move || folder_icon_class(store.folder_pinned().get())
            ></i>
        </button>
    }
}

async fn toggle_folder_pin(store: PageStore) {
    let dev_ino = store.dev_ino().get_untracked();
    let action = ShortcutAction::for_pinned(store.folder_pinned().get_untracked());
    store.folder_status().set(ToggleStatus::Pending);
    match api::toggle_shortcut(&dev_ino, action).await {
        Ok(()) => {
            store.folder_status().set(ToggleStatus::Confirmed);
            store.folder_pinned().set(action.resulting_pinned());
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("shortcut toggle failed: {}", e.payload()).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_icon_class() {
        assert_eq!(folder_icon_class(true), "layui-icon layui-icon-rate-solid");
        assert_eq!(folder_icon_class(false), "layui-icon layui-icon-rate");
    }
}
