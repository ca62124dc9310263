//! File Action Menu Component
//!
//! Hover menu on each file row: Add/Edit, Del, Rename, Pin/Unpin.
//! Opens after a 1.5 s hover delay; Del asks for confirmation
//! before firing.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::alert::{alert, confirm};
use crate::api::{self, ShortcutAction};
use crate::context::use_app_context;
use crate::store::{self, use_page_store, PageStateStoreFields, PageStore};

const HOVER_OPEN_DELAY_MS: u32 = 1_500;

#[component]
pub fn FileActionMenu(ino_id: String) -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    let id = StoredValue::new(ino_id);

    let cancel_pending = move || {
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    };

    let on_enter = move |_| {
        cancel_pending();
        let timer = Timeout::new(HOVER_OPEN_DELAY_MS, move || set_open.set(true));
        pending.set_value(Some(timer));
    };

    let on_leave = move |_| {
        cancel_pending();
        set_open.set(false);
    };

    let on_add_edit = move |_| {
        set_open.set(false);
        ctx.open_note_dialog(&id.get_value());
    };

    let on_rename = move |_| {
        set_open.set(false);
        ctx.open_rename_dialog(&id.get_value());
    };

    let on_delete = move |_| {
        set_open.set(false);
        if confirm("Your are DELETING this note, ARE YOU SURE?") {
            let ino_id = id.get_value();
            spawn_local(async move {
                delete_note(store, ino_id).await;
            });
        }
    };

    let on_pin = move |_| {
        set_open.set(false);
        let ino_id = id.get_value();
        spawn_local(async move {
            toggle_file_pin(store, ino_id).await;
        });
    };

    view! {
        <span
            class="file_option"
            {leptos::tachys::html::attribute::custom::custom_attribute("value", move || id.get_value())}
            on:mouseenter=on_enter
            on:mouseleave=on_leave
        >
            <span class="file-option-trigger">"···"</span>
            <Show when=move || open.get()>
                <ul class="dropdown-list file-action-list">
                    <li class="dropdown-item" on:click=on_add_edit>
                        <span>"Add/Edit"</span>
                    </li>
                    <li class="dropdown-item" on:click=on_delete>
                        <span>"Del"</span>
                    </li>
                    <li class="dropdown-item" on:click=on_rename>
                        <span>"Rename"</span>
                    </li>
                    <li class="dropdown-item" on:click=on_pin>
                        <span>"Pin/Unpin"</span>
                    </li>
                </ul>
            </Show>
        </span>
    }
}

/// Fire the delete and clear whichever row the reply names
async fn delete_note(store: PageStore, ino_id: String) {
    match api::del_note(&ino_id).await {
        Ok(response_id) => {
            let files_field = store.files();
            let mut files = files_field.write();
            store::apply_note_deleted(&mut files, &response_id);
        }
        Err(e) => alert(&format!("failed:{}", e.payload())),
    }
}

/// Toggle the file's workspace pin, committing only on a confirmed reply
async fn toggle_file_pin(store: PageStore, ino_id: String) {
    let Some(pinned) = store
        .files()
        .read_untracked()
        .iter()
        .find(|f| f.ino_id == ino_id)
        .map(|f| f.pinned)
    else {
        return;
    };
    let action = ShortcutAction::for_pinned(pinned);
    {
        let files_field = store.files();
        let mut files = files_field.write();
        store::set_pin_pending(&mut files, &ino_id);
    }
    match api::toggle_shortcut(&ino_id, action).await {
        Ok(()) => {
            let files_field = store.files();
            let mut files = files_field.write();
            store::apply_pin_confirmed(&mut files, &ino_id, action.resulting_pinned());
        }
        Err(e) => {
            // status stays Pending; the icon keeps its old state
            web_sys::console::warn_1(&format!("shortcut toggle failed: {}", e.payload()).into());
        }
    }
}
