//! Rename Dialog Component
//!
//! Splits the current name into prefix and extension fields, posts the
//! rename, and hides itself as soon as the request is on its way. The
//! display name comes from the server's reply, not from the fields.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_draggable as draggable;

use crate::alert::alert;
use crate::api::{self, RenameForm};
use crate::components::note_dialog::dialog_position;
use crate::context::use_app_context;
use crate::filename;
use crate::store::{self, use_page_store, PageStateStoreFields};

#[component]
pub fn RenameDialog() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();
    let (visible, set_visible) = signal(false);
    let (target, set_target) = signal(None::<String>);
    let (new_name, set_new_name) = signal(String::new());
    let (new_ext, set_new_ext) = signal(String::new());
    let drag = draggable::create_drag_signals();
    draggable::bind_global_handlers(drag);

    Effect::new(move |_| {
        let Some(req) = ctx.rename_request.get() else {
            return;
        };
        let ino_id = req.ino_id;

        let (vw, vh) = draggable::viewport_size();
        let (left, top) = dialog_position(false, vw, vh);
        draggable::place(&drag, left, top);

        // Prefill only when aimed at a different file, so edited fields
        // survive a close-and-reopen.
        if target.get_untracked().as_deref() != Some(ino_id.as_str()) {
            let old_name = store
                .files()
                .read_untracked()
                .iter()
                .find(|f| f.ino_id == ino_id)
                .map(|f| f.name.trim().to_string())
                .unwrap_or_default();
            set_new_name.set(filename::name_prefix(&old_name).to_string());
            set_new_ext.set(filename::name_postfix(&old_name).to_string());
            set_target.set(Some(ino_id));
        }

        set_visible.set(true);
    });

    let on_submit = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let Some(ino_id) = target.get_untracked() else {
            return;
        };
        let name = new_name.get_untracked();
        let ext = new_ext.get_untracked();
        spawn_local(async move {
            let form = RenameForm {
                ino_id: &ino_id,
                new_name: &name,
                new_name_ext: &ext,
            };
            match api::rename(&ino_id, &form).await {
                Ok(display_name) => {
                    let mut files = store.files().write();
                    store::apply_renamed(&mut files, &ino_id, &display_name);
                }
                Err(e) => alert(&format!("rename failed:{}", e.payload())),
            }
        });
        set_visible.set(false);
    };

    let dialog_style = move || {
        let display = if visible.get() { "block" } else { "none" };
        format!("{} display: {};", draggable::position_style(&drag), display)
    };

    view! {
        <div id="rename_dialog" class="dialog rename-dialog" style=dialog_style>
            <div class="dialog-header" on:mousedown=draggable::make_on_header_mousedown(drag)>
                <span id="dialog_rename_title" class="dialog-title">"Change the old name"</span>
                <button type="button" class="close2" on:click=move |_| set_visible.set(false)>
                    "×"
                </button>
            </div>
            <form on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <input
                    id="new_name"
                    type="text"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    id="new_name_ext"
                    type="text"
                    prop:value=move || new_ext.get()
                    on:input=move |ev| set_new_ext.set(event_target_value(&ev))
                />
                <div class="dialog-buttons">
                    <button id="submit_rename" on:click=on_submit>
                        "Rename"
                    </button>
                    <button type="button" class="buttonCancel" on:click=move |_| set_visible.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
