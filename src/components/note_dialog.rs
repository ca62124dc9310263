//! Note Dialog Component
//!
//! Opens the rich-text note editor over a file row, reuses in-editor
//! content when the same file is reopened, and posts the note to the
//! server unless the body is unchanged since load or last save.
//!
//! The dialog element stays mounted (TinyMCE binds to the textarea once);
//! visibility is a display toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_draggable as draggable;

use crate::alert::alert;
use crate::api::{self, NoteAction, NoteForm};
use crate::components::ColorMenu;
use crate::context::use_app_context;
use crate::digest::content_digest;
use crate::editor;
use crate::store::{self, use_page_store, PageStateStoreFields, PageStore};

/// What a submit should do
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitPlan {
    /// Body unchanged since load/save; counts as already saved
    Unchanged,
    Post { action: NoteAction, target: String },
}

/// A file with no persisted display id gets `add_note` against its
/// container id; one with a display id gets `edit_note` against that id.
pub fn plan_submit(ino_id: &str, display_tag: &str, new_digest: &str, old_digest: &str) -> SubmitPlan {
    if new_digest == old_digest {
        return SubmitPlan::Unchanged;
    }
    if display_tag.is_empty() {
        SubmitPlan::Post {
            action: NoteAction::Add,
            target: ino_id.to_string(),
        }
    } else {
        SubmitPlan::Post {
            action: NoteAction::Edit,
            target: display_tag.to_string(),
        }
    }
}

/// Dialog placement as (left, top). The wide note dialog sits at a tenth
/// of the viewport; narrow dialogs in the top third, 200px left of center.
pub fn dialog_position(wide: bool, viewport_w: i32, viewport_h: i32) -> (i32, i32) {
    if wide {
        (viewport_w / 10, viewport_h / 10)
    } else {
        (viewport_w / 2 - 200, viewport_h / 3)
    }
}

#[component]
pub fn NoteDialog() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();
    let (visible, set_visible) = signal(false);
    let (title, set_title) = signal(String::new());
    // ino_id the editor currently holds content for
    let (target, set_target) = signal(None::<String>);
    let saved_digest = RwSignal::new(String::new());
    let drag = draggable::create_drag_signals();
    draggable::bind_global_handlers(drag);

    Effect::new(move |_| {
        let Some(req) = ctx.note_request.get() else {
            return;
        };
        let ino_id = req.ino_id;

        let (vw, vh) = draggable::viewport_size();
        let (left, top) = dialog_position(true, vw, vh);
        draggable::place(&drag, left, top);

        let (name, note) = store
            .files()
            .read_untracked()
            .iter()
            .find(|f| f.ino_id == ino_id)
            .map(|f| (f.name.clone(), f.note.clone()))
            .unwrap_or_default();

        // Reopening the same file keeps whatever is in the editor, so an
        // interrupted edit can be resumed without a reload.
        if target.get_untracked().as_deref() != Some(ino_id.as_str()) {
            let trimmed = note.trim().to_string();
            editor::set_note_content(&trimmed);
            saved_digest.set(content_digest(&trimmed));
            set_target.set(Some(ino_id));
        }

        set_title.set(name.trim().to_string());
        set_visible.set(true);
    });

    let submit = move |keep_open: bool| {
        let Some(ino_id) = target.get_untracked() else {
            return;
        };
        if !keep_open {
            set_visible.set(false);
        }
        spawn_local(async move {
            let saved = submit_note(store, saved_digest, &ino_id).await;
            if keep_open {
                if saved {
                    alert("done");
                } else {
                    alert("not saved!");
                }
            }
        });
    };

    let dialog_style = move || {
        let display = if visible.get() { "block" } else { "none" };
        format!("{} display: {};", draggable::position_style(&drag), display)
    };

    view! {
        <div id="add_note_dialog" class="dialog note-dialog" style=dialog_style>
            <div class="dialog-header" on:mousedown=draggable::make_on_header_mousedown(drag)>
                <span id="dialog_title" class="dialog-title">{title}</span>
                <button type="button" class="close2" on:click=move |_| set_visible.set(false)>
                    "×"
                </button>
            </div>
            <form on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                <div class="dialog-toolbar">
                    <ColorMenu />
                </div>
                <textarea id="note_content"></textarea>
                <div class="dialog-buttons">
                    <button
                        id="submit_add"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            submit(false);
                        }
                    >
                        "Submit"
                    </button>
                    <button
                        id="save"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            submit(true);
                        }
                    >
                        "Save"
                    </button>
                    <button type="button" class="buttonCancel" on:click=move |_| set_visible.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Post the note if dirty. True means saved or nothing to save; false
/// means a save was attempted and rejected.
async fn submit_note(store: PageStore, saved_digest: RwSignal<String>, ino_id: &str) -> bool {
    let Some(tag) = store
        .files()
        .read_untracked()
        .iter()
        .find(|f| f.ino_id == ino_id)
        .map(|f| f.tag.clone())
    else {
        return false;
    };
    let color = store.current_color().get_untracked();
    let content = editor::note_content();
    let new_digest = content_digest(&content);

    match plan_submit(ino_id, &tag, &new_digest, &saved_digest.get_untracked()) {
        SubmitPlan::Unchanged => true,
        SubmitPlan::Post { action, target } => {
            let form = NoteForm {
                ino_id,
                tag: &tag,
                note: &content,
                color,
            };
            match api::post_note(action, &target, &form).await {
                Ok(display_tag) => {
                    {
                        let files_field = store.files();
                        let mut files = files_field.write();
                        store::apply_note_saved(&mut files, ino_id, &content, &display_tag, color);
                    }
                    saved_digest.set(new_digest);
                    true
                }
                Err(e) => {
                    alert(&format!("Add Note failed:{}", e.payload()));
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_unchanged_skips_network() {
        let plan = plan_submit("1_9", "ab12", "samedigest", "samedigest");
        assert_eq!(plan, SubmitPlan::Unchanged);
    }

    #[test]
    fn test_plan_add_when_no_display_id() {
        let plan = plan_submit("1_9", "", "new", "old");
        assert_eq!(
            plan,
            SubmitPlan::Post {
                action: NoteAction::Add,
                target: "1_9".to_string()
            }
        );
    }

    #[test]
    fn test_plan_edit_targets_display_id() {
        let plan = plan_submit("1_9", "ab12", "new", "old");
        assert_eq!(
            plan,
            SubmitPlan::Post {
                action: NoteAction::Edit,
                target: "ab12".to_string()
            }
        );
    }

    // Unchanged wins even for a never-persisted note: clearing an empty
    // editor and submitting stays local.
    #[test]
    fn test_unchanged_beats_add() {
        let digest = crate::digest::content_digest("");
        assert_eq!(plan_submit("1_9", "", &digest, &digest), SubmitPlan::Unchanged);
    }

    #[test]
    fn test_dialog_position_modes() {
        assert_eq!(dialog_position(true, 1000, 800), (100, 80));
        assert_eq!(dialog_position(false, 1000, 900), (300, 300));
    }
}
