//! Workspace Menu Component
//!
//! Dropdown over the workspace shortcuts: pinned folders as a spread
//! group, pinned files behind a submenu, and the manage page link.

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn WorkspaceMenu() -> impl IntoView {
    let store = use_page_store();
    let (open, set_open) = signal(false);
    let (files_open, set_files_open) = signal(false);

    let close_all = move |_| {
        set_open.set(false);
        set_files_open.set(false);
    };

    view! {
        <div class="dropdown workspace-menu" on:mouseleave=close_all>
            <button
                id="btn_workspace"
                type="button"
                class="dropdown-trigger"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                "Workspace"
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown-list workspace-list">
                    <li class="dropdown-group-title">"Folders"</li>
                    <For
                        each=move || store.workspace_folders().get()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <li class="dropdown-item">
                                    <a href=entry.href>{entry.title}</a>
                                </li>
                            }
                        }
                    />
                    <li class="dropdown-divider"></li>
                    <li
                        class="dropdown-parent"
                        on:mouseenter=move |_| set_files_open.set(true)
                    >
                        <span>"Files"</span>
                        <Show when=move || files_open.get()>
                            <ul class="dropdown-sublist">
                                <For
                                    each=move || store.workspace_files().get()
                                    key=|entry| entry.id
                                    children=move |entry| {
                                        view! {
                                            <li class="dropdown-item">
                                                <a href=entry.href>{entry.title}</a>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </li>
                    <li class="dropdown-divider"></li>
                    <li class="dropdown-item">
                        <a href="/manange_shortcut">"Manage"</a>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
