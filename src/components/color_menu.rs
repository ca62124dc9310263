//! Color Menu Component
//!
//! Dropdown of the seven note colors. Selection updates the store's
//! current color; the trigger dot always shows the picked color.

use leptos::prelude::*;

use crate::color;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ColorMenu() -> impl IntoView {
    let store = use_page_store();
    let (open, set_open) = signal(false);

    let current_dot = move || color::dot_class(store.current_color().get());

    view! {
        <div class="dropdown color-menu" on:mouseleave=move |_| set_open.set(false)>
            <button
                id="color_menu"
                type="button"
                class="dropdown-trigger"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <img id="color_tag" class=current_dot src="/public/css/blank.png" />
            </button>
            <Show when=move || open.get()>
                <ul class="dropdown-list color-list">
                    <For
                        each=move || color::COLORS.iter().copied()
                        key=|(name, _)| *name
                        children=move |(_, code)| {
                            view! {
                                <li
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        store.current_color().set(code);
                                        set_open.set(false);
                                    }
                                >
                                    <img
                                        id=format!("color_tag_{}", code)
                                        class=color::dot_class(code)
                                        src="/public/css/blank.png"
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
