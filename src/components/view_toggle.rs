//! View Toggle Component
//!
//! One button spreading or folding every note region on the page.

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded {
        "收起"
    } else {
        "展开"
    }
}

#[component]
pub fn ViewToggle() -> impl IntoView {
    let store = use_page_store();

    view! {
        <button
            id="toggle_view"
            type="button"
            value=move || if store.expanded().get() { "1" } else { "0" }
            on:click=move |_| store.expanded().update(|v| *v = !*v)
        >
            {move || toggle_label(store.expanded().get())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(true), "收起");
        assert_eq!(toggle_label(false), "展开");
    }
}
