//! Leptos Draggable Dialogs
//!
//! Mouse-driven repositioning for floating dialogs.
//! Grab the header, move the dialog; release anywhere.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Position and drag state for one dialog
#[derive(Clone, Copy)]
pub struct DragSignals {
    /// Current dialog position (CSS px, relative to viewport)
    pub left_read: ReadSignal<i32>,
    pub left_write: WriteSignal<i32>,
    pub top_read: ReadSignal<i32>,
    pub top_write: WriteSignal<i32>,
    /// Pointer offset inside the dialog while dragging (None = not dragging)
    pub grab_read: ReadSignal<Option<(i32, i32)>>,
    pub grab_write: WriteSignal<Option<(i32, i32)>>,
}

pub fn create_drag_signals() -> DragSignals {
    let (left_read, left_write) = signal(0i32);
    let (top_read, top_write) = signal(0i32);
    let (grab_read, grab_write) = signal(None::<(i32, i32)>);
    DragSignals {
        left_read,
        left_write,
        top_read,
        top_write,
        grab_read,
        grab_write,
    }
}

/// Place the dialog at an absolute viewport position
pub fn place(drag: &DragSignals, left: i32, top: i32) {
    drag.left_write.set(left);
    drag.top_write.set(top);
}

/// Inline style string for the dialog element
pub fn position_style(drag: &DragSignals) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px;",
        drag.left_read.get(),
        drag.top_read.get()
    )
}

/// Viewport size in CSS px, (width, height); (0, 0) outside a browser
pub fn viewport_size() -> (i32, i32) {
    let win = web_sys::window();
    let width = win
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as i32;
    let height = win
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as i32;
    (width, height)
}

/// Mousedown handler for the dialog header: starts a drag,
/// remembering where inside the dialog the pointer grabbed it.
pub fn make_on_header_mousedown(drag: DragSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let dx = ev.client_x() - drag.left_read.get_untracked();
        let dy = ev.client_y() - drag.top_read.get_untracked();
        drag.grab_write.set(Some((dx, dy)));
        ev.prevent_default();
    }
}

/// Bind document-level mousemove/mouseup for one dialog.
/// Call once when the dialog component is created.
pub fn bind_global_handlers(drag: DragSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some((dx, dy)) = drag.grab_read.get_untracked() {
            drag.left_write.set(ev.client_x() - dx);
            drag.top_write.set(ev.client_y() - dy);
        }
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if drag.grab_read.get_untracked().is_some() {
            drag.grab_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}
