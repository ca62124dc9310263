//! Blocking User Prompts
//!
//! Failures surface as modal alerts carrying the server's raw reply;
//! delete asks for confirmation first.

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
