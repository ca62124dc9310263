//! Application Context
//!
//! Cross-component coordination via the Leptos Context API: the file
//! action menu asks dialogs to open through here.

use leptos::prelude::*;

/// One dialog open request. `seq` makes re-opening the same file after a
/// close observable to the dialog's effect.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogRequest {
    pub seq: u32,
    pub ino_id: String,
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub note_request: RwSignal<Option<DialogRequest>>,
    pub rename_request: RwSignal<Option<DialogRequest>>,
    seq: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            note_request: RwSignal::new(None),
            rename_request: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    fn next_seq(&self) -> u32 {
        self.seq.update(|s| *s += 1);
        self.seq.get_untracked()
    }

    pub fn open_note_dialog(&self, ino_id: &str) {
        let seq = self.next_seq();
        self.note_request.set(Some(DialogRequest {
            seq,
            ino_id: ino_id.to_string(),
        }));
    }

    pub fn open_rename_dialog(&self, ino_id: &str) {
        let seq = self.next_seq();
        self.rename_request.set(Some(DialogRequest {
            seq,
            ino_id: ino_id.to_string(),
        }));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
