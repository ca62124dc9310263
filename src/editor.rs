//! Rich-Text Editor Binding
//!
//! Bindings to the TinyMCE instance the page loads alongside the app.
//! The editor owns image upload (`/image_upload`) end to end; this crate
//! only reads and writes the note body.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Element id of the note body field
pub const NOTE_EDITOR_ID: &str = "note_content";

#[wasm_bindgen]
extern "C" {
    /// A live TinyMCE editor instance
    pub type Editor;

    #[wasm_bindgen(js_namespace = tinymce)]
    fn init(config: JsValue);

    #[wasm_bindgen(js_namespace = tinymce, js_name = get)]
    fn get_editor(id: &str) -> Option<Editor>;

    #[wasm_bindgen(method, js_name = getContent)]
    fn get_content(this: &Editor) -> String;

    #[wasm_bindgen(method, js_name = setContent)]
    fn set_content(this: &Editor, html: &str);
}

/// Init options handed to `tinymce.init`
#[derive(Debug, Clone, Serialize)]
pub struct EditorConfig {
    pub selector: String,
    pub language: String,
    pub plugins: String,
    pub toolbar: String,
    pub fontsize_formats: String,
    pub autosave_ask_before_unload: bool,
    pub height: u32,
    pub content_css: String,
    pub images_upload_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            selector: format!("#{}", NOTE_EDITOR_ID),
            language: "zh_CN".to_string(),
            plugins: "importcss print preview searchreplace autolink directionality \
                      visualblocks visualchars fullscreen image link template code \
                      codesample table charmap hr pagebreak nonbreaking anchor \
                      insertdatetime advlist lists wordcount imagetools textpattern \
                      paste emoticons autosave"
                .to_string(),
            toolbar: "code undo redo | formatselect styleselect forecolor backcolor \
                      image bold italic underline removeformat | blockquote subscript \
                      superscript | alignleft aligncenter alignright lineheight | \
                      strikethrough link fontselect fontsizeselect bullist numlist | \
                      table charmap hr pagebreak insertdatetime | fullscreen"
                .to_string(),
            fontsize_formats: "12px 14px 16px 18px 24px 36px 48px 56px 72px".to_string(),
            autosave_ask_before_unload: true,
            height: 350,
            content_css: "/public/css/editor.css".to_string(),
            images_upload_url: "/image_upload".to_string(),
        }
    }
}

/// Initialize the note editor; call once after mount
pub fn init_note_editor() {
    match serde_wasm_bindgen::to_value(&EditorConfig::default()) {
        Ok(config) => init(config),
        Err(e) => web_sys::console::error_1(&format!("editor init failed: {}", e).into()),
    }
}

/// Current editor HTML; empty when the instance is not up yet
pub fn note_content() -> String {
    get_editor(NOTE_EDITOR_ID)
        .map(|editor| editor.get_content())
        .unwrap_or_default()
}

pub fn set_note_content(html: &str) {
    if let Some(editor) = get_editor(NOTE_EDITOR_ID) {
        editor.set_content(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_note_field() {
        let config = EditorConfig::default();
        assert_eq!(config.selector, "#note_content");
        assert_eq!(config.images_upload_url, "/image_upload");
        assert_eq!(config.height, 350);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"autosave_ask_before_unload\":true"));
    }
}
