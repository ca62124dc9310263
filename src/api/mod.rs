//! Server Bindings
//!
//! HTTP calls to the Filegai server, organized by domain. Replies all go
//! through the `!!` protocol checks in [`protocol`].

mod note;
mod rename;
mod shortcut;
pub mod protocol;

pub use note::*;
pub use protocol::ApiError;
pub use rename::*;
pub use shortcut::*;

use gloo_net::http::Request;

/// Fire a GET and hand back (status ok, body text)
async fn get_text(url: &str) -> Result<(bool, String), ApiError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let ok = resp.ok();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((ok, body))
}

/// POST an urlencoded form
async fn post_form(url: &str, fields: &[(&str, &str)]) -> Result<(bool, String), ApiError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| ApiError::Transport("form encoding unavailable".to_string()))?;
    for (key, value) in fields {
        params.append(key, value);
    }
    let body = String::from(params.to_string());

    let resp = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let ok = resp.ok();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((ok, text))
}
