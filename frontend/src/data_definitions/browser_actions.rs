//! Small window helpers: confirm dialog, clipboard, page origin.

use anyhow::{Context, anyhow};


pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let promise = web_sys::window().context("no window")?.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("clipboard rejected: {e:?}"))?;
    Ok(())
}

pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
