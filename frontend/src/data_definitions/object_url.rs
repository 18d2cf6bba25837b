//! Saving and viewing downloaded bytes through blob URLs.

use anyhow::{Context, anyhow};
use dioxus::logger::tracing;
use gateway::DownloadedFile;
use wasm_bindgen::{JsCast, JsValue};


/// How long a blob opened in a new tab stays addressable.
pub const VIEW_URL_GRACE_MS: u32 = 60_000;

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

/// A `blob:` URL that is revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn new(bytes: &[u8], content_type: &str) -> anyhow::Result<Self> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            tracing::warn!("could not revoke {}: {e:?}", self.url);
        }
    }
}

fn content_type(file: &DownloadedFile) -> &str {
    file.content_type.as_deref().unwrap_or("application/pdf")
}

/// Hands the bytes to the browser as a download named `file_name`.
pub fn save_file(file: &DownloadedFile, file_name: &str) -> anyhow::Result<()> {
    let url = ObjectUrl::new(&file.bytes, content_type(file))?;
    let document = web_sys::window().context("no window")?.document().context("no document")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);

    let body = document.body().context("no body")?;
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();
    tracing::info!("saved {file_name} ({} bytes)", file.bytes.len());
    Ok(())
}

/// Opens the bytes in a new tab. The URL outlives this call by
/// [`VIEW_URL_GRACE_MS`] so the tab can finish loading.
pub fn open_in_new_tab(file: &DownloadedFile) -> anyhow::Result<()> {
    let url = ObjectUrl::new(&file.bytes, content_type(file))?;
    web_sys::window()
        .context("no window")?
        .open_with_url_and_target(url.as_str(), "_blank")
        .map_err(js_error)?;
    gloo_timers::callback::Timeout::new(VIEW_URL_GRACE_MS, move || drop(url)).forget();
    Ok(())
}
