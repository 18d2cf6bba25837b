//! JSON values in `localStorage`.

use anyhow::{Context, anyhow};
use common::file_name::{DownloadHistory, DownloadRecord};
use dioxus::logger::tracing;
use serde::{Serialize, de::DeserializeOwned};


pub const DOWNLOAD_HISTORY_KEY: &str = "downloadHistory";

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    web_sys::window()
        .context("no window")?
        .local_storage()
        .map_err(|e| anyhow!("localStorage rejected: {e:?}"))?
        .context("localStorage is not available")
}

/// Reads and decodes `key`. Entries that no longer decode are removed so the
/// next read starts clean.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = match local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!("cannot read {key}: {e:#}");
            return None;
        }
    };
    let raw = storage.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("dropping unreadable {key} entry: {e}");
            let _ = storage.remove_item(key);
            None
        }
    }
}

pub fn write_json<T: Serialize>(key: &str, value: &T) -> anyhow::Result<()> {
    let raw = serde_json::to_string(value)?;
    local_storage()?
        .set_item(key, &raw)
        .map_err(|e| anyhow!("cannot store {key}: {e:?}"))
}

pub fn remove(key: &str) {
    let removed = local_storage().and_then(|s| s.remove_item(key).map_err(|e| anyhow!("{e:?}")));
    if let Err(e) = removed {
        tracing::warn!("cannot remove {key}: {e:#}");
    }
}

pub fn download_history() -> DownloadHistory {
    read_json(DOWNLOAD_HISTORY_KEY).unwrap_or_default()
}

pub fn record_download(file_name: &str, size: Option<u64>) {
    let mut history = download_history();
    history.record(DownloadRecord {
        file_name: file_name.to_string(),
        timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        size,
    });
    if let Err(e) = write_json(DOWNLOAD_HISTORY_KEY, &history) {
        tracing::warn!("download history not saved: {e:#}");
    }
}
