// File: ./src/qr.rs
// The upload QR code is rendered by an external endpoint; we only build the
// request URL and cache the returned PNG.
use crate::cache::Cache;
use crate::slideshow::ImageStore;
use crate::urlenc::encode_component;
use std::path::PathBuf;

pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

// Bump to force QR consumers past any cached copy of the upload page.
const QR_VER: &str = "v1";

/// URL of a `size` x `size` QR image pointing at `upload_url`.
pub fn qr_image_url(upload_url: &str, size: u32) -> String {
    let target = format!("{}?v={}", upload_url, QR_VER);
    format!(
        "{}?size={}x{}&data={}",
        QR_ENDPOINT,
        size,
        size,
        encode_component(&target)
    )
}

/// Download the QR PNG and store it in the cache dir. Returns the path for
/// the UI to point at.
pub async fn fetch_to_cache(
    store: &ImageStore,
    upload_url: &str,
    size: u32,
) -> Result<Option<PathBuf>, String> {
    if upload_url.is_empty() {
        return Ok(None);
    }
    let bytes = store.fetch_bytes(&qr_image_url(upload_url, size)).await?;
    Cache::save_qr(&bytes).map_err(|e| e.to_string())
}
