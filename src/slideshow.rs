// File: ./src/slideshow.rs
// Lists background images from a remote object store and holds the
// display-cycling state.
use crate::cache::Cache;
use crate::urlenc::encode_component;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    pub url: String,
}

// Object-store listing shape: {"items": [{"name": "..."}]}
#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    items: Vec<StoredObject>,
}

#[derive(Deserialize)]
struct StoredObject {
    name: String,
}

#[derive(Clone, Debug)]
pub struct ImageStore {
    client: Option<reqwest::Client>,
    list_url: String,
}

impl ImageStore {
    pub fn new(list_url: &str) -> Result<Self, String> {
        if list_url.is_empty() {
            return Ok(Self {
                client: None,
                list_url: String::new(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client: Some(client),
            list_url: list_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the store and turn each object into a media download URL.
    pub async fn list_images(&self) -> Result<Vec<ImageEntry>, String> {
        if let Some(client) = &self.client {
            let resp = client
                .get(&self.list_url)
                .send()
                .await
                .map_err(|e| format!("LIST: {}", e))?
                .error_for_status()
                .map_err(|e| format!("LIST: {}", e))?;

            let listing: ListResponse = resp.json().await.map_err(|e| format!("LIST: {}", e))?;

            let entries = listing
                .items
                .into_iter()
                .map(|obj| {
                    let url = format!(
                        "{}/{}?alt=media",
                        self.list_url,
                        encode_component(&obj.name)
                    );
                    ImageEntry {
                        name: obj.name,
                        url,
                    }
                })
                .collect();
            Ok(entries)
        } else {
            Err("Offline".to_string())
        }
    }

    /// List the store, falling back to the on-disk cache when unreachable.
    /// Returns the entries plus a warning for the status line, if any.
    pub async fn list_with_fallback(&self) -> (Vec<ImageEntry>, Option<String>) {
        match self.list_images().await {
            Ok(entries) => {
                let _ = Cache::save_images(&self.list_url, &entries);
                (entries, None)
            }
            Err(e) => {
                let cached = Cache::load_images(&self.list_url).unwrap_or_default();
                (cached, Some(format!("Offline Mode ({})", e)))
            }
        }
    }

    /// Raw GET, used for the QR image.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, String> {
        if let Some(client) = &self.client {
            let resp = client
                .get(url)
                .send()
                .await
                .map_err(|e| format!("GET: {}", e))?
                .error_for_status()
                .map_err(|e| format!("GET: {}", e))?;
            let bytes = resp.bytes().await.map_err(|e| format!("GET: {}", e))?;
            Ok(bytes.to_vec())
        } else {
            Err("Offline".to_string())
        }
    }
}

/// Which image the kiosk is currently showing.
#[derive(Debug, Default)]
pub struct Slideshow {
    pub entries: Vec<ImageEntry>,
    pub current: usize,
}

impl Slideshow {
    pub fn set_entries(&mut self, entries: Vec<ImageEntry>) {
        self.entries = entries;
        if self.current >= self.entries.len() {
            self.current = 0;
        }
    }

    pub fn advance(&mut self) {
        if !self.entries.is_empty() {
            self.current = (self.current + 1) % self.entries.len();
        }
    }

    pub fn current_entry(&self) -> Option<&ImageEntry> {
        self.entries.get(self.current)
    }
}
