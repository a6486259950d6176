// File: ./src/cache.rs
use crate::slideshow::ImageEntry;
use crate::storage::Disk;
use anyhow::Result;
use directories::ProjectDirs;
use std::collections::hash_map::DefaultHasher;
use std::env;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

pub struct Cache;

impl Cache {
    fn cache_dir() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(test_dir) = env::var("CHORECAST_TEST_DIR") {
            let path = PathBuf::from(test_dir);
            if !path.exists() {
                let _ = fs::create_dir_all(&path);
            }
            return Some(path);
        }

        if let Some(proj) = ProjectDirs::from("com", "chorecast", "chorecast") {
            let cache_dir = proj.cache_dir();
            if !cache_dir.exists() {
                let _ = fs::create_dir_all(cache_dir);
            }
            return Some(cache_dir.to_path_buf());
        }
        None
    }

    fn get_path(key: &str) -> Option<PathBuf> {
        let dir = Self::cache_dir()?;
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Some(dir.join(format!("images_{:x}.json", hasher.finish())))
    }

    pub fn save_images(key: &str, entries: &[ImageEntry]) -> Result<()> {
        if let Some(path) = Self::get_path(key) {
            Disk::with_lock(&path, || {
                let json = serde_json::to_string_pretty(entries)?;
                Disk::atomic_write(&path, json)
            })?;
        }
        Ok(())
    }

    pub fn load_images(key: &str) -> Result<Vec<ImageEntry>> {
        if let Some(path) = Self::get_path(key)
            && path.exists()
        {
            let json = fs::read_to_string(path)?;
            let entries: Vec<ImageEntry> = serde_json::from_str(&json)?;
            return Ok(entries);
        }
        Ok(vec![])
    }

    pub fn qr_path() -> Option<PathBuf> {
        Self::cache_dir().map(|d| d.join("upload_qr.png"))
    }

    pub fn save_qr(bytes: &[u8]) -> Result<Option<PathBuf>> {
        if let Some(path) = Self::qr_path() {
            Disk::atomic_write(&path, bytes)?;
            return Ok(Some(path));
        }
        Ok(None)
    }
}
