// File: ./src/config.rs
use crate::schedule::{DateWindow, ScheduleConfig};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub roster: Vec<String>,
    pub group1: Vec<String>,
    pub group2: Vec<String>,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Roster member holding trash duty on week 0.
    pub trash_anchor: String,
    pub vacuum_stagger: usize,

    /// Object-store listing endpoint. Empty string = offline.
    pub storage_url: String,
    /// Page the QR code links to.
    pub upload_url: String,
    pub qr_size: u32,
    pub list_refresh_secs: u64,
    pub image_cycle_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        // The Fall 2025 house setup.
        Self {
            roster: names(&["Leo", "Phil", "Karti", "Andrew", "Eli", "Mitchell", "Hall"]),
            group1: names(&["Leo", "Phil", "Karti", "Andrew"]),
            group2: names(&["Eli", "Mitchell", "Hall"]),
            window_start: NaiveDate::from_ymd_opt(2025, 8, 26).unwrap(),
            window_end: NaiveDate::from_ymd_opt(2025, 12, 5).unwrap(),
            trash_anchor: "Hall".to_string(),
            vacuum_stagger: 3,
            storage_url: String::new(),
            upload_url: String::new(),
            qr_size: 200,
            list_refresh_secs: 60,
            image_cycle_secs: 20,
        }
    }
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        if let Some(proj) = ProjectDirs::from("com", "chorecast", "chorecast") {
            return Some(proj.config_dir().join("config.toml"));
        }
        None
    }

    pub fn load() -> Result<Self> {
        let path = Self::get_path().context("No config directory")?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::get_path().context("No config directory")?;
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validate and resolve the name-based config into the index-based
    /// calculator configuration.
    pub fn schedule(&self) -> Result<ScheduleConfig> {
        if self.roster.is_empty() {
            bail!("Roster is empty");
        }
        if self.window_end < self.window_start {
            bail!("Window ends before it starts");
        }

        let group1 = self.resolve_group(&self.group1, "group1")?;
        let group2 = self.resolve_group(&self.group2, "group2")?;
        if group1.iter().any(|i| group2.contains(i)) {
            bail!("group1 and group2 overlap");
        }
        if group1.len() + group2.len() != self.roster.len() {
            bail!("Groups do not cover the roster");
        }

        let trash_anchor = self
            .roster
            .iter()
            .position(|n| *n == self.trash_anchor)
            .with_context(|| format!("Trash anchor '{}' is not in the roster", self.trash_anchor))?;

        Ok(ScheduleConfig {
            roster: self.roster.clone(),
            group1,
            group2,
            window: DateWindow {
                start: self.window_start,
                end: self.window_end,
            },
            trash_anchor,
            vacuum_stagger: self.vacuum_stagger,
        })
    }

    fn resolve_group(&self, group: &[String], label: &str) -> Result<Vec<usize>> {
        if group.is_empty() {
            bail!("{} is empty", label);
        }
        group
            .iter()
            .map(|name| {
                self.roster
                    .iter()
                    .position(|n| n == name)
                    .with_context(|| format!("{}: '{}' is not in the roster", label, name))
            })
            .collect()
    }
}
