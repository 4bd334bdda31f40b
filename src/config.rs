//! Loading of the tracked repository list (`enablers.json`).
//!
//! The file is a JSON array of objects with `Enabler`, `Owner` and `Repo`
//! keys. Loading never fails the run: a missing or unreadable file yields an
//! empty list, and individual malformed entries are skipped.
use std::{fs, path::Path};

use log::*;
use serde::Deserialize;

use crate::forge::types::RepositoryRef;

/// Default repository list filename.
pub const DEFAULT_REPOS_FILE: &str = "enablers.json";

/// A repository whose authors (and whose forks' authors) are collected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedRepository {
    /// Human readable label, reported only.
    #[serde(rename = "Enabler")]
    pub label: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Repo")]
    pub repo: String,
}

impl TrackedRepository {
    pub fn repository_ref(&self) -> RepositoryRef {
        RepositoryRef::new(&self.owner, &self.repo)
    }
}

/// Reads the tracked repository list from `path`.
pub fn load_tracked_repositories(path: &Path) -> Vec<TrackedRepository> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            error!("failed to open {}: {err}", path.display());
            return vec![];
        }
    };

    info!("successfully opened {}", path.display());

    parse_tracked_repositories(&content)
}

/// Parses a repository list, keeping every entry that deserializes.
pub fn parse_tracked_repositories(content: &str) -> Vec<TrackedRepository> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to parse repository list: {err}");
            return vec![];
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<TrackedRepository>(entry) {
                Ok(tracked) => Some(tracked),
                Err(err) => {
                    warn!("skipping repository list entry {index}: {err}");
                    None
                }
            }
        })
        .collect()
}
