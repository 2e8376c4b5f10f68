//! Usage record for previously inserted blocks.
//!
//! Persists the ordered list of inserted block type names to a JSON file.
//! The filter core reads this record to populate the recent tab; only the
//! session layer appends to it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default number of entries kept in the record.
const DEFAULT_CAP: usize = 20;

fn default_cap() -> usize {
    DEFAULT_CAP
}

/// Ordered record of inserted block type names, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Block type names, most recent first, no duplicates
    #[serde(default)]
    entries: Vec<String>,
    /// Map of block name to last-insert timestamp
    #[serde(default)]
    insert_timestamps: HashMap<String, String>,
    /// Maximum number of entries retained
    #[serde(default = "default_cap")]
    cap: usize,
}

impl Default for UsageRecord {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            insert_timestamps: HashMap::new(),
            cap: DEFAULT_CAP,
        }
    }
}

impl UsageRecord {
    /// Create an empty record with a custom retention cap.
    ///
    /// # Arguments
    /// * `cap` - Maximum number of entries to retain
    ///
    /// # Returns
    /// * `UsageRecord` - New empty record
    #[allow(dead_code)] // Convenient for constructing pre-capped records in tests and hosts
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            ..Self::default()
        }
    }

    /// Set the retention cap, trimming the record if needed.
    ///
    /// # Arguments
    /// * `cap` - Maximum number of entries to retain
    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap.max(1);
        self.entries.truncate(self.cap);
        self.insert_timestamps
            .retain(|n, _| self.entries.contains(n));
    }

    /// Load a usage record from file.
    ///
    /// # Arguments
    /// * `path` - Path to the usage JSON file
    ///
    /// # Returns
    /// * `Result<UsageRecord>` - Loaded record or error
    ///
    /// # Details
    /// If the file doesn't exist, returns an empty record.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read usage file: {}", path.display()))?;

        let record: UsageRecord =
            serde_json::from_str(&content).with_context(|| "Failed to parse usage file")?;

        Ok(record)
    }

    /// Save the usage record to file.
    ///
    /// # Arguments
    /// * `path` - Path to the usage JSON file
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Details
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create usage directory: {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize usage record")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write usage file: {}", path.display()))?;

        Ok(())
    }

    /// Record an insertion of the given block type.
    ///
    /// # Arguments
    /// * `name` - Block type name
    ///
    /// # Details
    /// Moves an already-present name to the front rather than duplicating it,
    /// stamps the insert time, and trims the record to its cap.
    pub fn record_insert(&mut self, name: &str) {
        self.entries.retain(|n| n != name);
        self.entries.insert(0, name.to_string());
        self.entries.truncate(self.cap);
        self.insert_timestamps
            .insert(name.to_string(), chrono::Utc::now().to_rfc3339());
        self.insert_timestamps
            .retain(|n, _| self.entries.contains(n));
    }

    /// Get the recorded names, most recent first.
    ///
    /// # Returns
    /// * `&[String]` - Ordered block type names
    pub fn names(&self) -> &[String] {
        &self.entries
    }

    /// Check whether a block type appears in the record.
    ///
    /// # Arguments
    /// * `name` - Block type name
    ///
    /// # Returns
    /// * `bool` - True if the name was recorded
    #[allow(dead_code)] // Useful for displaying a "recently used" marker in the menu
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|n| n == name)
    }

    /// Get the number of recorded names.
    #[allow(dead_code)] // Useful for displaying statistics in the UI
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record is empty.
    #[allow(dead_code)] // Useful for displaying statistics in the UI
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear the record.
    #[allow(dead_code)] // Useful for a future "clear recent" action
    pub fn clear(&mut self) {
        self.entries.clear();
        self.insert_timestamps.clear();
    }
}
