//! Backup payloads for export and import.
//!
//! The backup format belongs to the API server; the client treats it as an
//! opaque JSON object and never interprets individual records. A local
//! file is fully parsed before any import request goes out, so a broken
//! file is reported on the spot and nothing reaches the network.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;

use crate::constants::BACKUP_FILE_PREFIX;
use crate::errors::{Error, Result};

/// Full backup payload as produced by `GET /export`.
///
/// Always a JSON object; unknown keys are preserved byte-for-byte so an
/// exported file re-imports cleanly even across server versions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BackupPayload(Value);

impl BackupPayload {
    /// Parse backup text, typically read from a user-selected file.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::InvalidBackup(e.to_string()))?;
        Self::from_value(value)
    }

    /// Wrap an already-decoded JSON value, enforcing the object shape.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidBackup(
                "backup payload must be a JSON object".to_string(),
            ));
        }
        let payload = BackupPayload(value);
        let (holdings, snapshots) = payload.record_counts();
        debug!(
            "Backup payload with {} holdings and {} snapshots",
            holdings, snapshots
        );
        Ok(payload)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON, matching the shape a browser export writes.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Best-effort record counts for operator feedback. Keys the server
    /// does not emit count as zero.
    pub fn record_counts(&self) -> (usize, usize) {
        let count = |key: &str| {
            self.0
                .get(key)
                .and_then(Value::as_array)
                .map(|records| records.len())
                .unwrap_or(0)
        };
        (count("holdings"), count("snapshots"))
    }
}

impl<'de> Deserialize<'de> for BackupPayload {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(de::Error::custom("backup payload must be a JSON object"));
        }
        Ok(BackupPayload(value))
    }
}

/// How the server applies an imported backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStrategy {
    /// Replace the current holdings; history is preserved and the prior
    /// current holdings are snapshotted first.
    Current,
    /// Discard everything, including history, and replace it with the
    /// imported data. Destructive; requires explicit confirmation.
    Full,
}

impl ImportStrategy {
    /// Wire value for the `strategy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStrategy::Current => "current",
            ImportStrategy::Full => "full",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, ImportStrategy::Full)
    }
}

impl fmt::Display for ImportStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "current" => Ok(ImportStrategy::Current),
            "full" => Ok(ImportStrategy::Full),
            other => Err(Error::Validation(
                crate::errors::ValidationError::InvalidInput(format!(
                    "unknown import strategy '{other}' (expected 'current' or 'full')"
                )),
            )),
        }
    }
}

/// File name for an export written on `date`:
/// `portfolio_backup_<YYYY-MM-DD>.json`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{BACKUP_FILE_PREFIX}{date}.json")
}
