//! Legacy settings import models.
//!
//! Earlier releases of the admin UI persisted settings in browser-local
//! storage as serialized JSON blobs under well-known keys. Clients post
//! those blobs here once; the server imports any field that has no
//! database-backed value yet and reports, per key, whether the client may
//! clear its local copy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// POST body for the legacy import endpoint: legacy storage key → payload
/// as found in local storage (either a JSON object, or the raw string the
/// browser stored).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LegacyImportRequest {
    pub entries: HashMap<String, serde_json::Value>,
}

/// A legacy key that was not imported, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SkippedEntry {
    pub key: String,
    pub reason: String,
}

/// Result of a legacy import run.
///
/// A key in `imported` had at least one field copied into the settings
/// store. A key in `skipped` was left alone; when `already_present` is the
/// reason, the client should still clear its local copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LegacyImportResponse {
    pub imported: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
}
