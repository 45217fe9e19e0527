//! Legacy import planning.
//!
//! Pure planning step for the one-time migration of browser-local settings
//! into the database-backed store. Given the posted legacy payloads and the
//! set of setting names that already exist for the journal, the plan lists
//! exactly which typed writes to perform. An existing database value is
//! never overwritten by legacy state, and individual malformed entries are
//! skipped without blocking the rest.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{SettingValue, SettingsArea, SkippedEntry};

/// Legacy local-storage keys and the settings area each one maps to.
pub const LEGACY_KEYS: &[(&str, SettingsArea)] = &[
    ("settings_context_masthead", SettingsArea::Masthead),
    ("settings_context_contact", SettingsArea::Contact),
    ("settings_website_appearance", SettingsArea::Appearance),
    ("settings_workflow_review", SettingsArea::Workflow),
];

/// Skip reasons reported back to the client.
pub const REASON_UNRECOGNIZED_KEY: &str = "unrecognized_key";
pub const REASON_INVALID_PAYLOAD: &str = "invalid_payload";
pub const REASON_ALREADY_PRESENT: &str = "already_present";
pub const REASON_NO_IMPORTABLE_FIELDS: &str = "no_importable_fields";

/// The computed import: typed writes plus the per-key outcome.
#[derive(Debug, Clone, Default)]
pub struct ImportPlan {
    /// Setting name → typed value, for fields with no existing row.
    pub writes: Vec<(String, SettingValue)>,
    /// Legacy keys with at least one field to import.
    pub imported: Vec<String>,
    /// Legacy keys left alone, with the reason.
    pub skipped: Vec<SkippedEntry>,
}

/// Computes the import plan for the posted legacy entries.
///
/// Running the resulting writes and planning again with the updated
/// `existing` set yields an empty plan: the import is idempotent.
pub fn plan_import(
    entries: &HashMap<String, serde_json::Value>,
    existing: &HashSet<String>,
) -> ImportPlan {
    let mut plan = ImportPlan::default();

    // Sorted for deterministic response ordering.
    let mut keys: Vec<_> = entries.keys().collect();
    keys.sort();

    for key in keys {
        let payload = &entries[key];

        let area = match LEGACY_KEYS
            .iter()
            .find(|(legacy_key, _)| legacy_key == key)
        {
            Some((_, area)) => *area,
            None => {
                plan.skipped.push(SkippedEntry {
                    key: key.clone(),
                    reason: REASON_UNRECOGNIZED_KEY.to_string(),
                });
                continue;
            }
        };

        // Local storage holds strings; accept both the raw stored string
        // and an already-parsed object.
        let object = match payload {
            serde_json::Value::Object(map) => Some(map.clone()),
            serde_json::Value::String(raw) => serde_json::from_str::<serde_json::Value>(raw)
                .ok()
                .and_then(|v| v.as_object().cloned()),
            _ => None,
        };

        let object = match object {
            Some(object) => object,
            None => {
                debug!(key = %key, "legacy payload is not a settings object, skipping");
                plan.skipped.push(SkippedEntry {
                    key: key.clone(),
                    reason: REASON_INVALID_PAYLOAD.to_string(),
                });
                continue;
            }
        };

        let mut imported_fields = 0usize;
        let mut existing_hits = 0usize;

        for (name, value) in &object {
            // Fields the current schemas don't know are dropped silently;
            // legacy blobs carried UI-only state alongside settings.
            let field = match area.field(name) {
                Some(field) => field,
                None => continue,
            };

            if existing.contains(field.name) {
                existing_hits += 1;
                continue;
            }

            match SettingValue::from_json(field.kind, value) {
                Ok(typed) => {
                    plan.writes.push((field.name.to_string(), typed));
                    imported_fields += 1;
                }
                Err(err) => {
                    debug!(key = %key, field = %name, error = %err,
                        "undecodable legacy field, skipping");
                }
            }
        }

        if imported_fields > 0 {
            plan.imported.push(key.clone());
        } else if existing_hits > 0 {
            plan.skipped.push(SkippedEntry {
                key: key.clone(),
                reason: REASON_ALREADY_PRESENT.to_string(),
            });
        } else {
            plan.skipped.push(SkippedEntry {
                key: key.clone(),
                reason: REASON_NO_IMPORTABLE_FIELDS.to_string(),
            });
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: serde_json::Value) -> HashMap<String, serde_json::Value> {
        value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[test]
    fn test_plan_imports_fields_absent_from_db() {
        let entries = entries(json!({
            "settings_context_masthead": {
                "journal_title": "Journal of Testing",
                "publisher": "ACME Press"
            }
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert_eq!(plan.imported, vec!["settings_context_masthead"]);
        assert!(plan.skipped.is_empty());
        assert_eq!(plan.writes.len(), 2);
    }

    #[test]
    fn test_plan_never_overwrites_existing_setting() {
        let entries = entries(json!({
            "settings_context_masthead": {
                "journal_title": "Stale Local Title",
                "publisher": "ACME Press"
            }
        }));
        let existing: HashSet<String> = ["journal_title".to_string()].into();

        let plan = plan_import(&entries, &existing);
        // publisher is still imported, the existing title is untouched.
        assert_eq!(plan.imported, vec!["settings_context_masthead"]);
        assert_eq!(plan.writes.len(), 1);
        assert_eq!(plan.writes[0].0, "publisher");
    }

    #[test]
    fn test_plan_second_run_is_noop() {
        let posted = entries(json!({
            "settings_context_contact": {
                "contact_name": "Ana",
                "contact_email": "ana@journal.example"
            }
        }));

        let mut existing = HashSet::new();
        let first = plan_import(&posted, &existing);
        assert_eq!(first.writes.len(), 2);

        for (name, _) in &first.writes {
            existing.insert(name.clone());
        }

        let second = plan_import(&posted, &existing);
        assert!(second.writes.is_empty());
        assert!(second.imported.is_empty());
        assert_eq!(second.skipped.len(), 1);
        assert_eq!(second.skipped[0].reason, REASON_ALREADY_PRESENT);
    }

    #[test]
    fn test_plan_accepts_raw_string_payload() {
        let entries = entries(json!({
            "settings_workflow_review": "{\"review_deadline_weeks\": 6}"
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert_eq!(plan.imported, vec!["settings_workflow_review"]);
        assert_eq!(
            plan.writes[0],
            (
                "review_deadline_weeks".to_string(),
                SettingValue::Number(6)
            )
        );
    }

    #[test]
    fn test_plan_skips_unrecognized_key() {
        let entries = entries(json!({
            "settings_plugins_installed": {"anything": 1}
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert!(plan.writes.is_empty());
        assert_eq!(plan.skipped[0].reason, REASON_UNRECOGNIZED_KEY);
    }

    #[test]
    fn test_plan_skips_invalid_payload_without_blocking_others() {
        let entries = entries(json!({
            "settings_context_masthead": "not json at all",
            "settings_context_contact": {"contact_name": "Ana"}
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert_eq!(plan.imported, vec!["settings_context_contact"]);
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].key, "settings_context_masthead");
        assert_eq!(plan.skipped[0].reason, REASON_INVALID_PAYLOAD);
    }

    #[test]
    fn test_plan_skips_undecodable_field_keeps_rest() {
        let entries = entries(json!({
            "settings_workflow_review": {
                "review_deadline_weeks": "six",
                "notify_on_submission": true
            }
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert_eq!(plan.writes.len(), 1);
        assert_eq!(plan.writes[0].0, "notify_on_submission");
    }

    #[test]
    fn test_plan_ignores_unknown_fields_in_payload() {
        let entries = entries(json!({
            "settings_context_masthead": {
                "journal_title": "J",
                "ui_collapsed": true
            }
        }));

        let plan = plan_import(&entries, &HashSet::new());
        assert_eq!(plan.writes.len(), 1);
        assert_eq!(plan.writes[0].0, "journal_title");
    }
}
