//! Settings form resolution and validation.
//!
//! The merged GET view and the PUT validation path for a settings area are
//! both driven by the area's field schema. Stored rows never reach the API
//! surface raw: every value is decoded against its declared kind, and rows
//! that fail to decode are reported as diagnostics while the field falls
//! back to its default.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{
    FieldConstraint, FieldDiagnostic, SettingValue, SettingsArea,
};
use shared::validation::EMAIL_REGEX;

/// Merged view of one settings area: schema defaults overlaid with persisted
/// values, plus diagnostics for any stored row that failed to decode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AreaView {
    pub area: SettingsArea,
    pub values: BTreeMap<String, serde_json::Value>,
    pub diagnostics: Vec<FieldDiagnostic>,
}

/// Builds the merged view of an area from the stored name → raw value rows.
pub fn resolve_area(area: SettingsArea, stored: &HashMap<String, String>) -> AreaView {
    let mut values = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for field in area.fields() {
        let default = field
            .default
            .and_then(|raw| SettingValue::decode(field.kind, raw).ok())
            .map(|v| v.to_json())
            .unwrap_or(serde_json::Value::Null);

        let value = match stored.get(field.name) {
            Some(raw) => match SettingValue::decode(field.kind, raw) {
                Ok(value) => value.to_json(),
                Err(err) => {
                    diagnostics.push(FieldDiagnostic::new(
                        field.name,
                        format!("Stored value ignored: {}", err),
                    ));
                    default
                }
            },
            None => default,
        };

        values.insert(field.name.to_string(), value);
    }

    AreaView {
        area,
        values,
        diagnostics,
    }
}

/// Validates a PUT body against the area schema.
///
/// Returns the typed writes to upsert, or the full list of field-specific
/// validation failures. On failure nothing may be written: validation gates
/// the save as a whole.
pub fn validate_patch(
    area: SettingsArea,
    patch: &serde_json::Map<String, serde_json::Value>,
) -> Result<Vec<(String, SettingValue)>, Vec<FieldDiagnostic>> {
    let mut diagnostics = Vec::new();
    let mut writes = Vec::new();

    for name in patch.keys() {
        if area.field(name).is_none() {
            diagnostics.push(FieldDiagnostic::new(
                name.clone(),
                format!("Unknown field for {} settings", area),
            ));
        }
    }

    for field in area.fields() {
        let value = patch.get(field.name);

        let blank = match value {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };

        if field.required && blank {
            diagnostics.push(FieldDiagnostic::new(
                field.name,
                format!("{} is required", field.label),
            ));
            continue;
        }

        let value = match value {
            None | Some(serde_json::Value::Null) => continue,
            Some(value) => value,
        };

        let typed = match SettingValue::from_json(field.kind, value) {
            Ok(typed) => typed,
            Err(_) => {
                diagnostics.push(FieldDiagnostic::new(
                    field.name,
                    format!("{} must be a {} value", field.label, field.kind.as_str()),
                ));
                continue;
            }
        };

        match field.constraint {
            FieldConstraint::None => {}
            FieldConstraint::Email => {
                if let Some(text) = typed.as_text() {
                    if !text.trim().is_empty() && !EMAIL_REGEX.is_match(text.trim()) {
                        diagnostics.push(FieldDiagnostic::new(
                            field.name,
                            format!("{} must be a valid email address", field.label),
                        ));
                        continue;
                    }
                }
            }
            FieldConstraint::MinNumber(min) => {
                if let SettingValue::Number(n) = typed {
                    if n < min {
                        diagnostics.push(FieldDiagnostic::new(
                            field.name,
                            format!("{} must be at least {}", field.label, min),
                        ));
                        continue;
                    }
                }
            }
        }

        writes.push((field.name.to_string(), typed));
    }

    if diagnostics.is_empty() {
        Ok(writes)
    } else {
        Err(diagnostics)
    }
}
