//! Settings areas and their field schemas.
//!
//! Each administrative form area (masthead, contact, appearance, workflow)
//! declares a static schema of named fields. The schema drives both the
//! merged GET view (defaults + persisted values) and PUT validation, so the
//! set of setting names an area can read or write is closed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::setting::SettingKind;

/// An administrative settings form area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsArea {
    Masthead,
    Contact,
    Appearance,
    Workflow,
}

impl SettingsArea {
    pub const ALL: [SettingsArea; 4] = [
        SettingsArea::Masthead,
        SettingsArea::Contact,
        SettingsArea::Appearance,
        SettingsArea::Workflow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsArea::Masthead => "masthead",
            SettingsArea::Contact => "contact",
            SettingsArea::Appearance => "appearance",
            SettingsArea::Workflow => "workflow",
        }
    }

    /// The field schema for this area.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            SettingsArea::Masthead => MASTHEAD_FIELDS,
            SettingsArea::Contact => CONTACT_FIELDS,
            SettingsArea::Appearance => APPEARANCE_FIELDS,
            SettingsArea::Workflow => WORKFLOW_FIELDS,
        }
    }

    /// Looks up a field spec by setting name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl FromStr for SettingsArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masthead" => Ok(SettingsArea::Masthead),
            "contact" => Ok(SettingsArea::Contact),
            "appearance" => Ok(SettingsArea::Appearance),
            "workflow" => Ok(SettingsArea::Workflow),
            _ => Err(format!("Unknown settings area: {}", s)),
        }
    }
}

impl fmt::Display for SettingsArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Additional validation applied to a field beyond its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    None,
    /// Must match the `local@domain.tld` email pattern (when non-empty).
    Email,
    /// Numeric value must be at least the given minimum.
    MinNumber(i64),
}

/// Declaration of a single settings field within an area.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Setting name as stored in the settings table.
    pub name: &'static str,
    /// Human-readable label used in validation messages.
    pub label: &'static str,
    pub kind: SettingKind,
    /// Required fields must be present and non-blank on every save.
    pub required: bool,
    pub constraint: FieldConstraint,
    /// Stored-string encoding of the default, if the field has one.
    pub default: Option<&'static str>,
}

/// A per-field problem surfaced to the caller (validation failure on PUT,
/// decode degradation on GET).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDiagnostic {
    pub field: String,
    pub message: String,
}

impl FieldDiagnostic {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

const MASTHEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "journal_title",
        label: "Journal title",
        kind: SettingKind::Text,
        required: true,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "journal_initials",
        label: "Journal initials",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "journal_abbreviation",
        label: "Journal abbreviation",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "publisher",
        label: "Publisher",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "issn_online",
        label: "Online ISSN",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "issn_print",
        label: "Print ISSN",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "about",
        label: "About the journal",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "contact_name",
        label: "Contact name",
        kind: SettingKind::Text,
        required: true,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "contact_email",
        label: "Contact email",
        kind: SettingKind::Text,
        required: true,
        constraint: FieldConstraint::Email,
        default: None,
    },
    FieldSpec {
        name: "contact_phone",
        label: "Contact phone",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "contact_affiliation",
        label: "Contact affiliation",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "mailing_address",
        label: "Mailing address",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "support_name",
        label: "Support name",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "support_email",
        label: "Support email",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::Email,
        default: None,
    },
    FieldSpec {
        name: "support_phone",
        label: "Support phone",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
];

const APPEARANCE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "theme",
        label: "Theme",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("default"),
    },
    FieldSpec {
        name: "items_per_page",
        label: "Items per page",
        kind: SettingKind::Number,
        required: false,
        constraint: FieldConstraint::MinNumber(1),
        default: Some("25"),
    },
    FieldSpec {
        name: "show_journal_title",
        label: "Show journal title",
        kind: SettingKind::Bool,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("true"),
    },
    FieldSpec {
        name: "additional_css",
        label: "Additional CSS",
        kind: SettingKind::Text,
        required: false,
        constraint: FieldConstraint::None,
        default: None,
    },
    FieldSpec {
        name: "sidebar_blocks",
        label: "Sidebar blocks",
        kind: SettingKind::Json,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("[]"),
    },
];

const WORKFLOW_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "review_deadline_weeks",
        label: "Review deadline (weeks)",
        kind: SettingKind::Number,
        required: false,
        constraint: FieldConstraint::MinNumber(1),
        default: Some("4"),
    },
    FieldSpec {
        name: "invite_reminder_days",
        label: "Invitation reminder (days)",
        kind: SettingKind::Number,
        required: false,
        constraint: FieldConstraint::MinNumber(1),
        default: Some("3"),
    },
    FieldSpec {
        name: "notify_on_submission",
        label: "Notify on submission",
        kind: SettingKind::Bool,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("true"),
    },
    FieldSpec {
        name: "allow_self_registration",
        label: "Allow self registration",
        kind: SettingKind::Bool,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("false"),
    },
    FieldSpec {
        name: "submission_checklist",
        label: "Submission checklist",
        kind: SettingKind::Json,
        required: false,
        constraint: FieldConstraint::None,
        default: Some("[]"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::setting::SettingValue;

    #[test]
    fn test_area_from_str() {
        assert_eq!(
            "masthead".parse::<SettingsArea>().unwrap(),
            SettingsArea::Masthead
        );
        assert_eq!(
            "workflow".parse::<SettingsArea>().unwrap(),
            SettingsArea::Workflow
        );
        assert!("plugins".parse::<SettingsArea>().is_err());
        assert!("Masthead".parse::<SettingsArea>().is_err());
    }

    #[test]
    fn test_field_lookup() {
        let field = SettingsArea::Masthead.field("journal_title").unwrap();
        assert!(field.required);
        assert_eq!(field.label, "Journal title");
        assert!(SettingsArea::Masthead.field("contact_email").is_none());
    }

    #[test]
    fn test_field_names_unique_within_area() {
        for area in SettingsArea::ALL {
            let mut names: Vec<_> = area.fields().iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), area.fields().len(), "area {}", area);
        }
    }

    #[test]
    fn test_defaults_decode_under_declared_kind() {
        for area in SettingsArea::ALL {
            for field in area.fields() {
                if let Some(default) = field.default {
                    SettingValue::decode(field.kind, default).unwrap_or_else(|e| {
                        panic!("default for {}.{} does not decode: {}", area, field.name, e)
                    });
                }
            }
        }
    }
}
