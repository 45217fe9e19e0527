//! Domain models for Journal Manager.

pub mod category;
pub mod enrollment;
pub mod journal;
pub mod legacy;
pub mod section;
pub mod setting;
pub mod settings_area;

pub use category::{Category, CategoryResponse, CreateCategoryRequest, ROOT_PARENT_ID};
pub use enrollment::{CreateEnrollmentRequest, EnrollmentResponse, JournalRole};
pub use journal::{CreateJournalRequest, Journal, JournalResponse, UpdateJournalRequest};
pub use legacy::{LegacyImportRequest, LegacyImportResponse, SkippedEntry};
pub use section::{
    default_abbreviation, CreateSectionRequest, Section, SectionResponse,
    SetSectionEnabledRequest,
};
pub use setting::{SettingKind, SettingParseError, SettingValue, DEFAULT_LOCALE};
pub use settings_area::{FieldConstraint, FieldDiagnostic, FieldSpec, SettingsArea};
