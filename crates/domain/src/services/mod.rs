//! Domain services for Journal Manager.
//!
//! Services contain business logic that operates on domain models.

pub mod legacy_import;
pub mod settings_form;

pub use legacy_import::{plan_import, ImportPlan, LEGACY_KEYS};
pub use settings_form::{resolve_area, validate_patch, AreaView};
