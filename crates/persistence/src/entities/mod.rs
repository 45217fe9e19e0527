//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod category;
pub mod journal;
pub mod section;
pub mod setting;
pub mod user;

pub use category::{CategoryEntity, CategoryWithSettings};
pub use journal::JournalEntity;
pub use section::{SectionEntity, SectionWithSettings};
pub use setting::SettingRowEntity;
pub use user::{EnrollmentRowEntity, UserAccountEntity, UserGroupEntity};
