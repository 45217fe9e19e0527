//! Repository implementations for database operations.

pub mod category;
pub mod enrollment;
pub mod journal;
pub mod journal_settings;
pub mod section;

pub use category::CategoryRepository;
pub use enrollment::EnrollmentRepository;
pub use journal::JournalRepository;
pub use journal_settings::JournalSettingsRepository;
pub use section::SectionRepository;
