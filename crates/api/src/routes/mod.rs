//! HTTP route handlers.

pub mod categories;
pub mod enrollments;
pub mod health;
pub mod journals;
pub mod legacy;
pub mod sections;
pub mod settings;
