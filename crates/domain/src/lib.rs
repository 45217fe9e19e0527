//! Domain layer for Journal Manager backend.
//!
//! This crate contains:
//! - Domain models (Journal, Section, Category, settings areas)
//! - Typed setting values and per-area field schemas
//! - Business logic services (settings forms, legacy import planning)

pub mod models;
pub mod services;
