//! Shared utilities and common types for Journal Manager backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic (email addresses, URL path slugs)

pub mod validation;
