//! # SavorLog Common Library
//!
//! Shared code for the SavorLog recipe notebook and meal planner:
//! - Database schema, models, and initialization
//! - Field-level record validation
//! - Configuration resolution
//! - Error types
//! - Timestamp and UUID utilities

pub mod config;
pub mod db;
pub mod error;
pub mod time;
pub mod uuid_utils;
pub mod validate;

pub use error::{Error, Result};
