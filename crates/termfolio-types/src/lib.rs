//! Foundation types for termfolio.
//!
//! Platform-agnostic pieces shared by every termfolio crate: input events,
//! TOML configuration, and the error type.

pub mod config;
pub mod error;
pub mod input;
