//! Shared types, errors, and configuration for Montant.
//!
//! This crate provides common types used across all other crates:
//! - Amount and currency types with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CacheConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use types::{Amount, AmountError, Currency};
