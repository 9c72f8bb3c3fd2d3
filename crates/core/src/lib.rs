//! Core business logic for Montant.
//!
//! This crate contains pure logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `words` - French amount-in-words converter
//! - `document` - Payment summary consumed by document generators

pub mod document;
pub mod words;
