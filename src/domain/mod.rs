//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `analysis` - Pure ranking methods (SAW, WP, AHP, TOPSIS) and their inputs

pub mod analysis;
pub mod foundation;
