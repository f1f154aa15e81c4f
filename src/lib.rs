//! Choice Ranker - Multi-criteria decision ranking engine
//!
//! Ranks alternatives scored against weighted criteria with four methods:
//! Simple Additive Weighting, Weighted Product, the Analytic Hierarchy
//! Process, and TOPSIS. The engine lives in [`domain::analysis`]; the
//! application and adapter layers expose it as a stateless JSON service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
