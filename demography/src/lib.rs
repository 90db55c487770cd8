//! # Demography
//!
//! The entity side of portrait resolution: who an entity is, described by
//! loosely-specified demographic traits, and the pure tables that reduce those
//! traits to small closed category sets.
//!
//! This crate holds no asset data and performs no matching; see
//! `portrait_resolver` for that.

pub mod categories;
pub mod entities;
pub mod normalization;
pub mod scenario;

pub use categories::*;
pub use entities::*;
pub use normalization::*;
pub use scenario::*;
