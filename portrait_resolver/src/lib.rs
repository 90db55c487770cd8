//! # Portrait Resolver
//!
//! Resolves a narrative entity (a character or a patient record) to the single
//! best-fitting portrait from a fixed registry of asset descriptors.
//!
//! ## Core Components
//!
//! - **registry**: The immutable, ordered table of asset descriptors
//! - **resolver**: Named-identity matching, weighted generic scoring, the
//!   per-entity cache and the `PortraitResolver` facade
//! - **error**: Errors raised while loading registries and configuration
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: The same profile and registry always yield the same key
//! - **Total**: Resolution never fails; weak matches fall back to the default asset
//! - **Explainable**: Every generic score can be broken down per criterion

pub mod error;
pub mod registry;
pub mod resolver;

pub use error::{ConfigError, RegistryError};
pub use registry::*;
pub use resolver::*;
