//! Stateless string validation and transformation helpers shared by the
//! presentation and networking layers.
//!
//! Everything here is an independent, reentrant function: pattern-based
//! validators ([`validate`]), escaped-codepoint and query-string
//! transformers ([`escape`], [`query`]), and a bundled-text reader behind an
//! injectable [`assets::AssetSource`]. Regexes are compiled once into
//! process-wide statics and are safe for concurrent use.

pub mod assets;
pub mod error;
pub mod escape;
pub mod query;
pub mod validate;

pub use error::{Error, Result};
