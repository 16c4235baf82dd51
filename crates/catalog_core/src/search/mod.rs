//! Query parameter normalization and result envelopes.
//!
//! # Responsibility
//! - Normalize raw search requests into always-valid parameters.
//! - Derive pagination metadata for query responses.

pub mod params;
pub mod result;
