//! Use-case services over the storage layer.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing use-case APIs.
//! - Map entities into read models at the boundary.

pub mod category_service;
