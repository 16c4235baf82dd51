//! Storage layer: CRUD contracts, the in-memory store, search execution.
//!
//! # Responsibility
//! - Define entity-generic CRUD and searchable-store contracts.
//! - Keep filter/order/paginate composition inside one engine.
//!
//! # Invariants
//! - Stores hold at most one entity per identity string.
//! - Lookup/update/delete of an absent identity surface `RepoError::NotFound`.

pub mod category_repo;
pub mod memory;
pub mod searchable;
