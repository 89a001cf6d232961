//! List-view search.
//!
//! # Responsibility
//! - Filter the roster by a free-text query.
//! - Project records into display rows for the list table.
//!
//! # Invariants
//! - Filtering preserves collection order.
//! - An empty query returns the whole collection.

pub mod filter;
