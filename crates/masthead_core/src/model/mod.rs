//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity types and the shared validation error.
//! - Keep association lists encapsulated so only the catalog rewires them.
//!
//! # Invariants
//! - Every entity is identified by a stable generated ID.
//! - Entities are only constructible through validating paths; there is no
//!   half-initialized state.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
