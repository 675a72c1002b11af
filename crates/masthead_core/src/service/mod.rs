//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog calls into use-case level APIs.
//! - Emit structured log events for every mutation.

pub mod publishing;
