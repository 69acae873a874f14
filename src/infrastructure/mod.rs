//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for component lookup and package persistence.
//!
//! # Modules
//!
//! - [`components`] - Component catalog (filesystem and preloaded implementations)
//! - [`persistence`] - Package registry (PostgreSQL and in-memory implementations)

pub mod components;
pub mod persistence;
