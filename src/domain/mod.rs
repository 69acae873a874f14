//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Components, packages, tiers, themes and render input
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Composition and rendering live in [`crate::rendering`], orchestration in
//!   [`crate::application::services`]

pub mod entities;
pub mod repositories;
