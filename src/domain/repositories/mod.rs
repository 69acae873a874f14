//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contracts; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`ComponentRepository`] - Component catalog lookups
//! - [`PackageRepository`] - Template package registry

pub mod component_repository;
pub mod package_repository;

pub use component_repository::ComponentRepository;
pub use package_repository::PackageRepository;

#[cfg(test)]
pub use component_repository::MockComponentRepository;
#[cfg(test)]
pub use package_repository::MockPackageRepository;
