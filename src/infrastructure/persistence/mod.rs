//! Package registry implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::PackageRepository`].
//!
//! # Repositories
//!
//! - [`PgPackageRepository`] - PostgreSQL storage, seeded with the built-in packages
//! - [`InMemoryPackageRepository`] - Process-local fallback when no database is configured

pub mod builtin_packages;
pub mod memory_package_repository;
pub mod pg_package_repository;

pub use builtin_packages::builtin_packages;
pub use memory_package_repository::InMemoryPackageRepository;
pub use pg_package_repository::PgPackageRepository;
