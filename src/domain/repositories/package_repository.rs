//! Repository trait for the template package registry.

use crate::domain::entities::{NewTemplatePackage, PackageFilter, TemplatePackage};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for template packages.
///
/// The registry is persisted data: packages are added and removed through
/// this trait, never by editing program source.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPackageRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryPackageRepository`] - Process-local registry
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_package.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Registers a new package.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a package with the same id exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_package: NewTemplatePackage) -> Result<TemplatePackage, AppError>;

    /// Finds a package by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<TemplatePackage>, AppError>;

    /// Lists packages matching the filter, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: PackageFilter) -> Result<Vec<TemplatePackage>, AppError>;

    /// Deletes a package.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the package does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Counts registered packages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
