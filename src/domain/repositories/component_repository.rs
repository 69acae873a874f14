//! Repository trait for the component catalog.

use crate::domain::entities::{Component, ComponentKind};
use crate::error::TemplateError;
use async_trait::async_trait;

/// Read-only access to the component catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::components::FsComponentRepository`] - Reads files on every lookup
/// - [`crate::infrastructure::components::PreloadedComponentRepository`] - Whole catalog in memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    /// Fetches a component by kind and name.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ComponentNotFound`] if the markup or style body is absent.
    /// Returns [`TemplateError::InvalidComponentName`] if `name` is not a safe file stem.
    /// Returns [`TemplateError::Io`] on unexpected filesystem errors.
    async fn find(&self, kind: ComponentKind, name: &str) -> Result<Component, TemplateError>;

    /// Lists component names of one kind, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Io`] if the catalog cannot be read.
    async fn list(&self, kind: ComponentKind) -> Result<Vec<String>, TemplateError>;

    /// Returns whether a component exists.
    ///
    /// # Errors
    ///
    /// Propagates errors other than [`TemplateError::ComponentNotFound`].
    async fn exists(&self, kind: ComponentKind, name: &str) -> Result<bool, TemplateError> {
        match self.find(kind, name).await {
            Ok(_) => Ok(true),
            Err(TemplateError::ComponentNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
