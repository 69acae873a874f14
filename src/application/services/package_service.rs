//! Template package registry service.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::{
    ComponentKind, NewTemplatePackage, PackageFilter, TemplateConfig, TemplatePackage,
};
use crate::domain::repositories::{ComponentRepository, PackageRepository};
use crate::error::{AppError, TemplateError};

/// Package ids are URL path segments: lowercase, digits and hyphens.
static PACKAGE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]{1,63}$").unwrap());

const MAX_NAME_LEN: usize = 100;
const MAX_TEXT_LEN: usize = 500;

/// Service for listing and maintaining template packages.
///
/// New packages are checked against the component catalog so a registered
/// package always resolves at render time.
pub struct PackageService<R: PackageRepository + ?Sized, C: ComponentRepository + ?Sized> {
    repository: Arc<R>,
    components: Arc<C>,
}

impl<R, C> PackageService<R, C>
where
    R: PackageRepository + ?Sized,
    C: ComponentRepository + ?Sized,
{
    pub fn new(repository: Arc<R>, components: Arc<C>) -> Self {
        Self {
            repository,
            components,
        }
    }

    /// Retrieves a package by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the package does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, id: &str) -> Result<TemplatePackage, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TemplateError::PackageNotFound(id.to_string()).into())
    }

    /// Lists packages matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, filter: PackageFilter) -> Result<Vec<TemplatePackage>, AppError> {
        self.repository.list(filter).await
    }

    /// Registers a new package.
    ///
    /// # Validation
    ///
    /// - Id matches `^[a-z0-9][a-z0-9-]{1,63}$`
    /// - Name is not blank and at most 100 characters
    /// - Description and thumbnail are at most 500 characters
    /// - Every referenced component exists in the catalog under its slot's kind
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Conflict`] if the id is taken.
    /// Returns [`AppError::Internal`] on storage or catalog errors.
    pub async fn create(&self, new_package: NewTemplatePackage) -> Result<TemplatePackage, AppError> {
        validate_package_id(&new_package.id)?;
        validate_package_text(&new_package)?;

        if let Some((kind, name)) = self.check_components(&new_package.config).await?.first() {
            return Err(AppError::bad_request(
                "Unknown component",
                json!({ "kind": kind.as_str(), "name": name }),
            ));
        }

        if self.repository.find_by_id(&new_package.id).await?.is_some() {
            return Err(AppError::conflict(
                "Template id already exists",
                json!({ "id": new_package.id }),
            ));
        }

        let package = self.repository.create(new_package).await?;
        tracing::info!("Registered template package {}", package.id);
        Ok(package)
    }

    /// Deletes a package.
    ///
    /// Built-in packages cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the package does not exist.
    /// Returns [`AppError::Forbidden`] for built-in packages.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let package = self.get(id).await?;

        if package.builtin {
            return Err(AppError::forbidden(
                "Built-in templates cannot be deleted",
                json!({ "id": id }),
            ));
        }

        self.repository.delete(id).await?;
        tracing::info!("Deleted template package {}", id);
        Ok(())
    }

    /// Returns the slots of `config` whose component is missing from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the catalog cannot be read.
    pub async fn check_components(
        &self,
        config: &TemplateConfig,
    ) -> Result<Vec<(ComponentKind, String)>, AppError> {
        let mut missing = Vec::new();
        for (kind, name) in config.slots() {
            if !self.components.exists(kind, name).await? {
                missing.push((kind, name.to_string()));
            }
        }
        Ok(missing)
    }

    pub fn components(&self) -> &C {
        &self.components
    }

    /// Number of registered packages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn validate_package_id(id: &str) -> Result<(), AppError> {
    if PACKAGE_ID_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Invalid template id",
            json!({
                "id": id,
                "allowed": "2-64 characters: a-z, 0-9, hyphens; must not start with a hyphen"
            }),
        ))
    }
}

fn validate_package_text(package: &NewTemplatePackage) -> Result<(), AppError> {
    if package.name.trim().is_empty() {
        return Err(AppError::bad_request(
            "Invalid template name",
            json!({ "field": "name", "reason": "must not be blank" }),
        ));
    }

    let limits = [
        ("name", package.name.as_str(), MAX_NAME_LEN),
        ("description", package.description.as_str(), MAX_TEXT_LEN),
        ("thumbnail", package.thumbnail.as_str(), MAX_TEXT_LEN),
    ];
    for (field, value, max) in limits {
        if value.chars().count() > max {
            return Err(AppError::bad_request(
                "Template field too long",
                json!({ "field": field, "max": max }),
            ));
        }
    }

    Ok(())
}
