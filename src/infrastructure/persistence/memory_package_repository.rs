//! Process-local package registry.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use super::builtin_packages::builtin_packages;
use crate::domain::entities::{NewTemplatePackage, PackageFilter, TemplatePackage};
use crate::domain::repositories::PackageRepository;
use crate::error::AppError;

/// Package registry held in memory.
///
/// Used when no database is configured and in tests. Packages created at
/// runtime are lost on restart.
pub struct InMemoryPackageRepository {
    packages: RwLock<Vec<TemplatePackage>>,
}

impl InMemoryPackageRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            packages: RwLock::new(Vec::new()),
        }
    }

    /// Creates a registry seeded with the built-in packages.
    pub fn with_builtin() -> Self {
        let now = Utc::now();
        let packages = builtin_packages()
            .into_iter()
            .map(|p| p.into_package(true, now))
            .collect();

        Self {
            packages: RwLock::new(packages),
        }
    }
}

impl Default for InMemoryPackageRepository {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn create(&self, new_package: NewTemplatePackage) -> Result<TemplatePackage, AppError> {
        let mut packages = self.packages.write().await;

        if packages.iter().any(|p| p.id == new_package.id) {
            return Err(AppError::conflict(
                "Template id already exists",
                json!({ "id": new_package.id }),
            ));
        }

        let package = new_package.into_package(false, Utc::now());
        packages.push(package.clone());
        Ok(package)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TemplatePackage>, AppError> {
        let packages = self.packages.read().await;
        Ok(packages.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: PackageFilter) -> Result<Vec<TemplatePackage>, AppError> {
        let packages = self.packages.read().await;
        Ok(packages
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut packages = self.packages.write().await;
        let before = packages.len();
        packages.retain(|p| p.id != id);

        if packages.len() == before {
            return Err(AppError::not_found(
                "Template not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.packages.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{TemplateConfig, Tier};

    fn new_package(id: &str) -> NewTemplatePackage {
        NewTemplatePackage {
            id: id.to_string(),
            name: "Custom".to_string(),
            description: "Custom template".to_string(),
            thumbnail: "/static/thumbnails/custom.png".to_string(),
            config: TemplateConfig::new("card-minimal"),
            tier: Tier::Premium,
        }
    }

    #[tokio::test]
    async fn test_seeded_with_builtin() {
        let repo = InMemoryPackageRepository::with_builtin();

        assert_eq!(repo.count().await.unwrap(), builtin_packages().len() as i64);
        let package = repo.find_by_id("modern-minimal").await.unwrap().unwrap();
        assert!(package.builtin);
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPackageRepository::new();

        let created = repo.create(new_package("custom-one")).await.unwrap();

        assert!(!created.builtin);
        assert_eq!(repo.find_by_id("custom-one").await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = InMemoryPackageRepository::new();
        repo.create(new_package("dup")).await.unwrap();

        let result = repo.create(new_package("dup")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryPackageRepository::new();
        repo.create(new_package("b-second")).await.unwrap();
        repo.create(new_package("a-third")).await.unwrap();

        let ids: Vec<String> = repo
            .list(PackageFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec!["b-second", "a-third"]);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let repo = InMemoryPackageRepository::with_builtin();

        let free = repo
            .list(PackageFilter {
                tier: Some(Tier::Free),
                search: None,
            })
            .await
            .unwrap();

        assert!(!free.is_empty());
        assert!(free.iter().all(|p| p.tier == Tier::Free));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPackageRepository::new();
        repo.create(new_package("gone")).await.unwrap();

        repo.delete("gone").await.unwrap();

        assert!(repo.find_by_id("gone").await.unwrap().is_none());
        assert!(matches!(
            repo.delete("gone").await,
            Err(AppError::NotFound { .. })
        ));
    }
}
