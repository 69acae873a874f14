//! Storefront rendering service.

use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

use crate::application::sample::sample_template_data;
use crate::application::storefront_input::StorefrontInput;
use crate::domain::entities::{TemplateConfig, TemplateData, TemplatePackage, Theme, Tier};
use crate::domain::repositories::{ComponentRepository, PackageRepository};
use crate::error::{AppError, TemplateError};
use crate::rendering::{Compositor, Renderer};

/// Turns a package id plus caller data into a complete HTML page.
///
/// Flow: registry lookup, subscription tier gate, template data
/// construction, composition, rendering.
pub struct StorefrontService<R: PackageRepository + ?Sized, C: ComponentRepository + ?Sized> {
    packages: Arc<R>,
    compositor: Compositor<C>,
    renderer: Renderer,
}

impl<R, C> StorefrontService<R, C>
where
    R: PackageRepository + ?Sized,
    C: ComponentRepository + ?Sized,
{
    pub fn new(packages: Arc<R>, components: Arc<C>, renderer: Renderer) -> Self {
        Self {
            packages,
            compositor: Compositor::new(components),
            renderer,
        }
    }

    /// Renders package `package_id` for a store on subscription `tier`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the package does not exist.
    /// Returns [`AppError::Forbidden`] if `tier` does not include the package,
    /// or if a custom theme is supplied on a tier without theme customisation.
    /// Returns [`AppError::Validation`] for invalid store or product data.
    /// Returns [`AppError::Internal`] if a component is missing or rendering fails.
    pub async fn render_package(
        &self,
        package_id: &str,
        tier: Tier,
        input: StorefrontInput,
    ) -> Result<String, AppError> {
        let package = self.find_package(package_id).await?;

        if !tier.allows(package.tier) {
            return Err(AppError::forbidden(
                "Template not available on this plan",
                json!({
                    "id": package.id,
                    "required_tier": package.tier,
                    "current_tier": tier,
                }),
            ));
        }

        if input.has_custom_theme() && !tier.allows_custom_theme() {
            return Err(AppError::forbidden(
                "Custom themes require a premium plan",
                json!({
                    "required_tier": Tier::Premium,
                    "current_tier": tier,
                }),
            ));
        }

        let data = input.into_template_data()?;
        let html = self.render_tracked(&package.id, &package.config, &data).await?;
        Ok(html)
    }

    /// Renders package `package_id` with the built-in sample store and default theme.
    ///
    /// No tier gate applies; previews are public.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the package does not exist.
    /// Returns [`AppError::Internal`] if a component is missing or rendering fails.
    pub async fn preview(&self, package_id: &str) -> Result<String, AppError> {
        let package = self.find_package(package_id).await?;
        let data = sample_template_data(Theme::default())?;

        let html = self.render_tracked(&package.id, &package.config, &data).await?;
        Ok(html)
    }

    /// Composes and renders an arbitrary config.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ComponentNotFound`] for a missing component,
    /// or any error from [`Renderer::render`].
    pub async fn render_config(
        &self,
        config: &TemplateConfig,
        data: &TemplateData,
    ) -> Result<String, TemplateError> {
        let composed = self.compositor.compose(config).await?;
        self.renderer.render(&composed, data)
    }

    async fn find_package(&self, package_id: &str) -> Result<TemplatePackage, AppError> {
        self.packages
            .find_by_id(package_id)
            .await?
            .ok_or_else(|| TemplateError::PackageNotFound(package_id.to_string()).into())
    }

    async fn render_tracked(
        &self,
        package_id: &str,
        config: &TemplateConfig,
        data: &TemplateData,
    ) -> Result<String, TemplateError> {
        let started = Instant::now();
        let result = self.render_config(config, data).await;
        let elapsed = started.elapsed();

        let package = package_id.to_string();
        metrics::histogram!("storefront_render_duration_seconds", "package" => package.clone())
            .record(elapsed.as_secs_f64());

        match &result {
            Ok(html) => {
                metrics::counter!("storefront_renders_total", "package" => package).increment(1);
                tracing::debug!(
                    "Rendered {} ({} products, {} bytes) in {:?}",
                    package_id,
                    data.products.len(),
                    html.len(),
                    elapsed
                );
            }
            Err(e) => {
                metrics::counter!("storefront_render_failures_total", "package" => package)
                    .increment(1);
                tracing::warn!("Rendering {} failed: {}", package_id, e);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::sample::sample_input;
    use crate::domain::entities::{Component, ComponentKind};
    use crate::domain::repositories::{MockComponentRepository, MockPackageRepository};
    use crate::rendering::build_engine;
    use chrono::Utc;

    fn package(id: &str, tier: Tier) -> TemplatePackage {
        TemplatePackage {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            config: TemplateConfig::new("card-test"),
            tier,
            builtin: true,
            created_at: Utc::now(),
        }
    }

    fn packages_with(tier: Tier) -> MockPackageRepository {
        let mut repo = MockPackageRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(package(id, tier))));
        repo
    }

    fn card_catalog() -> MockComponentRepository {
        let mut components = MockComponentRepository::new();
        components
            .expect_find()
            .withf(|kind, name| *kind == ComponentKind::ProductCard && name == "card-test")
            .returning(|kind, name| {
                Ok(Component::new(
                    kind,
                    name,
                    "<div class=\"product-card\" data-product-id=\"{{id}}\">{{name}} {{price}}</div>",
                    ".product-card { color: var(--primary-color); }",
                    "",
                ))
            });
        components
    }

    fn service(
        packages: MockPackageRepository,
        components: MockComponentRepository,
    ) -> StorefrontService<MockPackageRepository, MockComponentRepository> {
        StorefrontService::new(
            Arc::new(packages),
            Arc::new(components),
            Renderer::new(Arc::new(build_engine())),
        )
    }

    #[tokio::test]
    async fn test_render_package_success() {
        let service = service(packages_with(Tier::Free), card_catalog());

        let html = service
            .render_package("basic", Tier::Free, sample_input())
            .await
            .unwrap();

        assert_eq!(html.matches("data-product-id=").count(), 3);
        assert!(html.contains("Rp\u{a0}189.000"));
        assert!(html.contains("color: #667eea;"));
    }

    #[tokio::test]
    async fn test_render_package_not_found() {
        let mut packages = MockPackageRepository::new();
        packages.expect_find_by_id().returning(|_| Ok(None));
        let service = service(packages, MockComponentRepository::new());

        let result = service
            .render_package("ghost", Tier::Unlimited, sample_input())
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_tier_gate() {
        let service = service(packages_with(Tier::Premium), MockComponentRepository::new());

        let result = service
            .render_package("premium-only", Tier::Free, sample_input())
            .await;

        match result {
            Err(AppError::Forbidden { details, .. }) => {
                assert_eq!(details["required_tier"], "PREMIUM");
                assert_eq!(details["current_tier"], "FREE");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_higher_tier_can_use_lower_package() {
        let service = service(packages_with(Tier::Free), card_catalog());

        let result = service
            .render_package("basic", Tier::Unlimited, sample_input())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_custom_theme_needs_premium() {
        let mut input = sample_input();
        input.theme = Some(Theme {
            primary_color: "#ff0000".to_string(),
            ..Theme::default()
        });

        let free = service(packages_with(Tier::Free), MockComponentRepository::new());
        let result = free
            .render_package("basic", Tier::Free, input.clone())
            .await;
        assert!(matches!(result, Err(AppError::Forbidden { .. })));

        let premium = service(packages_with(Tier::Free), card_catalog());
        let html = premium
            .render_package("basic", Tier::Premium, input)
            .await
            .unwrap();
        assert!(html.contains("color: #ff0000;"));
    }

    #[tokio::test]
    async fn test_missing_component_is_internal() {
        let mut components = MockComponentRepository::new();
        components.expect_find().returning(|kind, name| {
            Err(TemplateError::ComponentNotFound {
                kind,
                name: name.to_string(),
            })
        });
        let service = service(packages_with(Tier::Free), components);

        let result = service.render_package("basic", Tier::Free, sample_input()).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_invalid_input_is_validation() {
        let mut input = sample_input();
        input.store.whatsapp = "12".to_string();
        let service = service(packages_with(Tier::Free), MockComponentRepository::new());

        let result = service.render_package("basic", Tier::Free, input).await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_preview_ignores_tier() {
        let service = service(packages_with(Tier::Unlimited), card_catalog());

        let html = service.preview("boutique").await.unwrap();

        assert!(html.contains("<title>Toko Batik Sari</title>"));
    }
}
