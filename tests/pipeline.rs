//! Composition and rendering against the shipped component catalog.

mod common;

use std::sync::Arc;
use storefront::application::sample::sample_template_data;
use storefront::domain::entities::{ComponentKind, TemplateConfig, Theme};
use storefront::error::TemplateError;
use storefront::infrastructure::components::{FsComponentRepository, PreloadedComponentRepository};
use storefront::infrastructure::persistence::builtin_packages;
use storefront::rendering::{Compositor, Renderer, build_engine};

fn renderer() -> Renderer {
    Renderer::new(Arc::new(build_engine()))
}

fn compositor() -> Compositor<FsComponentRepository> {
    Compositor::new(Arc::new(FsComponentRepository::new(common::components_dir())))
}

fn hover_config() -> TemplateConfig {
    TemplateConfig {
        nav: Some("nav-sticky".to_string()),
        hero: Some("hero-gradient".to_string()),
        footer: Some("footer-whatsapp".to_string()),
        ..TemplateConfig::new("card-hover-overlay")
    }
}

fn style_of(html: &str) -> &str {
    let start = html.find("<style>").unwrap();
    let end = html.find("</style>").unwrap();
    &html[start..end]
}

#[tokio::test]
async fn test_hover_overlay_renders_every_product() {
    let composed = compositor().compose(&hover_config()).await.unwrap();
    let data = sample_template_data(Theme::default()).unwrap();

    let html = renderer().render(&composed, &data).unwrap();

    assert_eq!(html.matches("data-product-id=").count(), 3);
    for product in &data.products {
        assert!(html.contains(&format!("data-product-id=\"{}\"", product.id)));
    }
    assert!(html.contains("#667eea"));
    assert!(!style_of(&html).contains("var(--"));
}

#[tokio::test]
async fn test_formatted_prices_and_checkout_links() {
    let composed = compositor().compose(&hover_config()).await.unwrap();
    let data = sample_template_data(Theme::default()).unwrap();

    let html = renderer().render(&composed, &data).unwrap();

    assert!(html.contains("Rp\u{a0}189.000"));
    assert!(html.contains("Rp\u{a0}250.000"));
    assert!(html.contains("https://wa.me/6281234567890?text="));
    assert!(html.contains("card-hover-overlay__rating is-top-rated"));
}

#[tokio::test]
async fn test_single_document_shell() {
    let composed = compositor().compose(&hover_config()).await.unwrap();
    let data = sample_template_data(Theme::default()).unwrap();

    let html = renderer().render(&composed, &data).unwrap();

    assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    assert_eq!(html.matches("<head>").count(), 1);
    assert_eq!(html.matches("<body>").count(), 1);
    assert_eq!(html.matches("<style>").count(), 1);
}

#[tokio::test]
async fn test_rendering_is_deterministic() {
    let composed = compositor().compose(&hover_config()).await.unwrap();
    let data = sample_template_data(Theme::default()).unwrap();
    let renderer = renderer();

    let first = renderer.render(&composed, &data).unwrap();
    let second = renderer.render(&composed, &data).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_footer_slot_omits_footer() {
    let config = TemplateConfig {
        footer: None,
        ..hover_config()
    };
    let composed = compositor().compose(&config).await.unwrap();
    let data = sample_template_data(Theme::default()).unwrap();

    let html = renderer().render(&composed, &data).unwrap();

    assert!(!html.contains("footer-whatsapp"));
    assert!(!html.contains("<footer"));
}

#[tokio::test]
async fn test_missing_card_component() {
    let config = TemplateConfig::new("card-does-not-exist");

    let result = compositor().compose(&config).await;

    assert!(matches!(
        result,
        Err(TemplateError::ComponentNotFound {
            kind: ComponentKind::ProductCard,
            ..
        })
    ));
}

#[tokio::test]
async fn test_custom_theme_substituted() {
    let theme = Theme {
        primary_color: "#b91c1c".to_string(),
        font_family: "'Lora', serif".to_string(),
        ..Theme::default()
    };
    let composed = compositor().compose(&hover_config()).await.unwrap();
    let data = sample_template_data(theme).unwrap();

    let html = renderer().render(&composed, &data).unwrap();
    let style = style_of(&html);

    assert!(style.contains("#b91c1c"));
    assert!(style.contains("'Lora', serif"));
    assert!(!style.contains("#667eea"));
}

#[tokio::test]
async fn test_every_builtin_package_renders() {
    let fs = FsComponentRepository::new(common::components_dir());
    let preloaded = PreloadedComponentRepository::load(&fs).await.unwrap();
    let compositor = Compositor::new(Arc::new(preloaded));
    let data = sample_template_data(Theme::default()).unwrap();
    let renderer = renderer();

    for package in builtin_packages() {
        let composed = compositor.compose(&package.config).await.unwrap();
        let html = renderer
            .render(&composed, &data)
            .unwrap_or_else(|e| panic!("{} failed to render: {e}", package.id));

        assert_eq!(
            html.matches("data-product-id=").count(),
            data.products.len(),
            "{}",
            package.id
        );
    }
}
