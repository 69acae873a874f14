//! Compositor: assembles a package's components into one markup/style/script triple.

use std::sync::Arc;

use crate::domain::entities::{Component, ComponentKind, TemplateConfig};
use crate::domain::repositories::ComponentRepository;
use crate::error::TemplateError;
use crate::rendering::layout::{PRODUCTS_GRID_CSS, wrap_products_section};

/// Combined, not yet rendered, page sources.
///
/// `markup` and `script` are Handlebars templates; `style` is CSS that still
/// contains theme variable references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedTemplate {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl ComposedTemplate {
    fn append(&mut self, component: &Component) {
        push_block(&mut self.markup, &component.markup);
        push_block(&mut self.style, &component.style);
        push_block(&mut self.script, &component.script);
    }
}

fn push_block(buffer: &mut String, body: &str) {
    let body = body.trim();
    if body.is_empty() {
        return;
    }
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(body);
    buffer.push('\n');
}

/// Builds [`ComposedTemplate`]s from template configs.
///
/// Slot order is fixed: nav, hero, products, footer, background. Component
/// authors rely on it for position-dependent CSS such as sticky headers.
pub struct Compositor<C: ComponentRepository + ?Sized> {
    components: Arc<C>,
}

impl<C: ComponentRepository + ?Sized> Compositor<C> {
    pub fn new(components: Arc<C>) -> Self {
        Self { components }
    }

    /// Composes every slot filled in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::ComponentNotFound`] if any referenced component is
    /// missing; a partially composed page is never returned.
    pub async fn compose(&self, config: &TemplateConfig) -> Result<ComposedTemplate, TemplateError> {
        let mut composed = ComposedTemplate::default();

        if let Some(nav) = &config.nav {
            let component = self.components.find(ComponentKind::Nav, nav).await?;
            composed.append(&component);
        }

        if let Some(hero) = &config.hero {
            let component = self.components.find(ComponentKind::Hero, hero).await?;
            composed.append(&component);
        }

        let card = self
            .components
            .find(ComponentKind::ProductCard, &config.product_card)
            .await?;
        push_block(&mut composed.markup, &wrap_products_section(&card.markup));
        push_block(&mut composed.style, PRODUCTS_GRID_CSS);
        push_block(&mut composed.style, &card.style);
        push_block(&mut composed.script, &card.script);

        if let Some(footer) = &config.footer {
            let component = self.components.find(ComponentKind::Footer, footer).await?;
            composed.append(&component);
        }

        if let Some(background) = &config.background {
            let component = self
                .components
                .find(ComponentKind::Background, background)
                .await?;
            composed.append(&component);
        }

        tracing::debug!(
            product_card = %config.product_card,
            markup_bytes = composed.markup.len(),
            style_bytes = composed.style.len(),
            "Composed template"
        );

        Ok(composed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockComponentRepository;

    fn stub(kind: ComponentKind, name: &str) -> Component {
        Component::new(
            kind,
            name,
            format!("<div class=\"{name}\"></div>"),
            format!(".{name} {{ color: var(--primary-color); }}"),
            format!("console.log('{name}');"),
        )
    }

    fn catalog_mock() -> MockComponentRepository {
        let mut mock = MockComponentRepository::new();
        mock.expect_find().returning(|kind, name| {
            if name.starts_with("missing") {
                Err(TemplateError::ComponentNotFound {
                    kind,
                    name: name.to_string(),
                })
            } else {
                Ok(stub(kind, name))
            }
        });
        mock
    }

    fn full_config() -> TemplateConfig {
        TemplateConfig {
            nav: Some("nav-a".to_string()),
            hero: Some("hero-a".to_string()),
            product_card: "card-a".to_string(),
            footer: Some("footer-a".to_string()),
            background: Some("bg-a".to_string()),
        }
    }

    #[tokio::test]
    async fn test_slot_order_is_fixed() {
        let compositor = Compositor::new(Arc::new(catalog_mock()));

        let composed = compositor.compose(&full_config()).await.unwrap();

        let positions: Vec<usize> = ["nav-a", "hero-a", "card-a", "footer-a", "bg-a"]
            .iter()
            .map(|name| composed.markup.find(&format!("class=\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let script_positions: Vec<usize> = ["nav-a", "hero-a", "card-a", "footer-a", "bg-a"]
            .iter()
            .map(|name| composed.script.find(&format!("'{name}'")).unwrap())
            .collect();
        assert!(script_positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_card_is_inside_repeat_block() {
        let compositor = Compositor::new(Arc::new(catalog_mock()));

        let composed = compositor.compose(&full_config()).await.unwrap();

        let each = composed.markup.find("{{#each products}}").unwrap();
        let card = composed.markup.find("class=\"card-a\"").unwrap();
        let end = composed.markup.find("{{/each}}").unwrap();
        assert!(each < card && card < end);
        assert!(composed.markup.find("class=\"hero-a\"").unwrap() < each);
        assert!(composed.markup.find("class=\"footer-a\"").unwrap() > end);
    }

    #[tokio::test]
    async fn test_grid_css_precedes_card_css() {
        let compositor = Compositor::new(Arc::new(catalog_mock()));

        let composed = compositor.compose(&TemplateConfig::new("card-a")).await.unwrap();

        let grid = composed.style.find(".products-grid").unwrap();
        let card = composed.style.find(".card-a").unwrap();
        assert!(grid < card);
        assert!(composed.style.contains("max-width: 768px"));
        assert!(composed.style.contains("max-width: 480px"));
    }

    #[tokio::test]
    async fn test_optional_slots_skipped() {
        let mut mock = MockComponentRepository::new();
        mock.expect_find()
            .withf(|kind, _| *kind == ComponentKind::ProductCard)
            .times(1)
            .returning(|kind, name| Ok(stub(kind, name)));

        let compositor = Compositor::new(Arc::new(mock));

        let composed = compositor.compose(&TemplateConfig::new("card-a")).await.unwrap();

        assert!(!composed.markup.contains("footer"));
        assert!(!composed.markup.contains("nav-"));
    }

    #[tokio::test]
    async fn test_missing_card_is_an_error() {
        let compositor = Compositor::new(Arc::new(catalog_mock()));

        let result = compositor
            .compose(&TemplateConfig::new("missing-card"))
            .await;

        assert!(matches!(
            result,
            Err(TemplateError::ComponentNotFound { kind: ComponentKind::ProductCard, ref name })
                if name == "missing-card"
        ));
    }

    #[tokio::test]
    async fn test_missing_optional_component_is_an_error() {
        let compositor = Compositor::new(Arc::new(catalog_mock()));
        let config = TemplateConfig {
            footer: Some("missing-footer".to_string()),
            ..TemplateConfig::new("card-a")
        };

        let result = compositor.compose(&config).await;

        assert!(matches!(
            result,
            Err(TemplateError::ComponentNotFound { kind: ComponentKind::Footer, .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_script_adds_nothing() {
        let mut mock = MockComponentRepository::new();
        mock.expect_find()
            .returning(|kind, name| Ok(Component::new(kind, name, "<p></p>", "p {}", "")));

        let compositor = Compositor::new(Arc::new(mock));

        let composed = compositor.compose(&TemplateConfig::new("card-a")).await.unwrap();

        assert!(composed.script.is_empty());
    }
}
