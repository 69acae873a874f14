//! Template packages shipped with the service.
//!
//! Seeded into whichever registry backs the service; they cannot be deleted
//! through the API.

use crate::domain::entities::{NewTemplatePackage, TemplateConfig, Tier};

fn slot(name: &str) -> Option<String> {
    Some(name.to_string())
}

/// The built-in package list, in display order.
pub fn builtin_packages() -> Vec<NewTemplatePackage> {
    vec![
        NewTemplatePackage {
            id: "modern-minimal".to_string(),
            name: "Modern Minimal".to_string(),
            description: "Clean white layout with a simple navigation bar, centered hero and minimal product cards.".to_string(),
            thumbnail: "/static/thumbnails/modern-minimal.svg".to_string(),
            config: TemplateConfig {
                nav: slot("nav-simple"),
                hero: slot("hero-centered"),
                product_card: "card-minimal".to_string(),
                footer: slot("footer-simple"),
                background: None,
            },
            tier: Tier::Free,
        },
        NewTemplatePackage {
            id: "catalog-compact".to_string(),
            name: "Catalog Compact".to_string(),
            description: "Dense product grid without a hero, suited to stores with large catalogs.".to_string(),
            thumbnail: "/static/thumbnails/catalog-compact.svg".to_string(),
            config: TemplateConfig {
                nav: slot("nav-simple"),
                hero: None,
                product_card: "card-compact".to_string(),
                footer: slot("footer-simple"),
                background: None,
            },
            tier: Tier::Free,
        },
        NewTemplatePackage {
            id: "hover-showcase".to_string(),
            name: "Hover Showcase".to_string(),
            description: "Sticky navigation, gradient hero and image cards that reveal details and a WhatsApp order button on hover.".to_string(),
            thumbnail: "/static/thumbnails/hover-showcase.svg".to_string(),
            config: TemplateConfig {
                nav: slot("nav-sticky"),
                hero: slot("hero-gradient"),
                product_card: "card-hover-overlay".to_string(),
                footer: slot("footer-whatsapp"),
                background: None,
            },
            tier: Tier::Premium,
        },
        NewTemplatePackage {
            id: "boutique-elegant".to_string(),
            name: "Boutique Elegant".to_string(),
            description: "Gradient backdrop, sticky navigation and overlay cards for premium boutique stores.".to_string(),
            thumbnail: "/static/thumbnails/boutique-elegant.svg".to_string(),
            config: TemplateConfig {
                nav: slot("nav-sticky"),
                hero: slot("hero-centered"),
                product_card: "card-hover-overlay".to_string(),
                footer: slot("footer-whatsapp"),
                background: slot("bg-gradient"),
            },
            tier: Tier::Unlimited,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::ComponentRepository;
    use crate::infrastructure::components::FsComponentRepository;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let packages = builtin_packages();
        let ids: HashSet<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), packages.len());
    }

    #[test]
    fn test_every_tier_represented() {
        let packages = builtin_packages();
        for tier in Tier::ALL {
            assert!(packages.iter().any(|p| p.tier == tier), "no {tier} package");
        }
    }

    #[tokio::test]
    async fn test_every_referenced_component_exists() {
        let catalog =
            FsComponentRepository::new(concat!(env!("CARGO_MANIFEST_DIR"), "/components"));

        for package in builtin_packages() {
            for (kind, name) in package.config.slots() {
                assert!(
                    catalog.exists(kind, name).await.unwrap(),
                    "{} references missing {}/{}",
                    package.id,
                    kind,
                    name
                );
            }
        }
    }

    #[test]
    fn test_thumbnails_are_shipped() {
        for package in builtin_packages() {
            let path = format!("{}{}", env!("CARGO_MANIFEST_DIR"), package.thumbnail);
            assert!(
                std::path::Path::new(&path).is_file(),
                "{} thumbnail missing at {}",
                package.id,
                package.thumbnail
            );
        }
    }
}
