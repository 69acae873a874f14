//! Template package entity: a named combination of components plus a tier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ComponentKind, Tier};

/// One component name per page slot. Only the product card is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    pub product_card: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl TemplateConfig {
    /// Creates a config with only the mandatory product-card slot filled.
    pub fn new(product_card: impl Into<String>) -> Self {
        Self {
            product_card: product_card.into(),
            ..Default::default()
        }
    }

    /// Every filled slot as `(kind, name)`, in composition order.
    pub fn slots(&self) -> Vec<(ComponentKind, &str)> {
        let mut slots = Vec::with_capacity(5);
        if let Some(nav) = &self.nav {
            slots.push((ComponentKind::Nav, nav.as_str()));
        }
        if let Some(hero) = &self.hero {
            slots.push((ComponentKind::Hero, hero.as_str()));
        }
        slots.push((ComponentKind::ProductCard, self.product_card.as_str()));
        if let Some(footer) = &self.footer {
            slots.push((ComponentKind::Footer, footer.as_str()));
        }
        if let Some(background) = &self.background {
            slots.push((ComponentKind::Background, background.as_str()));
        }
        slots
    }
}

/// A selectable storefront template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub config: TemplateConfig,
    pub tier: Tier,
    /// Shipped with the service; cannot be deleted.
    pub builtin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new package.
#[derive(Debug, Clone)]
pub struct NewTemplatePackage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub config: TemplateConfig,
    pub tier: Tier,
}

impl NewTemplatePackage {
    pub fn into_package(self, builtin: bool, created_at: DateTime<Utc>) -> TemplatePackage {
        TemplatePackage {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
            config: self.config,
            tier: self.tier,
            builtin,
            created_at,
        }
    }
}

/// Listing filter for the package registry.
///
/// `tier` is an exact match; `search` is a case-insensitive substring matched
/// against id, name and description.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    pub tier: Option<Tier>,
    pub search: Option<String>,
}

impl PackageFilter {
    pub fn matches(&self, package: &TemplatePackage) -> bool {
        if let Some(tier) = self.tier
            && package.tier != tier
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                package.id.to_lowercase().contains(&needle)
                    || package.name.to_lowercase().contains(&needle)
                    || package.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: &str, name: &str, tier: Tier) -> TemplatePackage {
        TemplatePackage {
            id: id.to_string(),
            name: name.to_string(),
            description: "Clean grid for small catalogs".to_string(),
            thumbnail: "/static/thumbs/x.png".to_string(),
            config: TemplateConfig::new("card-minimal"),
            tier,
            builtin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_slots_follow_composition_order() {
        let config = TemplateConfig {
            nav: Some("nav-simple".to_string()),
            hero: None,
            product_card: "card-minimal".to_string(),
            footer: Some("footer-simple".to_string()),
            background: Some("bg-gradient".to_string()),
        };

        let kinds: Vec<ComponentKind> = config.slots().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::Nav,
                ComponentKind::ProductCard,
                ComponentKind::Footer,
                ComponentKind::Background
            ]
        );
    }

    #[test]
    fn test_config_wire_format() {
        let config: TemplateConfig =
            serde_json::from_str(r#"{"productCard":"card-hover-overlay","nav":"nav-sticky"}"#)
                .unwrap();

        assert_eq!(config.product_card, "card-hover-overlay");
        assert_eq!(config.nav.as_deref(), Some("nav-sticky"));
        assert!(config.footer.is_none());

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("footer").is_none());
        assert_eq!(json["productCard"], "card-hover-overlay");
    }

    #[test]
    fn test_filter_by_tier() {
        let filter = PackageFilter {
            tier: Some(Tier::Premium),
            search: None,
        };

        assert!(filter.matches(&package("a", "A", Tier::Premium)));
        assert!(!filter.matches(&package("b", "B", Tier::Free)));
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let filter = PackageFilter {
            tier: None,
            search: Some("  MINIMAL ".to_string()),
        };

        assert!(filter.matches(&package("modern-minimal", "Modern", Tier::Free)));
        assert!(!filter.matches(&package("bold", "Bold Shop", Tier::Free)));

        let by_description = PackageFilter {
            tier: None,
            search: Some("catalogs".to_string()),
        };
        assert!(by_description.matches(&package("bold", "Bold Shop", Tier::Free)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(PackageFilter::default().matches(&package("x", "X", Tier::Unlimited)));
    }
}
