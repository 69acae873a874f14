//! Component entity: a reusable markup/style/script fragment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The slot a component fills in a storefront page.
///
/// The kebab-case form is both the wire representation and the name of the
/// catalog directory holding components of this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Nav,
    Hero,
    ProductCard,
    Footer,
    Background,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Nav,
        ComponentKind::Hero,
        ComponentKind::ProductCard,
        ComponentKind::Footer,
        ComponentKind::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Nav => "nav",
            ComponentKind::Hero => "hero",
            ComponentKind::ProductCard => "product-card",
            ComponentKind::Footer => "footer",
            ComponentKind::Background => "background",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown component kind '{s}'"))
    }
}

/// A component read from the catalog.
///
/// Identity is `(kind, name)`. Components are authored ahead of time and are
/// never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    pub name: String,
    pub markup: String,
    pub style: String,
    /// Empty when the component ships no script.
    pub script: String,
}

impl Component {
    pub fn new(
        kind: ComponentKind,
        name: impl Into<String>,
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }
}

/// Returns true if `name` is a safe catalog file stem: lowercase ASCII
/// alphanumerics and hyphens, not starting with a hyphen.
pub fn is_valid_component_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    name.len() <= 64
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
