//! Core domain entities of the storefront template service.
//!
//! Entities are plain data structures with small validation helpers; the
//! composition and rendering logic lives in [`crate::rendering`].
//!
//! # Entity Types
//!
//! - [`Component`] / [`ComponentKind`] - Reusable markup/style/script fragments
//! - [`TemplatePackage`] / [`TemplateConfig`] - Selectable component combinations
//! - [`Tier`] - Subscription level gating packages and theme customisation
//! - [`TemplateData`] - Render-time store, product and theme input
//! - [`Theme`] - Colour, font and shape values
//!
//! # Design Pattern
//!
//! Creation inputs have their own structs:
//! - `NewTemplatePackage` - For registering a package
//! - `ProductInput` - Raw product before price formatting

pub mod component;
pub mod package;
pub mod template_data;
pub mod theme;
pub mod tier;

pub use component::{Component, ComponentKind, is_valid_component_name};
pub use package::{NewTemplatePackage, PackageFilter, TemplateConfig, TemplatePackage};
pub use template_data::{ProductInput, ProductView, StoreInfo, TemplateData};
pub use theme::{ButtonStyle, THEME_TOKENS, Theme};
pub use tier::Tier;
