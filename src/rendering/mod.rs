//! Template composition and rendering pipeline.
//!
//! # Flow
//!
//! 1. A [`crate::domain::entities::TemplatePackage`] is selected by id
//! 2. [`compositor::Compositor`] reads the package's components from the catalog and
//!    concatenates them (nav, hero, products, footer, background) into one
//!    [`compositor::ComposedTemplate`]
//! 3. [`renderer::Renderer`] evaluates markup and script with Handlebars, substitutes
//!    theme values into the CSS and wraps the result in a full HTML document
//!
//! # Modules
//!
//! - [`compositor`] - Component concatenation in fixed slot order
//! - [`renderer`] - Data substitution and document assembly
//! - [`engine`] - One-time Handlebars configuration and helpers
//! - [`theme`] - CSS theme variable substitution
//! - [`layout`] - Products section shell, grid CSS and document shell

pub mod compositor;
pub mod engine;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use compositor::{ComposedTemplate, Compositor};
pub use engine::build_engine;
pub use renderer::Renderer;
