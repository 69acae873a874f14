//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::package_service::PackageService`] - Template package registry
//! - [`services::storefront_service::StorefrontService`] - Tier gating, composition and rendering
//! - [`services::admin_auth_service::AdminAuthService`] - Admin token verification
//!
//! [`storefront_input::StorefrontInput`] is the caller-facing render input;
//! [`sample`] holds the demo store used for previews.

pub mod sample;
pub mod services;
pub mod storefront_input;
