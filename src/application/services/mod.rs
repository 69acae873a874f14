//! Business logic services for the application layer.

pub mod admin_auth_service;
pub mod package_service;
pub mod storefront_service;

pub use admin_auth_service::AdminAuthService;
pub use package_service::PackageService;
pub use storefront_service::StorefrontService;
