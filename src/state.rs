//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminAuthService, PackageService, StorefrontService};
use crate::domain::repositories::{ComponentRepository, PackageRepository};
use crate::rendering::{Renderer, build_engine};

pub type DynPackageService = PackageService<dyn PackageRepository, dyn ComponentRepository>;
pub type DynStorefrontService = StorefrontService<dyn PackageRepository, dyn ComponentRepository>;

#[derive(Clone)]
pub struct AppState {
    pub package_service: Arc<DynPackageService>,
    pub storefront_service: Arc<DynStorefrontService>,
    pub admin_auth: Arc<AdminAuthService>,
    pub components: Arc<dyn ComponentRepository>,
    /// `"postgres"` or `"memory"`, reported by the health check.
    pub registry_backend: &'static str,
}

impl AppState {
    /// Wires services around a package registry and a component catalog.
    ///
    /// Builds the template engine once; every render shares it.
    pub fn new(
        packages: Arc<dyn PackageRepository>,
        components: Arc<dyn ComponentRepository>,
        admin_token: Option<&str>,
        registry_backend: &'static str,
    ) -> Self {
        let renderer = Renderer::new(Arc::new(build_engine()));

        Self {
            package_service: Arc::new(PackageService::new(packages.clone(), components.clone())),
            storefront_service: Arc::new(StorefrontService::new(
                packages,
                components.clone(),
                renderer,
            )),
            admin_auth: Arc::new(AdminAuthService::new(admin_token)),
            components,
            registry_backend,
        }
    }
}
