#![allow(dead_code)]

use std::sync::Arc;
use storefront::domain::repositories::{ComponentRepository, PackageRepository};
use storefront::infrastructure::components::FsComponentRepository;
use storefront::infrastructure::persistence::InMemoryPackageRepository;
use storefront::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn components_dir() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/components")
}

pub fn component_repository() -> Arc<dyn ComponentRepository> {
    Arc::new(FsComponentRepository::new(components_dir()))
}

/// State over the shipped component catalog and an in-memory registry
/// holding the built-in packages.
pub fn create_test_state() -> AppState {
    let packages: Arc<dyn PackageRepository> = Arc::new(InMemoryPackageRepository::with_builtin());
    AppState::new(packages, component_repository(), Some(ADMIN_TOKEN), "memory")
}

pub fn bearer() -> String {
    format!("Bearer {ADMIN_TOKEN}")
}

/// A render request body for the sample-like store used across tests.
pub fn render_body(tier: &str) -> serde_json::Value {
    serde_json::json!({
        "tier": tier,
        "store": {
            "name": "Toko Uji",
            "slug": "toko-uji",
            "whatsapp": "0812-3456-7890"
        },
        "products": [
            {
                "id": "p-1",
                "name": "Kemeja Batik",
                "slug": "kemeja-batik",
                "price": 99000,
                "comparePrice": 120000,
                "images": ["https://cdn.example.com/p1.jpg"],
                "rating": 4.7
            },
            {
                "id": "p-2",
                "name": "Tas Anyaman",
                "slug": "tas-anyaman",
                "price": 150000
            }
        ]
    })
}
