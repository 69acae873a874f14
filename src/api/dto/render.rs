//! DTOs for the render endpoint.

use serde::Deserialize;

use crate::application::storefront_input::StorefrontInput;
use crate::domain::entities::Tier;

/// Render request: the store's subscription tier plus storefront data.
///
/// ```json
/// {
///   "tier": "PREMIUM",
///   "store": { "name": "Toko Batik Sari", "slug": "batik-sari", "whatsapp": "081234567890" },
///   "products": [{ "id": "p1", "name": "Kemeja", "slug": "kemeja", "price": 189000 }],
///   "theme": { "primaryColor": "#0f766e", ... }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Defaults to `FREE` when omitted.
    ///
    /// Trusted as sent: the upstream application resolves the store's plan and
    /// must not forward this field from end users.
    #[serde(default)]
    pub tier: Tier,

    #[serde(flatten)]
    pub input: StorefrontInput,
}
