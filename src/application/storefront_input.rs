//! Caller-supplied storefront data and its conversion into render input.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ProductInput, ProductView, StoreInfo, TemplateData, Theme};
use crate::error::TemplateError;
use crate::utils::currency::format_rupiah;
use crate::utils::whatsapp::{checkout_url, normalize_phone, order_message};

/// Store, products and an optional theme, as posted by callers.
///
/// A missing theme means the default theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontInput {
    pub store: StoreInfo,
    #[serde(default)]
    pub products: Vec<ProductInput>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl StorefrontInput {
    /// True when the caller supplied a theme other than the default.
    pub fn has_custom_theme(&self) -> bool {
        self.theme.as_ref().is_some_and(|t| *t != Theme::default())
    }

    /// Formats prices and derives checkout links for every product.
    ///
    /// The store's WhatsApp number is normalized in place so components can
    /// link to it directly.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidTemplateData`] if the WhatsApp number
    /// cannot be normalized, or [`TemplateError::InvalidAmount`] for a
    /// non-finite price.
    pub fn into_template_data(self) -> Result<TemplateData, TemplateError> {
        let mut store = self.store;
        let phone = normalize_phone(&store.whatsapp).ok_or_else(|| {
            TemplateError::invalid_data("store.whatsapp", "must be a phone number of 8-15 digits")
        })?;
        store.whatsapp = phone;

        let products = self
            .products
            .into_iter()
            .map(|product| product_view(&store, product))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TemplateData {
            store,
            products,
            theme: self.theme.unwrap_or_default(),
        })
    }
}

fn product_view(store: &StoreInfo, product: ProductInput) -> Result<ProductView, TemplateError> {
    let price = format_rupiah(product.price)?;

    // A compare price only counts when it is an actual markdown.
    let compare_price_raw = product.compare_price.filter(|c| *c > product.price);
    let compare_price = compare_price_raw.map(format_rupiah).transpose()?;

    let message = order_message(&store.name, &product.name, &price);
    let whatsapp_url = checkout_url(&store.whatsapp, &message)
        .map_err(|e| TemplateError::invalid_data("store.whatsapp", e.to_string()))?;

    Ok(ProductView {
        image_url: product.images.first().cloned(),
        id: product.id,
        name: product.name,
        slug: product.slug,
        description: product.description,
        price,
        price_raw: product.price,
        compare_price,
        compare_price_raw,
        images: product.images,
        is_available: product.is_available,
        stock: product.stock,
        rating: product.rating,
        whatsapp_url,
    })
}
