//! Render-time input: store identity, product view-records and theme.
//!
//! The serialized (camelCase) form is what component templates see, e.g.
//! `{{store.name}}`, `{{#each products}}{{price}}{{/each}}`.

use serde::{Deserialize, Serialize};

use super::Theme;
use crate::error::TemplateError;

/// Store identity and contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// WhatsApp number receiving checkout messages.
    pub whatsapp: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// A product as supplied by the caller, before formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Price before discount; shown struck through when greater than `price`.
    #[serde(default)]
    pub compare_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub rating: Option<f64>,
}

fn default_available() -> bool {
    true
}

/// A product view-record as seen by component templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Formatted Rupiah price, e.g. `Rp\u{a0}99.000`.
    pub price: String,
    pub price_raw: f64,
    pub compare_price: Option<String>,
    pub compare_price_raw: Option<f64>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub is_available: bool,
    pub stock: i64,
    pub rating: Option<f64>,
    /// `wa.me` checkout link carrying a prefilled order message.
    pub whatsapp_url: String,
}

/// Everything a render needs. Built per request and consumed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub store: StoreInfo,
    pub products: Vec<ProductView>,
    pub theme: Theme,
}

impl TemplateData {
    /// Rejects incomplete or out-of-range data before rendering.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidTemplateData`] naming the first offending field.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.store.name.trim().is_empty() {
            return Err(TemplateError::invalid_data("store.name", "must not be empty"));
        }
        if self.store.slug.trim().is_empty() {
            return Err(TemplateError::invalid_data("store.slug", "must not be empty"));
        }
        if self.store.whatsapp.trim().is_empty() {
            return Err(TemplateError::invalid_data("store.whatsapp", "must not be empty"));
        }

        for (i, product) in self.products.iter().enumerate() {
            product.validate(i)?;
        }

        self.theme.validate()
    }
}

impl ProductView {
    fn validate(&self, index: usize) -> Result<(), TemplateError> {
        let field = |name: &str| format!("products[{index}].{name}");

        if self.id.trim().is_empty() {
            return Err(TemplateError::invalid_data(field("id"), "must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(TemplateError::invalid_data(field("name"), "must not be empty"));
        }
        if !self.price_raw.is_finite() || self.price_raw < 0.0 {
            return Err(TemplateError::invalid_data(
                field("priceRaw"),
                "must be a non-negative number",
            ));
        }
        if self.stock < 0 {
            return Err(TemplateError::invalid_data(field("stock"), "must not be negative"));
        }
        if let Some(rating) = self.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(TemplateError::invalid_data(
                field("rating"),
                "must be between 0 and 5",
            ));
        }
        Ok(())
    }
}
