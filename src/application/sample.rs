//! Demo store used for gallery previews and the admin `render` command.

use crate::application::storefront_input::StorefrontInput;
use crate::domain::entities::{ProductInput, StoreInfo, TemplateData, Theme};
use crate::error::TemplateError;

pub fn sample_store() -> StoreInfo {
    StoreInfo {
        name: "Toko Batik Sari".to_string(),
        slug: "batik-sari".to_string(),
        description: Some("Batik tulis dan cap asli Pekalongan, dikirim ke seluruh Indonesia.".to_string()),
        logo_url: None,
        whatsapp: "081234567890".to_string(),
        email: Some("halo@batiksari.id".to_string()),
        address: Some("Jl. Hayam Wuruk No. 12, Pekalongan".to_string()),
        instagram: Some("batiksari".to_string()),
    }
}

pub fn sample_products() -> Vec<ProductInput> {
    vec![
        ProductInput {
            id: "prod-1".to_string(),
            name: "Kemeja Batik Parang".to_string(),
            slug: "kemeja-batik-parang".to_string(),
            description: Some("Katun primisima, motif parang klasik.".to_string()),
            price: 189000.0,
            compare_price: Some(250000.0),
            images: vec!["/static/samples/kemeja-parang.svg".to_string()],
            is_available: true,
            stock: 12,
            rating: Some(4.8),
        },
        ProductInput {
            id: "prod-2".to_string(),
            name: "Kain Batik Mega Mendung".to_string(),
            slug: "kain-batik-mega-mendung".to_string(),
            description: Some("Kain 2 meter, pewarna alami.".to_string()),
            price: 99000.0,
            compare_price: None,
            images: vec!["/static/samples/mega-mendung.svg".to_string()],
            is_available: true,
            stock: 30,
            rating: Some(4.5),
        },
        ProductInput {
            id: "prod-3".to_string(),
            name: "Selendang Sutra Kawung".to_string(),
            slug: "selendang-sutra-kawung".to_string(),
            description: None,
            price: 325000.0,
            compare_price: None,
            images: Vec::new(),
            is_available: false,
            stock: 0,
            rating: Some(3.9),
        },
    ]
}

/// Sample store and products with the given theme, or the default when `None`.
pub fn sample_input_with_theme(theme: Option<Theme>) -> StorefrontInput {
    StorefrontInput {
        store: sample_store(),
        products: sample_products(),
        theme,
    }
}

pub fn sample_input() -> StorefrontInput {
    sample_input_with_theme(None)
}

/// Render-ready sample data.
pub fn sample_template_data(theme: Theme) -> Result<TemplateData, TemplateError> {
    sample_input_with_theme(Some(theme)).into_template_data()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_is_valid() {
        let data = sample_template_data(Theme::default()).unwrap();

        data.validate().unwrap();
        assert_eq!(data.products.len(), 3);
    }

    #[test]
    fn test_sample_images_are_shipped() {
        for image in sample_products().iter().flat_map(|p| p.images.iter()) {
            let path = format!("{}{}", env!("CARGO_MANIFEST_DIR"), image);
            assert!(std::path::Path::new(&path).is_file(), "missing {image}");
        }
    }
}
