//! WhatsApp checkout links.
//!
//! Storefronts check out by opening a `wa.me` chat with a prefilled order
//! message addressed to the store's number.

use url::{Url, form_urlencoded};

/// Normalizes a phone number to international digits without `+`.
///
/// Non-digits are stripped. Indonesian local numbers are rewritten:
/// a leading `0` becomes `62`, and a bare `8...` mobile number gets `62` prepended.
///
/// Returns `None` if the result is not 8–15 digits long.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_phone("0812-3456-7890").as_deref(), Some("6281234567890"));
/// assert_eq!(normalize_phone("+62 812 3456 7890").as_deref(), Some("6281234567890"));
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let normalized = if let Some(rest) = digits.strip_prefix('0') {
        format!("62{rest}")
    } else if digits.starts_with('8') {
        format!("62{digits}")
    } else {
        digits
    };

    (8..=15).contains(&normalized.len()).then_some(normalized)
}

/// Builds the prefilled order message for one product.
pub fn order_message(store_name: &str, product_name: &str, price: &str) -> String {
    format!(
        "Halo {store_name}, saya ingin memesan *{product_name}* ({price}). Apakah masih tersedia?"
    )
}

/// Builds a `https://wa.me/<phone>?text=<message>` checkout link.
///
/// Spaces are encoded as `%20` because WhatsApp does not decode `+`.
///
/// # Errors
///
/// Returns [`url::ParseError`] if the phone produces an invalid URL.
pub fn checkout_url(phone: &str, message: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse("https://wa.me/")?.join(phone)?;
    let text: String = form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    url.set_query(Some(&format!("text={text}")));
    Ok(url.into())
}
