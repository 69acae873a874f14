//! Theme substitution for component stylesheets.
//!
//! CSS is not run through the template engine. The eight theme custom
//! properties are a closed set, so `var(--name)` references are replaced
//! textually with the literal theme value.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::domain::entities::Theme;

/// `var(--name)` with optional whitespace and an optional fallback argument,
/// which may itself contain one level of parentheses (`rgb(...)`).
static THEME_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"var\(\s*--([A-Za-z0-9-]+)\s*(?:,(?:[^()]|\([^()]*\))*)?\)").unwrap()
});

/// Replaces every recognised theme reference in `css` with its literal value.
///
/// Unknown custom properties are left untouched.
pub fn apply_theme(css: &str, theme: &Theme) -> String {
    THEME_VAR_REGEX
        .replace_all(css, |caps: &Captures| {
            let token = &caps[1];
            match theme.token_value(token) {
                Some(value) => value.to_string(),
                None => {
                    tracing::debug!("Leaving unknown CSS variable --{} unresolved", token);
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}
