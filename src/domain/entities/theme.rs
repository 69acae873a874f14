//! Theme values substituted into component stylesheets.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// CSS custom-property names recognised by theme substitution.
///
/// Component stylesheets reference them as `var(--primary-color)` and so on;
/// this set is closed.
pub const THEME_TOKENS: [&str; 8] = [
    "primary-color",
    "secondary-color",
    "accent-color",
    "bg-color",
    "text-color",
    "font-family",
    "heading-font",
    "border-radius",
];

/// Colour, font and shape values customising a rendered storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub heading_font: String,
    pub border_radius: String,
    pub button_style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Pill,
    Square,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#667eea".to_string(),
            secondary_color: "#764ba2".to_string(),
            accent_color: "#f093fb".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#333333".to_string(),
            font_family: "'Inter', sans-serif".to_string(),
            heading_font: "'Poppins', sans-serif".to_string(),
            border_radius: "12px".to_string(),
            button_style: ButtonStyle::Rounded,
        }
    }
}

impl Theme {
    /// Literal value for one of [`THEME_TOKENS`].
    pub fn token_value(&self, token: &str) -> Option<&str> {
        let value = match token {
            "primary-color" => &self.primary_color,
            "secondary-color" => &self.secondary_color,
            "accent-color" => &self.accent_color,
            "bg-color" => &self.background_color,
            "text-color" => &self.text_color,
            "font-family" => &self.font_family,
            "heading-font" => &self.heading_font,
            "border-radius" => &self.border_radius,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Checks every value is present and cannot break out of a CSS declaration.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let fields = [
            ("theme.primaryColor", &self.primary_color),
            ("theme.secondaryColor", &self.secondary_color),
            ("theme.accentColor", &self.accent_color),
            ("theme.backgroundColor", &self.background_color),
            ("theme.textColor", &self.text_color),
            ("theme.fontFamily", &self.font_family),
            ("theme.headingFont", &self.heading_font),
            ("theme.borderRadius", &self.border_radius),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(TemplateError::invalid_data(field, "must not be empty"));
            }
            if value.len() > 128 {
                return Err(TemplateError::invalid_data(field, "must be at most 128 characters"));
            }
            if value.chars().any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\')) {
                return Err(TemplateError::invalid_data(
                    field,
                    "must not contain ; { } < > or backslashes",
                ));
            }
        }

        Ok(())
    }

    /// Button corner radius derived from [`ButtonStyle`].
    pub fn button_radius(&self) -> &str {
        match self.button_style {
            ButtonStyle::Rounded => &self.border_radius,
            ButtonStyle::Pill => "999px",
            ButtonStyle::Square => "0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        assert!(Theme::default().validate().is_ok());
    }

    #[test]
    fn test_every_token_has_a_value() {
        let theme = Theme::default();
        for token in THEME_TOKENS {
            assert!(theme.token_value(token).is_some(), "{token} has no value");
        }
        assert_eq!(theme.token_value("primary-color"), Some("#667eea"));
        assert_eq!(theme.token_value("bg-color"), Some("#ffffff"));
        assert!(theme.token_value("shadow").is_none());
    }

    #[test]
    fn test_empty_color_rejected() {
        let theme = Theme {
            accent_color: "  ".to_string(),
            ..Theme::default()
        };

        let err = theme.validate().unwrap_err();
        assert!(matches!(
            err,
            TemplateError::InvalidTemplateData { ref field, .. } if field == "theme.accentColor"
        ));
    }

    #[test]
    fn test_css_breakout_rejected() {
        let theme = Theme {
            primary_color: "red; } body { display: none".to_string(),
            ..Theme::default()
        };

        assert!(theme.validate().is_err());

        let theme = Theme {
            font_family: "</style><script>".to_string(),
            ..Theme::default()
        };
        assert!(theme.validate().is_err());
    }

    #[test]
    fn test_button_radius() {
        let mut theme = Theme::default();
        assert_eq!(theme.button_radius(), "12px");
        theme.button_style = ButtonStyle::Pill;
        assert_eq!(theme.button_radius(), "999px");
        theme.button_style = ButtonStyle::Square;
        assert_eq!(theme.button_radius(), "0");
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(json["primaryColor"], "#667eea");
        assert_eq!(json["buttonStyle"], "rounded");
    }
}
