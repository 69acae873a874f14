//! Fixed page scaffolding: the products section, grid CSS and HTML document shell.

use handlebars::html_escape;

use crate::domain::entities::Theme;

/// Icon font stylesheet linked from every storefront.
pub const ICON_FONT_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

const PRODUCTS_SECTION_OPEN: &str = r#"<section class="products-section" id="products">
  <div class="products-container">
    <div class="products-grid">
      {{#each products}}
"#;

const PRODUCTS_SECTION_CLOSE: &str = r#"
      {{else}}
      <p class="products-empty">Belum ada produk.</p>
      {{/each}}
    </div>
  </div>
</section>
"#;

/// Responsive grid shared by every product card.
pub const PRODUCTS_GRID_CSS: &str = r#"
.products-section {
  padding: 3rem 1.5rem;
}
.products-container {
  max-width: 1200px;
  margin: 0 auto;
}
.products-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}
.products-empty {
  grid-column: 1 / -1;
  text-align: center;
  opacity: 0.7;
}
@media (max-width: 768px) {
  .products-section {
    padding: 2rem 1rem;
  }
  .products-grid {
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
  }
}
@media (max-width: 480px) {
  .products-grid {
    grid-template-columns: 1fr;
  }
}
"#;

/// Wraps product-card markup in the repeat block over `products`.
pub fn wrap_products_section(card_markup: &str) -> String {
    let mut html = String::with_capacity(
        PRODUCTS_SECTION_OPEN.len() + card_markup.len() + PRODUCTS_SECTION_CLOSE.len(),
    );
    html.push_str(PRODUCTS_SECTION_OPEN);
    html.push_str(card_markup.trim_end());
    html.push_str(PRODUCTS_SECTION_CLOSE);
    html
}

/// Reset and base rules placed ahead of component CSS.
///
/// Theme references here go through the same substitution as component CSS;
/// the button radius is resolved from [`Theme::button_style`] up front.
pub fn base_css(theme: &Theme) -> String {
    format!(
        r#"*, *::before, *::after {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}
html {{
  scroll-behavior: smooth;
}}
body {{
  font-family: var(--font-family);
  color: var(--text-color);
  background-color: var(--bg-color);
  line-height: 1.6;
}}
h1, h2, h3, h4, h5, h6 {{
  font-family: var(--heading-font);
  line-height: 1.25;
}}
img {{
  max-width: 100%;
  display: block;
}}
a {{
  color: inherit;
  text-decoration: none;
}}
.btn {{
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border: none;
  border-radius: {button_radius};
  background: var(--primary-color);
  color: #ffffff;
  font-weight: 600;
  cursor: pointer;
}}
"#,
        button_radius = theme.button_radius()
    )
}

/// Assembles the final document from already-rendered parts.
pub fn document(title: &str, style: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="{ICON_FONT_STYLESHEET}">
  <style>
{style}
  </style>
</head>
<body>
{body}
<script>
{script}
</script>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ButtonStyle;

    #[test]
    fn test_products_section_wraps_card_in_each_block() {
        let html = wrap_products_section("<article class=\"product-card\">{{name}}</article>\n");

        let each = html.find("{{#each products}}").unwrap();
        let card = html.find("<article").unwrap();
        let end = html.find("{{/each}}").unwrap();
        assert!(each < card && card < end);
        assert!(html.contains("{{else}}"));
    }

    #[test]
    fn test_grid_css_has_breakpoints() {
        assert!(PRODUCTS_GRID_CSS.contains("@media (max-width: 768px)"));
        assert!(PRODUCTS_GRID_CSS.contains("@media (max-width: 480px)"));
    }

    #[test]
    fn test_base_css_button_radius() {
        let theme = Theme {
            button_style: ButtonStyle::Pill,
            ..Theme::default()
        };

        assert!(base_css(&theme).contains("border-radius: 999px;"));
        assert!(base_css(&Theme::default()).contains("border-radius: 12px;"));
    }

    #[test]
    fn test_document_escapes_title() {
        let doc = document("Tas & <Dompet>", "", "<main></main>", "");

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Tas &amp; &lt;Dompet&gt;</title>"));
        assert!(doc.contains(ICON_FONT_STYLESHEET));
        assert_eq!(doc.matches("<head>").count(), 1);
        assert_eq!(doc.matches("<body>").count(), 1);
    }
}
