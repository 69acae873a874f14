//! Renderer: substitutes caller data into a composed template.

use handlebars::Handlebars;
use std::sync::Arc;

use crate::domain::entities::TemplateData;
use crate::error::TemplateError;
use crate::rendering::compositor::ComposedTemplate;
use crate::rendering::layout::{base_css, document};
use crate::rendering::theme::apply_theme;

/// Produces complete HTML documents from composed templates.
///
/// Stateless apart from the shared engine: the same input always yields
/// byte-identical output.
#[derive(Clone)]
pub struct Renderer {
    engine: Arc<Handlebars<'static>>,
}

impl Renderer {
    /// Creates a renderer around an engine built by
    /// [`crate::rendering::engine::build_engine`].
    pub fn new(engine: Arc<Handlebars<'static>>) -> Self {
        Self { engine }
    }

    /// Renders `composed` against `data`.
    ///
    /// 1. Validates `data`
    /// 2. Evaluates markup and script through the template engine
    /// 3. Substitutes theme values into base CSS plus component CSS
    /// 4. Wraps everything in the document shell
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidTemplateData`] if validation fails.
    /// Returns [`TemplateError::Render`] if a template fails to compile or evaluate.
    pub fn render(
        &self,
        composed: &ComposedTemplate,
        data: &TemplateData,
    ) -> Result<String, TemplateError> {
        data.validate()?;

        let body = self.engine.render_template(&composed.markup, data)?;
        let script = self.engine.render_template(&composed.script, data)?;

        let mut style = base_css(&data.theme);
        style.push_str(&composed.style);
        let style = apply_theme(&style, &data.theme);

        Ok(document(&data.store.name, &style, &body, &script))
    }
}
