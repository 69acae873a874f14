//! Template engine initialization.
//!
//! The engine is configured once by [`build_engine`] and shared behind an
//! `Arc`; nothing registers helpers as a side effect of importing a module.
//!
//! # Helpers
//!
//! Handlebars built-ins cover iteration and conditionals (`each`, `if`,
//! `unless`, `with`) and the comparison subexpressions used for conditional
//! styling (`eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `and`, `or`, `not`).
//! Storefront-specific helpers:
//!
//! - `formatCurrency amount` - Rupiah formatting, e.g. `Rp\u{a0}99.000`
//! - `discountPercent price comparePrice` - whole-number discount, `0` when none

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
    handlebars_helper,
};

use crate::utils::currency::format_rupiah;

handlebars_helper!(discount_percent: |price: f64, compare: f64| {
    if compare > price && compare > 0.0 {
        ((compare - price) / compare * 100.0).round() as u64
    } else {
        0
    }
});

/// Builds the shared template engine with all storefront helpers registered.
///
/// Undefined values render as empty strings; render input is validated
/// before it reaches the engine.
pub fn build_engine() -> Handlebars<'static> {
    let mut engine = Handlebars::new();
    engine.set_strict_mode(false);
    engine.register_helper("formatCurrency", Box::new(format_currency_helper));
    engine.register_helper("discountPercent", Box::new(discount_percent));
    engine
}

/// `{{formatCurrency priceRaw}}`. Non-numeric input is a render error.
fn format_currency_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex("formatCurrency", 0))?;

    let amount = param
        .value()
        .as_f64()
        .ok_or(RenderErrorReason::InvalidParamType("number"))?;

    let formatted = format_rupiah(amount).map_err(|e| RenderErrorReason::Other(e.to_string()))?;
    out.write(&formatted)?;
    Ok(())
}
