//! Indonesian Rupiah formatting.
//!
//! Output matches `Intl.NumberFormat('id-ID', { style: 'currency', currency: 'IDR',
//! minimumFractionDigits: 0 })`: symbol `Rp`, a no-break space, `.` as the
//! thousands separator and no fraction digits.

use crate::error::TemplateError;

/// Separator between the currency symbol and the amount (U+00A0).
pub const RUPIAH_SEPARATOR: char = '\u{a0}';

/// Formats an amount as Indonesian Rupiah.
///
/// Fractions are rounded half away from zero. Amounts that round to zero are
/// printed without a sign.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidAmount`] for NaN or infinite input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_rupiah(99000.0).unwrap(), "Rp\u{a0}99.000");
/// assert_eq!(format_rupiah(-1500.0).unwrap(), "-Rp\u{a0}1.500");
/// ```
pub fn format_rupiah(amount: f64) -> Result<String, TemplateError> {
    if !amount.is_finite() {
        return Err(TemplateError::InvalidAmount(amount));
    }

    let rounded = amount.abs().round();
    let digits = format!("{rounded:.0}");
    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };

    Ok(format!(
        "{sign}Rp{RUPIAH_SEPARATOR}{}",
        group_thousands(&digits)
    ))
}

/// Inserts `.` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
