//! Display formatting (German locale)
//!
//! Output only: these strings are never parsed back into the engine.

/// Format an amount as euros: `1234.5` → `"1.234,50 €"`
pub fn format_currency(value: f64) -> String {
    match format_fixed(value, 2) {
        Some((sign, whole, frac)) => format!("{}{},{} €", sign, whole, frac),
        None => format!("{} €", non_finite(value)),
    }
}

/// Format a number with at most one decimal: `6.5` → `"6,5"`, `13.0` → `"13"`
pub fn format_number(value: f64) -> String {
    match format_fixed(value, 1) {
        Some((sign, whole, frac)) if frac == "0" => format!("{}{}", sign, whole),
        Some((sign, whole, frac)) => format!("{}{},{}", sign, whole, frac),
        None => non_finite(value).to_string(),
    }
}

/// Format hours for display: `"6,5 Std."`
pub fn format_hours(value: f64) -> String {
    format!("{} Std.", format_number(value))
}

/// Round to `decimals` places and split into sign, grouped whole part and
/// fraction digits; `None` for NaN and infinities
fn format_fixed(value: f64, decimals: usize) -> Option<(&'static str, String, String)> {
    if !value.is_finite() {
        return None;
    }
    let rounded = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    // -0.001 rounds to zero and must not print as "-0"
    let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    Some((sign, group_thousands(whole), frac.to_string()))
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "–"
    } else if value > 0.0 {
        "∞"
    } else {
        "-∞"
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
