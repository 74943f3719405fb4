//! Formatting helpers for presenting aggregated values.

use super::display::DisplayValue;

/// Text followed by the optional suffix, e.g. `"42" + "%"`.
pub fn format_display_value(display: &DisplayValue) -> String {
    match display.suffix.as_deref() {
        Some(suffix) => format!("{}{}", display.text, suffix),
        None => display.text.clone(),
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    // avoid "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Integers without decimals, everything else with up to two.
pub fn format_adaptive(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    if value.fract() == 0.0 {
        return format_number(value, 0);
    }

    let fixed = format_number(value, 2);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}
