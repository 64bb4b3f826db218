//! Amount coercion and rounding shared by the services.

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coerce a user-supplied amount into a non-negative finite number.
/// Negative, NaN and infinite inputs become 0.
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a raw form field into an amount. Unparsable input becomes 0.
///
/// Accepts a comma as the decimal separator ("12,50") and reads the longest
/// leading number, ignoring trailing text ("12abc" is 12).
pub fn parse_amount(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    let candidate_len = normalized
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(normalized.len());
    let candidate = &normalized[..candidate_len];

    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
        .map(clamp_amount)
        .unwrap_or(0.0)
}
