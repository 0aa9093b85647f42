//! Numeric/text conversion helpers used by literal parsing and the
//! `to_numeric`/`to_string` operators.

/// Parses text as a floating-point number, ignoring surrounding whitespace
///
/// Only decimal notation is accepted: an optional sign, digits with at most
/// one dot, and an optional exponent. Words such as `nan` or `inf` are not
/// numbers.
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if !has_numeric_shape(text) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn has_numeric_shape(text: &str) -> bool {
    let unsigned = text.strip_prefix(is_sign).unwrap_or(text);

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let mantissa_ok = mantissa.chars().any(|c| c.is_ascii_digit())
        && mantissa.chars().all(|c| c.is_ascii_digit() || c == '.');

    let exponent_ok = exponent.map_or(true, |exp| {
        let digits = exp.strip_prefix(is_sign).unwrap_or(exp);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}

/// Formats a number in its shortest round-trip text form (`5`, `2.5`, `-0.125`)
pub fn format_float(value: f64) -> String {
    value.to_string()
}
