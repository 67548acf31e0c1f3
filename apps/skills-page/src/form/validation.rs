use serde::Serialize;

use crate::catalog::SkillCatalog;

pub const INVALID_SKILL_NAME: &str = "Invalid skill name";
pub const NEGATIVE_WEIGHT: &str = "Weight cannot be negative.";
pub const ZERO_WEIGHT: &str = "Weight cannot be 0.";

/// Outcome of validating one field on focus loss.
/// `message` is what the field's inline error span shows; `None` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl FieldValidation {
    pub const VALID: FieldValidation = FieldValidation {
        valid: true,
        message: None,
    };

    fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }
}

/// A skill name is valid when left empty or when it is exactly one of the catalog names.
pub fn validate_skill_name(value: &str, catalog: &SkillCatalog) -> FieldValidation {
    if value.is_empty() || catalog.contains(value) {
        FieldValidation::VALID
    } else {
        FieldValidation::invalid(INVALID_SKILL_NAME)
    }
}

/// Weights must not be negative or zero.
///
/// Input that does not parse as a number is accepted and clears any previous error,
/// because NaN compares false against both bounds. Blank input behaves the same way.
pub fn validate_skill_weight(value: &str) -> FieldValidation {
    let weight = parse_float(value);
    if weight < 0.0 {
        FieldValidation::invalid(NEGATIVE_WEIGHT)
    } else if weight == 0.0 {
        FieldValidation::invalid(ZERO_WEIGHT)
    } else {
        FieldValidation::VALID
    }
}

/// Lenient float parsing: skips leading whitespace and reads the longest numeric
/// prefix, so `"5kg"` is 5. Returns NaN when no prefix is numeric.
pub fn parse_float(value: &str) -> f64 {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}
