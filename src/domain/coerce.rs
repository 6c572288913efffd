// Scalar coercion rules applied to every raw field
use super::cell::CellValue;
use serde::{Deserialize, Serialize};

/// Textual bend-angle marker meaning "this panel does not bend".
pub const NOT_BENDABLE: &str = "nesilenkia";

/// A field that may hold one number or several.
///
/// Serializes untagged, so a single value is a bare JSON number and several
/// values are a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrList {
    Single(f64),
    Many(Vec<f64>),
}

/// Numeric conversion with dynamic-language semantics: whitespace-only text
/// and null become 0, booleans become 0/1, unparseable text becomes NaN.
pub fn numeric_value(value: &CellValue) -> f64 {
    match value {
        CellValue::Null => 0.0,
        CellValue::Bool(b) => f64::from(u8::from(*b)),
        CellValue::Number(n) => *n,
        CellValue::Text(s) => parse_numeric_text(s),
        CellValue::List(items) => match items.as_slice() {
            [] => 0.0,
            // A one-element list converts through its text form, where
            // booleans are no longer numeric
            [CellValue::Bool(_)] => f64::NAN,
            [only] => numeric_value(only),
            _ => f64::NAN,
        },
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix_digits = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some((16, &trimmed[2..])),
        Some("0o") | Some("0O") => Some((8, &trimmed[2..])),
        Some("0b") | Some("0B") => Some((2, &trimmed[2..])),
        _ => None,
    };
    if let Some((radix, digits)) = radix_digits {
        return parse_radix(digits, radix);
    }

    // Rust accepts spellings like "inf" and "nan" that are not numbers here
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        if matches!(trimmed, "Infinity" | "+Infinity") {
            return f64::INFINITY;
        }
        if trimmed == "-Infinity" {
            return f64::NEG_INFINITY;
        }
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

fn is_blank(value: Option<&CellValue>) -> bool {
    match value {
        None | Some(CellValue::Null) => true,
        Some(CellValue::Text(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Coerce to a finite number, or `default` when missing, empty or non-finite.
pub fn to_number(value: Option<&CellValue>, default: f64) -> f64 {
    to_number_or_null(value).unwrap_or(default)
}

/// Coerce to a finite number, or `None` when missing, empty or non-finite.
pub fn to_number_or_null(value: Option<&CellValue>) -> Option<f64> {
    if is_blank(value) {
        return None;
    }
    value.map(numeric_value).filter(|n| n.is_finite())
}

/// Parse a value that may be a single number or a list of numbers.
///
/// Lists come from list-shaped values or from text split on `;`, `,` or
/// `|`. Non-finite entries are dropped and the result is collapsed: an empty
/// list is `None` and a one-element list is that element.
pub fn parse_maybe_array(value: Option<&CellValue>) -> Option<NumberOrList> {
    if is_blank(value) {
        return None;
    }

    match value? {
        CellValue::List(items) => collapse(
            items
                .iter()
                .map(numeric_value)
                .filter(|n| n.is_finite())
                .collect(),
        ),
        CellValue::Text(text) => collapse(
            text.split([';', ',', '|'])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(parse_numeric_text)
                .filter(|n| n.is_finite())
                .collect(),
        ),
        scalar => Some(numeric_value(scalar))
            .filter(|n| n.is_finite())
            .map(NumberOrList::Single),
    }
}

fn collapse(mut values: Vec<f64>) -> Option<NumberOrList> {
    match values.len() {
        0 => None,
        1 => values.pop().map(NumberOrList::Single),
        _ => Some(NumberOrList::Many(values)),
    }
}

/// True when the value is the textual "not bendable" marker, in any case.
pub fn is_bend_sentinel(value: Option<&CellValue>) -> bool {
    value
        .and_then(CellValue::as_text)
        .is_some_and(|s| s.eq_ignore_ascii_case(NOT_BENDABLE))
}

/// String conversion used for the panel name.
pub fn text_value(value: Option<&CellValue>) -> String {
    match value {
        None | Some(CellValue::Null) => String::new(),
        Some(CellValue::Text(s)) => s.clone(),
        Some(CellValue::Bool(b)) => b.to_string(),
        Some(CellValue::Number(n)) => format_number(*n),
        Some(CellValue::List(items)) => items
            .iter()
            .map(|item| text_value(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Shortest round-trip form, switching to exponent notation below 1e-6 and
/// from 1e21 upwards, as dynamic-language string conversion does.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        n.to_string()
    }
}
