//! Lenient deserialization helpers for sparse personnel records.
//!
//! Personnel data arrives with free-form labels and amounts that may be
//! missing, `null`, or plain text. None of that may abort a batch, so these
//! helpers coerce whatever they receive and never return an error for
//! well-formed JSON/YAML.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::warn;

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseAmount {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Null,
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseLabel {
    Text(String),
    Other(IgnoredAny),
}

/// Deserializes a monetary amount, falling back to zero.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LooseAmount::deserialize(deserializer)?;
    let parsed = match value {
        LooseAmount::Integer(n) => Some(Decimal::from(n)),
        LooseAmount::Unsigned(n) => Some(Decimal::from(n)),
        LooseAmount::Float(f) => {
            let parsed = Decimal::from_f64(f);
            if parsed.is_none() {
                warn!(raw = f, "Out-of-range amount coerced to zero");
            }
            parsed
        }
        LooseAmount::Text(text) => {
            let parsed = coerce_amount_text(&text);
            if parsed.is_none() && !text.trim().is_empty() {
                warn!(raw = %text, "Non-numeric or out-of-range amount coerced to zero");
            }
            parsed
        }
        LooseAmount::Null => None,
        LooseAmount::Other(_) => {
            warn!("Non-scalar amount coerced to zero");
            None
        }
    };

    Ok(non_negative(parsed.unwrap_or(Decimal::ZERO)))
}

/// Deserializes a free-form label, yielding `None` for anything that is not text.
pub(crate) fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseLabel::deserialize(deserializer)? {
        LooseLabel::Text(text) => Some(text),
        LooseLabel::Other(_) => None,
    })
}

/// Parses an amount written as text, accepting plain and scientific notation.
pub(crate) fn coerce_amount_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Normalizes a label for matching: trimmed, lowercase, `-` and spaces as `_`.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

fn non_negative(amount: Decimal) -> Decimal {
    if amount < Decimal::ZERO {
        warn!(amount = %amount, "Negative amount clamped to zero");
        Decimal::ZERO
    } else {
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct AmountField {
        #[serde(default, deserialize_with = "amount")]
        value: Decimal,
    }

    fn parse_amount(json: &str) -> Decimal {
        serde_json::from_str::<AmountField>(json).unwrap().value
    }

    #[test]
    fn test_integer_amount() {
        assert_eq!(parse_amount(r#"{"value": 600}"#), Decimal::from(600));
    }

    #[test]
    fn test_float_amount() {
        assert_eq!(parse_amount(r#"{"value": 12.5}"#), Decimal::new(125, 1));
    }

    #[test]
    fn test_numeric_string_amount() {
        assert_eq!(
            parse_amount(r#"{"value": " 1500.75 "}"#),
            Decimal::new(150075, 2)
        );
    }

    #[test]
    fn test_scientific_string_amount() {
        assert_eq!(parse_amount(r#"{"value": "1.5e3"}"#), Decimal::from(1500));
    }

    #[test]
    fn test_missing_null_and_garbage_become_zero() {
        assert_eq!(parse_amount(r#"{}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": null}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": "abc"}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": ""}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": true}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": [1, 2]}"#), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_amount_becomes_zero() {
        assert_eq!(parse_amount(r#"{"value": 1e30}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": "1e40"}"#), Decimal::ZERO);
        assert_eq!(
            parse_amount(r#"{"value": "79228162514264337593543950335"}"#),
            Decimal::MAX
        );
    }

    #[test]
    fn test_negative_amount_clamped() {
        assert_eq!(parse_amount(r#"{"value": -40}"#), Decimal::ZERO);
        assert_eq!(parse_amount(r#"{"value": "-0.01"}"#), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  Bi-Weekly "), "bi_weekly");
        assert_eq!(normalize_label("Medical Rest"), "medical_rest");
        assert_eq!(normalize_label("CONTRACTOR"), "contractor");
    }
}
