//! Lenient deserializers for fields the backend does not emit consistently.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON number or a decimal string such as `"1,250,000.00"`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::custom("amount is not a finite number"))?,
        Value::String(s) => s
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .map_err(|e| Error::custom(format!("invalid amount '{}': {}", s, e)))?,
        _ => return Err(Error::custom("amount must be a number or string")),
    };
    if !amount.is_finite() {
        return Err(Error::custom("amount is not a finite number"));
    }
    Ok(amount)
}

/// Lowercases, maps `_`/`-` to spaces and collapses runs of whitespace so
/// that "FIRST_READING", "first-reading" and "First  Reading" compare equal.
pub fn normalize_label(input: &str) -> String {
    input
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_amount")]
        amount: f64,
    }

    #[test]
    fn amount_from_number() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": 1000000}"#).unwrap();
        assert_eq!(w.amount, 1_000_000.0);
    }

    #[test]
    fn amount_from_decimal_string() {
        let w: Wrapper = serde_json::from_str(r#"{"amount": "1,250,000.50"}"#).unwrap();
        assert_eq!(w.amount, 1_250_000.5);
    }

    #[test]
    fn amount_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount": null}"#).is_err());
    }

    #[test]
    fn normalize_label_collapses_separators() {
        assert_eq!(normalize_label("FIRST_READING"), "first reading");
        assert_eq!(normalize_label("  Second-  Reading "), "second reading");
    }
}
