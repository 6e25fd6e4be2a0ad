//! Decoding of Venus OS `{"value": ...}` payloads.

use serde::Deserialize;

use crate::error::Result;

/// Payload of a numeric reading. A `null` or absent value means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NumericPayload {
    pub value: Option<f64>,
}

/// Payload of a textual reading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextPayload {
    pub value: Option<String>,
}

/// Decode a numeric payload.
///
/// Malformed JSON and non-numeric values are errors; `null` decodes to `None`.
pub fn decode_numeric(data: &[u8]) -> Result<Option<f64>> {
    let payload: NumericPayload = serde_json::from_slice(data)?;
    Ok(payload.value)
}

/// Decode a numeric payload, mapping "no value" to NaN.
pub fn decode_numeric_or_nan(data: &[u8]) -> Result<f64> {
    Ok(decode_numeric(data)?.unwrap_or(f64::NAN))
}

/// Decode a textual payload.
pub fn decode_text(data: &[u8]) -> Result<Option<String>> {
    let payload: TextPayload = serde_json::from_slice(data)?;
    Ok(payload.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode_numeric(br#"{"value": 52.3}"#).unwrap(), Some(52.3));
        assert_eq!(decode_numeric(br#"{"value": 7}"#).unwrap(), Some(7.0));
        assert_eq!(decode_numeric(br#"{"value": -12.5}"#).unwrap(), Some(-12.5));
    }

    #[test]
    fn test_decode_numeric_null() {
        assert_eq!(decode_numeric(br#"{"value": null}"#).unwrap(), None);
        assert_eq!(decode_numeric(b"{}").unwrap(), None);
        assert!(decode_numeric_or_nan(br#"{"value": null}"#).unwrap().is_nan());
    }

    #[test]
    fn test_decode_numeric_type_mismatch() {
        assert!(decode_numeric(br#"{"value": "c0619ab1f2e3"}"#).is_err());
        assert!(decode_numeric(br#"{"value": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_decode_malformed() {
        assert!(decode_numeric(b"").is_err());
        assert!(decode_numeric(b"{\"value\": ").is_err());
        assert!(decode_text(b"not json").is_err());
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(
            decode_text(br#"{"value": "c0619ab1f2e3"}"#).unwrap(),
            Some("c0619ab1f2e3".to_string())
        );
        assert_eq!(decode_text(br#"{"value": null}"#).unwrap(), None);
        assert!(decode_text(br#"{"value": 42}"#).is_err());
    }
}
