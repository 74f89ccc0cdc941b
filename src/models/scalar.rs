use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Scalar — A field whose JSON type varies between products
// ---------------------------------------------------------------------------

/// Loosely-typed upstream value such as a shade name or business points.
///
/// Depending on the product category the same field arrives as a string, a
/// number, or something else entirely. Anything that is valid JSON decodes;
/// numbers keep their exact textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, parsing text like `"12.5"` when needed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Other(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_string_and_number() {
        let s: Scalar = serde_json::from_value(json!("Rose Pink")).unwrap();
        assert_eq!(s.as_str(), Some("Rose Pink"));

        let n: Scalar = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(n.as_f64(), Some(12.0));
        assert_eq!(n.to_string(), "12");
    }

    #[test]
    fn decodes_unexpected_shapes() {
        let b: Scalar = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(b, Scalar::Other(json!(true)));

        let o: Scalar = serde_json::from_value(json!({"value": 3})).unwrap();
        assert!(matches!(o, Scalar::Other(_)));
        assert_eq!(o.as_f64(), None);
    }

    #[test]
    fn null_in_option_is_none() {
        let v: Option<Scalar> = serde_json::from_value(json!(null)).unwrap();
        assert!(v.is_none());
    }

    #[test]
    fn numeric_text_parses() {
        assert_eq!(Scalar::from(" 7.5 ").as_f64(), Some(7.5));
        assert_eq!(Scalar::from("n/a").as_f64(), None);
    }
}
