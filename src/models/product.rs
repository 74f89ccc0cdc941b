use super::{null_as_default, Variant};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TextBlock — Labelled free-text section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

// ---------------------------------------------------------------------------
// IngredientsSection — Product-level ingredient copy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub main_description: TextBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub display_with_additional_description: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_description: TextBlock,
}

// ---------------------------------------------------------------------------
// Product — A catalog concept and all of its variants
// ---------------------------------------------------------------------------

/// Product detail as returned by the concept endpoint.
///
/// Every call to [`OriflameClient::get_product`](crate::OriflameClient::get_product)
/// builds a fresh value; the caller owns it outright.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub brand_url: String,

    // -- Reviews --
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_reviews: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_rating_enabled: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub show_subscribe_button: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_multi_product: bool,

    /// Variants (SKUs) of this product. The upstream calls them `products`.
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Variant>,

    // -- Content blocks --
    #[serde(deserialize_with = "null_as_default")]
    pub how_to_use: TextBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub about: TextBlock,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: IngredientsSection,
    pub additional_information: Option<serde_json::Value>,
}

impl Product {
    /// Decode a product document from JSON bytes.
    ///
    /// Only a JSON object is accepted at the top level. The derived
    /// deserializer would otherwise read an array positionally.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if value.is_object() {
            return serde_json::from_value(value);
        }
        let unexpected = match &value {
            serde_json::Value::Object(_) => Unexpected::Map,
            serde_json::Value::Null => Unexpected::Unit,
            serde_json::Value::Bool(b) => Unexpected::Bool(*b),
            serde_json::Value::Number(_) => Unexpected::Other("number"),
            serde_json::Value::String(s) => Unexpected::Str(s),
            serde_json::Value::Array(_) => Unexpected::Seq,
        };
        Err(serde_json::Error::invalid_type(unexpected, &"a product object"))
    }

    /// Look up a variant by its SKU code.
    pub fn variant(&self, code: &str) -> Option<&Variant> {
        self.products.iter().find(|v| v.code == code)
    }

    /// Variants that can currently be bought.
    pub fn available_variants(&self) -> impl Iterator<Item = &Variant> {
        self.products.iter().filter(|v| v.is_purchasable())
    }
}
