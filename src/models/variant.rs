use super::{null_as_default, Image, Scalar};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ingredient — A named constituent of a variant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredient_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Image,
    #[serde(deserialize_with = "null_as_default")]
    pub benefit_summary: String,
}

// ---------------------------------------------------------------------------
// Variant — One purchasable SKU of a product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Variant {
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    pub shade_name: Option<Scalar>,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,

    // -- Pricing --
    #[serde(deserialize_with = "null_as_default")]
    pub current_price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_price_value: f64,
    pub old_price: Option<String>,
    pub business_points: Option<Scalar>,

    // -- Media --
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub video_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color_hex_codes: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub color_image_url: String,

    // -- Labels --
    pub label_text: Option<Scalar>,
    pub label_css_class: Option<Scalar>,
    pub deal_label_text: Option<Scalar>,
    pub deal_label_css_class: Option<Scalar>,

    // -- Availability --
    #[serde(deserialize_with = "null_as_default")]
    pub has_replacements: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_out_of_stock: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_be_added_to_basket: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_be_reserved: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub show_notify_me_subscription: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub next_available_date_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub next_available_date_tooltip_text: String,

    // -- Content --
    #[serde(deserialize_with = "null_as_default")]
    pub product_info: String,
    #[serde(deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,

    // -- Opaque upstream data --
    pub sample: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub full_product_urls: Vec<serde_json::Value>,
    pub related_set: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub olapic_tags: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barcode: String,
}

impl Variant {
    /// In stock and orderable.
    pub fn is_purchasable(&self) -> bool {
        self.is_available && !self.is_out_of_stock
    }
}
