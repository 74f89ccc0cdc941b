use super::null_as_default;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImageSize — One resolution of an image
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
}

// ---------------------------------------------------------------------------
// Image — All resolutions of a single picture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(deserialize_with = "null_as_default")]
    pub sizes: Vec<ImageSize>,
}

impl Image {
    /// The widest available resolution.
    pub fn largest(&self) -> Option<&ImageSize> {
        self.sizes.iter().max_by_key(|s| s.width)
    }
}
