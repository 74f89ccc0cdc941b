pub mod media;
pub mod product;
pub mod scalar;
pub mod variant;

pub use media::*;
pub use product::*;
pub use scalar::*;
pub use variant::*;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value.
///
/// The concept endpoint sends `null` for almost any field depending on the
/// product category. Paired with `#[serde(default)]` this gives the same
/// zero value for absent and null fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
