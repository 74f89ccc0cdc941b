pub const BASE_URL: &str = "https://id.oriflame.com";
pub const CONCEPT_PATH: &str = "/system/ajax/pdp/concept";

/// Build the product-concept URL for `code`.
///
/// The code is substituted verbatim; the upstream decides what an invalid
/// code means.
pub fn concept_url(base: &str, code: &str) -> String {
    format!("{}{}?code={}", base.trim_end_matches('/'), CONCEPT_PATH, code)
}
