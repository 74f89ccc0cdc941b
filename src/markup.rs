//! Pre-decode filtering of raw response bodies.
//!
//! The concept endpoint sometimes embeds literal HTML fragments inside its
//! JSON text fields. Stripping tags before decoding is lossy and makes no
//! attempt to understand HTML; it only removes `<...>` runs.

use regex::bytes::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

// A tag opens with a name letter, `/` or `!`; `a < b` is plain text.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[A-Za-z/!][^<>]*>").unwrap());

/// What to do with markup in a response body before it is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// Remove HTML/XML-style tags.
    #[default]
    StripTags,
    /// Decode the body exactly as received.
    Preserve,
}

impl MarkupPolicy {
    pub fn apply<'a>(&self, body: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            MarkupPolicy::StripTags => strip_tags(body),
            MarkupPolicy::Preserve => Cow::Borrowed(body),
        }
    }
}

impl fmt::Display for MarkupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupPolicy::StripTags => f.write_str("strip-tags"),
            MarkupPolicy::Preserve => f.write_str("preserve"),
        }
    }
}

/// Remove every `<...>` tag from `input`.
///
/// A `<` only starts a tag when followed by a letter, `/` or `!`, so
/// comparisons such as `SPF < 30` survive. Unbalanced brackets are left
/// alone. Borrows the input when no tag was
/// found.
pub fn strip_tags(input: &[u8]) -> Cow<'_, [u8]> {
    TAG.replace_all(input, &b""[..])
}
