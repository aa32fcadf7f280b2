// crates/geolookup-core/src/traits.rs

use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the city index.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so indexes can be cached
/// via bincode.
pub trait DataBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
    /// Convert an `f64` into the backend float representation.
    fn float_from(f: f64) -> Self::Float;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// Convert backend float to plain `f64` (useful for WASM serialization).
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Centralizes the Unicode-aware, accent-insensitive and case-insensitive
/// comparisons the scorer tiers are built on. Implementors provide a `&str`
/// view of their canonical name via [`NameMatch::name_str`]; all predicates
/// operate on [`fold_key`]-normalized forms. The caller is expected to pass
/// an already-folded query to the `folded` variants, which avoids re-folding
/// the query once per candidate during a scan.
///
/// # Examples
/// ```
/// use geolookup_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("lodz"));
/// assert!(Place("San Jose, CA").name_word_starts_with_folded("jos"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Substring match against an already-folded query.
    #[inline]
    fn name_contains_folded(&self, folded_q: &str) -> bool {
        fold_key(self.name_str()).contains(folded_q)
    }

    /// Prefix match against an already-folded query.
    #[inline]
    fn name_starts_with_folded(&self, folded_q: &str) -> bool {
        fold_key(self.name_str()).starts_with(folded_q)
    }

    /// True if any whitespace-delimited word of the folded name starts with
    /// the already-folded query.
    #[inline]
    fn name_word_starts_with_folded(&self, folded_q: &str) -> bool {
        fold_key(self.name_str())
            .split_whitespace()
            .any(|word| word.starts_with(folded_q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Place(&'static str);
    impl NameMatch for Place {
        fn name_str(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn folded_matching() {
        assert!(Place("Zürich").is_named("zurich"));
        assert!(Place("Zürich").name_contains("üri"));
        assert!(Place("San José, CR").name_starts_with_folded("san"));
        assert!(Place("San José, CR").name_word_starts_with_folded("jos"));
        assert!(!Place("San José, CR").name_starts_with_folded("jos"));
    }
}
