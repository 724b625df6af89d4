//! Entity → API view transformation
//!
//! Each resource type has a transformer producing a flat, scalar-only view
//! by default, and declares a fixed table of relation names eligible for
//! nested inclusion (Teacher → "lessons", Lesson → "teacher"). Includes are
//! requested by the caller as a typed [`IncludeSet`]; an unlisted name is a
//! no-op, never an error.
//!
//! Inclusion is bounded to one level by construction: nested views are built
//! with the plain `transform`, which carries no further include slots. If
//! the relation graph grows, keep that property (or thread an explicit depth
//! limit) to guard against cycles.

use serde::Serialize;
use std::collections::BTreeSet;

/// A typed set of requested relation names
///
/// Parsed from the `include` query parameter (comma-separated). Membership
/// is only meaningful against a transformer's `available_includes` table;
/// see [`Transformer::requested`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet(BTreeSet<String>);

impl IncludeSet {
    /// An empty include set
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a comma-separated list of relation names
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.0.contains(relation)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps a persisted entity into its API-facing representation
pub trait Transformer {
    type Entity;
    type View: Serialize;

    /// Relation names this transformer may embed, fixed at compile time
    fn available_includes() -> &'static [&'static str];

    /// Produce the flat view: scalar fields only, no relations, no
    /// store-maintained timestamps
    fn transform(entity: &Self::Entity) -> Self::View;

    /// Whether `relation` was requested and is eligible for inclusion
    ///
    /// Unknown relation names are silently ignored.
    fn requested(includes: &IncludeSet, relation: &str) -> bool {
        Self::available_includes().contains(&relation) && includes.contains(relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    impl Transformer for Unit {
        type Entity = ();
        type View = ();

        fn available_includes() -> &'static [&'static str] {
            &["children"]
        }

        fn transform(_: &Self::Entity) -> Self::View {}
    }

    #[test]
    fn test_parse_single_relation() {
        let includes = IncludeSet::parse("lessons");
        assert!(includes.contains("lessons"));
        assert!(!includes.contains("teacher"));
    }

    #[test]
    fn test_parse_trims_and_drops_empty_segments() {
        let includes = IncludeSet::parse(" lessons ,, teacher ");
        assert!(includes.contains("lessons"));
        assert!(includes.contains("teacher"));
        assert!(!includes.contains(""));
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(IncludeSet::parse("").is_empty());
    }

    #[test]
    fn test_requested_known_relation() {
        let includes = IncludeSet::parse("children");
        assert!(Unit::requested(&includes, "children"));
    }

    #[test]
    fn test_requested_ignores_unlisted_relation() {
        let includes = IncludeSet::parse("parents");
        assert!(!Unit::requested(&includes, "parents"));
    }
}
