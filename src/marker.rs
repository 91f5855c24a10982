//! Marker vocabulary and resolution.
//!
//! Tests carry ordered, opaque tag names; a small controlled vocabulary of
//! those names is "recognized" as markers. Resolution picks exactly one
//! marker label per test for its result metadata.
//!
//! Two access paths with deliberately different strictness:
//!
//! - [`Marker::lookup`] is strict: an unknown name is an
//!   [`UnrecognizedMarker`](crate::errors::PulseError::UnrecognizedMarker) error.
//! - [`resolve_marker`] is lenient: it scans tags, silently skips anything
//!   outside the vocabulary, and falls back to [`MARKER_NONE`].

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::errors::{PulseError, Result};
use crate::hooks::TestNode;

/// Sentinel label recorded when no recognized marker applies ("marker none").
pub const MARKER_NONE: &str = "MN";

/// The fixed controlled vocabulary of recognized markers.
///
/// # Examples
///
/// ```rust
/// use testpulse::marker::Marker;
/// let m = Marker::lookup("MBT_AI").unwrap();
/// assert_eq!(m.label(), "MBT_AI");
/// assert!(Marker::lookup("wrong name").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Test generated by model-based testing with AI assistance.
    MbtAi,
    /// Test generated from model-based-testing waypoints.
    MbtWaypoints,
    /// Test authored with AI assistance.
    Ai,
}

impl Marker {
    /// Every vocabulary member, in precedence-neutral declaration order.
    pub const ALL: [Marker; 3] = [Marker::MbtAi, Marker::MbtWaypoints, Marker::Ai];

    /// The canonical display label for this marker.
    pub fn label(&self) -> &'static str {
        match self {
            Marker::MbtAi => "MBT_AI",
            Marker::MbtWaypoints => "MBT_Waypoints",
            Marker::Ai => "AI",
        }
    }

    /// Strict lookup by name. Any name outside the vocabulary fails.
    pub fn lookup(name: &str) -> Result<Marker> {
        VOCABULARY
            .get(name)
            .copied()
            .ok_or_else(|| PulseError::UnrecognizedMarker {
                name: name.to_string(),
                known: known_labels(),
            })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

lazy_static! {
    /// Single source of truth for name -> marker mapping. Built once from
    /// `Marker::ALL` so the vocabulary cannot drift from the enum.
    static ref VOCABULARY: HashMap<&'static str, Marker> =
        Marker::ALL.iter().map(|m| (m.label(), *m)).collect();
}

fn known_labels() -> String {
    Marker::ALL
        .iter()
        .map(Marker::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the single marker label to record for a test item.
///
/// Scans the item's own tags in declaration order and returns the first
/// recognized marker's label. If none match and the item has a parent, the
/// parent's own tags are scanned the same way (one level up only). If
/// nothing matches anywhere, returns [`MARKER_NONE`].
///
/// Unrecognized tags are skipped, never an error. Pure function of the
/// item's tag data.
pub fn resolve_marker(item: &dyn TestNode) -> &'static str {
    if let Some(marker) = first_recognized(item.own_tags()) {
        return marker.label();
    }
    if let Some(parent) = item.parent() {
        if let Some(marker) = first_recognized(parent.own_tags()) {
            return marker.label();
        }
    }
    MARKER_NONE
}

fn first_recognized(tags: &[String]) -> Option<Marker> {
    tags.iter()
        .find_map(|tag| VOCABULARY.get(tag.as_str()).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_recognizes_every_vocabulary_member() {
        for marker in Marker::ALL {
            assert_eq!(Marker::lookup(marker.label()).unwrap(), marker);
        }
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        let err = Marker::lookup("wrong name").unwrap_err();
        assert!(matches!(
            err,
            PulseError::UnrecognizedMarker { ref name, .. } if name == "wrong name"
        ));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(Marker::lookup("mbt_ai").is_err());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Marker::MbtWaypoints.to_string(), "MBT_Waypoints");
    }
}
