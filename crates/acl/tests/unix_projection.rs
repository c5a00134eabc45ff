//! Tests for converting between ACLs and mode bits.

use acl::{Acl, Entry};

// =============================================================================
// Round Trips
// =============================================================================

/// Every permission triple survives a round trip.
#[test]
fn every_mode_roundtrips() {
    for mode in 0..0o1000 {
        assert_eq!(Acl::from_unix(mode).to_unix(), mode, "mode {mode:o}");
    }
}

/// File type and special bits are dropped.
#[test]
fn high_bits_are_masked() {
    assert_eq!(Acl::from_unix(0o100_755).to_unix(), 0o755);
    assert_eq!(Acl::from_unix(0o4755).to_unix(), 0o755);
}

/// A minimal ACL from mode bits is always valid.
#[test]
fn minimal_acl_is_valid() {
    assert!(Acl::from_unix(0o640).is_valid());
    assert_eq!(Acl::from_unix(0o640).len(), 3);
}

// =============================================================================
// Positional Projection
// =============================================================================

/// Extra entries after the canonical three do not affect the projection.
#[test]
fn extended_entries_are_ignored() {
    let mut acl = Acl::from_unix(0o751);
    acl.extend([Entry::user("5", 7), Entry::group("6", 7), Entry::mask(7)]);
    assert_eq!(acl.to_unix(), 0o751);
}

/// Reordered ACLs project positionally; the tag lookup variant does not care.
#[test]
fn reordered_acl_differs_between_projections() {
    let acl = Acl::from([Entry::group_obj(5), Entry::other(1), Entry::user_obj(7)]);
    assert_eq!(acl.to_unix(), 0o517);
    assert_eq!(acl.to_unix_by_tag(), Some(0o751));
}

/// Tag lookup reports incomplete ACLs instead of guessing.
#[test]
fn tag_projection_requires_all_singletons() {
    let acl = Acl::from([Entry::user_obj(7), Entry::other(1)]);
    assert_eq!(acl.to_unix_by_tag(), None);
    assert_eq!(acl.to_unix(), 0o71);
}
