//! Structured tracing for merge and mask recomputation.
//!
//! All tracing is compiled behind the `tracing` feature flag; without it the
//! helpers are empty inline functions so call sites stay unconditional.

#[cfg(feature = "tracing")]
const MERGE_TARGET: &str = "acl::merge";

/// Traces an existing entry being overwritten in place.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_entry_replaced(entry: &crate::Entry, position: usize) {
    tracing::debug!(
        target: MERGE_TARGET,
        entry = %entry,
        position = position,
        "entry_replaced"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_entry_replaced(_entry: &crate::Entry, _position: usize) {}

/// Traces unmatched entries being spliced into the list.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_entries_inserted(count: usize, position: usize) {
    if count > 0 {
        tracing::debug!(
            target: MERGE_TARGET,
            count = count,
            position = position,
            "entries_inserted"
        );
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_entries_inserted(_count: usize, _position: usize) {}

/// Traces the outcome of mask recomputation.
///
/// `explicit` is set when the caller supplied the mask and recomputation was
/// skipped.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_mask(mask: Option<crate::Perms>, explicit: bool, created: bool) {
    tracing::debug!(
        target: MERGE_TARGET,
        mask = %mask.map_or("none", crate::Perms::as_str),
        explicit = explicit,
        created = created,
        "mask_updated"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_mask(_mask: Option<crate::Perms>, _explicit: bool, _created: bool) {}

/// Traces entries removed by slot.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_entries_removed(count: usize) {
    tracing::debug!(target: MERGE_TARGET, count = count, "entries_removed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_entries_removed(_count: usize) {}
