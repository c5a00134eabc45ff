//! Structured tracing for storage calls.
//!
//! Compiled behind the `tracing` feature flag; without it the helpers are
//! empty inline functions.

use std::path::Path;

use acl::Acl;

use crate::AclKind;

#[cfg(feature = "tracing")]
const STORE_TARGET: &str = "acl::store";

/// Traces an ACL read from storage.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_read(path: &Path, kind: AclKind, acl: &Acl) {
    tracing::debug!(
        target: STORE_TARGET,
        path = %path.display(),
        kind = %kind,
        entries = acl.len(),
        acl = %acl,
        "acl_read"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_read(_path: &Path, _kind: AclKind, _acl: &Acl) {}

/// Traces an ACL about to be written to storage.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_write(path: &Path, kind: AclKind, acl: &Acl) {
    tracing::debug!(
        target: STORE_TARGET,
        path = %path.display(),
        kind = %kind,
        entries = acl.len(),
        acl = %acl,
        "acl_write"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_write(_path: &Path, _kind: AclKind, _acl: &Acl) {}
