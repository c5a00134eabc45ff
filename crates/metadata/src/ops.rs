//! Path-level ACL operations built on an [`AclStore`].
//!
//! Each operation is a thin read, transform, write sequence. Storage errors
//! are returned unchanged; no operation validates the ACL it writes, leaving
//! rejection to the backend.

use std::path::Path;

use acl::{Acl, Entry, Slot};

use crate::debug_store::{trace_read, trace_write};
use crate::{AclKind, AclStore, StoreError};

fn read<S>(store: &S, path: &Path, kind: AclKind) -> Result<Acl, StoreError>
where
    S: AclStore + ?Sized,
{
    let acl = store.read(path, kind)?;
    trace_read(path, kind, &acl);
    Ok(acl)
}

fn write<S>(store: &S, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError>
where
    S: AclStore + ?Sized,
{
    trace_write(path, kind, acl);
    store.write(path, kind, acl)
}

/// Reads the access ACL of `path`.
pub fn get<S>(store: &S, path: &Path) -> Result<Acl, StoreError>
where
    S: AclStore + ?Sized,
{
    read(store, path, AclKind::Access)
}

/// Reads the default ACL of `path`; empty when the directory has none.
pub fn get_default<S>(store: &S, path: &Path) -> Result<Acl, StoreError>
where
    S: AclStore + ?Sized,
{
    read(store, path, AclKind::Default)
}

/// Replaces the access ACL of `path`.
pub fn set<S>(store: &S, path: &Path, acl: &Acl) -> Result<(), StoreError>
where
    S: AclStore + ?Sized,
{
    write(store, path, AclKind::Access, acl)
}

/// Replaces the default ACL of `path`. An empty ACL removes it.
pub fn set_default<S>(store: &S, path: &Path, acl: &Acl) -> Result<(), StoreError>
where
    S: AclStore + ?Sized,
{
    write(store, path, AclKind::Default, acl)
}

/// Merges `entries` into the ACL of `kind` on `path` and writes the result.
///
/// See [`Acl::add`] for the merge rules. Returns the ACL that was written.
pub fn add<S, I>(store: &S, path: &Path, kind: AclKind, entries: I) -> Result<Acl, StoreError>
where
    S: AclStore + ?Sized,
    I: IntoIterator<Item = Entry>,
{
    let mut acl = read(store, path, kind)?;
    acl.add(entries);
    write(store, path, kind, &acl)?;
    Ok(acl)
}

/// Removes the entries occupying `slots` from the ACL of `kind` on `path`.
///
/// The mask is recomputed unless it is itself removed. Returns the ACL that
/// was written.
pub fn remove<S>(store: &S, path: &Path, kind: AclKind, slots: &[Slot]) -> Result<Acl, StoreError>
where
    S: AclStore + ?Sized,
{
    let mut acl = read(store, path, kind)?;
    acl.remove(slots);
    write(store, path, kind, &acl)?;
    Ok(acl)
}

/// Replaces the access ACL of `path` with the minimal ACL for `mode`.
pub fn chmod_from_unix<S>(store: &S, path: &Path, mode: u32) -> Result<(), StoreError>
where
    S: AclStore + ?Sized,
{
    set(store, path, &Acl::from_unix(mode))
}
