#![allow(unsafe_code)]

//! # Overview
//!
//! Storage backend over the Linux `libacl` API. Reading walks the entries
//! returned by `acl_get_file` and converts each tag, qualifier and permission
//! set into an [`acl::Entry`]; writing builds a fresh libacl ACL entry by
//! entry and hands it to `acl_set_file`.
//!
//! # Invariants
//!
//! - Every pointer obtained from libacl is released through `acl_free`, via
//!   [`LibAcl`] for ACLs and [`Qualifier`] for qualifier buffers.
//! - Qualifiers are written as numeric ids. A qualifier that is not a decimal
//!   `u32` is reported as
//!   [`StoreErrorKind::Malformed`](crate::StoreErrorKind::Malformed) and never
//!   coerced.
//! - Writing an empty default ACL deletes the default ACL instead.
//!
//! # Errors
//!
//! Failures carry the errno reported by libacl, classified by
//! [`StoreErrorKind::of`](crate::StoreErrorKind::of).

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use acl::{Acl, Entry, Perms, Tag};

use crate::{AclKind, AclStore, StoreError};

mod sys {
    #![allow(non_camel_case_types)]

    use libc::{c_char, c_int, c_uint, c_void};

    pub type acl_t = *mut c_void;
    pub type acl_entry_t = *mut c_void;
    pub type acl_permset_t = *mut c_void;
    pub type acl_type_t = c_uint;
    pub type acl_tag_t = c_int;
    pub type acl_perm_t = c_uint;

    pub const ACL_TYPE_ACCESS: acl_type_t = 0x8000;
    pub const ACL_TYPE_DEFAULT: acl_type_t = 0x4000;

    pub const ACL_FIRST_ENTRY: c_int = 0;
    pub const ACL_NEXT_ENTRY: c_int = 1;

    pub const ACL_READ: acl_perm_t = 0x04;
    pub const ACL_WRITE: acl_perm_t = 0x02;
    pub const ACL_EXECUTE: acl_perm_t = 0x01;

    #[link(name = "acl")]
    unsafe extern "C" {
        pub fn acl_get_file(path_p: *const c_char, ty: acl_type_t) -> acl_t;
        pub fn acl_set_file(path_p: *const c_char, ty: acl_type_t, acl: acl_t) -> c_int;
        pub fn acl_delete_def_file(path_p: *const c_char) -> c_int;
        pub fn acl_init(count: c_int) -> acl_t;
        pub fn acl_free(obj_p: *mut c_void) -> c_int;
        pub fn acl_get_entry(acl: acl_t, entry_id: c_int, entry_p: *mut acl_entry_t) -> c_int;
        pub fn acl_create_entry(acl_p: *mut acl_t, entry_p: *mut acl_entry_t) -> c_int;
        pub fn acl_get_tag_type(entry_d: acl_entry_t, tag_type_p: *mut acl_tag_t) -> c_int;
        pub fn acl_set_tag_type(entry_d: acl_entry_t, tag_type: acl_tag_t) -> c_int;
        pub fn acl_get_qualifier(entry_d: acl_entry_t) -> *mut c_void;
        pub fn acl_set_qualifier(entry_d: acl_entry_t, qualifier_p: *const c_void) -> c_int;
        pub fn acl_get_permset(entry_d: acl_entry_t, permset_p: *mut acl_permset_t) -> c_int;
        pub fn acl_set_permset(entry_d: acl_entry_t, permset_d: acl_permset_t) -> c_int;
        pub fn acl_clear_perms(permset_d: acl_permset_t) -> c_int;
        pub fn acl_add_perm(permset_d: acl_permset_t, perm: acl_perm_t) -> c_int;
        pub fn acl_get_perm(permset_d: acl_permset_t, perm: acl_perm_t) -> c_int;
    }
}

const PERM_BITS: [(sys::acl_perm_t, Perms); 3] = [
    (sys::ACL_READ, Perms::READ),
    (sys::ACL_WRITE, Perms::WRITE),
    (sys::ACL_EXECUTE, Perms::EXECUTE),
];

/// Owned libacl ACL handle.
struct LibAcl(sys::acl_t);

impl Drop for LibAcl {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // Safety: the pointer originates from acl_get_file or acl_init.
            unsafe {
                sys::acl_free(self.0);
            }
        }
    }
}

/// Owned qualifier buffer returned by `acl_get_qualifier`.
struct Qualifier(*mut libc::c_void);

impl Drop for Qualifier {
    fn drop(&mut self) {
        // Safety: the pointer originates from acl_get_qualifier and is non-null.
        unsafe {
            sys::acl_free(self.0);
        }
    }
}

fn check(result: libc::c_int) -> io::Result<()> {
    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

fn c_path(path: &Path) -> io::Result<CString> {
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

const fn raw_kind(kind: AclKind) -> sys::acl_type_t {
    match kind {
        AclKind::Access => sys::ACL_TYPE_ACCESS,
        AclKind::Default => sys::ACL_TYPE_DEFAULT,
    }
}

impl LibAcl {
    fn get_file(path: &Path, kind: AclKind) -> io::Result<Self> {
        let c_path = c_path(path)?;
        // Safety: c_path is a valid NUL-terminated string for the call.
        let raw = unsafe { sys::acl_get_file(c_path.as_ptr(), raw_kind(kind)) };
        if raw.is_null() {
            Err(io::Error::last_os_error())
        } else {
            Ok(Self(raw))
        }
    }

    fn with_capacity(count: usize) -> io::Result<Self> {
        let count = libc::c_int::try_from(count).map_err(io::Error::other)?;
        // Safety: acl_init allocates a new, empty ACL.
        let raw = unsafe { sys::acl_init(count) };
        if raw.is_null() {
            Err(io::Error::last_os_error())
        } else {
            Ok(Self(raw))
        }
    }

    fn entries(&self) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        let mut which = sys::ACL_FIRST_ENTRY;
        loop {
            let mut raw_entry: sys::acl_entry_t = ptr::null_mut();
            // Safety: self.0 is a live ACL and raw_entry is a valid out pointer.
            match unsafe { sys::acl_get_entry(self.0, which, &mut raw_entry) } {
                0 => return Ok(entries),
                1 => entries.push(read_entry(raw_entry)?),
                -1 => return Err(io::Error::last_os_error()),
                value => {
                    return Err(io::Error::other(format!(
                        "unexpected acl_get_entry result {value}"
                    )));
                }
            }
            which = sys::ACL_NEXT_ENTRY;
        }
    }

    fn push(&mut self, entry: &Entry, id: Option<u32>) -> io::Result<()> {
        let mut raw_entry: sys::acl_entry_t = ptr::null_mut();
        // Safety: acl_create_entry may reallocate the ACL and updates self.0.
        check(unsafe { sys::acl_create_entry(&mut self.0, &mut raw_entry) })?;

        let raw_tag = sys::acl_tag_t::try_from(entry.tag().as_raw()).map_err(io::Error::other)?;
        // Safety: raw_entry was just created inside self.0.
        check(unsafe { sys::acl_set_tag_type(raw_entry, raw_tag) })?;

        if let Some(id) = id {
            let id: libc::uid_t = id;
            // Safety: libacl copies the id out of the pointed-to uid_t/gid_t.
            check(unsafe { sys::acl_set_qualifier(raw_entry, ptr::from_ref(&id).cast()) })?;
        }

        let mut permset: sys::acl_permset_t = ptr::null_mut();
        // Safety: raw_entry is valid; permset is a valid out pointer.
        check(unsafe { sys::acl_get_permset(raw_entry, &mut permset) })?;
        // Safety: permset belongs to raw_entry.
        check(unsafe { sys::acl_clear_perms(permset) })?;
        for (bit, perm) in PERM_BITS {
            if entry.perms().contains(perm) {
                // Safety: permset belongs to raw_entry.
                check(unsafe { sys::acl_add_perm(permset, bit) })?;
            }
        }
        // Safety: permset belongs to raw_entry.
        check(unsafe { sys::acl_set_permset(raw_entry, permset) })
    }

    fn set_file(&self, path: &Path, kind: AclKind) -> io::Result<()> {
        let c_path = c_path(path)?;
        // Safety: c_path is NUL-terminated and self.0 is a live ACL.
        check(unsafe { sys::acl_set_file(c_path.as_ptr(), raw_kind(kind), self.0) })
    }
}

fn read_entry(raw_entry: sys::acl_entry_t) -> io::Result<Entry> {
    let mut raw_tag: sys::acl_tag_t = 0;
    // Safety: raw_entry was returned by acl_get_entry for a live ACL.
    check(unsafe { sys::acl_get_tag_type(raw_entry, &mut raw_tag) })?;
    let tag = u32::try_from(raw_tag).map_or(Tag::Undefined, Tag::from_raw);

    let qualifier = if tag.is_named() {
        // Safety: named entries carry a uid_t or gid_t qualifier.
        let raw = unsafe { sys::acl_get_qualifier(raw_entry) };
        if raw.is_null() {
            return Err(io::Error::last_os_error());
        }
        let owned = Qualifier(raw);
        // Safety: uid_t and gid_t are both u32 on Linux and the buffer holds one.
        let id = unsafe { *owned.0.cast::<libc::uid_t>() };
        id.to_string()
    } else {
        String::new()
    };

    let mut permset: sys::acl_permset_t = ptr::null_mut();
    // Safety: raw_entry is valid; permset is a valid out pointer.
    check(unsafe { sys::acl_get_permset(raw_entry, &mut permset) })?;
    let mut perms = Perms::NONE;
    for (bit, perm) in PERM_BITS {
        // Safety: permset belongs to raw_entry.
        match unsafe { sys::acl_get_perm(permset, bit) } {
            1 => perms |= perm,
            0 => {}
            _ => return Err(io::Error::last_os_error()),
        }
    }

    Ok(Entry::new(tag, qualifier, perms))
}

fn delete_default(path: &Path) -> io::Result<()> {
    let c_path = c_path(path)?;
    // Safety: c_path is a valid NUL-terminated string for the call.
    check(unsafe { sys::acl_delete_def_file(c_path.as_ptr()) })
}

/// Backend reading and writing ACLs through the system libacl.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixAclStore;

impl PosixAclStore {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AclStore for PosixAclStore {
    fn read(&self, path: &Path, kind: AclKind) -> Result<Acl, StoreError> {
        let context = kind.read_context();
        let entries = LibAcl::get_file(path, kind)
            .and_then(|raw| raw.entries())
            .map_err(|error| StoreError::new(context, path, error))?;
        Ok(Acl::from(entries))
    }

    fn write(&self, path: &Path, kind: AclKind, acl: &Acl) -> Result<(), StoreError> {
        let context = kind.write_context();
        if kind == AclKind::Default && acl.is_empty() {
            return delete_default(path).map_err(|error| StoreError::new(context, path, error));
        }

        let ids = acl
            .iter()
            .map(|entry| match entry.qualifier() {
                Some(qualifier) => qualifier.parse::<u32>().map(Some).map_err(|_| {
                    StoreError::malformed(
                        context,
                        path,
                        format!("qualifier '{qualifier}' of entry {entry} is not a numeric id"),
                    )
                }),
                None => Ok(None),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let build = || -> io::Result<LibAcl> {
            let mut raw = LibAcl::with_capacity(acl.len())?;
            for (entry, id) in acl.iter().zip(ids.iter().copied()) {
                raw.push(entry, id)?;
            }
            Ok(raw)
        };
        build()
            .and_then(|raw| raw.set_file(path, kind))
            .map_err(|error| StoreError::new(context, path, error))
    }
}
