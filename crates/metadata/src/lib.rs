#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `metadata` connects the pure [`acl`] model to the filesystem. It defines
//! the [`AclStore`] backend contract, ships a libacl backend for Linux, a
//! backend for builds without ACL support and an in-memory backend for
//! tests, resolves numeric qualifiers to user and group names, and offers
//! the path-level operations in [`ops`].
//!
//! # Design
//!
//! - [`AclStore`] reads and writes one [`AclKind`] of ACL per path. Callers
//!   hold a store explicitly; [`default_store`] picks the best one compiled in.
//! - `PosixAclStore` (feature `libacl`, Linux only) is the only place that
//!   touches `unsafe` code. Every libacl pointer is owned by a wrapper that
//!   frees it on drop.
//! - [`SystemResolver`] implements [`acl::NameResolver`] on top of the
//!   passwd and group databases. It is presentation-only and never changes
//!   stored qualifiers.
//!
//! # Errors
//!
//! All fallible calls return [`StoreError`], which records the operation,
//! the path, a [`StoreErrorKind`] classification and the underlying
//! [`std::io::Error`]. Higher layers propagate these unchanged.
//!
//! # Examples
//!
//! ```
//! use acl::Entry;
//! use metadata::{AclKind, MemoryStore, ops};
//! use std::path::Path;
//!
//! let store = MemoryStore::new();
//! store.insert("/srv/project", 0o750);
//!
//! let acl = ops::add(&store, Path::new("/srv/project"), AclKind::Access, [Entry::user("1000", 5)])?;
//! assert_eq!(acl.to_string(), "u:1000:r-x,m::r-x,u::rwx,g::r-x,o::---");
//! # Ok::<(), metadata::StoreError>(())
//! ```

mod debug_store;
mod error;
pub mod ops;
mod store;

#[cfg(all(feature = "libacl", target_os = "linux"))]
mod posix_acl;

#[cfg(unix)]
mod id_lookup;
#[cfg(not(unix))]
#[path = "id_lookup_stub.rs"]
mod id_lookup;

pub use error::{StoreError, StoreErrorKind};
pub use id_lookup::{SystemResolver, lookup_group_name, lookup_user_name};
#[cfg(all(feature = "libacl", target_os = "linux"))]
pub use posix_acl::PosixAclStore;
pub use store::{AclKind, AclStore, MemoryStore, UnsupportedStore, default_store};
