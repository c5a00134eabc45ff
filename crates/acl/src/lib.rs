#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `acl` models POSIX.1e access control lists: the owner, owning group and
//! other permissions of a filesystem object extended with entries for named
//! users and groups, capped by a mask. The crate is pure. It performs no I/O
//! and keeps no global state, so independent [`Acl`] values can be processed
//! on any number of threads.
//!
//! # Design
//!
//! - [`Entry`] pairs a [`Tag`] with a qualifier and a [`Perms`] set. The
//!   qualifier is meaningful only for [`Tag::User`] and [`Tag::Group`];
//!   [`Slot`] is the key that makes an entry unique within an ACL.
//! - [`Acl`] keeps its entries in caller order. Printing and merging respect
//!   that order, validity and [`Acl::set_eq`] ignore it.
//! - [`Acl::validate`] checks the structural rules, [`Acl::add`] merges
//!   entries the way `setfacl -m` does and recomputes the mask, and the
//!   [`Display`](std::fmt::Display) and [`Acl::to_long_string`] renderings
//!   produce the short and long text forms.
//! - Display names are substituted through a [`NameResolver`] passed by the
//!   caller. The model always stores numeric ids.
//!
//! # Invariants
//!
//! - A valid ACL has exactly one owner, owning group and other entry, at most
//!   one mask, no two named users or named groups with the same qualifier,
//!   and a mask whenever a named entry is present.
//! - Permission values never exceed `0o7`; wider inputs are masked.
//! - Merging, rendering and Unix projection never fail, even on invalid ACLs.
//!
//! # Errors
//!
//! [`Acl::validate`] reports the first violated rule as a
//! [`ValidationError`]. Parsing text through [`str::parse`] reports
//! [`ParseAclError`], which names the offending entry.
//!
//! # Examples
//!
//! ```
//! use acl::{Acl, Entry};
//!
//! let mut acl = Acl::from_unix(0o750);
//! acl.add([Entry::user("1000", 6)]);
//!
//! assert!(acl.is_valid());
//! assert_eq!(acl.to_string(), "u:1000:rw-,m::rwx,u::rwx,g::r-x,o::---");
//! assert_eq!(acl.to_unix_by_tag(), Some(0o750));
//! ```
//!
//! # See also
//!
//! - `metadata` reads and writes ACLs on files and resolves ids to names.

mod debug_merge;
mod entry;
mod list;
mod merge;
mod parse;
mod perms;
mod resolve;
mod text;
mod unix;
mod validate;

pub use entry::{Entry, Slot, Tag};
pub use list::Acl;
pub use parse::{ParseAclError, ParseErrorKind, parse_slots};
pub use perms::Perms;
pub use resolve::{NameResolver, NumericIds};
pub use text::{DisplayWith, EFFECTIVE_COLUMN};
pub use validate::ValidationError;
