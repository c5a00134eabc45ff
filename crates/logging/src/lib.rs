#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the command line's `-q` and `-v` flags into a
//! [`Verbosity`] and installs a `tracing-subscriber` formatter on standard
//! error. Library crates only emit `tracing` events (targets `acl::merge`
//! and `acl::store`); this crate decides which of them are shown.
//!
//! # Design
//!
//! - [`Verbosity`] maps to a [`tracing::level_filters::LevelFilter`].
//! - [`init_tracing`] reads the [`LOG_ENV`] variable first. A valid
//!   `EnvFilter` directive there wins over the flags.
//! - Installation uses `try_init`, so calling it twice is harmless.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, build_filter};
//!
//! let verbosity = Verbosity::from_flags(2, false);
//! assert_eq!(verbosity, Verbosity::Debug);
//! let _filter = build_filter(verbosity, Some("acl::store=trace"));
//! ```

mod subscriber;
mod verbosity;

pub use subscriber::{LOG_ENV, build_filter, init_tracing};
pub use verbosity::Verbosity;
