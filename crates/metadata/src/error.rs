use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Category of a storage failure, derived from the operating system error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StoreErrorKind {
    /// The platform, build or filesystem has no ACL support.
    NotSupported,
    /// The path does not exist.
    NotFound,
    /// The caller lacks the rights to read or change the ACL.
    PermissionDenied,
    /// The system rejected the ACL's structure.
    InvalidArgument,
    /// An entry could not be converted for the backend, e.g. a non-numeric
    /// qualifier on a named entry.
    Malformed,
    /// Any other I/O failure.
    Io,
}

impl StoreErrorKind {
    /// Classifies an I/O error.
    #[must_use]
    pub fn of(error: &io::Error) -> Self {
        if error.raw_os_error().is_some_and(is_unsupported_errno) {
            return Self::NotSupported;
        }

        match error.kind() {
            io::ErrorKind::Unsupported => Self::NotSupported,
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidInput => Self::InvalidArgument,
            io::ErrorKind::InvalidData => Self::Malformed,
            _ => Self::Io,
        }
    }
}

#[cfg(unix)]
fn is_unsupported_errno(code: i32) -> bool {
    code == libc::ENOTSUP || code == libc::EOPNOTSUPP
}

#[cfg(not(unix))]
fn is_unsupported_errno(_code: i32) -> bool {
    false
}

/// Error produced when reading or writing an ACL fails.
#[derive(Debug, Error)]
#[error("failed to {context} '{}': {source}", .path.display())]
pub struct StoreError {
    context: &'static str,
    path: PathBuf,
    kind: StoreErrorKind,
    source: io::Error,
}

impl StoreError {
    /// Creates an error whose kind is derived from `source`.
    pub(crate) fn new(context: &'static str, path: &Path, source: io::Error) -> Self {
        Self::with_kind(context, path, StoreErrorKind::of(&source), source)
    }

    /// Creates an error with an explicit kind.
    pub(crate) fn with_kind(
        context: &'static str,
        path: &Path,
        kind: StoreErrorKind,
        source: io::Error,
    ) -> Self {
        Self {
            context,
            path: path.to_path_buf(),
            kind,
            source,
        }
    }

    /// Creates a [`StoreErrorKind::Malformed`] error carrying `message`.
    pub(crate) fn malformed(context: &'static str, path: &Path, message: String) -> Self {
        Self::with_kind(
            context,
            path,
            StoreErrorKind::Malformed,
            io::Error::new(io::ErrorKind::InvalidData, message),
        )
    }

    /// Returns the operation being performed when the error occurred.
    #[must_use]
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Returns the path involved in the failing operation.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Returns the underlying [`io::Error`] that triggered this failure.
    #[must_use]
    pub fn source_error(&self) -> &io::Error {
        &self.source
    }
}
