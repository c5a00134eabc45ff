//! Failures reported by the command-line front end.

use std::io;

use acl::{ParseAclError, ValidationError};
use metadata::StoreError;
use thiserror::Error;

/// Exit status for successful runs.
pub const EXIT_OK: i32 = 0;
/// Exit status for usage errors, unparsable text and invalid ACLs.
pub const EXIT_USAGE: i32 = 1;
/// Exit status for storage failures.
pub const EXIT_STORAGE: i32 = 2;

/// Error raised while executing a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// ACL, entry or slot text failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseAclError),
    /// The ACL text parsed but is not well formed.
    #[error("invalid ACL: {0}")]
    Invalid(#[from] ValidationError),
    /// A mode argument is not an octal permission value.
    #[error("invalid mode '{0}': expected octal digits such as 0750")]
    Mode(String),
    /// The ACL lacks one of the entries the mode projection reads.
    #[error("cannot project ACL to a mode: owner, owning group and other entries are required")]
    Projection,
    /// Reading or writing an ACL failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Store(_) => EXIT_STORAGE,
            Self::Parse(_)
            | Self::Invalid(_)
            | Self::Mode(_)
            | Self::Projection
            | Self::Output(_) => EXIT_USAGE,
        }
    }
}
