#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of the `oc-facl` binary. It
//! parses arguments with [`clap`](https://docs.rs/clap/), dispatches to one of
//! the subcommands below and maps failures onto exit codes:
//!
//! | Subcommand  | Effect                                                   |
//! |-------------|----------------------------------------------------------|
//! | `get`       | print the access (or `--default`) ACL of each path       |
//! | `set`       | replace an ACL after checking it is well formed          |
//! | `add`       | merge entries and recompute the mask                     |
//! | `remove`    | drop entries by slot and recompute the mask              |
//! | `check`     | validate ACL text and report the first violated rule     |
//! | `from-mode` | print the minimal ACL for an octal mode                  |
//! | `to-mode`   | print the octal mode an ACL projects to                  |
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error so tests can drive the whole surface in-process.
//! [`run_with_store`] additionally takes the [`AclStore`] used by the path
//! subcommands; [`run`] passes [`metadata::default_store`]. Diagnostics go
//! through the `logging` crate: `-v` and `-q` select the level and
//! `OC_FACL_LOG` overrides it.
//!
//! `get` resolves user and group ids to names through
//! [`metadata::SystemResolver`] unless `--numeric` is given or
//! `OC_FACL_NUMERIC` is set to a truthy value.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as non-zero exit codes.
//! - Error messages are written to standard error prefixed with `oc-facl: `.
//! - `get` keeps listing remaining paths after a path fails.
//!
//! # Errors
//!
//! Exit code `0` means success, `1` a usage error, unparsable text or an
//! invalid ACL, and `2` a storage failure reported by the backend.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["oc-facl", "from-mode", "--short", "0750"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert_eq!(String::from_utf8(stdout).unwrap(), "u::rwx,g::r-x,o::---\n");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - [`acl`] for the ACL model, parser and renderers.
//! - [`metadata::ops`] for the path-level operations.
//! - `src/bin/oc-facl.rs` for the binary that wires [`run`] into `main`.

mod command;
mod error;
mod execute;
mod options;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use metadata::AclStore;

pub use command::{NUMERIC_ENV, clap_command};
pub use error::{CliError, EXIT_OK, EXIT_STORAGE, EXIT_USAGE};
pub use options::GlobalOptions;

/// Largest value representable as a process exit status.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI against the backend returned by [`metadata::default_store`].
///
/// Returns the process exit code the caller should use.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let store = metadata::default_store();
    run_with_store(arguments, store.as_ref(), stdout, stderr)
}

/// Runs the CLI with `store` serving the path subcommands.
pub fn run_with_store<I, S, St, Out, Err>(
    arguments: I,
    store: &St,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    St: AclStore + ?Sized,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    let options = GlobalOptions::from_matches(&matches);
    logging::init_tracing(options.verbosity);

    let Some((name, sub)) = matches.subcommand() else {
        let _ = writeln!(stderr, "oc-facl: a subcommand is required");
        return EXIT_USAGE;
    };
    let outcome = match name {
        "get" => execute::get(store, options, sub, stdout, stderr),
        "set" => execute::set(store, sub),
        "add" => execute::add(store, sub),
        "remove" => execute::remove(store, sub),
        "check" => execute::check(sub),
        "from-mode" => execute::from_mode(sub, stdout),
        "to-mode" => execute::to_mode(sub, stdout),
        other => {
            let _ = writeln!(stderr, "oc-facl: unknown subcommand '{other}'");
            return EXIT_USAGE;
        }
    };

    match outcome.and_then(|status| stdout.flush().map(|()| status).map_err(CliError::from)) {
        Ok(status) => status,
        Err(error) => {
            tracing::debug!(target: "oc_facl", ?error, "command failed");
            let _ = writeln!(stderr, "oc-facl: {error}");
            error.exit_code()
        }
    }
}

fn report_clap_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if stdout.write_all(rendered.as_bytes()).is_err() {
                return EXIT_USAGE;
            }
            EXIT_OK
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            EXIT_USAGE
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#[cfg(test)]
mod tests;
