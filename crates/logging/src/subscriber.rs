//! Installation of the process-wide `tracing` subscriber.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::Verbosity;

/// Environment variable holding an [`EnvFilter`] directive that overrides the
/// verbosity flags, e.g. `OC_FACL_LOG=acl::merge=debug`.
pub const LOG_ENV: &str = "OC_FACL_LOG";

/// Builds the event filter for `verbosity`.
///
/// A non-empty `directives` string that parses as an [`EnvFilter`] replaces
/// the level derived from `verbosity`; an unparsable one is ignored.
#[must_use]
pub fn build_filter(verbosity: Verbosity, directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .and_then(|text| EnvFilter::try_new(text).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(verbosity.level_filter().into()))
}

/// Installs a formatting subscriber writing to standard error.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise from `verbosity`.
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity, directives.as_deref()))
        .with_writer(io::stderr)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok()
}
