//! Global options shared by every subcommand.

use std::ffi::OsStr;

use clap::ArgMatches;
use logging::Verbosity;

use crate::command::NUMERIC_ENV;

/// Settings derived from global flags and the environment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GlobalOptions {
    /// Diagnostic level selected by `-v` and `-q`.
    pub verbosity: Verbosity,
    /// Whether `get` prints numeric ids when `--numeric` is not given.
    pub numeric_default: bool,
}

impl GlobalOptions {
    /// Reads the global flags from `matches` and defaults from the process
    /// environment.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let numeric = std::env::var_os(NUMERIC_ENV);
        Self {
            verbosity: Verbosity::from_flags(
                matches.get_count("verbose"),
                matches.get_flag("quiet"),
            ),
            numeric_default: numeric.as_deref().is_some_and(env_flag_enabled),
        }
    }
}

/// Interprets a boolean environment value. `1`, `true`, `yes` and `on`
/// enable the flag; anything else leaves it off.
fn env_flag_enabled(value: &OsStr) -> bool {
    value.to_str().is_some_and(|text| {
        matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
