//! Verbosity levels selected by `-q` and repeated `-v` flags.

use tracing::level_filters::LevelFilter;

/// How much diagnostic output the user asked for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only (`--quiet`).
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Informational events (`-v`).
    Verbose,
    /// Debug events such as merge decisions (`-vv`).
    Debug,
    /// Everything (`-vvv` and beyond).
    Trace,
}

impl Verbosity {
    /// Derives the level from the number of `-v` flags and `--quiet`.
    ///
    /// `--quiet` wins over any number of `-v` flags.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the most verbose `tracing` level this setting lets through.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}
