//! Per-run options: justification, resizing and verbosity.

use crate::padding::Justify;
use log::LevelFilter;

/// How chatty a run is. Quiet runs print no previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (_, true) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        }
    }

    pub fn shows_previews(self) -> bool {
        self != Verbosity::Quiet
    }

    /// Default log filter; `RUST_LOG` takes precedence when set.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet | Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    /// Left/right placement of the monitor area within the image.
    pub horizontal: Justify,
    /// Top/bottom placement of the monitor area within the image.
    pub vertical: Justify,
    /// Write crops as-is instead of resizing them to each monitor.
    pub crop_only: bool,
    pub verbosity: Verbosity,
}
