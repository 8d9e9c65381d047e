//! Split one wallpaper image into per-monitor crops for a multi-monitor desktop.

pub mod canvas;
pub mod mapper;
pub mod monitor;
pub mod options;
pub mod padding;
pub mod partition;
pub mod preview;
pub mod scale;

pub use canvas::Canvas;
pub use monitor::{load_monitors, Monitor, MonitorSet};
pub use options::{SplitOptions, Verbosity};
pub use padding::{Justify, Padding};
pub use scale::{compute_layout, Layout, LimitingAxis};

use log::warn;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Config error: malformed monitor definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Geometry error: {0}")]
    Geometry(String),
    #[error("{} does not exist", .0.display())]
    MissingSourceImage(PathBuf),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SplitError>;

/// Splits wallpapers for one monitor set, printing previews as it goes.
pub struct Splitter {
    monitors: MonitorSet,
    options: SplitOptions,
    terminal_width: u32,
}

impl Splitter {
    pub fn new(monitors: MonitorSet) -> Self {
        Self {
            monitors,
            options: SplitOptions::default(),
            terminal_width: preview::DEFAULT_TERMINAL_WIDTH,
        }
    }

    pub fn with_options(mut self, options: SplitOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_terminal_width(mut self, width: u32) -> Self {
        self.terminal_width = width;
        self
    }

    pub fn monitors(&self) -> &MonitorSet {
        &self.monitors
    }

    /// Print the monitor layout on its own.
    pub fn print_layout(&self, out: &mut impl Write) -> Result<()> {
        if !self.options.verbosity.shows_previews() {
            return Ok(());
        }
        let canvas = preview::render_layout(&self.monitors, self.terminal_width)?;
        writeln!(out, "Monitor Layout read from definition file:")?;
        write!(out, "{canvas}")?;
        Ok(())
    }

    /// Split one image. A missing file is an error here; see [`Splitter::split_all`].
    pub fn split_file(&self, source: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
        partition::partition_with(&self.monitors, source, &self.options, |plan| {
            if !self.options.verbosity.shows_previews() {
                return Ok(());
            }
            let canvas = preview::render_projection(
                &self.monitors,
                &plan.layout,
                plan.image_size,
                &plan.padding,
                self.terminal_width,
            )?;
            writeln!(out)?;
            writeln!(out, "Projection of monitor definition file onto {}:", source.display())?;
            write!(out, "{canvas}")?;
            Ok(())
        })
    }

    /// Split every image in turn, skipping missing files with a warning.
    pub fn split_all<P: AsRef<Path>>(
        &self,
        sources: &[P],
        out: &mut impl Write,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for source in sources {
            let source = source.as_ref();
            if self.options.verbosity.shows_previews() {
                writeln!(out, "Processing: {}", source.display())?;
            }
            match self.split_file(source, out) {
                Ok(paths) => written.extend(paths),
                Err(SplitError::MissingSourceImage(path)) => {
                    warn!("{} does not exist; skipping", path.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(written)
    }
}
