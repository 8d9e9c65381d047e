//! Monitor layout model and the JSON monitor definition loader.

use crate::{Result, SplitError};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One physical display, placed in monitor space.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Monitor {
    pub name: String,
    /// `[width, height]` in monitor-space pixels.
    pub resolution: (u32, u32),
    /// `[x, y]` of the top-left corner; may be negative.
    pub upper_left: (i64, i64),
    /// Inserted before the image extension to name this monitor's output.
    pub suffix: String,
}

impl Monitor {
    pub fn new(name: impl Into<String>, resolution: (u32, u32), upper_left: (i64, i64)) -> Self {
        Self {
            name: name.into(),
            resolution,
            upper_left,
            suffix: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn width(&self) -> i64 {
        self.resolution.0 as i64
    }

    pub fn height(&self) -> i64 {
        self.resolution.1 as i64
    }

    pub fn right_edge(&self) -> i64 {
        self.upper_left.0 + self.width()
    }

    pub fn bottom_edge(&self) -> i64 {
        self.upper_left.1 + self.height()
    }

    /// `"{width}x{height}"` label used in previews.
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.resolution.0, self.resolution.1)
    }
}

/// Farthest right and bottom edges of a monitor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSpaceExtent {
    pub max_width: i64,
    pub max_height: i64,
}

/// A non-empty collection of monitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSet {
    monitors: Vec<Monitor>,
}

impl MonitorSet {
    pub fn new(monitors: Vec<Monitor>) -> Result<Self> {
        if monitors.is_empty() {
            return Err(SplitError::Geometry(
                "monitor set must contain at least one monitor".into(),
            ));
        }
        Ok(Self { monitors })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monitor> {
        self.monitors.iter()
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    pub fn extent(&self) -> MonitorSpaceExtent {
        let mut extent = MonitorSpaceExtent {
            max_width: i64::MIN,
            max_height: i64::MIN,
        };
        for monitor in &self.monitors {
            let (right, bottom) = (monitor.right_edge(), monitor.bottom_edge());
            if right > extent.max_width {
                debug!("monitor {} gives new max right edge {right}", monitor.name);
                extent.max_width = right;
            }
            if bottom > extent.max_height {
                debug!("monitor {} gives new max bottom edge {bottom}", monitor.name);
                extent.max_height = bottom;
            }
        }
        debug!("monitor maximums: {}x{}", extent.max_width, extent.max_height);
        extent
    }
}

impl<'a> IntoIterator for &'a MonitorSet {
    type Item = &'a Monitor;
    type IntoIter = std::slice::Iter<'a, Monitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.monitors.iter()
    }
}

#[derive(Deserialize)]
struct MonitorFile {
    monitors: Option<Vec<Monitor>>,
}

/// Parse a monitor definition document.
pub fn parse_monitors(json: &str) -> Result<MonitorSet> {
    let file: MonitorFile = serde_json::from_str(json)?;
    let monitors = file
        .monitors
        .ok_or_else(|| SplitError::Config("monitor definition has no \"monitors\" key".into()))?;
    if monitors.is_empty() {
        return Err(SplitError::Config("monitor definition lists no monitors".into()));
    }
    for monitor in &monitors {
        if monitor.resolution.0 == 0 || monitor.resolution.1 == 0 {
            return Err(SplitError::Config(format!(
                "monitor {} has a non-positive resolution {}",
                monitor.name,
                monitor.resolution_label()
            )));
        }
    }
    MonitorSet::new(monitors)
}

/// Read and parse a monitor definition file. A leading `~` expands to `$HOME`.
pub fn load_monitors(path: impl AsRef<Path>) -> Result<MonitorSet> {
    let path = expand_home(path.as_ref());
    if !path.is_file() {
        return Err(SplitError::Config(format!("unable to find {}", path.display())));
    }
    let json = std::fs::read_to_string(&path)?;
    let monitors = parse_monitors(&json)?;
    debug!("loaded {} monitors from {}", monitors.len(), path.display());
    Ok(monitors)
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
