//! Cutting a source image into one output image per monitor.

use crate::mapper::{CoordinateMapper, Surface};
use crate::monitor::{Monitor, MonitorSet};
use crate::options::SplitOptions;
use crate::padding::{compute_padding, Padding};
use crate::scale::{compute_layout, Layout};
use crate::{Result, SplitError};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Region of the source image for one monitor, in image pixels.
/// `right` and `lower` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: i64,
    pub upper: i64,
    pub right: i64,
    pub lower: i64,
}

impl CropBox {
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.lower - self.upper
    }

    fn within(&self, (width, height): (u32, u32)) -> bool {
        self.left >= 0
            && self.upper >= 0
            && self.right <= width as i64
            && self.lower <= height as i64
    }
}

/// Layout and padding of the monitor set against one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub image_size: (u32, u32),
    pub layout: Layout,
    pub padding: Padding,
}

impl Plan {
    pub fn new(
        monitors: &MonitorSet,
        image_size: (u32, u32),
        options: &SplitOptions,
    ) -> Result<Self> {
        let layout = compute_layout(monitors, Some(image_size.0), Some(image_size.1))?;
        let padding = compute_padding(&layout, image_size, options.horizontal, options.vertical);
        Ok(Self {
            image_size,
            layout,
            padding,
        })
    }

    pub fn crop_box(&self, monitor: &Monitor) -> CropBox {
        let mapper = CoordinateMapper::new(&self.layout, Surface::Image);
        let left = self.padding.left + mapper.scale(monitor.upper_left.0);
        let upper = self.padding.top + mapper.scale(monitor.upper_left.1);
        CropBox {
            left,
            upper,
            right: left + mapper.scale(monitor.width()),
            lower: upper + mapper.scale(monitor.height()),
        }
    }
}

/// Cut `crop` out of `image`. Parts of the box beyond the image edges are
/// left as zeroed pixels.
pub fn crop(image: &DynamicImage, crop: &CropBox) -> Result<DynamicImage> {
    if crop.width() <= 0 || crop.height() <= 0 {
        return Err(SplitError::Geometry(format!("crop box {crop:?} is empty")));
    }
    let (width, height) = (crop.width() as u32, crop.height() as u32);
    if crop.within(image.dimensions()) {
        return Ok(image.crop_imm(crop.left as u32, crop.upper as u32, width, height));
    }
    debug!("crop box {crop:?} extends past the {:?} image", image.dimensions());
    let mut out = DynamicImage::new(width, height, image.color());
    imageops::replace(&mut out, image, -crop.left, -crop.upper);
    Ok(out)
}

/// Resize a crop to the monitor's resolution. Lanczos3 when shrinking,
/// Catmull-Rom otherwise; untouched when it already matches.
pub fn fit_to_monitor(cropped: DynamicImage, monitor: &Monitor) -> DynamicImage {
    let (width, height) = monitor.resolution;
    if cropped.dimensions() == (width, height) {
        debug!("{} crop already {}; skipping resize", monitor.name, monitor.resolution_label());
        return cropped;
    }
    let filter = if width < cropped.width() {
        FilterType::Lanczos3
    } else {
        FilterType::CatmullRom
    };
    debug!(
        "resizing {:?} crop to {} ({filter:?})",
        cropped.dimensions(),
        monitor.resolution_label()
    );
    cropped.resize_exact(width, height, filter)
}

/// `dir/name.ext` → `dir/name<suffix>.ext`.
///
/// The suffix goes before the last `.` of the file name, so a dotfile such
/// as `.png` becomes `<suffix>.png`. A name without a `.` gets the suffix
/// appended.
pub fn output_path(source: &Path, suffix: &str) -> PathBuf {
    let name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match name.rfind('.') {
        Some(dot) => format!("{}{suffix}{}", &name[..dot], &name[dot..]),
        None => format!("{name}{suffix}"),
    };
    source.with_file_name(name)
}

pub fn open_source(source: &Path) -> Result<DynamicImage> {
    if !source.is_file() {
        return Err(SplitError::MissingSourceImage(source.to_path_buf()));
    }
    Ok(image::open(source)?)
}

/// Crop, resize and save every monitor's share of `image` next to `source`.
pub fn write_outputs(
    monitors: &MonitorSet,
    image: &DynamicImage,
    source: &Path,
    plan: &Plan,
    options: &SplitOptions,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(monitors.len());
    for monitor in monitors {
        let crop_box = plan.crop_box(monitor);
        debug!(
            "cropping {} at {crop_box:?} -> {}x{}",
            monitor.name,
            crop_box.width(),
            crop_box.height()
        );
        let cropped = crop(image, &crop_box)?;
        let output = if options.crop_only {
            cropped
        } else {
            fit_to_monitor(cropped, monitor)
        };

        let path = output_path(source, &monitor.suffix);
        output.save(&path)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Split the image at `source` into one file per monitor.
pub fn partition(
    monitors: &MonitorSet,
    source: &Path,
    options: &SplitOptions,
) -> Result<Vec<PathBuf>> {
    partition_with(monitors, source, options, |_| Ok(()))
}

/// [`partition`], handing the plan to `on_plan` before any file is written.
pub fn partition_with(
    monitors: &MonitorSet,
    source: &Path,
    options: &SplitOptions,
    on_plan: impl FnOnce(&Plan) -> Result<()>,
) -> Result<Vec<PathBuf>> {
    let image = open_source(source)?;
    let plan = Plan::new(monitors, image.dimensions(), options)?;
    on_plan(&plan)?;
    write_outputs(monitors, &image, source, &plan, options)
}
