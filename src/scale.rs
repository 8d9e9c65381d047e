//! Scale calculation: fit monitor space onto an output raster.

use crate::monitor::MonitorSet;
use crate::{Result, SplitError};
use log::debug;

/// Which output bound is reached first when scaling monitor space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitingAxis {
    Width,
    Height,
}

/// Result of fitting monitor space onto one output surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub output_width: i64,
    pub output_height: i64,
    pub monitor_width: i64,
    pub monitor_height: i64,
    pub scale_factor: f64,
    pub limiting_axis: LimitingAxis,
    pub monitor_ratio: f64,
    pub output_ratio: f64,
}

/// Compute the uniform scale that maps monitor space onto an output of the
/// given width and/or height.
///
/// With a single bound the other output dimension is derived from it. With
/// both, the axis whose ratio is reached first wins; ties go to width.
pub fn compute_layout(
    monitors: &MonitorSet,
    output_width: Option<u32>,
    output_height: Option<u32>,
) -> Result<Layout> {
    if output_width == Some(0) || output_height == Some(0) {
        return Err(SplitError::InvalidArgument(
            "output bounds must be positive".into(),
        ));
    }

    let extent = monitors.extent();
    let (monitor_width, monitor_height) = (extent.max_width, extent.max_height);
    if monitor_width <= 0 || monitor_height <= 0 {
        return Err(SplitError::Geometry(format!(
            "monitor space has no positive extent ({monitor_width}x{monitor_height})"
        )));
    }
    let monitor_ratio = monitor_height as f64 / monitor_width as f64;

    let (output_width, output_height, scale_factor, limiting_axis) =
        match (output_width, output_height) {
            (None, None) => {
                return Err(SplitError::InvalidArgument(
                    "an output width or output height is required".into(),
                ))
            }
            (None, Some(height)) => {
                let scale = height as f64 / monitor_height as f64;
                let width = (monitor_width as f64 * scale) as i64;
                (width, height as i64, scale, LimitingAxis::Height)
            }
            (Some(width), None) => {
                let scale = width as f64 / monitor_width as f64;
                let height = (monitor_height as f64 * scale) as i64;
                (width as i64, height, scale, LimitingAxis::Width)
            }
            (Some(width), Some(height)) => {
                let output_ratio = height as f64 / width as f64;
                let (width, height) = (width as i64, height as i64);
                if output_ratio < monitor_ratio {
                    let scale = height as f64 / monitor_height as f64;
                    (width, height, scale, LimitingAxis::Height)
                } else {
                    let scale = width as f64 / monitor_width as f64;
                    (width, height, scale, LimitingAxis::Width)
                }
            }
        };
    let output_ratio = output_height as f64 / output_width as f64;

    let layout = Layout {
        output_width,
        output_height,
        monitor_width,
        monitor_height,
        scale_factor,
        limiting_axis,
        monitor_ratio,
        output_ratio,
    };
    debug!("using scale of {layout:?}");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::Monitor;

    fn set(monitors: Vec<Monitor>) -> MonitorSet {
        MonitorSet::new(monitors).unwrap()
    }

    #[test]
    fn side_by_side_width_bound() {
        let monitors = set(vec![
            Monitor::new("left", (1920, 1080), (0, 0)),
            Monitor::new("right", (1920, 1080), (1920, 0)),
        ]);
        let layout = compute_layout(&monitors, Some(3840), None).unwrap();
        assert_eq!(layout.scale_factor, 1.0);
        assert_eq!(layout.limiting_axis, LimitingAxis::Width);
        assert_eq!(layout.output_height, 1080);
    }

    #[test]
    fn taller_output_is_width_limited() {
        let monitors = set(vec![Monitor::new("only", (1000, 500), (0, 0))]);
        let layout = compute_layout(&monitors, Some(100), Some(60)).unwrap();
        assert_eq!(layout.monitor_ratio, 0.5);
        assert!((layout.output_ratio - 0.6).abs() < 1e-12);
        assert_eq!(layout.limiting_axis, LimitingAxis::Width);
        assert!((layout.scale_factor - 0.1).abs() < 1e-12);
        assert_eq!((layout.output_width, layout.output_height), (100, 60));
    }

    #[test]
    fn wider_output_is_height_limited() {
        let monitors = set(vec![Monitor::new("only", (1000, 500), (0, 0))]);
        let layout = compute_layout(&monitors, Some(300), Some(100)).unwrap();
        assert_eq!(layout.limiting_axis, LimitingAxis::Height);
        assert!((layout.scale_factor - 0.2).abs() < 1e-12);
    }

    #[test]
    fn equal_ratio_goes_to_width() {
        let monitors = set(vec![Monitor::new("only", (1000, 500), (0, 0))]);
        let layout = compute_layout(&monitors, Some(200), Some(100)).unwrap();
        assert_eq!(layout.limiting_axis, LimitingAxis::Width);
    }

    #[test]
    fn height_only_derives_width() {
        let monitors = set(vec![Monitor::new("only", (1000, 333), (0, 0))]);
        let layout = compute_layout(&monitors, None, Some(100)).unwrap();
        assert_eq!(layout.limiting_axis, LimitingAxis::Height);
        assert_eq!(layout.output_width, 300);
        assert_eq!(layout.output_height, 100);
    }

    #[test]
    fn outputs_cover_scaled_extent() {
        let monitors = set(vec![
            Monitor::new("a", (2560, 1440), (0, 0)),
            Monitor::new("b", (1080, 1920), (2560, -240)),
        ]);
        let bounds = [
            (Some(79), None),
            (None, Some(37)),
            (Some(4000), Some(1000)),
            (Some(500), Some(900)),
        ];
        for (width, height) in bounds {
            let layout = compute_layout(&monitors, width, height).unwrap();
            assert!(layout.scale_factor > 0.0 && layout.scale_factor.is_finite());
            let scaled_w = layout.monitor_width as f64 * layout.scale_factor;
            let scaled_h = layout.monitor_height as f64 * layout.scale_factor;
            assert!(layout.output_width as f64 >= scaled_w - 1.0);
            assert!(layout.output_height as f64 >= scaled_h - 1.0);
        }
    }

    #[test]
    fn requires_a_bound() {
        let monitors = set(vec![Monitor::new("only", (10, 10), (0, 0))]);
        let unbounded = compute_layout(&monitors, None, None);
        assert!(matches!(unbounded, Err(SplitError::InvalidArgument(_))));
        let zero_width = compute_layout(&monitors, Some(0), None);
        assert!(matches!(zero_width, Err(SplitError::InvalidArgument(_))));
    }

    #[test]
    fn negative_only_space_is_rejected() {
        let monitors = set(vec![Monitor::new("only", (10, 10), (-20, 0))]);
        let layout = compute_layout(&monitors, Some(80), None);
        assert!(matches!(layout, Err(SplitError::Geometry(_))));
    }
}
