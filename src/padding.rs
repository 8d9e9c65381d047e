//! Distribution of leftover output space around the scaled monitor area.

use crate::scale::Layout;
use log::{debug, warn};

/// How the leftover space on one axis is split between its near side
/// (left or top) and its far side (right or bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Split evenly; an odd pixel is dropped.
    #[default]
    Center,
    /// Flush against the near edge.
    Near,
    /// Flush against the far edge.
    Far,
    /// Exact padding on the near side, the rest on the far side.
    NearPadding(i64),
    /// Exact padding on the far side, the rest on the near side.
    FarPadding(i64),
}

/// Output-space margin around the scaled monitor rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

/// Split `remainder` into `(near, far)` according to `justify`.
///
/// Negative explicit paddings are clamped to zero. An explicit padding
/// larger than the remainder is ignored with a warning and the centered
/// split is used instead.
pub fn allocate_padding(remainder: i64, justify: Justify) -> (i64, i64) {
    match justify {
        Justify::Near => (0, remainder),
        Justify::Far => (remainder, 0),
        Justify::NearPadding(near) => {
            let near = clamp_override(near);
            match fits(near, remainder) {
                Some(far) => (near, far),
                None => centered(remainder),
            }
        }
        Justify::FarPadding(far) => {
            let far = clamp_override(far);
            match fits(far, remainder) {
                Some(near) => (near, far),
                None => centered(remainder),
            }
        }
        Justify::Center => centered(remainder),
    }
}

fn clamp_override(value: i64) -> i64 {
    if value < 0 {
        warn!("padding value of {value} is negative (using 0)");
    }
    value.max(0)
}

/// What is left for the opposite side, if `value` fits in `remainder`.
fn fits(value: i64, remainder: i64) -> Option<i64> {
    if value <= remainder {
        Some(remainder - value)
    } else {
        warn!("padding value of {value} > padding pixels of {remainder} (ignoring)");
        None
    }
}

fn centered(remainder: i64) -> (i64, i64) {
    let near = remainder / 2;
    (near, near)
}

/// Leftover space on one axis once monitor space is scaled onto `output_dim`.
/// Negative when the output is smaller than the scaled layout.
pub fn remainder(output_dim: u32, monitor_dim: i64, scale_factor: f64) -> i64 {
    (output_dim as f64 - monitor_dim as f64 * scale_factor) as i64
}

/// Padding for an image of `image_size` pixels carrying `layout`.
pub fn compute_padding(
    layout: &Layout,
    image_size: (u32, u32),
    horizontal: Justify,
    vertical: Justify,
) -> Padding {
    let horizontal_remainder = remainder(image_size.0, layout.monitor_width, layout.scale_factor);
    let vertical_remainder = remainder(image_size.1, layout.monitor_height, layout.scale_factor);
    debug!(
        "horizontal remainder: {horizontal_remainder}, vertical remainder: {vertical_remainder}"
    );

    let (left, right) = allocate_padding(horizontal_remainder, horizontal);
    let (top, bottom) = allocate_padding(vertical_remainder, vertical);
    let padding = Padding {
        left,
        right,
        top,
        bottom,
    };
    debug!("padding: {padding:?}");
    padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{Monitor, MonitorSet};
    use crate::scale::compute_layout;

    #[test]
    fn odd_remainder_loses_a_pixel_when_centered() {
        assert_eq!(allocate_padding(7, Justify::Center), (3, 3));
        assert_eq!(allocate_padding(8, Justify::Center), (4, 4));
    }

    #[test]
    fn justification_flags() {
        assert_eq!(allocate_padding(40, Justify::Near), (0, 40));
        assert_eq!(allocate_padding(40, Justify::Far), (40, 0));
    }

    #[test]
    fn explicit_padding_fills_the_rest() {
        assert_eq!(allocate_padding(41, Justify::NearPadding(10)), (10, 31));
        assert_eq!(allocate_padding(41, Justify::FarPadding(10)), (31, 10));
        assert_eq!(allocate_padding(41, Justify::NearPadding(41)), (41, 0));
    }

    #[test]
    fn oversized_padding_falls_back_to_center() {
        assert_eq!(allocate_padding(41, Justify::NearPadding(42)), (20, 20));
        assert_eq!(allocate_padding(41, Justify::FarPadding(100)), (20, 20));
    }

    #[test]
    fn negative_override_is_clamped_to_zero() {
        assert_eq!(allocate_padding(40, Justify::NearPadding(-5)), (0, 40));
        assert_eq!(allocate_padding(40, Justify::FarPadding(-5)), (40, 0));
        for justify in [Justify::NearPadding(-1), Justify::FarPadding(i64::MIN)] {
            let (near, far) = allocate_padding(12, justify);
            assert!(near >= 0 && far >= 0);
        }
    }

    #[test]
    fn negative_remainder_is_kept() {
        assert_eq!(allocate_padding(-3, Justify::Near), (0, -3));
        assert_eq!(allocate_padding(-4, Justify::Center), (-2, -2));
    }

    #[test]
    fn image_padding_uses_non_limiting_axis() {
        let monitor = Monitor::new("only", (1000, 500), (0, 0));
        let monitors = MonitorSet::new(vec![monitor]).unwrap();
        let layout = compute_layout(&monitors, Some(1000), Some(700)).unwrap();
        let padding = compute_padding(&layout, (1000, 700), Justify::Center, Justify::Near);
        let expected = Padding {
            left: 0,
            right: 0,
            top: 0,
            bottom: 200,
        };
        assert_eq!(padding, expected);

        let padding = compute_padding(&layout, (1000, 700), Justify::Center, Justify::Center);
        assert_eq!((padding.top, padding.bottom), (100, 100));
    }
}
