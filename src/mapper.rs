//! Monitor-space to output-space coordinate conversion.

use crate::scale::Layout;
use log::trace;

/// Terminal cells are roughly twice as tall as they are wide.
pub const TERMINAL_COMPRESSION: i64 = 2;

/// A point or offset, `(x, y)`.
pub type Point = (i64, i64);

/// The raster a layout is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// A character grid; Y is divided by [`TERMINAL_COMPRESSION`].
    Terminal,
    /// An image pixel grid; no vertical correction.
    Image,
}

impl Surface {
    pub fn compression(self) -> i64 {
        match self {
            Surface::Terminal => TERMINAL_COMPRESSION,
            Surface::Image => 1,
        }
    }
}

/// Converts points and lengths from monitor space using a single layout.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper<'a> {
    layout: &'a Layout,
    surface: Surface,
}

impl<'a> CoordinateMapper<'a> {
    pub fn new(layout: &'a Layout, surface: Surface) -> Self {
        Self { layout, surface }
    }

    pub fn terminal(layout: &'a Layout) -> Self {
        Self::new(layout, Surface::Terminal)
    }

    /// Number of output rows available on this surface.
    pub fn rows(&self) -> i64 {
        self.layout.output_height / self.surface.compression()
    }

    /// Scale a monitor-space length, truncating toward zero.
    pub fn scale(&self, value: i64) -> i64 {
        (value as f64 * self.layout.scale_factor) as i64
    }

    /// Map a monitor-space point to an output cell.
    ///
    /// `pixel_offset` is added in monitor space before scaling and
    /// `term_offset` in output space after. One unit is taken off each
    /// coordinate so a trailing edge lands on the last interior cell. The
    /// result is clamped into the surface.
    pub fn map_point(
        &self,
        point: Point,
        pixel_offset: Option<Point>,
        term_offset: Option<Point>,
    ) -> Point {
        let (mut x, mut y) = point;
        if let Some((dx, dy)) = pixel_offset {
            x += dx;
            y += dy;
        }

        let scale = self.layout.scale_factor;
        let mut out_x = ((x - 1) as f64 * scale) as i64;
        let mut out_y = (((y - 1) as f64 * scale) / self.surface.compression() as f64) as i64;

        if let Some((dx, dy)) = term_offset {
            out_x += dx;
            out_y += dy;
        }
        trace!(
            "{point:?} becomes ({out_x}, {out_y}) \
             with pixel offset {pixel_offset:?} and term offset {term_offset:?}"
        );

        let max_x = (self.layout.output_width - 1).max(0);
        let max_y = (self.rows() - 1).max(0);
        (out_x.clamp(0, max_x), out_y.clamp(0, max_y))
    }
}

/// Map a point onto the terminal surface of `layout`.
pub fn map_point(
    layout: &Layout,
    point: Point,
    pixel_offset: Option<Point>,
    term_offset: Option<Point>,
) -> Point {
    CoordinateMapper::terminal(layout).map_point(point, pixel_offset, term_offset)
}
