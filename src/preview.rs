//! ASCII previews of a monitor layout, alone or projected onto an image.

use crate::canvas::Canvas;
use crate::mapper::{CoordinateMapper, Point};
use crate::monitor::{Monitor, MonitorSet};
use crate::padding::Padding;
use crate::scale::{compute_layout, Layout};
use crate::Result;
use log::debug;

/// Used when the terminal width cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: u32 = 80;

/// Draw one monitor's border plus its name and resolution labels.
pub fn draw_monitor(
    canvas: &mut Canvas,
    layout: &Layout,
    monitor: &Monitor,
    pixel_offset: Option<Point>,
) -> Result<()> {
    let mapper = CoordinateMapper::terminal(layout);
    let (x, y) = monitor.upper_left;
    let (right, bottom) = (monitor.right_edge(), monitor.bottom_edge());

    let upper_left = mapper.map_point((x, y), pixel_offset, None);
    let upper_right = mapper.map_point((right, y), pixel_offset, None);
    let lower_left = mapper.map_point((x, bottom), pixel_offset, None);
    let lower_right = mapper.map_point((right, bottom), pixel_offset, None);

    canvas.draw_horizontal(upper_left, upper_right, false, None)?;
    canvas.draw_horizontal(lower_left, lower_right, false, None)?;
    canvas.draw_vertical(upper_left, lower_left, false, None)?;
    canvas.draw_vertical(upper_right, lower_right, false, None)?;

    let available = monitor.width() as f64 * layout.scale_factor;
    let labels = [(monitor.name.clone(), (1, 1)), (monitor.resolution_label(), (1, 2))];
    for (text, term_offset) in labels {
        let location = mapper.map_point((x, y), pixel_offset, Some(term_offset));
        if !canvas.draw_text(&text, location, available) {
            debug!("label {text:?} does not fit on monitor {}", monitor.name);
        }
    }
    Ok(())
}

/// Draw every monitor onto a fresh canvas sized for `layout`, then the axes.
pub fn render(
    layout: &Layout,
    monitors: &MonitorSet,
    pixel_offset: Option<Point>,
) -> Result<Canvas> {
    let mut canvas = Canvas::for_layout(layout);
    for monitor in monitors {
        draw_monitor(&mut canvas, layout, monitor, pixel_offset)?;
    }
    canvas.draw_axes(layout)?;
    Ok(canvas)
}

/// The monitor layout scaled to a terminal `terminal_width` columns wide.
/// One column is kept back for the vertical axis.
pub fn render_layout(monitors: &MonitorSet, terminal_width: u32) -> Result<Canvas> {
    let layout = compute_layout(monitors, Some(terminal_width.saturating_sub(1)), None)?;
    render(&layout, monitors, None)
}

/// The monitors as they will be cut from an image of `image_size`, given the
/// image layout and padding. The axes show the image dimensions.
pub fn render_projection(
    monitors: &MonitorSet,
    image_layout: &Layout,
    image_size: (u32, u32),
    padding: &Padding,
    terminal_width: u32,
) -> Result<Canvas> {
    let image = Monitor::new("Background Image", image_size, (0, 0));
    let background = MonitorSet::new(vec![image])?;
    let mut layout = compute_layout(&background, Some(terminal_width.saturating_sub(1)), None)?;
    layout.scale_factor *= image_layout.scale_factor;

    // Padding is in image pixels; the mapper offsets in monitor space.
    let offset = (
        (padding.left as f64 / image_layout.scale_factor) as i64,
        (padding.top as f64 / image_layout.scale_factor) as i64,
    );
    debug!("projection offset in monitor space: {offset:?}");
    render(&layout, monitors, Some(offset))
}
