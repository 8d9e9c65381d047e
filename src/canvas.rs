//! Character grid and line/text primitives for ASCII layout diagrams.

use crate::mapper::TERMINAL_COMPRESSION;
use crate::scale::Layout;
use crate::{Result, SplitError};
use log::trace;
use std::fmt;

const CORNER: char = '+';

/// A cell position, `(column, row)`.
pub type Cell = (i64, i64);

/// A 2-D character grid addressed by `(column, row)`.
pub struct Canvas {
    columns: usize,
    rows: usize,
    // cells[column][row]
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![vec![' '; rows]; columns],
        }
    }

    /// A canvas covering the terminal surface of `layout`, plus one column
    /// and one row for the axis overlay.
    pub fn for_layout(layout: &Layout) -> Self {
        let columns = layout.output_width.max(0) as usize + 1;
        let rows = (layout.output_height / TERMINAL_COMPRESSION).max(0) as usize + 1;
        trace!("canvas is {columns} columns by {rows} rows");
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, (column, row): Cell) -> Option<char> {
        let (column, row) = (usize::try_from(column).ok()?, usize::try_from(row).ok()?);
        self.cells.get(column)?.get(row).copied()
    }

    /// Write one cell; positions outside the grid are ignored.
    pub fn set(&mut self, (column, row): Cell, ch: char) {
        let (Ok(column), Ok(row)) = (usize::try_from(column), usize::try_from(row)) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(column).and_then(|c| c.get_mut(row)) {
            *cell = ch;
        }
    }

    /// Draw a horizontal line between two cells on the same row.
    ///
    /// Endpoints become corners, and existing corners along the way are
    /// kept so crossing borders join up. With `arrows` the first and last
    /// interior cells become `<` and `>`. A `title` is centered on the line.
    pub fn draw_horizontal(
        &mut self,
        p1: Cell,
        p2: Cell,
        arrows: bool,
        title: Option<&str>,
    ) -> Result<()> {
        if p1.1 != p2.1 {
            return Err(SplitError::Geometry(format!(
                "horizontal line from {p1:?} to {p2:?} changes row"
            )));
        }
        trace!("drawing horizontal line from {p1:?} to {p2:?}");
        let row = p1.1;
        self.draw_line(p1.0, p2.0, title, |at| (at, row), |at, start, end| {
            if arrows && at == start + 1 {
                '<'
            } else if arrows && at == end - 1 {
                '>'
            } else {
                '-'
            }
        });
        Ok(())
    }

    /// Draw a vertical line between two cells in the same column; the
    /// vertical counterpart of [`Canvas::draw_horizontal`] with `^` and `V`
    /// arrows.
    pub fn draw_vertical(
        &mut self,
        p1: Cell,
        p2: Cell,
        arrows: bool,
        title: Option<&str>,
    ) -> Result<()> {
        if p1.0 != p2.0 {
            return Err(SplitError::Geometry(format!(
                "vertical line from {p1:?} to {p2:?} changes column"
            )));
        }
        trace!("drawing vertical line from {p1:?} to {p2:?}");
        let column = p1.0;
        self.draw_line(p1.1, p2.1, title, |at| (column, at), |at, start, end| {
            if arrows && at == start + 1 {
                '^'
            } else if arrows && at == end - 1 {
                'V'
            } else {
                '|'
            }
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: i64,
        to: i64,
        title: Option<&str>,
        cell: impl Fn(i64) -> Cell,
        stroke: impl Fn(i64, i64, i64) -> char,
    ) {
        self.set(cell(from), CORNER);
        self.set(cell(to), CORNER);
        let (start, end) = if from <= to { (from, to) } else { (to, from) };

        let title: Vec<char> = title.map(|t| t.chars().collect()).unwrap_or_default();
        let center_offset = (end - start - title.len() as i64).div_euclid(2);

        for at in start + 1..end {
            if self.get(cell(at)) == Some(CORNER) {
                continue;
            }
            let glyph = stroke(at, start, end);
            let glyph = if glyph == '-' || glyph == '|' {
                let index = at - start - center_offset;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| title.get(i).copied())
                    .unwrap_or(glyph)
            } else {
                glyph
            };
            self.set(cell(at), glyph);
        }
    }

    /// Write `text` rightward from `location` if `available_width` output
    /// cells can hold it; otherwise leave the canvas untouched.
    pub fn draw_text(&mut self, text: &str, location: Cell, available_width: f64) -> bool {
        let required = text.chars().count();
        trace!("{text:?} requires {required} cells; {available_width} available");
        if (required as f64) > available_width {
            return false;
        }
        for (i, ch) in text.chars().enumerate() {
            self.set((location.0 + i as i64, location.1), ch);
        }
        true
    }

    /// Arrowed axes along the bottom row and right column, titled with the
    /// monitor-space width and height.
    pub fn draw_axes(&mut self, layout: &Layout) -> Result<()> {
        let last_column = self.columns as i64 - 1;
        let last_row = self.rows as i64 - 1;
        let width = layout.monitor_width.to_string();
        let height = layout.monitor_height.to_string();
        self.draw_horizontal((0, last_row), (last_column, last_row), true, Some(&width))?;
        self.draw_vertical((last_column, 0), (last_column, last_row), true, Some(&height))
    }

    /// One string per row, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |row| self.cells.iter().map(|column| column[row]).collect())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::LimitingAxis;

    fn row(canvas: &Canvas, row: usize) -> String {
        canvas.lines().nth(row).unwrap()
    }

    #[test]
    fn horizontal_line_with_corners() {
        let mut canvas = Canvas::new(6, 1);
        canvas.draw_horizontal((4, 0), (0, 0), false, None).unwrap();
        assert_eq!(row(&canvas, 0), "+---+ ");
    }

    #[test]
    fn arrows_and_centered_title() {
        let mut canvas = Canvas::new(11, 1);
        canvas.draw_horizontal((0, 0), (10, 0), true, Some("320")).unwrap();
        assert_eq!(row(&canvas, 0), "+<-320--->+");
    }

    #[test]
    fn vertical_arrows() {
        let mut canvas = Canvas::new(1, 5);
        canvas.draw_vertical((0, 0), (0, 4), true, None).unwrap();
        assert_eq!(canvas.to_string(), "+\n^\n|\nV\n+\n");
    }

    #[test]
    fn vertical_title_reads_downward() {
        let mut canvas = Canvas::new(1, 6);
        canvas.draw_vertical((0, 0), (0, 5), false, Some("ab")).unwrap();
        assert_eq!(canvas.to_string(), "+\na\nb\n|\n|\n+\n");
    }

    #[test]
    fn corners_survive_crossing_lines() {
        let mut canvas = Canvas::new(5, 3);
        canvas.draw_vertical((2, 0), (2, 2), false, None).unwrap();
        canvas.draw_horizontal((0, 2), (4, 2), false, None).unwrap();
        canvas.draw_horizontal((0, 0), (4, 0), false, None).unwrap();
        assert_eq!(row(&canvas, 0), "+-+-+");
        assert_eq!(row(&canvas, 1), "  |  ");
        assert_eq!(row(&canvas, 2), "+-+-+");
    }

    #[test]
    fn misaligned_endpoints_are_rejected() {
        let mut canvas = Canvas::new(5, 5);
        let horizontal = canvas.draw_horizontal((0, 0), (4, 1), false, None);
        assert!(matches!(horizontal, Err(SplitError::Geometry(_))));
        let vertical = canvas.draw_vertical((0, 0), (1, 4), false, None);
        assert!(matches!(vertical, Err(SplitError::Geometry(_))));
    }

    #[test]
    fn text_needs_room() {
        let mut canvas = Canvas::new(10, 1);
        assert!(!canvas.draw_text("toolong", (0, 0), 6.5));
        assert_eq!(row(&canvas, 0), " ".repeat(10));
        assert!(canvas.draw_text("fits", (1, 0), 4.0));
        assert_eq!(row(&canvas, 0), " fits     ");
    }

    #[test]
    fn axes_label_monitor_space() {
        let layout = Layout {
            output_width: 12,
            output_height: 8,
            monitor_width: 120,
            monitor_height: 80,
            scale_factor: 0.1,
            limiting_axis: LimitingAxis::Width,
            monitor_ratio: 80.0 / 120.0,
            output_ratio: 8.0 / 12.0,
        };
        let mut canvas = Canvas::for_layout(&layout);
        assert_eq!((canvas.columns(), canvas.rows()), (13, 5));
        canvas.draw_axes(&layout).unwrap();
        assert_eq!(row(&canvas, 4), "+<--120---->+");
        assert_eq!(canvas.get((12, 0)), Some('+'));
        assert_eq!(canvas.get((12, 1)), Some('^'));
        assert_eq!(canvas.get((12, 3)), Some('V'));
    }
}
