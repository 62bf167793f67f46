//! Display geometry and the character grid the renderer fills.

use thiserror::Error;

/// Smallest usable terminal width.
pub const MIN_COLS: u16 = 16;
/// Smallest usable terminal height (status line plus one text row).
pub const MIN_ROWS: u16 = 2;

/// The terminal is below the minimum usable size.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("terminal too small: {cols}x{rows} (need at least {MIN_COLS}x{MIN_ROWS})")]
pub struct GeometryError {
    pub cols: u16,
    pub rows: u16,
}

/// Display geometry, captured once at session start.
///
/// The top row holds the status line; the remaining rows hold document text.
/// Geometry never changes mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    cols: u16,
    rows: u16,
}

impl Geometry {
    /// Validate terminal dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the terminal is smaller than
    /// [`MIN_COLS`] × [`MIN_ROWS`].
    pub const fn new(cols: u16, rows: u16) -> Result<Self, GeometryError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GeometryError { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Total terminal width in columns.
    pub const fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Total terminal height in rows, status line included.
    pub const fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Rows available for document text (everything below the status line).
    pub const fn text_rows(&self) -> usize {
        self.rows as usize - 1
    }
}

/// A fixed rows×cols grid of display cells, fully rewritten every render
/// pass. Cells hold printable ASCII; unwritten cells are spaces.
#[derive(Debug, Clone)]
pub struct ScreenGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl ScreenGrid {
    /// Allocate a blank grid sized for the text area of `geometry`.
    pub fn new(geometry: Geometry) -> Self {
        let rows = geometry.text_rows();
        let cols = geometry.cols();
        Self {
            rows,
            cols,
            cells: vec![b' '; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(b' ');
    }

    /// Write one cell.
    ///
    /// # Panics
    ///
    /// Panics if `row`/`col` are outside the grid.
    pub fn put(&mut self, row: usize, col: usize, byte: u8) {
        assert!(row < self.rows && col < self.cols, "put: cell ({row},{col}) outside grid");
        self.cells[row * self.cols + col] = byte;
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// One row as text, for the paint layer.
    pub fn row_text(&self, row: usize) -> String {
        String::from_utf8_lossy(self.row(row)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_minimums() {
        assert!(Geometry::new(16, 2).is_ok());
        assert_eq!(
            Geometry::new(15, 24),
            Err(GeometryError { cols: 15, rows: 24 })
        );
        assert_eq!(
            Geometry::new(80, 1),
            Err(GeometryError { cols: 80, rows: 1 })
        );
    }

    #[test]
    fn test_text_rows_reserves_status_line() {
        let g = Geometry::new(80, 24).unwrap();
        assert_eq!(g.text_rows(), 23);
        assert_eq!(g.cols(), 80);
    }

    #[test]
    fn test_grid_starts_blank() {
        let grid = ScreenGrid::new(Geometry::new(16, 3).unwrap());
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 16);
        assert!(grid.row(0).iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_put_and_clear() {
        let mut grid = ScreenGrid::new(Geometry::new(16, 3).unwrap());
        grid.put(1, 4, b'x');
        assert_eq!(grid.row(1)[4], b'x');
        assert_eq!(grid.row_text(1), "    x           ");
        grid.clear();
        assert_eq!(grid.row(1)[4], b' ');
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_put_out_of_bounds_panics() {
        let mut grid = ScreenGrid::new(Geometry::new(16, 3).unwrap());
        grid.put(2, 0, b'x');
    }
}
