//! Board module - the settled terrain
//!
//! The board is a 10x20 grid where each cell is empty or filled with a color.
//! Uses a flat array for cache locality and zero-allocation row shifting.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! Only locked pieces write cells; the falling piece is overlaid at render time.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use blockfall_types::{Cell, ColorId, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows in flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a shape placed at (x, y) collides
    ///
    /// The floor and both side walls collide; rows above the visible board
    /// (y < 0) never collide against cell contents, but their x-bounds still
    /// apply.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for &(dx, dy) in &shape.minos {
            let px = x + dx;
            let py = y + dy;
            if py >= BOARD_HEIGHT as i8 || px < 0 || px >= BOARD_WIDTH as i8 {
                return true;
            }
            if py >= 0 && self.is_occupied(px, py) {
                return true;
            }
        }
        false
    }

    /// Merge a shape into the board at (x, y) with the given color
    ///
    /// Cells above the visible top (absolute row < 0) are discarded, not
    /// stored. The caller guarantees the placement was reachable, so no
    /// validity check is repeated here.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8, color: ColorId) {
        for &(dx, dy) in &shape.minos {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        match Self::index(0, y) {
            Some(start) => {
                let end = start + BOARD_WIDTH as usize;
                self.cells[start..end].iter().all(|cell| cell.is_some())
            }
            None => false,
        }
    }

    /// Remove all full rows, shifting survivors down and refilling the top
    /// with empty rows
    ///
    /// Two-pointer compaction over the flat array, no allocation. Returns
    /// the cleared row indices in ascending order; a single lock can
    /// complete at most four rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y as i8) {
                cleared_rows.push(read_y as i8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows vacated at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into a snapshot buffer as palette indices
    ///
    /// Empty cells become 0, filled cells `color index + 1`. Writes in
    /// place so snapshot refreshes stay allocation free.
    pub fn write_u8_grid(
        &self,
        out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = match self.cells[y * width + x] {
                    Some(color) => color.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                self.cells[start..start + width].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;
    use blockfall_types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(ColorId::Red));
        board.set(5, 10, Some(ColorId::Cyan));

        assert_eq!(board.get(0, 0), Some(Some(ColorId::Red)));
        assert_eq!(board.get(5, 10), Some(Some(ColorId::Cyan)));

        // Verify internal layout
        assert_eq!(board.cells[0], Some(ColorId::Red));
        assert_eq!(board.cells[10 * 10 + 5], Some(ColorId::Cyan));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(ColorId::Green);
        cells_2d[10][7] = Some(ColorId::Orange);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_collides_against_walls_and_floor() {
        let board = Board::new();
        let square = base_shape(PieceKind::O);

        assert!(!board.collides(&square, 0, 0));
        assert!(board.collides(&square, -1, 0), "left wall");
        assert!(board.collides(&square, 9, 0), "right wall");
        assert!(board.collides(&square, 0, 19), "floor");
        assert!(!board.collides(&square, 8, 18), "bottom-right corner fits");
    }

    #[test]
    fn test_collides_ignores_cells_above_top() {
        let mut board = Board::new();
        board.set(4, 0, Some(ColorId::Blue));

        let square = base_shape(PieceKind::O);
        // Entirely above the board: x-bounds apply, cell contents do not.
        assert!(!board.collides(&square, 4, -2));
        assert!(board.collides(&square, -1, -2));
        // One row poking in at y=0 hits the filled cell.
        assert!(board.collides(&square, 4, -1));
    }

    #[test]
    fn test_write_u8_grid_palette_offsets() {
        let mut board = Board::new();
        board.set(0, 0, Some(ColorId::Red));
        board.set(9, 19, Some(ColorId::Orange));

        let mut grid = [[0u8; 10]; 20];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[19][9], 7);
        assert_eq!(grid[10][5], 0);
    }

    #[test]
    fn test_lock_discards_rows_above_top() {
        let mut board = Board::new();
        let square = base_shape(PieceKind::O);

        board.lock(&square, 4, -1, ColorId::Purple);

        // Row -1 is gone, row 0 is stored.
        assert_eq!(board.get(4, 0), Some(Some(ColorId::Purple)));
        assert_eq!(board.get(5, 0), Some(Some(ColorId::Purple)));
        assert_eq!(board.get(4, 1), Some(None));
        assert_eq!(board.cells.iter().filter(|c| c.is_some()).count(), 2);
    }
}
