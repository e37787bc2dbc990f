//! Pieces module - shape catalog and pure rotation
//!
//! Shapes are binary matrices with a tight bounding box that varies per kind
//! and rotation (the bar is 4x1 at base, 1x4 after one turn). The catalog is
//! immutable; rotation returns a fresh shape and never touches shared state,
//! so two live pieces can never alias each other's rotation.

use blockfall_types::{PieceKind, RotationDir, BOARD_WIDTH, PIECE_CELLS};

/// Offset of a single mino from the shape's top-left corner
pub type MinoOffset = (i8, i8);

/// Occupied cells inside a `w x h` bounding box
///
/// The top-left corner is the anchor used for board placement: a piece at
/// board position (px, py) occupies (px + dx, py + dy) for each mino.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub w: i8,
    pub h: i8,
    pub minos: [MinoOffset; PIECE_CELLS],
}

impl Shape {
    const fn new(w: i8, h: i8, minos: [MinoOffset; PIECE_CELLS]) -> Self {
        Self { w, h, minos }
    }

    /// Rotate 90° clockwise, keeping the top-left anchor
    ///
    /// Matrix transpose plus row reversal: (dx, dy) maps to (h-1-dy, dx),
    /// width and height swap.
    pub fn rotated_cw(&self) -> Shape {
        let mut minos = self.minos;
        for m in &mut minos {
            *m = (self.h - 1 - m.1, m.0);
        }
        Shape {
            w: self.h,
            h: self.w,
            minos,
        }
    }

    /// Rotate 90° counter-clockwise; exact inverse of [`Shape::rotated_cw`]
    pub fn rotated_ccw(&self) -> Shape {
        let mut minos = self.minos;
        for m in &mut minos {
            *m = (m.1, self.w - 1 - m.0);
        }
        Shape {
            w: self.h,
            h: self.w,
            minos,
        }
    }

    /// Rotate once in the given direction
    pub fn rotated(&self, dir: RotationDir) -> Shape {
        match dir {
            RotationDir::Clockwise => self.rotated_cw(),
            RotationDir::CounterClockwise => self.rotated_ccw(),
        }
    }
}

/// Base (spawn-orientation) shape for a piece kind
pub const fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        // ████
        PieceKind::I => Shape::new(4, 1, [(0, 0), (1, 0), (2, 0), (3, 0)]),
        // ██
        // ██
        PieceKind::O => Shape::new(2, 2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
        // .█.
        // ███
        PieceKind::T => Shape::new(3, 2, [(1, 0), (0, 1), (1, 1), (2, 1)]),
        // █..
        // ███
        PieceKind::J => Shape::new(3, 2, [(0, 0), (0, 1), (1, 1), (2, 1)]),
        // ..█
        // ███
        PieceKind::L => Shape::new(3, 2, [(2, 0), (0, 1), (1, 1), (2, 1)]),
        // .██
        // ██.
        PieceKind::S => Shape::new(3, 2, [(1, 0), (2, 0), (0, 1), (1, 1)]),
        // ██.
        // .██
        PieceKind::Z => Shape::new(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]),
    }
}

/// Spawn position for new pieces (x, y), anchored at the top row
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH as i8 / 2 - 2, 0);

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(shape: &Shape) -> Vec<MinoOffset> {
        let mut v = shape.minos.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn base_shapes_have_tight_boxes() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            let max_x = shape.minos.iter().map(|m| m.0).max().unwrap();
            let max_y = shape.minos.iter().map(|m| m.1).max().unwrap();
            assert_eq!(max_x + 1, shape.w, "{:?} width not tight", kind);
            assert_eq!(max_y + 1, shape.h, "{:?} height not tight", kind);
            assert!(shape.minos.iter().all(|m| m.0 >= 0 && m.1 >= 0));
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let bar = base_shape(PieceKind::I);
        let turned = bar.rotated_cw();
        assert_eq!((turned.w, turned.h), (1, 4));
        assert_eq!(sorted(&turned), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn t_nub_points_right_after_cw() {
        let t = base_shape(PieceKind::T).rotated_cw();
        assert_eq!((t.w, t.h), (2, 3));
        assert_eq!(sorted(&t), vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn t_nub_points_left_after_ccw() {
        let t = base_shape(PieceKind::T).rotated_ccw();
        assert_eq!((t.w, t.h), (2, 3));
        assert_eq!(sorted(&t), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn four_cw_turns_restore_base() {
        for kind in PieceKind::ALL {
            let base = base_shape(kind);
            let mut shape = base;
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, base, "{:?} not restored after four turns", kind);
        }
    }

    #[test]
    fn ccw_inverts_cw() {
        for kind in PieceKind::ALL {
            let base = base_shape(kind);
            assert_eq!(base.rotated_cw().rotated_ccw(), base);
            assert_eq!(base.rotated_ccw().rotated_cw(), base);
        }
    }

    #[test]
    fn rotation_preserves_cell_count_and_distinctness() {
        for kind in PieceKind::ALL {
            let mut shape = base_shape(kind);
            for _ in 0..4 {
                shape = shape.rotated_cw();
                let cells = sorted(&shape);
                let mut dedup = cells.clone();
                dedup.dedup();
                assert_eq!(dedup.len(), PIECE_CELLS, "{:?} lost a mino", kind);
            }
        }
    }

    #[test]
    fn o_rotation_is_identity_on_cells() {
        let o = base_shape(PieceKind::O);
        assert_eq!(sorted(&o.rotated_cw()), sorted(&o));
    }

    #[test]
    fn spawn_position_is_centered() {
        assert_eq!(SPAWN_POSITION, (3, 0));
    }
}
