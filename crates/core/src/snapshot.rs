//! Read-only state snapshots for rendering
//!
//! A snapshot is plain data: the settled grid as palette indices, the falling
//! piece, its ghost row, the next preview, score, and the game-over flag.
//! Renderers work from snapshots alone and never touch live game state.

use crate::game_state::ActivePiece;
use crate::pieces::{base_shape, MinoOffset};
use blockfall_types::{ColorId, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_CELLS};

/// The falling piece as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: ColorId,
    pub x: i8,
    pub y: i8,
    pub minos: [MinoOffset; PIECE_CELLS],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            x: piece.x,
            y: piece.y,
            minos: piece.shape.minos,
        }
    }
}

/// The upcoming piece in base orientation, for the preview box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color: ColorId,
    pub w: i8,
    pub h: i8,
    pub minos: [MinoOffset; PIECE_CELLS],
}

impl NextSnapshot {
    pub fn new(kind: PieceKind, color: ColorId) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            color,
            w: shape.w,
            h: shape.h,
            minos: shape.minos,
        }
    }
}

/// One frame's worth of observable game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty cell, otherwise palette index + 1
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would rest on after a hard drop
    pub ghost_y: Option<i8>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = None;
        self.score = 0;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            score: 0,
            game_over: false,
        }
    }
}
