//! Shared types module - constants, piece vocabulary, actions, config
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), i.e. `COLS / 2 - 2` at the top row
//!
//! # Timing
//!
//! One timer period, in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 400 | Drop timer period; each tick is one soft drop |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//!
//! // Kinds are indexable for uniform random draws.
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::T.index(), 2);
//!
//! let action = GameAction::SoftDrop;
//! assert_ne!(action, GameAction::HardDrop);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Drop timer period in milliseconds; every tick advances the piece one row
pub const TICK_MS: u32 = 400;

/// Occupied cells per piece, invariant under rotation
pub const PIECE_CELLS: usize = 4;

/// Canonical reward per cleared row
pub const LINE_REWARD_PER_ROW: u32 = 100;

/// The seven tetromino piece kinds
///
/// Declaration order is the catalog draw order, so `from_index` maps a
/// uniform draw in `0..7` to a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map a catalog index to a kind
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Catalog index of this kind
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Uppercase letter used for preview labels
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// Block colors, drawn uniformly and independently of the piece kind
///
/// Declaration order is the palette draw order (same indexing contract as
/// [`PieceKind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Purple,
    Orange,
}

impl ColorId {
    /// All colors in palette order
    pub const ALL: [ColorId; 7] = [
        ColorId::Red,
        ColorId::Green,
        ColorId::Blue,
        ColorId::Yellow,
        ColorId::Cyan,
        ColorId::Purple,
        ColorId::Orange,
    ];

    /// Map a palette index to a color
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Palette index of this color
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(ColorId)`: cell settled by a locked piece of that color
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<ColorId>;

/// Game actions that can be applied to modify game state
///
/// Each action is a discrete command; key mapping lives outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking if blocked
    SoftDrop,
    /// Drop piece to the lowest non-colliding position
    HardDrop,
    /// Rotate piece 90° in the configured direction
    Rotate,
    /// Exchange the active piece with the next preview
    Swap,
}

/// Rotation direction applied by [`GameAction::Rotate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}

/// What a hard drop does once the piece reaches its resting row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardDropPolicy {
    /// Reposition only; the piece locks on a later blocked drop
    Rest,
    /// Run the lock sequence immediately
    Lock,
}

/// Line-clear reward policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineReward {
    /// Fixed points per cleared row
    PerRow(u32),
    /// Fixed points per clear pass that removed at least one row
    PerClear(u32),
}

/// Rule knobs that differ between game variants
///
/// Defaults reproduce the canonical variant: clockwise rotation, hard drop
/// repositions without locking, 100 points per cleared row, and 0-3 random
/// pre-rotations applied to each spawned piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rotation: RotationDir,
    pub hard_drop: HardDropPolicy,
    pub line_reward: LineReward,
    pub spawn_prerotate: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotation: RotationDir::Clockwise,
            hard_drop: HardDropPolicy::Rest,
            line_reward: LineReward::PerRow(LINE_REWARD_PER_ROW),
            spawn_prerotate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_index_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn color_index_roundtrip() {
        for color in ColorId::ALL {
            assert_eq!(ColorId::from_index(color.index()), Some(color));
        }
        assert_eq!(ColorId::from_index(7), None);
    }

    #[test]
    fn config_defaults_match_canonical_variant() {
        let config = GameConfig::default();
        assert_eq!(config.rotation, RotationDir::Clockwise);
        assert_eq!(config.hard_drop, HardDropPolicy::Rest);
        assert_eq!(config.line_reward, LineReward::PerRow(100));
        assert!(config.spawn_prerotate);
    }

    #[test]
    fn board_constants() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(TICK_MS, 400);
    }
}
