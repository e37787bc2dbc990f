//! Game state module - the engine state machine
//!
//! Ties together board, catalog, RNG, and scoring. Every transition is a
//! synchronous method on the state itself: external events (keys, the drop
//! timer) become [`GameAction`]s or [`GameState::tick`] calls, each resolving
//! fully before the next. Once the game is over every handler is a no-op;
//! restarting means building a fresh `GameState`.
//!
//! Lifecycle: **Falling** (active piece accepts move/rotate/drop) → on a
//! blocked downward step the **lock sequence** runs (merge → clear → score →
//! spawn) → back to Falling, or **GameOver** when the fresh spawn collides.

use crate::board::Board;
use crate::pieces::{base_shape, Shape, SPAWN_POSITION};
use crate::rng::{LcgRng, UniformSource};
use crate::scoring::line_reward;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use blockfall_types::{ColorId, GameAction, GameConfig, HardDropPolicy, PieceKind};

/// Active falling piece
///
/// Owns its rotated shape copy; the catalog is never mutated, so two live
/// pieces cannot alias each other's rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub color: ColorId,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece in base orientation at the spawn position
    pub fn spawn(kind: PieceKind, color: ColorId) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            color,
            shape: base_shape(kind),
            x,
            y,
        }
    }

    /// Check whether the piece collides at its current placement
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Check whether the piece rests on terrain or the floor
    pub fn is_grounded(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y + 1)
    }
}

/// Complete game state, generic over the random source
///
/// Gameplay uses the default [`LcgRng`]; tests inject a
/// [`ScriptedSource`](crate::rng::ScriptedSource) to replay fixed draws.
#[derive(Debug, Clone)]
pub struct GameState<R: UniformSource = LcgRng> {
    board: Board,
    active: Option<ActivePiece>,
    next_kind: PieceKind,
    next_color: ColorId,
    score: u32,
    game_over: bool,
    started: bool,
    config: GameConfig,
    rng: R,
}

impl GameState {
    /// Create a new game with the given RNG seed and default rules
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create a new game with the given RNG seed and rule configuration
    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        Self::with_source(LcgRng::new(seed), config)
    }
}

impl<R: UniformSource> GameState<R> {
    /// Create a new game over an injected random source
    ///
    /// The preview piece is drawn immediately (kind, then color), so the
    /// first two picks of the source belong to the initial preview.
    pub fn with_source(mut rng: R, config: GameConfig) -> Self {
        let next_kind = draw_kind(&mut rng);
        let next_color = draw_color(&mut rng);

        Self {
            board: Board::new(),
            active: None,
            next_kind,
            next_color,
            score: 0,
            game_over: false,
            started: false,
            config,
            rng,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn next_color(&self) -> ColorId {
        self.next_color
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (for tests setting up terrain)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Promote the preview into play and roll a fresh preview
    ///
    /// Draw order per spawn is fixed: kind, color, pre-rotation count.
    /// Pre-rotations reuse the player rotation path, so a blocked turn is
    /// skipped rather than forced. The terminal check runs last, against the
    /// piece's final orientation and the post-clear board.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next_kind, self.next_color);
        self.next_kind = draw_kind(&mut self.rng);
        self.next_color = draw_color(&mut self.rng);
        self.active = Some(piece);

        if self.config.spawn_prerotate {
            let turns = self.rng.next_below(4);
            for _ in 0..turns {
                self.try_rotate();
            }
        }

        if let Some(active) = self.active {
            if active.collides(&self.board) {
                self.game_over = true;
                return false;
            }
        }
        true
    }

    /// Try to shift the active piece; blocked moves are silent no-ops
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self
            .board
            .collides(&active.shape, active.x + dx, active.y + dy)
        {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Rotate the active piece in the configured direction
    ///
    /// The turned matrix keeps the same top-left anchor and there is no wall
    /// kick: a turn that would not fit is rejected outright.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let turned = active.shape.rotated(self.config.rotation);
        if self.board.collides(&turned, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: turned,
            ..active
        });
        true
    }

    /// One-step fall, or the lock sequence when the way down is blocked
    pub(crate) fn soft_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_active();
        true
    }

    /// Drop the active piece to its resting row
    ///
    /// Under [`HardDropPolicy::Rest`] the piece only repositions and locks on
    /// a later blocked drop; under [`HardDropPolicy::Lock`] the lock sequence
    /// runs immediately.
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rest = self.rest_y(&active);
        if rest != active.y {
            self.active = Some(ActivePiece { y: rest, ..active });
        }

        if self.config.hard_drop == HardDropPolicy::Lock {
            self.lock_active();
        }
        true
    }

    /// Exchange the active piece with the preview
    ///
    /// The preview is not re-rolled: the outgoing piece becomes the new
    /// preview (in base orientation) and the incoming one starts at the
    /// spawn position. Unlike a spawn there is no collision check.
    pub(crate) fn swap(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let incoming = ActivePiece::spawn(self.next_kind, self.next_color);
        self.next_kind = active.kind;
        self.next_color = active.color;
        self.active = Some(incoming);
        true
    }

    /// Merge the active piece, clear full rows, score, spawn the successor
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock(&active.shape, active.x, active.y, active.color);

        let cleared = self.board.clear_full_rows();
        self.score += line_reward(self.config.line_reward, cleared.len());

        self.spawn_piece();
    }

    /// Lowest non-colliding row for a piece at its current column
    fn rest_y(&self, piece: &ActivePiece) -> i8 {
        let mut y = piece.y;
        while !self.board.collides(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Row the active piece would rest on after a hard drop
    ///
    /// Pure query used for the ghost projection; shares the hard-drop
    /// simulation and commits nothing.
    pub fn ghost_y(&self) -> Option<i8> {
        self.active.as_ref().map(|piece| self.rest_y(piece))
    }

    /// Advance one step: the drop timer's soft drop
    pub fn tick(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }
        self.soft_drop()
    }

    /// Apply a game action; returns whether the state changed
    ///
    /// Invalid actions (blocked move or rotation) are expected and rejected
    /// silently. After game-over every action is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Swap => self.swap(),
        }
    }

    /// Fill a reusable snapshot buffer without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = Some(NextSnapshot::new(self.next_kind, self.next_color));
        out.score = self.score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

fn draw_kind<R: UniformSource>(rng: &mut R) -> PieceKind {
    PieceKind::from_index(rng.next_below(PieceKind::ALL.len() as u32) as u8)
        .unwrap_or(PieceKind::I)
}

fn draw_color<R: UniformSource>(rng: &mut R) -> ColorId {
    ColorId::from_index(rng.next_below(ColorId::ALL.len() as u32) as u8).unwrap_or(ColorId::Red)
}
