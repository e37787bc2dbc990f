//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests drive every rule through the public API
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick and snapshot processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: Complete game state including active piece and scoring
//! - [`pieces`]: Immutable shape catalog and pure matrix rotation
//! - [`rng`]: Injectable uniform random source with an LCG default
//! - [`scoring`]: Line-clear rewards under the configured policy
//! - [`snapshot`]: Plain-data view of the state for renderers
//!
//! # Game Rules
//!
//! The rules are deliberately classic and kick-free:
//!
//! - **Uniform Randomizer**: Kind and color are independent uniform draws
//! - **Anchor Rotation**: The matrix turns in place around its top-left
//!   anchor; a turn that does not fit is rejected, there are no wall kicks
//! - **Immediate Lock**: A blocked downward step locks at once, no lock delay
//! - **Spawn Pre-Rotation**: New pieces may arrive pre-turned 0 to 3 times
//! - **Swap**: Exchange the active piece with the preview at any time; the
//!   preview is not re-rolled
//! - **Ghost Piece**: Projects where the current piece would land
//! - **Scoring**: 100 points per cleared row by default
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::GameAction;
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Inspect the result
//! let snapshot = game.snapshot();
//! assert!(snapshot.active.is_some());
//! assert!(!snapshot.game_over);
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. Each [`GameState::tick`] call is one
//! gravity step (a soft drop); the embedding shell decides the pace, with
//! [`types::TICK_MS`] as the default interval.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{base_shape, Shape, SPAWN_POSITION};
pub use rng::{LcgRng, ScriptedSource, UniformSource};
pub use scoring::line_reward;
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
