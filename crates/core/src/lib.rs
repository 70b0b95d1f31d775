//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board model, the piece catalog, the rotation engine
//! and the session state machine. It has **no dependencies** on terminals,
//! files or clocks, which makes it:
//!
//! - **Deterministic**: the same seed and the same inputs replay the same game
//! - **Testable**: every rule can be exercised without a front end
//! - **Portable**: any driver that can read a clock and deliver commands works
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid with collision detection and line clearing
//! - [`pieces`]: the seven 4x4 shapes, their colors and the falling piece
//! - [`rotation`]: clockwise rotation with an ordered wall-kick search
//! - [`session`]: the game session state machine (gravity, input, scoring)
//! - [`config`]: startup configuration and its validation
//! - [`rng`]: uniform independent piece selection
//! - [`scoring`]: quadratic line-clear scoring
//! - [`snapshot`]: render-ready copy of a session
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameSession, Phase};
//! use blockfall_types::Command;
//!
//! let mut session = GameSession::new(GameConfig::default(), "alice", 12345, 0).unwrap();
//!
//! session.apply(Command::MoveRight);
//! session.apply(Command::Rotate);
//! session.tick(500); // one gravity step
//!
//! session.apply(Command::Quit);
//! assert_eq!(session.phase(), Phase::Quit);
//!
//! let report = session.take_report().unwrap();
//! assert_eq!(report.player, "alice");
//! assert!(session.take_report().is_none());
//! ```

pub mod board;
pub mod config;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use pieces::{canonical_mask, piece_color, ActivePiece, Mask, LOCKED_COLOR};
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use rotation::{rotate_clockwise, try_rotate, try_rotate_with};
pub use scoring::line_clear_score;
pub use session::{GameSession, LockEvent, Phase};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
