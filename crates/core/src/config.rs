//! Startup configuration for a game session.
//!
//! A [`GameConfig`] is fixed for the lifetime of a session. Sessions refuse to
//! start with a configuration that fails [`GameConfig::validate`].

use std::fmt;

use crate::board::Board;
use crate::pieces::canonical_mask;
use crate::types::{
    PieceKind, BOARD_HEIGHT, BOARD_WIDTH, FALL_DELAY_MS, MOVE_DELAY_MS, POINTS_MULTIPLIER,
    ROTATE_DELAY_MS, SPAWN_POSITION, WALL_KICKS,
};

/// Smallest board edge that still fits a 4x4 mask
pub const MIN_BOARD_EDGE: usize = 4;

/// Largest board edge accepted
pub const MAX_BOARD_EDGE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Gravity interval in milliseconds
    pub fall_interval_ms: u64,
    /// Repeat delay the driver applies to move and soft-drop commands
    pub move_delay_ms: u64,
    /// Repeat delay the driver applies to rotate commands
    pub rotate_delay_ms: u64,
    /// Anchor (column, row) of every new piece
    pub spawn: (i32, i32),
    pub points_multiplier: u32,
    /// Offsets tried, in order, after an in-place rotation collides
    pub wall_kicks: Vec<(i32, i32)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            fall_interval_ms: FALL_DELAY_MS,
            move_delay_ms: MOVE_DELAY_MS,
            rotate_delay_ms: ROTATE_DELAY_MS,
            spawn: SPAWN_POSITION,
            points_multiplier: POINTS_MULTIPLIER,
            wall_kicks: WALL_KICKS.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_fall_interval_ms(mut self, ms: u64) -> Self {
        self.fall_interval_ms = ms;
        self
    }

    /// Repeat delays for held move/soft-drop and rotate keys
    pub fn with_repeat_delays(mut self, move_ms: u64, rotate_ms: u64) -> Self {
        self.move_delay_ms = move_ms;
        self.rotate_delay_ms = rotate_ms;
        self
    }

    pub fn with_spawn(mut self, x: i32, y: i32) -> Self {
        self.spawn = (x, y);
        self
    }

    pub fn with_points_multiplier(mut self, multiplier: u32) -> Self {
        self.points_multiplier = multiplier;
        self
    }

    pub fn with_wall_kicks(mut self, kicks: impl Into<Vec<(i32, i32)>>) -> Self {
        self.wall_kicks = kicks.into();
        self
    }

    /// Check that a session could run with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = MIN_BOARD_EDGE..=MAX_BOARD_EDGE;
        if !edges.contains(&self.board_width) || !edges.contains(&self.board_height) {
            return Err(ConfigError::BoardSize {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.points_multiplier == 0 {
            return Err(ConfigError::ZeroMultiplier);
        }
        if self.wall_kicks.is_empty() {
            return Err(ConfigError::EmptyKickTable);
        }

        // Every kind must fit at the spawn anchor of an empty board.
        let empty = Board::new(self.board_width, self.board_height);
        let (x, y) = self.spawn;
        if let Some(kind) = PieceKind::ALL
            .into_iter()
            .find(|&kind| empty.collides(&canonical_mask(kind), x, y))
        {
            return Err(ConfigError::SpawnOutOfBounds { kind, x, y });
        }

        Ok(())
    }
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardSize { width: usize, height: usize },
    ZeroFallInterval,
    ZeroMultiplier,
    EmptyKickTable,
    SpawnOutOfBounds { kind: PieceKind, x: i32, y: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize { width, height } => write!(
                f,
                "board size {width}x{height} is outside {MIN_BOARD_EDGE}..={MAX_BOARD_EDGE} per edge"
            ),
            ConfigError::ZeroFallInterval => f.write_str("fall interval must be non-zero"),
            ConfigError::ZeroMultiplier => f.write_str("points multiplier must be non-zero"),
            ConfigError::EmptyKickTable => f.write_str("wall kick table is empty"),
            ConfigError::SpawnOutOfBounds { kind, x, y } => write!(
                f,
                "piece {} does not fit at spawn anchor ({x}, {y})",
                kind.letter()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
