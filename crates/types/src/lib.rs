//! Shared data types and reference constants.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! simulation core, the terminal front end and the score store alike.
//!
//! # Reference values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns |
//! | `BOARD_HEIGHT` | 20 | Rows |
//! | `FALL_DELAY_MS` | 500 | Gravity interval |
//! | `MOVE_DELAY_MS` | 100 | Repeat delay for move / soft drop |
//! | `ROTATE_DELAY_MS` | 150 | Repeat delay for rotate |
//! | `FRAME_MS` | 16 | Driver loop period (~60 FPS) |
//! | `POINTS_MULTIPLIER` | 100 | Score per cleared line, squared |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval in milliseconds
pub const FALL_DELAY_MS: u64 = 500;

/// Minimum time between two accepted move or soft-drop commands
pub const MOVE_DELAY_MS: u64 = 100;

/// Minimum time between two accepted rotate commands
pub const ROTATE_DELAY_MS: u64 = 150;

/// Driver loop period in milliseconds
pub const FRAME_MS: u64 = 16;

/// Spawn anchor (column, row) of a new piece's 4x4 mask
pub const SPAWN_POSITION: (i32, i32) = (3, 0);

/// Points for clearing `n` lines at once are `n * n * POINTS_MULTIPLIER`
pub const POINTS_MULTIPLIER: u32 = 100;

/// Wall kick offsets `(dx, dy)` tried in order after an in-place rotation fails.
///
/// `dy` grows downward, so `-1` is one row up. The two-column kicks at the end
/// let the I piece rotate next to a wall.
pub const WALL_KICKS: [(i32, i32); 7] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-2, 0),
    (2, 0),
];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Upper-case letter used in the side panel and logs
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Discrete player commands fed to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, with wall kicks
    Rotate,
    /// End the session, keeping the current score
    Quit,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("softDrop"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Quit => "quit",
        }
    }
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A freshly spawned piece collided at the spawn anchor
    GameOver,
    /// The player quit mid-game
    Quit,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::GameOver => "game_over",
            EndReason::Quit => "quit",
        }
    }
}

/// Terminal result of one session, handed to the score store exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub player: String,
    pub score: u32,
    pub lines: u32,
    pub reason: EndReason,
}
