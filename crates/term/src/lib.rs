//! Terminal rendering for blockfall.
//!
//! Frames are composed into a plain framebuffer by [`GameView`] and flushed
//! by [`TerminalRenderer`], which only writes the cells that changed.
//!
//! - Keeps `core` free of terminal concerns
//! - Lets the view be tested without a terminal
//! - Draws each board cell 2 columns wide so blocks look square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
