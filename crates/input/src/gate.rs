//! Repeat gate for held keys.
//!
//! Terminals deliver auto-repeat as a stream of key presses. The gate accepts a
//! command only when enough time has passed since the last accepted command of
//! the same class, so a held key moves the piece at a steady rate instead of
//! once per frame. Quit always passes.

use arrayvec::ArrayVec;

use crate::types::{Command, MOVE_DELAY_MS, ROTATE_DELAY_MS};

/// Commands accepted during one driver iteration, in arrival order.
pub type CommandBatch = ArrayVec<Command, 16>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatClass {
    Move,
    Rotate,
    Unlimited,
}

fn class_of(command: Command) -> RepeatClass {
    match command {
        Command::MoveLeft | Command::MoveRight | Command::SoftDrop => RepeatClass::Move,
        Command::Rotate => RepeatClass::Rotate,
        Command::Quit => RepeatClass::Unlimited,
    }
}

#[derive(Debug, Clone)]
pub struct RepeatGate {
    move_delay_ms: u64,
    rotate_delay_ms: u64,
    last_move_ms: Option<u64>,
    last_rotate_ms: Option<u64>,
    batch: CommandBatch,
}

impl RepeatGate {
    pub fn new() -> Self {
        Self::with_delays(MOVE_DELAY_MS, ROTATE_DELAY_MS)
    }

    pub fn with_delays(move_delay_ms: u64, rotate_delay_ms: u64) -> Self {
        Self {
            move_delay_ms,
            rotate_delay_ms,
            last_move_ms: None,
            last_rotate_ms: None,
            batch: CommandBatch::new(),
        }
    }

    /// Decide whether `command` arriving at `now_ms` should reach the session.
    pub fn admit(&mut self, command: Command, now_ms: u64) -> bool {
        let (last, delay) = match class_of(command) {
            RepeatClass::Move => (&mut self.last_move_ms, self.move_delay_ms),
            RepeatClass::Rotate => (&mut self.last_rotate_ms, self.rotate_delay_ms),
            RepeatClass::Unlimited => return true,
        };

        match *last {
            Some(t) if now_ms.saturating_sub(t) < delay => false,
            _ => {
                *last = Some(now_ms);
                true
            }
        }
    }

    /// Admit `command` into the pending batch. A full batch drops the command
    /// without touching its repeat window, except Quit, which replaces the
    /// last entry.
    pub fn push(&mut self, command: Command, now_ms: u64) {
        if self.batch.is_full() && command != Command::Quit {
            return;
        }
        if !self.admit(command, now_ms) {
            return;
        }
        if self.batch.is_full() {
            self.batch.pop();
        }
        self.batch.push(command);
    }

    /// Hand over the commands gathered since the last call.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.batch.drain(..)
    }

    /// Forget repeat history, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.last_move_ms = None;
        self.last_rotate_ms = None;
        self.batch.clear();
    }
}

impl Default for RepeatGate {
    fn default() -> Self {
        Self::new()
    }
}
