//! Game session module - the single-writer state machine for one play
//!
//! A session owns the board, the falling piece and the counters. The driver
//! feeds it clock readings (for gravity) and discrete commands (for movement),
//! then reads back a snapshot to draw. Nothing in here sleeps or performs I/O.
//!
//! Spawning, locking and line clearing all happen inside a single gravity
//! tick, so between calls a session is either falling or finished.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::pieces::ActivePiece;
use crate::rng::{PieceSource, UniformSource};
use crate::rotation::try_rotate_with;
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, EndReason, PieceKind, SessionReport};

/// Observable session state between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A piece is falling and commands are accepted
    Falling,
    /// A new piece collided at the spawn anchor
    GameOver,
    /// The player quit
    Quit,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Falling)
    }

    /// End reason for a terminal phase
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            Phase::Falling => None,
            Phase::GameOver => Some(EndReason::GameOver),
            Phase::Quit => Some(EndReason::Quit),
        }
    }
}

/// What happened when the last piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    /// The follow-up spawn collided
    pub game_over: bool,
}

/// One play, from the first spawn until game over or quit.
#[derive(Debug, Clone)]
pub struct GameSession<S = UniformSource> {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    player: String,
    score: u32,
    lines: u32,
    last_gravity_ms: u64,
    phase: Phase,
    /// Last lock event (consumed by the driver)
    last_event: Option<LockEvent>,
    reported: bool,
}

impl GameSession<UniformSource> {
    /// Start a session with the uniform randomizer seeded by `seed`.
    ///
    /// `now_ms` is the driver's monotonic clock reading; gravity counts from it.
    pub fn new(
        config: GameConfig,
        player: impl Into<String>,
        seed: u32,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_source(config, player, UniformSource::new(seed), now_ms)
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Start a session that draws its pieces from `source`.
    pub fn with_source(
        config: GameConfig,
        player: impl Into<String>,
        source: S,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            board: Board::new(config.board_width, config.board_height),
            config,
            active: None,
            source,
            player: player.into(),
            score: 0,
            lines: 0,
            last_gravity_ms: now_ms,
            phase: Phase::Falling,
            last_event: None,
            reported: false,
        };
        session.spawn_piece();
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Place a new random piece at the spawn anchor.
    ///
    /// If it collides there the session is over and the board is left as is.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.source.next_kind();
        let piece = ActivePiece::at(kind, self.config.spawn);

        if self.board.collides(&piece.mask, piece.x, piece.y) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Move the active piece if the target does not collide.
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if self.board.collides(&active.mask, active.x + dx, active.y + dy) {
            return false;
        }
        active.x += dx;
        active.y += dy;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        try_rotate_with(&self.board, active, &self.config.wall_kicks).is_some()
    }

    /// Lock the active piece, clear rows, score, and spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.mask, active.x, active.y);

        let lines_cleared = self.board.clear_completed_rows();
        let points = line_clear_score(lines_cleared, self.config.points_multiplier);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.score = self.score.saturating_add(points);

        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            points,
            game_over: !spawned,
        });
    }

    /// Advance gravity to the clock reading `now_ms`.
    ///
    /// Once a full fall interval has passed since the last gravity step the
    /// piece moves down one row, or locks if it cannot. Returns true if a
    /// gravity step happened. At most one step is taken per call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase.is_terminal() {
            return false;
        }

        if now_ms.saturating_sub(self.last_gravity_ms) < self.config.fall_interval_ms {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.last_gravity_ms = now_ms;
        true
    }

    /// Apply one player command. Returns true if it changed the session.
    ///
    /// Blocked moves and rotations are ignored. Nothing is accepted once the
    /// session is finished.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.phase.is_terminal() {
            return false;
        }

        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
            Command::Quit => {
                self.phase = Phase::Quit;
                true
            }
        }
    }

    /// Apply a batch of commands in arrival order; returns how many took effect.
    pub fn apply_commands<I>(&mut self, commands: I) -> usize
    where
        I: IntoIterator<Item = Command>,
    {
        commands
            .into_iter()
            .map(|command| self.apply(command))
            .filter(|&applied| applied)
            .count()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Final result of a finished session.
    ///
    /// Returns Some exactly once, after the session reaches game over or quit.
    pub fn take_report(&mut self) -> Option<SessionReport> {
        let reason = self.phase.end_reason()?;
        if self.reported {
            return None;
        }
        self.reported = true;
        Some(SessionReport {
            player: self.player.clone(),
            score: self.score,
            lines: self.lines,
            reason,
        })
    }

    /// Fill `out` with the current render state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.player.clear();
        out.player.push_str(&self.player);
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    const FALL: u64 = 500;

    fn session_with(kinds: &[PieceKind]) -> GameSession<ScriptedSource> {
        GameSession::with_source(
            GameConfig::default(),
            "tester",
            ScriptedSource::new(kinds.to_vec()),
            0,
        )
        .unwrap()
    }

    /// Tick gravity until the active piece locks; returns the event and the clock.
    fn drop_until_locked(
        session: &mut GameSession<ScriptedSource>,
        mut now: u64,
    ) -> (LockEvent, u64) {
        for _ in 0..64 {
            now += FALL;
            session.tick(now);
            if let Some(ev) = session.take_last_event() {
                return (ev, now);
            }
        }
        panic!("piece never locked");
    }

    fn fill_row_except(board: &mut Board, y: i32, gaps: &[i32]) {
        for x in 0..board.width() as i32 {
            if !gaps.contains(&x) {
                board.set(x, y, true);
            }
        }
    }

    #[test]
    fn test_new_session_spawns_at_anchor() {
        let s = session_with(&[PieceKind::T]);
        let active = s.active().unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(s.phase(), Phase::Falling);
        assert_eq!(s.score(), 0);
        assert_eq!(s.lines(), 0);
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let cfg = GameConfig::default().with_wall_kicks(Vec::new());
        let err = GameSession::new(cfg, "p", 1, 0).unwrap_err();
        assert_eq!(err, ConfigError::EmptyKickTable);
    }

    #[test]
    fn test_gravity_waits_for_full_interval() {
        let mut s = session_with(&[PieceKind::O]);
        assert!(!s.tick(FALL - 1));
        assert_eq!(s.active().unwrap().y, 0);

        assert!(s.tick(FALL));
        assert_eq!(s.active().unwrap().y, 1);

        // Timer restarted at FALL.
        assert!(!s.tick(2 * FALL - 1));
        assert!(s.tick(2 * FALL));
        assert_eq!(s.active().unwrap().y, 2);
    }

    #[test]
    fn test_one_gravity_step_per_tick() {
        let mut s = session_with(&[PieceKind::O]);
        assert!(s.tick(10 * FALL));
        assert_eq!(s.active().unwrap().y, 1);
    }

    #[test]
    fn test_moves_do_not_reset_gravity_timer() {
        let mut s = session_with(&[PieceKind::O]);
        s.tick(FALL - 100);
        assert!(s.apply(Command::MoveLeft));
        assert!(s.apply(Command::SoftDrop));
        assert!(s.tick(FALL));
        assert_eq!(s.active().unwrap().y, 2);
    }

    #[test]
    fn test_blocked_moves_are_ignored() {
        let mut s = session_with(&[PieceKind::O]);
        // O occupies mask columns 1-2: x can go down to -1.
        assert!(s.apply(Command::MoveLeft));
        assert!(s.apply(Command::MoveLeft));
        assert!(s.apply(Command::MoveLeft));
        assert!(s.apply(Command::MoveLeft));
        assert!(!s.apply(Command::MoveLeft));
        assert_eq!(s.active().unwrap().x, -1);
    }

    #[test]
    fn test_soft_drop_never_locks() {
        let mut s = session_with(&[PieceKind::O, PieceKind::T]);
        let mut moved = 0;
        while s.apply(Command::SoftDrop) {
            moved += 1;
        }
        assert_eq!(moved, 17);
        assert_eq!(s.active().unwrap().kind, PieceKind::O);
        assert_eq!(s.board().occupied_count(), 0);
        assert!(s.take_last_event().is_none());
    }

    #[test]
    fn test_rotate_uses_configured_kicks() {
        let mut s = session_with(&[PieceKind::I]);
        assert!(s.apply(Command::Rotate));
        // Vertical I lives in mask column 3.
        let cells: Vec<_> = s.active().unwrap().cells().collect();
        assert_eq!(cells, vec![(6, 0), (6, 1), (6, 2), (6, 3)]);
    }

    #[test]
    fn test_spawn_collision_is_game_over_without_touching_board() {
        let mut s = session_with(&[PieceKind::T]);
        for y in 0..20 {
            fill_row_except(s.board_mut(), y, &[0]);
        }
        let before = s.board().clone();

        assert!(!s.spawn_piece());
        assert_eq!(s.phase(), Phase::GameOver);
        assert!(s.active().is_none());
        assert_eq!(s.board(), &before);
    }

    #[test]
    fn test_four_lines_at_once_scores_1600() {
        let mut s = session_with(&[PieceKind::I, PieceKind::O]);
        for y in 16..20 {
            fill_row_except(s.board_mut(), y, &[6]);
        }
        assert!(s.apply(Command::Rotate));

        let (ev, _) = drop_until_locked(&mut s, 0);
        assert_eq!(ev.lines_cleared, 4);
        assert_eq!(ev.points, 1600);
        assert_eq!(s.score(), 1600);
        assert_eq!(s.lines(), 4);
        assert_eq!(s.board().occupied_count(), 0);
    }

    #[test]
    fn test_four_single_lines_score_400() {
        let mut s = session_with(&[PieceKind::O]);
        let mut now = 0;
        for _ in 0..4 {
            s.board_mut().clear();
            fill_row_except(s.board_mut(), 19, &[4, 5]);
            let (ev, t) = drop_until_locked(&mut s, now);
            now = t;
            assert_eq!(ev.lines_cleared, 1);
            assert_eq!(ev.points, 100);
        }
        assert_eq!(s.score(), 400);
        assert_eq!(s.lines(), 4);
    }

    #[test]
    fn test_quit_freezes_score_and_reports_once() {
        let mut s = session_with(&[PieceKind::O]);
        assert!(s.take_report().is_none());

        assert!(s.apply(Command::Quit));
        assert_eq!(s.phase(), Phase::Quit);
        assert!(!s.apply(Command::MoveLeft));
        assert!(!s.tick(100 * FALL));

        let report = s.take_report().unwrap();
        assert_eq!(report.player, "tester");
        assert_eq!(report.score, 0);
        assert_eq!(report.reason, EndReason::Quit);
        assert!(s.take_report().is_none());
    }

    #[test]
    fn test_batch_is_processed_in_order_and_stops_at_quit() {
        let mut s = session_with(&[PieceKind::O]);
        let applied = s.apply_commands([
            Command::MoveRight,
            Command::MoveRight,
            Command::Quit,
            Command::MoveRight,
        ]);
        assert_eq!(applied, 3);
        assert_eq!(s.active().unwrap().x, 5);
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut s = session_with(&[PieceKind::S]);
        s.board_mut().set(0, 19, true);
        let snap = s.snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert!(snap.occupied(0, 19));
        assert!(!snap.occupied(1, 19));
        assert_eq!(snap.active.unwrap().kind, PieceKind::S);
        assert_eq!(snap.active.unwrap().color, crate::pieces::piece_color(PieceKind::S));
        assert_eq!(snap.player, "tester");
        assert!(snap.playable());
    }
}
