//! Terminal blockfall runner (default binary).
//!
//! Accounts and the score table are handled on plain stdin/stdout. Gameplay
//! runs in raw mode on the alternate screen with a framebuffer renderer.

mod cli;
mod logging;
mod menu;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameConfig, GameSession, GameSnapshot};
use blockfall::input::{command_for_key, RepeatGate};
use blockfall::store::{AccountStore, ScoreStore};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{SessionReport, FRAME_MS};

use cli::Args;
use menu::MenuOutcome;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = logging::init(&args.data_dir, args.log_level)?;
    log::info!("logging to {}", log_path.display());

    let config = args.game_config();
    config.validate().context("Invalid game configuration")?;

    let scores = ScoreStore::in_dir(&args.data_dir);
    let accounts = AccountStore::in_dir(&args.data_dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Some(n) = args.top {
        let top = scores.top(n).context("Failed to read scores")?;
        menu::print_scores(&mut out, &top)?;
        return Ok(());
    }

    let player = match args.user.clone() {
        Some(user) => user,
        None => match menu::run(&accounts, &scores, &mut input, &mut out)? {
            MenuOutcome::Play(user) => user,
            MenuOutcome::Exit => return Ok(()),
        },
    };

    loop {
        let seed = args.seed.unwrap_or_else(rand::random);
        let report = play(&config, &player, seed)?;

        writeln!(out)?;
        writeln!(out, "== {} ==", report.reason.as_str().replace('_', " ").to_uppercase())?;
        writeln!(out, "Player: {}", report.player)?;
        writeln!(out, "Score:  {}", report.score)?;
        writeln!(out, "Lines:  {}", report.lines)?;

        match scores.record(&report) {
            Ok(_) => writeln!(out, "Score saved.")?,
            Err(e) => {
                log::warn!("could not save score for {}: {}", report.player, e);
                writeln!(out, "Could not save score: {e}")?;
            }
        }

        match scores.top(menu::TOP_SCORES) {
            Ok(top) => menu::print_scores(&mut out, &top)?,
            Err(e) => log::warn!("could not read scores: {}", e),
        }

        let again = menu::prompt(&mut input, &mut out, "\nPlay again? [y/N] ")?;
        if !matches!(again.as_deref(), Some("y" | "Y" | "yes")) {
            break;
        }
    }

    Ok(())
}

/// Play one session in raw mode and return its report.
fn play(config: &GameConfig, player: &str, seed: u32) -> Result<SessionReport> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, player, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    player: &str,
    seed: u32,
) -> Result<SessionReport> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut session = GameSession::new(config.clone(), player, seed, now_ms())?;
    log::info!("session started for {} with seed {}", player, seed);

    let view = GameView::default();
    let mut gate = repeat_gate(config);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let frame_start = Instant::now();

        // Drain every pending event without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(command) = command_for_key(key) {
                        gate.push(command, now_ms());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        session.apply_commands(gate.drain());
        session.tick(now_ms());

        if let Some(ev) = session.take_last_event() {
            if ev.lines_cleared > 0 {
                log::debug!(
                    "{} cleared {} line(s) for {} points, total {}",
                    ev.kind.letter(),
                    ev.lines_cleared,
                    ev.points,
                    session.score()
                );
            }
        }

        if let Some(report) = session.take_report() {
            log::info!(
                "session ended ({}) for {}: score {} lines {}",
                report.reason.as_str(),
                report.player,
                report.score,
                report.lines
            );
            session.snapshot_into(&mut snap);
            render(term, &view, &snap, &mut fb)?;
            // Leave the final board up briefly.
            std::thread::sleep(Duration::from_millis(800));
            return Ok(report);
        }

        session.snapshot_into(&mut snap);
        render(term, &view, &snap, &mut fb)?;

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

/// Input gate using the configured repeat delays.
fn repeat_gate(config: &GameConfig) -> RepeatGate {
    RepeatGate::with_delays(config.move_delay_ms, config.rotate_delay_ms)
}

fn render(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
