//! Line-based account menu shown before the terminal switches to raw mode.

use std::io::{BufRead, Write};

use anyhow::Result;

use blockfall::store::{AccountStore, ScoreRecord, ScoreStore, StoreError};

pub const TOP_SCORES: usize = 10;

#[derive(Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Logged in as this user
    Play(String),
    Exit,
}

/// Run the menu until the user logs in or leaves. End of input means leave.
pub fn run<R: BufRead, W: Write>(
    accounts: &AccountStore,
    scores: &ScoreStore,
    input: &mut R,
    out: &mut W,
) -> Result<MenuOutcome> {
    loop {
        writeln!(out)?;
        writeln!(out, "== BLOCKFALL ==")?;
        writeln!(out, "  1. Log in")?;
        writeln!(out, "  2. Register")?;
        writeln!(out, "  3. Top {TOP_SCORES} scores")?;
        writeln!(out, "  4. Quit")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(MenuOutcome::Exit);
        };

        match choice.as_str() {
            "1" => {
                let Some((user, password)) = credentials(input, out)? else {
                    return Ok(MenuOutcome::Exit);
                };
                match accounts.login(&user, &password) {
                    Ok(true) => {
                        log::info!("{} logged in", user);
                        writeln!(out, "Welcome, {user}!")?;
                        return Ok(MenuOutcome::Play(user));
                    }
                    Ok(false) => writeln!(out, "Wrong username or password.")?,
                    Err(e) => {
                        log::warn!("login failed: {}", e);
                        writeln!(out, "Could not read accounts: {e}")?;
                    }
                }
            }
            "2" => {
                let Some((user, password)) = credentials(input, out)? else {
                    return Ok(MenuOutcome::Exit);
                };
                match accounts.register(&user, &password) {
                    Ok(()) => writeln!(out, "User '{user}' registered. You can log in now.")?,
                    Err(e @ (StoreError::UserExists(_) | StoreError::EmptyCredentials)) => {
                        writeln!(out, "{e}.")?
                    }
                    Err(e) => {
                        log::warn!("registration failed: {}", e);
                        writeln!(out, "Could not save account: {e}")?;
                    }
                }
            }
            "3" => match scores.top(TOP_SCORES) {
                Ok(top) => print_scores(out, &top)?,
                Err(e) => {
                    log::warn!("reading scores failed: {}", e);
                    writeln!(out, "Could not read scores: {e}")?;
                }
            },
            "4" | "q" => return Ok(MenuOutcome::Exit),
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

/// Ask `question` and read one trimmed line; None at end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn credentials<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<(String, String)>> {
    let Some(user) = prompt(input, out, "Username: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt(input, out, "Password: ")? else {
        return Ok(None);
    };
    Ok(Some((user, password)))
}

pub fn print_scores<W: Write>(out: &mut W, scores: &[ScoreRecord]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<4} {:<15} {:>8} {:>6}  {}", "#", "Player", "Score", "Lines", "Date")?;
    writeln!(out, "{}", "-".repeat(56))?;
    if scores.is_empty() {
        writeln!(out, "No scores yet.")?;
    }
    for (rank, r) in scores.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<15} {:>8} {:>6}  {}",
            rank + 1,
            r.player,
            r.score,
            r.lines,
            r.timestamp
        )?;
    }
    Ok(())
}
