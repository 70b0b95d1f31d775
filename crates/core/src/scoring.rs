//! Scoring module - quadratic line-clear scoring
//!
//! A lock that clears `n` rows at once awards `n² × multiplier` points, so a
//! four-row clear (1600 at the reference multiplier) is worth four times as much
//! as four single clears (400). Drops award nothing.

/// Points for clearing `lines` rows in one lock event
pub fn line_clear_score(lines: u32, multiplier: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(multiplier)
}
