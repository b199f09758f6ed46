//! Submission and username sanitization
//!
//! Produces display-safe, normalized strings. Every function here is pure
//! and total: no failure mode, no I/O.

/// Literal prefix marking an operator announcement.
pub const ANNOUNCEMENT_MARKER: &str = "x00";

/// Normalize a raw submission for display and logging.
///
/// Steps, in order: strip one leading announcement marker, replace the
/// first comma with a decimal point, drop currency symbols, neutralize
/// markup characters.
///
/// Only the first comma is replaced, so numbers with multiple grouping
/// commas ("1,000,000") are mishandled. Known limitation, kept for
/// compatibility with existing history logs.
pub fn clean_message(raw: &str) -> String {
    let msg = raw.strip_prefix(ANNOUNCEMENT_MARKER).unwrap_or(raw);
    let msg = msg.replacen(',', ".", 1);
    let msg = msg.replace('$', "");
    escape_markup(&msg)
}

/// Normalize a display name. Only markup neutralization applies.
pub fn clean_username(raw: &str) -> String {
    escape_markup(raw)
}

/// Replace `<` and `>` so a payload can never inject markup into a
/// rendering surface.
fn escape_markup(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
