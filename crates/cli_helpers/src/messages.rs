//! Colored messages printed to stderr.
//!
//! Standard output is reserved for generated phrases so
//! status messages never mix with them.
use colored::Colorize;

const TICK: &str = "✓";
const ERROR: &str = "Error:";
const WARN: &str = "Warning:";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    let out = format!("{} {}", msg.as_ref().green(), TICK.green());
    eprintln!("{}", out);
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().cyan());
}

/// Print a warning message.
pub fn warn(msg: impl AsRef<str>) {
    let out = format!("{} {}", WARN.yellow(), msg.as_ref());
    eprintln!("{}", out);
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    eprintln!("{}", out);
}
