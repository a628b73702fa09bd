//! Warning, error and confirmation messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow, on stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn usage_hint() {
    eprintln!("Try 'asciipass --help' for more information.");
}

pub fn fast_generator_notice() {
    warn("Note: the fast generator is not suitable for real credentials; use -g secure.");
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
