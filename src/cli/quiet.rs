//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a tty (interactive)
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// True when quiet mode is enabled or stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
