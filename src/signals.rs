//! Interrupt handling for the interactive shell
//!
//! The shell spends nearly all of its time blocked on a stdin read, so
//! signals are handled on a dedicated thread rather than polled from the
//! loop. SIGINT ends the session politely with status 0; SIGTERM and SIGHUP
//! exit with the conventional `128 + signal` status.

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::io::Write;
use std::thread;

use crate::ui;

/// Exit status for a received signal
pub fn exit_code_for(signal: i32) -> i32 {
    match signal {
        SIGINT => 0,
        other => 128 + other,
    }
}

/// Printable name for the signals we listen to
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        SIGHUP => "SIGHUP",
        _ => "UNKNOWN",
    }
}

/// Initialize global signal handlers for graceful shutdown
/// Handles SIGINT (Ctrl+C), SIGTERM, and SIGHUP
/// Call this once at program start
pub fn init_signal_handlers() -> Result<(), std::io::Error> {
    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP])?;

    thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            tracing::info!("Received {} signal, exiting", signal_name(sig));

            if sig == SIGINT {
                // stdout is never held locked by the shell, so this cannot
                // deadlock against the blocked reader
                let mut out = std::io::stdout();
                let _ = writeln!(out, "{}", ui::INTERRUPTED);
                let _ = out.flush();
            }

            std::process::exit(exit_code_for(sig));
        }
    });

    Ok(())
}
