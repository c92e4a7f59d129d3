//! # Habitz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::commands::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions
//! - `cli/commands.rs`: logging, context wiring (data dir, config, store), dispatch
//! - `cli/print.rs`: terminal rendering of `CmdResult`s
//!
//! Everything from the library's `api.rs` inward is UI agnostic; this layer
//! owns all user-facing concerns, including the system clock.

mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
