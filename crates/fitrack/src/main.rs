//! # Fitrack CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! The CLI takes the place of the portal's interactive menus. Each menu item
//! is a subcommand and each invocation is one session:
//!
//! ```text
//! fitrack register --name Ana --age 30 --height 1.65 --weight 60 --contact x
//! fitrack login 1
//! fitrack user 1 log --steps 1000 --burned 200 --consumed 1800 --minutes 30
//! fitrack user 1 progress
//! fitrack admin --id admin --password admin123 report
//! ```
//!
//! Everything from the `fitrackapp` API inward is UI agnostic. The CLI layer
//! is responsible for **all** user-facing concerns: argument parsing, login
//! gating, logging setup, rendering and exit codes.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
