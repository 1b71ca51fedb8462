//! # CLI Layer
//!
//! This module is **one possible UI client** for fitrack.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Applies the login gates
//! - Formats output for human consumption
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, logging, dispatch and per-command handlers
//! - `auth`: The admin login placeholder
//! - `render`: Grid tables, summaries and colored messages

mod auth;
mod commands;
mod render;
pub mod setup;

pub use commands::run;
