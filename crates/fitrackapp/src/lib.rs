//! # Fitrack Architecture
//!
//! Fitrack is a **UI-agnostic health and fitness record keeper**. An
//! administrator defines fitness plans, individuals register and log daily
//! activity, and simple averages are computed over the logs. The terminal
//! client is one consumer of this library, not the application itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/fitrack)                                       │
//! │  - Parses arguments, login gating, tables, exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the injected store       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Users, plans, logs, stats: load → compute → save         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore {load, save} over a StorageBackend             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result` values, and never writes to stdout/stderr or reads the clock.
//! Log dates are supplied by the caller.
//!
//! ## Data Model
//!
//! Three flat collections keyed by auto-incrementing integer ids (see
//! [`model`]). There is no referential integrity: a log may name a user that
//! does not exist. [`commands::doctor`] reports such logs but nothing rejects them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each record family
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Record types (`User`, `Plan`, `Log`) and `Collection`
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
mod test_utils;
