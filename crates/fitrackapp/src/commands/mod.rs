//! # Command Layer
//!
//! This module contains the **core business logic** of fitrack. Each record
//! family lives in its own submodule as plain functions generic over
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Every operation is a single load → compute → optional save:
//! - Load the whole collection from the injected store
//! - Shape input into a record (assigning the next id) or filter/aggregate
//! - Save the whole collection back when something changed
//! - Return typed records or summaries
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing** or login gating: That's the CLI layer's job
//! - **Clock reads**: dates are passed in by the caller
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the `StoreFixture` builder, and inspect raw stored
//! bytes where an operation must not write.
//!
//! ## Command Modules
//!
//! - [`users`]: Register, look up, update profile, list
//! - [`plans`]: Add and list fitness plans
//! - [`logs`]: Append daily activity, list all or per user
//! - [`stats`]: Means, per-user progress, global health report
//! - [`init`]: Create empty collections
//! - [`doctor`]: Read-only consistency report
//! - [`helpers`]: Identifier allocation and lookup

pub mod doctor;
pub mod helpers;
pub mod init;
pub mod logs;
pub mod plans;
pub mod stats;
pub mod users;
