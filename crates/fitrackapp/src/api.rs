//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all fitrack operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the store** that every command is run against
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (records and summaries, never strings)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//! - **Login gating**: Sessions belong to the UI; the API trusts the ids it is given
//!
//! ## Generic Over DataStore
//!
//! `FitrackApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FitrackApi<FileStore>`
//! - Testing: `FitrackApi<InMemoryStore>`

use crate::commands::{self, doctor::DoctorReport, stats};
use crate::error::Result;
use crate::model::{Collection, Log, NewLog, NewUser, Plan, RecordId, User};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for fitrack operations.
pub struct FitrackApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> FitrackApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Users ---

    pub fn register_user(&mut self, input: NewUser) -> Result<User> {
        commands::users::register(&mut self.store, input)
    }

    pub fn find_user(&self, user_id: RecordId) -> Result<User> {
        commands::users::find_by_id(&self.store, user_id)
    }

    pub fn update_profile(&mut self, user_id: RecordId, height: f64, weight: f64) -> Result<User> {
        commands::users::update_profile(&mut self.store, user_id, height, weight)
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        commands::users::list(&self.store)
    }

    // --- Plans ---

    pub fn add_plan(&mut self, plan_type: String, description: String) -> Result<Plan> {
        commands::plans::add(&mut self.store, plan_type, description)
    }

    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        commands::plans::list(&self.store)
    }

    // --- Logs ---

    pub fn append_log(&mut self, input: NewLog) -> Result<Log> {
        commands::logs::append(&mut self.store, input)
    }

    pub fn list_logs(&self) -> Result<Vec<Log>> {
        commands::logs::list_all(&self.store)
    }

    pub fn list_logs_for_user(&self, user_id: RecordId) -> Result<Vec<Log>> {
        commands::logs::list_for_user(&self.store, user_id)
    }

    // --- Stats ---

    pub fn progress(&self, user_id: RecordId) -> Result<(Vec<Log>, stats::ProgressSummary)> {
        stats::progress(&self.store, user_id)
    }

    pub fn report(&self) -> Result<stats::HealthReport> {
        stats::report(&self.store)
    }

    // --- Maintenance ---

    pub fn init(&mut self) -> Result<Vec<Collection>> {
        commands::init::run(&mut self.store)
    }

    pub fn doctor(&self) -> Result<DoctorReport> {
        commands::doctor::run(&self.store)
    }

    pub fn location(&self, collection: Collection) -> PathBuf {
        self.store.location(collection)
    }
}
