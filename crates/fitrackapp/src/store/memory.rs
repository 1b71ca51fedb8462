use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }

    /// Access the backend to inspect raw bytes or inject failures.
    pub fn backend(&self) -> &MemBackend {
        &self.backend
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Log, Plan, User};
    use crate::store::DataStore;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_users(mut self, names: &[&str]) -> Self {
            let mut users: Vec<User> = self.store.load().unwrap();
            for name in names {
                let id = users.len() as u64 + 1;
                users.push(User {
                    user_id: id,
                    name: name.to_string(),
                    age: 30,
                    height: 1.70,
                    weight: 70.0,
                    contact: format!("{}@example.com", name.to_lowercase()),
                });
            }
            self.store.save(&users).unwrap();
            self
        }

        pub fn with_plans(mut self, count: usize) -> Self {
            let mut plans: Vec<Plan> = self.store.load().unwrap();
            for i in 0..count {
                let id = plans.len() as u64 + 1;
                plans.push(Plan {
                    plan_id: id,
                    plan_type: if i % 2 == 0 { "Workout" } else { "Diet" }.to_string(),
                    description: format!("Plan {}", id),
                });
            }
            self.store.save(&plans).unwrap();
            self
        }

        /// Append a log for `user_id`; `(steps, burned, consumed)` per entry.
        pub fn with_logs(mut self, user_id: u64, entries: &[(i64, i64, i64)]) -> Self {
            let mut logs: Vec<Log> = self.store.load().unwrap();
            for (steps, burned, consumed) in entries {
                let id = logs.len() as u64 + 1;
                logs.push(Log {
                    log_id: id,
                    user_id,
                    date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    steps: *steps,
                    calories_burned: *burned,
                    calories_consumed: *consumed,
                    exercise_time: 30.0,
                });
            }
            self.store.save(&logs).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
