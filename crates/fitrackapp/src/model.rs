use crate::error::{FitrackError, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecordId = u64;

/// The three independently persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Users,
    Plans,
    Logs,
}

impl Collection {
    pub fn all() -> &'static [Collection] {
        &[Collection::Users, Collection::Plans, Collection::Logs]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Plans => "plans",
            Collection::Logs => "logs",
        }
    }

    /// File name used by the filesystem backend.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type stored as one element of a [`Collection`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: RecordId,
    pub name: String,
    pub age: i64,
    pub height: f64,
    pub weight: f64,
    pub contact: String,
}

/// Registration input; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub height: f64,
    pub weight: f64,
    pub contact: String,
}

impl User {
    pub fn new(user_id: RecordId, input: NewUser) -> Result<Self> {
        require_text("name", &input.name)?;
        require_finite("height", input.height)?;
        require_finite("weight", input.weight)?;
        Ok(Self {
            user_id,
            name: input.name,
            age: input.age,
            height: input.height,
            weight: input.weight,
            contact: input.contact,
        })
    }

    /// Profile update: the only mutation a user record supports.
    pub fn set_measurements(&mut self, height: f64, weight: f64) -> Result<()> {
        require_finite("height", height)?;
        require_finite("weight", weight)?;
        self.height = height;
        self.weight = weight;
        Ok(())
    }
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> RecordId {
        self.user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_id: RecordId,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub description: String,
}

impl Plan {
    pub fn new(plan_id: RecordId, plan_type: String, description: String) -> Result<Self> {
        require_text("type", &plan_type)?;
        Ok(Self {
            plan_id,
            plan_type,
            description,
        })
    }
}

impl Record for Plan {
    const COLLECTION: Collection = Collection::Plans;

    fn id(&self) -> RecordId {
        self.plan_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub log_id: RecordId,
    pub user_id: RecordId,
    pub date: NaiveDate,
    pub steps: i64,
    pub calories_burned: i64,
    pub calories_consumed: i64,
    pub exercise_time: f64,
}

/// One day's activity as entered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLog {
    pub user_id: RecordId,
    pub steps: i64,
    pub calories_burned: i64,
    pub calories_consumed: i64,
    /// Minutes.
    pub exercise_time: f64,
    pub date: NaiveDate,
}

impl Log {
    pub fn new(log_id: RecordId, input: NewLog) -> Result<Self> {
        require_finite("exercise_time", input.exercise_time)?;
        Ok(Self {
            log_id,
            user_id: input.user_id,
            date: input.date,
            steps: input.steps,
            calories_burned: input.calories_burned,
            calories_consumed: input.calories_consumed,
            exercise_time: input.exercise_time,
        })
    }
}

impl Record for Log {
    const COLLECTION: Collection = Collection::Logs;

    fn id(&self) -> RecordId {
        self.log_id
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FitrackError::InvalidInput(format!("{} cannot be empty", field)));
    }
    Ok(())
}

// NaN and infinities have no JSON representation and would not load back.
fn require_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FitrackError::InvalidInput(format!(
            "{} must be a finite number",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            age: 30,
            height: 1.65,
            weight: 60.0,
            contact: "x".to_string(),
        }
    }

    #[test]
    fn test_user_rejects_blank_name() {
        let input = NewUser {
            name: "   ".to_string(),
            ..ana()
        };
        assert!(matches!(
            User::new(1, input),
            Err(FitrackError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_user_rejects_nan_height() {
        let input = NewUser {
            height: f64::NAN,
            ..ana()
        };
        assert!(User::new(1, input).is_err());
    }

    #[test]
    fn test_plan_type_serializes_as_type() {
        let plan = Plan::new(1, "Diet".to_string(), "Low carb".to_string()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["type"], "Diet");
        assert_eq!(json["plan_id"], 1);
        assert!(json.get("plan_type").is_none());
    }

    #[test]
    fn test_log_date_is_iso_formatted() {
        let log = Log::new(
            1,
            NewLog {
                user_id: 1,
                steps: 1000,
                calories_burned: 200,
                calories_consumed: 1800,
                exercise_time: 30.5,
                date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            },
        )
        .unwrap();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["date"], "2024-03-09");
    }

    #[test]
    fn test_reads_record_written_by_legacy_tool() {
        let raw = r#"{
            "user_id": 7, "name": "Ana", "age": 30,
            "height": 1.65, "weight": 60.0, "contact": "x"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id(), 7);
        assert_eq!(user.weight, 60.0);
    }

    #[test]
    fn test_collection_file_names() {
        assert_eq!(Collection::Users.file_name(), "users.json");
        assert_eq!(Collection::Plans.file_name(), "plans.json");
        assert_eq!(Collection::Logs.file_name(), "logs.json");
    }
}
