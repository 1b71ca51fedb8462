//! Aggregate statistics over activity logs.
//!
//! Every statistic is an arithmetic mean, and a mean over nothing is an
//! error ([`FitrackError::EmptyInput`]) rather than `0.0` or `NaN`. UIs are
//! expected to check for an empty log list first and say so.

use crate::commands::logs;
use crate::error::{FitrackError, Result};
use crate::model::{Log, RecordId};
use crate::store::DataStore;
use serde::Serialize;

/// Per-user progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub mean_steps: f64,
    pub mean_calories_burned: f64,
}

/// Averages across every log in the system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub mean_steps: f64,
    pub mean_calories_burned: f64,
    pub mean_calories_consumed: f64,
}

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(FitrackError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

fn mean_of(logs: &[Log], field: impl Fn(&Log) -> f64) -> Result<f64> {
    let values: Vec<f64> = logs.iter().map(field).collect();
    mean(&values)
}

pub fn summarize_logs(logs: &[Log]) -> Result<ProgressSummary> {
    Ok(ProgressSummary {
        mean_steps: mean_of(logs, |l| l.steps as f64)?,
        mean_calories_burned: mean_of(logs, |l| l.calories_burned as f64)?,
    })
}

pub fn global_report(logs: &[Log]) -> Result<HealthReport> {
    Ok(HealthReport {
        mean_steps: mean_of(logs, |l| l.steps as f64)?,
        mean_calories_burned: mean_of(logs, |l| l.calories_burned as f64)?,
        mean_calories_consumed: mean_of(logs, |l| l.calories_consumed as f64)?,
    })
}

/// A user's logs together with their summary.
pub fn progress<S: DataStore>(
    store: &S,
    user_id: RecordId,
) -> Result<(Vec<Log>, ProgressSummary)> {
    let logs = logs::list_for_user(store, user_id)?;
    let summary = summarize_logs(&logs)?;
    Ok((logs, summary))
}

pub fn report<S: DataStore>(store: &S) -> Result<HealthReport> {
    global_report(&logs::list_all(store)?)
}
