use crate::commands::helpers::next_id;
use crate::error::Result;
use crate::model::{Log, NewLog, RecordId};
use crate::store::DataStore;
use tracing::debug;

/// Append a daily entry. The owning user is not checked for existence.
pub fn append<S: DataStore>(store: &mut S, input: NewLog) -> Result<Log> {
    let mut logs: Vec<Log> = store.load()?;
    let log = Log::new(next_id(&logs)?, input)?;
    logs.push(log.clone());
    store.save(&logs)?;

    debug!(log_id = log.log_id, user_id = log.user_id, "appended log");
    Ok(log)
}

pub fn list_all<S: DataStore>(store: &S) -> Result<Vec<Log>> {
    store.load()
}

pub fn list_for_user<S: DataStore>(store: &S, user_id: RecordId) -> Result<Vec<Log>> {
    Ok(list_all(store)?
        .into_iter()
        .filter(|l| l.user_id == user_id)
        .collect())
}
