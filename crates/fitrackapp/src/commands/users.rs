use crate::commands::helpers::{find_index, next_id};
use crate::error::{FitrackError, Result};
use crate::model::{NewUser, RecordId, User};
use crate::store::DataStore;
use tracing::debug;

pub fn register<S: DataStore>(store: &mut S, input: NewUser) -> Result<User> {
    let mut users: Vec<User> = store.load()?;
    let user = User::new(next_id(&users)?, input)?;
    users.push(user.clone());
    store.save(&users)?;

    debug!(user_id = user.user_id, "registered user");
    Ok(user)
}

pub fn find_by_id<S: DataStore>(store: &S, user_id: RecordId) -> Result<User> {
    let users: Vec<User> = store.load()?;
    users
        .into_iter()
        .find(|u| u.user_id == user_id)
        .ok_or_else(|| FitrackError::user_not_found(user_id))
}

/// Set a user's height and weight. Nothing is written when the user does not exist.
pub fn update_profile<S: DataStore>(
    store: &mut S,
    user_id: RecordId,
    height: f64,
    weight: f64,
) -> Result<User> {
    let mut users: Vec<User> = store.load()?;
    let idx =
        find_index(&users, user_id).ok_or_else(|| FitrackError::user_not_found(user_id))?;

    users[idx].set_measurements(height, weight)?;
    let updated = users[idx].clone();
    store.save(&users)?;

    debug!(user_id, height, weight, "updated profile");
    Ok(updated)
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<User>> {
    store.load()
}
