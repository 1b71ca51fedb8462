use crate::error::Result;
use crate::model::{Collection, Log, Plan, User};
use crate::store::DataStore;

/// Create every collection that does not exist yet.
/// Returns the collections that were created.
pub fn run<S: DataStore>(store: &mut S) -> Result<Vec<Collection>> {
    let missing: Vec<Collection> = Collection::all()
        .iter()
        .copied()
        .filter(|c| !store.exists(*c))
        .collect();

    // Loading initializes a missing collection
    store.load::<User>()?;
    store.load::<Plan>()?;
    store.load::<Log>()?;

    Ok(missing)
}
