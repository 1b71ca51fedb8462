use crate::commands::helpers::next_id;
use crate::error::Result;
use crate::model::Plan;
use crate::store::DataStore;
use tracing::debug;

pub fn add<S: DataStore>(store: &mut S, plan_type: String, description: String) -> Result<Plan> {
    let mut plans: Vec<Plan> = store.load()?;
    let plan = Plan::new(next_id(&plans)?, plan_type, description)?;
    plans.push(plan.clone());
    store.save(&plans)?;

    debug!(plan_id = plan.plan_id, "added plan");
    Ok(plan)
}

pub fn list<S: DataStore>(store: &S) -> Result<Vec<Plan>> {
    store.load()
}
