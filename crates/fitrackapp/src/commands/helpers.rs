use crate::error::{FitrackError, Result};
use crate::model::{Record, RecordId};

/// Next identifier for a collection: one past the highest id in use, or 1
/// for an empty collection.
///
/// Ids are never reused while higher ones exist, so creation order is
/// monotonic even if records were hand-edited out of order. A collection
/// whose highest id is `u64::MAX` has no next id and is reported corrupt.
pub fn next_id<R: Record>(records: &[R]) -> Result<RecordId> {
    records
        .iter()
        .map(|r| r.id())
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| {
            FitrackError::corrupt(R::COLLECTION, "no identifiers left after u64::MAX")
        })
}

/// Locate a record by id.
pub fn find_index<R: Record>(records: &[R], id: RecordId) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collection, Plan};

    fn plan(id: RecordId) -> Plan {
        Plan {
            plan_id: id,
            plan_type: "Workout".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_next_id_empty() {
        let plans: Vec<Plan> = Vec::new();
        assert_eq!(next_id(&plans).unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_last() {
        assert_eq!(next_id(&[plan(5), plan(2)]).unwrap(), 6);
    }

    #[test]
    fn test_next_id_single() {
        assert_eq!(next_id(&[plan(1)]).unwrap(), 2);
    }

    #[test]
    fn test_next_id_exhausted() {
        let result = next_id(&[plan(3), plan(u64::MAX)]);
        assert!(matches!(
            result,
            Err(FitrackError::StorageCorrupt {
                collection: Collection::Plans,
                ..
            })
        ));
    }

    #[test]
    fn test_find_index() {
        let plans = [plan(4), plan(9), plan(7)];
        assert_eq!(find_index(&plans, 9), Some(1));
        assert_eq!(find_index(&plans, 3), None);
    }
}
