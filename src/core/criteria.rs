use thiserror::Error;

use crate::models::{Criterion, CriterionKey, CriterionValue};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 9;

/// Reasons a criteria list is rejected before any scoring happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("Criteria cannot be empty")]
    Empty,

    #[error("Unknown criterion key: {0}")]
    UnknownKey(String),

    #[error("Criterion '{0}' appears more than once")]
    DuplicateKey(CriterionKey),

    #[error("Criterion '{key}' has priority {priority}; priorities must be between 1 and 9")]
    PriorityOutOfRange { key: CriterionKey, priority: i64 },

    #[error("Criterion '{key}' expects a {expected} value")]
    ValueMismatch { key: CriterionKey, expected: &'static str },

    #[error("Cost ceiling must be a finite, non-negative number (got {0})")]
    InvalidBudget(f64),

    #[error("Location criterion needs at least one non-empty location")]
    EmptyLocations,
}

/// Check a criteria list against everything the engine assumes
///
/// Keys must be unique, priorities within [1, 9], and each value must have
/// the type its key expects.
pub fn validate_criteria(criteria: &[Criterion]) -> Result<(), CriteriaError> {
    if criteria.is_empty() {
        return Err(CriteriaError::Empty);
    }

    for (i, criterion) in criteria.iter().enumerate() {
        let key = criterion.key;

        if criteria[..i].iter().any(|earlier| earlier.key == key) {
            return Err(CriteriaError::DuplicateKey(key));
        }

        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&criterion.priority) {
            return Err(CriteriaError::PriorityOutOfRange {
                key,
                priority: i64::from(criterion.priority),
            });
        }

        match (key, &criterion.value) {
            (CriterionKey::Cost, CriterionValue::Budget(ceiling)) => {
                if !ceiling.is_finite() || *ceiling < 0.0 {
                    return Err(CriteriaError::InvalidBudget(*ceiling));
                }
            }
            (CriterionKey::Cost, _) => {
                return Err(CriteriaError::ValueMismatch { key, expected: "number" })
            }
            (CriterionKey::Location, CriterionValue::Locations(accepted)) => {
                if accepted.iter().all(|location| location.is_empty()) {
                    return Err(CriteriaError::EmptyLocations);
                }
            }
            (CriterionKey::Location, _) => {
                return Err(CriteriaError::ValueMismatch {
                    key,
                    expected: "string or list of strings",
                })
            }
            (_, CriterionValue::Flag(_)) => {}
            (_, _) => return Err(CriteriaError::ValueMismatch { key, expected: "boolean" }),
        }
    }

    Ok(())
}

/// Priorities in caller order, as floats ready for the comparison matrix
pub fn extract_priorities(criteria: &[Criterion]) -> Vec<f64> {
    criteria.iter().map(|c| f64::from(c.priority)).collect()
}
