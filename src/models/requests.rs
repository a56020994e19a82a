use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::criteria::CriteriaError;
use crate::models::domain::{Criterion, CriterionKey, CriterionValue};

/// Request to rank the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1), nested)]
    #[serde(default)]
    pub criteria: Vec<CriterionInput>,
}

impl SearchRequest {
    /// Convert the raw criteria into typed engine input
    pub fn to_criteria(&self) -> Result<Vec<Criterion>, CriteriaError> {
        self.criteria.iter().map(Criterion::try_from).collect()
    }
}

/// A criterion as it arrives over the wire; `value` is typed later by `key`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CriterionInput {
    #[validate(length(min = 1))]
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[validate(range(min = 1, max = 9))]
    pub priority: i64,
}

impl TryFrom<&CriterionInput> for Criterion {
    type Error = CriteriaError;

    fn try_from(input: &CriterionInput) -> Result<Self, Self::Error> {
        let key = CriterionKey::parse(&input.key)
            .ok_or_else(|| CriteriaError::UnknownKey(input.key.clone()))?;

        let priority = u8::try_from(input.priority)
            .ok()
            .filter(|p| (1..=9).contains(p))
            .ok_or(CriteriaError::PriorityOutOfRange {
                key,
                priority: input.priority,
            })?;

        let mismatch = |expected: &'static str| CriteriaError::ValueMismatch { key, expected };

        let value = match key {
            CriterionKey::Cost => {
                let ceiling = match &input.value {
                    serde_json::Value::Number(n) => n.as_f64(),
                    // Older clients send the ceiling as a numeric string
                    serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                CriterionValue::Budget(ceiling.ok_or_else(|| mismatch("number"))?)
            }
            CriterionKey::Location => match &input.value {
                serde_json::Value::String(s) => CriterionValue::Locations(vec![s.clone()]),
                serde_json::Value::Array(items) => CriterionValue::Locations(
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                        .ok_or_else(|| mismatch("string or list of strings"))?,
                ),
                _ => return Err(mismatch("string or list of strings")),
            },
            _ => match &input.value {
                serde_json::Value::Bool(b) => CriterionValue::Flag(*b),
                _ => return Err(mismatch("boolean")),
            },
        };

        Ok(Criterion { key, value, priority })
    }
}
