use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::criteria::{extract_priorities, validate_criteria, CriteriaError};
use crate::core::matrix::ahp_weights;
use crate::core::scoring::{score_facility, FacilityScore};
use crate::models::{Criterion, Evaluation, Facility, RankedResult};

/// Errors surfaced by the decision engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(#[from] CriteriaError),
}

/// Rank a catalogue against a criteria list
///
/// Returns facilities with a nonzero raw score, sorted by normalized score
/// descending. Equal scores keep catalogue order.
pub fn rank(criteria: &[Criterion], catalogue: &[Facility]) -> Result<Vec<RankedResult>, EngineError> {
    evaluate(criteria, catalogue).map(|evaluation| evaluation.results)
}

/// Run the complete AHP pipeline and keep the intermediate weights
///
/// # Pipeline Stages
/// 1. Criteria validation and priority extraction
/// 2. Comparison matrix, normalization, weight synthesis
/// 3. Per-facility scoring
/// 4. Score normalization, filtering and ranking
pub fn evaluate(criteria: &[Criterion], catalogue: &[Facility]) -> Result<Evaluation, EngineError> {
    validate_criteria(criteria)?;

    let priorities = extract_priorities(criteria);
    let (matrix, weights) = ahp_weights(&priorities);
    let consistency_ratio = matrix.consistency_ratio(&weights);

    tracing::debug!(
        "AHP weights for {} criteria: {:?} (CR = {:.4})",
        criteria.len(),
        weights,
        consistency_ratio
    );

    let scored: Vec<(&Facility, FacilityScore)> = catalogue
        .iter()
        .map(|facility| (facility, score_facility(facility, criteria, &weights)))
        .collect();

    let results = normalize_and_rank(scored);

    tracing::debug!(
        "Ranked {} of {} facilities",
        results.len(),
        catalogue.len()
    );

    Ok(Evaluation {
        weights: criteria.iter().map(|c| c.key).zip(weights).collect(),
        consistency_ratio,
        results,
    })
}

/// Turn raw scores into score shares and per-facility contribution shares
fn normalize_and_rank(scored: Vec<(&Facility, FacilityScore)>) -> Vec<RankedResult> {
    let total_score: f64 = scored.iter().map(|(_, s)| s.raw_score).sum();
    if total_score <= 0.0 {
        return Vec::new();
    }

    let mut results: Vec<RankedResult> = scored
        .into_iter()
        .filter(|(_, s)| s.raw_score > 0.0)
        .map(|(facility, s)| {
            let contributions: BTreeMap<_, _> = s
                .contributions
                .iter()
                .map(|(key, c)| (*key, c / s.raw_score))
                .collect();

            RankedResult {
                facility: facility.clone(),
                score: s.raw_score / total_score,
                contributions,
            }
        })
        .collect();

    // sort_by is stable, so ties stay in catalogue order
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}

/// Leading results that share the top score
pub fn best_results(results: &[RankedResult]) -> &[RankedResult] {
    let Some(top) = results.first().map(|r| r.score) else {
        return results;
    };
    let end = results.iter().take_while(|r| r.score == top).count();
    &results[..end]
}
