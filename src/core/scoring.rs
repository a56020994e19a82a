use crate::models::{Criterion, CriterionKey, CriterionValue, Facility};

/// Raw (pre-normalization) score of one facility
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityScore {
    pub raw_score: f64,
    /// Index-aligned with the criteria list
    pub contributions: Vec<(CriterionKey, f64)>,
}

/// Score a facility against every criterion
///
/// `weights` must be index-aligned with `criteria`. Each criterion adds
/// some share of its weight according to its key:
///
/// - cost: full weight within budget, decaying linearly to zero at twice
///   the ceiling
/// - location: full weight on exact membership in the accepted list
/// - amenity flags: full weight when the facility's flag equals the wanted
///   value (so a `false` criterion rewards facilities without the amenity)
pub fn score_facility(facility: &Facility, criteria: &[Criterion], weights: &[f64]) -> FacilityScore {
    let contributions: Vec<(CriterionKey, f64)> = criteria
        .iter()
        .zip(weights)
        .map(|(criterion, weight)| (criterion.key, weight * match_factor(facility, criterion)))
        .collect();

    let raw_score = contributions.iter().map(|(_, c)| c).sum();

    FacilityScore {
        raw_score,
        contributions,
    }
}

/// Fraction (0-1) of a criterion's weight a facility earns
#[inline]
pub fn match_factor(facility: &Facility, criterion: &Criterion) -> f64 {
    match (&criterion.value, criterion.key) {
        (CriterionValue::Budget(ceiling), CriterionKey::Cost) => cost_factor(facility.cost, *ceiling),
        (CriterionValue::Locations(accepted), CriterionKey::Location) => {
            if accepted.iter().any(|location| *location == facility.location) {
                1.0
            } else {
                0.0
            }
        }
        (CriterionValue::Flag(wanted), key) => match facility.amenity(key) {
            Some(has) if has == *wanted => 1.0,
            _ => 0.0,
        },
        // Mismatched pairs never get past validation
        _ => 0.0,
    }
}

/// Linear budget decay: 1 within budget, 0 once cost reaches twice the ceiling
#[inline]
pub fn cost_factor(cost: f64, ceiling: f64) -> f64 {
    if cost <= ceiling {
        return 1.0;
    }
    (1.0 - (cost - ceiling) / ceiling).max(0.0)
}
