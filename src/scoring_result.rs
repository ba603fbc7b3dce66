use crate::matching::PeakMatch;

/// Outcome of a single spectrum pair comparison.
///
/// `matches` holds the accepted peak pairs in greedy acceptance order.
/// The indexes always refer to the two original (untransformed) spectra,
/// also for the neutral loss variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    pub score: f64,
    pub matches: Vec<PeakMatch>,
}
