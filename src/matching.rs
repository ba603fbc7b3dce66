use ndarray::Array1;

use crate::configuration::Tolerance;
use crate::error::Error;

/// One matched peak pair. `weight` is the product of the two peak
/// intensities, the pair's contribution to the unnormalized score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakMatch {
    pub index_a: usize,
    pub index_b: usize,
    pub weight: f64,
}

/// Greedily matches two sorted peak lists under a fragment m/z tolerance.
///
/// Candidate pairs are every `(i, j)` with
/// `|mz_a[i] - (mz_b[j] + shift)| <= tolerance`, weighted by the intensity
/// product. Candidates are accepted in descending weight order (ties
/// broken by the smaller `(index_a, index_b)` pair) while both indexes are
/// still unused, so the result is a deterministic one-to-one partial
/// matching favoring the most intense pairs.
///
/// # Arguments
/// * `peaks_a` - m/z and intensity arrays of the first spectrum, m/z strictly increasing.
/// * `peaks_b` - m/z and intensity arrays of the second spectrum, m/z strictly increasing.
/// * `tolerance` - Fragment m/z tolerance, evaluated at the first spectrum's peak m/z.
/// * `shift` - Mass shift added to every m/z of `peaks_b` before comparison, 0 for none.
///
pub fn match_peaks(
    peaks_a: (&Array1<f64>, &Array1<f64>),
    peaks_b: (&Array1<f64>, &Array1<f64>),
    tolerance: &Tolerance,
    shift: f64,
) -> Result<Vec<PeakMatch>, Error> {
    tolerance.validate()?;

    let candidates = collect_candidates(peaks_a, peaks_b, tolerance, shift);
    Ok(reduce_greedy(candidates, peaks_a.0.len(), peaks_b.0.len()))
}

/// Collects all candidate pairs within the tolerance window.
///
/// Both m/z arrays are sorted, so a window start pointer into `peaks_b`
/// only ever advances while `peaks_a` is walked once, keeping candidate
/// generation linear plus the size of the output.
pub fn collect_candidates(
    peaks_a: (&Array1<f64>, &Array1<f64>),
    peaks_b: (&Array1<f64>, &Array1<f64>),
    tolerance: &Tolerance,
    shift: f64,
) -> Vec<PeakMatch> {
    let (mz_a, intensity_a) = peaks_a;
    let (mz_b, intensity_b) = peaks_b;

    let mut candidates = Vec::new();
    let mut window_start = 0;

    for (index_a, (&peak_mz, &peak_intensity)) in mz_a.iter().zip(intensity_a.iter()).enumerate() {
        let half_window = tolerance.half_window(peak_mz);

        // Advance while there is an excessive mass difference.
        while window_start < mz_b.len() && mz_b[window_start] + shift < peak_mz - half_window {
            window_start += 1;
        }

        let mut index_b = window_start;
        while index_b < mz_b.len() && mz_b[index_b] + shift <= peak_mz + half_window {
            candidates.push(PeakMatch {
                index_a,
                index_b,
                weight: peak_intensity * intensity_b[index_b],
            });
            index_b += 1;
        }
    }

    candidates
}

/// Reduces candidate pairs to a one-to-one matching: sort by descending
/// weight (smaller index pair on ties), then accept each candidate whose
/// indexes are both unconsumed.
pub fn reduce_greedy(
    mut candidates: Vec<PeakMatch>,
    len_a: usize,
    len_b: usize,
) -> Vec<PeakMatch> {
    candidates.sort_unstable_by(|left, right| {
        right
            .weight
            .total_cmp(&left.weight)
            .then_with(|| (left.index_a, left.index_b).cmp(&(right.index_a, right.index_b)))
    });

    let mut consumed_a = vec![false; len_a];
    let mut consumed_b = vec![false; len_b];
    let mut matches = Vec::new();

    for candidate in candidates {
        if !consumed_a[candidate.index_a] && !consumed_b[candidate.index_b] {
            consumed_a[candidate.index_a] = true;
            consumed_b[candidate.index_b] = true;
            matches.push(candidate);
        }
    }

    matches
}
