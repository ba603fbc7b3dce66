use ndarray::Array1;

use crate::configuration::Tolerance;
use crate::error::Error;
use crate::matching::{collect_candidates, match_peaks, reduce_greedy, PeakMatch};
use crate::scoring_result::ScoringResult;
use crate::spectrum::Spectrum;

/// Computes the cosine similarity between the given spectra.
///
/// Peaks are matched directly (no mass shift) and the matched intensity
/// products are normalized by the full intensity norms of both spectra,
/// so the score lies in [0, 1] and reaches 1 only for proportional
/// spectra. A spectrum without any intensity yields score 0.
///
/// # Arguments
/// * `spectrum` - The first spectrum.
/// * `spectrum_other` - The second spectrum.
/// * `tolerance` - The fragment m/z tolerance used to match peaks.
///
pub fn cosine(
    spectrum: &Spectrum,
    spectrum_other: &Spectrum,
    tolerance: &Tolerance,
) -> Result<ScoringResult, Error> {
    let matches = match_peaks(
        (spectrum.mz(), spectrum.intensity()),
        (spectrum_other.mz(), spectrum_other.intensity()),
        tolerance,
        0.0,
    )?;

    Ok(normalized_result(matches, spectrum, spectrum_other))
}

/// Computes the modified cosine similarity between the given spectra.
///
/// In addition to the direct matching pass, a second pass shifts the
/// second spectrum by the precursor mass difference, so fragment peaks
/// that moved together with a structural modification still align. The
/// candidate pairs of both passes are reduced to a single one-to-one
/// matching by weight, which also deduplicates pairs found by both
/// passes. The shifted pass is skipped when the precursor mass difference
/// lies inside the tolerance window, where it would only duplicate the
/// direct pass.
///
/// # Arguments
/// * `spectrum` - The first spectrum.
/// * `spectrum_other` - The second spectrum.
/// * `tolerance` - The fragment m/z tolerance used to match peaks.
///
pub fn modified_cosine(
    spectrum: &Spectrum,
    spectrum_other: &Spectrum,
    tolerance: &Tolerance,
) -> Result<ScoringResult, Error> {
    tolerance.validate()?;

    let matches = match_with_precursor_shift(
        (spectrum.mz(), spectrum.intensity()),
        (spectrum_other.mz(), spectrum_other.intensity()),
        tolerance,
        spectrum.precursor_mass() - spectrum_other.precursor_mass(),
        spectrum.precursor_mass(),
    );

    Ok(normalized_result(matches, spectrum, spectrum_other))
}

/// Computes the neutral loss similarity between the given spectra.
///
/// Both spectra are transformed into the neutral loss domain
/// (`precursor_mass - mz`, intensities untouched) and matched there
/// without a shift. Reported match indexes refer to the original peak
/// positions and the normalization uses the original intensity norms.
///
/// # Arguments
/// * `spectrum` - The first spectrum.
/// * `spectrum_other` - The second spectrum.
/// * `tolerance` - The fragment m/z tolerance used to match peaks.
///
pub fn neutral_loss(
    spectrum: &Spectrum,
    spectrum_other: &Spectrum,
    tolerance: &Tolerance,
) -> Result<ScoringResult, Error> {
    let losses = spectrum.to_neutral_loss();
    let losses_other = spectrum_other.to_neutral_loss();

    let matches = match_peaks(
        (&losses.mz, &losses.intensity),
        (&losses_other.mz, &losses_other.intensity),
        tolerance,
        0.0,
    )?;

    let matches = remap_to_source(matches, &losses.source_indices, &losses_other.source_indices);
    Ok(normalized_result(matches, spectrum, spectrum_other))
}

/// Computes the modified neutral loss similarity between the given
/// spectra: the neutral loss transform combined with the two-pass
/// precursor-shift matching of the modified cosine. The precursor mass
/// difference is taken from the untransformed precursor masses.
///
/// # Arguments
/// * `spectrum` - The first spectrum.
/// * `spectrum_other` - The second spectrum.
/// * `tolerance` - The fragment m/z tolerance used to match peaks.
///
pub fn modified_neutral_loss(
    spectrum: &Spectrum,
    spectrum_other: &Spectrum,
    tolerance: &Tolerance,
) -> Result<ScoringResult, Error> {
    tolerance.validate()?;

    let losses = spectrum.to_neutral_loss();
    let losses_other = spectrum_other.to_neutral_loss();

    let matches = match_with_precursor_shift(
        (&losses.mz, &losses.intensity),
        (&losses_other.mz, &losses_other.intensity),
        tolerance,
        spectrum.precursor_mass() - spectrum_other.precursor_mass(),
        spectrum.precursor_mass(),
    );

    let matches = remap_to_source(matches, &losses.source_indices, &losses_other.source_indices);
    Ok(normalized_result(matches, spectrum, spectrum_other))
}

/// The four similarity variants as a closed dispatch enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMethod {
    Cosine,
    ModifiedCosine,
    NeutralLoss,
    ModifiedNeutralLoss,
}

impl ScoringMethod {
    pub fn score(
        &self,
        spectrum: &Spectrum,
        spectrum_other: &Spectrum,
        tolerance: &Tolerance,
    ) -> Result<ScoringResult, Error> {
        match self {
            ScoringMethod::Cosine => cosine(spectrum, spectrum_other, tolerance),
            ScoringMethod::ModifiedCosine => modified_cosine(spectrum, spectrum_other, tolerance),
            ScoringMethod::NeutralLoss => neutral_loss(spectrum, spectrum_other, tolerance),
            ScoringMethod::ModifiedNeutralLoss => {
                modified_neutral_loss(spectrum, spectrum_other, tolerance)
            }
        }
    }
}

/// Runs the direct pass and, unless the precursor mass difference lies
/// inside the tolerance window around zero, the shifted pass, then
/// reduces the pooled candidates to one matching. Pooling before the
/// reduction resolves index conflicts between the passes by weight and
/// keeps the result one-to-one.
fn match_with_precursor_shift(
    peaks: (&Array1<f64>, &Array1<f64>),
    peaks_other: (&Array1<f64>, &Array1<f64>),
    tolerance: &Tolerance,
    precursor_diff: f64,
    precursor_mass: f64,
) -> Vec<PeakMatch> {
    let mut candidates = collect_candidates(peaks, peaks_other, tolerance, 0.0);

    if precursor_diff.abs() >= tolerance.half_window(precursor_mass) {
        candidates.extend(collect_candidates(
            peaks,
            peaks_other,
            tolerance,
            precursor_diff,
        ));
    }

    reduce_greedy(candidates, peaks.0.len(), peaks_other.0.len())
}

/// Maps loss-domain match indexes back to the original peak positions.
fn remap_to_source(
    matches: Vec<PeakMatch>,
    source_indices: &[usize],
    source_indices_other: &[usize],
) -> Vec<PeakMatch> {
    matches
        .into_iter()
        .map(|peak_match| PeakMatch {
            index_a: source_indices[peak_match.index_a],
            index_b: source_indices_other[peak_match.index_b],
            weight: peak_match.weight,
        })
        .collect()
}

fn normalized_result(
    matches: Vec<PeakMatch>,
    spectrum: &Spectrum,
    spectrum_other: &Spectrum,
) -> ScoringResult {
    let matched_weight: f64 = matches.iter().map(|peak_match| peak_match.weight).sum();
    let denominator =
        (spectrum.intensity_norm_squared() * spectrum_other.intensity_norm_squared()).sqrt();

    let score = if denominator > 0.0 {
        matched_weight / denominator
    } else {
        0.0
    };

    ScoringResult { score, matches }
}
