use ndarray::{Array1, Axis};

use crate::error::Error;

/// An immutable MS/MS peak set with precursor metadata.
///
/// Construction via [`Spectrum::new`] checks every input contract
/// (strictly increasing m/z, finite non-negative intensities, positive
/// precursor m/z, charge >= 1), so an existing instance is always valid
/// and the scorers only need to borrow it read-only. Preprocessing
/// (intensity normalization, precursor peak removal, m/z range filtering)
/// is the caller's job and happens before construction.
pub struct Spectrum {
    precursor_mz: f64,
    precursor_charge: usize,
    mz: Array1<f64>,
    intensity: Array1<f64>,
}

impl Spectrum {
    /// Creates a new validated spectrum.
    ///
    /// # Arguments
    /// * `precursor_mz` - Mass to charge ratio (Thompson) of the precursor ion.
    /// * `precursor_charge` - Charge state of the precursor ion, at least 1.
    /// * `mz` - Fragment m/z values, strictly increasing.
    /// * `intensity` - Fragment intensities, same length as `mz`.
    ///
    pub fn new(
        precursor_mz: f64,
        precursor_charge: usize,
        mz: Array1<f64>,
        intensity: Array1<f64>,
    ) -> Result<Self, Error> {
        if mz.len() != intensity.len() {
            return Err(Error::SpectrumShape(mz.len(), intensity.len()));
        }

        if !precursor_mz.is_finite() || precursor_mz <= 0.0 {
            return Err(Error::InvalidPrecursorMz(precursor_mz));
        }

        if precursor_charge == 0 {
            return Err(Error::InvalidPrecursorCharge);
        }

        for (index, &mz_value) in mz.iter().enumerate() {
            if !mz_value.is_finite() || mz_value <= 0.0 {
                return Err(Error::InvalidMz(index, mz_value));
            }
            if index > 0 && mz_value <= mz[index - 1] {
                return Err(Error::UnsortedMz(index));
            }
        }

        for (index, &intensity_value) in intensity.iter().enumerate() {
            if !intensity_value.is_finite() || intensity_value < 0.0 {
                return Err(Error::InvalidIntensity(index, intensity_value));
            }
        }

        Ok(Spectrum {
            precursor_mz,
            precursor_charge,
            mz,
            intensity,
        })
    }

    pub fn precursor_mz(&self) -> f64 {
        self.precursor_mz
    }

    pub fn precursor_charge(&self) -> usize {
        self.precursor_charge
    }

    /// Neutral precursor mass as `precursor_mz * charge`.
    pub fn precursor_mass(&self) -> f64 {
        self.precursor_mz * self.precursor_charge as f64
    }

    pub fn mz(&self) -> &Array1<f64> {
        &self.mz
    }

    pub fn intensity(&self) -> &Array1<f64> {
        &self.intensity
    }

    pub fn len(&self) -> usize {
        self.mz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }

    /// Sum of squared intensities over all peaks, the per-spectrum factor
    /// of the cosine normalization denominator.
    pub fn intensity_norm_squared(&self) -> f64 {
        self.intensity.dot(&self.intensity)
    }

    /// Transforms the spectrum into the neutral loss domain: every peak
    /// m/z becomes `precursor_mass - mz`, intensities stay untouched.
    ///
    /// The transform reverses the m/z order, so the loss arrays are
    /// re-sorted ascending and `source_indices` records, for each
    /// transformed position, the index of the originating peak. Losses at
    /// or below zero (peaks at or above the precursor mass) are kept.
    pub fn to_neutral_loss(&self) -> NeutralLossSpectrum {
        let precursor_mass = self.precursor_mass();
        let losses = self.mz.mapv(|mz| precursor_mass - mz);

        let mut order: Vec<usize> = (0..losses.len()).collect();
        order.sort_unstable_by(|&left, &right| losses[left].total_cmp(&losses[right]));

        NeutralLossSpectrum {
            mz: losses.select(Axis(0), &order),
            intensity: self.intensity.select(Axis(0), &order),
            source_indices: order,
        }
    }
}

/// Loss-domain view of a [`Spectrum`], sorted ascending by loss mass.
///
/// Strictly increasing peak m/z maps to strictly decreasing losses, so the
/// sorted loss array keeps the no-duplicates invariant the matcher relies
/// on.
pub struct NeutralLossSpectrum {
    pub mz: Array1<f64>,
    pub intensity: Array1<f64>,
    pub source_indices: Vec<usize>,
}
