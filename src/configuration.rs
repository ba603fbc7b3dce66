use crate::error::Error;
use crate::scoring_result::ScoringResult;
use crate::similarity::ScoringMethod;
use crate::spectrum::Spectrum;

/// Unit-tagged fragment m/z tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Absolute half window in Dalton.
    Da(f64),
    /// Relative half window in parts per million of the m/z it is
    /// evaluated at.
    Ppm(f64),
}

impl Tolerance {
    /// Half width of the match window around `mz`. For ppm tolerances the
    /// window scales with `mz.abs()`, so the window stays positive in the
    /// neutral loss domain where values near or below zero occur.
    pub fn half_window(&self, mz: f64) -> f64 {
        match self {
            Tolerance::Da(tolerance) => *tolerance,
            Tolerance::Ppm(tolerance) => mz.abs() * tolerance * 1e-6,
        }
    }

    /// Rejects non-positive and non-finite tolerance values. Called once
    /// per scoring entry point, never silently clamped.
    pub fn validate(&self) -> Result<(), Error> {
        let value = match self {
            Tolerance::Da(tolerance) => *tolerance,
            Tolerance::Ppm(tolerance) => *tolerance,
        };

        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidTolerance(value));
        }

        Ok(())
    }
}

pub struct Configuration {
    pub fragment_mz_tolerance: Tolerance,
    pub method: ScoringMethod,
}

impl Configuration {
    pub fn new(fragment_mz_tolerance: Tolerance, method: ScoringMethod) -> Self {
        Self {
            fragment_mz_tolerance,
            method,
        }
    }

    /// Scores a spectrum pair with the configured method and tolerance.
    pub fn score(
        &self,
        spectrum: &Spectrum,
        spectrum_other: &Spectrum,
    ) -> Result<ScoringResult, Error> {
        self.method
            .score(spectrum, spectrum_other, &self.fragment_mz_tolerance)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Tolerance::Da(0.05), ScoringMethod::ModifiedCosine)
    }
}
