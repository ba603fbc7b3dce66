use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Fragment m/z tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    #[error("m/z ({0}) and intensities ({1}) arrays must have the same length")]
    SpectrumShape(usize, usize),
    #[error("Peak m/z must be positive and finite, got {1} at index {0}")]
    InvalidMz(usize, f64),
    #[error("Peak intensity must be non-negative and finite, got {1} at index {0}")]
    InvalidIntensity(usize, f64),
    #[error("Peak m/z values must be strictly increasing, violated at index {0}")]
    UnsortedMz(usize),
    #[error("Precursor m/z must be positive and finite, got {0}")]
    InvalidPrecursorMz(f64),
    #[error("Precursor charge must be at least 1")]
    InvalidPrecursorCharge,
}
