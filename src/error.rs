use thiserror::Error;

/// Errors reported for invalid arguments.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The maximum number of close matches must be positive.
    #[error("n must be > 0")]
    InvalidMaxResults,
    /// The similarity cutoff must lie within `0.0..=1.0`.
    #[error("cutoff must be in [0.0, 1.0], got {0}")]
    InvalidCutoff(f64),
}

#[test]
fn test_messages() {
    assert_eq!(Error::InvalidMaxResults.to_string(), "n must be > 0");
    assert_eq!(
        Error::InvalidCutoff(1.5).to_string(),
        "cutoff must be in [0.0, 1.0], got 1.5"
    );
}
