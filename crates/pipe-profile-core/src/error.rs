use std::fmt;

/// Regression axis of the per-axis least-squares fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Cosine component, the `dx` direction.
    X,
    /// Sine component, the `dy` direction.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors returned by the profile core.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("no data: the scan table has no rows")]
    EmptyInput,
    #[error("row {row} has {got} values, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("degenerate fit: zero denominator on the {axis} axis")]
    DegenerateFit { axis: Axis },
    #[error(
        "invalid probe count {probe_count}: expected 1 to {}",
        crate::MAX_PROBE_COUNT
    )]
    InvalidProbeCount { probe_count: usize },
    #[error("invalid instrument diameter {diameter}")]
    InvalidGeometry { diameter: f64 },
}
