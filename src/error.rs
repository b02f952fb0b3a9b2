use thiserror::Error;

/// Validation errors for model generation.
///
/// Every variant is raised eagerly, before any rasterization work begins;
/// generation either returns a complete volume or fails here with no partial
/// output. The pipeline is deterministic and stateless, so no retries are
/// performed anywhere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("domain dimensions must be positive, got ({nx}, {ny}, {nz})")]
    InvalidDimensions { nx: usize, ny: usize, nz: usize },

    #[error("inclusion radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("inclusion aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),

    #[error("background and inclusion values must differ")]
    IndistinctLabels,

    #[error(
        "positions must have shape ({expected_rows}, {expected_cols}), got ({rows}, {cols})"
    )]
    PositionShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown orientation token '{0}', expected 'xy', 'zx' or 'zy'")]
    UnknownOrientation(String),

    #[error("2d generation requires a planar grid (nz = 1), got nz = {0}")]
    NotPlanar(usize),

    #[error("layer list must not be empty")]
    EmptyLayers,

    #[error("layer thicknesses must be positive, got {0}")]
    InvalidThickness(f32),

    #[error("number of layer cycles must be positive")]
    InvalidCycles,
}
