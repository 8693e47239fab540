use thiserror::Error;

/// Rejected scene configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("a ring needs at least 3 segments, got {0}")]
    TooFewSegments(usize),
    #[error("speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
    #[error("line width must be a positive finite number, got {0}")]
    InvalidLineWidth(f64),
    #[error("frame rate must be between 1 and 1000, got {0}")]
    InvalidFrameRate(u32),
    #[error("at least one ring is required")]
    NoRings,
    #[error("ring {index} has radius {radius}, which does not exceed the previous radius {previous}")]
    UnorderedRings {
        index: usize,
        radius: f64,
        previous: f64,
    },
}

/// Failure to acquire the drawing surface at startup
#[derive(Debug, Error)]
pub enum InitError {
    #[error("could not determine the terminal size")]
    SurfaceUnavailable,
    #[error("terminal is too small to draw on ({cols}x{rows})")]
    SurfaceTooSmall { cols: u16, rows: u16 },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
