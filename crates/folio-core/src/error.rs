use thiserror::Error;

/// Reasons a carousel update can't be computed.
///
/// None of these are fatal: the controller logs them and leaves the row where
/// it is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarouselError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("carousel has no cards")]
    ZeroCards,
    #[error("section height {section_px}px does not exceed viewport height {viewport_px}px")]
    DegenerateViewport { section_px: f64, viewport_px: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid carousel config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be {rule}, got {value}")]
    OutOfRange {
        field: &'static str,
        rule: &'static str,
        value: f64,
    },
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid portfolio json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("portfolio field `{0}` is empty")]
    Empty(&'static str),
    #[error("skill `{name}` has percentage {percentage} (max 100)")]
    Percentage { name: String, percentage: u32 },
}
