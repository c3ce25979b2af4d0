use thiserror::Error;

use crate::coordinates::Axis;

pub type Result<T> = std::result::Result<T, GpuidError>;

/// Failures raised while validating a place record or deriving its identifier.
#[derive(Debug, Error)]
pub enum GpuidError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },
    #[error("unknown place type '{0}', expected 'cluster' or 'group'")]
    UnknownTypeProfile(String),
    #[error("invalid {axis} {value}")]
    InvalidCoordinate { axis: Axis, value: f64 },
    #[error("geohash encoding failed: {0}")]
    EncodingFailure(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("cannot decode payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<GpuidError>,
    },
}

impl GpuidError {
    pub(crate) fn at(self, index: usize) -> Self {
        GpuidError::Record {
            index,
            source: Box::new(self),
        }
    }

    /// The underlying failure, with any batch position stripped.
    pub fn kind(&self) -> &GpuidError {
        match self {
            GpuidError::Record { source, .. } => source.kind(),
            other => other,
        }
    }
}
