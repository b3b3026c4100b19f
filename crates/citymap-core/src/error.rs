// crates/citymap-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the registry, the query engine and the store.
///
/// Rows dropped during a bulk parse are *not* errors; see
/// [`crate::parser::parse_with_report`] for the per-row diagnostics.
#[derive(Debug, Error)]
pub enum CityMapError {
    /// Bad direction token, bad state code, non-numeric or out-of-bounds
    /// coordinates, or a rejected add request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Extremum or nearest query over a registry without records.
    #[error("the city registry is empty")]
    EmptyCollection,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CityMapError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CityMapError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CityMapError>;
