//! Error types for OpenNAC TCO

use thiserror::Error;

/// OpenNAC TCO error type
#[derive(Error, Debug)]
pub enum TcoError {
    /// Requested vendor id has no cost profile
    #[error("unknown vendor: {0}")]
    UnknownVendor(String),

    /// Organization profile or discount field out of domain
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

/// Result type for OpenNAC TCO
pub type TcoResult<T> = Result<T, TcoError>;
