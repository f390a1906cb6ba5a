//! Error types for model construction and input loading.
//!
//! Every failure mode is detected eagerly, before the time-stepping loop
//! starts; nothing inside the loop returns an error.

use thiserror::Error;

/// Canonical error type for the adsorption model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Malformed, empty, or non-positive measurement data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Non-positive doubling time, base-pair length, or size-class count.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Statistic or growth-model selector outside the recognized set.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}
