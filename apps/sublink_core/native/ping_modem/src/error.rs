//! Modem error types

use thiserror::Error;

/// Result type for modem operations
pub type ModemResult<T> = Result<T, ModemError>;

/// Errors raised at the modem API boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModemError {
    /// Malformed durations, sample counts, rates, or code parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Symbol outside the alphabet the operation accepts
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Bitstream length is not a whole number of code blocks
    #[error("Input length {length} is not a multiple of block size {block}")]
    InputLengthMismatch { length: usize, block: usize },

    /// Waveform too short for a measurement window
    #[error("Insufficient data: need {needed} samples, got {available}")]
    InsufficientData { needed: usize, available: usize },
}

impl ModemError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ModemError::InvalidParameter(msg.into())
    }
}
