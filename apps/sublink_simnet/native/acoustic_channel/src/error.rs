//! Channel error types

use ping_modem::ModemError;
use thiserror::Error;

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// Non-physical configuration: wave speed, spacing, orientation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Transmitter and receiver coincide, or the wave cannot reach the
    /// receiver
    #[error("Degenerate geometry at t = {time}: separation {distance} m")]
    DegenerateGeometry { time: f64, distance: f64 },

    #[error(transparent)]
    Modem(#[from] ModemError),
}

impl ChannelError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ChannelError::InvalidParameter(msg.into())
    }
}
