//! Error types for the CHIME engine

use thiserror::Error;

/// Core CHIME errors
///
/// Nothing here is fatal to the device: every decode or apply failure
/// degrades to "retain previous valid state" at the point of use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChimeError {
    // Sync decode errors
    #[error("Invalid epoch payload: {0}")]
    InvalidEpoch(String),

    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Invalid payload on {channel}: {reason}")]
    InvalidPayload { channel: String, reason: String },

    // Zone errors
    #[error("Unknown zone name: {0}")]
    UnknownZone(String),

    #[error("Zone index out of range: {index} >= {count}")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Zone offset out of range: {0}s (allowed -43200..=50400)")]
    OffsetOutOfRange(i32),

    // Alarm errors
    #[error("Malformed alarm entry {entry:?}: {reason}")]
    MalformedAlarmEntry { entry: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ChimeError {
    /// Build a malformed-alarm-entry error for a rejected time string
    pub fn malformed_entry(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        ChimeError::MalformedAlarmEntry {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Build an invalid-payload error for a channel decode failure
    pub fn invalid_payload(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        ChimeError::InvalidPayload {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for CHIME operations
pub type ChimeResult<T> = Result<T, ChimeError>;
