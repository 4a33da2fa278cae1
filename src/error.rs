//! # Error Types
//!
//! Error types for the CC1101 configuration codec using `thiserror`.

use thiserror::Error;

/// Validation failure for a radio configuration field
///
/// Every constructor and mutator in [`crate::codec`] fails fast with one of
/// these; no value is ever clamped or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("frequency must be between 300-348 MHz, 387-464 MHz or 779-928 MHz")]
    InvalidFrequency,

    #[error("baud rate is out of range for the selected modulation")]
    InvalidBaudRate,

    #[error("deviation is not representable by the DEVIATN register")]
    InvalidDeviation,

    #[error("sync word 16 msb must match 16 lsb")]
    InvalidSyncWord,

    #[error("bandwidth is not a supported channel filter bandwidth")]
    InvalidBandwidth,

    #[error("carrier sense threshold is not valid for the carrier sense mode")]
    InvalidCarrierSense,

    #[error("TX power is not in the power table")]
    InvalidTxPower,

    #[error("max LNA gain must be one of 0, 3, 6, 7, 9, 12, 15, 17 dB")]
    InvalidMaxLnaGain,

    #[error("max DVGA gain must be one of 0, 6, 12, 18 dB")]
    InvalidMaxDvgaGain,

    #[error("magnitude target must be one of 24, 27, 30, 33, 36, 38, 40, 42 dB")]
    InvalidMagnTarget,

    /// Unknown modulation code in a serialized record
    #[error("unknown modulation code {0}")]
    InvalidModulation(u8),

    /// Serialized record has the wrong size
    #[error("expected {expected} configuration bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Cc1101Error {
    /// Rejected configuration values
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Radio profile parsing errors
    #[error("Profile error: {0}")]
    Profile(#[from] toml::de::Error),

    /// I/O errors from the register transport or profile files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Cc1101Error>;
