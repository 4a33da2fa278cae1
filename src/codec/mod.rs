//! # Configuration Codec
//!
//! Typed RX/TX configurations for the CC1101 driver and their binary form.
//!
//! This module handles:
//! - Physical value to register conversions ([`convert`])
//! - ISM band TX power tables ([`patable`])
//! - The common header and the RX/TX records built on it
//!
//! Records serialize to the driver's native struct layout (little-endian,
//! naturally aligned). A buffer of all zero bytes means the driver holds no
//! configuration and decodes to `None`.

pub mod common;
pub mod convert;
pub mod patable;
pub mod rx;
pub mod tx;

pub use common::{CommonConfig, Modulation, ParseModulationError, DEFAULT_DEVIATION, DEFAULT_SYNC_WORD};
pub use convert::{supported_bandwidths, supported_deviations};
pub use patable::{get_power_table, IsmBand, PowerTable};
pub use rx::{
    CarrierSense, CarrierSenseMode, RxConfig, DEFAULT_BANDWIDTH, DEFAULT_CARRIER_SENSE,
    DEFAULT_MAGN_TARGET, DEFAULT_MAX_DVGA_GAIN, DEFAULT_MAX_LNA_GAIN,
};
pub use tx::TxConfig;

use crate::error::ConfigError;

/// Serialized size of [`CommonConfig`]
pub const COMMON_CONFIG_SIZE: usize = 16;

/// Serialized size of [`RxConfig`]
pub const RX_CONFIG_SIZE: usize = 28;

/// Serialized size of [`TxConfig`]
pub const TX_CONFIG_SIZE: usize = 20;

/// True if the driver reported no configuration
pub(crate) fn is_unconfigured(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), ConfigError> {
    if bytes.len() != expected {
        return Err(ConfigError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(())
}
