//! # RX Configuration
//!
//! Receive settings layered on [`CommonConfig`]: channel filter bandwidth,
//! AGC limits, carrier sense and packet length.

use std::fmt;

use bytes::{Buf, BufMut};
use serde::Deserialize;

use super::common::CommonConfig;
use super::convert::{
    bandwidth_khz, bandwidth_to_config, config_to_bandwidth, validate_magn_target,
    validate_max_dvga_gain, validate_max_lna_gain,
};
use super::{check_length, is_unconfigured, RX_CONFIG_SIZE};
use crate::error::ConfigError;

/// Channel filter bandwidth used when none is given, in kHz
pub const DEFAULT_BANDWIDTH: u16 = 203;

/// Max LNA gain reduction used when none is given, in dB
pub const DEFAULT_MAX_LNA_GAIN: u8 = 0;

/// Max DVGA gain reduction used when none is given, in dB
pub const DEFAULT_MAX_DVGA_GAIN: u8 = 0;

/// Channel filter amplitude target used when none is given, in dB
pub const DEFAULT_MAGN_TARGET: u8 = 33;

/// Carrier sense used when none is given
pub const DEFAULT_CARRIER_SENSE: CarrierSense = CarrierSense::Relative(10);

/// Relative carrier sense thresholds the device supports, in dB
const RELATIVE_THRESHOLDS: [u8; 3] = [6, 10, 14];

/// Carrier sense mode as stored by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierSenseMode {
    Disabled,
    Relative,
    Absolute,
}

impl CarrierSenseMode {
    pub fn code(self) -> u8 {
        match self {
            CarrierSenseMode::Disabled => 0,
            CarrierSenseMode::Relative => 1,
            CarrierSenseMode::Absolute => 2,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(CarrierSenseMode::Disabled),
            1 => Ok(CarrierSenseMode::Relative),
            2 => Ok(CarrierSenseMode::Absolute),
            _ => Err(ConfigError::InvalidCarrierSense),
        }
    }
}

/// Carrier sense threshold
///
/// - `Relative(n)`: `n` dB above the RSSI baseline, one of 6, 10 or 14
/// - `Absolute(n)`: `n` dB relative to MAGN_TARGET, in -7..=7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierSense {
    Disabled,
    Relative(u8),
    Absolute(i8),
}

impl CarrierSense {
    /// Build a carrier sense setting from a mode and threshold
    ///
    /// The threshold is ignored for [`CarrierSenseMode::Disabled`].
    pub fn new(mode: CarrierSenseMode, threshold: i8) -> Result<Self, ConfigError> {
        let carrier_sense = match mode {
            CarrierSenseMode::Disabled => CarrierSense::Disabled,
            CarrierSenseMode::Relative => {
                let threshold =
                    u8::try_from(threshold).map_err(|_| ConfigError::InvalidCarrierSense)?;
                CarrierSense::Relative(threshold)
            }
            CarrierSenseMode::Absolute => CarrierSense::Absolute(threshold),
        };

        carrier_sense.validate()?;
        Ok(carrier_sense)
    }

    pub fn mode(&self) -> CarrierSenseMode {
        match self {
            CarrierSense::Disabled => CarrierSenseMode::Disabled,
            CarrierSense::Relative(_) => CarrierSenseMode::Relative,
            CarrierSense::Absolute(_) => CarrierSenseMode::Absolute,
        }
    }

    /// Threshold in dB as stored in the driver struct (0 when disabled)
    pub fn threshold(&self) -> i8 {
        match *self {
            CarrierSense::Disabled => 0,
            CarrierSense::Relative(threshold) => threshold as i8,
            CarrierSense::Absolute(threshold) => threshold,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = match *self {
            CarrierSense::Disabled => true,
            CarrierSense::Relative(threshold) => RELATIVE_THRESHOLDS.contains(&threshold),
            CarrierSense::Absolute(threshold) => (-7..=7).contains(&threshold),
        };

        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidCarrierSense)
        }
    }
}

impl fmt::Display for CarrierSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierSense::Disabled => f.write_str("Disabled"),
            CarrierSense::Relative(threshold) => write!(f, "+{} dB", threshold),
            CarrierSense::Absolute(threshold) => write!(f, "{} dB", threshold),
        }
    }
}

/// Receive configuration
///
/// Serialized as the common header followed by:
///
/// ```text
/// offset  size  field
/// 16      1     bandwidth mantissa
/// 17      1     bandwidth exponent
/// 18      1     max LNA gain (dB)
/// 19      1     max DVGA gain (dB)
/// 20      1     magnitude target (dB)
/// 21      1     carrier sense mode
/// 22      1     carrier sense threshold (i8)
/// 23      1     padding
/// 24      4     packet length (u32 LE)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RxConfig {
    common: CommonConfig,
    bandwidth_mantissa: u8,
    bandwidth_exponent: u8,
    max_lna_gain: u8,
    max_dvga_gain: u8,
    magn_target: u8,
    carrier_sense: CarrierSense,
    packet_length: u32,
}

impl RxConfig {
    /// Create an RX configuration with default bandwidth, AGC and carrier sense
    pub fn new(common: CommonConfig, packet_length: u32) -> Result<Self, ConfigError> {
        Self::with_settings(
            common,
            DEFAULT_BANDWIDTH,
            DEFAULT_CARRIER_SENSE,
            DEFAULT_MAX_LNA_GAIN,
            DEFAULT_MAX_DVGA_GAIN,
            DEFAULT_MAGN_TARGET,
            packet_length,
        )
    }

    /// Create an RX configuration with every setting given
    ///
    /// # Arguments
    ///
    /// * `common` - Shared frequency/modulation settings
    /// * `bandwidth` - Channel filter bandwidth in kHz, one of [`supported_bandwidths`](super::supported_bandwidths)
    /// * `carrier_sense` - Carrier sense threshold
    /// * `max_lna_gain` - Max LNA gain reduction in dB
    /// * `max_dvga_gain` - Max DVGA gain reduction in dB
    /// * `magn_target` - Channel filter amplitude target in dB
    /// * `packet_length` - Fixed packet length in bytes
    pub fn with_settings(
        common: CommonConfig,
        bandwidth: u16,
        carrier_sense: CarrierSense,
        max_lna_gain: u8,
        max_dvga_gain: u8,
        magn_target: u8,
        packet_length: u32,
    ) -> Result<Self, ConfigError> {
        let (bandwidth_mantissa, bandwidth_exponent) = bandwidth_to_config(bandwidth)?;
        carrier_sense.validate()?;
        validate_max_lna_gain(max_lna_gain)?;
        validate_max_dvga_gain(max_dvga_gain)?;
        validate_magn_target(magn_target)?;

        Ok(Self {
            common,
            bandwidth_mantissa,
            bandwidth_exponent,
            max_lna_gain,
            max_dvga_gain,
            magn_target,
            carrier_sense,
            packet_length,
        })
    }

    pub fn common(&self) -> &CommonConfig {
        &self.common
    }

    /// Mutable access to the shared settings, which validate on their own
    pub fn common_mut(&mut self) -> &mut CommonConfig {
        &mut self.common
    }

    /// Channel filter bandwidth in kHz
    pub fn bandwidth(&self) -> u16 {
        bandwidth_khz(self.bandwidth_mantissa, self.bandwidth_exponent)
    }

    /// Bandwidth `(mantissa, exponent)`
    pub fn bandwidth_config(&self) -> (u8, u8) {
        (self.bandwidth_mantissa, self.bandwidth_exponent)
    }

    pub fn set_bandwidth(&mut self, bandwidth: u16) -> Result<(), ConfigError> {
        let (mantissa, exponent) = bandwidth_to_config(bandwidth)?;
        self.bandwidth_mantissa = mantissa;
        self.bandwidth_exponent = exponent;
        Ok(())
    }

    pub fn max_lna_gain(&self) -> u8 {
        self.max_lna_gain
    }

    pub fn set_max_lna_gain(&mut self, gain: u8) -> Result<(), ConfigError> {
        validate_max_lna_gain(gain)?;
        self.max_lna_gain = gain;
        Ok(())
    }

    pub fn max_dvga_gain(&self) -> u8 {
        self.max_dvga_gain
    }

    pub fn set_max_dvga_gain(&mut self, gain: u8) -> Result<(), ConfigError> {
        validate_max_dvga_gain(gain)?;
        self.max_dvga_gain = gain;
        Ok(())
    }

    pub fn magn_target(&self) -> u8 {
        self.magn_target
    }

    pub fn set_magn_target(&mut self, target: u8) -> Result<(), ConfigError> {
        validate_magn_target(target)?;
        self.magn_target = target;
        Ok(())
    }

    pub fn carrier_sense(&self) -> CarrierSense {
        self.carrier_sense
    }

    pub fn set_carrier_sense(&mut self, carrier_sense: CarrierSense) -> Result<(), ConfigError> {
        carrier_sense.validate()?;
        self.carrier_sense = carrier_sense;
        Ok(())
    }

    pub fn packet_length(&self) -> u32 {
        self.packet_length
    }

    pub fn set_packet_length(&mut self, packet_length: u32) {
        self.packet_length = packet_length;
    }

    /// Serialize to the driver's struct layout
    pub fn to_bytes(&self) -> [u8; RX_CONFIG_SIZE] {
        let mut bytes = [0u8; RX_CONFIG_SIZE];
        let mut buf = &mut bytes[..];

        self.common.write_to(&mut buf);
        buf.put_u8(self.bandwidth_mantissa);
        buf.put_u8(self.bandwidth_exponent);
        buf.put_u8(self.max_lna_gain);
        buf.put_u8(self.max_dvga_gain);
        buf.put_u8(self.magn_target);
        buf.put_u8(self.carrier_sense.mode().code());
        buf.put_i8(self.carrier_sense.threshold());
        buf.put_u8(0);
        buf.put_u32_le(self.packet_length);

        bytes
    }

    /// Deserialize from the driver's struct layout
    ///
    /// Returns `Ok(None)` for an all-zero buffer.
    ///
    /// # Errors
    ///
    /// Any field outside its legal range is rejected. That includes a
    /// disabled carrier sense stored with a nonzero threshold:
    /// [`to_bytes`](Self::to_bytes) always writes 0 there, so such a record
    /// fails with [`ConfigError::InvalidCarrierSense`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Self>, ConfigError> {
        if is_unconfigured(bytes) {
            return Ok(None);
        }

        check_length(bytes, RX_CONFIG_SIZE)?;

        let mut buf = bytes;
        let common = CommonConfig::read_from(&mut buf)?;
        let bandwidth_mantissa = buf.get_u8();
        let bandwidth_exponent = buf.get_u8();
        let max_lna_gain = buf.get_u8();
        let max_dvga_gain = buf.get_u8();
        let magn_target = buf.get_u8();
        let carrier_sense_mode = buf.get_u8();
        let threshold = buf.get_i8();
        buf.advance(1);
        let packet_length = buf.get_u32_le();

        config_to_bandwidth(bandwidth_mantissa, bandwidth_exponent)?;
        validate_max_lna_gain(max_lna_gain)?;
        validate_max_dvga_gain(max_dvga_gain)?;
        validate_magn_target(magn_target)?;

        let mode = CarrierSenseMode::from_code(carrier_sense_mode)?;
        // Disabled is always written with a zero threshold
        if mode == CarrierSenseMode::Disabled && threshold != 0 {
            return Err(ConfigError::InvalidCarrierSense);
        }
        let carrier_sense = CarrierSense::new(mode, threshold)?;

        Ok(Some(Self {
            common,
            bandwidth_mantissa,
            bandwidth_exponent,
            max_lna_gain,
            max_dvga_gain,
            magn_target,
            carrier_sense,
            packet_length,
        }))
    }
}

impl PartialEq for RxConfig {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for RxConfig {}

impl fmt::Display for RxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.common)?;
        writeln!(f, "Bandwidth: {} kHz", self.bandwidth())?;
        writeln!(f, "Packet Length: {}", self.packet_length)?;
        writeln!(f, "Max LNA Gain: -{} dB", self.max_lna_gain)?;
        writeln!(f, "Max DVGA Gain: -{} dB", self.max_dvga_gain)?;
        writeln!(f, "Target Channel Filter Amplitude: {} dB", self.magn_target)?;
        writeln!(f, "Carrier Sense: {}", self.carrier_sense)
    }
}
