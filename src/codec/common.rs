//! # Common Configuration
//!
//! The header shared by RX and TX configurations: carrier frequency,
//! modulation, baud rate, deviation and sync word.
//!
//! Fields are held as register values, so a record always serializes back
//! to exactly the bytes it was read from. Accessors decode on demand.

use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};
use serde::Deserialize;
use thiserror::Error;

use super::convert::{
    baud_rate_to_config, config_to_baud_rate, config_to_deviation, config_to_frequency,
    deviation_khz, deviation_to_config, frequency_to_config, validate_baud_rate_config,
    validate_frequency_config, validate_sync_word,
};
use super::{check_length, is_unconfigured, COMMON_CONFIG_SIZE};
use crate::error::ConfigError;

/// Deviation used when none is given, in kHz
pub const DEFAULT_DEVIATION: f64 = 47.607422;

/// Sync word used when none is given
pub const DEFAULT_SYNC_WORD: u32 = 0x0000;

/// CC1101 modulation format (MDMCFG2.MOD_FORMAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Modulation {
    #[serde(rename = "FSK_2")]
    Fsk2,
    #[serde(rename = "GFSK")]
    Gfsk,
    #[serde(rename = "OOK")]
    Ook,
    #[serde(rename = "FSK_4")]
    Fsk4,
    #[serde(rename = "MSK")]
    Msk,
}

impl Modulation {
    /// Register code for this modulation
    pub fn code(self) -> u8 {
        match self {
            Modulation::Fsk2 => 0,
            Modulation::Gfsk => 1,
            Modulation::Ook => 3,
            Modulation::Fsk4 => 4,
            Modulation::Msk => 7,
        }
    }

    /// Modulation for a register code
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            0 => Ok(Modulation::Fsk2),
            1 => Ok(Modulation::Gfsk),
            3 => Ok(Modulation::Ook),
            4 => Ok(Modulation::Fsk4),
            7 => Ok(Modulation::Msk),
            other => Err(ConfigError::InvalidModulation(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Modulation::Fsk2 => "FSK_2",
            Modulation::Gfsk => "GFSK",
            Modulation::Ook => "OOK",
            Modulation::Fsk4 => "FSK_4",
            Modulation::Msk => "MSK",
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised modulation name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modulation: {0}")]
pub struct ParseModulationError(String);

impl FromStr for Modulation {
    type Err = ParseModulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FSK_2" => Ok(Modulation::Fsk2),
            "GFSK" => Ok(Modulation::Gfsk),
            "OOK" => Ok(Modulation::Ook),
            "FSK_4" => Ok(Modulation::Fsk4),
            "MSK" => Ok(Modulation::Msk),
            other => Err(ParseModulationError(other.to_string())),
        }
    }
}

/// Configuration shared by RX and TX
///
/// ```text
/// offset  size  field
/// 0       4     frequency register (u32 LE)
/// 4       1     modulation code
/// 5       1     baud rate mantissa
/// 6       1     baud rate exponent
/// 7       1     deviation mantissa
/// 8       1     deviation exponent
/// 9       3     padding
/// 12      4     sync word (u32 LE)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CommonConfig {
    frequency: u32,
    modulation: Modulation,
    baud_rate_mantissa: u8,
    baud_rate_exponent: u8,
    deviation_mantissa: u8,
    deviation_exponent: u8,
    sync_word: u32,
}

impl CommonConfig {
    /// Create a validated common configuration
    ///
    /// # Arguments
    ///
    /// * `frequency` - Carrier frequency in MHz
    /// * `modulation` - Modulation format
    /// * `baud_rate` - Baud rate in kBaud, range depends on `modulation`
    /// * `deviation` - Frequency deviation in kHz, one of [`supported_deviations`](super::supported_deviations)
    /// * `sync_word` - 16-bit sync word, or a 32-bit word with matching halves
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn new(
        frequency: f64,
        modulation: Modulation,
        baud_rate: f64,
        deviation: f64,
        sync_word: u32,
    ) -> Result<Self, ConfigError> {
        let frequency = frequency_to_config(frequency)?;
        let (baud_rate_mantissa, baud_rate_exponent) = baud_rate_to_config(modulation, baud_rate)?;
        let (deviation_mantissa, deviation_exponent) = deviation_to_config(deviation)?;
        validate_sync_word(sync_word)?;

        Ok(Self {
            frequency,
            modulation,
            baud_rate_mantissa,
            baud_rate_exponent,
            deviation_mantissa,
            deviation_exponent,
            sync_word,
        })
    }

    /// Create a common configuration with the default deviation and sync word
    pub fn with_defaults(
        frequency: f64,
        modulation: Modulation,
        baud_rate: f64,
    ) -> Result<Self, ConfigError> {
        Self::new(frequency, modulation, baud_rate, DEFAULT_DEVIATION, DEFAULT_SYNC_WORD)
    }

    /// Carrier frequency in MHz
    pub fn frequency(&self) -> f64 {
        config_to_frequency(self.frequency)
    }

    /// FREQ register word
    pub fn frequency_config(&self) -> u32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ConfigError> {
        self.frequency = frequency_to_config(frequency)?;
        Ok(())
    }

    pub fn modulation(&self) -> Modulation {
        self.modulation
    }

    /// Change the modulation
    ///
    /// Fails with [`ConfigError::InvalidBaudRate`] if the current baud rate is
    /// outside the range of the new modulation.
    pub fn set_modulation(&mut self, modulation: Modulation) -> Result<(), ConfigError> {
        validate_baud_rate_config(modulation, self.baud_rate_mantissa, self.baud_rate_exponent)?;
        self.modulation = modulation;
        Ok(())
    }

    /// Baud rate in kBaud
    pub fn baud_rate(&self) -> f64 {
        config_to_baud_rate(self.baud_rate_mantissa, self.baud_rate_exponent)
    }

    /// Baud rate `(mantissa, exponent)`
    pub fn baud_rate_config(&self) -> (u8, u8) {
        (self.baud_rate_mantissa, self.baud_rate_exponent)
    }

    pub fn set_baud_rate(&mut self, baud_rate: f64) -> Result<(), ConfigError> {
        let (mantissa, exponent) = baud_rate_to_config(self.modulation, baud_rate)?;
        self.baud_rate_mantissa = mantissa;
        self.baud_rate_exponent = exponent;
        Ok(())
    }

    /// Frequency deviation in kHz
    pub fn deviation(&self) -> f64 {
        deviation_khz(self.deviation_mantissa, self.deviation_exponent)
    }

    /// Deviation `(mantissa, exponent)`
    pub fn deviation_config(&self) -> (u8, u8) {
        (self.deviation_mantissa, self.deviation_exponent)
    }

    pub fn set_deviation(&mut self, deviation: f64) -> Result<(), ConfigError> {
        let (mantissa, exponent) = deviation_to_config(deviation)?;
        self.deviation_mantissa = mantissa;
        self.deviation_exponent = exponent;
        Ok(())
    }

    pub fn sync_word(&self) -> u32 {
        self.sync_word
    }

    pub fn set_sync_word(&mut self, sync_word: u32) -> Result<(), ConfigError> {
        validate_sync_word(sync_word)?;
        self.sync_word = sync_word;
        Ok(())
    }

    /// Serialize to the driver's struct layout
    pub fn to_bytes(&self) -> [u8; COMMON_CONFIG_SIZE] {
        let mut bytes = [0u8; COMMON_CONFIG_SIZE];
        self.write_to(&mut &mut bytes[..]);
        bytes
    }

    /// Deserialize from the driver's struct layout
    ///
    /// # Returns
    ///
    /// `Ok(None)` if every byte is zero (nothing configured)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] for a buffer of the wrong size,
    /// or the validation error of the first out-of-range field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Self>, ConfigError> {
        if is_unconfigured(bytes) {
            return Ok(None);
        }

        check_length(bytes, COMMON_CONFIG_SIZE)?;

        let mut buf = bytes;
        Self::read_from(&mut buf).map(Some)
    }

    pub(crate) fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.frequency);
        buf.put_u8(self.modulation.code());
        buf.put_u8(self.baud_rate_mantissa);
        buf.put_u8(self.baud_rate_exponent);
        buf.put_u8(self.deviation_mantissa);
        buf.put_u8(self.deviation_exponent);
        buf.put_bytes(0, 3);
        buf.put_u32_le(self.sync_word);
    }

    pub(crate) fn read_from<B: Buf>(buf: &mut B) -> Result<Self, ConfigError> {
        let frequency = buf.get_u32_le();
        let modulation = buf.get_u8();
        let baud_rate_mantissa = buf.get_u8();
        let baud_rate_exponent = buf.get_u8();
        let deviation_mantissa = buf.get_u8();
        let deviation_exponent = buf.get_u8();
        buf.advance(3);
        let sync_word = buf.get_u32_le();

        validate_frequency_config(frequency)?;
        let modulation = Modulation::from_code(modulation)?;
        validate_baud_rate_config(modulation, baud_rate_mantissa, baud_rate_exponent)?;
        config_to_deviation(deviation_mantissa, deviation_exponent)?;
        validate_sync_word(sync_word)?;

        Ok(Self {
            frequency,
            modulation,
            baud_rate_mantissa,
            baud_rate_exponent,
            deviation_mantissa,
            deviation_exponent,
            sync_word,
        })
    }
}

impl PartialEq for CommonConfig {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for CommonConfig {}

impl fmt::Display for CommonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequency: {} MHz", self.frequency())?;
        writeln!(f, "Modulation: {}", self.modulation)?;
        writeln!(f, "Baud Rate: {} kBaud", self.baud_rate())?;
        writeln!(f, "Deviation: {} kHz", self.deviation())?;
        writeln!(f, "Sync Word: 0x{:08X}", self.sync_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommonConfig {
        CommonConfig::new(433.92, Modulation::Ook, 1.2, DEFAULT_DEVIATION, 0xD391).unwrap()
    }

    #[test]
    fn test_new_stores_register_values() {
        let config = sample();
        assert_eq!(config.frequency_config(), 0x0010B071);
        assert_eq!(config.modulation(), Modulation::Ook);
        assert_eq!(config.deviation_config(), (0x07, 0x04));
        assert_eq!(config.deviation(), DEFAULT_DEVIATION);
        assert_eq!(config.sync_word(), 0xD391);
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        assert_eq!(
            CommonConfig::new(999.0, Modulation::Fsk2, 1.2, DEFAULT_DEVIATION, 0).unwrap_err(),
            ConfigError::InvalidFrequency
        );
        assert_eq!(
            CommonConfig::new(433.0, Modulation::Gfsk, 300.0, DEFAULT_DEVIATION, 0).unwrap_err(),
            ConfigError::InvalidBaudRate
        );
        assert_eq!(
            CommonConfig::new(433.0, Modulation::Fsk2, 1.2, 50.0, 0).unwrap_err(),
            ConfigError::InvalidDeviation
        );
        assert_eq!(
            CommonConfig::new(433.0, Modulation::Fsk2, 1.2, DEFAULT_DEVIATION, 0x1234_5678)
                .unwrap_err(),
            ConfigError::InvalidSyncWord
        );
    }

    #[test]
    fn test_with_defaults() {
        let config = CommonConfig::with_defaults(868.0, Modulation::Gfsk, 38.4).unwrap();
        assert_eq!(config.deviation(), DEFAULT_DEVIATION);
        assert_eq!(config.sync_word(), DEFAULT_SYNC_WORD);
    }

    #[test]
    fn test_frequency_accessor_decodes_register() {
        let config = CommonConfig::with_defaults(315.0, Modulation::Fsk2, 1.2).unwrap();
        assert_eq!(config.frequency_config(), 0x000C1D89);
        assert_eq!(config.frequency(), 314.999664);
    }

    #[test]
    fn test_setters_validate() {
        let mut config = sample();

        assert_eq!(config.set_frequency(500.0), Err(ConfigError::InvalidFrequency));
        assert_eq!(config.frequency_config(), 0x0010B071);

        config.set_frequency(868.0).unwrap();
        assert_eq!(config.frequency_config(), 0x00216276);

        config.set_baud_rate(0.6).unwrap();
        assert_eq!(config.baud_rate_config(), (0x83, 0x04));
        assert_eq!(config.set_baud_rate(999.0), Err(ConfigError::InvalidBaudRate));

        config.set_deviation(1.586914).unwrap();
        assert_eq!(config.deviation_config(), (0x00, 0x00));

        assert_eq!(config.set_sync_word(0xAAAA5555), Err(ConfigError::InvalidSyncWord));
        config.set_sync_word(0x5555_5555).unwrap();
        assert_eq!(config.sync_word(), 0x5555_5555);
    }

    #[test]
    fn test_set_modulation_checks_baud_rate() {
        let mut config = CommonConfig::with_defaults(433.0, Modulation::Fsk2, 400.0).unwrap();
        assert_eq!(config.set_modulation(Modulation::Gfsk), Err(ConfigError::InvalidBaudRate));
        assert_eq!(config.modulation(), Modulation::Fsk2);

        config.set_baud_rate(100.0).unwrap();
        config.set_modulation(Modulation::Gfsk).unwrap();
        assert_eq!(config.modulation(), Modulation::Gfsk);
    }

    #[test]
    fn test_to_bytes_layout() {
        let bytes = sample().to_bytes();
        assert_eq!(&bytes[0..4], &[0x71, 0xB0, 0x10, 0x00]);
        assert_eq!(bytes[4], 3);
        assert_eq!(&bytes[7..9], &[0x07, 0x04]);
        assert_eq!(&bytes[9..12], &[0, 0, 0]);
        assert_eq!(&bytes[12..16], &[0x91, 0xD3, 0x00, 0x00]);
    }

    #[test]
    fn test_bytes_round_trip() {
        let config = sample();
        let decoded = CommonConfig::from_bytes(&config.to_bytes()).unwrap().unwrap();
        assert_eq!(decoded, config);
        assert_eq!(decoded.to_bytes(), config.to_bytes());
    }

    #[test]
    fn test_all_zero_is_unconfigured() {
        assert_eq!(CommonConfig::from_bytes(&[0u8; COMMON_CONFIG_SIZE]).unwrap(), None);
        assert_eq!(CommonConfig::from_bytes(&[0u8; 12]).unwrap(), None);
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        let bytes = sample().to_bytes();
        assert_eq!(
            CommonConfig::from_bytes(&bytes[..12]),
            Err(ConfigError::InvalidLength { expected: 16, actual: 12 })
        );
    }

    #[test]
    fn test_from_bytes_rejects_bad_registers() {
        let mut bytes = sample().to_bytes();
        bytes[4] = 2;
        assert_eq!(CommonConfig::from_bytes(&bytes), Err(ConfigError::InvalidModulation(2)));

        let mut bytes = sample().to_bytes();
        bytes[0..4].copy_from_slice(&0x0000_0001u32.to_le_bytes());
        assert_eq!(CommonConfig::from_bytes(&bytes), Err(ConfigError::InvalidFrequency));

        let mut bytes = sample().to_bytes();
        bytes[8] = 8;
        assert_eq!(CommonConfig::from_bytes(&bytes), Err(ConfigError::InvalidDeviation));

        let mut bytes = sample().to_bytes();
        bytes[6] = 0x0F;
        assert_eq!(CommonConfig::from_bytes(&bytes), Err(ConfigError::InvalidBaudRate));

        let mut bytes = sample().to_bytes();
        bytes[12..16].copy_from_slice(&0x1234_5678u32.to_le_bytes());
        assert_eq!(CommonConfig::from_bytes(&bytes), Err(ConfigError::InvalidSyncWord));
    }

    #[test]
    fn test_modulation_codes() {
        for modulation in [
            Modulation::Fsk2,
            Modulation::Gfsk,
            Modulation::Ook,
            Modulation::Fsk4,
            Modulation::Msk,
        ] {
            assert_eq!(Modulation::from_code(modulation.code()).unwrap(), modulation);
            assert_eq!(modulation.to_string().parse::<Modulation>().unwrap(), modulation);
        }

        assert_eq!(Modulation::from_code(5), Err(ConfigError::InvalidModulation(5)));
        assert!("ASK".parse::<Modulation>().is_err());
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("Frequency: 433.91983 MHz\n"));
        assert!(text.contains("Modulation: OOK\n"));
        assert!(text.contains("Deviation: 47.607422 kHz\n"));
        assert!(text.ends_with("Sync Word: 0x0000D391\n"));
    }
}
