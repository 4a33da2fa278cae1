//! # TX Configuration
//!
//! Transmit settings layered on [`CommonConfig`]. The only extra field is the
//! raw PATABLE byte; its output power in dBm depends on the ISM band, see
//! [`patable`](super::patable).

use std::fmt;

use bytes::{Buf, BufMut};

use super::common::{CommonConfig, Modulation};
use super::patable::{config_to_tx_power, get_power_table, tx_power_to_config, IsmBand, PowerTable};
use super::{check_length, is_unconfigured, TX_CONFIG_SIZE};
use crate::error::ConfigError;

/// Transmit configuration
///
/// Serialized as the common header, the PA byte at offset 16 and three
/// bytes of padding.
#[derive(Debug, Clone, Copy)]
pub struct TxConfig {
    common: CommonConfig,
    tx_power: u8,
}

impl TxConfig {
    /// Create a TX configuration from a raw PA byte
    pub fn new(common: CommonConfig, tx_power: u8) -> Self {
        Self { common, tx_power }
    }

    /// Create a TX configuration for an ISM band frequency and a power in dBm
    ///
    /// # Arguments
    ///
    /// * `frequency` - Carrier frequency in MHz, within 1 MHz of 315, 433, 868 or 915 MHz
    /// * `modulation` - Modulation format
    /// * `baud_rate` - Baud rate in kBaud
    /// * `tx_power` - Output power in dBm, as listed in the band's power table
    /// * `deviation` - Frequency deviation in kHz
    /// * `sync_word` - Sync word
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidFrequency`] - Not near an ISM band
    /// * [`ConfigError::InvalidTxPower`] - Power not in the band's table
    /// * Any error from [`CommonConfig::new`]
    ///
    /// # Examples
    ///
    /// ```
    /// use cc1101_config::codec::{Modulation, TxConfig, DEFAULT_DEVIATION};
    ///
    /// let config = TxConfig::from_ism(433.92, Modulation::Ook, 1.2, 9.9, DEFAULT_DEVIATION, 0).unwrap();
    /// assert_eq!(config.tx_power(), 0xC0);
    /// ```
    pub fn from_ism(
        frequency: f64,
        modulation: Modulation,
        baud_rate: f64,
        tx_power: f64,
        deviation: f64,
        sync_word: u32,
    ) -> Result<Self, ConfigError> {
        let table = get_power_table(frequency)?;
        let tx_power = tx_power_to_config(&table, tx_power)?;
        let common = CommonConfig::new(frequency, modulation, baud_rate, deviation, sync_word)?;

        Ok(Self { common, tx_power })
    }

    pub fn common(&self) -> &CommonConfig {
        &self.common
    }

    pub fn common_mut(&mut self) -> &mut CommonConfig {
        &mut self.common
    }

    /// Raw PA byte
    pub fn tx_power(&self) -> u8 {
        self.tx_power
    }

    pub fn set_tx_power(&mut self, tx_power: u8) {
        self.tx_power = tx_power;
    }

    /// Power table for the configured frequency, if it is in an ISM band
    ///
    /// The band is matched on the FREQ register word, so every frequency
    /// [`from_ism`](Self::from_ism) accepts keeps its table.
    pub fn power_table(&self) -> Option<PowerTable> {
        IsmBand::from_frequency_config(self.common.frequency_config()).map(IsmBand::power_table)
    }

    /// Output power in dBm for the configured frequency
    pub fn tx_power_dbm(&self) -> Result<f64, ConfigError> {
        let table = self.band_power_table()?;
        config_to_tx_power(&table, self.tx_power)
    }

    /// Set the PA byte from an output power in dBm for the configured frequency
    pub fn set_tx_power_dbm(&mut self, tx_power: f64) -> Result<(), ConfigError> {
        let table = self.band_power_table()?;
        self.tx_power = tx_power_to_config(&table, tx_power)?;
        Ok(())
    }

    fn band_power_table(&self) -> Result<PowerTable, ConfigError> {
        self.power_table().ok_or(ConfigError::InvalidFrequency)
    }

    /// Serialize to the driver's struct layout
    pub fn to_bytes(&self) -> [u8; TX_CONFIG_SIZE] {
        let mut bytes = [0u8; TX_CONFIG_SIZE];
        let mut buf = &mut bytes[..];

        self.common.write_to(&mut buf);
        buf.put_u8(self.tx_power);
        buf.put_bytes(0, 3);

        bytes
    }

    /// Deserialize from the driver's struct layout
    ///
    /// Returns `Ok(None)` for an all-zero buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Option<Self>, ConfigError> {
        if is_unconfigured(bytes) {
            return Ok(None);
        }

        check_length(bytes, TX_CONFIG_SIZE)?;

        let mut buf = bytes;
        let common = CommonConfig::read_from(&mut buf)?;
        let tx_power = buf.get_u8();

        Ok(Some(Self { common, tx_power }))
    }
}

impl PartialEq for TxConfig {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for TxConfig {}

impl fmt::Display for TxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.common)?;

        match self.tx_power_dbm() {
            Ok(dbm) => writeln!(f, "TX Power: {} dBm", dbm),
            Err(_) => writeln!(f, "TX Power: 0x{:02X}", self.tx_power),
        }
    }
}
