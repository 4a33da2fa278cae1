//! # Radio Profiles
//!
//! Loads RX/TX settings in human units from TOML files and turns them into
//! validated [`RxConfig`]/[`TxConfig`] records.
//!
//! ```toml
//! [rx]
//! frequency = 433.92
//! modulation = "OOK"
//! baud_rate = 1.2
//! packet_length = 64
//! carrier_sense_mode = "absolute"
//! carrier_sense = -3
//!
//! [tx]
//! frequency = 433.92
//! modulation = "OOK"
//! baud_rate = 1.2
//! tx_power = 9.9
//! ```

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::codec::{
    CarrierSense, CarrierSenseMode, CommonConfig, Modulation, RxConfig, TxConfig,
    DEFAULT_BANDWIDTH, DEFAULT_CARRIER_SENSE, DEFAULT_DEVIATION, DEFAULT_MAGN_TARGET,
    DEFAULT_MAX_DVGA_GAIN, DEFAULT_MAX_LNA_GAIN, DEFAULT_SYNC_WORD,
};
use crate::error::{Cc1101Error, Result};

/// Profile file with optional RX and TX sections
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RadioProfile {
    #[serde(default)]
    pub rx: Option<RxProfile>,

    #[serde(default)]
    pub tx: Option<TxProfile>,
}

/// Settings shared by both sections
#[derive(Debug, Deserialize, Clone)]
pub struct CommonProfile {
    /// Carrier frequency in MHz
    pub frequency: f64,

    pub modulation: Modulation,

    /// Baud rate in kBaud
    pub baud_rate: f64,

    /// Frequency deviation in kHz
    #[serde(default = "default_deviation")]
    pub deviation: f64,

    #[serde(default = "default_sync_word")]
    pub sync_word: u32,
}

/// `[rx]` section
#[derive(Debug, Deserialize, Clone)]
pub struct RxProfile {
    #[serde(flatten)]
    pub common: CommonProfile,

    pub packet_length: u32,

    /// Channel filter bandwidth in kHz
    #[serde(default = "default_bandwidth")]
    pub bandwidth: u16,

    #[serde(default = "default_carrier_sense_mode")]
    pub carrier_sense_mode: CarrierSenseMode,

    /// Threshold in dB, ignored when carrier sense is disabled
    #[serde(default = "default_carrier_sense")]
    pub carrier_sense: i8,

    #[serde(default = "default_max_lna_gain")]
    pub max_lna_gain: u8,

    #[serde(default = "default_max_dvga_gain")]
    pub max_dvga_gain: u8,

    #[serde(default = "default_magn_target")]
    pub magn_target: u8,
}

/// `[tx]` section
///
/// Exactly one of `tx_power` (dBm) or `tx_power_raw` (PA byte) must be set.
#[derive(Debug, Deserialize, Clone)]
pub struct TxProfile {
    #[serde(flatten)]
    pub common: CommonProfile,

    #[serde(default)]
    pub tx_power: Option<f64>,

    #[serde(default)]
    pub tx_power_raw: Option<u8>,
}

// Default value functions
fn default_deviation() -> f64 { DEFAULT_DEVIATION }
fn default_sync_word() -> u32 { DEFAULT_SYNC_WORD }

fn default_bandwidth() -> u16 { DEFAULT_BANDWIDTH }
fn default_carrier_sense_mode() -> CarrierSenseMode { DEFAULT_CARRIER_SENSE.mode() }
fn default_carrier_sense() -> i8 { DEFAULT_CARRIER_SENSE.threshold() }
fn default_max_lna_gain() -> u8 { DEFAULT_MAX_LNA_GAIN }
fn default_max_dvga_gain() -> u8 { DEFAULT_MAX_DVGA_GAIN }
fn default_magn_target() -> u8 { DEFAULT_MAGN_TARGET }

impl CommonProfile {
    pub fn to_config(&self) -> Result<CommonConfig> {
        let config = CommonConfig::new(
            self.frequency,
            self.modulation,
            self.baud_rate,
            self.deviation,
            self.sync_word,
        )?;
        Ok(config)
    }
}

impl RxProfile {
    /// Build the RX configuration this section describes
    pub fn to_config(&self) -> Result<RxConfig> {
        let carrier_sense = CarrierSense::new(self.carrier_sense_mode, self.carrier_sense)?;

        let config = RxConfig::with_settings(
            self.common.to_config()?,
            self.bandwidth,
            carrier_sense,
            self.max_lna_gain,
            self.max_dvga_gain,
            self.magn_target,
            self.packet_length,
        )?;
        Ok(config)
    }
}

impl TxProfile {
    /// Build the TX configuration this section describes
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Both or neither of `tx_power` and `tx_power_raw` are set
    /// - Any value fails validation, including a dBm value missing from the
    ///   band's power table
    pub fn to_config(&self) -> Result<TxConfig> {
        match (self.tx_power, self.tx_power_raw) {
            (Some(dbm), None) => {
                let common = &self.common;
                let config = TxConfig::from_ism(
                    common.frequency,
                    common.modulation,
                    common.baud_rate,
                    dbm,
                    common.deviation,
                    common.sync_word,
                )?;
                Ok(config)
            }
            (None, Some(raw)) => Ok(TxConfig::new(self.common.to_config()?, raw)),
            (Some(_), Some(_)) => Err(Cc1101Error::Profile(toml::de::Error::custom(
                "tx_power and tx_power_raw are mutually exclusive",
            ))),
            (None, None) => Err(Cc1101Error::Profile(toml::de::Error::custom(
                "tx section needs tx_power or tx_power_raw",
            ))),
        }
    }
}

impl RadioProfile {
    /// Load a profile from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the profile
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cc1101_config::profile::RadioProfile;
    ///
    /// let profile = RadioProfile::load("profiles/433_ook.toml")?;
    /// let rx = profile.rx_config()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&contents)?;

        debug!(
            "Loaded radio profile {} (rx: {}, tx: {})",
            path.display(),
            profile.rx.is_some(),
            profile.tx.is_some()
        );
        Ok(profile)
    }

    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let profile: RadioProfile = toml::from_str(contents)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validate every section by building its configuration
    fn validate(&self) -> Result<()> {
        if self.rx.is_none() && self.tx.is_none() {
            return Err(Cc1101Error::Profile(toml::de::Error::custom(
                "profile needs an [rx] or [tx] section",
            )));
        }

        if let Err(e) = self.rx_config() {
            warn!("Rejected [rx] section: {}", e);
            return Err(e);
        }

        if let Err(e) = self.tx_config() {
            warn!("Rejected [tx] section: {}", e);
            return Err(e);
        }

        Ok(())
    }

    /// RX configuration, if the profile has an `[rx]` section
    pub fn rx_config(&self) -> Result<Option<RxConfig>> {
        self.rx.as_ref().map(RxProfile::to_config).transpose()
    }

    /// TX configuration, if the profile has a `[tx]` section
    pub fn tx_config(&self) -> Result<Option<TxConfig>> {
        self.tx.as_ref().map(TxProfile::to_config).transpose()
    }
}
