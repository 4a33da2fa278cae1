//! # CC1101 Config
//!
//! Register configuration codec for the TI CC1101 sub-GHz transceiver driver.
//!
//! This library converts human radio parameters (frequency in MHz, baud rate
//! in kBaud, deviation and bandwidth in kHz, TX power in dBm) into the
//! mantissa/exponent register values the chip uses, and packs them into the
//! RX and TX configuration structs the kernel driver exchanges.
//!
//! ```
//! use cc1101_config::codec::{CommonConfig, Modulation, RxConfig};
//!
//! let common = CommonConfig::with_defaults(433.92, Modulation::Ook, 1.2)?;
//! let rx = RxConfig::new(common, 64)?;
//!
//! let bytes = rx.to_bytes();
//! assert_eq!(RxConfig::from_bytes(&bytes)?, Some(rx));
//! # Ok::<(), cc1101_config::error::ConfigError>(())
//! ```

pub mod codec;
pub mod dump;
pub mod error;
pub mod link;
pub mod profile;

pub use codec::{CommonConfig, Modulation, RxConfig, TxConfig};
pub use error::{Cc1101Error, ConfigError, Result};
