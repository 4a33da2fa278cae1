//! # Register Link
//!
//! Moves typed configurations to and from the CC1101 driver over a
//! [`RegisterTransport`].
//!
//! This module handles:
//! - Writing packed RX/TX configurations
//! - Reading them back, with all-zero blocks reported as not configured
//! - Reading raw register dumps (device, RX and TX)
//!
//! No retries are attempted; transport errors are returned as-is.

pub mod transport;

pub use transport::{ConfigBlock, RegisterTransport};

use tracing::{debug, trace};

use crate::codec::{RxConfig, TxConfig};
use crate::dump::RegisterDump;
use crate::error::Result;

/// Typed access to the driver's configuration blocks
pub struct RadioLink<T: RegisterTransport> {
    transport: T,
}

impl<T: RegisterTransport> std::fmt::Debug for RadioLink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioLink").finish_non_exhaustive()
    }
}

impl<T: RegisterTransport> RadioLink<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Write an RX configuration to the driver
    ///
    /// # Errors
    ///
    /// Returns [`Cc1101Error::Io`](crate::error::Cc1101Error::Io) if the
    /// transport rejects the write
    pub fn set_rx_config(&mut self, config: &RxConfig) -> Result<()> {
        self.transport.write_block(ConfigBlock::Rx, &config.to_bytes())?;
        debug!(
            "Wrote RX config ({:.6} MHz, {} kBaud)",
            config.common().frequency(),
            config.common().baud_rate()
        );
        Ok(())
    }

    /// Write a TX configuration to the driver
    pub fn set_tx_config(&mut self, config: &TxConfig) -> Result<()> {
        self.transport.write_block(ConfigBlock::Tx, &config.to_bytes())?;
        debug!(
            "Wrote TX config ({:.6} MHz, PA 0x{:02X})",
            config.common().frequency(),
            config.tx_power()
        );
        Ok(())
    }

    /// Read the RX configuration held by the driver
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - Driver has no RX configuration
    ///
    /// # Errors
    ///
    /// Returns error if the transport fails or the bytes do not decode to a
    /// valid configuration
    pub fn rx_config(&mut self) -> Result<Option<RxConfig>> {
        let bytes = self.read(ConfigBlock::Rx)?;
        let config = RxConfig::from_bytes(&bytes)?;

        if config.is_none() {
            trace!("RX config not set");
        }
        Ok(config)
    }

    /// Read the TX configuration held by the driver
    pub fn tx_config(&mut self) -> Result<Option<TxConfig>> {
        let bytes = self.read(ConfigBlock::Tx)?;
        let config = TxConfig::from_bytes(&bytes)?;

        if config.is_none() {
            trace!("TX config not set");
        }
        Ok(config)
    }

    /// Current device register values
    pub fn device_registers(&mut self) -> Result<RegisterDump> {
        self.registers(ConfigBlock::DeviceRegisters)
    }

    /// Register values the driver programs for RX
    pub fn rx_registers(&mut self) -> Result<RegisterDump> {
        self.registers(ConfigBlock::RxRegisters)
    }

    /// Register values the driver programs for TX
    pub fn tx_registers(&mut self) -> Result<RegisterDump> {
        self.registers(ConfigBlock::TxRegisters)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn registers(&mut self, block: ConfigBlock) -> Result<RegisterDump> {
        let bytes = self.read(block)?;
        Ok(RegisterDump::from_bytes(&bytes)?)
    }

    fn read(&mut self, block: ConfigBlock) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; block.size()];
        self.transport.read_block(block, &mut buf)?;
        debug!("Read {:?} block ({} bytes)", block, buf.len());
        Ok(buf)
    }
}
