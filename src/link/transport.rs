//! Trait abstraction for the driver's register interface to enable testing

use std::io;

use crate::codec::{RX_CONFIG_SIZE, TX_CONFIG_SIZE};
use crate::dump::CONFIG_SIZE;

/// Configuration block exchanged with the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigBlock {
    /// Packed RX configuration
    Rx,
    /// Packed TX configuration
    Tx,
    /// Live device registers
    DeviceRegisters,
    /// Registers the driver programs for RX
    RxRegisters,
    /// Registers the driver programs for TX
    TxRegisters,
}

impl ConfigBlock {
    /// Size in bytes of the block
    pub fn size(self) -> usize {
        match self {
            ConfigBlock::Rx => RX_CONFIG_SIZE,
            ConfigBlock::Tx => TX_CONFIG_SIZE,
            ConfigBlock::DeviceRegisters | ConfigBlock::RxRegisters | ConfigBlock::TxRegisters => {
                CONFIG_SIZE
            }
        }
    }
}

/// Byte transport to the CC1101 driver (ioctl, character device, test double)
///
/// Implementations move whole blocks of exactly [`ConfigBlock::size`] bytes
/// and report failures as I/O errors.
#[cfg_attr(test, mockall::automock)]
pub trait RegisterTransport {
    /// Write a configuration block
    fn write_block(&mut self, block: ConfigBlock, data: &[u8]) -> io::Result<()>;

    /// Read a block into `buf`
    fn read_block(&mut self, block: ConfigBlock, buf: &mut [u8]) -> io::Result<()>;
}
