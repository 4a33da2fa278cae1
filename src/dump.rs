//! # Register Dumps
//!
//! Raw register snapshots read back from the driver, either the live device
//! registers or the values it will program for RX/TX.
//!
//! This module handles:
//! - Naming the 47 configuration registers (0x00 IOCFG2 to 0x2E TEST0)
//! - Printing a dump as `NAME: xx` lines
//! - Decoding the fields the codec also manages (frequency, modem, sync word)

use std::fmt;

use crate::codec::convert::{bandwidth_khz, config_to_baud_rate, config_to_frequency, deviation_khz};
use crate::codec::Modulation;
use crate::error::ConfigError;

/// Number of configuration registers in a dump
pub const CONFIG_SIZE: usize = 0x2F;

/// CC1101 configuration register, by address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Register {
    /// GDO2 Output Pin Configuration
    Iocfg2 = 0x00,
    /// GDO1 Output Pin Configuration
    Iocfg1 = 0x01,
    /// GDO0 Output Pin Configuration
    Iocfg0 = 0x02,
    /// RX FIFO and TX FIFO Thresholds
    Fifothr = 0x03,
    /// Sync Word, High Byte
    Sync1 = 0x04,
    /// Sync Word, Low Byte
    Sync0 = 0x05,
    /// Packet Length
    Pktlen = 0x06,
    /// Packet Automation Control
    Pktctrl1 = 0x07,
    /// Packet Automation Control
    Pktctrl0 = 0x08,
    /// Device Address
    Addr = 0x09,
    /// Channel Number
    Channr = 0x0A,
    /// Frequency Synthesizer Control
    Fsctrl1 = 0x0B,
    /// Frequency Synthesizer Control
    Fsctrl0 = 0x0C,
    /// Frequency Control Word, High Byte
    Freq2 = 0x0D,
    /// Frequency Control Word, Middle Byte
    Freq1 = 0x0E,
    /// Frequency Control Word, Low Byte
    Freq0 = 0x0F,
    /// Modem Configuration
    Mdmcfg4 = 0x10,
    /// Modem Configuration
    Mdmcfg3 = 0x11,
    /// Modem Configuration
    Mdmcfg2 = 0x12,
    /// Modem Configuration
    Mdmcfg1 = 0x13,
    /// Modem Configuration
    Mdmcfg0 = 0x14,
    /// Modem Deviation Setting
    Deviatn = 0x15,
    /// Main Radio Control State Machine Configuration
    Mcsm2 = 0x16,
    /// Main Radio Control State Machine Configuration
    Mcsm1 = 0x17,
    /// Main Radio Control State Machine Configuration
    Mcsm0 = 0x18,
    /// Frequency Offset Compensation Configuration
    Foccfg = 0x19,
    /// Bit Synchronization Configuration
    Bscfg = 0x1A,
    /// AGC Control
    Agcctrl2 = 0x1B,
    /// AGC Control
    Agcctrl1 = 0x1C,
    /// AGC Control
    Agcctrl0 = 0x1D,
    /// High Byte Event0 Timeout
    Worevt1 = 0x1E,
    /// Low Byte Event0 Timeout
    Worevt0 = 0x1F,
    /// Wake On Radio Control
    Worctrl = 0x20,
    /// Front End RX Configuration
    Frend1 = 0x21,
    /// Front End TX Configuration
    Frend0 = 0x22,
    /// Frequency Synthesizer Calibration
    Fscal3 = 0x23,
    /// Frequency Synthesizer Calibration
    Fscal2 = 0x24,
    /// Frequency Synthesizer Calibration
    Fscal1 = 0x25,
    /// Frequency Synthesizer Calibration
    Fscal0 = 0x26,
    /// RC Oscillator Configuration
    Rcctrl1 = 0x27,
    /// RC Oscillator Configuration
    Rcctrl0 = 0x28,
    /// Frequency Synthesizer Calibration Control
    Fstest = 0x29,
    /// Production Test
    Ptest = 0x2A,
    /// AGC Test
    Agctest = 0x2B,
    /// Various Test Settings
    Test2 = 0x2C,
    /// Various Test Settings
    Test1 = 0x2D,
    /// Various Test Settings
    Test0 = 0x2E,
}

impl Register {
    /// Every register in address order
    pub const ALL: [Register; CONFIG_SIZE] = [
        Register::Iocfg2,
        Register::Iocfg1,
        Register::Iocfg0,
        Register::Fifothr,
        Register::Sync1,
        Register::Sync0,
        Register::Pktlen,
        Register::Pktctrl1,
        Register::Pktctrl0,
        Register::Addr,
        Register::Channr,
        Register::Fsctrl1,
        Register::Fsctrl0,
        Register::Freq2,
        Register::Freq1,
        Register::Freq0,
        Register::Mdmcfg4,
        Register::Mdmcfg3,
        Register::Mdmcfg2,
        Register::Mdmcfg1,
        Register::Mdmcfg0,
        Register::Deviatn,
        Register::Mcsm2,
        Register::Mcsm1,
        Register::Mcsm0,
        Register::Foccfg,
        Register::Bscfg,
        Register::Agcctrl2,
        Register::Agcctrl1,
        Register::Agcctrl0,
        Register::Worevt1,
        Register::Worevt0,
        Register::Worctrl,
        Register::Frend1,
        Register::Frend0,
        Register::Fscal3,
        Register::Fscal2,
        Register::Fscal1,
        Register::Fscal0,
        Register::Rcctrl1,
        Register::Rcctrl0,
        Register::Fstest,
        Register::Ptest,
        Register::Agctest,
        Register::Test2,
        Register::Test1,
        Register::Test0,
    ];

    pub fn address(self) -> u8 {
        self as u8
    }

    pub fn from_address(address: u8) -> Option<Self> {
        Self::ALL.get(address as usize).copied()
    }

    /// Datasheet name
    pub fn name(self) -> &'static str {
        match self {
            Register::Iocfg2 => "IOCFG2",
            Register::Iocfg1 => "IOCFG1",
            Register::Iocfg0 => "IOCFG0",
            Register::Fifothr => "FIFOTHR",
            Register::Sync1 => "SYNC1",
            Register::Sync0 => "SYNC0",
            Register::Pktlen => "PKTLEN",
            Register::Pktctrl1 => "PKTCTRL1",
            Register::Pktctrl0 => "PKTCTRL0",
            Register::Addr => "ADDR",
            Register::Channr => "CHANNR",
            Register::Fsctrl1 => "FSCTRL1",
            Register::Fsctrl0 => "FSCTRL0",
            Register::Freq2 => "FREQ2",
            Register::Freq1 => "FREQ1",
            Register::Freq0 => "FREQ0",
            Register::Mdmcfg4 => "MDMCFG4",
            Register::Mdmcfg3 => "MDMCFG3",
            Register::Mdmcfg2 => "MDMCFG2",
            Register::Mdmcfg1 => "MDMCFG1",
            Register::Mdmcfg0 => "MDMCFG0",
            Register::Deviatn => "DEVIATN",
            Register::Mcsm2 => "MCSM2",
            Register::Mcsm1 => "MCSM1",
            Register::Mcsm0 => "MCSM0",
            Register::Foccfg => "FOCCFG",
            Register::Bscfg => "BSCFG",
            Register::Agcctrl2 => "AGCCTRL2",
            Register::Agcctrl1 => "AGCCTRL1",
            Register::Agcctrl0 => "AGCCTRL0",
            Register::Worevt1 => "WOREVT1",
            Register::Worevt0 => "WOREVT0",
            Register::Worctrl => "WORCTRL",
            Register::Frend1 => "FREND1",
            Register::Frend0 => "FREND0",
            Register::Fscal3 => "FSCAL3",
            Register::Fscal2 => "FSCAL2",
            Register::Fscal1 => "FSCAL1",
            Register::Fscal0 => "FSCAL0",
            Register::Rcctrl1 => "RCCTRL1",
            Register::Rcctrl0 => "RCCTRL0",
            Register::Fstest => "FSTEST",
            Register::Ptest => "PTEST",
            Register::Agctest => "AGCTEST",
            Register::Test2 => "TEST2",
            Register::Test1 => "TEST1",
            Register::Test0 => "TEST0",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the 47 configuration registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDump {
    registers: [u8; CONFIG_SIZE],
}

impl RegisterDump {
    /// Wrap a dump read from the driver
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] unless exactly [`CONFIG_SIZE`]
    /// bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let registers = <[u8; CONFIG_SIZE]>::try_from(bytes).map_err(|_| {
            ConfigError::InvalidLength {
                expected: CONFIG_SIZE,
                actual: bytes.len(),
            }
        })?;

        Ok(Self { registers })
    }

    pub fn as_bytes(&self) -> &[u8; CONFIG_SIZE] {
        &self.registers
    }

    pub fn get(&self, register: Register) -> u8 {
        self.registers[register as usize]
    }

    /// Registers with their values, in address order
    pub fn iter(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        Register::ALL.iter().map(move |&register| (register, self.get(register)))
    }

    /// FREQ2:FREQ1:FREQ0 word
    pub fn frequency_config(&self) -> u32 {
        u32::from_be_bytes([
            0,
            self.get(Register::Freq2),
            self.get(Register::Freq1),
            self.get(Register::Freq0),
        ])
    }

    /// Carrier frequency in MHz
    pub fn frequency(&self) -> f64 {
        config_to_frequency(self.frequency_config())
    }

    /// MDMCFG2.MOD_FORMAT
    pub fn modulation(&self) -> Result<Modulation, ConfigError> {
        Modulation::from_code((self.get(Register::Mdmcfg2) >> 4) & 0x07)
    }

    /// Baud rate `(mantissa, exponent)` from MDMCFG3 and MDMCFG4[3:0]
    pub fn baud_rate_config(&self) -> (u8, u8) {
        (self.get(Register::Mdmcfg3), self.get(Register::Mdmcfg4) & 0x0F)
    }

    /// Baud rate in kBaud
    pub fn baud_rate(&self) -> f64 {
        let (mantissa, exponent) = self.baud_rate_config();
        config_to_baud_rate(mantissa, exponent)
    }

    /// Channel bandwidth `(mantissa, exponent)` from MDMCFG4[5:4] and MDMCFG4[7:6]
    pub fn bandwidth_config(&self) -> (u8, u8) {
        let mdmcfg4 = self.get(Register::Mdmcfg4);
        ((mdmcfg4 >> 4) & 0x03, mdmcfg4 >> 6)
    }

    /// Channel filter bandwidth in kHz
    pub fn bandwidth(&self) -> u16 {
        let (mantissa, exponent) = self.bandwidth_config();
        bandwidth_khz(mantissa, exponent)
    }

    /// Deviation `(mantissa, exponent)` from DEVIATN[2:0] and DEVIATN[6:4]
    pub fn deviation_config(&self) -> (u8, u8) {
        let deviatn = self.get(Register::Deviatn);
        (deviatn & 0x07, (deviatn >> 4) & 0x07)
    }

    /// Frequency deviation in kHz
    pub fn deviation(&self) -> f64 {
        let (mantissa, exponent) = self.deviation_config();
        deviation_khz(mantissa, exponent)
    }

    /// SYNC1:SYNC0
    pub fn sync_word(&self) -> u16 {
        u16::from_be_bytes([self.get(Register::Sync1), self.get(Register::Sync0)])
    }

    pub fn packet_length(&self) -> u8 {
        self.get(Register::Pktlen)
    }
}

impl fmt::Display for RegisterDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (register, value) in self.iter() {
            writeln!(f, "{}: {:02x}", register, value)?;
        }
        Ok(())
    }
}
