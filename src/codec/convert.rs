//! # Register Value Conversions
//!
//! Maps physical radio parameters to and from the register encodings the
//! CC1101 stores. Every quantity has a `*_to_config` / `config_to_*` pair
//! plus a validator, all pure functions.
//!
//! All formulas assume the 26 MHz crystal fitted to common CC1101 modules:
//!
//! | Quantity  | Register form                    | Formula                                   |
//! |-----------|----------------------------------|-------------------------------------------|
//! | Frequency | 24-bit FREQ word                 | `f = 26 MHz / 2^16 * FREQ`                |
//! | Baud rate | 8-bit mantissa, 4-bit exponent   | `r = (256 + M) * 2^E / 2^28 * 26 MHz`     |
//! | Deviation | 3-bit mantissa, 3-bit exponent   | `f = 26 MHz / 2^17 * (8 + M) * 2^E`       |
//! | Bandwidth | 2-bit mantissa, 2-bit exponent   | `bw = 26 MHz / (8 * (4 + M) * 2^E)`       |
//!
//! Deviation and bandwidth only take the discrete values their tables
//! produce, so both are encoded by exact lookup rather than by inverting the
//! formula.

use super::common::Modulation;
use crate::error::ConfigError;

/// Crystal frequency in MHz
pub const XTAL_FREQ_MHZ: f64 = 26.0;

/// Crystal frequency in Hz
const XTAL_FREQ_HZ: u64 = 26_000_000;

/// Synthesizer frequency bands in MHz (inclusive), taken from SmartRF Studio
pub const FREQUENCY_BANDS: [(f64, f64); 3] = [
    (299.999756, 347.999939),
    (386.999939, 463.999786),
    (778.999878, 928.000000),
];

/// Largest baud rate exponent that fits MDMCFG4[3:0]
const MAX_BAUD_RATE_EXPONENT: u8 = 15;

/// Supported max LNA gain reductions in dB (AGCCTRL2.MAX_LNA_GAIN)
pub const MAX_LNA_GAINS: [u8; 8] = [0, 3, 6, 7, 9, 12, 15, 17];

/// Supported max DVGA gain reductions in dB (AGCCTRL2.MAX_DVGA_GAIN)
pub const MAX_DVGA_GAINS: [u8; 4] = [0, 6, 12, 18];

/// Supported channel filter amplitude targets in dB (AGCCTRL2.MAGN_TARGET)
pub const MAGN_TARGETS: [u8; 8] = [24, 27, 30, 33, 36, 38, 40, 42];

/// Deviation in micro-kHz, indexed `[exponent][mantissa]`
const DEVIATION_TABLE: [[u32; 8]; 8] = generate_deviation_table();

/// Channel filter bandwidth in kHz, indexed `[mantissa][exponent]`
const BANDWIDTH_TABLE: [[u16; 4]; 4] = generate_bandwidth_table();

/// Integer division rounding half to even
const fn div_round_half_even(num: u64, den: u64) -> u64 {
    let quotient = num / den;
    let twice_remainder = (num % den) * 2;

    if twice_remainder > den || (twice_remainder == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Generate the deviation table at compile time, rounded to 6 decimals of kHz
const fn generate_deviation_table() -> [[u32; 8]; 8] {
    let mut table = [[0u32; 8]; 8];
    let mut exponent = 0;

    while exponent < 8 {
        let mut mantissa = 0;

        while mantissa < 8 {
            let steps = (8 + mantissa as u64) << exponent;
            table[exponent][mantissa] =
                div_round_half_even(XTAL_FREQ_HZ * 1000 * steps, 1 << 17) as u32;
            mantissa += 1;
        }

        exponent += 1;
    }

    table
}

/// Generate the bandwidth table at compile time, truncated to whole kHz
const fn generate_bandwidth_table() -> [[u16; 4]; 4] {
    let mut table = [[0u16; 4]; 4];
    let mut mantissa = 0;

    while mantissa < 4 {
        let mut exponent = 0;

        while exponent < 4 {
            let divider = (8 * (4 + mantissa as u64)) << exponent;
            table[mantissa][exponent] = (XTAL_FREQ_HZ / divider / 1000) as u16;
            exponent += 1;
        }

        mantissa += 1;
    }

    table
}

/// Round to a number of decimal places, ties to even
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

fn micro_khz_to_khz(value: u32) -> f64 {
    value as f64 / 1_000_000.0
}

// ---------------------------------------------------------------------------
// Frequency
// ---------------------------------------------------------------------------

/// Validate a carrier frequency in MHz against the synthesizer bands
pub fn validate_frequency(frequency: f64) -> Result<(), ConfigError> {
    if FREQUENCY_BANDS
        .iter()
        .any(|&(min, max)| frequency >= min && frequency <= max)
    {
        Ok(())
    } else {
        Err(ConfigError::InvalidFrequency)
    }
}

pub(crate) fn encode_frequency(frequency: f64) -> u32 {
    (frequency * 65536.0 / XTAL_FREQ_MHZ) as u32
}

/// Convert a frequency in MHz to the FREQ register word
///
/// # Examples
///
/// ```
/// use cc1101_config::codec::convert::frequency_to_config;
///
/// assert_eq!(frequency_to_config(433.0).unwrap(), 0x0010_A762);
/// assert!(frequency_to_config(999.0).is_err());
/// ```
pub fn frequency_to_config(frequency: f64) -> Result<u32, ConfigError> {
    validate_frequency(frequency)?;
    Ok(encode_frequency(frequency))
}

/// Convert a FREQ register word to MHz, rounded to 6 decimals
pub fn config_to_frequency(config: u32) -> f64 {
    round_to(XTAL_FREQ_MHZ / 65536.0 * config as f64, 6)
}

/// Validate a FREQ register word read back from the driver
pub fn validate_frequency_config(config: u32) -> Result<(), ConfigError> {
    if FREQUENCY_BANDS
        .iter()
        .any(|&(min, max)| config >= encode_frequency(min) && config <= encode_frequency(max))
    {
        Ok(())
    } else {
        Err(ConfigError::InvalidFrequency)
    }
}

// ---------------------------------------------------------------------------
// Baud rate
// ---------------------------------------------------------------------------

/// Legal baud rate range in kBaud for a modulation
pub fn baud_rate_range(modulation: Modulation) -> (f64, f64) {
    match modulation {
        Modulation::Gfsk | Modulation::Ook => (0.599742, 249.939),
        Modulation::Fsk2 => (0.599742, 500.0),
        Modulation::Fsk4 => (0.599742, 299.927),
        Modulation::Msk => (25.9857, 499.878),
    }
}

/// Validate a baud rate in kBaud for a modulation
pub fn validate_baud_rate(modulation: Modulation, baud_rate: f64) -> Result<(), ConfigError> {
    let (min, max) = baud_rate_range(modulation);

    if baud_rate >= min && baud_rate <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidBaudRate)
    }
}

fn encode_baud_rate(baud_rate: f64) -> (u8, u8) {
    let xtal = XTAL_FREQ_HZ as f64;
    let r_data = baud_rate * 1000.0;

    let mut exponent = (r_data * 2f64.powi(20) / xtal).log2().floor() as i32;
    let mut mantissa =
        (r_data * 2f64.powi(28) / (xtal * 2f64.powi(exponent)) - 256.0).round_ties_even() as i32;

    // Rounding up to 256 overflows into the next exponent
    if mantissa > 255 {
        mantissa -= 256;
        exponent += 1;
    }

    (mantissa.clamp(0, 255) as u8, exponent.max(0) as u8)
}

/// Convert a baud rate in kBaud to `(mantissa, exponent)`
///
/// # Examples
///
/// ```
/// use cc1101_config::codec::common::Modulation;
/// use cc1101_config::codec::convert::baud_rate_to_config;
///
/// assert_eq!(baud_rate_to_config(Modulation::Fsk2, 0.6).unwrap(), (0x83, 0x04));
/// assert_eq!(baud_rate_to_config(Modulation::Fsk2, 500.0).unwrap(), (0x3B, 0x0E));
/// ```
pub fn baud_rate_to_config(modulation: Modulation, baud_rate: f64) -> Result<(u8, u8), ConfigError> {
    validate_baud_rate(modulation, baud_rate)?;
    Ok(encode_baud_rate(baud_rate))
}

/// Convert `(mantissa, exponent)` to kBaud, rounded to 5 decimals
pub fn config_to_baud_rate(mantissa: u8, exponent: u8) -> f64 {
    let xtal = XTAL_FREQ_HZ as f64;
    let r_data = (256.0 + mantissa as f64) * 2f64.powi(exponent as i32) / 2f64.powi(28) * xtal;

    round_to(r_data / 1000.0, 5)
}

/// Monotonic ordering key of a baud rate register pair
fn baud_rate_key(mantissa: u8, exponent: u8) -> u64 {
    (256 + mantissa as u64) << exponent
}

/// Validate a baud rate register pair read back from the driver
pub fn validate_baud_rate_config(
    modulation: Modulation,
    mantissa: u8,
    exponent: u8,
) -> Result<(), ConfigError> {
    if exponent > MAX_BAUD_RATE_EXPONENT {
        return Err(ConfigError::InvalidBaudRate);
    }

    let (min, max) = baud_rate_range(modulation);
    let (min_m, min_e) = encode_baud_rate(min);
    let (max_m, max_e) = encode_baud_rate(max);
    let key = baud_rate_key(mantissa, exponent);

    if key >= baud_rate_key(min_m, min_e) && key <= baud_rate_key(max_m, max_e) {
        Ok(())
    } else {
        Err(ConfigError::InvalidBaudRate)
    }
}

// ---------------------------------------------------------------------------
// Deviation
// ---------------------------------------------------------------------------

/// Validate a deviation in kHz
pub fn validate_deviation(deviation: f64) -> Result<(), ConfigError> {
    deviation_to_config(deviation).map(|_| ())
}

/// Convert a deviation in kHz to `(mantissa, exponent)`
///
/// Only the 64 values listed by [`supported_deviations`] are accepted, and
/// they must match exactly (6 decimals).
pub fn deviation_to_config(deviation: f64) -> Result<(u8, u8), ConfigError> {
    for (exponent, row) in DEVIATION_TABLE.iter().enumerate() {
        for (mantissa, &value) in row.iter().enumerate() {
            if micro_khz_to_khz(value) == deviation {
                return Ok((mantissa as u8, exponent as u8));
            }
        }
    }

    Err(ConfigError::InvalidDeviation)
}

/// Convert `(mantissa, exponent)` to kHz
pub fn config_to_deviation(mantissa: u8, exponent: u8) -> Result<f64, ConfigError> {
    DEVIATION_TABLE
        .get(exponent as usize)
        .and_then(|row| row.get(mantissa as usize))
        .map(|&value| micro_khz_to_khz(value))
        .ok_or(ConfigError::InvalidDeviation)
}

/// Deviation in kHz for register fields already known to be in range
pub(crate) fn deviation_khz(mantissa: u8, exponent: u8) -> f64 {
    micro_khz_to_khz(DEVIATION_TABLE[(exponent & 0x07) as usize][(mantissa & 0x07) as usize])
}

/// All deviations the DEVIATN register can express, ascending, in kHz
pub fn supported_deviations() -> Vec<f64> {
    DEVIATION_TABLE
        .iter()
        .flatten()
        .map(|&value| micro_khz_to_khz(value))
        .collect()
}

// ---------------------------------------------------------------------------
// Bandwidth
// ---------------------------------------------------------------------------

/// Validate a channel filter bandwidth in kHz
pub fn validate_bandwidth(bandwidth: u16) -> Result<(), ConfigError> {
    bandwidth_to_config(bandwidth).map(|_| ())
}

/// Convert a bandwidth in kHz to `(mantissa, exponent)`
///
/// # Examples
///
/// ```
/// use cc1101_config::codec::convert::bandwidth_to_config;
///
/// assert_eq!(bandwidth_to_config(812).unwrap(), (0, 0));
/// assert_eq!(bandwidth_to_config(58).unwrap(), (3, 3));
/// assert!(bandwidth_to_config(400).is_err());
/// ```
pub fn bandwidth_to_config(bandwidth: u16) -> Result<(u8, u8), ConfigError> {
    for (mantissa, row) in BANDWIDTH_TABLE.iter().enumerate() {
        for (exponent, &value) in row.iter().enumerate() {
            if value == bandwidth {
                return Ok((mantissa as u8, exponent as u8));
            }
        }
    }

    Err(ConfigError::InvalidBandwidth)
}

/// Convert `(mantissa, exponent)` to kHz
pub fn config_to_bandwidth(mantissa: u8, exponent: u8) -> Result<u16, ConfigError> {
    BANDWIDTH_TABLE
        .get(mantissa as usize)
        .and_then(|row| row.get(exponent as usize))
        .copied()
        .ok_or(ConfigError::InvalidBandwidth)
}

/// Bandwidth in kHz for register fields already known to be in range
pub(crate) fn bandwidth_khz(mantissa: u8, exponent: u8) -> u16 {
    BANDWIDTH_TABLE[(mantissa & 0x03) as usize][(exponent & 0x03) as usize]
}

/// All channel filter bandwidths the device supports, ascending, in kHz
pub fn supported_bandwidths() -> Vec<u16> {
    let mut bandwidths: Vec<u16> = BANDWIDTH_TABLE.iter().flatten().copied().collect();
    bandwidths.sort_unstable();
    bandwidths
}

// ---------------------------------------------------------------------------
// Sync word, AGC limits
// ---------------------------------------------------------------------------

/// Validate a sync word
///
/// Any 16-bit value is allowed. A 32-bit sync word is only accepted when its
/// high and low halves match, since the device repeats SYNC1:SYNC0.
pub fn validate_sync_word(sync_word: u32) -> Result<(), ConfigError> {
    if sync_word > 0xFFFF && sync_word & 0xFFFF != sync_word >> 16 {
        return Err(ConfigError::InvalidSyncWord);
    }

    Ok(())
}

/// Validate a max LNA gain reduction in dB
pub fn validate_max_lna_gain(gain: u8) -> Result<(), ConfigError> {
    if MAX_LNA_GAINS.contains(&gain) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMaxLnaGain)
    }
}

/// Validate a max DVGA gain reduction in dB
pub fn validate_max_dvga_gain(gain: u8) -> Result<(), ConfigError> {
    if MAX_DVGA_GAINS.contains(&gain) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMaxDvgaGain)
    }
}

/// Validate a channel filter amplitude target in dB
pub fn validate_magn_target(target: u8) -> Result<(), ConfigError> {
    if MAGN_TARGETS.contains(&target) {
        Ok(())
    } else {
        Err(ConfigError::InvalidMagnTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_to_config() {
        assert_eq!(frequency_to_config(315.0).unwrap(), 0x000C1D89);
        assert_eq!(frequency_to_config(433.0).unwrap(), 0x0010A762);
        assert_eq!(frequency_to_config(868.0).unwrap(), 0x00216276);
        assert_eq!(frequency_to_config(915.0).unwrap(), 0x0023313B);
    }

    #[test]
    fn test_frequency_band_edges() {
        assert_eq!(frequency_to_config(299.999756).unwrap(), 0x000B89D8);
        assert_eq!(frequency_to_config(347.999939).unwrap(), 0x000D6276);
        assert_eq!(frequency_to_config(386.999939).unwrap(), 0x000EE276);
        assert_eq!(frequency_to_config(463.999786).unwrap(), 0x0011D89C);
        assert_eq!(frequency_to_config(778.999878).unwrap(), 0x001DF627);
        assert_eq!(frequency_to_config(928.000000).unwrap(), 0x0023B13B);
    }

    #[test]
    fn test_config_to_frequency() {
        assert_eq!(config_to_frequency(0x000B89D8), 299.999756);
        assert_eq!(config_to_frequency(0x000D6276), 347.999939);
        assert_eq!(config_to_frequency(0x000C1D89), 314.999664);
        assert_eq!(config_to_frequency(0x0010A762), 432.999817);
        assert_eq!(config_to_frequency(0x00216276), 867.999939);
    }

    #[test]
    fn test_frequency_out_of_band() {
        for frequency in [0.0, 123.0, 350.0, 464.0, 700.0, 999.0, f64::NAN] {
            assert_eq!(
                frequency_to_config(frequency),
                Err(ConfigError::InvalidFrequency),
                "{} MHz should be rejected",
                frequency
            );
        }
    }

    #[test]
    fn test_validate_frequency_config() {
        assert!(validate_frequency_config(0x000B89D8).is_ok());
        assert!(validate_frequency_config(0x0023B13B).is_ok());
        assert!(validate_frequency_config(0x0010B071).is_ok());
        assert_eq!(validate_frequency_config(0), Err(ConfigError::InvalidFrequency));
        assert_eq!(validate_frequency_config(0x0023B13C), Err(ConfigError::InvalidFrequency));
        assert_eq!(validate_frequency_config(0x000D6277), Err(ConfigError::InvalidFrequency));
    }

    #[test]
    fn test_baud_rate_to_config() {
        let cases = [
            (0.6, (0x83, 0x04)),
            (0.599742, (0x83, 0x04)),
            (26.0, (0x06, 0x0A)),
            (25.9857, (0x06, 0x0A)),
            (250.0, (0x3B, 0x0D)),
            (249.939, (0x3B, 0x0D)),
            (300.0, (0x7A, 0x0D)),
            (299.927, (0x7A, 0x0D)),
            (500.0, (0x3B, 0x0E)),
            (499.878, (0x3B, 0x0E)),
            (115.051, (0x22, 0x0C)),
        ];

        for (baud_rate, expected) in cases {
            assert_eq!(
                baud_rate_to_config(Modulation::Fsk2, baud_rate).unwrap(),
                expected,
                "baud rate {}",
                baud_rate
            );
        }
    }

    #[test]
    fn test_config_to_baud_rate() {
        assert_eq!(config_to_baud_rate(0x83, 0x04), 0.59974);
        assert_eq!(config_to_baud_rate(0x06, 0x0A), 25.98572);
        assert_eq!(config_to_baud_rate(0x3B, 0x0D), 249.93896);
        assert_eq!(config_to_baud_rate(0x7A, 0x0D), 299.92676);
        assert_eq!(config_to_baud_rate(0x3B, 0x0E), 499.87793);
        assert_eq!(config_to_baud_rate(0x22, 0x0C), 115.05127);
    }

    #[test]
    fn test_baud_rate_out_of_range() {
        assert_eq!(baud_rate_to_config(Modulation::Fsk2, 0.0), Err(ConfigError::InvalidBaudRate));
        assert_eq!(baud_rate_to_config(Modulation::Fsk2, 999.0), Err(ConfigError::InvalidBaudRate));
    }

    #[test]
    fn test_baud_rate_depends_on_modulation() {
        assert!(baud_rate_to_config(Modulation::Fsk2, 400.0).is_ok());
        assert!(baud_rate_to_config(Modulation::Gfsk, 400.0).is_err());
        assert!(baud_rate_to_config(Modulation::Ook, 250.0).is_err());
        assert!(baud_rate_to_config(Modulation::Fsk4, 299.927).is_ok());
        assert!(baud_rate_to_config(Modulation::Fsk4, 300.0).is_err());
        assert!(baud_rate_to_config(Modulation::Msk, 1.2).is_err());
        assert!(baud_rate_to_config(Modulation::Msk, 25.9857).is_ok());
    }

    #[test]
    fn test_baud_rate_mantissa_carry() {
        // Rounds to mantissa 256 at exponent 7
        assert_eq!(baud_rate_to_config(Modulation::Fsk2, 6.347).unwrap(), (0x00, 0x08));
    }

    #[test]
    fn test_validate_baud_rate_config() {
        assert!(validate_baud_rate_config(Modulation::Fsk2, 0x83, 0x04).is_ok());
        assert!(validate_baud_rate_config(Modulation::Fsk2, 0x3B, 0x0E).is_ok());
        assert!(validate_baud_rate_config(Modulation::Fsk2, 0x82, 0x04).is_err());
        assert!(validate_baud_rate_config(Modulation::Fsk2, 0x3C, 0x0E).is_err());
        assert!(validate_baud_rate_config(Modulation::Gfsk, 0x3B, 0x0E).is_err());
        assert!(validate_baud_rate_config(Modulation::Msk, 0x83, 0x04).is_err());
        assert!(validate_baud_rate_config(Modulation::Fsk2, 0x00, 0x10).is_err());
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation_to_config(1.586914).unwrap(), (0x00, 0x00));
        assert_eq!(deviation_to_config(380.859375).unwrap(), (0x07, 0x07));
        assert_eq!(deviation_to_config(47.607422).unwrap(), (0x07, 0x04));

        assert_eq!(config_to_deviation(0x00, 0x00).unwrap(), 1.586914);
        assert_eq!(config_to_deviation(0x07, 0x07).unwrap(), 380.859375);
    }

    #[test]
    fn test_deviation_ties_round_to_even() {
        // 12.6953125 kHz exactly
        assert_eq!(config_to_deviation(0x00, 0x03).unwrap(), 12.695312);
    }

    #[test]
    fn test_invalid_deviation() {
        assert_eq!(deviation_to_config(0.0), Err(ConfigError::InvalidDeviation));
        assert_eq!(deviation_to_config(400.0), Err(ConfigError::InvalidDeviation));
        assert_eq!(deviation_to_config(47.6), Err(ConfigError::InvalidDeviation));
        assert_eq!(config_to_deviation(8, 0), Err(ConfigError::InvalidDeviation));
        assert_eq!(config_to_deviation(0, 8), Err(ConfigError::InvalidDeviation));
    }

    #[test]
    fn test_deviation_round_trip() {
        for exponent in 0..8 {
            for mantissa in 0..8 {
                let deviation = config_to_deviation(mantissa, exponent).unwrap();
                assert_eq!(deviation_to_config(deviation).unwrap(), (mantissa, exponent));
            }
        }
    }

    #[test]
    fn test_supported_deviations() {
        let deviations = supported_deviations();
        assert_eq!(deviations.len(), 64);
        assert_eq!(deviations[0], 1.586914);
        assert_eq!(deviations[63], 380.859375);
        assert!(deviations.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bandwidth() {
        assert_eq!(bandwidth_to_config(812).unwrap(), (0x00, 0x00));
        assert_eq!(bandwidth_to_config(58).unwrap(), (0x03, 0x03));
        assert_eq!(bandwidth_to_config(203).unwrap(), (0x00, 0x02));

        assert_eq!(config_to_bandwidth(0x00, 0x00).unwrap(), 812);
        assert_eq!(config_to_bandwidth(0x03, 0x03).unwrap(), 58);
    }

    #[test]
    fn test_invalid_bandwidth() {
        assert_eq!(bandwidth_to_config(0), Err(ConfigError::InvalidBandwidth));
        assert_eq!(bandwidth_to_config(400), Err(ConfigError::InvalidBandwidth));
        assert_eq!(config_to_bandwidth(4, 0), Err(ConfigError::InvalidBandwidth));
    }

    #[test]
    fn test_bandwidth_round_trip() {
        for mantissa in 0..4 {
            for exponent in 0..4 {
                let bandwidth = config_to_bandwidth(mantissa, exponent).unwrap();
                assert_eq!(bandwidth_to_config(bandwidth).unwrap(), (mantissa, exponent));
            }
        }
    }

    #[test]
    fn test_supported_bandwidths() {
        assert_eq!(
            supported_bandwidths(),
            vec![58, 67, 81, 101, 116, 135, 162, 203, 232, 270, 325, 406, 464, 541, 650, 812]
        );
    }

    #[test]
    fn test_sync_word() {
        assert!(validate_sync_word(0x00000000).is_ok());
        assert!(validate_sync_word(0x0000FFFF).is_ok());
        assert!(validate_sync_word(0xFFFFFFFF).is_ok());
        assert!(validate_sync_word(0xD391D391).is_ok());
        assert_eq!(validate_sync_word(0xFFFF0000), Err(ConfigError::InvalidSyncWord));
        assert_eq!(validate_sync_word(0xAAAABBBB), Err(ConfigError::InvalidSyncWord));
    }

    #[test]
    fn test_agc_limits() {
        for gain in MAX_LNA_GAINS {
            assert!(validate_max_lna_gain(gain).is_ok());
        }
        assert_eq!(validate_max_lna_gain(1), Err(ConfigError::InvalidMaxLnaGain));

        for gain in MAX_DVGA_GAINS {
            assert!(validate_max_dvga_gain(gain).is_ok());
        }
        assert_eq!(validate_max_dvga_gain(3), Err(ConfigError::InvalidMaxDvgaGain));

        for target in MAGN_TARGETS {
            assert!(validate_magn_target(target).is_ok());
        }
        assert_eq!(validate_magn_target(0), Err(ConfigError::InvalidMagnTarget));
    }
}
