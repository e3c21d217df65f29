use core::time::Duration;

/// Default 7-bit I2C address of the AD5252, with both AD0 and AD1 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x2C;

/// Nominal end-to-end resistance (R<sub>AB</sub>) of the 1 kΩ part, in Ohms.
///
/// The AD5252 is also sold in 10 kΩ, 50 kΩ and 100 kΩ variants. Use
/// [`AD5252::nominal_resistance`] to select one of those.
///
/// [`AD5252::nominal_resistance`]: crate::AD5252::nominal_resistance
pub const DEFAULT_NOMINAL_RESISTANCE: f32 = 1000.0;

/// Resistance of the wiper contact itself, in Ohms.
///
/// This is present even at position 0, so it is the floor of any
/// wiper-to-terminal resistance.
pub const WIPER_RESISTANCE: f32 = 75.0;

/// Number of wiper positions across the resistor string.
pub(crate) const STEPS: f32 = 256.0;

/// Most attempts at a single write before the driver gives up.
pub(crate) const MAX_ATTEMPTS: u8 = 16;

/// Bus timeout applied to each write attempt. Reads use double this.
pub(crate) const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Register sub-addresses used with a "dummy" write before a read.
pub(crate) mod registers {
    /// RDAC1 wiper position.
    pub(crate) const RDAC1: u8 = 0x01;
    /// RDAC3 wiper position.
    pub(crate) const RDAC3: u8 = 0x03;
    /// RDAC1 tolerance, signed integer part.
    pub(crate) const RDAC1_TOLERANCE_INTEGER: u8 = 0b0011_1010;
    /// RDAC1 tolerance, fractional part.
    pub(crate) const RDAC1_TOLERANCE_FRACTION: u8 = 0b0011_1011;
    /// RDAC3 tolerance, signed integer part.
    pub(crate) const RDAC3_TOLERANCE_INTEGER: u8 = 0b0011_1110;
    /// RDAC3 tolerance, fractional part.
    pub(crate) const RDAC3_TOLERANCE_FRACTION: u8 = 0b0011_1111;
}
