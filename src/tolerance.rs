use crate::constants::{STEPS, WIPER_RESISTANCE};

/// Factory-measured deviation of a channel's end-to-end resistance.
///
/// Stored on the chip as a signed integer percentage followed by an unsigned
/// fraction in 1/256ths of a percent. See table 13 of the datasheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tolerance {
    integer: i8,
    fraction: u8,
}

impl Tolerance {
    /// Assemble a tolerance from the two raw register bytes.
    pub fn from_registers(integer: u8, fraction: u8) -> Self {
        Self {
            integer: integer as i8,
            fraction,
        }
    }

    /// Signed integer part of the percentage.
    pub fn integer(&self) -> i8 {
        self.integer
    }

    /// Fractional part, in 1/256ths of a percent.
    pub fn fraction(&self) -> u8 {
        self.fraction
    }

    /// Tolerance as a percentage.
    ///
    /// The fraction is always added, so -2 and 128 give -1.5 rather than -2.5.
    pub fn percent(&self) -> f32 {
        self.integer as f32 + self.fraction as f32 / 256.0
    }

    /// Actual end-to-end resistance of a part with the given nominal value.
    pub fn apply(&self, nominal_ohms: f32) -> f32 {
        nominal_ohms * (1.0 + self.percent() / 100.0)
    }
}

/// Resistance between the wiper and terminal B at the given position.
pub(crate) fn position_to_ohms(position: u8, end_to_end_ohms: f32) -> f32 {
    position as f32 * end_to_end_ohms / STEPS + WIPER_RESISTANCE
}

/// Nearest wiper position for the given wiper-to-B resistance.
///
/// Halves round up. Targets outside the reachable range saturate at 0 or 255.
pub(crate) fn ohms_to_position(ohms: f32, end_to_end_ohms: f32) -> u8 {
    let steps = (ohms - WIPER_RESISTANCE) * STEPS / end_to_end_ohms;
    if steps.is_nan() || steps <= 0.0 {
        return 0;
    }
    // Float to int casts saturate, so anything past the top lands on 255.
    (steps + 0.5) as u8
}
