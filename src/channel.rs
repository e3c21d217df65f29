use crate::constants::registers;

/// One of the two wipers of the AD5252.
///
/// The datasheet names the potentiometers RDAC1 and RDAC3 (they share a die
/// with the quad AD5254, of which only channels 1 and 3 are bonded out). This
/// driver also refers to them by index, 0 and 1.
///
/// Converting from an integer never fails: 0 selects [`Channel::Rdac1`] and
/// any other value is clamped to [`Channel::Rdac3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// First potentiometer (W1 between A1 and B1). Index 0.
    Rdac1,
    /// Second potentiometer (W3 between A3 and B3). Index 1.
    Rdac3,
}

impl Channel {
    /// Both channels, in index order.
    pub const ALL: [Channel; 2] = [Channel::Rdac1, Channel::Rdac3];

    /// Index of the channel, 0 or 1.
    pub const fn index(self) -> usize {
        match self {
            Channel::Rdac1 => 0,
            Channel::Rdac3 => 1,
        }
    }

    /// Address bits (A2..A0) selecting this channel in an instruction byte.
    ///
    /// These double as the register sub-address of the wiper position.
    pub(crate) const fn selector(self) -> u8 {
        match self {
            Channel::Rdac1 => registers::RDAC1,
            Channel::Rdac3 => registers::RDAC3,
        }
    }

    /// Sub-addresses of the (integer, fraction) tolerance registers.
    pub(crate) const fn tolerance_registers(self) -> (u8, u8) {
        match self {
            Channel::Rdac1 => (
                registers::RDAC1_TOLERANCE_INTEGER,
                registers::RDAC1_TOLERANCE_FRACTION,
            ),
            Channel::Rdac3 => (
                registers::RDAC3_TOLERANCE_INTEGER,
                registers::RDAC3_TOLERANCE_FRACTION,
            ),
        }
    }
}

impl From<u8> for Channel {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Rdac1,
            _ => Self::Rdac3,
        }
    }
}
