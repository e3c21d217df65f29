//! Instruction byte encoding.
//!
//! Every transaction with the AD5252 starts with an instruction byte. Bit 7
//! (CMD/REG) chooses between a shortcut command and a register access:
//!
//! ```text
//! command:   1 | C3 C2 C1 C0 | A2 A1 A0
//! register:  0 | EE/RDAC | A4 A3 A2 A1 A0
//! ```
//!
//! See table 9 and table 11 of the datasheet.
use bit_field::BitField;

use crate::Channel;

/// Bit 7: set for shortcut commands, clear for register access.
const CMD_BIT: usize = 7;
/// Bits 6..3: shortcut command opcode.
const OPCODE_BITS: core::ops::Range<usize> = 3..7;
/// Bits 2..0: channel address for shortcut commands.
const ADDRESS_BITS: core::ops::Range<usize> = 0..3;

/// Shortcut commands understood by the AD5252.
///
/// The `*All*` commands act on both wipers at once and ignore any channel
/// passed alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// No operation.
    Nop,
    /// Copy the EEMEM contents into the addressed RDAC.
    ///
    /// Not issued by this driver.
    RestoreEememToRdac,
    /// Copy the addressed RDAC into EEMEM.
    ///
    /// Not issued by this driver.
    StoreRdacToEemem,
    /// Halve the wiper position of one channel.
    Decrement6dB,
    /// Halve the wiper positions of both channels.
    DecrementAll6dB,
    /// Move the wiper of one channel down by one step.
    DecrementOneStep,
    /// Move the wipers of both channels down by one step.
    DecrementAllOneStep,
    /// Copy EEMEM into both RDACs.
    ///
    /// Not issued by this driver.
    ResetEememToAllRdac,
    /// Double the wiper position of one channel.
    Increment6dB,
    /// Double the wiper positions of both channels.
    IncrementAll6dB,
    /// Move the wiper of one channel up by one step.
    IncrementOneStep,
    /// Move the wipers of both channels up by one step.
    IncrementAllOneStep,
}

impl Command {
    /// Four-bit opcode (C3..C0) for the command.
    pub const fn opcode(self) -> u8 {
        match self {
            Command::Nop => 0,
            Command::RestoreEememToRdac => 1,
            Command::StoreRdacToEemem => 2,
            Command::Decrement6dB => 3,
            Command::DecrementAll6dB => 4,
            Command::DecrementOneStep => 5,
            Command::DecrementAllOneStep => 6,
            Command::ResetEememToAllRdac => 7,
            Command::Increment6dB => 8,
            Command::IncrementAll6dB => 9,
            Command::IncrementOneStep => 10,
            Command::IncrementAllOneStep => 11,
        }
    }

    /// True if the command acts on both channels and so carries no address.
    pub const fn is_all_channels(self) -> bool {
        matches!(
            self,
            Command::DecrementAll6dB
                | Command::DecrementAllOneStep
                | Command::IncrementAll6dB
                | Command::IncrementAllOneStep
                | Command::ResetEememToAllRdac
        )
    }

    /// Build the instruction byte for this command on the given channel.
    ///
    /// The channel is ignored for commands where [`Command::is_all_channels`]
    /// is true, and the address bits are left at zero.
    pub fn instruction(self, channel: Channel) -> u8 {
        let mut byte = 0u8;
        byte.set_bit(CMD_BIT, true);
        byte.set_bits(OPCODE_BITS, self.opcode());
        if !self.is_all_channels() {
            byte.set_bits(ADDRESS_BITS, channel.selector());
        }
        byte
    }
}

/// Instruction byte for a register access to the RDAC of `channel`.
///
/// Followed by a data byte this writes the wiper position. On its own it
/// selects the register for the next read.
pub(crate) fn rdac_register(channel: Channel) -> u8 {
    channel.selector()
}
