//! Wiper position reads, writes and shortcut commands.
use super::AD5252;
use crate::bus::TwoWireBus;
use crate::commands::rdac_register;
use crate::error::Error;
use crate::tolerance::{ohms_to_position, position_to_ohms};
use crate::{Channel, Command};

/// Wiper position commands.
impl<I2C: TwoWireBus> AD5252<I2C> {
    /// Read the raw wiper position (0–255) of a channel.
    ///
    /// <div class="warning">
    ///
    /// If the chip acknowledges the register select but then returns no data,
    /// the position is reported as 0. A warning is logged when this happens.
    ///
    /// </div>
    pub fn position(&mut self, channel: impl Into<Channel>) -> Result<u8, Error<I2C::Error>> {
        self.read_register(rdac_register(channel.into()))
    }

    /// Read the resistance between the wiper and terminal B of a channel.
    ///
    /// The tolerances are refreshed from the chip first, so this makes five
    /// write-read exchanges in total.
    pub fn position_ohms(&mut self, channel: impl Into<Channel>) -> Result<f32, Error<I2C::Error>> {
        let channel = channel.into();
        self.refresh_tolerances()?;
        let position = self.position(channel)?;
        Ok(position_to_ohms(position, self.end_to_end_resistance(channel)))
    }

    /// Move the wiper of a channel to a raw position.
    pub fn set_position(
        &mut self,
        channel: impl Into<Channel>,
        position: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.transmit(&[rdac_register(channel.into()), position])
    }

    /// Move the wiper of a channel to the position closest to the given
    /// wiper-to-B resistance, in Ohms.
    ///
    /// Uses the end-to-end resistance from the last
    /// [`AD5252::refresh_tolerances`]. Halfway values round up, and
    /// resistances outside the range of the part are clamped to position 0 or
    /// 255. Returns the position written.
    pub fn set_position_ohms(
        &mut self,
        channel: impl Into<Channel>,
        ohms: f32,
    ) -> Result<u8, Error<I2C::Error>> {
        let channel = channel.into();
        let position = ohms_to_position(ohms, self.end_to_end_resistance(channel));
        self.set_position(channel, position)?;
        Ok(position)
    }

    /// Move the wiper of a channel up by one step.
    pub fn increment_one_step(
        &mut self,
        channel: impl Into<Channel>,
    ) -> Result<(), Error<I2C::Error>> {
        self.command(Command::IncrementOneStep, channel.into())
    }

    /// Move the wiper of a channel down by one step.
    pub fn decrement_one_step(
        &mut self,
        channel: impl Into<Channel>,
    ) -> Result<(), Error<I2C::Error>> {
        self.command(Command::DecrementOneStep, channel.into())
    }

    /// Double the wiper position of a channel (+6 dB).
    pub fn increment_6db(&mut self, channel: impl Into<Channel>) -> Result<(), Error<I2C::Error>> {
        self.command(Command::Increment6dB, channel.into())
    }

    /// Halve the wiper position of a channel (-6 dB).
    pub fn decrement_6db(&mut self, channel: impl Into<Channel>) -> Result<(), Error<I2C::Error>> {
        self.command(Command::Decrement6dB, channel.into())
    }

    /// Move the wipers of both channels up by one step.
    pub fn increment_all_one_step(&mut self) -> Result<(), Error<I2C::Error>> {
        self.command(Command::IncrementAllOneStep, Channel::Rdac1)
    }

    /// Move the wipers of both channels down by one step.
    pub fn decrement_all_one_step(&mut self) -> Result<(), Error<I2C::Error>> {
        self.command(Command::DecrementAllOneStep, Channel::Rdac1)
    }

    /// Double the wiper positions of both channels (+6 dB).
    pub fn increment_all_6db(&mut self) -> Result<(), Error<I2C::Error>> {
        self.command(Command::IncrementAll6dB, Channel::Rdac1)
    }

    /// Halve the wiper positions of both channels (-6 dB).
    pub fn decrement_all_6db(&mut self) -> Result<(), Error<I2C::Error>> {
        self.command(Command::DecrementAll6dB, Channel::Rdac1)
    }

    /// Issue a shortcut command. The channel is ignored by "all" commands.
    fn command(&mut self, command: Command, channel: Channel) -> Result<(), Error<I2C::Error>> {
        self.transmit(&[command.instruction(channel)])
    }
}
