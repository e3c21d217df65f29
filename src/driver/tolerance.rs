//! Calibration data stored on the chip.
use super::AD5252;
use crate::bus::TwoWireBus;
use crate::error::Error;
use crate::{Channel, Tolerance};

impl<I2C: TwoWireBus> AD5252<I2C> {
    /// Read the factory-measured tolerance of one channel.
    ///
    /// This does not update the cached value; use
    /// [`AD5252::refresh_tolerances`] for that.
    ///
    /// # Datasheet
    ///
    /// See table 13 for the tolerance register addresses and format.
    pub fn tolerance(
        &mut self,
        channel: impl Into<Channel>,
    ) -> Result<Tolerance, Error<I2C::Error>> {
        let (integer_register, fraction_register) = channel.into().tolerance_registers();
        let integer = self.read_register(integer_register)?;
        let fraction = self.read_register(fraction_register)?;
        Ok(Tolerance::from_registers(integer, fraction))
    }

    /// Read the tolerance of both channels and recalculate their end-to-end
    /// resistance.
    ///
    /// Call this before [`AD5252::set_position_ohms`], otherwise the nominal
    /// resistance is used for the conversion. [`AD5252::position_ohms`] calls
    /// it itself.
    ///
    /// The cache is only updated once both channels have been read.
    pub fn refresh_tolerances(&mut self) -> Result<(), Error<I2C::Error>> {
        let mut tolerances = [Tolerance::default(); 2];
        for channel in Channel::ALL {
            tolerances[channel.index()] = self.tolerance(channel)?;
        }
        self.tolerances = tolerances;
        self.recompute_end_to_end();
        Ok(())
    }

    /// Tolerance of a channel as of the last [`AD5252::refresh_tolerances`].
    ///
    /// Zero if the tolerances have not been read.
    pub fn cached_tolerance(&self, channel: impl Into<Channel>) -> Tolerance {
        self.tolerances[channel.into().index()]
    }

    /// Calibrated end-to-end resistance of a channel, in Ohms.
    ///
    /// This is the nominal resistance until the tolerances have been read.
    pub fn end_to_end_resistance(&self, channel: impl Into<Channel>) -> f32 {
        self.end_to_end[channel.into().index()]
    }

    pub(super) fn recompute_end_to_end(&mut self) {
        for channel in Channel::ALL {
            let i = channel.index();
            self.end_to_end[i] = self.tolerances[i].apply(self.nominal_resistance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{close, failed_write, register_read};
    use super::*;

    use embedded_hal_mock::eh1::i2c::Mock as I2cMock;

    #[test]
    fn read_single_tolerance() {
        let expectations = [register_read(0x3E, 0xFE), register_read(0x3F, 0x80)].concat();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());

        let tolerance = pot.tolerance(1u8).unwrap();
        assert!(close(tolerance.percent(), -1.5));
        // Reading a single channel leaves the cache alone.
        assert_eq!(pot.cached_tolerance(1u8), Tolerance::default());
        i2c.done();
    }

    #[test]
    fn refresh_updates_both_channels() {
        let expectations = [
            register_read(0x3A, 0xFE),
            register_read(0x3B, 0x80),
            register_read(0x3E, 0x01),
            register_read(0x3F, 0x40),
        ]
        .concat();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());

        assert!(close(pot.end_to_end_resistance(Channel::Rdac1), 1000.0));
        pot.refresh_tolerances().unwrap();
        assert!(close(pot.cached_tolerance(Channel::Rdac1).percent(), -1.5));
        assert!(close(pot.cached_tolerance(Channel::Rdac3).percent(), 1.25));
        assert!(close(pot.end_to_end_resistance(Channel::Rdac1), 985.0));
        assert!(close(pot.end_to_end_resistance(Channel::Rdac3), 1012.5));
        i2c.done();
    }

    #[test]
    fn nominal_resistance_reapplies_tolerance() {
        let expectations = [
            register_read(0x3A, 0xFE),
            register_read(0x3B, 0x80),
            register_read(0x3E, 0x00),
            register_read(0x3F, 0x00),
        ]
        .concat();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());
        pot.refresh_tolerances().unwrap();

        let pot = pot.nominal_resistance(10_000.0);
        assert!(close(pot.end_to_end_resistance(0u8), 9850.0));
        assert!(close(pot.end_to_end_resistance(1u8), 10_000.0));
        i2c.done();
    }

    #[test]
    fn failed_select_stops_refresh() {
        let expectations: Vec<_> = (0..16).map(|_| failed_write(vec![0x3A])).collect();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());

        assert!(pot.refresh_tolerances().is_err());
        assert!(close(pot.end_to_end_resistance(0u8), 1000.0));
        i2c.done();
    }

    #[test]
    fn failed_second_channel_keeps_cache() {
        let mut expectations = [register_read(0x3A, 0xFE), register_read(0x3B, 0x80)].concat();
        expectations.extend((0..16).map(|_| failed_write(vec![0x3E])));
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());

        assert!(pot.refresh_tolerances().is_err());
        assert_eq!(pot.cached_tolerance(0u8), Tolerance::default());
        assert!(close(pot.end_to_end_resistance(0u8), 1000.0));
        assert!(close(
            pot.end_to_end_resistance(0u8),
            pot.cached_tolerance(0u8).apply(1000.0)
        ));
        i2c.done();
    }
}
