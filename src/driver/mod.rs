use log::{debug, error, warn};

use crate::bus::{RetryPolicy, TwoWireBus};
use crate::constants::{DEFAULT_ADDRESS, DEFAULT_NOMINAL_RESISTANCE};
use crate::error::Error;
use crate::tolerance::Tolerance;

mod rdac;
mod tolerance;

/// Driver for the AD5252.
///
/// # Quick start
///
/// Create the driver with [`AD5252::new`] for a chip at the default address
/// (0x2C), or [`AD5252::with_address`] if either address pin is tied high.
/// If you have a 10 kΩ, 50 kΩ or 100 kΩ part, set its nominal resistance
/// with [`AD5252::nominal_resistance`].
///
/// Call [`AD5252::refresh_tolerances`] once before using any of the methods
/// that work in Ohms, so they use the calibrated end-to-end resistance instead
/// of the nominal value.
///
/// # Bus errors
///
/// Writes are retried according to the [`RetryPolicy`], aborting the transfer
/// and resetting the bus between attempts. Reads are not retried: a read that
/// returns no data is reported as `0`. See [`AD5252::position`].
#[derive(Debug)]
pub struct AD5252<I2C> {
    i2c: I2C,
    /// 7-bit I2C address.
    address: u8,
    retry: RetryPolicy,
    /// R<sub>AB</sub> of the part before calibration, in Ohms.
    nominal_resistance: f32,
    /// Tolerances last read from the chip, indexed by channel.
    tolerances: [Tolerance; 2],
    /// Calibrated R<sub>AB</sub> for each channel, in Ohms.
    end_to_end: [f32; 2],
}

impl<I2C: TwoWireBus> AD5252<I2C> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors and configuration
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver for an AD5252 at the default address, 0x2C.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver for an AD5252 at the given 7-bit address.
    ///
    /// The AD5252 responds to 0x2C through 0x2F depending on the AD0 and AD1
    /// pins.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            retry: RetryPolicy::DEFAULT,
            nominal_resistance: DEFAULT_NOMINAL_RESISTANCE,
            tolerances: [Tolerance::default(); 2],
            end_to_end: [DEFAULT_NOMINAL_RESISTANCE; 2],
        }
    }

    /// Set the nominal end-to-end resistance of the part, in Ohms.
    ///
    /// Any cached tolerances are reapplied to the new value.
    pub fn nominal_resistance(mut self, ohms: f32) -> Self {
        self.nominal_resistance = ohms;
        self.recompute_end_to_end();
        self
    }

    /// Replace the default retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// 7-bit I2C address of the chip.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Bus primitives
    ////////////////////////////////////////////////////////////////////////////////

    /// Check whether the chip acknowledges its address.
    ///
    /// This is a single zero-length write, made without retries or recovery.
    pub fn probe(&mut self) -> bool {
        self.i2c.set_timeout(self.retry.timeout);
        self.i2c.write(self.address, &[]).is_ok()
    }

    /// Write `bytes` to the chip in a single transaction, retrying on error.
    ///
    /// After each failed attempt the transfer is aborted and the bus reset
    /// before trying again.
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), Error<I2C::Error>> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempts = 0;
        loop {
            self.i2c.set_timeout(self.retry.timeout);
            let source = match self.i2c.write(self.address, bytes) {
                Ok(()) => return Ok(()),
                Err(e) => e,
            };
            attempts += 1;
            self.recover();
            if attempts >= max_attempts {
                error!(
                    "Unrecoverable I2C transmission error with AD5252 at {:#04x} after {attempts} attempts: {source:?}",
                    self.address
                );
                return Err(Error::RetriesExhausted { attempts, source });
            }
            debug!(
                "I2C write {bytes:02x?} to AD5252 at {:#04x} failed (attempt {attempts} of {max_attempts}): {source:?}",
                self.address
            );
        }
    }

    /// Abort the current transfer and reset the bus.
    ///
    /// Failures here are only logged; the next attempt will show whether the
    /// bus is usable.
    fn recover(&mut self) {
        if let Err(e) = self.i2c.abort() {
            warn!("Failed to abort I2C transfer: {e:?}");
        }
        if let Err(e) = self.i2c.reset_bus() {
            warn!("Failed to reset I2C bus: {e:?}");
        }
    }

    /// Read a single byte from the chip.
    ///
    /// If the chip does not provide a byte this returns `0`, which cannot be
    /// told apart from a genuine zero.
    fn read_byte(&mut self) -> u8 {
        self.i2c.set_timeout(self.retry.read_timeout());
        let mut buf = [0u8; 1];
        match self.i2c.read(self.address, &mut buf) {
            Ok(()) => buf[0],
            Err(e) => {
                warn!(
                    "No data from AD5252 at {:#04x}, using 0: {e:?}",
                    self.address
                );
                0
            }
        }
    }

    /// Select a register with a "dummy" write, then read it back.
    fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        self.transmit(&[register])?;
        Ok(self.read_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::time::Duration;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    impl TwoWireBus for I2cMock {}

    pub(super) const ADDRESS: u8 = 0x2C;

    pub(super) fn failed_write(bytes: Vec<u8>) -> I2cTransaction {
        I2cTransaction::write(ADDRESS, bytes).with_error(ErrorKind::Other)
    }

    /// Dummy write of `register` then a one-byte read of `value`.
    pub(super) fn register_read(register: u8, value: u8) -> [I2cTransaction; 2] {
        [
            I2cTransaction::write(ADDRESS, vec![register]),
            I2cTransaction::read(ADDRESS, vec![value]),
        ]
    }

    pub(super) fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn probe_acknowledged() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(ADDRESS, vec![])]);
        let mut pot = AD5252::new(i2c.clone());
        assert!(pot.probe());
        i2c.done();
    }

    #[test]
    fn probe_not_acknowledged_is_not_retried() {
        let mut i2c = I2cMock::new(&[failed_write(vec![])]);
        let mut pot = AD5252::new(i2c.clone());
        assert!(!pot.probe());
        i2c.done();
    }

    #[test]
    fn custom_address() {
        let mut i2c = I2cMock::new(&[I2cTransaction::write(0x2F, vec![])]);
        let mut pot = AD5252::with_address(i2c.clone(), 0x2F);
        assert_eq!(pot.address(), 0x2F);
        assert!(pot.probe());
        i2c.done();
    }

    #[test]
    fn transmit_retries_until_success() {
        let mut expectations: Vec<_> = (0..15).map(|_| failed_write(vec![0x80])).collect();
        expectations.push(I2cTransaction::write(ADDRESS, vec![0x80]));
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());
        assert!(pot.transmit(&[0x80]).is_ok());
        i2c.done();
    }

    #[test]
    fn transmit_gives_up_after_max_attempts() {
        let expectations: Vec<_> = (0..16).map(|_| failed_write(vec![0x80])).collect();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone());
        match pot.transmit(&[0x80]) {
            Err(Error::RetriesExhausted { attempts, source }) => {
                assert_eq!(attempts, 16);
                assert_eq!(source, ErrorKind::Other);
            }
            other => panic!("Expected exhausted retries, got {other:?}"),
        }
        i2c.done();
    }

    #[test]
    fn custom_retry_policy() {
        let expectations: Vec<_> = (0..3).map(|_| failed_write(vec![0x01, 0x40])).collect();
        let mut i2c = I2cMock::new(&expectations);
        let mut pot = AD5252::new(i2c.clone()).retry_policy(RetryPolicy {
            max_attempts: 3,
            timeout: Duration::from_millis(10),
        });
        assert!(matches!(
            pot.transmit(&[0x01, 0x40]),
            Err(Error::RetriesExhausted { attempts: 3, .. })
        ));
        i2c.done();
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let mut i2c = I2cMock::new(&[failed_write(vec![0x80])]);
        let mut pot = AD5252::new(i2c.clone()).retry_policy(RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::DEFAULT
        });
        assert!(matches!(
            pot.transmit(&[0x80]),
            Err(Error::RetriesExhausted { attempts: 1, .. })
        ));
        i2c.done();
    }

    #[test]
    fn read_byte_without_data_is_zero() {
        let mut i2c = I2cMock::new(&[
            I2cTransaction::read(ADDRESS, vec![0x00]).with_error(ErrorKind::Other),
        ]);
        let mut pot = AD5252::new(i2c.clone());
        assert_eq!(pot.read_byte(), 0);
        i2c.done();
    }

    #[test]
    fn release_returns_bus() {
        let i2c = I2cMock::new(&[]);
        let pot = AD5252::new(i2c);
        pot.release().done();
    }
}
