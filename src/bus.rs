//! Bus recovery hooks and retry configuration.
//!
//! The driver talks to the AD5252 through the blocking [`I2c`] trait from
//! [`embedded_hal`]. That trait has no notion of timeouts or of recovering a
//! wedged bus, both of which the driver uses between retries, so they are
//! provided by [`TwoWireBus`].
use core::time::Duration;

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};

use crate::constants::{ATTEMPT_TIMEOUT, MAX_ATTEMPTS};

/// Recovery operations for an I2C bus controller.
///
/// All methods have no-op default implementations, so a bus that cannot do
/// any of this only needs an empty `impl`. Alternatively wrap it in
/// [`Unrecoverable`].
pub trait TwoWireBus: I2c<SevenBitAddress> {
    /// Set the timeout for subsequent transfers.
    ///
    /// The driver calls this before every attempt.
    fn set_timeout(&mut self, _timeout: Duration) {}

    /// Abandon the transfer in progress, if any, and flush queued bytes.
    fn abort(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Reset the bus controller, for example by clocking out a stuck target
    /// and issuing a STOP condition.
    fn reset_bus(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: TwoWireBus + ?Sized> TwoWireBus for &mut T {
    fn set_timeout(&mut self, timeout: Duration) {
        T::set_timeout(self, timeout)
    }

    fn abort(&mut self) -> Result<(), Self::Error> {
        T::abort(self)
    }

    fn reset_bus(&mut self) -> Result<(), Self::Error> {
        T::reset_bus(self)
    }
}

/// Adapter for an I2C bus with no recovery operations.
///
/// The driver will still retry failed writes, but cannot do anything between
/// attempts to clear the fault.
#[derive(Debug)]
pub struct Unrecoverable<I2C>(I2C);

impl<I2C> Unrecoverable<I2C> {
    /// Wrap the given bus.
    pub fn new(i2c: I2C) -> Self {
        Self(i2c)
    }

    /// Unwrap the bus.
    pub fn into_inner(self) -> I2C {
        self.0
    }
}

impl<I2C: ErrorType> ErrorType for Unrecoverable<I2C> {
    type Error = I2C::Error;
}

impl<I2C: I2c> I2c for Unrecoverable<I2C> {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.0.transaction(address, operations)
    }

    fn read(&mut self, address: SevenBitAddress, read: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(address, read)
    }

    fn write(&mut self, address: SevenBitAddress, write: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, write)
    }

    fn write_read(
        &mut self,
        address: SevenBitAddress,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.write_read(address, write, read)
    }
}

impl<I2C: I2c> TwoWireBus for Unrecoverable<I2C> {}

/// How hard the driver tries to complete a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u8,
    /// Bus timeout for each write attempt. Reads are given twice this.
    pub timeout: Duration,
}

impl RetryPolicy {
    /// Sixteen attempts of one second each.
    pub const DEFAULT: RetryPolicy = RetryPolicy {
        max_attempts: MAX_ATTEMPTS,
        timeout: ATTEMPT_TIMEOUT,
    };

    /// Timeout used for single-byte reads, which the chip answers more slowly.
    pub(crate) fn read_timeout(&self) -> Duration {
        self.timeout.saturating_mul(2)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
