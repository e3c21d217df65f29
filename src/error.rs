use core::fmt;

/// Wrapper for problems when communicating with the AD5252.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug)]
pub enum Error<E> {
    /// Every attempt at a write failed.
    ///
    /// The driver aborts the transfer and resets the bus after each failure,
    /// so this indicates a problem that bus recovery could not clear, such as
    /// a missing device or a wiring fault.
    RetriesExhausted {
        /// Number of attempts made, equal to [`RetryPolicy::max_attempts`].
        ///
        /// [`RetryPolicy::max_attempts`]: crate::RetryPolicy::max_attempts
        attempts: u8,
        /// Error reported by the bus on the final attempt.
        source: E,
    },
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RetriesExhausted { attempts, source } => write!(
                f,
                "unrecoverable I2C transmission error with AD5252 after {attempts} attempts: {source:?}"
            ),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
