#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod bus;
mod channel;
mod commands;
mod constants;
mod driver;
mod error;
mod tolerance;

pub use bus::{RetryPolicy, TwoWireBus, Unrecoverable};
pub use channel::Channel;
pub use commands::Command;
pub use constants::{DEFAULT_ADDRESS, DEFAULT_NOMINAL_RESISTANCE, WIPER_RESISTANCE};
pub use driver::AD5252;
pub use error::Error;
pub use tolerance::Tolerance;
