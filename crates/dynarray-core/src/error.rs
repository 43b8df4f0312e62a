//! Container configuration errors.
//!
//! Allocation failures are reported with [`AllocError`](crate::AllocError)
//! from `dynarray-alloc`; this module only covers invalid configuration.

use std::error::Error;
use std::fmt;

/// Errors from validating a [`GrowthPolicy`](crate::GrowthPolicy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The bootstrap capacity was zero, so an empty array could never grow.
    ZeroBootstrap,
    /// The growth factor would not increase a non-empty capacity.
    FactorTooSmall {
        /// The rejected factor.
        factor: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBootstrap => write!(f, "bootstrap capacity must be at least 1"),
            Self::FactorTooSmall { factor } => {
                write!(f, "growth factor {factor} is too small, must be at least 2")
            }
        }
    }
}

impl Error for ConfigError {}
