//! Growth configuration.

use crate::error::ConfigError;

/// How a [`DynArray`](crate::DynArray) picks its next capacity when an
/// append or insert finds it full.
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    bootstrap_capacity: usize,
    growth_factor: usize,
}

impl GrowthPolicy {
    /// Capacity an empty, unallocated array grows to on its first append.
    ///
    /// Default: 1. Doubling a zero capacity would never make room.
    pub const DEFAULT_BOOTSTRAP_CAPACITY: usize = 1;

    /// Multiplier applied to a non-zero capacity.
    ///
    /// Default: 2.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// The default policy: bootstrap to 1, then double.
    pub const DEFAULT: Self = Self {
        bootstrap_capacity: Self::DEFAULT_BOOTSTRAP_CAPACITY,
        growth_factor: Self::DEFAULT_GROWTH_FACTOR,
    };

    /// Create a validated policy.
    ///
    /// Rejects a zero bootstrap capacity and factors below 2.
    pub fn new(bootstrap_capacity: usize, growth_factor: usize) -> Result<Self, ConfigError> {
        if bootstrap_capacity == 0 {
            return Err(ConfigError::ZeroBootstrap);
        }
        if growth_factor < 2 {
            return Err(ConfigError::FactorTooSmall {
                factor: growth_factor,
            });
        }
        Ok(Self {
            bootstrap_capacity,
            growth_factor,
        })
    }

    /// Capacity used when growing from zero.
    pub fn bootstrap_capacity(&self) -> usize {
        self.bootstrap_capacity
    }

    /// Multiplier used when growing from a non-zero capacity.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// The capacity to grow to from `current`.
    ///
    /// If multiplying would overflow, falls back to `current + 1`.
    /// Returns `None` only when `current == usize::MAX`.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        if current == 0 {
            return Some(self.bootstrap_capacity);
        }
        current
            .checked_mul(self.growth_factor)
            .or_else(|| current.checked_add(1))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bootstraps_then_doubles() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(0), Some(1));
        assert_eq!(policy.next_capacity(1), Some(2));
        assert_eq!(policy.next_capacity(2), Some(4));
        assert_eq!(policy.next_capacity(100), Some(200));
    }

    #[test]
    fn custom_policy_preserved() {
        let policy = GrowthPolicy::new(8, 3).unwrap();
        assert_eq!(policy.bootstrap_capacity(), 8);
        assert_eq!(policy.growth_factor(), 3);
        assert_eq!(policy.next_capacity(0), Some(8));
        assert_eq!(policy.next_capacity(8), Some(24));
    }

    #[test]
    fn zero_bootstrap_rejected() {
        assert_eq!(GrowthPolicy::new(0, 2), Err(ConfigError::ZeroBootstrap));
    }

    #[test]
    fn factor_below_two_rejected() {
        assert_eq!(
            GrowthPolicy::new(1, 1),
            Err(ConfigError::FactorTooSmall { factor: 1 })
        );
    }

    #[test]
    fn multiplication_overflow_falls_back_to_exact_fit() {
        let policy = GrowthPolicy::default();
        let big = usize::MAX / 2 + 1;
        assert_eq!(policy.next_capacity(big), Some(big + 1));
        assert_eq!(policy.next_capacity(usize::MAX), None);
    }
}
