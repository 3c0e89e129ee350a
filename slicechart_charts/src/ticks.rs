// Copyright 2025 the Slicechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category-axis tick policy.
//!
//! Labelling every category gets unreadable past a few dozen series. The
//! dynamic policy keeps indices divisible by half the leading power of ten of
//! the largest index: `0..=9` keeps everything, `0..=99` keeps multiples of
//! 5, `0..=999` multiples of 50, and so on.

use alloc::vec::Vec;

use serde::Deserialize;

/// Which category indices get a tick and label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPolicy {
    /// Thin out ticks by the magnitude of the largest index.
    #[default]
    Dynamic,
    /// Tick every category.
    EveryCategory,
}

impl TickPolicy {
    /// Tick indices for `count` categories (`0..count`).
    pub fn ticks(self, count: usize) -> Vec<usize> {
        let domain: Vec<usize> = (0..count).collect();
        match self {
            Self::Dynamic => dynamic_ticks(&domain),
            Self::EveryCategory => domain,
        }
    }
}

/// Number of decimal digits in `n` (`0` has one digit).
pub fn decimal_digits(n: usize) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}

/// `10^(digits(max) - 1) / 2`, never less than one.
///
/// For a single-digit `max` the raw value is `0.5`; every integer index is a
/// multiple of `0.5`, so clamping to `1` keeps exactly the same ticks while
/// staying in integer arithmetic.
pub fn tick_interval(max: usize) -> usize {
    let leading = 10_usize.pow(decimal_digits(max) - 1);
    (leading / 2).max(1)
}

/// Keeps the values of `domain` divisible by [`tick_interval`] of its maximum.
pub fn dynamic_ticks(domain: &[usize]) -> Vec<usize> {
    let Some(&max) = domain.iter().max() else {
        return Vec::new();
    };
    let interval = tick_interval(max);
    domain.iter().copied().filter(|v| v % interval == 0).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(999), 3);
        assert_eq!(decimal_digits(1000), 4);
    }

    #[test]
    fn interval_halves_the_leading_power() {
        assert_eq!(tick_interval(0), 1);
        assert_eq!(tick_interval(7), 1);
        assert_eq!(tick_interval(10), 5);
        assert_eq!(tick_interval(99), 5);
        assert_eq!(tick_interval(100), 50);
        assert_eq!(tick_interval(4321), 500);
    }

    #[test]
    fn single_digit_domain_keeps_every_index() {
        // Matches the fractional 0.5 interval: n % 0.5 == 0 for every integer n.
        let domain: Vec<usize> = (0..10).collect();
        assert_eq!(dynamic_ticks(&domain), domain);
        let fractional: Vec<usize> = domain
            .iter()
            .copied()
            .filter(|v| (*v as f64) % 0.5 == 0.0)
            .collect();
        assert_eq!(dynamic_ticks(&domain), fractional);
    }

    #[test]
    fn two_digit_domain_keeps_multiples_of_five() {
        let ticks = TickPolicy::Dynamic.ticks(23);
        assert_eq!(ticks, vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn every_category_policy_keeps_all() {
        assert_eq!(TickPolicy::EveryCategory.ticks(23).len(), 23);
    }

    #[test]
    fn empty_domain_has_no_ticks() {
        assert!(dynamic_ticks(&[]).is_empty());
        assert!(TickPolicy::Dynamic.ticks(0).is_empty());
    }
}
