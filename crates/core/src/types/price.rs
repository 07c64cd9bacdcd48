//! Naira price representation.
//!
//! Boutique prices are whole naira amounts. There are no minor units on the
//! storefront, so a price is a plain `u64` with display formatting matching
//! `en-NG` currency output (`₦85,000`).

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole naira.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The naira sign.
    pub const SYMBOL: &'static str = "₦";

    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in naira.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units. Saturates instead of wrapping.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format for display (e.g., "₦85,000").
    #[must_use]
    pub fn display(self) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{}{grouped}", Self::SYMBOL)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::new(85_000).display(), "₦85,000");
        assert_eq!(Price::new(1_250_000).display(), "₦1,250,000");
        assert_eq!(Price::new(100_000).display(), "₦100,000");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::ZERO.display(), "₦0");
        assert_eq!(Price::new(999).display(), "₦999");
        assert_eq!(Price::new(1_000).display(), "₦1,000");
    }

    #[test]
    fn test_times_multiplies() {
        assert_eq!(Price::new(28_000).times(3), Price::new(84_000));
        assert_eq!(Price::new(28_000).times(0), Price::ZERO);
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(20_000), Price::new(50_000), Price::new(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(70_001));
    }
}
