//! Monetary amounts.

use std::fmt;

/// A non-negative amount, stored in minor units (cents).
///
/// Arithmetic is checked: anything that would leave the `u64` range yields
/// `None` instead of a wrapped amount.
///
/// ```
/// use solid_invoice::Money;
///
/// let price = Money::from_units(450).and_then(|p| p.checked_add(Money::from_cents(99)));
/// assert_eq!(price.map(|p| p.to_string()), Some("450.99".to_string()));
/// assert_eq!(Money::from_units(u64::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(u64::MAX);

    /// Creates an amount from whole units, or `None` if it does not fit.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(100).map(Money)
    }

    /// Creates an amount from minor units.
    pub fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Returns the amount in minor units.
    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Adds up `amounts`, stopping at the first overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
