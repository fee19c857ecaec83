use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// rounding used for every monetary figure: half away from zero
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Currency amount in major units.
///
/// Amounts are kept exact; rounding to the currency precision happens only
/// where the schedule calculation asks for it (see [`Money::round_to`]).
/// The operator impls panic on overflow the same way `Decimal` does, so the
/// schedule engine sticks to the `checked_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal without rounding
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str_exact(s)?))
    }

    /// create from integer amount (won, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to `scale` fractional digits, half away from zero
    pub fn round_to(&self, scale: u32) -> Self {
        Money(self.0.round_dp_with_strategy(scale, ROUNDING))
    }

    /// true when the amount carries no digits beyond `scale`
    pub fn fits_scale(&self, scale: u32) -> bool {
        self.round_to(scale).0 == self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// multiply by a rate factor, unrounded
    pub fn checked_mul(self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// divide into `parts` equal shares, unrounded
    pub fn checked_split(self, parts: u32) -> Option<Money> {
        self.0.checked_div(Decimal::from(parts)).map(Money)
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i64> for Money {
    fn from(i: i64) -> Self {
        Money::from_major(i)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

/// annual nominal interest rate, stored as a fraction (0.055 for 5.5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.055 for 5.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percent per year (e.g., 5.5 for 5.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / dec!(100))
    }

    /// create from basis points (e.g., 550 for 5.5%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / dec!(10000))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// percent per year, `None` when the fraction is too large to scale by 100
    pub fn as_percentage(&self) -> Option<Decimal> {
        self.0.checked_mul(dec!(100))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Monthly periodic rate (`annual / 12`).
    ///
    /// With `scale` set, both the annual fraction and the monthly rate are
    /// rounded to that many digits before use, as a fixed-precision ledger does.
    pub fn periodic_rate(&self, scale: Option<u32>) -> Decimal {
        match scale {
            Some(dp) => {
                let annual = self.0.round_dp_with_strategy(dp, ROUNDING);
                (annual / dec!(12)).round_dp_with_strategy(dp, ROUNDING)
            }
            None => self.0 / dec!(12),
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_percentage() {
            Some(percent) => write!(f, "{}%", percent.normalize()),
            None => write!(f, "{} (fraction)", self.0.normalize()),
        }
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}
