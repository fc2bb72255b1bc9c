//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    250.0 * 3 * 0.7 = 524.9999999999999  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    25000 cents * 3 = 75000 cents, minus 30% = 52500 cents              │
//! │    Every promotion total is an exact whole number of cents             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_major_minor(1450, 0);          // $1450.00
//! let line = price.checked_mul_quantity(2).unwrap();     // $2900.00
//! assert_eq!(line.cents(), 290_000);
//!
//! // Amounts that do not fit in cents are refused, never wrapped
//! assert!(price.checked_mul_quantity(i64::MAX).is_none());
//! ```

use std::fmt;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets construction-time validation reject negative prices
///   instead of making them unrepresentable and silently wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked arithmetic only**: every operation that can leave the i64
///   range returns `Option`, so a huge order is an error rather than a panic
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► Promotion::apply(price, qty) ──► line charge        │
/// │                              │                                          │
/// │                              ▼                                          │
/// │               Store::order sums line charges ──► order total           │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` if the result overflows.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul_quantity(3).unwrap().cents(), 897);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the result overflows.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Scales the amount by `numerator / denominator`, rounding half away
    /// from zero to the nearest cent. `None` if the result overflows.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// // One and a half units of $0.99 = $1.485 → $1.49
    /// assert_eq!(Money::from_cents(99).checked_mul_ratio(3, 2).unwrap().cents(), 149);
    /// assert_eq!(Money::from_cents(10_000).checked_mul_ratio(3, 2).unwrap().cents(), 15_000);
    /// ```
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    pub fn checked_mul_ratio(&self, numerator: i64, denominator: i64) -> Option<Money> {
        let scaled = self.0 as i128 * numerator as i128;
        let rounded = round_div(scaled, denominator as i128);
        i64::try_from(rounded).ok().map(Money)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The rate is applied exactly and the discount rounded once, so the
    /// result is the nearest cent to `amount × (1 − percent/100)`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountRate;
    ///
    /// let line = Money::from_cents(25_000); // $250.00
    /// let discounted = line.apply_percentage_discount(DiscountRate::from_percentage(30.0).unwrap());
    /// assert_eq!(discounted.cents(), 17_500); // $175.00
    /// ```
    pub fn apply_percentage_discount(&self, rate: DiscountRate) -> Money {
        let (numerator, shift) = rate.as_fraction();
        // |cents| < 2^63 and numerator < 2^53, so the product fits in i128.
        // Past a shift of 120 the discount is below half a cent.
        let discount = if shift > 120 {
            0
        } else {
            round_div(self.0 as i128 * numerator as i128, 100i128 << shift)
        };
        // 0 <= |discount| <= |amount| with matching sign, so this cannot overflow
        Money(self.0 - discount as i64)
    }
}

/// Integer division rounding half away from zero.
fn round_div(numerator: i128, denominator: i128) -> i128 {
    let magnitude = (numerator.abs() + denominator.abs() / 2) / denominator.abs();
    if (numerator < 0) != (denominator < 0) {
        -magnitude
    } else {
        magnitude
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering, e.g. `$1450.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
