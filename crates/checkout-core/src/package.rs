//! Coin Packages
//!
//! A package is what the buyer pays for: a number of coins at a fixed price
//! in the reference currency.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, Result};

/// Minor units per major unit of the reference currency
const MINOR_UNITS: Decimal = Decimal::ONE_HUNDRED;

/// An immutable coin package
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PackageFields")]
pub struct Package {
    coins: u32,
    price: Decimal,
}

/// Unvalidated wire form of [`Package`]
#[derive(Deserialize)]
struct PackageFields {
    coins: u32,
    price: Decimal,
}

impl TryFrom<PackageFields> for Package {
    type Error = CheckoutError;

    fn try_from(fields: PackageFields) -> Result<Self> {
        Self::new(fields.coins, fields.price)
    }
}

impl Package {
    /// Create a package, rejecting zero coins and non-positive prices
    pub fn new(coins: u32, price: Decimal) -> Result<Self> {
        if coins == 0 {
            return Err(CheckoutError::InvalidPackage("coins must be positive".into()));
        }
        if price <= Decimal::ZERO {
            return Err(CheckoutError::InvalidPackage(format!(
                "price must be positive, got {price}"
            )));
        }
        Ok(Self { coins, price })
    }

    pub const fn coins(&self) -> u32 {
        self.coins
    }

    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Charge amount in minor currency units (cents).
    ///
    /// Fractional cents round half-up, away from zero: `4.995` becomes `500`,
    /// `4.994` becomes `499`.
    pub fn amount_minor(&self) -> Result<i64> {
        let scaled = self
            .price
            .checked_mul(MINOR_UNITS)
            .ok_or(CheckoutError::AmountOutOfRange(self.price))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        scaled
            .to_i64()
            .filter(|amount| *amount > 0)
            .ok_or(CheckoutError::AmountOutOfRange(self.price))
    }

    /// Price formatted for display, e.g. `$4.99`. Uses the same rounding
    /// as [`Package::amount_minor`].
    pub fn display_price(&self) -> String {
        let cents = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${cents:.2}")
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} coins for {}", self.coins, self.display_price())
    }
}
