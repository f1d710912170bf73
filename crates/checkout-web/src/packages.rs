//! Coin Package Catalog

use checkout_core::{Decimal, Package, Result};

/// `(coins, price in cents)` for every package on sale
const CATALOG: [(u32, i64); 4] = [(100, 100), (500, 499), (1_200, 999), (2_500, 1_999)];

/// Packages offered on the store page, cheapest first
pub fn catalog() -> Result<Vec<Package>> {
    CATALOG
        .iter()
        .map(|&(coins, cents)| Package::new(coins, Decimal::new(cents, 2)))
        .collect()
}

/// Package highlighted as the best deal
pub const FEATURED_COINS: u32 = 1_200;
