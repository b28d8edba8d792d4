use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::promo::group_thousands;
use crate::wallet::ton_to_coins;

/// How a spin package is paid for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentCurrency {
    #[default]
    Coins,
    Ton,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinPackage {
    pub id: String,
    pub spins: u32,
    pub cost_ton: Decimal,
}

impl SpinPackage {
    fn new(id: &str, spins: u32, cost_ton: Decimal) -> Self {
        Self { id: id.to_string(), spins, cost_ton }
    }

    pub fn cost_in_coins(&self, conversion_rate: u64) -> Option<i64> {
        ton_to_coins(self.cost_ton, conversion_rate)
    }

    /// "200K Coins", "1.5M Coins" or "0.02 TON".
    pub fn price_text(&self, currency: PaymentCurrency, conversion_rate: u64) -> String {
        match currency {
            PaymentCurrency::Ton => format!("{} TON", self.cost_ton.normalize()),
            PaymentCurrency::Coins => match self.cost_in_coins(conversion_rate) {
                Some(coins) => short_coins(coins),
                None => "-".to_string(),
            },
        }
    }
}

fn short_coins(coins: i64) -> String {
    let scaled = |div: i64| (Decimal::from(coins) / Decimal::from(div)).round_dp(1).normalize();
    if coins >= 1_000_000 {
        format!("{}M Coins", scaled(1_000_000))
    } else if coins >= 1_000 {
        format!("{}K Coins", scaled(1_000))
    } else {
        format!("{} Coins", coins)
    }
}

pub static SPIN_STORE_PACKAGES: Lazy<Vec<SpinPackage>> = Lazy::new(|| {
    vec![
        SpinPackage::new("sp10", 10, Decimal::new(2, 2)),
        SpinPackage::new("sp50", 50, Decimal::new(1, 1)),
        SpinPackage::new("sp100", 100, Decimal::new(2, 1)),
        SpinPackage::new("sp500", 500, Decimal::ONE),
        SpinPackage::new("sp1000", 1000, Decimal::from(2)),
        SpinPackage::new("sp5000", 5000, Decimal::from(10)),
        SpinPackage::new("sp10000", 10_000, Decimal::from(20)),
        SpinPackage::new("sp50000", 50_000, Decimal::from(100)),
    ]
});

pub fn find_package(id: &str) -> Option<&'static SpinPackage> {
    SPIN_STORE_PACKAGES.iter().find(|p| p.id == id)
}

pub fn purchase_message(spins: u32) -> String {
    format!("Successfully purchased {} spins!", group_thousands(&Decimal::from(spins)))
}
