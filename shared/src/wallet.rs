use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Smallest withdrawal accepted, in TON.
pub fn min_withdrawal_ton() -> Decimal {
    Decimal::new(10, 2)
}

/// Coins needed to withdraw `amount_ton`. Rounds up so a withdrawal is never
/// cheaper than its exact coin value.
pub fn ton_to_coins(amount_ton: Decimal, conversion_rate: u64) -> Option<i64> {
    amount_ton
        .checked_mul(Decimal::from(conversion_rate))?
        .ceil()
        .to_i64()
}

pub fn coins_to_ton(coins: i64, conversion_rate: u64) -> Decimal {
    Decimal::from(coins)
        .checked_div(Decimal::from(conversion_rate))
        .unwrap_or(Decimal::ZERO)
}

/// Coin cost of withdrawing `amount_ton` from a balance of `coins`.
pub fn withdrawal_cost(amount_ton: Decimal, coins: i64, conversion_rate: u64) -> Result<i64, LedgerError> {
    if amount_ton < min_withdrawal_ton() {
        return Err(LedgerError::BelowMinimumWithdrawal);
    }
    let cost = ton_to_coins(amount_ton, conversion_rate).ok_or(LedgerError::InvalidAmount)?;
    if coins < cost {
        return Err(LedgerError::InsufficientCoins);
    }
    Ok(cost)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Purchase,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCurrency {
    #[serde(rename = "TON")]
    Ton,
    Coins,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

/// One line of the payment history.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: TransactionCurrency,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn amount_text(&self) -> String {
        match self.currency {
            TransactionCurrency::Ton => format!("{:.2} TON", self.amount),
            TransactionCurrency::Coins => format!("{} Coins", self.amount.trunc()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONVERSION_RATE;

    #[test]
    fn test_ton_to_coins() {
        assert_eq!(ton_to_coins(Decimal::new(10, 2), CONVERSION_RATE), Some(1_000_000));
        assert_eq!(ton_to_coins(Decimal::ONE, CONVERSION_RATE), Some(10_000_000));
        // Sub-coin remainders round up
        assert_eq!(ton_to_coins(Decimal::new(1, 8), CONVERSION_RATE), Some(1));
        assert_eq!(ton_to_coins(Decimal::MAX, CONVERSION_RATE), None);
    }

    #[test]
    fn test_coins_to_ton() {
        assert_eq!(coins_to_ton(25_000_000, CONVERSION_RATE), Decimal::new(25, 1));
        assert_eq!(coins_to_ton(0, CONVERSION_RATE), Decimal::ZERO);
        assert_eq!(coins_to_ton(5, 0), Decimal::ZERO);
    }

    #[test]
    fn test_withdrawal_cost() {
        let min = min_withdrawal_ton();
        assert_eq!(withdrawal_cost(min, 1_000_000, CONVERSION_RATE), Ok(1_000_000));
        assert_eq!(
            withdrawal_cost(min, 999_999, CONVERSION_RATE),
            Err(LedgerError::InsufficientCoins)
        );
        assert_eq!(
            withdrawal_cost(Decimal::new(9, 2), i64::MAX, CONVERSION_RATE),
            Err(LedgerError::BelowMinimumWithdrawal)
        );
        assert_eq!(
            withdrawal_cost(Decimal::MAX, i64::MAX, CONVERSION_RATE),
            Err(LedgerError::InvalidAmount)
        );
    }

    #[test]
    fn test_transaction_wire_shape() {
        let json = r#"{"id":"t1","type":"Withdrawal","amount":0.1,"currency":"TON",
            "date":"2024-05-01","status":"Completed"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Withdrawal);
        assert_eq!(tx.currency, TransactionCurrency::Ton);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(tx.amount_text(), "0.10 TON");
    }
}
