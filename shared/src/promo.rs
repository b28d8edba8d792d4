use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoKind {
    Coins,
    Spins,
    TonAdCredit,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: PromoKind,
    pub value: Decimal,
    pub max_uses: u32,
    #[serde(default)]
    pub used_by: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PromoCode {
    pub fn new(code: &str, kind: PromoKind, value: Decimal, max_uses: u32) -> Self {
        Self {
            code: code.to_string(),
            kind,
            value,
            max_uses,
            used_by: Vec::new(),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn used_by(mut self, users: &[u64]) -> Self {
        self.used_by.extend_from_slice(users);
        self
    }

    pub fn matches(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }

    /// Checks are applied in this order: usage limit, expiry, prior use.
    pub fn check_redeemable(&self, user_id: u64, now: DateTime<Utc>) -> Result<(), LedgerError> {
        if self.used_by.len() >= self.max_uses as usize {
            return Err(LedgerError::PromoCodeExhausted);
        }
        if self.expires_at.is_some_and(|at| at < now) {
            return Err(LedgerError::PromoCodeExpired);
        }
        if self.used_by.contains(&user_id) {
            return Err(LedgerError::PromoCodeAlreadyUsed);
        }
        Ok(())
    }

    /// Text shown after "You received".
    pub fn reward_text(&self) -> String {
        match self.kind {
            PromoKind::Coins => format!("{} Coins", group_thousands(&self.value)),
            PromoKind::Spins => format!("{} free spin(s)", self.value.normalize()),
            PromoKind::TonAdCredit => format!("{} TON in ad credits", self.value.normalize()),
        }
    }
}

pub(crate) fn group_thousands(value: &Decimal) -> String {
    let digits = value.trunc().abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value.is_sign_negative() {
        out.insert(0, '-');
    }
    out
}

/// Codes seeded into the local ledger.
pub fn sample_promo_codes(now: DateTime<Utc>) -> Vec<PromoCode> {
    vec![
        PromoCode::new("WELCOME_COINS", PromoKind::Coins, Decimal::from(25_000), 1000)
            .expiring_at(now + Duration::days(30)),
        PromoCode::new("SPIN_ME", PromoKind::Spins, Decimal::from(3), 500),
        PromoCode::new("AD_BONUS", PromoKind::TonAdCredit, Decimal::new(5, 1), 200),
        PromoCode::new("USED_CODE", PromoKind::Coins, Decimal::from(100), 100).used_by(&[1]),
        PromoCode::new("EXPIRED_CODE", PromoKind::Coins, Decimal::from(100), 2)
            .used_by(&[2, 3])
            .expiring_at(now - Duration::days(1)),
    ]
}
