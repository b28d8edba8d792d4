use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::campaign::Campaign;
use crate::spin_store::PaymentCurrency;
use crate::spin_wheel::{PrizeEntry, SpinOutcome};
use crate::user::UserProjection;
use crate::validation::{validate_positive_amount, validate_promo_code, validate_task_link};

// === Spin ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizePayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
    pub label: String,
}

impl From<&PrizeEntry> for PrizePayload {
    fn from(entry: &PrizeEntry) -> Self {
        Self {
            kind: entry.kind.as_str().to_string(),
            value: i64::from(entry.amount),
            label: entry.label.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResponse {
    pub success: bool,
    pub prize: PrizePayload,
    pub user: UserProjection,
}

impl SpinResponse {
    /// The outcome of a successful spin. `None` when the backend refused it,
    /// in which case `prize.label` carries the reason.
    pub fn outcome(&self) -> Option<SpinOutcome> {
        self.success.then(|| SpinOutcome {
            prize_label: self.prize.label.clone(),
            prize_amount: self.prize.value,
            updated_balance: self.user.coins,
        })
    }

    pub fn rejected(reason: &str, user: UserProjection) -> Self {
        Self {
            success: false,
            prize: PrizePayload {
                kind: "ERROR".to_string(),
                value: 0,
                label: reason.to_string(),
            },
            user,
        }
    }
}

// === Campaigns ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct CreateTaskRequest {
    #[validate(custom = "validate_task_link")]
    pub link: String,
    #[validate(range(min = 1))]
    pub goal: u32,
    #[validate(custom = "validate_positive_amount")]
    pub cost: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct CreatePartnerTaskRequest {
    #[validate(custom = "validate_task_link")]
    pub link: String,
    #[validate(range(min = 1))]
    pub goal: u32,
    #[validate(custom = "validate_positive_amount")]
    pub cost: Decimal,
    #[validate(range(min = 1, max = 10))]
    pub level: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_campaign: Option<Campaign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProjection>,
}

// === Promo codes, deposits, spin earning ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct RedeemPromoRequest {
    #[validate(custom = "validate_promo_code")]
    pub code: String,
}

/// Generic `{ success, message, user? }` reply.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProjection>,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>, user: UserProjection) -> Self {
        Self { success: true, message: message.into(), user: Some(user) }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), user: None }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct DepositRequest {
    #[validate(custom = "validate_positive_amount")]
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DepositResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProjection>,
}

// === Withdrawals and the spin store ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    #[validate(custom = "validate_positive_amount")]
    pub amount_in_ton: Decimal,
}

/// Same `{ success, user? }` shape as a deposit reply.
pub type WithdrawalResponse = DepositResponse;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BuySpinsRequest {
    #[validate(length(min = 1))]
    pub package_id: String,
    pub currency: PaymentCurrency,
}
