//! Calls to the backend. Each call goes over HTTP or to the in-memory ledger
//! depending on [`api_mode`]; callers see the same types either way.

mod http;
mod local;

use shared::api::{
    BuySpinsRequest, CampaignResponse, CreatePartnerTaskRequest, CreateTaskRequest,
    DepositRequest, DepositResponse, MessageResponse, RedeemPromoRequest, SpinResponse,
    WithdrawalRequest, WithdrawalResponse,
};
use shared::campaign::Campaign;
use shared::constants::{
    AD_CREDIT_DEPOSIT_ENDPOINT, BUY_SPINS_ENDPOINT, COMPLETE_TASK_FOR_SPIN_ENDPOINT,
    INVITE_FRIEND_FOR_SPIN_ENDPOINT, NETWORK_ERROR, PARTNER_TASKS_ENDPOINT,
    PROMO_REDEEM_ENDPOINT, SPIN_WHEEL_ENDPOINT, TRANSACTIONS_ENDPOINT, USER_CAMPAIGNS_ENDPOINT,
    USER_ENDPOINT, WATCH_AD_FOR_SPIN_ENDPOINT, WITHDRAWALS_ENDPOINT,
};
use shared::spin_limits::SpinSource;
use shared::user::UserProjection;
use shared::wallet::Transaction;
use thiserror::Error;

use crate::config::{api_mode, ApiMode};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not read response: {0}")]
    Decode(String),
}

impl ApiError {
    /// What the user is told. Transport details only go to the log.
    pub fn user_message(&self) -> &'static str {
        NETWORK_ERROR
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

pub async fn fetch_user() -> Result<UserProjection, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::fetch_user().await),
        ApiMode::Http => http::get_json(USER_ENDPOINT).await,
    }
}

pub async fn spin_wheel() -> Result<SpinResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::spin_wheel().await),
        ApiMode::Http => http::post_empty(SPIN_WHEEL_ENDPOINT).await,
    }
}

/// Credits one spin from a daily-capped source.
pub async fn earn_spin(source: SpinSource) -> Result<MessageResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::earn_spin(source).await),
        ApiMode::Http => {
            let endpoint = match source {
                SpinSource::WatchAd => WATCH_AD_FOR_SPIN_ENDPOINT,
                SpinSource::CompleteTask => COMPLETE_TASK_FOR_SPIN_ENDPOINT,
                SpinSource::InviteFriend => INVITE_FRIEND_FOR_SPIN_ENDPOINT,
            };
            http::post_empty(endpoint).await
        }
    }
}

pub async fn buy_spins(request: BuySpinsRequest) -> Result<MessageResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::buy_spins(request).await),
        ApiMode::Http => http::post_json(BUY_SPINS_ENDPOINT, &request).await,
    }
}

pub async fn withdraw(request: WithdrawalRequest) -> Result<WithdrawalResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::withdraw(request).await),
        ApiMode::Http => http::post_json(WITHDRAWALS_ENDPOINT, &request).await,
    }
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::fetch_transactions().await),
        ApiMode::Http => http::get_json(TRANSACTIONS_ENDPOINT).await,
    }
}

pub async fn fetch_campaigns() -> Result<Vec<Campaign>, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::fetch_campaigns().await),
        ApiMode::Http => http::get_json(USER_CAMPAIGNS_ENDPOINT).await,
    }
}

pub async fn create_task(request: CreateTaskRequest) -> Result<CampaignResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::create_task(request).await),
        ApiMode::Http => http::post_json(USER_CAMPAIGNS_ENDPOINT, &request).await,
    }
}

pub async fn create_partner_task(request: CreatePartnerTaskRequest) -> Result<CampaignResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::create_partner_task(request).await),
        ApiMode::Http => http::post_json(PARTNER_TASKS_ENDPOINT, &request).await,
    }
}

pub async fn redeem_promo_code(request: RedeemPromoRequest) -> Result<MessageResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::redeem_promo_code(request).await),
        ApiMode::Http => http::post_json(PROMO_REDEEM_ENDPOINT, &request).await,
    }
}

pub async fn deposit_ad_credit(request: DepositRequest) -> Result<DepositResponse, ApiError> {
    match api_mode() {
        ApiMode::Local => Ok(local::deposit_ad_credit(request).await),
        ApiMode::Http => http::post_json(AD_CREDIT_DEPOSIT_ENDPOINT, &request).await,
    }
}
