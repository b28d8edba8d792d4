use std::cell::RefCell;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use shared::api::{
    BuySpinsRequest, CampaignResponse, CreatePartnerTaskRequest, CreateTaskRequest,
    DepositRequest, DepositResponse, MessageResponse, RedeemPromoRequest, SpinResponse,
    WithdrawalRequest, WithdrawalResponse,
};
use shared::campaign::Campaign;
use shared::ledger::InMemoryLedger;
use shared::spin_limits::SpinSource;
use shared::user::UserProjection;
use shared::wallet::Transaction;

// Simulated round trips, so latches and timers behave as they do against a server
const DEFAULT_DELAY_MS: u32 = 500;
const SPIN_DELAY_MS: u32 = 100;
const PROMO_DELAY_MS: u32 = 400;
const CAMPAIGN_DELAY_MS: u32 = 1000;
const DEPOSIT_DELAY_MS: u32 = 1000;
const WATCH_AD_DELAY_MS: u32 = 200;
const EARN_SPIN_DELAY_MS: u32 = 50;
const BUY_SPINS_DELAY_MS: u32 = 1000;
const WITHDRAWAL_DELAY_MS: u32 = 1500;

thread_local! {
    static LEDGER: RefCell<InMemoryLedger> = RefCell::new(InMemoryLedger::new(Utc::now()));
}

fn with_ledger<T>(f: impl FnOnce(&mut InMemoryLedger) -> T) -> T {
    LEDGER.with(|ledger| f(&mut ledger.borrow_mut()))
}

pub async fn fetch_user() -> UserProjection {
    TimeoutFuture::new(DEFAULT_DELAY_MS).await;
    with_ledger(|ledger| ledger.user())
}

pub async fn spin_wheel() -> SpinResponse {
    TimeoutFuture::new(SPIN_DELAY_MS).await;
    let random_unit: f64 = rand::thread_rng().gen();
    with_ledger(|ledger| ledger.spin(random_unit))
}

pub async fn earn_spin(source: SpinSource) -> MessageResponse {
    let delay = match source {
        SpinSource::WatchAd => WATCH_AD_DELAY_MS,
        _ => EARN_SPIN_DELAY_MS,
    };
    TimeoutFuture::new(delay).await;
    with_ledger(|ledger| ledger.earn_spin(source))
}

pub async fn buy_spins(request: BuySpinsRequest) -> MessageResponse {
    TimeoutFuture::new(BUY_SPINS_DELAY_MS).await;
    with_ledger(|ledger| ledger.buy_spins(&request, Utc::now()))
}

pub async fn withdraw(request: WithdrawalRequest) -> WithdrawalResponse {
    TimeoutFuture::new(WITHDRAWAL_DELAY_MS).await;
    with_ledger(|ledger| ledger.withdraw(&request, Utc::now()))
}

pub async fn fetch_transactions() -> Vec<Transaction> {
    TimeoutFuture::new(DEFAULT_DELAY_MS).await;
    with_ledger(|ledger| ledger.transactions())
}

pub async fn fetch_campaigns() -> Vec<Campaign> {
    TimeoutFuture::new(DEFAULT_DELAY_MS).await;
    with_ledger(|ledger| ledger.campaigns())
}

pub async fn create_task(request: CreateTaskRequest) -> CampaignResponse {
    TimeoutFuture::new(CAMPAIGN_DELAY_MS).await;
    with_ledger(|ledger| ledger.create_task(&request))
}

pub async fn create_partner_task(request: CreatePartnerTaskRequest) -> CampaignResponse {
    TimeoutFuture::new(CAMPAIGN_DELAY_MS).await;
    with_ledger(|ledger| ledger.create_partner_task(&request))
}

pub async fn redeem_promo_code(request: RedeemPromoRequest) -> MessageResponse {
    TimeoutFuture::new(PROMO_DELAY_MS).await;
    with_ledger(|ledger| ledger.redeem_promo_code(&request, Utc::now()))
}

pub async fn deposit_ad_credit(request: DepositRequest) -> DepositResponse {
    TimeoutFuture::new(DEPOSIT_DELAY_MS).await;
    with_ledger(|ledger| ledger.deposit_ad_credit(&request, Utc::now()))
}
