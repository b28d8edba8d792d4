use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::Validate;

use crate::api::{
    BuySpinsRequest, CampaignResponse, CreatePartnerTaskRequest, CreateTaskRequest,
    DepositRequest, DepositResponse, MessageResponse, PrizePayload, RedeemPromoRequest,
    SpinResponse, WithdrawalRequest, WithdrawalResponse,
};
use crate::campaign::{Campaign, CampaignCategory, CampaignStatus};
use crate::constants::{CAMPAIGN_CREATED, CONVERSION_RATE, PARTNER_TASK_CREATED};
use crate::error::LedgerError;
use crate::promo::{sample_promo_codes, PromoCode, PromoKind};
use crate::spin_limits::{SpinLimitCheck, SpinSource};
use crate::spin_store::{find_package, purchase_message, PaymentCurrency};
use crate::spin_wheel::{PrizeCatalog, PrizeEntry, SPIN_WHEEL_PRIZES};
use crate::user::UserProjection;
use crate::wallet::{
    withdrawal_cost, Transaction, TransactionCurrency, TransactionKind, TransactionStatus,
};

pub const LOCAL_USER_ID: u64 = 1;
pub const LOCAL_USER_NAME: &str = "User";

/// Single-user stand-in for the backend, used when the app runs without a
/// server. Every mutation returns the full user projection, as the real
/// backend does.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    user: UserProjection,
    catalog: PrizeCatalog,
    campaigns: Vec<Campaign>,
    promo_codes: Vec<PromoCode>,
    transactions: Vec<Transaction>,
    next_campaign_id: u64,
    next_transaction_id: u64,
}

impl InMemoryLedger {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_parts(
            UserProjection::new(LOCAL_USER_ID, LOCAL_USER_NAME),
            SPIN_WHEEL_PRIZES.clone(),
            sample_promo_codes(now),
        )
    }

    pub fn with_parts(user: UserProjection, catalog: PrizeCatalog, promo_codes: Vec<PromoCode>) -> Self {
        Self {
            user,
            catalog,
            campaigns: Vec::new(),
            promo_codes,
            transactions: Vec::new(),
            next_campaign_id: 1,
            next_transaction_id: 1,
        }
    }

    pub fn user(&self) -> UserProjection {
        self.user.clone()
    }

    /// Newest first.
    pub fn campaigns(&self) -> Vec<Campaign> {
        self.campaigns.clone()
    }

    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Payment history, newest first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    fn record_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        currency: TransactionCurrency,
        now: DateTime<Utc>,
    ) {
        let tx = Transaction {
            id: format!("t{}", self.next_transaction_id),
            kind,
            amount,
            currency,
            date: now.date_naive(),
            status: TransactionStatus::Completed,
        };
        self.next_transaction_id += 1;
        self.transactions.insert(0, tx);
    }

    // === Spins ===

    pub fn spin(&mut self, random_unit: f64) -> SpinResponse {
        match self.try_spin(random_unit) {
            Ok(prize) => SpinResponse {
                success: true,
                prize,
                user: self.user(),
            },
            Err(err) => {
                log::info!("spin rejected: {}", err);
                SpinResponse::rejected(&err.to_string(), self.user())
            }
        }
    }

    fn try_spin(&mut self, random_unit: f64) -> Result<PrizePayload, LedgerError> {
        if self.user.spins == 0 {
            return Err(LedgerError::NoSpinsLeft);
        }

        let prize: &PrizeEntry = self.catalog.draw(random_unit);
        self.user.coins = self
            .user
            .coins
            .checked_add(i64::from(prize.amount))
            .ok_or(LedgerError::InvalidAmount)?;
        self.user.spins -= 1;
        log::debug!(
            "spin drew {} ({} coins), {} spins left",
            prize.label,
            prize.amount,
            self.user.spins
        );
        Ok(PrizePayload::from(prize))
    }

    pub fn earn_spin(&mut self, source: SpinSource) -> MessageResponse {
        match self.try_earn_spin(source) {
            Ok(remaining) => {
                log::debug!("{:?} earned a spin, {} remaining today", source, remaining);
                MessageResponse::ok(source.get_success_message(), self.user())
            }
            Err(err) => {
                log::info!("{:?} spin refused: {}", source, err);
                MessageResponse::failed(err.to_string())
            }
        }
    }

    fn try_earn_spin(&mut self, source: SpinSource) -> Result<u32, LedgerError> {
        let check = SpinLimitCheck::new(source, &self.user);
        if check.is_locked {
            return Err(LedgerError::DailyLimitReached(source.get_error_message()));
        }
        self.user.spins = self.user.spins.checked_add(1).ok_or(LedgerError::InvalidAmount)?;
        *source.counter_mut(&mut self.user) += 1;
        Ok(check.remaining - 1)
    }

    pub fn watch_ad_for_spin(&mut self) -> MessageResponse {
        self.earn_spin(SpinSource::WatchAd)
    }

    pub fn complete_task_for_spin(&mut self) -> MessageResponse {
        self.earn_spin(SpinSource::CompleteTask)
    }

    pub fn invite_friend_for_spin(&mut self) -> MessageResponse {
        self.earn_spin(SpinSource::InviteFriend)
    }

    /// Coin purchases are debited here. TON purchases are paid from the
    /// user's TON balance, which stands in for the wallet transfer.
    pub fn buy_spins(&mut self, request: &BuySpinsRequest, now: DateTime<Utc>) -> MessageResponse {
        match self.try_buy_spins(request, now) {
            Ok(spins) => MessageResponse::ok(purchase_message(spins), self.user()),
            Err(err) => {
                log::info!("purchase of {:?} rejected: {}", request.package_id, err);
                MessageResponse::failed(err.to_string())
            }
        }
    }

    fn try_buy_spins(&mut self, request: &BuySpinsRequest, now: DateTime<Utc>) -> Result<u32, LedgerError> {
        let package = find_package(&request.package_id).ok_or(LedgerError::UnknownPackage)?;
        let spins = self
            .user
            .spins
            .checked_add(package.spins)
            .ok_or(LedgerError::InvalidAmount)?;

        match request.currency {
            PaymentCurrency::Coins => {
                let cost = package
                    .cost_in_coins(CONVERSION_RATE)
                    .ok_or(LedgerError::InvalidAmount)?;
                if self.user.coins < cost {
                    return Err(LedgerError::InsufficientCoins);
                }
                self.user.coins -= cost;
                self.record_transaction(TransactionKind::Purchase, Decimal::from(cost), TransactionCurrency::Coins, now);
            }
            PaymentCurrency::Ton => {
                if self.user.ton < package.cost_ton {
                    return Err(LedgerError::InsufficientTon);
                }
                self.user.ton -= package.cost_ton;
                self.record_transaction(TransactionKind::Purchase, package.cost_ton, TransactionCurrency::Ton, now);
            }
        }
        self.user.spins = spins;
        log::info!("bought package {} for {:?}, {} spins now", package.id, request.currency, spins);
        Ok(package.spins)
    }

    // === Campaigns ===

    pub fn create_task(&mut self, request: &CreateTaskRequest) -> CampaignResponse {
        let result = request
            .validate()
            .map_err(|_| LedgerError::InvalidCampaign)
            .and_then(|_| {
                self.record_campaign(
                    &request.link,
                    request.goal,
                    request.cost,
                    CampaignCategory::from_link(&request.link),
                    None,
                )
            });
        self.campaign_response(result, CAMPAIGN_CREATED)
    }

    pub fn create_partner_task(&mut self, request: &CreatePartnerTaskRequest) -> CampaignResponse {
        let result = request
            .validate()
            .map_err(|_| LedgerError::InvalidCampaign)
            .and_then(|_| {
                self.record_campaign(
                    &request.link,
                    request.goal,
                    request.cost,
                    CampaignCategory::Partner,
                    Some(request.level),
                )
            });
        self.campaign_response(result, PARTNER_TASK_CREATED)
    }

    fn record_campaign(
        &mut self,
        link: &str,
        goal: u32,
        cost: Decimal,
        category: CampaignCategory,
        required_level: Option<u8>,
    ) -> Result<Campaign, LedgerError> {
        if self.user.ad_credit < cost {
            return Err(LedgerError::InsufficientAdCredit);
        }
        self.user.ad_credit = self
            .user
            .ad_credit
            .checked_sub(cost)
            .ok_or(LedgerError::InvalidAmount)?;

        let prefix = if category == CampaignCategory::Partner { "pc" } else { "uc" };
        let campaign = Campaign {
            id: format!("{}{}", prefix, self.next_campaign_id),
            link: link.to_string(),
            status: CampaignStatus::Active,
            completions: 0,
            goal,
            cost,
            category,
            required_level,
        };
        self.next_campaign_id += 1;
        self.campaigns.insert(0, campaign.clone());
        log::info!(
            "campaign {} created for {} completions at {} TON, ad credit now {}",
            campaign.id,
            goal,
            cost,
            self.user.ad_credit
        );
        Ok(campaign)
    }

    fn campaign_response(&self, result: Result<Campaign, LedgerError>, created: &str) -> CampaignResponse {
        match result {
            Ok(campaign) => CampaignResponse {
                success: true,
                message: created.to_string(),
                new_campaign: Some(campaign),
                user: Some(self.user()),
            },
            Err(err) => {
                log::info!("campaign rejected: {}", err);
                CampaignResponse {
                    success: false,
                    message: err.to_string(),
                    new_campaign: None,
                    user: None,
                }
            }
        }
    }

    // === Promo codes and deposits ===

    pub fn redeem_promo_code(&mut self, request: &RedeemPromoRequest, now: DateTime<Utc>) -> MessageResponse {
        match self.try_redeem(request, now) {
            Ok(reward) => MessageResponse::ok(
                format!("Successfully redeemed! You received {}.", reward),
                self.user(),
            ),
            Err(err) => {
                log::info!("promo code {:?} rejected: {}", request.code, err);
                MessageResponse::failed(err.to_string())
            }
        }
    }

    fn try_redeem(&mut self, request: &RedeemPromoRequest, now: DateTime<Utc>) -> Result<String, LedgerError> {
        request.validate().map_err(|_| LedgerError::UnknownPromoCode)?;
        let user_id = self.user.id;
        let promo = self
            .promo_codes
            .iter_mut()
            .find(|p| p.matches(&request.code))
            .ok_or(LedgerError::UnknownPromoCode)?;
        promo.check_redeemable(user_id, now)?;

        match promo.kind {
            PromoKind::Coins => {
                let coins = promo.value.trunc().to_i64().ok_or(LedgerError::InvalidAmount)?;
                self.user.coins = self.user.coins.checked_add(coins).ok_or(LedgerError::InvalidAmount)?;
            }
            PromoKind::Spins => {
                let spins = promo.value.trunc().to_u32().ok_or(LedgerError::InvalidAmount)?;
                self.user.spins = self.user.spins.checked_add(spins).ok_or(LedgerError::InvalidAmount)?;
            }
            PromoKind::TonAdCredit => {
                self.user.ad_credit = self
                    .user
                    .ad_credit
                    .checked_add(promo.value)
                    .ok_or(LedgerError::InvalidAmount)?;
            }
        }
        promo.used_by.push(user_id);
        log::info!("promo code {} redeemed by user {}", promo.code, user_id);
        Ok(promo.reward_text())
    }

    pub fn deposit_ad_credit(&mut self, request: &DepositRequest, now: DateTime<Utc>) -> DepositResponse {
        match self.try_deposit(request, now) {
            Ok(()) => DepositResponse { success: true, user: Some(self.user()) },
            Err(err) => {
                log::info!("deposit of {} rejected: {}", request.amount, err);
                DepositResponse { success: false, user: None }
            }
        }
    }

    fn try_deposit(&mut self, request: &DepositRequest, now: DateTime<Utc>) -> Result<(), LedgerError> {
        request.validate().map_err(|_| LedgerError::InvalidAmount)?;
        self.user.ad_credit = self
            .user
            .ad_credit
            .checked_add(request.amount)
            .ok_or(LedgerError::InvalidAmount)?;
        self.record_transaction(TransactionKind::Deposit, request.amount, TransactionCurrency::Ton, now);
        log::info!("deposited {} TON, ad credit now {}", request.amount, self.user.ad_credit);
        Ok(())
    }

    // === Withdrawals ===

    /// Converts coins to TON at the fixed rate.
    pub fn withdraw(&mut self, request: &WithdrawalRequest, now: DateTime<Utc>) -> WithdrawalResponse {
        match self.try_withdraw(request, now) {
            Ok(()) => WithdrawalResponse { success: true, user: Some(self.user()) },
            Err(err) => {
                log::info!("withdrawal of {} TON rejected: {}", request.amount_in_ton, err);
                WithdrawalResponse { success: false, user: None }
            }
        }
    }

    fn try_withdraw(&mut self, request: &WithdrawalRequest, now: DateTime<Utc>) -> Result<(), LedgerError> {
        request.validate().map_err(|_| LedgerError::InvalidAmount)?;
        let cost = withdrawal_cost(request.amount_in_ton, self.user.coins, CONVERSION_RATE)?;
        let ton = self
            .user
            .ton
            .checked_add(request.amount_in_ton)
            .ok_or(LedgerError::InvalidAmount)?;
        self.user.coins -= cost;
        self.user.ton = ton;
        self.record_transaction(TransactionKind::Withdrawal, request.amount_in_ton, TransactionCurrency::Ton, now);
        log::info!("withdrew {} TON for {} coins", request.amount_in_ton, cost);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ledger() -> InMemoryLedger {
        InMemoryLedger::new(Utc::now())
    }

    fn funded(ad_credit: Decimal) -> InMemoryLedger {
        let mut ledger = ledger();
        ledger.deposit_ad_credit(&DepositRequest { amount: ad_credit }, Utc::now());
        ledger
    }

    fn task(cost: Decimal) -> CreateTaskRequest {
        CreateTaskRequest {
            link: "https://t.me/CashuBux".into(),
            goal: 1000,
            cost,
        }
    }

    #[test]
    fn test_spin_debits_and_credits() {
        let mut ledger = ledger();
        let response = ledger.spin(0.0);
        assert!(response.success);
        assert_eq!(response.prize.label, "100");
        assert_eq!(response.user.coins, 100);
        assert_eq!(response.user.spins, 9);
    }

    #[test]
    fn test_spin_rejected_without_spins() {
        let mut user = UserProjection::new(1, "User");
        user.spins = 0;
        user.coins = 42;
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());
        let response = ledger.spin(0.5);
        assert!(!response.success);
        assert_eq!(response.prize.label, "No spins left");
        assert_eq!(response.user.coins, 42);
        assert_eq!(response.outcome(), None);
    }

    #[test]
    fn test_ten_spins_then_none() {
        let mut ledger = ledger();
        for _ in 0..10 {
            assert!(ledger.spin(0.3).success);
        }
        assert!(!ledger.spin(0.3).success);
        assert_eq!(ledger.user().spins, 0);
    }

    #[test]
    fn test_create_task_debits_ad_credit() {
        let mut ledger = funded(Decimal::from(2));
        let response = ledger.create_task(&task(Decimal::new(15, 1)));
        assert!(response.success);
        assert_eq!(response.message, CAMPAIGN_CREATED);
        let campaign = response.new_campaign.unwrap();
        assert_eq!(campaign.id, "uc1");
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(response.user.unwrap().ad_credit, Decimal::new(5, 1));
        assert_eq!(ledger.campaigns().len(), 1);
    }

    #[test]
    fn test_create_task_insufficient_ad_credit() {
        let mut ledger = funded(Decimal::ONE);
        let response = ledger.create_task(&task(Decimal::new(101, 2)));
        assert!(!response.success);
        assert_eq!(response.message, "Insufficient ad balance. Please add funds.");
        assert_eq!(response.user, None);
        assert_eq!(ledger.user().ad_credit, Decimal::ONE);
        assert!(ledger.campaigns().is_empty());
    }

    #[test]
    fn test_create_task_rejects_invalid_request() {
        let mut ledger = funded(Decimal::from(10));
        let mut request = task(Decimal::ONE);
        request.link = "https://example.com/x".into();
        let response = ledger.create_task(&request);
        assert!(!response.success);
        assert_eq!(response.message, LedgerError::InvalidCampaign.to_string());
    }

    #[test]
    fn test_partner_task_recorded_with_level() {
        let mut ledger = funded(Decimal::from(10));
        ledger.create_task(&task(Decimal::ONE));
        let response = ledger.create_partner_task(&CreatePartnerTaskRequest {
            link: "https://t.me/EmpiresBattleBot".into(),
            goal: 1000,
            cost: Decimal::from(5),
            level: 3,
        });
        assert!(response.success);
        assert_eq!(response.message, PARTNER_TASK_CREATED);
        let campaign = response.new_campaign.unwrap();
        assert_eq!(campaign.id, "pc2");
        assert_eq!(campaign.category, CampaignCategory::Partner);
        assert_eq!(campaign.required_level, Some(3));
        assert_eq!(ledger.campaigns()[0].id, "pc2");
        assert_eq!(ledger.user().ad_credit, Decimal::from(4));
    }

    #[test]
    fn test_redeem_promo_rewards() {
        let mut ledger = ledger();
        let now = Utc::now();

        let response = ledger.redeem_promo_code(&RedeemPromoRequest { code: "welcome_coins".into() }, now);
        assert!(response.success);
        assert_eq!(response.message, "Successfully redeemed! You received 25,000 Coins.");
        assert_eq!(response.user.unwrap().coins, 25_000);

        let response = ledger.redeem_promo_code(&RedeemPromoRequest { code: "SPIN_ME".into() }, now);
        assert_eq!(response.user.unwrap().spins, 13);

        let response = ledger.redeem_promo_code(&RedeemPromoRequest { code: "AD_BONUS".into() }, now);
        assert_eq!(response.message, "Successfully redeemed! You received 0.5 TON in ad credits.");
        assert_eq!(response.user.unwrap().ad_credit, Decimal::new(5, 1));
    }

    #[test]
    fn test_redeem_promo_rejections() {
        let mut ledger = ledger();
        let now = Utc::now();
        let redeem = |ledger: &mut InMemoryLedger, code: &str| {
            ledger.redeem_promo_code(&RedeemPromoRequest { code: code.into() }, now).message
        };

        assert_eq!(redeem(&mut ledger, "NOPE"), "Invalid promo code.");
        assert_eq!(redeem(&mut ledger, "!"), "Invalid promo code.");
        assert_eq!(redeem(&mut ledger, "USED_CODE"), "You have already used this promo code.");
        assert_eq!(redeem(&mut ledger, "EXPIRED_CODE"), "This promo code has reached its usage limit.");

        assert!(ledger.redeem_promo_code(&RedeemPromoRequest { code: "SPIN_ME".into() }, now).success);
        assert_eq!(redeem(&mut ledger, "spin_me"), "You have already used this promo code.");
    }

    #[test]
    fn test_redeem_promo_expired() {
        let now = Utc::now();
        let code = PromoCode::new("LATE", PromoKind::Coins, Decimal::from(10), 10)
            .expiring_at(now - Duration::hours(1));
        let mut ledger =
            InMemoryLedger::with_parts(UserProjection::new(1, "User"), SPIN_WHEEL_PRIZES.clone(), vec![code]);
        let response = ledger.redeem_promo_code(&RedeemPromoRequest { code: "LATE".into() }, now);
        assert!(!response.success);
        assert_eq!(response.message, "This promo code has expired.");
        assert_eq!(ledger.user().coins, 0);
    }

    #[test]
    fn test_deposit_requires_positive_amount() {
        let mut ledger = ledger();
        let now = Utc::now();
        assert!(!ledger.deposit_ad_credit(&DepositRequest { amount: Decimal::ZERO }, now).success);
        assert!(!ledger.deposit_ad_credit(&DepositRequest { amount: Decimal::from(-1) }, now).success);
        let response = ledger.deposit_ad_credit(&DepositRequest { amount: Decimal::new(25, 1) }, now);
        assert!(response.success);
        assert_eq!(response.user.unwrap().ad_credit, Decimal::new(25, 1));

        let history = ledger.transactions();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, TransactionKind::Deposit);
        assert_eq!(history[0].amount, Decimal::new(25, 1));
        assert_eq!(history[0].date, now.date_naive());
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut ledger = ledger();
        let now = Utc::now();
        assert!(ledger.deposit_ad_credit(&DepositRequest { amount: Decimal::MAX }, now).success);
        let response = ledger.deposit_ad_credit(&DepositRequest { amount: Decimal::MAX }, now);
        assert!(!response.success);
        assert_eq!(response.user, None);
        assert_eq!(ledger.user().ad_credit, Decimal::MAX);
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn test_promo_overflow_is_rejected() {
        let now = Utc::now();
        let mut user = UserProjection::new(1, "User");
        user.ad_credit = Decimal::MAX;
        user.coins = i64::MAX;
        let codes = vec![
            PromoCode::new("MORE_CREDIT", PromoKind::TonAdCredit, Decimal::ONE, 10),
            PromoCode::new("MORE_COINS", PromoKind::Coins, Decimal::ONE, 10),
        ];
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), codes);
        for code in ["MORE_CREDIT", "MORE_COINS"] {
            let response = ledger.redeem_promo_code(&RedeemPromoRequest { code: code.into() }, now);
            assert!(!response.success);
            assert_eq!(response.message, LedgerError::InvalidAmount.to_string());
        }
        assert_eq!(ledger.user().coins, i64::MAX);
    }

    #[test]
    fn test_spin_at_coin_ceiling_keeps_spin() {
        let mut user = UserProjection::new(1, "User");
        user.coins = i64::MAX;
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());
        let response = ledger.spin(0.0);
        assert!(!response.success);
        assert_eq!(response.user.spins, 10);
        assert_eq!(response.user.coins, i64::MAX);
    }

    #[test]
    fn test_withdraw_converts_coins() {
        let mut user = UserProjection::new(1, "User");
        user.coins = 1_500_000;
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());
        let response = ledger.withdraw(&WithdrawalRequest { amount_in_ton: Decimal::new(10, 2) }, Utc::now());
        assert!(response.success);
        let user = response.user.unwrap();
        assert_eq!(user.coins, 500_000);
        assert_eq!(user.ton, Decimal::new(10, 2));
        assert_eq!(ledger.transactions()[0].kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn test_withdraw_rejections() {
        let now = Utc::now();
        let mut user = UserProjection::new(1, "User");
        user.coins = 999_999;
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());

        for amount in [Decimal::new(10, 2), Decimal::new(5, 2), Decimal::ZERO, Decimal::MAX] {
            let response = ledger.withdraw(&WithdrawalRequest { amount_in_ton: amount }, now);
            assert!(!response.success, "{} should be refused", amount);
            assert_eq!(response.user, None);
        }
        assert_eq!(ledger.user().coins, 999_999);
        assert_eq!(ledger.user().ton, Decimal::ZERO);
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn test_buy_spins_with_coins() {
        let now = Utc::now();
        let mut user = UserProjection::new(1, "User");
        user.coins = 250_000;
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());

        let buy = |currency| BuySpinsRequest { package_id: "sp10".into(), currency };
        let response = ledger.buy_spins(&buy(PaymentCurrency::Coins), now);
        assert!(response.success);
        assert_eq!(response.message, "Successfully purchased 10 spins!");
        let user = response.user.unwrap();
        assert_eq!(user.spins, 20);
        assert_eq!(user.coins, 50_000);

        let response = ledger.buy_spins(&buy(PaymentCurrency::Coins), now);
        assert!(!response.success);
        assert_eq!(response.message, "Insufficient coin balance.");
        assert_eq!(ledger.user().spins, 20);
        assert_eq!(ledger.transactions()[0].currency, TransactionCurrency::Coins);
    }

    #[test]
    fn test_buy_spins_with_ton_and_unknown_package() {
        let now = Utc::now();
        let mut user = UserProjection::new(1, "User");
        user.ton = Decimal::new(15, 2);
        let mut ledger = InMemoryLedger::with_parts(user, SPIN_WHEEL_PRIZES.clone(), Vec::new());

        let response = ledger.buy_spins(&BuySpinsRequest { package_id: "sp50".into(), currency: PaymentCurrency::Ton }, now);
        assert!(response.success);
        assert_eq!(response.user.unwrap().ton, Decimal::new(5, 2));

        let response = ledger.buy_spins(&BuySpinsRequest { package_id: "sp50".into(), currency: PaymentCurrency::Ton }, now);
        assert_eq!(response.message, "Insufficient TON balance.");

        let response = ledger.buy_spins(&BuySpinsRequest { package_id: "sp7".into(), currency: PaymentCurrency::Coins }, now);
        assert!(!response.success);
        assert_eq!(response.message, "Invalid package selected.");
        assert_eq!(ledger.user().spins, 60);
    }

    #[test]
    fn test_task_and_invite_spins_have_own_limits() {
        let mut ledger = ledger();
        let response = ledger.complete_task_for_spin();
        assert_eq!(response.message, "+1 Spin for completing a task!");
        let response = ledger.invite_friend_for_spin();
        assert_eq!(response.message, "+1 Spin for inviting a friend!");
        assert_eq!(ledger.user().spins, 12);

        for _ in 1..50 {
            assert!(ledger.complete_task_for_spin().success);
        }
        let response = ledger.complete_task_for_spin();
        assert!(!response.success);
        assert_eq!(response.message, "Daily limit for task spins reached.");
        assert!(ledger.invite_friend_for_spin().success);
        assert_eq!(ledger.user().tasks_completed_today_for_spin, 50);
        assert_eq!(ledger.user().friends_invited_today_for_spin, 2);
    }

    #[test]
    fn test_watch_ad_daily_limit() {
        let mut ledger = ledger();
        for _ in 0..50 {
            let response = ledger.watch_ad_for_spin();
            assert!(response.success);
            assert_eq!(response.message, "+1 Spin!");
        }
        let response = ledger.watch_ad_for_spin();
        assert!(!response.success);
        assert_eq!(response.message, "Daily limit for ad spins reached.");
        assert_eq!(ledger.user().spins, 60);
        assert_eq!(ledger.user().ads_watched_today, 50);
    }
}
