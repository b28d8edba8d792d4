pub const API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SPIN_WHEEL_ENDPOINT: &str = "/spin-wheel";
pub const USER_ENDPOINT: &str = "/user/me";
pub const USER_CAMPAIGNS_ENDPOINT: &str = "/user-campaigns";
pub const PARTNER_TASKS_ENDPOINT: &str = "/partner-tasks";
pub const PROMO_REDEEM_ENDPOINT: &str = "/promo-codes/redeem";
pub const AD_CREDIT_DEPOSIT_ENDPOINT: &str = "/ad-credit/deposit";
pub const WATCH_AD_FOR_SPIN_ENDPOINT: &str = "/spins/watch-ad";
pub const COMPLETE_TASK_FOR_SPIN_ENDPOINT: &str = "/spins/complete-task";
pub const INVITE_FRIEND_FOR_SPIN_ENDPOINT: &str = "/spins/invite-friend";
pub const BUY_SPINS_ENDPOINT: &str = "/spins/buy";
pub const WITHDRAWALS_ENDPOINT: &str = "/withdrawals";
pub const TRANSACTIONS_ENDPOINT: &str = "/transactions";

pub const CAMPAIGN_CREATED: &str = "Campaign created successfully!";
pub const PARTNER_TASK_CREATED: &str = "Partner task created successfully!";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

/// Coins credited per TON.
pub const CONVERSION_RATE: u64 = 10_000_000;

pub const TASK_LINK_PREFIX: &str = "https://t.me/";
pub const MIN_TASK_LINK_LENGTH: usize = 16;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Percent surcharges and shares, expressed in whole percent.
pub const SUBSCRIPTION_SURCHARGE_PERCENT: i64 = 30;
pub const EXTRA_LANGUAGE_SURCHARGE_PERCENT: i64 = 15;
pub const COMPLETER_SHARE_PERCENT: i64 = 40;

pub const PARTNER_MULTIPLIER: i64 = 10;
pub const MIN_PARTNER_LEVEL: u8 = 1;
pub const MAX_PARTNER_LEVEL: u8 = 10;

pub const DEFAULT_SPINS: u32 = 10;
