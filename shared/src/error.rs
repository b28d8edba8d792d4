use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("prize catalog is empty")]
    Empty,
    #[error("prize `{0}` has a zero weight")]
    ZeroWeight(String),
    #[error("prize `{0}` has a zero amount")]
    ZeroAmount(String),
    #[error("prize label `{0}` appears more than once")]
    DuplicateLabel(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    #[error("required level {0} is outside 1..=10")]
    LevelOutOfRange(u8),
    #[error("completion tier table is empty")]
    EmptyTierTable,
    #[error("tier {completions} is not in ascending order")]
    TierOrder { completions: u32 },
    #[error("tier {completions} costs less than the tier before it")]
    TierCostDecreases { completions: u32 },
    #[error("tier {completions} has a non-positive cost {cost}")]
    NonPositiveCost { completions: u32, cost: Decimal },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    #[error("wheel needs at least one segment")]
    NoSegments,
    #[error("segment {index} does not exist on a {count}-segment wheel")]
    SegmentOutOfRange { index: usize, count: usize },
    #[error("wheel is already animating")]
    AlreadyAnimating,
    #[error("target rotation {target} does not advance past {current}")]
    NonMonotonic { current: f64, target: f64 },
}

/// Rejections raised by the in-memory ledger. Their `Display` text is what the
/// user sees, matching the messages the remote backend sends.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("No spins left")]
    NoSpinsLeft,
    #[error("Insufficient ad balance. Please add funds.")]
    InsufficientAdCredit,
    #[error("Campaign details are invalid.")]
    InvalidCampaign,
    #[error("Invalid amount entered.")]
    InvalidAmount,
    #[error("Invalid promo code.")]
    UnknownPromoCode,
    #[error("This promo code has reached its usage limit.")]
    PromoCodeExhausted,
    #[error("This promo code has expired.")]
    PromoCodeExpired,
    #[error("You have already used this promo code.")]
    PromoCodeAlreadyUsed,
    #[error("{0}")]
    DailyLimitReached(&'static str),
    #[error("Insufficient coin balance.")]
    InsufficientCoins,
    #[error("Insufficient TON balance.")]
    InsufficientTon,
    #[error("Minimum withdrawal is 0.10 TON.")]
    BelowMinimumWithdrawal,
    #[error("Invalid package selected.")]
    UnknownPackage,
}
