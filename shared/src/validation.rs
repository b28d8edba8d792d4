use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::constants::{MIN_TASK_LINK_LENGTH, TASK_LINK_PREFIX};
use crate::pricing::LanguageSelection;

static PROMO_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{3,32}$").expect("promo code pattern is valid")
});

pub fn validate_task_link(link: &str) -> Result<(), ValidationError> {
    if !link.starts_with(TASK_LINK_PREFIX) || link.len() < MIN_TASK_LINK_LENGTH {
        return Err(ValidationError::new("invalid_task_link"));
    }
    Ok(())
}

pub fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        return Err(ValidationError::new("non_positive_amount"));
    }
    Ok(())
}

pub fn validate_promo_code(code: &str) -> Result<(), ValidationError> {
    if !PROMO_CODE_RE.is_match(code.trim()) {
        return Err(ValidationError::new("invalid_promo_code"));
    }
    Ok(())
}

pub fn validate_languages(languages: &LanguageSelection) -> Result<(), ValidationError> {
    if languages.is_empty() {
        return Err(ValidationError::new("no_language_selected"));
    }
    Ok(())
}

/// First reason a campaign form may not be submitted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocker {
    InvalidLink,
    NoLanguage,
    InsufficientAdCredit,
}

impl SubmitBlocker {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidLink => "Enter a https://t.me/ link to your app, channel or group",
            Self::NoLanguage => "Select at least one language",
            Self::InsufficientAdCredit => "Insufficient ad balance. Please add funds.",
        }
    }
}

/// Client-side gate in front of campaign creation. The backend re-checks the
/// balance; this only decides whether the submit control is enabled. The link
/// is judged trimmed, the same form the request carries.
pub fn check_submission(
    link: &str,
    languages: &LanguageSelection,
    total: Decimal,
    cached_ad_credit: Decimal,
) -> Result<(), SubmitBlocker> {
    validate_task_link(link.trim()).map_err(|_| SubmitBlocker::InvalidLink)?;
    validate_languages(languages).map_err(|_| SubmitBlocker::NoLanguage)?;
    if cached_ad_credit < total {
        return Err(SubmitBlocker::InsufficientAdCredit);
    }
    Ok(())
}
