//! Campaign pricing. The totals computed here are shown live while a campaign
//! form is edited and sent as the `cost` of the create request; the backend
//! charges the same amount, so any divergence is a billing bug.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COMPLETER_SHARE_PERCENT, CONVERSION_RATE, DEFAULT_LANGUAGE, EXTRA_LANGUAGE_SURCHARGE_PERCENT,
    MAX_PARTNER_LEVEL, MIN_PARTNER_LEVEL, PARTNER_MULTIPLIER, SUBSCRIPTION_SURCHARGE_PERCENT,
};
use crate::error::PricingError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionTier {
    pub completions: u32,
    #[serde(rename = "cost")]
    pub base_cost: Decimal,
}

impl CompletionTier {
    pub fn new(completions: u32, base_cost: Decimal) -> Self {
        Self { completions, base_cost }
    }

    /// Short label for tier pickers: `250`, `1k`, `2.5k`.
    pub fn label(&self) -> String {
        if self.completions >= 1000 {
            let thousands = Decimal::from(self.completions) / Decimal::from(1000);
            format!("{}k", thousands.normalize())
        } else {
            self.completions.to_string()
        }
    }
}

fn ton(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Published completion tiers, ascending by completions.
pub static COMPLETION_TIERS: Lazy<Vec<CompletionTier>> = Lazy::new(|| {
    vec![
        CompletionTier::new(250, ton(50)),
        CompletionTier::new(500, ton(75)),
        CompletionTier::new(1_000, ton(150)),
        CompletionTier::new(2_000, ton(300)),
        CompletionTier::new(5_000, ton(750)),
        CompletionTier::new(10_000, ton(1_500)),
        CompletionTier::new(25_000, ton(3_750)),
        CompletionTier::new(50_000, ton(7_500)),
        CompletionTier::new(100_000, ton(15_000)),
    ]
});

/// Checks the invariant every tier table must hold: strictly ascending
/// completions, positive costs, and costs that never drop as tiers grow.
pub fn validate_tier_table(tiers: &[CompletionTier]) -> Result<(), PricingError> {
    let first = tiers.first().ok_or(PricingError::EmptyTierTable)?;
    if first.base_cost <= Decimal::ZERO {
        return Err(PricingError::NonPositiveCost {
            completions: first.completions,
            cost: first.base_cost,
        });
    }

    for pair in tiers.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.completions <= prev.completions {
            return Err(PricingError::TierOrder { completions: next.completions });
        }
        if next.base_cost < prev.base_cost {
            return Err(PricingError::TierCostDecreases { completions: next.completions });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub id: &'static str,
    pub name: &'static str,
}

pub const LANGUAGE_OPTIONS: [LanguageOption; 12] = [
    LanguageOption { id: "en", name: "English" },
    LanguageOption { id: "ar", name: "Arabic" },
    LanguageOption { id: "es", name: "Spanish" },
    LanguageOption { id: "ru", name: "Russian" },
    LanguageOption { id: "de", name: "German" },
    LanguageOption { id: "fr", name: "French" },
    LanguageOption { id: "pt", name: "Portuguese" },
    LanguageOption { id: "it", name: "Italian" },
    LanguageOption { id: "zh", name: "Chinese" },
    LanguageOption { id: "ja", name: "Japanese" },
    LanguageOption { id: "hi", name: "Hindi" },
    LanguageOption { id: "tr", name: "Turkish" },
];

/// Audience languages picked for a campaign. English is included by default
/// and is not charged as an extra language.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LanguageSelection(BTreeSet<String>);

impl Default for LanguageSelection {
    fn default() -> Self {
        Self::from_ids([DEFAULT_LANGUAGE])
    }
}

impl LanguageSelection {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Adds `id`, or removes it unless it is English or the last language left.
    pub fn toggle(&mut self, id: &str) {
        if self.0.contains(id) {
            if self.0.len() > 1 && id != DEFAULT_LANGUAGE {
                self.0.remove(id);
            }
        } else {
            self.0.insert(id.to_string());
        }
    }

    /// Languages charged with the per-language surcharge.
    pub fn extra_count(&self) -> usize {
        if self.contains(DEFAULT_LANGUAGE) {
            self.0.len().saturating_sub(1)
        } else {
            self.0.len()
        }
    }
}

fn percent(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn language_surcharge(base: Decimal, languages: &LanguageSelection) -> Decimal {
    base * Decimal::from(languages.extra_count()) * percent(EXTRA_LANGUAGE_SURCHARGE_PERCENT)
}

/// Price of an ordinary task campaign.
pub fn task_price(
    tier: &CompletionTier,
    require_subscription_check: bool,
    languages: &LanguageSelection,
) -> Decimal {
    let base = tier.base_cost;
    let subscription_surcharge = if require_subscription_check {
        base * percent(SUBSCRIPTION_SURCHARGE_PERCENT)
    } else {
        Decimal::ZERO
    };
    base + subscription_surcharge + language_surcharge(base, languages)
}

/// Price of a partner task. The tier cost is multiplied by the partner
/// multiplier and then by the required level; there is no subscription check.
pub fn partner_task_price(
    tier: &CompletionTier,
    required_level: u8,
    languages: &LanguageSelection,
) -> Result<Decimal, PricingError> {
    if !(MIN_PARTNER_LEVEL..=MAX_PARTNER_LEVEL).contains(&required_level) {
        return Err(PricingError::LevelOutOfRange(required_level));
    }
    let partner_base = tier.base_cost * Decimal::from(PARTNER_MULTIPLIER);
    let level_adjusted = partner_base * Decimal::from(required_level);
    Ok(level_adjusted + language_surcharge(level_adjusted, languages))
}

/// Coins paid to whoever completes one unit of a campaign: the completer share
/// of the per-completion spend, converted at `conversion_rate` coins per TON.
pub fn reward_per_completion(cost: Decimal, goal: u32, conversion_rate: u64) -> Decimal {
    let per_completion = cost / Decimal::from(goal.max(1));
    per_completion * percent(COMPLETER_SHARE_PERCENT) * Decimal::from(conversion_rate)
}

pub fn default_reward_per_completion(cost: Decimal, goal: u32) -> Decimal {
    reward_per_completion(cost, goal, CONVERSION_RATE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPricing {
    Task { require_subscription_check: bool },
    Partner { required_level: u8 },
}

/// Form state of a campaign being priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    pub tier: CompletionTier,
    pub languages: LanguageSelection,
    pub kind: CampaignPricing,
}

impl PricingRequest {
    pub fn task(tier: CompletionTier) -> Self {
        Self {
            tier,
            languages: LanguageSelection::default(),
            kind: CampaignPricing::Task { require_subscription_check: false },
        }
    }

    pub fn partner(tier: CompletionTier) -> Self {
        Self {
            tier,
            languages: LanguageSelection::default(),
            kind: CampaignPricing::Partner { required_level: MIN_PARTNER_LEVEL },
        }
    }

    pub fn total(&self) -> Result<Decimal, PricingError> {
        match self.kind {
            CampaignPricing::Task { require_subscription_check } => {
                Ok(task_price(&self.tier, require_subscription_check, &self.languages))
            }
            CampaignPricing::Partner { required_level } => {
                partner_task_price(&self.tier, required_level, &self.languages)
            }
        }
    }

    pub fn required_level(&self) -> Option<u8> {
        match self.kind {
            CampaignPricing::Partner { required_level } => Some(required_level),
            CampaignPricing::Task { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier0() -> CompletionTier {
        COMPLETION_TIERS[0]
    }

    fn langs(ids: &[&str]) -> LanguageSelection {
        LanguageSelection::from_ids(ids.iter().copied())
    }

    #[test]
    fn test_tier_table_is_valid() {
        assert_eq!(validate_tier_table(&COMPLETION_TIERS), Ok(()));
        assert_eq!(COMPLETION_TIERS[2].base_cost, Decimal::new(15, 1));
    }

    #[test]
    fn test_tier_table_violations() {
        assert_eq!(validate_tier_table(&[]), Err(PricingError::EmptyTierTable));
        let unordered = [CompletionTier::new(500, ton(75)), CompletionTier::new(250, ton(80))];
        assert_eq!(validate_tier_table(&unordered), Err(PricingError::TierOrder { completions: 250 }));
        let cheaper = [CompletionTier::new(250, ton(75)), CompletionTier::new(500, ton(50))];
        assert_eq!(
            validate_tier_table(&cheaper),
            Err(PricingError::TierCostDecreases { completions: 500 })
        );
        let free = [CompletionTier::new(250, Decimal::ZERO)];
        assert!(matches!(validate_tier_table(&free), Err(PricingError::NonPositiveCost { .. })));
    }

    #[test]
    fn test_no_add_ons_costs_base() {
        assert_eq!(task_price(&tier0(), false, &langs(&["en"])), tier0().base_cost);
    }

    #[test]
    fn test_subscription_check_adds_thirty_percent() {
        for tier in COMPLETION_TIERS.iter() {
            assert_eq!(task_price(tier, true, &langs(&["en"])), tier.base_cost * Decimal::new(130, 2));
        }
    }

    #[test]
    fn test_extra_languages_add_fifteen_percent_each() {
        for tier in COMPLETION_TIERS.iter() {
            let expected = tier.base_cost * (Decimal::ONE + Decimal::from(2) * Decimal::new(15, 2));
            assert_eq!(task_price(tier, false, &langs(&["en", "es", "fr"])), expected);
        }
    }

    #[test]
    fn test_languages_without_english_are_all_extra() {
        let selection = langs(&["es", "fr"]);
        assert_eq!(selection.extra_count(), 2);
        assert_eq!(task_price(&tier0(), false, &selection), ton(65));
    }

    #[test]
    fn test_all_add_ons() {
        // 1.5 + 0.45 + 1.5 * 3 * 0.15
        let tier = COMPLETION_TIERS[2];
        let price = task_price(&tier, true, &langs(&["en", "de", "ru", "tr"]));
        assert_eq!(price, Decimal::new(2625, 3));
    }

    #[test]
    fn test_partner_price_scales_with_level() {
        for tier in COMPLETION_TIERS.iter() {
            let price = partner_task_price(tier, 3, &langs(&["en"])).unwrap();
            assert_eq!(price, tier.base_cost * Decimal::from(10) * Decimal::from(3));
        }
    }

    #[test]
    fn test_partner_language_surcharge_uses_level_adjusted_base() {
        // 0.5 * 10 * 2 = 10, plus one extra language at 15%.
        let price = partner_task_price(&tier0(), 2, &langs(&["en", "ja"])).unwrap();
        assert_eq!(price, Decimal::new(115, 1));
    }

    #[test]
    fn test_partner_level_bounds() {
        assert_eq!(partner_task_price(&tier0(), 0, &langs(&["en"])), Err(PricingError::LevelOutOfRange(0)));
        assert_eq!(partner_task_price(&tier0(), 11, &langs(&["en"])), Err(PricingError::LevelOutOfRange(11)));
        assert!(partner_task_price(&tier0(), 10, &langs(&["en"])).is_ok());
    }

    #[test]
    fn test_reward_per_completion() {
        let cost = Decimal::new(15, 1);
        let expected = (cost / Decimal::from(1000)) * Decimal::new(4, 1) * Decimal::from(CONVERSION_RATE);
        assert_eq!(default_reward_per_completion(cost, 1000), expected);
        assert_eq!(expected, Decimal::from(6000));
    }

    #[test]
    fn test_reward_with_zero_goal_uses_one() {
        assert_eq!(reward_per_completion(Decimal::ONE, 0, 1000), Decimal::from(400));
    }

    #[test]
    fn test_language_toggle_rules() {
        let mut selection = LanguageSelection::default();
        selection.toggle("en");
        assert_eq!(selection, langs(&["en"]));
        selection.toggle("es");
        selection.toggle("fr");
        assert_eq!(selection.extra_count(), 2);
        selection.toggle("es");
        assert_eq!(selection, langs(&["en", "fr"]));

        let mut only_spanish = langs(&["es"]);
        only_spanish.toggle("es");
        assert_eq!(only_spanish, langs(&["es"]));
    }

    #[test]
    fn test_request_total() {
        let mut request = PricingRequest::task(tier0());
        assert_eq!(request.total(), Ok(ton(50)));
        request.kind = CampaignPricing::Task { require_subscription_check: true };
        assert_eq!(request.total(), Ok(ton(65)));

        let mut partner = PricingRequest::partner(tier0());
        assert_eq!(partner.required_level(), Some(1));
        partner.kind = CampaignPricing::Partner { required_level: 4 };
        assert_eq!(partner.total(), Ok(Decimal::from(20)));
    }

    #[test]
    fn test_tier_labels() {
        let labels: Vec<String> = COMPLETION_TIERS.iter().map(CompletionTier::label).collect();
        assert_eq!(labels[0], "250");
        assert_eq!(labels[2], "1k");
        assert_eq!(labels[6], "25k");
    }

    #[test]
    fn test_tier_serializes_cost_as_number() {
        let json = serde_json::to_value(tier0()).unwrap();
        assert_eq!(json["completions"], 250);
        assert_eq!(json["cost"].as_f64(), Some(0.5));
    }

    proptest! {
        #[test]
        fn partner_price_non_decreasing_in_level(tier in 0usize..9, level in 1u8..10, extra in 0usize..11) {
            let tier = COMPLETION_TIERS[tier];
            let selection = LanguageSelection::from_ids(LANGUAGE_OPTIONS.iter().take(extra + 1).map(|l| l.id));
            let lower = partner_task_price(&tier, level, &selection).unwrap();
            let higher = partner_task_price(&tier, level + 1, &selection).unwrap();
            prop_assert!(higher >= lower);
        }

        #[test]
        fn price_non_decreasing_in_languages(tier in 0usize..9, extra in 0usize..11, sub in any::<bool>()) {
            let tier = COMPLETION_TIERS[tier];
            let fewer = LanguageSelection::from_ids(LANGUAGE_OPTIONS.iter().take(extra + 1).map(|l| l.id));
            let more = LanguageSelection::from_ids(LANGUAGE_OPTIONS.iter().take(extra + 2).map(|l| l.id));
            prop_assert!(task_price(&tier, sub, &more) >= task_price(&tier, sub, &fewer));
        }

        #[test]
        fn price_non_decreasing_in_tier(rank in 0usize..8, extra in 0usize..12, sub in any::<bool>(), level in 1u8..=10) {
            let selection = LanguageSelection::from_ids(LANGUAGE_OPTIONS.iter().take(extra + 1).map(|l| l.id));
            let (lower, upper) = (COMPLETION_TIERS[rank], COMPLETION_TIERS[rank + 1]);
            prop_assert!(task_price(&upper, sub, &selection) >= task_price(&lower, sub, &selection));
            prop_assert!(
                partner_task_price(&upper, level, &selection).unwrap()
                    >= partner_task_price(&lower, level, &selection).unwrap()
            );
        }
    }
}
