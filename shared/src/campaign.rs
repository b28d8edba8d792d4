use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::TASK_LINK_PREFIX;
use crate::pricing::reward_per_completion;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CampaignCategory {
    Social,
    Game,
    Partner,
}

impl CampaignCategory {
    /// Telegram bots are games; channels, groups and anything else are social.
    pub fn from_link(link: &str) -> Self {
        let path = link
            .strip_prefix(TASK_LINK_PREFIX)
            .unwrap_or(link)
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');
        if path.to_ascii_lowercase().ends_with("bot") {
            Self::Game
        } else {
            Self::Social
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub link: String,
    pub status: CampaignStatus,
    pub completions: u32,
    pub goal: u32,
    pub cost: Decimal,
    pub category: CampaignCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_level: Option<u8>,
}

impl Campaign {
    pub fn reward_per_completion(&self, conversion_rate: u64) -> Decimal {
        reward_per_completion(self.cost, self.goal, conversion_rate)
    }

    pub fn progress(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (f64::from(self.completions) / f64::from(self.goal)).min(1.0)
    }
}
