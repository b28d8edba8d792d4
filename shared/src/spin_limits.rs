use serde::{Deserialize, Serialize};

use crate::user::UserProjection;

pub const WATCH_AD_DAILY_MAX: u32 = 50;
pub const COMPLETE_TASK_DAILY_MAX: u32 = 50;
pub const INVITE_FRIEND_DAILY_MAX: u32 = 50;

pub const WATCH_AD_LIMIT_ERROR: &str = "Daily limit for ad spins reached.";
pub const COMPLETE_TASK_LIMIT_ERROR: &str = "Daily limit for task spins reached.";
pub const INVITE_FRIEND_LIMIT_ERROR: &str = "Daily limit for friend invite spins reached.";

/// Ways of earning a spin besides the starting allowance. Each one is capped per day.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinSource {
    WatchAd,
    CompleteTask,
    InviteFriend,
}

impl SpinSource {
    pub fn get_max_per_day(&self) -> u32 {
        match self {
            Self::WatchAd => WATCH_AD_DAILY_MAX,
            Self::CompleteTask => COMPLETE_TASK_DAILY_MAX,
            Self::InviteFriend => INVITE_FRIEND_DAILY_MAX,
        }
    }

    pub fn get_error_message(&self) -> &'static str {
        match self {
            Self::WatchAd => WATCH_AD_LIMIT_ERROR,
            Self::CompleteTask => COMPLETE_TASK_LIMIT_ERROR,
            Self::InviteFriend => INVITE_FRIEND_LIMIT_ERROR,
        }
    }

    pub fn get_success_message(&self) -> &'static str {
        match self {
            Self::WatchAd => "+1 Spin!",
            Self::CompleteTask => "+1 Spin for completing a task!",
            Self::InviteFriend => "+1 Spin for inviting a friend!",
        }
    }

    pub fn used_today(&self, user: &UserProjection) -> u32 {
        match self {
            Self::WatchAd => user.ads_watched_today,
            Self::CompleteTask => user.tasks_completed_today_for_spin,
            Self::InviteFriend => user.friends_invited_today_for_spin,
        }
    }

    pub fn counter_mut<'a>(&self, user: &'a mut UserProjection) -> &'a mut u32 {
        match self {
            Self::WatchAd => &mut user.ads_watched_today,
            Self::CompleteTask => &mut user.tasks_completed_today_for_spin,
            Self::InviteFriend => &mut user.friends_invited_today_for_spin,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinLimitCheck {
    pub source: SpinSource,
    pub used_today: u32,
    pub remaining: u32,
    pub is_locked: bool,
}

impl SpinLimitCheck {
    pub fn new(source: SpinSource, user: &UserProjection) -> Self {
        let used_today = source.used_today(user);
        let max = source.get_max_per_day();
        Self {
            source,
            used_today,
            remaining: max.saturating_sub(used_today),
            is_locked: used_today >= max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_check() {
        let mut user = UserProjection::new(1, "User");
        user.ads_watched_today = 49;
        let check = SpinLimitCheck::new(SpinSource::WatchAd, &user);
        assert_eq!(check.remaining, 1);
        assert!(!check.is_locked);

        *SpinSource::WatchAd.counter_mut(&mut user) += 1;
        let check = SpinLimitCheck::new(SpinSource::WatchAd, &user);
        assert_eq!(check.remaining, 0);
        assert!(check.is_locked);
    }

    #[test]
    fn test_sources_track_separate_counters() {
        let mut user = UserProjection::new(1, "User");
        *SpinSource::InviteFriend.counter_mut(&mut user) = 50;
        assert!(SpinLimitCheck::new(SpinSource::InviteFriend, &user).is_locked);
        assert!(!SpinLimitCheck::new(SpinSource::CompleteTask, &user).is_locked);
        assert_eq!(SpinSource::CompleteTask.get_error_message(), COMPLETE_TASK_LIMIT_ERROR);
    }
}
