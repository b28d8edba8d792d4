use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPINS;

/// The backend's view of the current user, returned after every mutating call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProjection {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub ton: Decimal,
    #[serde(default)]
    pub referral_earnings: i64,
    #[serde(default)]
    pub spins: u32,
    #[serde(default)]
    pub ad_credit: Decimal,
    #[serde(default)]
    pub ads_watched_today: u32,
    #[serde(default)]
    pub tasks_completed_today_for_spin: u32,
    #[serde(default)]
    pub friends_invited_today_for_spin: u32,
    #[serde(default)]
    pub banned: bool,
}

impl UserProjection {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            spins: DEFAULT_SPINS,
            ..Self::default()
        }
    }
}

/// Client-side copy of the user. Balance fields change in exactly one place,
/// [`UserCache::apply_server_response`], which replaces the whole projection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserCache {
    user: Option<UserProjection>,
    /// Bumped on every replacement so views can tell a fresh response apart.
    revision: u64,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProjection> {
        self.user.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply_server_response(&mut self, user: UserProjection) {
        log::debug!("user {} replaced at revision {}", user.id, self.revision + 1);
        self.user = Some(user);
        self.revision += 1;
    }

    /// Shows one spin as spent while the spin request is in flight. The next
    /// server response overwrites it either way.
    pub fn optimistic_spin_debit(&mut self) {
        if let Some(user) = self.user.as_mut() {
            user.spins = user.spins.saturating_sub(1);
        }
    }

    pub fn spins(&self) -> u32 {
        self.user.as_ref().map_or(0, |u| u.spins)
    }

    pub fn coins(&self) -> i64 {
        self.user.as_ref().map_or(0, |u| u.coins)
    }

    pub fn ad_credit(&self) -> Decimal {
        self.user.as_ref().map_or(Decimal::ZERO, |u| u.ad_credit)
    }

    pub fn can_spin(&self) -> bool {
        self.spins() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_response_replaces_wholesale() {
        let mut cache = UserCache::new();
        let mut user = UserProjection::new(1, "User");
        user.coins = 500;
        user.ad_credit = Decimal::new(25, 1);
        cache.apply_server_response(user);
        assert_eq!(cache.coins(), 500);

        // A response that omits a field resets it; nothing is merged.
        let next: UserProjection = serde_json::from_str(r#"{"id":1,"spins":3}"#).unwrap();
        cache.apply_server_response(next);
        assert_eq!(cache.coins(), 0);
        assert_eq!(cache.ad_credit(), Decimal::ZERO);
        assert_eq!(cache.spins(), 3);
        assert_eq!(cache.revision(), 2);
    }

    #[test]
    fn test_optimistic_debit_is_overwritten() {
        let mut cache = UserCache::new();
        cache.apply_server_response(UserProjection::new(1, "User"));
        cache.optimistic_spin_debit();
        assert_eq!(cache.spins(), DEFAULT_SPINS - 1);

        let authoritative = UserProjection { spins: 4, ..UserProjection::new(1, "User") };
        cache.apply_server_response(authoritative);
        assert_eq!(cache.spins(), 4);
    }

    #[test]
    fn test_empty_cache_cannot_spin() {
        let mut cache = UserCache::new();
        cache.optimistic_spin_debit();
        assert!(!cache.can_spin());
        assert_eq!(cache.user(), None);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{"id":7,"name":"User #7","coins":12,"ton":0.25,"referralEarnings":0,
            "spins":9,"adCredit":1.5,"adsWatchedToday":2,"tasksCompletedTodayForSpin":1,
            "friendsInvitedTodayForSpin":0}"#;
        let user: UserProjection = serde_json::from_str(json).unwrap();
        assert_eq!(user.ad_credit, Decimal::new(15, 1));
        assert_eq!(user.ads_watched_today, 2);
        assert!(!user.banned);
    }
}
