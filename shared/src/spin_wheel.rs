use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// What a prize pays out in. The wheel only carries coin prizes today.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrizeKind {
    #[serde(rename = "COINS")]
    Coins,
}

impl PrizeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coins => "COINS",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PrizeEntry {
    pub kind: PrizeKind,
    pub amount: u32,
    pub weight: u32,
    pub label: String,
}

impl PrizeEntry {
    pub fn coins(amount: u32, weight: u32, label: &str) -> Self {
        Self {
            kind: PrizeKind::Coins,
            amount,
            weight,
            label: label.to_string(),
        }
    }
}

/// Ordered prize list. Declaration order is part of the contract: the selector
/// walks it in order and the wheel draws segment `i` for entry `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeCatalog {
    entries: Vec<PrizeEntry>,
    total_weight: u64,
}

/// The catalog the backend draws from. The client copy is only used to paint
/// the wheel and to find the segment for the label the backend returns.
pub static SPIN_WHEEL_PRIZES: Lazy<PrizeCatalog> = Lazy::new(|| {
    PrizeCatalog::from_trusted(vec![
        PrizeEntry::coins(100, 40, "100"),
        PrizeEntry::coins(50, 25, "50"),
        PrizeEntry::coins(500, 10, "500"),
        PrizeEntry::coins(1000, 5, "1K"),
        PrizeEntry::coins(250, 15, "250"),
        PrizeEntry::coins(2500, 3, "2.5K"),
        PrizeEntry::coins(5000, 1, "5K"),
        PrizeEntry::coins(75, 25, "75"),
    ])
});

impl PrizeCatalog {
    pub fn new(entries: Vec<PrizeEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.weight == 0 {
                return Err(CatalogError::ZeroWeight(entry.label.clone()));
            }
            if entry.amount == 0 {
                return Err(CatalogError::ZeroAmount(entry.label.clone()));
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(CatalogError::DuplicateLabel(entry.label.clone()));
            }
        }

        Ok(Self::from_trusted(entries))
    }

    fn from_trusted(entries: Vec<PrizeEntry>) -> Self {
        let total_weight = entries.iter().map(|e| u64::from(e.weight)).sum();
        Self { entries, total_weight }
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn get(&self, index: usize) -> Option<&PrizeEntry> {
        self.entries.get(index)
    }

    /// Labels are unique, so this is the identity lookup used to map a
    /// backend result onto a wheel segment.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }

    /// Exact selection probability of the entry at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.entries
            .get(index)
            .map(|e| f64::from(e.weight) / self.total_weight as f64)
    }

    /// Weighted draw. `random_unit` must come from a uniform source on `[0, 1)`.
    ///
    /// Walks the catalog in declaration order, subtracting each weight from
    /// `random_unit * W`; the first entry whose weight exceeds the remainder
    /// wins. If nothing matches (a `random_unit` at or past 1.0, NaN, or
    /// rounding drift) the last entry is returned.
    pub fn draw(&self, random_unit: f64) -> &PrizeEntry {
        let mut remaining = random_unit * self.total_weight as f64;

        for entry in &self.entries {
            let weight = f64::from(entry.weight);
            if remaining < weight {
                return entry;
            }
            remaining -= weight;
        }

        log::warn!(
            "prize draw fell through with random_unit={} (remaining {}), selecting last entry",
            random_unit,
            remaining
        );
        // Catalogs are never empty once constructed.
        &self.entries[self.entries.len() - 1]
    }

    pub fn draw_with_rng<R: Rng>(&self, rng: &mut R) -> &PrizeEntry {
        self.draw(rng.gen::<f64>())
    }
}

/// What the client keeps from one spin: enough to update the balance cache and
/// drive one wheel animation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub prize_label: String,
    pub prize_amount: i64,
    pub updated_balance: i64,
}

impl SpinOutcome {
    /// Plain-text description of the prize, shown when the wheel cannot land on it.
    pub fn disclosure(&self) -> String {
        format!(
            "You won {} coins ({}). Your balance is now {}.",
            self.prize_amount, self.prize_label, self.updated_balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn labels() -> Vec<&'static str> {
        vec!["100", "50", "500", "1K", "250", "2.5K", "5K", "75"]
    }

    #[test]
    fn test_standard_catalog_is_valid() {
        let rebuilt = PrizeCatalog::new(SPIN_WHEEL_PRIZES.entries().to_vec());
        assert_eq!(rebuilt.as_ref(), Ok(&*SPIN_WHEEL_PRIZES));
        assert_eq!(SPIN_WHEEL_PRIZES.len(), 8);
        assert_eq!(SPIN_WHEEL_PRIZES.total_weight(), 124);
        let weights: Vec<u32> = SPIN_WHEEL_PRIZES.entries().iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![40, 25, 10, 5, 15, 3, 1, 25]);
    }

    #[test]
    fn test_rejects_bad_catalogs() {
        assert_eq!(PrizeCatalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(
            PrizeCatalog::new(vec![PrizeEntry::coins(10, 0, "a")]),
            Err(CatalogError::ZeroWeight("a".into()))
        );
        assert_eq!(
            PrizeCatalog::new(vec![PrizeEntry::coins(0, 1, "a")]),
            Err(CatalogError::ZeroAmount("a".into()))
        );
        assert_eq!(
            PrizeCatalog::new(vec![PrizeEntry::coins(1, 1, "a"), PrizeEntry::coins(2, 1, "a")]),
            Err(CatalogError::DuplicateLabel("a".into()))
        );
    }

    #[test]
    fn test_zero_selects_first_entry() {
        let prize = SPIN_WHEEL_PRIZES.draw(0.0);
        assert_eq!(prize.label, "100");
        assert_eq!(prize.amount, 100);
    }

    #[test]
    fn test_just_under_one_selects_last_entry() {
        let just_under_one = 1.0 - f64::EPSILON / 2.0;
        assert!(just_under_one < 1.0);
        let prize = SPIN_WHEEL_PRIZES.draw(just_under_one);
        assert_eq!(prize.label, "75");
        assert_eq!(prize.amount, 75);
    }

    #[test]
    fn test_segment_boundaries() {
        // Cumulative weights: 40, 65, 75, 80, 95, 98, 99, 124.
        let at = |w: f64| SPIN_WHEEL_PRIZES.draw(w / 124.0).label.clone();
        assert_eq!(at(39.5), "100");
        assert_eq!(at(40.5), "50");
        assert_eq!(at(64.5), "50");
        assert_eq!(at(65.5), "500");
        assert_eq!(at(79.0), "1K");
        assert_eq!(at(94.0), "250");
        assert_eq!(at(97.0), "2.5K");
        assert_eq!(at(98.5), "5K");
        assert_eq!(at(99.5), "75");
    }

    #[test]
    fn test_fall_through_selects_last_entry() {
        // With integer weights summing below 2^53 every r in [0, W) hits an
        // entry, so the fallback is only reachable from outside [0, 1). At
        // 1.0 r lands exactly on the total weight and the last entry is kept.
        let catalog = PrizeCatalog::new(vec![
            PrizeEntry::coins(1, 1 << 30, "a"),
            PrizeEntry::coins(2, 1 << 30, "b"),
            PrizeEntry::coins(3, 1 << 31, "c"),
        ])
        .unwrap();
        assert_eq!(catalog.draw(1.0).label, "c");
        assert_eq!(catalog.draw(f64::NAN).label, "c");
        assert_eq!(SPIN_WHEEL_PRIZES.draw(1.0).label, "75");
    }

    #[test]
    fn test_draw_is_pure() {
        for unit in [0.0, 0.13, 0.5, 0.77, 0.999] {
            assert_eq!(SPIN_WHEEL_PRIZES.draw(unit), SPIN_WHEEL_PRIZES.draw(unit));
        }
    }

    #[test]
    fn test_distribution_matches_weights() {
        const TRIALS: usize = 100_000;
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
        let mut counts = vec![0usize; SPIN_WHEEL_PRIZES.len()];

        for _ in 0..TRIALS {
            let label = &SPIN_WHEEL_PRIZES.draw_with_rng(&mut rng).label;
            let index = SPIN_WHEEL_PRIZES.index_of(label).unwrap();
            counts[index] += 1;
        }

        for (index, count) in counts.iter().enumerate() {
            let p = SPIN_WHEEL_PRIZES.probability(index).unwrap();
            let observed = *count as f64 / TRIALS as f64;
            // Five standard deviations of a binomial proportion.
            let tolerance = 5.0 * (p * (1.0 - p) / TRIALS as f64).sqrt();
            assert!(
                (observed - p).abs() <= tolerance,
                "{} observed {:.4}, expected {:.4}",
                labels()[index],
                observed,
                p
            );
        }
    }

    #[test]
    fn test_probabilities() {
        let weights = [40u32, 25, 10, 5, 15, 3, 1, 25];
        for (index, weight) in weights.iter().enumerate() {
            let actual = SPIN_WHEEL_PRIZES.probability(index).unwrap();
            let expected = f64::from(*weight) / 124.0;
            assert!((actual - expected).abs() < 1e-12, "index {} -> {}", index, actual);
        }
        // Roughly the advertised 32% / 20% / 8% / 4% / 12% / 2.4% / 0.8% / 20%
        assert!((SPIN_WHEEL_PRIZES.probability(0).unwrap() - 0.32).abs() < 0.005);
        assert_eq!(SPIN_WHEEL_PRIZES.probability(8), None);
    }

    #[test]
    fn test_index_of_label() {
        assert_eq!(SPIN_WHEEL_PRIZES.index_of("2.5K"), Some(5));
        assert_eq!(SPIN_WHEEL_PRIZES.index_of("10K"), None);
    }

    #[test]
    fn test_prize_kind_wire_name() {
        assert_eq!(serde_json::to_string(&PrizeKind::Coins).unwrap(), "\"COINS\"");
        assert_eq!(PrizeKind::Coins.as_str(), "COINS");
    }
}
