//! Rental pricing per release tier

use serde::{Deserialize, Serialize};

use super::film::ReleaseTier;

/// Per-day rate for new releases
pub const PREMIUM: u64 = 40;
/// Flat rate for regular and old releases
pub const BASIC: u64 = 30;

/// Unit prices used by the pricing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    pub premium: u64,
    pub basic: u64,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            premium: PREMIUM,
            basic: BASIC,
        }
    }
}

impl RateCard {
    pub fn new(premium: u64, basic: u64) -> Self {
        Self { premium, basic }
    }

    /// Price of renting a film of the given tier for `days` days
    ///
    /// New releases are billed linearly. Regular and old releases pay the
    /// basic rate once for the whole grace period, then the basic rate again
    /// for every day past it. Zero days always costs nothing.
    pub fn price(&self, release: ReleaseTier, days: u16) -> u64 {
        match release {
            ReleaseTier::New => u64::from(days).saturating_mul(self.premium),
            ReleaseTier::Regular | ReleaseTier::Old => {
                self.with_grace_period(days, release.grace_period())
            }
        }
    }

    fn with_grace_period(&self, days: u16, grace_period: u16) -> u64 {
        match days {
            0 => 0,
            d if d <= grace_period => self.basic,
            d => {
                let excess = u64::from(d.saturating_sub(grace_period));
                self.basic.saturating_add(excess.saturating_mul(self.basic))
            }
        }
    }
}

/// Price with the default rate card
pub fn price(release: ReleaseTier, days: u16) -> u64 {
    RateCard::default().price(release, days)
}
