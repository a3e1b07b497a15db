use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::contract::ContractOffer;
use super::faction::Faction;
use super::location::Location;
use super::reputation::Reputation;

/// Campaign-side mutable state the conflict engine collaborates with.
///
/// Everything the engine reads or writes outside its own conflict
/// instances lives here, injected per call, so the engine stays testable
/// in isolation and never touches process-wide state.
#[derive(Debug, Default)]
pub struct Campaign {
    /// Location id the player is currently at.
    pub current_location: String,
    pub locations: BTreeMap<String, Location>,
    pub factions: BTreeMap<String, Faction>,
    /// Player reputation by faction name. Missing entries read as
    /// `Indifferent`.
    pub reputation: BTreeMap<String, Reputation>,
    /// Campaign-wide boolean tags; the player's side commitments live here.
    pub company_tags: BTreeSet<String>,
    /// Keyed numeric statistics scoped to this campaign.
    pub stats: StatStore,
    /// Globally visible contract offers.
    pub contracts: Vec<ContractOffer>,
}

impl Campaign {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn faction(&self, name: &str) -> Option<&Faction> {
        self.factions.get(name)
    }

    pub fn reputation_with(&self, faction: &str) -> Reputation {
        self.reputation
            .get(faction)
            .copied()
            .unwrap_or(Reputation::Indifferent)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.company_tags.contains(tag)
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.company_tags.insert(tag.to_string());
    }

    pub fn clear_tag(&mut self, tag: &str) {
        self.company_tags.remove(tag);
    }

    /// Add an offer to the global board.
    pub fn add_contract(&mut self, offer: ContractOffer) {
        self.contracts.push(offer);
    }

    pub fn contract(&self, id: &str) -> Option<&ContractOffer> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Remove every offer whose id matches any of `ids`. No-op when none
    /// match.
    pub fn remove_contracts(&mut self, ids: &[&str]) {
        self.contracts.retain(|c| !ids.contains(&c.id.as_str()));
    }

    /// Expire one day of temporary state: scoped stat deltas and
    /// countdown-bound offers.
    pub fn tick_day(&mut self) {
        self.stats.tick_day();
        for offer in &mut self.contracts {
            if let Some(days) = &mut offer.expires_in {
                *days -= 1;
            }
        }
        self.contracts.retain(|c| c.expires_in.is_none_or(|d| d > 0));
    }
}

/// Keyed numeric statistics: permanent base values plus temporary deltas
/// that expire after a fixed number of days.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StatStore {
    base: BTreeMap<String, i32>,
    temporary: Vec<TempStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TempStat {
    key: String,
    delta: i32,
    days_left: i32,
}

impl StatStore {
    /// Effective value: base plus every live temporary delta for `key`.
    pub fn value(&self, key: &str) -> i32 {
        let base = self.base.get(key).copied().unwrap_or(0);
        let temp: i32 = self
            .temporary
            .iter()
            .filter(|t| t.key == key)
            .map(|t| t.delta)
            .sum();
        base + temp
    }

    pub fn set_base(&mut self, key: &str, value: i32) {
        self.base.insert(key.to_string(), value);
    }

    /// Apply a delta that expires after `duration_days` further days.
    ///
    /// # Panics
    /// Panics if `duration_days` is not positive.
    pub fn add_temporary(&mut self, key: &str, delta: i32, duration_days: i32) {
        assert!(
            duration_days > 0,
            "add_temporary: duration must be positive, got {duration_days}"
        );
        self.temporary.push(TempStat {
            key: key.to_string(),
            delta,
            days_left: duration_days,
        });
    }

    pub fn tick_day(&mut self) {
        for t in &mut self.temporary {
            t.days_left -= 1;
        }
        self.temporary.retain(|t| t.days_left > 0);
    }
}
