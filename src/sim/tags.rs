//! Centralized string constants for company tags, save tags, offer ids,
//! and scoped stat keys.
//!
//! Using these instead of raw literals prevents typos and makes every
//! producer/consumer of a key findable in one search.

/// Company tag set while the player fights for the attacking side.
pub const HELPING_ATTACKER: &str = "conflict_helping_attacker";
/// Company tag set while the player fights for the defending side.
pub const HELPING_DEFENDER: &str = "conflict_helping_defender";

/// Prefix identifying a serialized flareup inside campaign save tags.
pub const SAVE_PREFIX: &str = "FLAREUP:";

// Canonical participation offer ids, one pair per conflict kind.
pub const SIEGE_AID_ATTACKER: &str = "siege_aid_attacker";
pub const SIEGE_AID_DEFENDER: &str = "siege_aid_defender";
pub const RAID_AID_ATTACKER: &str = "raid_aid_attacker";
pub const RAID_AID_DEFENDER: &str = "raid_aid_defender";

/// Scoped stat key for a faction's accumulated attack-strength modifier.
pub fn attack_strength_stat(faction: &str) -> String {
    format!("{faction}_attack_strength")
}

/// Scoped stat key for a faction's accumulated defense-strength modifier.
pub fn defense_strength_stat(faction: &str) -> String {
    format!("{faction}_defense_strength")
}
