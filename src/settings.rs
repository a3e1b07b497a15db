use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::model::reputation::Reputation;

/// Tuning knobs for conflict simulation.
///
/// Injected read-only; a live conflict never observes a settings change.
/// Every field has a shipped default so partial JSON configs load cleanly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lower bound (inclusive) of the initial countdown draw, in days.
    pub min_countdown: i32,
    /// Upper bound (exclusive) of the initial countdown draw.
    pub max_countdown: i32,
    /// Base attack strength for factions without a per-faction override.
    pub default_attack_strength: i32,
    /// Base defense strength for factions without a per-faction override.
    pub default_defense_strength: i32,
    /// Half-width of the random strength adjustment applied to each side.
    pub strength_variation: i32,
    /// Per-faction attack strength overrides, keyed by faction name.
    pub attack_strength: BTreeMap<String, i32>,
    /// Per-faction defense strength overrides, keyed by faction name.
    pub defense_strength: BTreeMap<String, i32>,
    /// Raids scale both force pools by this factor (rounded up).
    pub raid_strength_multiplier: f64,
    /// How many days a concluded raid's strength adjustment persists.
    pub raid_result_duration: i32,
    /// Minimum reputation a faction requires before offering the player a
    /// participation contract. Parsed leniently; see [`Settings::min_reputation`].
    pub min_reputation_to_help: String,
    /// Factions that never hire the player, regardless of reputation.
    pub wont_hire_player: Vec<String>,
    /// Days between attrition resolutions once the fighting has started.
    pub days_between_missions: i32,
    /// Lower bound (inclusive) of the per-resolution force loss draw.
    pub combat_force_loss_min: i32,
    /// Upper bound (exclusive) of the per-resolution force loss draw.
    pub combat_force_loss_max: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_countdown: 30,
            max_countdown: 45,
            default_attack_strength: 10,
            default_defense_strength: 10,
            strength_variation: 0,
            attack_strength: BTreeMap::new(),
            defense_strength: BTreeMap::new(),
            raid_strength_multiplier: 0.5,
            raid_result_duration: 30,
            min_reputation_to_help: "disliked".to_string(),
            wont_hire_player: Vec::new(),
            days_between_missions: 2,
            combat_force_loss_min: 2,
            combat_force_loss_max: 5,
        }
    }
}

impl Settings {
    /// Load settings from a JSON document. Absent fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Settings> {
        serde_json::from_str(json)
    }

    /// The configured reputation threshold for participation offers.
    ///
    /// An unrecognized string falls back to `Disliked` with a warning;
    /// configuration gaps are never fatal.
    pub fn min_reputation(&self) -> Reputation {
        Reputation::try_from(self.min_reputation_to_help.clone()).unwrap_or_else(|_| {
            warn!(
                value = %self.min_reputation_to_help,
                "unrecognized min_reputation_to_help, falling back to disliked"
            );
            Reputation::Disliked
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let s = Settings::default();
        assert!(s.min_countdown <= s.max_countdown);
        assert!(s.combat_force_loss_min <= s.combat_force_loss_max);
        assert_eq!(s.min_reputation(), Reputation::Disliked);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"min_countdown": 5, "max_countdown": 9}"#).unwrap();
        assert_eq!(s.min_countdown, 5);
        assert_eq!(s.max_countdown, 9);
        assert_eq!(s.days_between_missions, 2);
        assert_eq!(s.default_attack_strength, 10);
    }

    #[test]
    fn per_faction_overrides_parse() {
        let s = Settings::from_json(r#"{"attack_strength": {"hegemony": 14}}"#).unwrap();
        assert_eq!(s.attack_strength.get("hegemony"), Some(&14));
        assert!(s.defense_strength.is_empty());
    }

    #[test]
    fn reputation_threshold_parses() {
        let s = Settings::from_json(r#"{"min_reputation_to_help": "liked"}"#).unwrap();
        assert_eq!(s.min_reputation(), Reputation::Liked);
    }

    #[test]
    fn bad_reputation_threshold_falls_back() {
        let s = Settings::from_json(r#"{"min_reputation_to_help": "chummy"}"#).unwrap();
        assert_eq!(s.min_reputation(), Reputation::Disliked);
    }
}
