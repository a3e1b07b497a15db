use serde::{Deserialize, Serialize};

/// A faction as the external registry exposes it to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    /// Stable name: the registry key, and the key used by settings
    /// overrides and save blobs.
    pub name: String,
    /// Full display name ("Auric Combine").
    pub display_name: String,
    /// Short form used in announcements ("Combine").
    pub short_name: String,
    /// Whether this faction employs mercenaries at all. Factions can also
    /// be barred per-campaign via `Settings::wont_hire_player`.
    pub hirable: bool,
}

impl Faction {
    pub fn new(name: &str, display_name: &str, short_name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            short_name: short_name.to_string(),
            hirable: true,
        }
    }
}
