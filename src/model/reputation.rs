use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Player standing with a faction, worst to best.
///
/// Declaration order carries the ordering, so threshold checks are plain
/// comparisons (`rep >= settings.min_reputation()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Reputation {
    Loathed,
    Hated,
    Disliked,
    Indifferent,
    Liked,
    Friendly,
    Honored,
}

string_enum!(Reputation {
    Loathed => "loathed",
    Hated => "hated",
    Disliked => "disliked",
    Indifferent => "indifferent",
    Liked => "liked",
    Friendly => "friendly",
    Honored => "honored",
});
