use serde::{Deserialize, Serialize};

use super::flareup::ConflictKind;

/// Which side of a conflict an event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

/// Machine-facing events emitted by the engine during a day advance.
///
/// Pushed into `DayContext::signals`; the embedder drains them after each
/// day. Human-facing announcements go through the presentation layer
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// A conflict was created at a location.
    FlareupStarted {
        location_id: String,
        attacker: String,
        kind: ConflictKind,
    },

    /// An attrition resolution reduced one side's force pool.
    AttritionResolved {
        location_id: String,
        side: Side,
        loss: i32,
    },

    /// A siege conclusion transferred the location to the attacker. The
    /// only path that mutates ownership.
    OwnershipTransferred {
        location_id: String,
        old_owner: String,
        new_owner: String,
    },

    /// A conflict finished and must be dropped from active processing.
    FlareupConcluded {
        location_id: String,
        kind: ConflictKind,
        winner: Side,
    },

    /// The player accepted a mission tied to a conflict.
    MissionAccepted {
        location_id: String,
        contract_id: String,
    },
}
