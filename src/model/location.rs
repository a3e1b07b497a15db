use serde::{Deserialize, Serialize};

/// A contestable location as the external registry exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Stable id: the registry key and the conflict key.
    pub id: String,
    pub name: String,
    /// Name of the owning faction — the implicit defender of any conflict
    /// here. Mutated only by a siege conclusion.
    pub owner: String,
    /// Intrinsic mission difficulty rating.
    pub difficulty: i32,
    /// Baseline descriptive text, restored when a conflict overlay retracts.
    pub description: String,
}
