use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::MissionError;

use super::faction::Faction;
use super::location::Location;

/// A participation offer on the campaign's global contract board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractOffer {
    /// Canonical offer id (see `sim::tags`); at most one offer per id.
    pub id: String,
    pub name: String,
    /// Hiring faction name.
    pub employer: String,
    /// Opposing faction name.
    pub target: String,
    pub location_id: String,
    pub difficulty: i32,
    /// Days the offer stays on the board, when bounded. `None` offers live
    /// until removed explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i32>,
}

/// Descriptor for a procedurally generated mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionContract {
    pub id: String,
    pub name: String,
    /// Mission category shown to the player ("Skirmish", "Assassination", ...).
    pub category: String,
}

/// Boundary to the campaign's contract machinery: procedural generation
/// and the mission-acceptance flow.
pub trait ContractManager {
    /// Produce a mission between `employer` and `target` at `location`.
    fn new_procedural_contract(
        &mut self,
        rng: &mut dyn RngCore,
        employer: &Faction,
        target: &Faction,
        location: &Location,
    ) -> MissionContract;

    /// Hand an accepted mission to the campaign.
    ///
    /// The engine contains any error here at the offer boundary; a failed
    /// acceptance leaves the conflict exactly as it was.
    fn force_take_contract(&mut self, contract: &MissionContract) -> Result<(), MissionError>;
}
