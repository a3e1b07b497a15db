//! Localized, persistent inter-faction conflicts for turn-based strategic
//! campaigns.
//!
//! A [`Flareup`] owns one conflict's force pools and lifecycle: a countdown
//! to open combat, periodic attrition resolutions, participation offers for
//! the player, and a deterministic conclusion that either transfers the
//! location (siege) or nudges scoped strength statistics (raid). The
//! [`FlareupRegistry`] advances every live conflict once per simulated day
//! and retracts a conflict's side effects when it ends.
//!
//! The engine owns no global state: campaign data, configuration, the RNG,
//! the contract machinery, and the presentation layer are all injected per
//! call through [`DayContext`], and every conflict serializes to a tagged
//! text blob that restores exactly.

pub mod error;
pub mod model;
pub mod persist;
pub mod settings;
pub mod sim;
pub mod testutil;

pub use error::{MissionError, PersistError};
pub use model::campaign::{Campaign, StatStore};
pub use model::contract::{ContractManager, ContractOffer, MissionContract};
pub use model::faction::Faction;
pub use model::location::Location;
pub use model::reputation::Reputation;
pub use settings::Settings;
pub use sim::{
    ConflictKind, DayContext, Flareup, FlareupRegistry, MissionDecision, MissionPrompt,
    Presentation, Side, Signal, WorkOrder,
};
