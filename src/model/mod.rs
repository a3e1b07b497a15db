pub(crate) mod macros;

pub mod campaign;
pub mod contract;
pub mod faction;
pub mod location;
pub mod reputation;

pub use campaign::{Campaign, StatStore};
pub use contract::{ContractManager, ContractOffer, MissionContract};
pub use faction::Faction;
pub use location::Location;
pub use reputation::Reputation;
