use rand::RngCore;

use crate::model::campaign::Campaign;
use crate::model::contract::ContractManager;
use crate::settings::Settings;

use super::presentation::Presentation;
use super::signal::Signal;

/// Borrows handed to every engine operation for one simulated day.
///
/// Bundled so collaborators can be added without changing every call
/// signature.
pub struct DayContext<'a> {
    pub settings: &'a Settings,
    pub campaign: &'a mut Campaign,
    pub rng: &'a mut dyn RngCore,
    pub contracts: &'a mut dyn ContractManager,
    pub ui: &'a mut dyn Presentation,
    /// Engine operations push signals here; the embedder drains them after
    /// each day.
    pub signals: &'a mut Vec<Signal>,
}
