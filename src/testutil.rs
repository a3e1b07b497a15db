//! Shared fakes and builders for unit and integration tests.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::MissionError;
use crate::model::campaign::Campaign;
use crate::model::contract::{ContractManager, MissionContract};
use crate::model::faction::Faction;
use crate::model::location::Location;
use crate::settings::Settings;
use crate::sim::context::DayContext;
use crate::sim::flareup::ConflictKind;
use crate::sim::presentation::{MissionDecision, MissionPrompt, Presentation};
use crate::sim::signal::Signal;

/// Recording presentation fake: captures toasts, markers, and overrides,
/// and answers mission prompts from a scripted queue (empty queue
/// declines).
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub toasts: Vec<String>,
    pub markers: Vec<(String, ConflictKind)>,
    pub overrides: Vec<(String, String)>,
    pub restored: Vec<String>,
    pub prompts: Vec<MissionPrompt>,
    pub decisions: Vec<MissionDecision>,
}

impl Presentation for RecordingUi {
    fn toast(&mut self, text: &str) {
        self.toasts.push(text.to_string());
    }

    fn add_map_marker(&mut self, location_id: &str, kind: ConflictKind) {
        self.markers.push((location_id.to_string(), kind));
    }

    fn remove_map_marker(&mut self, location_id: &str) {
        self.markers.retain(|(id, _)| id != location_id);
    }

    fn override_description(&mut self, location_id: &str, text: &str) {
        self.overrides
            .push((location_id.to_string(), text.to_string()));
    }

    fn restore_description(&mut self, location_id: &str) {
        self.restored.push(location_id.to_string());
    }

    fn offer_mission(&mut self, prompt: &MissionPrompt) -> MissionDecision {
        self.prompts.push(prompt.clone());
        if self.decisions.is_empty() {
            MissionDecision::Decline
        } else {
            self.decisions.remove(0)
        }
    }
}

/// Contract-manager fake with a counter-based id scheme and a failure
/// switch for the acceptance boundary.
#[derive(Debug, Default)]
pub struct StubContracts {
    pub generated: u32,
    pub taken: Vec<MissionContract>,
    pub fail_acceptance: bool,
}

impl ContractManager for StubContracts {
    fn new_procedural_contract(
        &mut self,
        _rng: &mut dyn RngCore,
        employer: &Faction,
        target: &Faction,
        location: &Location,
    ) -> MissionContract {
        self.generated += 1;
        MissionContract {
            id: format!("mission_{}", self.generated),
            name: format!(
                "{} vs {} at {}",
                employer.short_name, target.short_name, location.name
            ),
            category: "Skirmish".to_string(),
        }
    }

    fn force_take_contract(&mut self, contract: &MissionContract) -> Result<(), MissionError> {
        if self.fail_acceptance {
            return Err(MissionError::Launch("dropship unavailable".to_string()));
        }
        self.taken.push(contract.clone());
        Ok(())
    }
}

/// Two-faction campaign with one contested location, player on site.
pub fn build_test_campaign() -> Campaign {
    let mut campaign = Campaign::new();
    campaign.factions.insert(
        "hegemony".into(),
        Faction::new("hegemony", "Hegemony of Karth", "Hegemony"),
    );
    campaign.factions.insert(
        "combine".into(),
        Faction::new("combine", "Auric Combine", "Combine"),
    );
    campaign.locations.insert(
        "veldt".into(),
        Location {
            id: "veldt".into(),
            name: "The Veldt".into(),
            owner: "combine".into(),
            difficulty: 4,
            description: "Dry grassland world on the border.".into(),
        },
    );
    campaign.current_location = "veldt".into();
    campaign
}

/// Settings pinned for deterministic lifecycle tests: fixed countdown,
/// no strength variation, fixed attrition loss.
pub fn fixed_settings() -> Settings {
    Settings {
        min_countdown: 5,
        max_countdown: 5,
        strength_variation: 0,
        days_between_missions: 2,
        combat_force_loss_min: 2,
        combat_force_loss_max: 2,
        ..Settings::default()
    }
}

/// Owns every collaborator a [`DayContext`] borrows, so tests can rebuild
/// the context between steps without re-threading six locals.
pub struct Harness {
    pub settings: Settings,
    pub campaign: Campaign,
    pub rng: SmallRng,
    pub ui: RecordingUi,
    pub contracts: StubContracts,
    pub signals: Vec<Signal>,
}

impl Harness {
    pub fn new(settings: Settings, campaign: Campaign, seed: u64) -> Self {
        Self {
            settings,
            campaign,
            rng: SmallRng::seed_from_u64(seed),
            ui: RecordingUi::default(),
            contracts: StubContracts::default(),
            signals: Vec::new(),
        }
    }

    pub fn ctx(&mut self) -> DayContext<'_> {
        DayContext {
            settings: &self.settings,
            campaign: &mut self.campaign,
            rng: &mut self.rng,
            contracts: &mut self.contracts,
            ui: &mut self.ui,
            signals: &mut self.signals,
        }
    }
}
