use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::campaign::Campaign;
use crate::model::faction::Faction;
use crate::model::macros::string_enum;

use super::context::DayContext;
use super::helpers::{forces_to_string, roll_range};
use super::mission;
use super::participation;
use super::signal::{Side, Signal};
use super::tags;

/// What a conflict can do to the map when it concludes.
///
/// A siege transfers ownership of the location if the defender's pool is
/// depleted. A raid never transfers ownership; it only nudges the scoped
/// strength statistics both sides carry into later conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConflictKind {
    Siege,
    Raid,
}

string_enum!(ConflictKind {
    Siege => "siege",
    Raid => "raid",
});

/// Read-only projection for the campaign's work-order list, computed on
/// demand. The engine owns no UI state for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrder {
    pub title: String,
    /// Days until the next attrition resolution.
    pub days_until_mission: i32,
}

/// A localized conflict between an attacking faction and whoever currently
/// owns the contested location.
///
/// One instance per live conflict; all mutation flows through
/// [`Flareup::pass_day`] and the mission-offer interaction. The defender is
/// never stored: it is re-resolved from the location's owner, which can
/// change only when this conflict itself concludes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flareup {
    pub location_id: String,
    pub kind: ConflictKind,
    /// Attacking faction name.
    pub attacker: String,
    /// Days remaining before combat attrition begins.
    pub countdown: i32,
    /// Days until the next attrition resolution is eligible.
    pub days_until_mission: i32,
    pub attacker_strength: i32,
    pub defender_strength: i32,
    /// Id of the mission the player has committed to, empty if none.
    pub current_contract_id: String,
    /// Force cost charged to the player's side when that mission resolves.
    /// Consumed by the external mission-resolution flow.
    pub current_contract_force_loss: i32,
    /// True while the player has an accepted mission pending for this
    /// conflict; suppresses further offers. Re-derived on load from
    /// `current_contract_id`.
    #[serde(skip)]
    pub committed: bool,
    #[serde(skip)]
    concluded: bool,
}

impl Flareup {
    /// Create a new conflict at `location_id`.
    ///
    /// The policy deciding when a conflict starts and who attacks is
    /// external; this validates its inputs and rolls the initial state.
    /// Announces the conflict and, if the player is already on site,
    /// spawns participation offers.
    ///
    /// # Panics
    /// Panics if `location_id` or `attacker` is unknown to the campaign.
    pub fn launch(
        ctx: &mut DayContext,
        location_id: &str,
        attacker: &str,
        kind: ConflictKind,
    ) -> Flareup {
        let s = ctx.settings;
        let location = ctx
            .campaign
            .locations
            .get(location_id)
            .unwrap_or_else(|| panic!("launch: unknown location {location_id}"));
        assert!(
            ctx.campaign.factions.contains_key(attacker),
            "launch: unknown faction {attacker}"
        );
        let location_name = location.name.clone();
        let defender = location.owner.clone();

        let mut attacker_strength = s
            .attack_strength
            .get(attacker)
            .copied()
            .unwrap_or(s.default_attack_strength);
        let mut defender_strength = s
            .defense_strength
            .get(&defender)
            .copied()
            .unwrap_or(s.default_defense_strength);

        attacker_strength += roll_range(ctx.rng, -s.strength_variation, s.strength_variation);
        defender_strength += roll_range(ctx.rng, -s.strength_variation, s.strength_variation);

        attacker_strength += ctx.campaign.stats.value(&tags::attack_strength_stat(attacker));
        defender_strength += ctx.campaign.stats.value(&tags::defense_strength_stat(&defender));

        if kind == ConflictKind::Raid {
            attacker_strength = (attacker_strength as f64 * s.raid_strength_multiplier).ceil() as i32;
            defender_strength = (defender_strength as f64 * s.raid_strength_multiplier).ceil() as i32;
        }

        let flareup = Flareup {
            location_id: location_id.to_string(),
            kind,
            attacker: attacker.to_string(),
            countdown: roll_range(ctx.rng, s.min_countdown, s.max_countdown),
            days_until_mission: 0,
            attacker_strength,
            defender_strength,
            current_contract_id: String::new(),
            current_contract_force_loss: 0,
            committed: false,
            concluded: false,
        };

        let attacker_short = short_name(ctx.campaign, attacker);
        let defender_short = short_name(ctx.campaign, &defender);
        let text = match kind {
            ConflictKind::Raid => {
                format!("{attacker_short} launches a raid on {defender_short} at {location_name}")
            }
            ConflictKind::Siege => {
                format!("{attacker_short} attacks {defender_short} for control of {location_name}")
            }
        };
        info!(location = location_id, kind = %kind, "{text}");
        ctx.ui.toast(&text);
        ctx.signals.push(Signal::FlareupStarted {
            location_id: location_id.to_string(),
            attacker: attacker.to_string(),
            kind,
        });

        if ctx.campaign.current_location == location_id {
            participation::spawn(&flareup, ctx);
        }

        flareup
    }

    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    /// Name of the defending faction: whoever currently owns the location.
    pub fn defender<'a>(&self, campaign: &'a Campaign) -> Option<&'a str> {
        campaign
            .locations
            .get(&self.location_id)
            .map(|l| l.owner.as_str())
    }

    /// The faction the player is currently fighting for, if any.
    ///
    /// Derived on every call from the player's location and side tags so a
    /// mid-conflict side or location change can never leave a stale
    /// employer.
    pub fn employer<'a>(&self, campaign: &'a Campaign) -> Option<&'a Faction> {
        if campaign.current_location != self.location_id {
            return None;
        }
        if campaign.has_tag(tags::HELPING_ATTACKER) {
            campaign.factions.get(&self.attacker)
        } else if campaign.has_tag(tags::HELPING_DEFENDER) {
            let defender = self.defender(campaign)?;
            campaign.factions.get(defender)
        } else {
            None
        }
    }

    /// The faction the player is currently fighting against, if any.
    pub fn target<'a>(&self, campaign: &'a Campaign) -> Option<&'a Faction> {
        if campaign.current_location != self.location_id {
            return None;
        }
        if campaign.has_tag(tags::HELPING_ATTACKER) {
            let defender = self.defender(campaign)?;
            campaign.factions.get(defender)
        } else if campaign.has_tag(tags::HELPING_DEFENDER) {
            campaign.factions.get(&self.attacker)
        } else {
            None
        }
    }

    /// Advance this conflict by one simulated day.
    ///
    /// Returns true if the conflict concluded during this call; the caller
    /// must then drop it from active processing.
    ///
    /// # Panics
    /// Panics if called on an already-concluded conflict: the external
    /// scheduler must remove concluded instances, not re-advance them.
    pub fn pass_day(&mut self, ctx: &mut DayContext) -> bool {
        assert!(
            !self.concluded,
            "pass_day called on concluded conflict at {}",
            self.location_id
        );
        let s = ctx.settings;

        if self.countdown > 0 {
            self.countdown -= 1;
            return false;
        }

        if self.days_until_mission > 1 {
            self.days_until_mission -= 1;
            return false;
        }

        // Attrition resolution: one side draw, one loss draw, once per cycle.
        let side = if ctx.rng.random::<f64>() > 0.5 {
            Side::Attacker
        } else {
            Side::Defender
        };
        let loss = roll_range(ctx.rng, s.combat_force_loss_min, s.combat_force_loss_max);
        match side {
            Side::Attacker => self.attacker_strength -= loss,
            Side::Defender => self.defender_strength -= loss,
        }
        self.days_until_mission = s.days_between_missions;
        debug!(
            location = %self.location_id,
            kind = %self.kind,
            attacker_strength = self.attacker_strength,
            defender_strength = self.defender_strength,
            "attrition resolved"
        );
        ctx.signals.push(Signal::AttritionResolved {
            location_id: self.location_id.clone(),
            side,
            loss,
        });

        if self.attacker_strength <= 0 || self.defender_strength <= 0 {
            self.conclude(ctx);
            return true;
        }

        if !self.committed && self.employer(ctx.campaign).is_some() {
            mission::offer_mission(self, ctx);
        }
        false
    }

    /// Finish the conflict: retract offers, settle the outcome by kind.
    ///
    /// Tie policy: if both pools are depleted in the same resolution, the
    /// attacker-loss branch wins.
    fn conclude(&mut self, ctx: &mut DayContext) {
        self.concluded = true;
        info!(location = %self.location_id, kind = %self.kind, "conflict concluded");

        participation::remove(self, ctx);

        let location = &ctx.campaign.locations[&self.location_id];
        let location_name = location.name.clone();
        let defender = location.owner.clone();
        let attacker_short = short_name(ctx.campaign, &self.attacker);
        let defender_short = short_name(ctx.campaign, &defender);

        let winner = if self.attacker_strength <= 0 {
            Side::Defender
        } else {
            Side::Attacker
        };

        match self.kind {
            ConflictKind::Siege => match winner {
                Side::Defender => {
                    ctx.ui.toast(&format!(
                        "Battle for {location_name} concludes - {defender_short} holds off the {attacker_short} attack"
                    ));
                }
                Side::Attacker => {
                    ctx.ui.toast(&format!(
                        "Battle for {location_name} concludes - {attacker_short} takes {location_name} from {defender_short}"
                    ));
                    ctx.campaign
                        .locations
                        .get_mut(&self.location_id)
                        .unwrap()
                        .owner = self.attacker.clone();
                    ctx.campaign.clear_tag(tags::HELPING_ATTACKER);
                    ctx.campaign.clear_tag(tags::HELPING_DEFENDER);
                    ctx.ui.restore_description(&self.location_id);
                    ctx.signals.push(Signal::OwnershipTransferred {
                        location_id: self.location_id.clone(),
                        old_owner: defender.clone(),
                        new_owner: self.attacker.clone(),
                    });
                }
            },
            ConflictKind::Raid => {
                let duration = ctx.settings.raid_result_duration;
                let (attack_delta, defense_delta, text) = match winner {
                    Side::Defender => (
                        -1,
                        1,
                        format!(
                            "Raid on {location_name} concludes - {defender_short} drives off the {attacker_short} forces"
                        ),
                    ),
                    Side::Attacker => (
                        1,
                        -1,
                        format!(
                            "Raid on {location_name} concludes - {attacker_short} weakens {defender_short} control of {location_name}"
                        ),
                    ),
                };
                ctx.ui.toast(&text);
                if duration > 0 {
                    ctx.campaign.stats.add_temporary(
                        &tags::attack_strength_stat(&self.attacker),
                        attack_delta,
                        duration,
                    );
                    ctx.campaign.stats.add_temporary(
                        &tags::defense_strength_stat(&defender),
                        defense_delta,
                        duration,
                    );
                }
            }
        }

        ctx.signals.push(Signal::FlareupConcluded {
            location_id: self.location_id.clone(),
            kind: self.kind,
            winner,
        });
    }

    /// Offer participation contracts for both sides of this conflict.
    pub fn spawn_participation_contracts(&self, ctx: &mut DayContext) {
        participation::spawn(self, ctx);
    }

    /// Retract this conflict's outstanding participation offers.
    pub fn remove_participation_contracts(&self, ctx: &mut DayContext) {
        participation::remove(self, ctx);
    }

    /// Player-facing status block, prepended to the location's own text by
    /// the presentation layer.
    pub fn description(&self, campaign: &Campaign) -> String {
        let location = &campaign.locations[&self.location_id];
        let attacker_short = short_name(campaign, &self.attacker);
        let attacker_display = display_name(campaign, &self.attacker);
        let defender_display = display_name(campaign, &location.owner);

        let mut lines = Vec::new();
        lines.push(match self.kind {
            ConflictKind::Raid => format!("{} is being raided by {attacker_short}", location.name),
            ConflictKind::Siege => format!("{} is under attack by {attacker_short}", location.name),
        });
        if self.countdown > 0 {
            lines.push(format!("{} days until the fighting starts", self.countdown));
        }
        if self.days_until_mission > 0 {
            lines.push(format!(
                "{} days until the next engagement",
                self.days_until_mission
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "{attacker_display} forces: {}",
            forces_to_string(self.attacker_strength)
        ));
        lines.push(format!(
            "{defender_display} forces: {}",
            forces_to_string(self.defender_strength)
        ));
        lines.join("\n")
    }

    /// Paint this conflict onto the map: marker keyed by kind plus a
    /// description override combining conflict status with the location's
    /// own text.
    pub fn add_to_map(&self, ctx: &mut DayContext) {
        let Some(location) = ctx.campaign.locations.get(&self.location_id) else {
            return;
        };
        let text = format!("{}\n{}", self.description(ctx.campaign), location.description);
        ctx.ui.add_map_marker(&self.location_id, self.kind);
        ctx.ui.override_description(&self.location_id, &text);
    }

    pub fn work_order(&self) -> WorkOrder {
        let title = match self.kind {
            ConflictKind::Siege => "Siege contract",
            ConflictKind::Raid => "Raid contract",
        };
        WorkOrder {
            title: title.to_string(),
            days_until_mission: self.days_until_mission,
        }
    }
}

fn short_name(campaign: &Campaign, faction: &str) -> String {
    campaign
        .factions
        .get(faction)
        .map(|f| f.short_name.clone())
        .unwrap_or_else(|| faction.to_string())
}

fn display_name(campaign: &Campaign, faction: &str) -> String {
    campaign
        .factions
        .get(faction)
        .map(|f| f.display_name.clone())
        .unwrap_or_else(|| faction.to_string())
}
