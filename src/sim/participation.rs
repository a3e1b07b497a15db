//! Participation-offer policy: who may hire the player into a conflict,
//! and the canonical offer pair kept on the campaign's contract board.

use tracing::{debug, info};

use crate::model::campaign::Campaign;
use crate::model::contract::ContractOffer;
use crate::model::faction::Faction;
use crate::settings::Settings;

use super::context::DayContext;
use super::flareup::{ConflictKind, Flareup};
use super::tags;

/// Pure eligibility check: whether `faction` may offer the player a
/// participation contract under the current settings and reputation.
pub fn eligible(settings: &Settings, campaign: &Campaign, faction: &Faction) -> bool {
    faction.hirable
        && !settings.wont_hire_player.iter().any(|n| n == &faction.name)
        && campaign.reputation_with(&faction.name) >= settings.min_reputation()
}

/// Canonical offer-id pair for a conflict kind: (attacker side, defender
/// side).
pub fn offer_ids(kind: ConflictKind) -> (&'static str, &'static str) {
    match kind {
        ConflictKind::Siege => (tags::SIEGE_AID_ATTACKER, tags::SIEGE_AID_DEFENDER),
        ConflictKind::Raid => (tags::RAID_AID_ATTACKER, tags::RAID_AID_DEFENDER),
    }
}

/// Spawn one offer per eligible side. Each side is judged independently;
/// both offers may coexist. Offers already on the board are left alone.
pub(crate) fn spawn(flareup: &Flareup, ctx: &mut DayContext) {
    let (attacker_offer, defender_offer) = offer_ids(flareup.kind);
    let Some(location) = ctx.campaign.locations.get(&flareup.location_id) else {
        return;
    };
    let location_name = location.name.clone();
    let difficulty = location.difficulty;
    let defender = location.owner.clone();
    // Offers lapse when the fighting would start; an offer spawned after
    // that lives until removed explicitly.
    let expires_in = (flareup.countdown > 0).then_some(flareup.countdown);

    let sides = [
        (attacker_offer, flareup.attacker.clone(), defender.clone()),
        (defender_offer, defender, flareup.attacker.clone()),
    ];

    for (offer_id, employer, target) in sides {
        if ctx.campaign.contract(offer_id).is_some() {
            continue;
        }
        let Some(faction) = ctx.campaign.faction(&employer) else {
            continue;
        };
        if !eligible(ctx.settings, ctx.campaign, faction) {
            debug!(%employer, offer = offer_id, "skipping participation offer: not eligible");
            continue;
        }
        let employer_display = faction.display_name.clone();
        info!(
            offer = offer_id,
            %employer,
            %target,
            location = %flareup.location_id,
            difficulty,
            "adding participation offer"
        );
        ctx.campaign.add_contract(ContractOffer {
            id: offer_id.to_string(),
            name: format!("Aid {employer_display} at {location_name}"),
            employer,
            target,
            location_id: flareup.location_id.clone(),
            difficulty,
            expires_in,
        });
    }
}

/// Remove this conflict's outstanding offers from the board.
///
/// Offers are surfaced per-location, so removal applies only while the
/// player is at the conflict's location. Idempotent: removing offers that
/// are already gone is a no-op.
pub(crate) fn remove(flareup: &Flareup, ctx: &mut DayContext) {
    if ctx.campaign.current_location != flareup.location_id {
        return;
    }
    let (attacker_offer, defender_offer) = offer_ids(flareup.kind);
    debug!(location = %flareup.location_id, "removing participation offers");
    ctx.campaign
        .remove_contracts(&[attacker_offer, defender_offer]);
}
