//! The mission-offer interaction: turning "the player is helping a side"
//! into a concrete accept/decline engagement.

use tracing::{info, warn};

use super::context::DayContext;
use super::flareup::Flareup;
use super::helpers::roll_range;
use super::presentation::{MissionDecision, MissionPrompt};
use super::signal::Signal;

/// Offer the player a mission for the side they are helping.
///
/// Blocks on the presentation layer's prompt; the conflict's day-advance
/// resumes with the returned decision. Acceptance commits the conflict
/// only after the external acceptance flow succeeds; any failure there is
/// logged and suppressed, leaving the conflict exactly as it was.
pub(crate) fn offer_mission(flareup: &mut Flareup, ctx: &mut DayContext) {
    debug_assert!(!flareup.committed, "offer while a mission is pending");
    let (Some(employer), Some(target)) = (
        flareup.employer(ctx.campaign),
        flareup.target(ctx.campaign),
    ) else {
        return;
    };
    let Some(location) = ctx.campaign.location(&flareup.location_id) else {
        return;
    };

    let contract = ctx
        .contracts
        .new_procedural_contract(ctx.rng, employer, target, location);
    let employer_name = employer.display_name.clone();

    let prompt = MissionPrompt {
        title: "Flareup Mission".to_string(),
        message: format!(
            "{employer_name} has a mission for us, Commander: {}. Details will be \
             provided en route, but it seems to be a {} engagement. Sounds urgent.",
            contract.name,
            contract.category.to_lowercase(),
        ),
        accept_label: "Launch mission".to_string(),
        decline_label: "Pass".to_string(),
    };

    match ctx.ui.offer_mission(&prompt) {
        MissionDecision::Decline => {
            info!(location = %flareup.location_id, contract = %contract.name, "player passed on mission");
        }
        MissionDecision::Accept => {
            let s = ctx.settings;
            let force_loss = roll_range(ctx.rng, s.combat_force_loss_min, s.combat_force_loss_max);
            match ctx.contracts.force_take_contract(&contract) {
                Ok(()) => {
                    info!(location = %flareup.location_id, contract = %contract.name, "accepted mission");
                    flareup.current_contract_id = contract.id.clone();
                    flareup.current_contract_force_loss = force_loss;
                    flareup.committed = true;
                    ctx.signals.push(Signal::MissionAccepted {
                        location_id: flareup.location_id.clone(),
                        contract_id: contract.id,
                    });
                }
                Err(err) => {
                    // Acceptance must never corrupt conflict state; the
                    // offer is simply dropped for this cycle.
                    warn!(location = %flareup.location_id, "mission acceptance failed: {err}");
                }
            }
        }
    }
}
