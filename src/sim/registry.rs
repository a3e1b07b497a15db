//! Day-advance driver for the set of live conflicts.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::PersistError;
use crate::model::campaign::Campaign;
use crate::persist;

use super::context::DayContext;
use super::flareup::{ConflictKind, Flareup};

/// All live conflicts, keyed by contested location.
///
/// At most one conflict per location may be live at a time. Conflicts are
/// independent: they advance in location order for determinism, but no
/// ordering between them affects correctness.
#[derive(Debug, Default)]
pub struct FlareupRegistry {
    active: BTreeMap<String, Flareup>,
}

impl FlareupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a conflict and paint it onto the map.
    ///
    /// # Panics
    /// Panics if a live conflict already exists at `location_id`.
    pub fn begin(
        &mut self,
        ctx: &mut DayContext,
        location_id: &str,
        attacker: &str,
        kind: ConflictKind,
    ) -> &Flareup {
        assert!(
            !self.active.contains_key(location_id),
            "begin: conflict already live at {location_id}"
        );
        let flareup = Flareup::launch(ctx, location_id, attacker, kind);
        flareup.add_to_map(ctx);
        self.active
            .entry(location_id.to_string())
            .or_insert(flareup)
    }

    /// Advance the campaign one simulated day: expire temporary campaign
    /// state, then advance every live conflict exactly once. Concluded
    /// conflicts are dropped and their map overlay retracted.
    pub fn advance_day(&mut self, ctx: &mut DayContext) {
        ctx.campaign.tick_day();

        let keys: Vec<String> = self.active.keys().cloned().collect();
        for key in keys {
            let concluded = self
                .active
                .get_mut(&key)
                .expect("keys are stable within a day")
                .pass_day(ctx);
            if concluded {
                let flareup = self.active.remove(&key).unwrap();
                debug!(location = %flareup.location_id, "retracting conflict overlay");
                ctx.ui.remove_map_marker(&flareup.location_id);
                ctx.ui.restore_description(&flareup.location_id);
            }
        }
    }

    pub fn get(&self, location_id: &str) -> Option<&Flareup> {
        self.active.get(location_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flareup> {
        self.active.values()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Serialize every live conflict to its save tag.
    pub fn save_tags(&self) -> Vec<String> {
        self.active.values().map(persist::serialize).collect()
    }

    /// Rebuild a registry from save tags. Tags without the flareup prefix
    /// are ignored; a flareup tag that fails to resolve against the
    /// campaign is a data-integrity error.
    pub fn restore(tags: &[String], campaign: &Campaign) -> Result<Self, PersistError> {
        let mut active = BTreeMap::new();
        for tag in tags.iter().filter(|t| persist::is_flareup_tag(t)) {
            let flareup = persist::deserialize(tag, campaign)?;
            active.insert(flareup.location_id.clone(), flareup);
        }
        Ok(Self { active })
    }

    /// Re-apply map overlays after a restore.
    pub fn repaint(&self, ctx: &mut DayContext) {
        for flareup in self.active.values() {
            flareup.add_to_map(ctx);
        }
    }
}
