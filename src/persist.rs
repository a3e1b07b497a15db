//! Save-tag codec for conflict state.
//!
//! Each live conflict serializes to one text tag: a fixed prefix followed
//! by a JSON payload of the persisted fields. Loading re-resolves the
//! location and attacker against the campaign and refuses to reconstruct
//! a conflict whose references no longer exist — a dangling reference is a
//! data-integrity error, never a silently fresh instance.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PersistError;
use crate::model::campaign::Campaign;
use crate::sim::flareup::Flareup;
use crate::sim::tags::SAVE_PREFIX;

/// Whether `tag` holds a serialized flareup.
pub fn is_flareup_tag(tag: &str) -> bool {
    tag.starts_with(SAVE_PREFIX)
}

/// Serialize a conflict to its save tag.
pub fn serialize(flareup: &Flareup) -> String {
    let json = serde_json::to_string(flareup).unwrap();
    format!("{SAVE_PREFIX}{json}")
}

/// Rebuild a conflict from a save tag, resolving its references against
/// the campaign.
pub fn deserialize(tag: &str, campaign: &Campaign) -> Result<Flareup, PersistError> {
    let json = tag
        .strip_prefix(SAVE_PREFIX)
        .ok_or(PersistError::NotAFlareupTag)?;
    let mut flareup: Flareup = serde_json::from_str(json)?;
    if !campaign.locations.contains_key(&flareup.location_id) {
        return Err(PersistError::UnknownLocation(flareup.location_id));
    }
    if !campaign.factions.contains_key(&flareup.attacker) {
        return Err(PersistError::UnknownFaction(flareup.attacker));
    }
    // A contract id is recorded only while a mission is pending, so
    // commitment is derived rather than stored.
    flareup.committed = !flareup.current_contract_id.is_empty();
    Ok(flareup)
}

/// Write save tags to `path`, one per line.
pub fn write_save(path: &Path, tags: impl IntoIterator<Item = String>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for tag in tags {
        writer.write_all(tag.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Read save tags from `path`, skipping blank lines.
pub fn read_save(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut tags = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            tags.push(line);
        }
    }
    Ok(tags)
}
