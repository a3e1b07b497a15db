mod common;

use flareup_sim::testutil::{Harness, fixed_settings};
use flareup_sim::{ConflictKind, Flareup, FlareupRegistry, PersistError, persist};

use common::two_front_campaign;

#[test]
fn registry_survives_a_save_file_round_trip() {
    let mut h = Harness::new(fixed_settings(), two_front_campaign(), 9);
    let mut registry = FlareupRegistry::new();
    registry.begin(&mut h.ctx(), "veldt", "hegemony", ConflictKind::Siege);
    registry.begin(&mut h.ctx(), "port_amber", "combine", ConflictKind::Raid);

    // Advance into the middle of the lifecycle so non-default state is
    // what round-trips.
    for _ in 0..7 {
        registry.advance_day(&mut h.ctx());
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conflicts.sav");
    let mut tags = registry.save_tags();
    tags.push("unrelated campaign tag".to_string());
    persist::write_save(&path, tags).unwrap();

    let loaded_tags = persist::read_save(&path).unwrap();
    assert_eq!(loaded_tags.len(), registry.len() + 1);

    let restored = FlareupRegistry::restore(&loaded_tags, &h.campaign).unwrap();
    assert_eq!(restored.len(), registry.len());
    for original in registry.iter() {
        let loaded = restored.get(&original.location_id).unwrap();
        assert_eq!(loaded.kind, original.kind);
        assert_eq!(loaded.attacker, original.attacker);
        assert_eq!(loaded.countdown, original.countdown);
        assert_eq!(loaded.days_until_mission, original.days_until_mission);
        assert_eq!(loaded.attacker_strength, original.attacker_strength);
        assert_eq!(loaded.defender_strength, original.defender_strength);
        assert_eq!(loaded.current_contract_id, original.current_contract_id);
        assert_eq!(
            loaded.current_contract_force_loss,
            original.current_contract_force_loss
        );
    }
}

#[test]
fn committed_conflict_restores_committed() {
    let mut h = Harness::new(fixed_settings(), two_front_campaign(), 1);
    let mut f = Flareup::launch(&mut h.ctx(), "veldt", "hegemony", ConflictKind::Siege);
    f.current_contract_id = "mission_3".to_string();
    f.current_contract_force_loss = 2;
    f.committed = true;

    let restored = FlareupRegistry::restore(&[persist::serialize(&f)], &h.campaign).unwrap();
    let loaded = restored.get("veldt").unwrap();
    assert!(loaded.committed);
    assert_eq!(loaded.current_contract_id, "mission_3");
}

#[test]
fn restore_refuses_dangling_references() {
    let mut h = Harness::new(fixed_settings(), two_front_campaign(), 1);
    let f = Flareup::launch(&mut h.ctx(), "veldt", "hegemony", ConflictKind::Siege);
    let tags = vec![persist::serialize(&f)];

    let mut no_location = two_front_campaign();
    no_location.locations.remove("veldt");
    assert!(matches!(
        FlareupRegistry::restore(&tags, &no_location),
        Err(PersistError::UnknownLocation(_))
    ));

    let mut no_faction = two_front_campaign();
    no_faction.factions.remove("hegemony");
    assert!(matches!(
        FlareupRegistry::restore(&tags, &no_faction),
        Err(PersistError::UnknownFaction(_))
    ));
}

#[test]
fn save_file_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparse.sav");
    persist::write_save(
        &path,
        ["one".to_string(), String::new(), "two".to_string()],
    )
    .unwrap();
    let tags = persist::read_save(&path).unwrap();
    assert_eq!(tags, vec!["one".to_string(), "two".to_string()]);
}
