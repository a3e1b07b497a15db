use flareup_sim::Reputation;
use flareup_sim::model::campaign::Campaign;
use flareup_sim::model::faction::Faction;
use flareup_sim::model::location::Location;

/// Three factions, two contested locations, player at the first.
///
/// The corsairs start hated so reputation-gating paths are reachable
/// without extra setup.
pub fn two_front_campaign() -> Campaign {
    let mut campaign = Campaign::new();
    for (name, display, short) in [
        ("hegemony", "Hegemony of Karth", "Hegemony"),
        ("combine", "Auric Combine", "Combine"),
        ("corsairs", "Tyrell Corsairs", "Corsairs"),
    ] {
        campaign
            .factions
            .insert(name.into(), Faction::new(name, display, short));
    }
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
    campaign.locations.insert(
        "port_amber".into(),
        Location {
            id: "port_amber".into(),
            name: "Port Amber".into(),
            owner: "hegemony".into(),
            difficulty: 7,
            description: "Refuelling hub above an amber gas giant.".into(),
        },
    );
    campaign
        .reputation
        .insert("corsairs".into(), Reputation::Hated);
    campaign.current_location = "veldt".into();
    campaign
}
