//! Season-dependent seating capacity rules.
//!
//! Capacities are data: one full per-zone table per season that differs from
//! the current configuration, plus a single explicit phased-release rule for
//! the skybox rollout mid-way through the legacy season. Adding a season or
//! zone is an additive table row, not a new branch.

use crate::{Game, Zone};
use std::collections::BTreeMap;

/// The season with non-current capacity tables and the phased skybox release.
pub const LEGACY_SEASON: &str = "23-24";

/// 1-based game index within [`LEGACY_SEASON`] at which skyboxes open.
/// Before this index the zone is configured with zero capacity.
pub const SKYBOX_RELEASE_INDEX: usize = 6;

const CAPACITIES_23_24: [(Zone, u64); 11] = [
    (Zone::ParterreOvest, 465),
    (Zone::ParterreEst, 220),
    (Zone::TribunaGold, 1815),
    (Zone::TribunaSilver, 705),
    (Zone::Curva, 458),
    (Zone::GalleriaGold, 389),
    (Zone::GalleriaSilver, 669),
    (Zone::Courtside, 32),
    (Zone::Ospiti, 233),
    (Zone::ParterreExclusive, 0),
    (Zone::Skybox, 60),
];

const CAPACITIES_24_25: [(Zone, u64); 11] = [
    (Zone::ParterreOvest, 465),
    (Zone::ParterreEst, 220),
    (Zone::TribunaGold, 1815),
    (Zone::TribunaSilver, 735),
    (Zone::Curva, 458),
    (Zone::GalleriaGold, 389),
    (Zone::GalleriaSilver, 669),
    (Zone::Courtside, 42),
    (Zone::Ospiti, 233),
    (Zone::ParterreExclusive, 0),
    (Zone::Skybox, 60),
];

const CAPACITIES_CURRENT: [(Zone, u64); 11] = [
    (Zone::ParterreOvest, 373),
    (Zone::ParterreExclusive, 75),
    (Zone::ParterreEst, 200),
    (Zone::TribunaGold, 2209),
    (Zone::TribunaSilver, 367),
    (Zone::GalleriaGold, 389),
    (Zone::GalleriaSilver, 669),
    (Zone::Curva, 458),
    (Zone::Courtside, 44),
    (Zone::Ospiti, 233),
    (Zone::Skybox, 60),
];

/// Per-zone pre-sold (season-ticket) seat counts, deducted from inventory in
/// the GameDay view. Derived from the current season's fixed/variable split.
const FIXED_ALLOTMENT: [(Zone, u64); 11] = [
    (Zone::ParterreOvest, 223),
    (Zone::ParterreEst, 94),
    (Zone::TribunaGold, 1230),
    (Zone::TribunaSilver, 261),
    (Zone::GalleriaGold, 282),
    (Zone::GalleriaSilver, 70),
    (Zone::Curva, 314),
    (Zone::Courtside, 38),
    (Zone::Skybox, 60),
    (Zone::Ospiti, 0),
    (Zone::ParterreExclusive, 68),
];

fn season_table(season: &str) -> &'static [(Zone, u64); 11] {
    match season {
        "23-24" => &CAPACITIES_23_24,
        "24-25" => &CAPACITIES_24_25,
        _ => &CAPACITIES_CURRENT,
    }
}

/// Per-zone capacity for a game, given its season and 1-based ordinal
/// position within that season (ingestion order, scoped per season label).
///
/// The returned map contains every [`Zone`], zero-capacity zones included:
/// downstream code relies on key presence to decide whether a zone is
/// configured for the game.
pub fn capacity_for_game(season: &str, game_index_in_season: usize) -> BTreeMap<Zone, u64> {
    let mut map: BTreeMap<Zone, u64> = season_table(season).iter().copied().collect();
    if season == LEGACY_SEASON && game_index_in_season < SKYBOX_RELEASE_INDEX {
        map.insert(Zone::Skybox, 0);
    }
    map
}

/// Pre-sold allotment for a zone in a season; 0 for unlisted zones.
///
/// Currently a single table applies to all seasons; the season parameter
/// keeps the contract ready for season-specific splits.
pub fn fixed_allotment(_season: &str, zone: Zone) -> u64 {
    FIXED_ALLOTMENT
        .iter()
        .find(|(z, _)| *z == zone)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

/// Assigns each game its 1-based ordinal index within its season, in
/// ingestion order. The input order is significant: the same input order
/// must always produce the same indices.
pub fn assign_season_indices(games: &[Game]) -> Vec<usize> {
    let mut counters: BTreeMap<&str, usize> = BTreeMap::new();
    games
        .iter()
        .map(|g| {
            let c = counters.entry(g.season.as_str()).or_insert(0);
            *c += 1;
            *c
        })
        .collect()
}
