//! Cascading facet-option resolution.
//!
//! The options offered for one facet are computed against the games passing
//! every OTHER facet's current restriction; the target facet's own selection
//! is relaxed first so already-chosen values stay offered. Options always
//! derive from games actually present, so stale selections surface as empty
//! results rather than phantom choices.

use crate::filter::{self, FacetFilter, FilterState};
use arena_core::{date_key, kickoff_time, weekday_abbrev, Game};
use std::collections::BTreeSet;

/// A selectable facet of the game collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Season,
    League,
    Opponent,
    Tier,
    Day,
    Date,
    Time,
    Zone,
    OwnRank,
    OppRank,
}

impl Facet {
    pub const ALL: [Facet; 10] = [
        Facet::Season,
        Facet::League,
        Facet::Opponent,
        Facet::Tier,
        Facet::Day,
        Facet::Date,
        Facet::Time,
        Facet::Zone,
        Facet::OwnRank,
        Facet::OppRank,
    ];
}

fn relax(filters: &FilterState, target: Facet) -> FilterState {
    let mut fs = filters.clone();
    match target {
        Facet::Season => fs.seasons = FacetFilter::Unrestricted,
        Facet::League => fs.leagues = FacetFilter::Unrestricted,
        Facet::Opponent => fs.opponents = FacetFilter::Unrestricted,
        Facet::Tier => fs.tiers = FacetFilter::Unrestricted,
        Facet::Day => fs.days = FacetFilter::Unrestricted,
        Facet::Date => fs.dates = FacetFilter::Unrestricted,
        Facet::Time => fs.times = FacetFilter::Unrestricted,
        Facet::Zone => fs.zones = FacetFilter::Unrestricted,
        Facet::OwnRank => fs.own_ranks = FacetFilter::Unrestricted,
        Facet::OppRank => fs.opp_ranks = FacetFilter::Unrestricted,
    }
    fs
}

fn facet_values(game: &Game, target: Facet, out: &mut BTreeSet<String>) {
    match target {
        Facet::Season => {
            out.insert(game.season.clone());
        }
        Facet::League => {
            out.insert(game.league.clone());
        }
        Facet::Opponent => {
            out.insert(game.opponent.clone());
        }
        Facet::Tier => {
            out.insert(game.tier.to_string());
        }
        Facet::Day => {
            out.insert(weekday_abbrev(game.date).to_string());
        }
        Facet::Date => {
            out.insert(date_key(game.date));
        }
        Facet::Time => {
            out.insert(kickoff_time(&game.id));
        }
        // Zones come from the sales lines actually present, not from the
        // capacity map: a configured but unsold zone is not offered.
        Facet::Zone => {
            for line in &game.sales {
                out.insert(line.zone.label().to_string());
            }
        }
        Facet::OwnRank => {
            out.insert(game.own_rank.to_string());
        }
        Facet::OppRank => {
            out.insert(game.opp_rank.to_string());
        }
    }
}

const DAY_ORDER: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn sort_options(target: Facet, mut values: Vec<String>) -> Vec<String> {
    match target {
        // Numeric facets ascend numerically, never lexically.
        Facet::Tier | Facet::OwnRank | Facet::OppRank => {
            values.sort_by_key(|v| v.parse::<u32>().unwrap_or(u32::MAX));
        }
        // Most recent season first.
        Facet::Season => values.sort_by(|a, b| b.cmp(a)),
        Facet::Day => {
            values.sort_by_key(|v| DAY_ORDER.iter().position(|d| d == v).unwrap_or(7));
        }
        // ISO date keys: lexicographic is chronological.
        _ => values.sort(),
    }
    values
}

/// Distinct options for `target`, restricted by every other facet's current
/// selection, in the facet's display order.
pub fn available_options(games: &[Game], filters: &FilterState, target: Facet) -> Vec<String> {
    let relaxed = relax(filters, target);
    let mut out = BTreeSet::new();
    for game in games.iter().filter(|g| filter::matches(g, &relaxed)) {
        facet_values(game, target, &mut out);
    }
    sort_options(target, out.into_iter().collect())
}
