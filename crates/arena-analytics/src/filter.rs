//! Multi-field faceted filtering over game collections.
//!
//! Every facet is either unrestricted or restricted to an explicit value
//! set; facets AND together. The zone facet is deliberately NOT a
//! game-selection facet: it reshapes a game's sales lines and capacity map
//! through the view projection (see [`crate::view`]) and never excludes a
//! game from the collection, so zone selection does not change how many
//! games an aggregate counts.

use arena_core::{date_key, kickoff_time, weekday_abbrev, Game};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One facet's accepted values: everything, or an explicit set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetFilter {
    #[default]
    Unrestricted,
    RestrictedTo(BTreeSet<String>),
}

impl FacetFilter {
    /// Restricts to a single value.
    pub fn only(value: impl Into<String>) -> FacetFilter {
        FacetFilter::RestrictedTo(BTreeSet::from([value.into()]))
    }

    /// Builds a filter from raw selection values. An empty selection or a
    /// selection containing the legacy "All" sentinel collapses to
    /// `Unrestricted`, regardless of any other entries present.
    pub fn from_values<I, S>(values: I) -> FacetFilter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() || set.contains("All") {
            FacetFilter::Unrestricted
        } else {
            FacetFilter::RestrictedTo(set)
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, FacetFilter::Unrestricted)
    }

    /// Whether `value` passes this facet. Unknown values in a restricted set
    /// simply match nothing; that is a correct empty result, not an error.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FacetFilter::Unrestricted => true,
            FacetFilter::RestrictedTo(set) => set.contains(value),
        }
    }
}

/// The full filter selection threaded through every pipeline entry point.
///
/// Numeric facets (tier, ranks) hold string-cast values, matching the facet
/// option lists handed to selection widgets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub seasons: FacetFilter,
    pub leagues: FacetFilter,
    pub opponents: FacetFilter,
    pub tiers: FacetFilter,
    /// Weekday abbreviation facet (Mon..Sun), derived from the game date.
    pub days: FacetFilter,
    /// ISO date facet (`YYYY-MM-DD`).
    pub dates: FacetFilter,
    /// Kickoff-time facet (`HH.MM`), derived from the game id.
    pub times: FacetFilter,
    pub own_ranks: FacetFilter,
    pub opp_ranks: FacetFilter,
    /// Zone slice; consumed by the view projection only, ignored by
    /// [`matches`].
    pub zones: FacetFilter,
}

/// Whether a game passes every game-selection facet. The zone slice is not
/// consulted here.
pub fn matches(game: &Game, filters: &FilterState) -> bool {
    filters.seasons.accepts(&game.season)
        && filters.leagues.accepts(&game.league)
        && filters.opponents.accepts(&game.opponent)
        && filters.tiers.accepts(&game.tier.to_string())
        && filters.days.accepts(weekday_abbrev(game.date))
        && filters.dates.accepts(&date_key(game.date))
        && filters.times.accepts(&kickoff_time(&game.id))
        && filters.own_ranks.accepts(&game.own_rank.to_string())
        && filters.opp_ranks.accepts(&game.opp_rank.to_string())
}

/// Selects the subset of games passing the filter. The source collection is
/// never mutated; survivors are cloned.
pub fn filter(games: &[Game], filters: &FilterState) -> Vec<Game> {
    games.iter().filter(|g| matches(g, filters)).cloned().collect()
}
