//! Serializable snapshots of a fully evaluated pipeline state.
//!
//! A snapshot captures the filter selection, view mode and resulting KPI
//! block in one JSON-serializable value, so a dashboard state can be saved,
//! diffed or replayed against a newer dataset.

use crate::aggregate::{self, AggregateResult};
use crate::filter::FilterState;
use crate::view::{self, ViewMode};
use arena_core::Game;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub filters: FilterState,
    pub view_mode: ViewMode,
    pub ignore_guest_zone: bool,
    pub games_in_view: usize,
    /// Ids of the games the selection resolved to, in dataset order.
    pub game_ids: Vec<String>,
    /// `None` when the selection matched nothing.
    pub totals: Option<AggregateResult>,
}

impl Snapshot {
    /// Evaluates the pipeline and freezes the result.
    pub fn capture(
        games: &[Game],
        filters: &FilterState,
        view_mode: ViewMode,
        ignore_guest_zone: bool,
    ) -> Snapshot {
        let projected = view::dataset_view(games, filters, view_mode, ignore_guest_zone);
        Snapshot {
            filters: filters.clone(),
            view_mode,
            ignore_guest_zone,
            games_in_view: projected.len(),
            game_ids: projected.iter().map(|g| g.id.clone()).collect(),
            totals: aggregate::aggregate(&projected),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FacetFilter;
    use crate::testutil::demo_games;

    #[test]
    fn capture_freezes_selection_and_totals() {
        let games = demo_games();
        let fs = FilterState {
            seasons: FacetFilter::only("25-26"),
            ..FilterState::default()
        };
        let snap = Snapshot::capture(&games, &fs, ViewMode::Total, false);
        assert_eq!(snap.games_in_view, 2);
        assert_eq!(snap.game_ids.len(), 2);
        assert!(snap.totals.is_some());
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"view_mode\": \"total\""));
        assert!(json.contains("25-26"));
    }

    #[test]
    fn empty_selection_snapshots_cleanly() {
        let games = demo_games();
        let fs = FilterState {
            seasons: FacetFilter::only("19-20"),
            ..FilterState::default()
        };
        let snap = Snapshot::capture(&games, &fs, ViewMode::GameDay, true);
        assert!(snap.game_ids.is_empty());
        assert!(snap.totals.is_none());
        assert!(snap.to_json().is_ok());
    }
}
