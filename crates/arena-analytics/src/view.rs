//! View-mode projections over games.
//!
//! A projection derives a new game record from a source game: sales lines
//! restricted by guest-zone toggle, zone slice and channel scope, and a
//! capacity map with the season's pre-sold allotment backed out when the
//! view accounts for day-of-sale inventory only. The source game is never
//! touched.

use crate::filter::{self, FacetFilter, FilterState};
use arena_core::{capacity, Game, Zone};
use serde::{Deserialize, Serialize};

/// Headline accounting mode.
///
/// Total is full-season accounting; GameDay restricts to day-of-sale
/// channels and deducts seats already committed to season-ticket holders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Total,
    GameDay,
}

/// Which sales channels a projection retains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelScope {
    All,
    /// Single-game, mini-plan, youth and giveaway lines only; season-ticket
    /// and corporate lines are dropped entirely, not zeroed.
    DayOfSale,
}

/// One parameterized projection covering both the mode-conditional dashboard
/// view and the unconditional efficiency view.
#[derive(Clone, Debug)]
pub struct Projection {
    pub channel_scope: ChannelScope,
    /// Subtract the season's fixed (pre-sold) allotment from each configured
    /// zone, floored at zero.
    pub deduct_fixed: bool,
    /// Drop the guest section from lines and capacity alike.
    pub ignore_guest_zone: bool,
    /// Zone slice; restricted slices drop lines and capacity entries for
    /// zones outside the set.
    pub zones: FacetFilter,
}

impl Projection {
    /// Mode-conditional projection: identity for Total, day-of-sale scope
    /// plus capacity deduction for GameDay.
    pub fn for_mode(mode: ViewMode, ignore_guest_zone: bool, zones: FacetFilter) -> Projection {
        match mode {
            ViewMode::Total => Projection {
                channel_scope: ChannelScope::All,
                deduct_fixed: false,
                ignore_guest_zone,
                zones,
            },
            ViewMode::GameDay => Projection {
                channel_scope: ChannelScope::DayOfSale,
                deduct_fixed: true,
                ignore_guest_zone,
                zones,
            },
        }
    }

    /// Unconditional day-of-sale projection used for zone-efficiency
    /// analysis; applies the channel restriction and deduction regardless of
    /// the dashboard's selected mode.
    pub fn efficiency(ignore_guest_zone: bool, zones: FacetFilter) -> Projection {
        Projection {
            channel_scope: ChannelScope::DayOfSale,
            deduct_fixed: true,
            ignore_guest_zone,
            zones,
        }
    }
}

/// Derives a projected game. Transform order matches the reference
/// dashboard: guest-zone drop, zone slice, channel scope, then the capacity
/// map gets the same zone treatment plus the fixed-allotment deduction.
///
/// Attendance and revenue are recomputed from the surviving lines; games
/// ingested without a line breakdown keep their pre-aggregated figures.
pub fn project_game(game: &Game, projection: &Projection) -> Game {
    let mut sales = game.sales.clone();
    if projection.ignore_guest_zone {
        sales.retain(|s| s.zone != Zone::Ospiti);
    }
    sales.retain(|s| projection.zones.accepts(s.zone.label()));
    if projection.channel_scope == ChannelScope::DayOfSale {
        sales.retain(|s| s.channel.is_day_of_sale());
    }

    let mut capacities = game.capacities.clone();
    if projection.ignore_guest_zone {
        capacities.remove(&Zone::Ospiti);
    }
    capacities.retain(|z, _| projection.zones.accepts(z.label()));
    if projection.deduct_fixed {
        for (zone, cap) in capacities.iter_mut() {
            *cap = cap.saturating_sub(capacity::fixed_allotment(&game.season, *zone));
        }
    }

    let (attendance, total_revenue) = if game.sales.is_empty() {
        (game.attendance, game.total_revenue)
    } else {
        (
            sales.iter().map(|s| s.quantity).sum(),
            sales.iter().map(|s| s.revenue).sum(),
        )
    };

    Game {
        attendance,
        total_revenue,
        capacities,
        sales,
        ..game.clone()
    }
}

/// Mode-conditional entry point for headline KPIs and tables.
pub fn apply_view_mode(
    game: &Game,
    mode: ViewMode,
    ignore_guest_zone: bool,
    zones: &FacetFilter,
) -> Game {
    project_game(game, &Projection::for_mode(mode, ignore_guest_zone, zones.clone()))
}

/// Unconditional day-of-sale entry point for zone-efficiency analysis only;
/// never feeds headline KPIs.
pub fn efficiency_view(game: &Game, ignore_guest_zone: bool, zones: &FacetFilter) -> Game {
    project_game(game, &Projection::efficiency(ignore_guest_zone, zones.clone()))
}

/// Full pipeline front half: select games by the filter state, then project
/// each survivor for the requested mode. Re-run end-to-end on every input
/// change; there is no cached state to invalidate.
pub fn dataset_view(
    games: &[Game],
    filters: &FilterState,
    mode: ViewMode,
    ignore_guest_zone: bool,
) -> Vec<Game> {
    let selected = filter::filter(games, filters);
    tracing::debug!(
        total = games.len(),
        selected = selected.len(),
        ?mode,
        "projecting dataset view"
    );
    let projection = Projection::for_mode(mode, ignore_guest_zone, filters.zones.clone());
    selected.iter().map(|g| project_game(g, &projection)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{demo_games, line, simple_game};
    use arena_core::Channel;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn total_mode_is_identity() {
        for g in demo_games() {
            let derived = apply_view_mode(&g, ViewMode::Total, false, &FacetFilter::Unrestricted);
            assert_eq!(derived.sales, g.sales);
            assert_eq!(derived.capacities, g.capacities);
        }
    }

    #[test]
    fn gameday_drops_committed_channels() {
        for g in demo_games() {
            let derived = apply_view_mode(&g, ViewMode::GameDay, false, &FacetFilter::Unrestricted);
            assert!(derived
                .sales
                .iter()
                .all(|s| !matches!(s.channel, Channel::SeasonTicket | Channel::Corporate)));
            // Lines are dropped, not zeroed.
            let committed = g
                .sales
                .iter()
                .filter(|s| matches!(s.channel, Channel::SeasonTicket | Channel::Corporate))
                .count();
            assert_eq!(derived.sales.len() + committed, g.sales.len());
        }
    }

    #[test]
    fn gameday_deducts_fixed_allotment_floored() {
        let g = simple_game("25-26", 1);
        let derived = apply_view_mode(&g, ViewMode::GameDay, false, &FacetFilter::Unrestricted);
        for (zone, cap) in &derived.capacities {
            let base = g.capacities[zone];
            let fixed = arena_core::capacity::fixed_allotment("25-26", *zone);
            assert_eq!(*cap, base.saturating_sub(fixed));
        }
        // Skyboxes are fully pre-sold: 60 - 60 = 0, key still present.
        assert_eq!(derived.capacities[&arena_core::Zone::Skybox], 0);
    }

    #[test]
    fn efficiency_view_ignores_mode() {
        let g = simple_game("25-26", 1);
        let eff = efficiency_view(&g, false, &FacetFilter::Unrestricted);
        let gameday = apply_view_mode(&g, ViewMode::GameDay, false, &FacetFilter::Unrestricted);
        assert_eq!(eff.sales, gameday.sales);
        assert_eq!(eff.capacities, gameday.capacities);
    }

    #[test]
    fn guest_zone_toggle_drops_lines_and_capacity() {
        let g = simple_game("25-26", 1);
        let derived = apply_view_mode(&g, ViewMode::Total, true, &FacetFilter::Unrestricted);
        assert!(derived.sales.iter().all(|s| s.zone != Zone::Ospiti));
        assert!(!derived.capacities.contains_key(&Zone::Ospiti));
    }

    #[test]
    fn zone_slice_reshapes_totals() {
        let g = simple_game("25-26", 1);
        let slice = FacetFilter::only("Curva");
        let derived = apply_view_mode(&g, ViewMode::Total, false, &slice);
        assert!(derived.sales.iter().all(|s| s.zone == Zone::Curva));
        assert_eq!(derived.capacities.len(), 1);
        assert_eq!(derived.capacity(), g.capacities[&Zone::Curva]);
        let expected: u64 = g
            .sales
            .iter()
            .filter(|s| s.zone == Zone::Curva)
            .map(|s| s.quantity)
            .sum();
        assert_eq!(derived.attendance, expected);
    }

    #[test]
    fn preaggregated_game_keeps_source_figures() {
        let mut g = simple_game("25-26", 1);
        g.sales.clear();
        g.attendance = 4321;
        g.total_revenue = Decimal::new(99_000_00, 2);
        let derived = apply_view_mode(&g, ViewMode::GameDay, false, &FacetFilter::Unrestricted);
        assert_eq!(derived.attendance, 4321);
        assert_eq!(derived.total_revenue, Decimal::new(99_000_00, 2));
    }

    #[test]
    fn source_game_is_never_mutated() {
        let g = simple_game("25-26", 1);
        let before = g.clone();
        let _ = apply_view_mode(&g, ViewMode::GameDay, true, &FacetFilter::only("Curva"));
        assert_eq!(g.sales, before.sales);
        assert_eq!(g.capacities, before.capacities);
    }

    proptest! {
        // GameDay capacity never goes negative, even when the allotment
        // exceeds base capacity.
        #[test]
        fn deduction_floor_holds(cap in 0u64..3000, qty in 0u64..3000) {
            let mut g = simple_game("25-26", 1);
            g.capacities.insert(Zone::Courtside, cap);
            g.sales.push(line(Zone::Courtside, Channel::SingleGame, qty, 1_000_00));
            let derived = apply_view_mode(&g, ViewMode::GameDay, false, &FacetFilter::Unrestricted);
            let fixed = arena_core::capacity::fixed_allotment("25-26", Zone::Courtside);
            prop_assert_eq!(derived.capacities[&Zone::Courtside], cap.saturating_sub(fixed));
            prop_assert!(derived.capacity() <= g.capacity());
        }
    }
}
