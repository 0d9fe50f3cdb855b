//! Scenario comparison and season-over-season targets.
//!
//! A scenario is a filter state plus the guest-zone toggle; comparing two
//! scenarios runs the full pipeline twice against the same dataset and
//! reports per-metric percentage variance. Rank metrics are inverted (lower
//! is better) so consumers can color deltas correctly.

use crate::aggregate::{self, AggregateResult};
use crate::filter::{FacetFilter, FilterState};
use crate::view::{self, ViewMode};
use arena_core::Game;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Serialize;

/// Percentage change from `a` to `b`.
///
/// A positive baseline uses the ordinary relative delta; growth from a zero
/// baseline is pinned at exactly 100; zero-to-zero is 0. Non-finite
/// intermediate values collapse to 0.
pub fn variance_pct(a: f64, b: f64) -> f64 {
    let v = if a > 0.0 {
        (b - a) / a * 100.0
    } else if a == 0.0 && b > 0.0 {
        100.0
    } else {
        0.0
    };
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// One side of a comparison: what to select and how to treat the guest zone.
#[derive(Clone, Debug, Default)]
pub struct Scenario {
    pub filters: FilterState,
    pub ignore_guest_zone: bool,
}

/// One compared metric with its directionality.
#[derive(Clone, Debug, Serialize)]
pub struct MetricDelta {
    pub name: &'static str,
    pub a: f64,
    pub b: f64,
    pub variance_pct: f64,
    /// Rank-style metrics: a negative variance is the improvement.
    pub lower_is_better: bool,
}

/// The full two-scenario comparison result.
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub a: AggregateResult,
    pub b: AggregateResult,
    pub metrics: Vec<MetricDelta>,
}

fn avg_rank(games: &[Game], own: bool) -> f64 {
    // Rank 0 means unknown and is excluded from the average.
    let ranks: Vec<u32> = games
        .iter()
        .map(|g| if own { g.own_rank } else { g.opp_rank })
        .filter(|r| *r > 0)
        .collect();
    if ranks.is_empty() {
        return 0.0;
    }
    ranks.iter().sum::<u32>() as f64 / ranks.len() as f64
}

fn dec(v: Decimal) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

fn metric(name: &'static str, a: f64, b: f64, lower_is_better: bool) -> MetricDelta {
    MetricDelta {
        name,
        a,
        b,
        variance_pct: variance_pct(a, b),
        lower_is_better,
    }
}

/// Runs both scenarios through the pipeline and lines their KPIs up.
/// `None` when either side selects no games; a comparison against nothing
/// is not a row of zeros.
pub fn compare(
    games: &[Game],
    a: &Scenario,
    b: &Scenario,
    mode: ViewMode,
) -> Option<Comparison> {
    let view_a = view::dataset_view(games, &a.filters, mode, a.ignore_guest_zone);
    let view_b = view::dataset_view(games, &b.filters, mode, b.ignore_guest_zone);
    let agg_a = aggregate::aggregate(&view_a)?;
    let agg_b = aggregate::aggregate(&view_b)?;

    let avg_att = |agg: &AggregateResult| agg.total_attendance as f64 / agg.game_count as f64;
    let metrics = vec![
        metric("Total Revenue", dec(agg_a.total_revenue), dec(agg_b.total_revenue), false),
        metric(
            "Avg Revenue / Game",
            dec(agg_a.avg_revenue_per_game),
            dec(agg_b.avg_revenue_per_game),
            false,
        ),
        metric("Avg Attendance", avg_att(&agg_a), avg_att(&agg_b), false),
        metric("Yield (ATP)", dec(agg_a.yield_per_seat), dec(agg_b.yield_per_seat), false),
        metric(
            "RevPAS",
            dec(agg_a.rev_per_available_seat),
            dec(agg_b.rev_per_available_seat),
            false,
        ),
        metric("Load Factor", agg_a.occupancy_rate, agg_b.occupancy_rate, false),
        metric("Avg Own Rank", avg_rank(&view_a, true), avg_rank(&view_b, true), true),
        metric("Avg Opp Rank", avg_rank(&view_a, false), avg_rank(&view_b, false), true),
    ];
    Some(Comparison { a: agg_a, b: agg_b, metrics })
}

/// Growth assumptions applied to a baseline season when deriving targets.
#[derive(Clone, Copy, Debug)]
pub struct TargetConfig {
    pub revenue_growth_pct: f64,
    pub attendance_growth_pct: f64,
    /// Giveaway targets are a ceiling, not a growth figure.
    pub giveaway_ceiling_pct: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            revenue_growth_pct: 10.0,
            attendance_growth_pct: 5.0,
            giveaway_ceiling_pct: 7.0,
        }
    }
}

/// Target KPI block derived from the preceding season's actuals.
#[derive(Clone, Debug, Serialize)]
pub struct TargetKpis {
    pub baseline_season: String,
    pub avg_revenue_per_game: Decimal,
    pub yield_per_seat: Decimal,
    pub rev_per_available_seat: Decimal,
    /// Baseline average attendance scaled by the attendance growth
    /// assumption.
    pub avg_attendance: f64,
    /// Percent, clamped to 100.
    pub occupancy_rate: f64,
    /// Parity with the baseline, not a growth target.
    pub corporate_share: f64,
    /// The configured ceiling, passed through.
    pub giveaway_rate: f64,
    pub baseline_avg_attendance: f64,
}

/// The season label immediately preceding `current` among those present in
/// the dataset (labels sort chronologically, e.g. "24-25" < "25-26").
pub fn preceding_season(games: &[Game], current: &str) -> Option<String> {
    games
        .iter()
        .map(|g| g.season.as_str())
        .filter(|s| *s < current)
        .max()
        .map(str::to_string)
}

/// Derives season targets for the single currently selected season.
///
/// The baseline re-selects the preceding season under the current league,
/// opponent and tier restrictions; calendar facets (day, date, time) and
/// ranks are deliberately dropped since they rarely transfer across
/// seasons. `None` when no single season is selected or no baseline games
/// exist.
pub fn compute_targets(
    games: &[Game],
    filters: &FilterState,
    mode: ViewMode,
    ignore_guest_zone: bool,
    config: &TargetConfig,
) -> Option<TargetKpis> {
    let current = match &filters.seasons {
        FacetFilter::RestrictedTo(set) if set.len() == 1 => set.iter().next()?.clone(),
        _ => return None,
    };
    let baseline_season = preceding_season(games, &current)?;

    let baseline_filters = FilterState {
        seasons: FacetFilter::only(baseline_season.clone()),
        leagues: filters.leagues.clone(),
        opponents: filters.opponents.clone(),
        tiers: filters.tiers.clone(),
        zones: filters.zones.clone(),
        ..FilterState::default()
    };
    let baseline = view::dataset_view(games, &baseline_filters, mode, ignore_guest_zone);
    let agg = aggregate::aggregate(&baseline)?;

    let factor = Decimal::from_f64(1.0 + config.revenue_growth_pct / 100.0)
        .unwrap_or(Decimal::ONE);
    let att_factor = 1.0 + config.attendance_growth_pct / 100.0;
    let occupancy = (agg.occupancy_rate * att_factor).min(100.0);
    let baseline_avg_attendance = agg.total_attendance as f64 / agg.game_count as f64;
    tracing::debug!(
        current = %current,
        baseline = %baseline_season,
        baseline_games = agg.game_count,
        "derived season targets"
    );
    Some(TargetKpis {
        baseline_season,
        avg_revenue_per_game: agg.avg_revenue_per_game * factor,
        yield_per_seat: agg.yield_per_seat * factor,
        rev_per_available_seat: agg.rev_per_available_seat * factor,
        avg_attendance: baseline_avg_attendance * att_factor,
        occupancy_rate: occupancy,
        corporate_share: agg.corporate_share,
        giveaway_rate: config.giveaway_ceiling_pct,
        baseline_avg_attendance,
    })
}
