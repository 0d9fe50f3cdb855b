//! KPI aggregation over a projected game collection.
//!
//! All aggregates are computed in one pass over whatever collection the
//! filter and projection stages produced; the same figures therefore answer
//! season totals, single-game drill-downs and scenario baselines. Currency
//! KPIs stay in [`Decimal`]; ratio KPIs are percentages as `f64` with
//! zero-denominator and non-finite inputs collapsing to 0.

use arena_core::{Channel, Game, Zone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// The KPI block for one game collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregateResult {
    pub game_count: usize,
    /// EUR, summed over games.
    pub total_revenue: Decimal,
    pub total_attendance: u64,
    /// Summed per-game capacity (capacity maps already reflect the view).
    pub total_capacity: u64,
    /// EUR per game.
    pub avg_revenue_per_game: Decimal,
    /// EUR per sold seat (average ticket price).
    pub yield_per_seat: Decimal,
    /// EUR per available seat.
    pub rev_per_available_seat: Decimal,
    /// Percent of revenue booked through the corporate channel.
    pub corporate_share: f64,
    /// Percent of capacity filled.
    pub occupancy_rate: f64,
    /// Percent of attendance issued as giveaway/protocol tickets.
    pub giveaway_rate: f64,
    /// Zone with the highest ticket count; first encountered wins ties.
    /// `None` when no sales line survived the projection.
    pub top_zone: Option<Zone>,
}

fn pct(numer: f64, denom: f64) -> f64 {
    if denom == 0.0 {
        return 0.0;
    }
    let v = numer / denom * 100.0;
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn per_unit(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    }
}

/// Aggregates a game collection into its KPI block. Empty input yields
/// `None`; zero-valued games yield a zeroed block, the two cases are
/// distinct on purpose.
pub fn aggregate(games: &[Game]) -> Option<AggregateResult> {
    if games.is_empty() {
        return None;
    }

    let total_revenue: Decimal = games.iter().map(|g| g.total_revenue).sum();
    let total_attendance: u64 = games.iter().map(|g| g.attendance).sum();
    let total_capacity: u64 = games.iter().map(|g| g.capacity()).sum();

    let mut corporate_revenue = Decimal::ZERO;
    let mut giveaway_tickets: u64 = 0;
    let mut sold_seats: u64 = 0;
    let mut zone_tickets: Vec<(Zone, u64)> = Vec::new();
    for g in games {
        for line in &g.sales {
            sold_seats += line.quantity;
            if line.channel == Channel::Corporate {
                corporate_revenue += line.revenue;
            }
            if line.channel == Channel::Giveaway {
                giveaway_tickets += line.quantity;
            }
            match zone_tickets.iter_mut().find(|(z, _)| *z == line.zone) {
                Some((_, n)) => *n += line.quantity,
                None => zone_tickets.push((line.zone, line.quantity)),
            }
        }
    }

    let top_zone = zone_tickets
        .iter()
        .copied()
        // max_by_key on a reversed scan keeps the first of equal counts.
        .rev()
        .max_by_key(|(_, n)| *n)
        .map(|(z, _)| z);

    let revenue_f64 = total_revenue.to_f64().unwrap_or(0.0);
    Some(AggregateResult {
        game_count: games.len(),
        total_revenue,
        total_attendance,
        total_capacity,
        avg_revenue_per_game: per_unit(total_revenue, games.len() as u64),
        // Yield divides by seats actually sold (line quantities), which can
        // differ from reported attendance.
        yield_per_seat: per_unit(total_revenue, sold_seats),
        rev_per_available_seat: per_unit(total_revenue, total_capacity),
        corporate_share: pct(corporate_revenue.to_f64().unwrap_or(0.0), revenue_f64),
        occupancy_rate: pct(total_attendance as f64, total_capacity as f64),
        giveaway_rate: pct(giveaway_tickets as f64, total_attendance as f64),
        top_zone,
    })
}
