//! Shared fixtures for the analytics test suites.

use arena_core::{capacity, game_id, Channel, Game, SalesLine, Zone};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub(crate) fn line(zone: Zone, channel: Channel, qty: u64, cents: i64) -> SalesLine {
    SalesLine {
        zone,
        channel,
        quantity: qty,
        revenue: Decimal::new(cents, 2),
    }
}

#[allow(clippy::too_many_arguments)]
fn mk_game(
    season: &str,
    index: usize,
    league: &str,
    opponent: &str,
    date: (i32, u32, u32),
    time: &str,
    tier: u32,
    own_rank: u32,
    opp_rank: u32,
    sales: Vec<SalesLine>,
) -> Game {
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
    let attendance = sales.iter().map(|s| s.quantity).sum();
    let total_revenue = sales.iter().map(|s| s.revenue).sum();
    Game {
        id: game_id(date, time, opponent),
        opponent: opponent.to_string(),
        date,
        season: season.to_string(),
        league: league.to_string(),
        tier,
        own_rank,
        opp_rank,
        capacities: capacity::capacity_for_game(season, index),
        attendance,
        total_revenue,
        sales,
    }
}

/// One game with lines across every channel plus a guest-section line;
/// attendance and revenue reconcile with the line sums.
pub(crate) fn simple_game(season: &str, index: usize) -> Game {
    mk_game(
        season,
        index,
        "LBA",
        "Virtus Bologna",
        (2025, 10, 12),
        "2030",
        1,
        4,
        3,
        vec![
            line(Zone::TribunaGold, Channel::SeasonTicket, 1500, 45_000_00),
            line(Zone::TribunaGold, Channel::SingleGame, 200, 8_000_00),
            line(Zone::TribunaSilver, Channel::MiniPlan, 120, 2_400_00),
            line(Zone::Curva, Channel::SingleGame, 300, 4_500_00),
            line(Zone::Curva, Channel::Youth, 80, 400_00),
            line(Zone::Courtside, Channel::Corporate, 30, 9_000_00),
            line(Zone::Skybox, Channel::Corporate, 48, 24_000_00),
            line(Zone::GalleriaGold, Channel::SingleGame, 150, 3_000_00),
            line(Zone::Ospiti, Channel::SingleGame, 90, 900_00),
            line(Zone::Curva, Channel::Giveaway, 60, 0),
        ],
    )
}

/// Small three-season, two-league dataset used across the module suites.
/// Includes a Sunday 20.30 game, rank-4 games, corporate and giveaway lines.
pub(crate) fn demo_games() -> Vec<Game> {
    vec![
        // 23-24: skyboxes not yet released at index 1.
        mk_game(
            "23-24",
            1,
            "LBA",
            "Trento",
            (2023, 10, 8),
            "1730",
            2,
            7,
            5,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1200, 30_000_00),
                line(Zone::Curva, Channel::SingleGame, 250, 3_200_00),
                line(Zone::GalleriaSilver, Channel::SingleGame, 180, 1_800_00),
                line(Zone::Curva, Channel::Giveaway, 40, 0),
            ],
        ),
        mk_game(
            "23-24",
            7,
            "LBA",
            "Virtus Bologna",
            (2023, 12, 26),
            "2030",
            1,
            9,
            1,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1200, 30_000_00),
                line(Zone::Skybox, Channel::Corporate, 40, 16_000_00),
                line(Zone::Curva, Channel::SingleGame, 420, 5_800_00),
                line(Zone::Ospiti, Channel::SingleGame, 150, 1_500_00),
            ],
        ),
        mk_game(
            "24-25",
            1,
            "LBA",
            "Olimpia Milano",
            (2024, 10, 6),
            "1800",
            1,
            4,
            2,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1300, 34_000_00),
                line(Zone::TribunaSilver, Channel::MiniPlan, 140, 2_600_00),
                line(Zone::Courtside, Channel::Corporate, 36, 10_000_00),
                line(Zone::Curva, Channel::SingleGame, 380, 5_200_00),
            ],
        ),
        mk_game(
            "24-25",
            9,
            "FEC",
            "Paris Basketball",
            (2025, 3, 15),
            "2000",
            2,
            6,
            8,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1300, 32_000_00),
                line(Zone::GalleriaGold, Channel::SingleGame, 160, 2_900_00),
                line(Zone::Curva, Channel::Youth, 95, 500_00),
                line(Zone::Curva, Channel::Giveaway, 70, 0),
            ],
        ),
        // Sunday, 20.30 kickoff.
        mk_game(
            "25-26",
            1,
            "LBA",
            "Virtus Bologna",
            (2025, 10, 12),
            "2030",
            1,
            4,
            3,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1500, 45_000_00),
                line(Zone::ParterreExclusive, Channel::Corporate, 50, 15_000_00),
                line(Zone::Curva, Channel::SingleGame, 310, 4_700_00),
                line(Zone::Ospiti, Channel::SingleGame, 110, 1_100_00),
                line(Zone::Curva, Channel::Giveaway, 55, 0),
            ],
        ),
        mk_game(
            "25-26",
            3,
            "FEC",
            "Bahcesehir",
            (2025, 10, 25),
            "1900",
            3,
            5,
            12,
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1500, 43_000_00),
                line(Zone::TribunaSilver, Channel::SingleGame, 90, 1_600_00),
                line(Zone::Curva, Channel::SingleGame, 210, 3_000_00),
            ],
        ),
    ]
}
