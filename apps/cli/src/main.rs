#![deny(warnings)]

//! Headless CLI for loading a game dataset, validating invariants and
//! printing the KPI block for a selection.

use anyhow::{Context, Result};
use arena_analytics::{
    aggregate, available_options, compute_targets, dataset_view, Facet, FacetFilter, FilterState,
    Snapshot, TargetConfig, ViewMode,
};
use arena_core::{validate_dataset, Channel, Game, SalesLine, Zone};
use chrono::NaiveDate;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    data: Option<String>,
    season: Option<String>,
    mode: ViewMode,
    ignore_guest: bool,
    snapshot: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        data: None,
        season: None,
        mode: ViewMode::Total,
        ignore_guest: false,
        snapshot: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data" => args.data = it.next(),
            "--season" => args.season = it.next(),
            "--mode" => {
                args.mode = match it.next().as_deref() {
                    Some("gameday") => ViewMode::GameDay,
                    _ => ViewMode::Total,
                }
            }
            "--ignore-guest" => args.ignore_guest = true,
            "--snapshot" => args.snapshot = true,
            _ => {}
        }
    }
    args
}

fn load_games(path: Option<&str>) -> Result<Vec<Game>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading dataset {path}"))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing dataset {path}"))
        }
        None => Ok(demo_games()),
    }
}

fn line(zone: Zone, channel: Channel, qty: u64, cents: i64) -> SalesLine {
    SalesLine {
        zone,
        channel,
        quantity: qty,
        revenue: rust_decimal::Decimal::new(cents, 2),
    }
}

fn demo_game(
    season: &str,
    index: usize,
    opponent: &str,
    date: NaiveDate,
    time: &str,
    sales: Vec<SalesLine>,
) -> Game {
    Game {
        id: arena_core::game_id(date, time, opponent),
        opponent: opponent.to_string(),
        date,
        season: season.to_string(),
        league: "LBA".to_string(),
        tier: 1,
        own_rank: 6,
        opp_rank: 4,
        capacities: arena_core::capacity::capacity_for_game(season, index),
        attendance: sales.iter().map(|s| s.quantity).sum(),
        total_revenue: sales.iter().map(|s| s.revenue).sum(),
        sales,
    }
}

/// Built-in two-season sample used when no dataset file is given.
fn demo_games() -> Vec<Game> {
    vec![
        demo_game(
            "24-25",
            1,
            "Olimpia Milano",
            NaiveDate::from_ymd_opt(2024, 10, 6).unwrap(),
            "1800",
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1300, 34_000_00),
                line(Zone::Curva, Channel::SingleGame, 380, 5_200_00),
                line(Zone::Courtside, Channel::Corporate, 36, 10_000_00),
            ],
        ),
        demo_game(
            "25-26",
            1,
            "Virtus Bologna",
            NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            "2030",
            vec![
                line(Zone::TribunaGold, Channel::SeasonTicket, 1500, 45_000_00),
                line(Zone::Curva, Channel::SingleGame, 310, 4_700_00),
                line(Zone::Curva, Channel::Giveaway, 55, 0),
            ],
        ),
    ]
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(
        git_sha = env!("GIT_SHA"),
        data = ?args.data,
        season = ?args.season,
        mode = ?args.mode,
        "starting CLI"
    );

    let games = load_games(args.data.as_deref())?;
    validate_dataset(&games)?;

    let filters = FilterState {
        seasons: match &args.season {
            Some(s) => FacetFilter::only(s.clone()),
            None => FacetFilter::Unrestricted,
        },
        ..FilterState::default()
    };

    let view = dataset_view(&games, &filters, args.mode, args.ignore_guest);
    println!(
        "Dataset OK | games: {} | selected: {} | seasons: {}",
        games.len(),
        view.len(),
        available_options(&games, &filters, Facet::Season).join(", ")
    );

    match aggregate(&view) {
        Some(kpi) => {
            println!(
                "KPI | revenue: EUR {} | att: {} | cap: {} | avg/game: EUR {} | ATP: EUR {} | RevPAS: EUR {} | occ: {:.1}% | corp: {:.1}% | giveaway: {:.1}% | top zone: {}",
                kpi.total_revenue,
                kpi.total_attendance,
                kpi.total_capacity,
                kpi.avg_revenue_per_game,
                kpi.yield_per_seat,
                kpi.rev_per_available_seat,
                kpi.occupancy_rate,
                kpi.corporate_share,
                kpi.giveaway_rate,
                kpi.top_zone.map(|z| z.label()).unwrap_or("-"),
            );
        }
        None => println!("KPI | no games match the selection"),
    }

    if let Some(t) =
        compute_targets(&games, &filters, args.mode, args.ignore_guest, &TargetConfig::default())
    {
        println!(
            "Targets (vs {}) | avg/game: EUR {} | ATP: EUR {} | RevPAS: EUR {} | occ: {:.1}% | corp: {:.1}% | giveaway ceiling: {:.1}%",
            t.baseline_season,
            t.avg_revenue_per_game,
            t.yield_per_seat,
            t.rev_per_available_seat,
            t.occupancy_rate,
            t.corporate_share,
            t.giveaway_rate,
        );
    }

    if args.snapshot {
        let snap = Snapshot::capture(&games, &filters, args.mode, args.ignore_guest);
        println!("{}", snap.to_json()?);
    }

    Ok(())
}
