#![deny(warnings)]

//! Core domain models and invariants for arena ticket-sales analytics.
//!
//! This crate defines the serializable record types shared by every
//! analytical view (seating zones, sales channels, per-game sales lines),
//! the pure derivations used by faceted filtering (weekday, date key,
//! kickoff time), and validation helpers that guarantee basic invariants.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

pub mod capacity;

/// A physical seating area with its own capacity and pricing behavior.
///
/// The set is closed and stable across seasons; serialized labels double as
/// the facet values used by filtering and option resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "Skyboxes")]
    Skybox,
    #[serde(rename = "Courtside")]
    Courtside,
    #[serde(rename = "Parterre Ovest")]
    ParterreOvest,
    #[serde(rename = "Parterre Est")]
    ParterreEst,
    #[serde(rename = "Parterre Exclusive")]
    ParterreExclusive,
    #[serde(rename = "Tribuna Gold")]
    TribunaGold,
    #[serde(rename = "Tribuna Silver")]
    TribunaSilver,
    #[serde(rename = "Galleria Gold")]
    GalleriaGold,
    #[serde(rename = "Galleria Silver")]
    GalleriaSilver,
    #[serde(rename = "Curva")]
    Curva,
    /// Visiting-supporter section; excludable via the "ignore guest zone"
    /// toggle because security rules often zero it out.
    #[serde(rename = "Ospiti")]
    Ospiti,
}

impl Zone {
    /// Every zone, in arena pricing order (high to low value).
    pub const ALL: [Zone; 11] = [
        Zone::Skybox,
        Zone::Courtside,
        Zone::ParterreExclusive,
        Zone::ParterreOvest,
        Zone::ParterreEst,
        Zone::TribunaGold,
        Zone::TribunaSilver,
        Zone::GalleriaGold,
        Zone::GalleriaSilver,
        Zone::Curva,
        Zone::Ospiti,
    ];

    /// Human-readable label; identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Skybox => "Skyboxes",
            Zone::Courtside => "Courtside",
            Zone::ParterreOvest => "Parterre Ovest",
            Zone::ParterreEst => "Parterre Est",
            Zone::ParterreExclusive => "Parterre Exclusive",
            Zone::TribunaGold => "Tribuna Gold",
            Zone::TribunaSilver => "Tribuna Silver",
            Zone::GalleriaGold => "Galleria Gold",
            Zone::GalleriaSilver => "Galleria Silver",
            Zone::Curva => "Curva",
            Zone::Ospiti => "Ospiti",
        }
    }

    /// Reverse of [`Zone::label`]. Unknown labels return `None` rather than
    /// erroring; an unrecognized zone string in a filter simply matches
    /// nothing.
    pub fn from_label(label: &str) -> Option<Zone> {
        Zone::ALL.iter().copied().find(|z| z.label() == label)
    }
}

/// The sales route through which a ticket was sold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Full-season ticket packages.
    SeasonTicket,
    /// Partial-season bundles.
    MiniPlan,
    /// Day-of-sale single game tickets.
    SingleGame,
    /// Youth-affiliate allotment.
    Youth,
    /// Corporate hospitality sales.
    Corporate,
    /// Giveaway/protocol tickets; zero revenue by construction.
    Giveaway,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::SeasonTicket,
        Channel::MiniPlan,
        Channel::SingleGame,
        Channel::Youth,
        Channel::Corporate,
        Channel::Giveaway,
    ];

    /// Channels that count as "day-of" sales in the GameDay view.
    /// Season tickets and corporate packages are committed before the game.
    pub fn is_day_of_sale(&self) -> bool {
        matches!(
            self,
            Channel::SingleGame | Channel::MiniPlan | Channel::Youth | Channel::Giveaway
        )
    }

    /// Giveaway/protocol tickets never carry revenue.
    pub fn carries_revenue(&self) -> bool {
        !matches!(self, Channel::Giveaway)
    }
}

/// One pre-aggregated sales line: quantity and revenue for a (zone, channel)
/// pair within a single game. A game holds at most one line per pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesLine {
    pub zone: Zone,
    pub channel: Channel,
    /// Tickets sold/issued (>= 0).
    pub quantity: u64,
    /// Revenue in EUR, 2-decimal semantics (>= 0; 0 for giveaways).
    pub revenue: Decimal,
}

/// A single played game: the aggregate root of the dataset.
///
/// Games are constructed once at ingestion and treated as immutable value
/// objects; every transformation produces a new derived `Game`, never an
/// in-place edit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Identity string, `{isoDate}-{HHMM}-{opponentNoSpaces}`. Unique within
    /// a dataset; the kickoff-time facet is derived from it.
    pub id: String,
    pub opponent: String,
    /// Day-level date, no time zone.
    pub date: NaiveDate,
    /// Season label, e.g. "25-26".
    pub season: String,
    /// League label, e.g. "LBA".
    pub league: String,
    /// Opponent-strength tier (small positive integer, 0 = unknown).
    pub tier: u32,
    /// Own league rank at game time (lower is better, 0 = unknown).
    pub own_rank: u32,
    /// Opponent league rank (lower is better, 0 = unknown).
    pub opp_rank: u32,
    /// Per-zone seating capacity for this specific game. Key presence means
    /// the zone is configured for the game, even at zero capacity.
    pub capacities: BTreeMap<Zone, u64>,
    /// Total attendance as reported by the source; not required to reconcile
    /// with the sum of sales-line quantities.
    pub attendance: u64,
    /// Total revenue as reported by the source; same reconciliation caveat.
    pub total_revenue: Decimal,
    pub sales: Vec<SalesLine>,
}

impl Game {
    /// Total seating capacity: sum of the per-zone map.
    pub fn capacity(&self) -> u64 {
        self.capacities.values().sum()
    }
}

/// Builds the canonical identity string for a game.
///
/// `time_hhmm` is the kickoff time as four digits, e.g. "2030". The format
/// is an external ingestion contract and must not change: the kickoff-time
/// facet is recovered positionally from this string.
pub fn game_id(date: NaiveDate, time_hhmm: &str, opponent: &str) -> String {
    let compact: String = opponent.split_whitespace().collect();
    format!("{}-{}-{}", date_key(date), time_hhmm, compact)
}

/// Locale-independent three-letter weekday abbreviation, Mon..Sun.
///
/// The single source of this derivation; facet matching, option resolution
/// and display must all go through here.
pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// ISO date key (`YYYY-MM-DD`). Lexicographic order equals chronological
/// order, which the date facet's sort relies on.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Kickoff time facet value (`HH.MM`), extracted from the identity string.
///
/// The id is `{isoDate}-{HHMM}-{opponent}`, so the time is the token after
/// the three ISO date tokens. Absent or malformed tokens yield "00.00".
pub fn kickoff_time(id: &str) -> String {
    match id.split('-').nth(3) {
        Some(t) if t.len() == 4 && t.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{}.{}", &t[..2], &t[2..])
        }
        _ => "00.00".to_string(),
    }
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Revenue must be non-negative.
    #[error("negative revenue on {zone} / {channel:?}")]
    NegativeRevenue { zone: &'static str, channel: Channel },
    /// Giveaway/protocol lines carry zero revenue by construction.
    #[error("giveaway line with revenue on {0}")]
    GiveawayRevenue(&'static str),
    /// At most one sales line per (zone, channel) pair.
    #[error("duplicate sales line for {zone} / {channel:?}")]
    DuplicateLine { zone: &'static str, channel: Channel },
    /// Game ids must be unique within a dataset.
    #[error("duplicate game id: {0}")]
    DuplicateId(String),
    /// Identity strings must be non-empty.
    #[error("empty game id for opponent {0}")]
    EmptyId(String),
}

/// Validate a single sales line.
pub fn validate_sales_line(line: &SalesLine) -> Result<(), ValidationError> {
    if line.revenue < Decimal::ZERO {
        return Err(ValidationError::NegativeRevenue {
            zone: line.zone.label(),
            channel: line.channel,
        });
    }
    if !line.channel.carries_revenue() && line.revenue != Decimal::ZERO {
        return Err(ValidationError::GiveawayRevenue(line.zone.label()));
    }
    Ok(())
}

/// Validate a game: line invariants, (zone, channel) uniqueness, identity.
pub fn validate_game(game: &Game) -> Result<(), ValidationError> {
    if game.id.trim().is_empty() {
        return Err(ValidationError::EmptyId(game.opponent.clone()));
    }
    if game.total_revenue < Decimal::ZERO {
        return Err(ValidationError::NegativeRevenue {
            zone: "total",
            channel: Channel::SingleGame,
        });
    }
    let mut seen: BTreeSet<(Zone, Channel)> = BTreeSet::new();
    for line in &game.sales {
        validate_sales_line(line)?;
        if !seen.insert((line.zone, line.channel)) {
            return Err(ValidationError::DuplicateLine {
                zone: line.zone.label(),
                channel: line.channel,
            });
        }
    }
    Ok(())
}

/// Validate a dataset, including cross-game id uniqueness.
pub fn validate_dataset(games: &[Game]) -> Result<(), ValidationError> {
    let mut ids: BTreeSet<&str> = BTreeSet::new();
    for g in games {
        validate_game(g)?;
        if !ids.insert(&g.id) {
            return Err(ValidationError::DuplicateId(g.id.clone()));
        }
    }
    Ok(())
}
