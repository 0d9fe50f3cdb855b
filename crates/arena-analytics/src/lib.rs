#![deny(warnings)]

//! Faceted filtering, view projection and KPI aggregation for arena
//! ticket-sales data.
//!
//! The pipeline is pure and stateless: filter a game collection
//! ([`filter`]), project each survivor for the active view mode ([`view`]),
//! aggregate the result ([`aggregate`]), and optionally compare two
//! selections ([`compare`]) or freeze the state ([`snapshot`]). Facet
//! option lists cascade through [`options`]. Every stage takes borrowed
//! input and returns owned output; nothing is cached or mutated in place.

pub mod aggregate;
pub mod compare;
pub mod filter;
pub mod options;
pub mod snapshot;
pub mod view;

#[cfg(test)]
mod testutil;

pub use aggregate::{aggregate, AggregateResult};
pub use compare::{
    compare, compute_targets, preceding_season, variance_pct, Comparison, MetricDelta, Scenario,
    TargetConfig, TargetKpis,
};
pub use filter::{FacetFilter, FilterState};
pub use options::{available_options, Facet};
pub use snapshot::Snapshot;
pub use view::{apply_view_mode, dataset_view, efficiency_view, ViewMode};
