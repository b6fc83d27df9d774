//! Roadnet core library.
//!
//! Models a road network as a list of [`Road`]s and answers two questions
//! about it: the fastest route between two endpoints ([`fastest_route`]) and
//! the cheapest set of roads that keeps every endpoint reachable
//! ([`barely_connected`]). [`analyze`] combines both and compares them.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod error;
mod graph;
mod mst;
mod road;
mod route;

pub use crate::{
    analysis::{MapAnalysis, RouteQuery, analyze},
    error::{Result, RoadNetError, RoadNetErrorCode},
    graph::RoadGraph,
    mst::{MinimumSpanningForest, barely_connected},
    road::Road,
    route::{Route, fastest_route, total_length},
};
