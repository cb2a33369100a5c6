//! Transit route finder.
//!
//! Answers "how can I get from station A to station B" on a network of
//! named lines, either by enumerating routes up to a hop limit or by
//! listing every shortest route.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
