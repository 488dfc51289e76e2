//! This crate synthesizes Capacitated Vehicle Routing Problem with Time Windows (CVRPTW)
//! instances over an integer grid and configures them as routing models for an external
//! routing engine.
//!
//! The crate is split into a few layers:
//!
//! * [`generation`] draws a synthetic geography, demands and time windows
//! * [`models`] defines the routing model abstraction and solution types
//! * [`construction`] maps a synthesized instance onto a sealed routing model
//! * [`solver`] defines the solver contract and ships a reference construction solver

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/full_pipeline_test.rs"]
mod full_pipeline_test;

pub mod construction;
pub mod generation;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
