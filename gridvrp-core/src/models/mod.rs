//! A collection of models to represent the routing problem and its solution.

pub mod common;
pub mod model;
pub mod solution;
