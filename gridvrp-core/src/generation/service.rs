#[cfg(test)]
#[path = "../../tests/unit/generation/service_test.rs"]
mod service_test;

use crate::models::common::{Demand, Duration, Node};
use std::sync::Arc;

/// Resolves the demand quantity of a node.
pub type DemandFn = Arc<dyn Fn(Node) -> Demand + Send + Sync>;

/// Resolves the travel time between two nodes.
pub type TransitionTimeFn = Arc<dyn Fn(Node, Node) -> Duration + Send + Sync>;

/// Computes the time transit of an arc: the service time spent at the origin node before
/// departing plus the travel time to the destination.
pub struct ServiceTimePlusTransition {
    time_per_demand_unit: Duration,
    demand: DemandFn,
    transition_time: TransitionTimeFn,
}

impl ServiceTimePlusTransition {
    /// Creates a new instance of `ServiceTimePlusTransition`.
    pub fn new(time_per_demand_unit: Duration, demand: DemandFn, transition_time: TransitionTimeFn) -> Self {
        Self { time_per_demand_unit, demand, transition_time }
    }

    /// Returns the service time at the origin plus the travel time of the arc.
    pub fn compute(&self, from: Node, to: Node) -> Duration {
        self.time_per_demand_unit * (self.demand)(from) + (self.transition_time)(from, to)
    }
}
