#[cfg(test)]
#[path = "../../tests/unit/generation/instance_test.rs"]
mod instance_test;

use crate::generation::{GenerationParams, InstanceConfig, LocationContainer, RandomDemand, TimeWindowAssigner};
use crate::models::common::{DEPOT, Node, TimeWindow};
use crate::utils::{Environment, GenericResult, RandomStream};
use serde::Serialize;

/// A synthesized problem instance: geography, per node demand and order time windows.
/// The depot is node 0, orders are nodes `1..=orders`.
#[derive(Clone, Serialize)]
pub struct Instance {
    /// Node locations on the grid.
    pub locations: LocationContainer,
    /// Per node demand.
    pub demand: RandomDemand,
    /// Time windows, one per order node.
    pub time_windows: Vec<TimeWindow>,
}

impl Instance {
    /// Returns the total amount of nodes including the depot.
    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns the amount of orders.
    pub fn orders(&self) -> usize {
        self.node_count().saturating_sub(1)
    }

    /// Returns the time window of the given order node.
    pub fn order_window(&self, node: Node) -> TimeWindow {
        self.time_windows[node - 1]
    }
}

/// Generates a synthetic instance: a random geography, demands and time windows drawn
/// from independent streams according to the environment seeding policy.
pub fn generate_instance(
    config: &InstanceConfig,
    params: &GenerationParams,
    environment: &Environment,
) -> GenericResult<Instance> {
    config.validate()?;
    params.validate()?;

    let mut locations = LocationContainer::new(params.speed, environment.create_random(RandomStream::Geometry));
    for _ in 0..=config.orders {
        locations.add_random_location(params.x_max, params.y_max);
    }

    let demand = RandomDemand::new(
        locations.len(),
        DEPOT,
        params.demand_range,
        environment.create_random(RandomStream::Demand).as_ref(),
    );

    let assigner =
        TimeWindowAssigner::new(params.horizon, params.window_duration, environment.create_random(RandomStream::TimeWindows));
    let time_windows = (0..config.orders).map(|_| assigner.next_window()).collect::<Vec<_>>();

    (environment.logger)(&format!(
        "generated an instance of {} orders and {} vehicles over a {}x{} grid",
        config.orders, config.vehicles, params.x_max, params.y_max
    ));

    Ok(Instance { locations, demand, time_windows })
}
