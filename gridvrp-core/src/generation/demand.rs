#[cfg(test)]
#[path = "../../tests/unit/generation/demand_test.rs"]
mod demand_test;

use crate::models::common::{Demand, Node};
use crate::utils::Random;
use serde::Serialize;

/// Keeps a pseudo random demand quantity per node. The depot always has zero demand.
#[derive(Clone, Serialize)]
pub struct RandomDemand {
    demand: Vec<Demand>,
}

impl RandomDemand {
    /// Draws one demand value per node from the inclusive range, fixing the depot at zero.
    pub fn new(size: usize, depot: Node, demand_range: (Demand, Demand), random: &(dyn Random + Send + Sync)) -> Self {
        let (min, max) = demand_range;
        let demand =
            (0..size).map(|node| if node == depot { 0 } else { random.uniform_int(min, max) }).collect::<Vec<_>>();

        Self { demand }
    }

    /// Returns the demand consumed when the arc destination node is reached.
    pub fn demand(&self, _from: Node, to: Node) -> Demand {
        self.demand[to]
    }

    /// Returns the demand quantity of the given node.
    pub fn node_demand(&self, node: Node) -> Demand {
        self.demand[node]
    }
}
