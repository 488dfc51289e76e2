//! Solution models produced by routing solvers.

#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::common::{Cost, Node};
use serde::{Deserialize, Serialize};

/// A single stop of a route with resolved cumulative values, one per model dimension,
/// in dimension declaration order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// A visited node.
    pub node: Node,
    /// Values of cumulative variables when service starts at this node.
    pub cumuls: Vec<i64>,
}

/// A route of a single vehicle which starts and ends at the depot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// A vehicle serving the route.
    pub vehicle: usize,
    /// Stops of the route, including the depot at both ends.
    pub stops: Vec<Stop>,
    /// A total arc cost of the route.
    pub transit_cost: Cost,
    /// A cost charged for exceeding soft upper bounds on this route.
    pub soft_bound_cost: Cost,
}

impl Route {
    /// Checks whether the route serves no orders.
    pub fn is_empty(&self) -> bool {
        self.stops.len() <= 2
    }

    /// Returns served order nodes: all stops without the depot ends.
    pub fn orders(&self) -> impl Iterator<Item = Node> + '_ {
        self.stops.iter().skip(1).take(self.stops.len().saturating_sub(2)).map(|stop| stop.node)
    }

    /// Returns the value of the given cumulative variable at the route end.
    pub fn end_cumul(&self, dimension: usize) -> Option<i64> {
        self.stops.last().and_then(|stop| stop.cumuls.get(dimension)).copied()
    }
}

/// An assignment produced by a routing solver: a route per vehicle, skipped orders and
/// the cost breakdown of the objective.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Routes, one per vehicle, in vehicle order.
    pub routes: Vec<Route>,
    /// Orders left unassigned with the disjunction penalty paid for each.
    pub unassigned: Vec<(Node, Cost)>,
    /// A cost paid for same vehicle groups served by multiple vehicles.
    pub group_cost: Cost,
}

impl Assignment {
    /// Returns the total arc cost over all routes.
    pub fn transit_cost(&self) -> Cost {
        self.routes.iter().map(|route| route.transit_cost).sum()
    }

    /// Returns the total soft bound cost over all routes.
    pub fn soft_bound_cost(&self) -> Cost {
        self.routes.iter().map(|route| route.soft_bound_cost).sum()
    }

    /// Returns the total penalty paid for unassigned orders.
    pub fn penalty_cost(&self) -> Cost {
        self.unassigned.iter().map(|(_, penalty)| penalty).sum()
    }

    /// Returns the objective value of the assignment.
    pub fn total_cost(&self) -> Cost {
        self.transit_cost() + self.soft_bound_cost() + self.penalty_cost() + self.group_cost
    }

    /// Checks whether the given node is served by some route.
    pub fn is_assigned(&self, node: Node) -> bool {
        self.routes.iter().any(|route| route.orders().any(|order| order == node))
    }
}
