//! Provides a routing model abstraction: an immutable, fully configured artifact which a
//! routing solver reads to search for an assignment.

#[cfg(test)]
#[path = "../../tests/unit/models/model_test.rs"]
mod model_test;

use crate::models::common::{Cost, Node};
use crate::utils::GenericResult;
use std::sync::Arc;

/// An arc transit evaluator: returns the quantity accumulated when traversing an arc
/// from one node to another.
pub type TransitCallback = Arc<dyn Fn(Node, Node) -> i64 + Send + Sync>;

/// An identifier of a transit callback registered on the model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallbackId(usize);

/// An upper bound on a cumulative variable which can be exceeded at a linear cost.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SoftBound {
    /// A threshold above which the penalty applies.
    pub bound: i64,
    /// A cost per unit above the threshold.
    pub cost_per_unit: Cost,
}

/// A named quantity accumulated along a route, bounded per node and per vehicle.
pub struct Dimension {
    name: String,
    transit: CallbackId,
    slack_max: i64,
    capacity: i64,
    fix_start_cumul_to_zero: bool,
    cumul_ranges: Vec<Option<(i64, i64)>>,
    end_soft_bounds: Vec<Option<SoftBound>>,
}

impl Dimension {
    /// Returns the dimension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the transit callback accumulated by this dimension.
    pub fn transit(&self) -> CallbackId {
        self.transit
    }

    /// Returns the maximum slack which can be inserted on an arc.
    pub fn slack_max(&self) -> i64 {
        self.slack_max
    }

    /// Returns the upper bound of cumulative variables.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Whether the cumulative variable is fixed to zero at route start.
    pub fn fix_start_cumul_to_zero(&self) -> bool {
        self.fix_start_cumul_to_zero
    }

    /// Returns an explicit cumul range restriction of the given node, if any.
    pub fn cumul_range(&self, node: Node) -> Option<(i64, i64)> {
        self.cumul_ranges.get(node).copied().flatten()
    }

    /// Returns effective inclusive bounds of the node's cumulative variable.
    pub fn cumul_bounds(&self, node: Node) -> (i64, i64) {
        self.cumul_range(node).unwrap_or((0, self.capacity))
    }

    /// Returns a soft upper bound applied at the route end of the given vehicle, if any.
    pub fn end_soft_bound(&self, vehicle: usize) -> Option<SoftBound> {
        self.end_soft_bounds.get(vehicle).copied().flatten()
    }
}

/// Makes visiting a set of nodes optional: skipping the whole set costs a fixed penalty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Disjunction {
    /// Nodes covered by the disjunction.
    pub nodes: Vec<Node>,
    /// A penalty paid when no node of the set is visited.
    pub penalty: Cost,
}

/// A soft preference to serve all nodes of a group with the same vehicle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SameVehicleGroup {
    /// Nodes of the group.
    pub nodes: Vec<Node>,
    /// A cost paid for every extra vehicle serving nodes of the group.
    pub cost: Cost,
}

/// A fully configured routing model over a fixed index space. Once built, the model is
/// immutable and safe to share between solver threads.
pub struct RoutingModel {
    node_count: usize,
    vehicle_count: usize,
    depot: Node,
    callbacks: Vec<TransitCallback>,
    arc_cost: CallbackId,
    dimensions: Vec<Dimension>,
    disjunctions: Vec<Disjunction>,
    same_vehicle_groups: Vec<SameVehicleGroup>,
}

impl RoutingModel {
    /// Returns the total amount of nodes including the depot.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the amount of vehicles in the fleet.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Returns the depot node.
    pub fn depot(&self) -> Node {
        self.depot
    }

    /// Returns an iterator over all order nodes: every node except the depot.
    pub fn orders(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.node_count).filter(move |&node| node != self.depot)
    }

    /// Evaluates the registered transit callback on the given arc.
    pub fn transit(&self, callback: CallbackId, from: Node, to: Node) -> i64 {
        (self.callbacks[callback.0])(from, to)
    }

    /// Evaluates the arc cost between two nodes.
    pub fn arc_cost(&self, from: Node, to: Node) -> Cost {
        self.transit(self.arc_cost, from, to)
    }

    /// Returns the dimension with the given name.
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.name == name)
    }

    /// Returns all dimensions in their declaration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns all disjunctions.
    pub fn disjunctions(&self) -> &[Disjunction] {
        &self.disjunctions
    }

    /// Returns the penalty paid for skipping the given node or `None` if visiting it
    /// is mandatory.
    pub fn skip_penalty(&self, node: Node) -> Option<Cost> {
        self.disjunctions.iter().find(|disjunction| disjunction.nodes.contains(&node)).map(|disjunction| disjunction.penalty)
    }

    /// Returns all same vehicle groups.
    pub fn same_vehicle_groups(&self) -> &[SameVehicleGroup] {
        &self.same_vehicle_groups
    }
}

/// Configuration steps follow a one way sequence, moving backwards is an error.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Stage {
    Empty,
    Costed,
    Dimensioned,
    Windowed,
    Disjoined,
    Grouped,
}

/// Assembles a [`RoutingModel`] step by step: arc costs first, then dimensions with their
/// soft bounds, cumul windows, disjunctions and same vehicle groups, then sealing with
/// [`ModelBuilder::build`]. Steps applied out of order are configuration errors.
pub struct ModelBuilder {
    node_count: usize,
    vehicle_count: usize,
    depot: Node,
    callbacks: Vec<TransitCallback>,
    arc_cost: Option<CallbackId>,
    dimensions: Vec<Dimension>,
    disjunctions: Vec<Disjunction>,
    same_vehicle_groups: Vec<SameVehicleGroup>,
    stage: Stage,
}

impl ModelBuilder {
    /// Creates a new builder over the given index space.
    pub fn new(node_count: usize, vehicle_count: usize, depot: Node) -> GenericResult<Self> {
        if node_count == 0 {
            return Err("cannot build a model without nodes".into());
        }

        if vehicle_count == 0 {
            return Err("cannot build a model without vehicles".into());
        }

        if depot >= node_count {
            return Err(format!("a depot node {depot} is outside of the index space of {node_count} nodes").into());
        }

        Ok(Self {
            node_count,
            vehicle_count,
            depot,
            callbacks: Default::default(),
            arc_cost: None,
            dimensions: Default::default(),
            disjunctions: Default::default(),
            same_vehicle_groups: Default::default(),
            stage: Stage::Empty,
        })
    }

    /// Registers a transit callback and returns its identifier. Registration is allowed
    /// at any configuration step.
    pub fn register_transit_callback(&mut self, callback: TransitCallback) -> CallbackId {
        self.callbacks.push(callback);
        CallbackId(self.callbacks.len() - 1)
    }

    /// Sets the arc cost evaluator used by every vehicle. Must be the first configuration
    /// step and cannot be repeated.
    pub fn set_arc_cost_evaluator(&mut self, callback: CallbackId) -> GenericResult<()> {
        if self.arc_cost.is_some() {
            return Err("an arc cost evaluator is already set".into());
        }

        self.ensure_callback(callback)?;
        self.advance(Stage::Costed, "set an arc cost evaluator")?;

        self.arc_cost = Some(callback);

        Ok(())
    }

    /// Declares a new dimension which accumulates the given transit callback along a route.
    /// The name must be unique within the model.
    pub fn add_dimension(
        &mut self,
        name: &str,
        transit: CallbackId,
        slack_max: i64,
        capacity: i64,
        fix_start_cumul_to_zero: bool,
    ) -> GenericResult<()> {
        if self.arc_cost.is_none() {
            return Err("an arc cost evaluator must be set before dimensions are added".into());
        }

        if self.dimensions.iter().any(|dimension| dimension.name == name) {
            return Err(format!("a dimension with name '{name}' is already added").into());
        }

        if slack_max < 0 {
            return Err(format!("a dimension '{name}' cannot have negative max slack").into());
        }

        if capacity < 0 {
            return Err(format!("a dimension '{name}' cannot have negative capacity").into());
        }

        self.ensure_callback(transit)?;
        self.advance(Stage::Dimensioned, "add a dimension")?;

        self.dimensions.push(Dimension {
            name: name.to_string(),
            transit,
            slack_max,
            capacity,
            fix_start_cumul_to_zero,
            cumul_ranges: vec![None; self.node_count],
            end_soft_bounds: vec![None; self.vehicle_count],
        });

        Ok(())
    }

    /// Attaches a soft upper bound to the route end cumul of the given vehicle: every unit
    /// above the bound is charged at the given cost.
    pub fn set_end_cumul_soft_upper_bound(
        &mut self,
        dimension: &str,
        vehicle: usize,
        bound: i64,
        cost_per_unit: Cost,
    ) -> GenericResult<()> {
        if vehicle >= self.vehicle_count {
            return Err(format!("a vehicle {vehicle} is outside of the fleet of size {}", self.vehicle_count).into());
        }

        if bound < 0 || cost_per_unit < 0 {
            return Err("a soft upper bound and its cost must be non negative".into());
        }

        self.advance(Stage::Dimensioned, "set a soft upper bound")?;

        self.dimension_mut(dimension)?.end_soft_bounds[vehicle] = Some(SoftBound { bound, cost_per_unit });

        Ok(())
    }

    /// Restricts the cumulative variable of the given node to the inclusive range.
    pub fn set_cumul_range(&mut self, dimension: &str, node: Node, lower: i64, upper: i64) -> GenericResult<()> {
        self.ensure_node(node)?;

        if lower < 0 || lower > upper {
            return Err(format!("a cumul range [{lower}, {upper}] of node {node} is not a valid interval").into());
        }

        self.advance(Stage::Windowed, "restrict a cumul range")?;

        let dimension = self.dimension_mut(dimension)?;
        if upper > dimension.capacity {
            return Err(format!(
                "a cumul range [{lower}, {upper}] of node {node} exceeds the '{}' dimension capacity {}",
                dimension.name, dimension.capacity
            )
            .into());
        }

        dimension.cumul_ranges[node] = Some((lower, upper));

        Ok(())
    }

    /// Adds a disjunction over the given nodes: visiting at most one of them is required,
    /// skipping the whole set costs the given penalty.
    pub fn add_disjunction(&mut self, nodes: Vec<Node>, penalty: Cost) -> GenericResult<()> {
        if nodes.is_empty() {
            return Err("cannot add a disjunction without nodes".into());
        }

        if penalty < 0 {
            return Err("a disjunction penalty must be non negative".into());
        }

        for &node in &nodes {
            self.ensure_node(node)?;

            if node == self.depot {
                return Err("a depot cannot be a part of a disjunction".into());
            }

            if self.disjunctions.iter().any(|disjunction| disjunction.nodes.contains(&node)) {
                return Err(format!("a node {node} is already covered by another disjunction").into());
            }
        }

        self.advance(Stage::Disjoined, "add a disjunction")?;

        self.disjunctions.push(Disjunction { nodes, penalty });

        Ok(())
    }

    /// Adds a soft preference to serve all the given nodes with the same vehicle: every
    /// extra vehicle serving the group adds the given cost to the objective.
    pub fn add_soft_same_vehicle_constraint(&mut self, nodes: Vec<Node>, cost: Cost) -> GenericResult<()> {
        if nodes.is_empty() {
            return Err("cannot add a same vehicle constraint without nodes".into());
        }

        if cost < 0 {
            return Err("a same vehicle cost must be non negative".into());
        }

        for &node in &nodes {
            self.ensure_node(node)?;
        }

        self.advance(Stage::Grouped, "add a same vehicle constraint")?;

        self.same_vehicle_groups.push(SameVehicleGroup { nodes, cost });

        Ok(())
    }

    /// Seals the configuration and returns an immutable routing model.
    pub fn build(self) -> GenericResult<RoutingModel> {
        let arc_cost = self.arc_cost.ok_or("cannot build a model without an arc cost evaluator")?;

        Ok(RoutingModel {
            node_count: self.node_count,
            vehicle_count: self.vehicle_count,
            depot: self.depot,
            callbacks: self.callbacks,
            arc_cost,
            dimensions: self.dimensions,
            disjunctions: self.disjunctions,
            same_vehicle_groups: self.same_vehicle_groups,
        })
    }

    fn advance(&mut self, target: Stage, operation: &str) -> GenericResult<()> {
        if self.stage > target {
            return Err(format!("cannot {operation}: the model configuration is already past this step").into());
        }

        self.stage = target;

        Ok(())
    }

    fn dimension_mut(&mut self, name: &str) -> GenericResult<&mut Dimension> {
        self.dimensions
            .iter_mut()
            .find(|dimension| dimension.name == name)
            .ok_or_else(|| format!("unknown dimension: '{name}'").into())
    }

    fn ensure_node(&self, node: Node) -> GenericResult<()> {
        if node >= self.node_count {
            Err(format!("a node {node} is outside of the index space of {} nodes", self.node_count).into())
        } else {
            Ok(())
        }
    }

    fn ensure_callback(&self, callback: CallbackId) -> GenericResult<()> {
        if callback.0 >= self.callbacks.len() {
            Err(format!("unknown transit callback: {}", callback.0).into())
        } else {
            Ok(())
        }
    }
}
