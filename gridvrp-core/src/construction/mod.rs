//! Provides logic to configure a routing model from a synthesized instance.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

use crate::generation::{GenerationParams, Instance, InstanceConfig, ServiceTimePlusTransition};
use crate::models::common::DEPOT;
use crate::models::model::{ModelBuilder, RoutingModel, TransitCallback};
use crate::utils::GenericResult;
use std::sync::Arc;

/// A name of the load dimension.
pub const CAPACITY_DIMENSION: &str = "Capacity";

/// A name of the time dimension.
pub const TIME_DIMENSION: &str = "Time";

/// Configures a routing model over the given instance: Manhattan arc costs, capacity and
/// time dimensions, order time windows, skip disjunctions and, optionally, same vehicle
/// groups over consecutive orders.
pub fn configure_routing_model(
    instance: &Instance,
    config: &InstanceConfig,
    params: &GenerationParams,
) -> GenericResult<RoutingModel> {
    config.validate()?;
    params.validate()?;

    let mut builder = ModelBuilder::new(instance.node_count(), config.vehicles, DEPOT)?;

    let locations = Arc::new(instance.locations.clone());
    let demand = Arc::new(instance.demand.clone());

    let distance: TransitCallback = {
        let locations = locations.clone();
        Arc::new(move |from, to| locations.manhattan_distance(from, to))
    };
    let distance = builder.register_transit_callback(distance);
    builder.set_arc_cost_evaluator(distance)?;

    // load accumulates on arrival, so the transit of an arc is the demand of its destination
    let capacity: TransitCallback = {
        let demand = demand.clone();
        Arc::new(move |from, to| demand.demand(from, to))
    };
    let capacity = builder.register_transit_callback(capacity);
    let hard_capacity = if config.hard_capacity > 0 { config.hard_capacity } else { i64::MAX };
    builder.add_dimension(CAPACITY_DIMENSION, capacity, 0, hard_capacity, true)?;

    if config.soft_capacity > 0 {
        for vehicle in 0..config.vehicles {
            builder.set_end_cumul_soft_upper_bound(
                CAPACITY_DIMENSION,
                vehicle,
                config.soft_capacity,
                config.soft_capacity_cost,
            )?;
        }
    }

    let service = ServiceTimePlusTransition::new(
        params.time_per_demand_unit,
        {
            let demand = demand.clone();
            Arc::new(move |node| demand.node_demand(node))
        },
        {
            let locations = locations.clone();
            Arc::new(move |from, to| locations.travel_time(from, to))
        },
    );
    let time = builder.register_transit_callback(Arc::new(move |from, to| service.compute(from, to)));
    builder.add_dimension(TIME_DIMENSION, time, params.horizon, params.horizon, true)?;

    for node in 1..instance.node_count() {
        let window = instance.order_window(node);
        builder.set_cumul_range(TIME_DIMENSION, node, window.start, window.end)?;
    }

    if params.skip_penalty > 0 {
        for node in 1..instance.node_count() {
            builder.add_disjunction(vec![node], params.skip_penalty)?;
        }
    }

    if config.use_same_vehicle_costs {
        let mut group = Vec::with_capacity(params.group_size);
        for node in 1..instance.node_count() {
            group.push(node);
            if group.len() == params.group_size {
                builder.add_soft_same_vehicle_constraint(std::mem::take(&mut group), params.same_vehicle_cost)?;
            }
        }

        // a trailing incomplete group is kept as well
        if !group.is_empty() {
            builder.add_soft_same_vehicle_constraint(group, params.same_vehicle_cost)?;
        }
    }

    builder.build()
}
