#[cfg(test)]
#[path = "../../tests/unit/generation/config_test.rs"]
mod config_test;

use crate::models::common::{Cost, Demand, Distance, Duration};
use crate::utils::{GenericError, GenericResult};

/// Specifies the size and capacity toggles of a synthetic problem instance.
#[derive(Clone, Debug)]
pub struct InstanceConfig {
    /// An amount of orders, not counting the depot.
    pub orders: usize,
    /// An amount of vehicles in the fleet.
    pub vehicles: usize,
    /// A hard vehicle capacity. Zero disables the hard bound.
    pub hard_capacity: i64,
    /// A soft vehicle capacity threshold. Zero disables the soft bound.
    pub soft_capacity: i64,
    /// A cost per unit of load above the soft capacity threshold.
    pub soft_capacity_cost: Cost,
    /// Whether consecutive orders are grouped into same vehicle groups.
    pub use_same_vehicle_costs: bool,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            orders: 100,
            vehicles: 20,
            hard_capacity: 80,
            soft_capacity: 40,
            soft_capacity_cost: 5000,
            use_same_vehicle_costs: false,
        }
    }
}

impl InstanceConfig {
    /// Validates the configuration collecting all violations into a single error.
    pub fn validate(&self) -> GenericResult<()> {
        combine_results(&[check_instance_size(self), check_fleet_size(self), check_capacity_thresholds(self)])
    }
}

fn check_instance_size(config: &InstanceConfig) -> Result<(), String> {
    if config.orders == 0 { Err("an instance size must be greater than zero".to_string()) } else { Ok(()) }
}

fn check_fleet_size(config: &InstanceConfig) -> Result<(), String> {
    if config.vehicles == 0 { Err("a vehicle fleet size must be greater than zero".to_string()) } else { Ok(()) }
}

fn check_capacity_thresholds(config: &InstanceConfig) -> Result<(), String> {
    if config.hard_capacity < 0 || config.soft_capacity < 0 || config.soft_capacity_cost < 0 {
        return Err("capacity thresholds and costs must be non negative".to_string());
    }

    if config.hard_capacity > 0 && config.soft_capacity > 0 && config.soft_capacity >= config.hard_capacity {
        return Err("a hard capacity must be higher than a soft capacity when both are enabled".to_string());
    }

    Ok(())
}

/// Specifies parameters of the synthetic geography, demand and timing model. The defaults
/// describe a day long plan over a 100 km square grid.
#[derive(Clone, Debug)]
pub struct GenerationParams {
    /// An upper bound of the x coordinate, in meters.
    pub x_max: Distance,
    /// An upper bound of the y coordinate, in meters.
    pub y_max: Distance,
    /// A travel speed, in meters per second.
    pub speed: i64,
    /// An inclusive demand range of a single order.
    pub demand_range: (Demand, Demand),
    /// A service time spent per unit of demand, in seconds.
    pub time_per_demand_unit: Duration,
    /// A planning horizon, in seconds.
    pub horizon: Duration,
    /// A width of every order time window, in seconds.
    pub window_duration: Duration,
    /// A penalty paid when an order is skipped. Zero makes every order mandatory.
    pub skip_penalty: Cost,
    /// An amount of consecutive orders forming one same vehicle group.
    pub group_size: usize,
    /// A cost paid by a group for every extra vehicle serving it.
    pub same_vehicle_cost: Cost,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            x_max: 100_000,
            y_max: 100_000,
            speed: 10,
            demand_range: (1, 5),
            time_per_demand_unit: 300,
            horizon: 24 * 3600,
            window_duration: 5 * 3600,
            skip_penalty: 10_000_000,
            group_size: 10,
            same_vehicle_cost: 1000,
        }
    }
}

impl GenerationParams {
    /// Validates the parameters collecting all violations into a single error.
    pub fn validate(&self) -> GenericResult<()> {
        combine_results(&[
            check_grid_bounds(self),
            check_speed(self),
            check_demand_range(self),
            check_timing(self),
            check_costs(self),
        ])
    }
}

fn check_grid_bounds(params: &GenerationParams) -> Result<(), String> {
    if params.x_max <= 0 || params.y_max <= 0 {
        Err("grid bounds must be greater than zero".to_string())
    } else {
        Ok(())
    }
}

fn check_speed(params: &GenerationParams) -> Result<(), String> {
    if params.speed <= 0 { Err("a travel speed must be greater than zero".to_string()) } else { Ok(()) }
}

fn check_demand_range(params: &GenerationParams) -> Result<(), String> {
    let (min, max) = params.demand_range;
    if min <= 0 || min > max { Err("a demand range must be a positive interval".to_string()) } else { Ok(()) }
}

fn check_timing(params: &GenerationParams) -> Result<(), String> {
    if params.time_per_demand_unit < 0 {
        return Err("a service time per demand unit must be non negative".to_string());
    }

    if params.horizon <= 0 {
        return Err("a planning horizon must be greater than zero".to_string());
    }

    if params.window_duration <= 0 || params.window_duration > params.horizon {
        return Err("a time window duration must fit the planning horizon".to_string());
    }

    Ok(())
}

fn check_costs(params: &GenerationParams) -> Result<(), String> {
    if params.skip_penalty < 0 || params.same_vehicle_cost < 0 {
        return Err("penalties and costs must be non negative".to_string());
    }

    if params.group_size == 0 {
        return Err("a same vehicle group size must be greater than zero".to_string());
    }

    Ok(())
}

fn combine_results(results: &[Result<(), String>]) -> GenericResult<()> {
    let errors =
        results.iter().filter_map(|result| result.as_ref().err()).map(|err| err.as_str().into()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ")) }
}
