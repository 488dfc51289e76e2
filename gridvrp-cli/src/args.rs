#[cfg(test)]
#[path = "../tests/unit/args_test.rs"]
mod args_test;

use clap::{Arg, ArgAction, ArgMatches, Command};
use gridvrp_core::prelude::*;
use std::str::FromStr;

pub const ORDERS_ARG_NAME: &str = "orders";
pub const VEHICLES_ARG_NAME: &str = "vehicles";
pub const HARD_CAPACITY_ARG_NAME: &str = "hard-capacity";
pub const SOFT_CAPACITY_ARG_NAME: &str = "soft-capacity";
pub const SOFT_CAPACITY_COST_ARG_NAME: &str = "soft-capacity-cost";
pub const DETERMINISTIC_ARG_NAME: &str = "deterministic";
pub const SAME_VEHICLE_COSTS_ARG_NAME: &str = "same-vehicle-costs";
pub const SEARCH_PARAMS_ARG_NAME: &str = "search-params";
pub const DUMP_INSTANCE_ARG_NAME: &str = "dump-instance";
pub const OUT_SOLUTION_ARG_NAME: &str = "out-solution";

/// Options of a single run extracted from command line arguments.
#[derive(Debug)]
pub struct RunOptions {
    pub instance: InstanceConfig,
    pub params: GenerationParams,
    pub search: SearchParameters,
    pub use_deterministic_seed: bool,
    pub dump_instance: Option<String>,
    pub out_solution: Option<String>,
}

pub fn get_app() -> Command {
    Command::new("gridvrp-cli")
        .about("Generates a synthetic capacitated vehicle routing problem with time windows and solves it")
        .arg(
            Arg::new(ORDERS_ARG_NAME)
                .help("Amount of orders in the generated instance")
                .long(ORDERS_ARG_NAME)
                .default_value("100"),
        )
        .arg(
            Arg::new(VEHICLES_ARG_NAME)
                .help("Amount of vehicles in the fleet")
                .long(VEHICLES_ARG_NAME)
                .default_value("20"),
        )
        .arg(
            Arg::new(HARD_CAPACITY_ARG_NAME)
                .help("Hard vehicle capacity, zero disables the bound")
                .long(HARD_CAPACITY_ARG_NAME)
                .default_value("80"),
        )
        .arg(
            Arg::new(SOFT_CAPACITY_ARG_NAME)
                .help("Soft vehicle capacity threshold, zero disables the bound")
                .long(SOFT_CAPACITY_ARG_NAME)
                .default_value("40"),
        )
        .arg(
            Arg::new(SOFT_CAPACITY_COST_ARG_NAME)
                .help("Cost per unit of load above the soft capacity threshold")
                .long(SOFT_CAPACITY_COST_ARG_NAME)
                .default_value("5000"),
        )
        .arg(
            Arg::new(DETERMINISTIC_ARG_NAME)
                .help("Uses fixed seeds to generate a reproducible instance")
                .long(DETERMINISTIC_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SAME_VEHICLE_COSTS_ARG_NAME)
                .help("Groups consecutive orders and charges a cost when a group is split between vehicles")
                .long(SAME_VEHICLE_COSTS_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(SEARCH_PARAMS_ARG_NAME)
                .help("Search parameter overrides as a json object")
                .short('s')
                .long(SEARCH_PARAMS_ARG_NAME),
        )
        .arg(
            Arg::new(DUMP_INSTANCE_ARG_NAME)
                .help("Specifies path to the file for the generated instance output")
                .short('d')
                .long(DUMP_INSTANCE_ARG_NAME),
        )
        .arg(
            Arg::new(OUT_SOLUTION_ARG_NAME)
                .help("Specifies path to the file for the solution output")
                .short('o')
                .long(OUT_SOLUTION_ARG_NAME),
        )
}

/// Reads options of a single run from the matches, validating the resulting configuration.
pub fn get_run_options(matches: &ArgMatches) -> Result<RunOptions, String> {
    let instance = InstanceConfig {
        orders: parse_int_value::<usize>(matches, ORDERS_ARG_NAME, "orders amount")?.unwrap(),
        vehicles: parse_int_value::<usize>(matches, VEHICLES_ARG_NAME, "vehicles amount")?.unwrap(),
        hard_capacity: parse_int_value::<i64>(matches, HARD_CAPACITY_ARG_NAME, "hard capacity")?.unwrap(),
        soft_capacity: parse_int_value::<i64>(matches, SOFT_CAPACITY_ARG_NAME, "soft capacity")?.unwrap(),
        soft_capacity_cost: parse_int_value::<i64>(matches, SOFT_CAPACITY_COST_ARG_NAME, "soft capacity cost")?
            .unwrap(),
        use_same_vehicle_costs: matches.get_flag(SAME_VEHICLE_COSTS_ARG_NAME),
    };
    let params = GenerationParams::default();

    let errors =
        [instance.validate(), params.validate()].into_iter().filter_map(|result| result.err()).collect::<Vec<_>>();
    if !errors.is_empty() {
        return Err(GenericError::join_many(&errors, ", ").to_string());
    }

    let search = matches
        .get_one::<String>(SEARCH_PARAMS_ARG_NAME)
        .map(|text| SearchParameters::from_overrides(text))
        .unwrap_or_else(|| Ok(SearchParameters::default()))
        .map_err(|err| err.to_string())?;

    Ok(RunOptions {
        instance,
        params,
        search,
        use_deterministic_seed: matches.get_flag(DETERMINISTIC_ARG_NAME),
        dump_instance: matches.get_one::<String>(DUMP_INSTANCE_ARG_NAME).cloned(),
        out_solution: matches.get_one::<String>(OUT_SOLUTION_ARG_NAME).cloned(),
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
