#[cfg(test)]
#[path = "../../tests/unit/solver/best_insertion_test.rs"]
mod best_insertion_test;

use crate::models::common::{Cost, Node};
use crate::models::model::RoutingModel;
use crate::models::solution::{Assignment, Route, Stop};
use crate::solver::{FirstSolutionStrategy, RoutingSolver, SearchParameters};
use crate::utils::{GenericResult, InfoLogger};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::iter::once;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A reference construction solver: repeatedly applies the cheapest (or the first)
/// feasible insertion and leaves an order unassigned only when a disjunction allows it.
/// The search is deterministic for a fixed model and parameters.
pub struct BestInsertionSolver {
    logger: InfoLogger,
}

impl BestInsertionSolver {
    /// Creates a new instance of `BestInsertionSolver` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }
}

impl Default for BestInsertionSolver {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}

impl RoutingSolver for BestInsertionSolver {
    fn solve(&self, model: &RoutingModel, parameters: &SearchParameters) -> GenericResult<Option<Assignment>> {
        let started = Instant::now();
        let time_limit = parameters.time_limit_ms.map(Duration::from_millis);

        let mut routes: Vec<Vec<Node>> = vec![Vec::default(); model.vehicle_count()];
        let mut vehicle_of: Vec<Option<usize>> = vec![None; model.node_count()];
        let mut skipped: Vec<(Node, Cost)> = Vec::default();
        let mut unassigned: Vec<Node> = model.orders().collect();

        let mut group_of: Vec<Option<usize>> = vec![None; model.node_count()];
        for (index, group) in model.same_vehicle_groups().iter().enumerate() {
            for &node in &group.nodes {
                group_of[node] = Some(index);
            }
        }

        while !unassigned.is_empty() {
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break;
            }

            let evals = (0..model.vehicle_count())
                .map(|vehicle| evaluate_route(model, vehicle, &routes[vehicle]))
                .collect::<Option<Vec<_>>>()
                .ok_or("cannot evaluate an already built route")?;

            let strategy = parameters.first_solution_strategy;
            let per_order = unassigned
                .par_iter()
                .map(|&order| {
                    let candidate = match strategy {
                        FirstSolutionStrategy::CheapestInsertion => {
                            best_candidate(model, &routes, &evals, &group_of, &vehicle_of, order)
                        }
                        FirstSolutionStrategy::FirstFeasible => {
                            first_candidate(model, &routes, &evals, &group_of, &vehicle_of, order)
                        }
                    };
                    (order, candidate)
                })
                .collect::<Vec<_>>();

            let mut viable = Vec::with_capacity(per_order.len());
            for (order, candidate) in per_order {
                match (candidate, model.skip_penalty(order)) {
                    // a mandatory order which cannot be inserted anywhere
                    (None, None) => return Ok(None),
                    (None, Some(penalty)) => {
                        if parameters.log_search {
                            (self.logger)(&format!("skipped order {order} at penalty {penalty}: no feasible insertion"));
                        }
                        skipped.push((order, penalty));
                    }
                    (Some(candidate), Some(penalty)) if candidate.cost >= penalty => {
                        if parameters.log_search {
                            (self.logger)(&format!("skipped order {order} at penalty {penalty}: insertion is more expensive"));
                        }
                        skipped.push((order, penalty));
                    }
                    (Some(candidate), _) => viable.push(candidate),
                }
            }

            // orders skipped in this round must not reach the leftover sweep below
            unassigned = viable.iter().map(|candidate| candidate.order).collect();

            let chosen = match parameters.first_solution_strategy {
                FirstSolutionStrategy::CheapestInsertion => viable
                    .iter()
                    .min_by_key(|candidate| (candidate.cost, candidate.order, candidate.vehicle, candidate.position)),
                FirstSolutionStrategy::FirstFeasible => viable.first(),
            };

            let Some(chosen) = chosen.copied() else { break };

            routes[chosen.vehicle].insert(chosen.position, chosen.order);
            vehicle_of[chosen.order] = Some(chosen.vehicle);
            unassigned.retain(|&order| order != chosen.order);

            if parameters.log_search {
                (self.logger)(&format!(
                    "inserted order {} into vehicle {} at position {}, delta cost {}",
                    chosen.order, chosen.vehicle, chosen.position, chosen.cost
                ));
            }
        }

        // the time limit can leave orders behind: they are skipped when optional
        for &order in &unassigned {
            match model.skip_penalty(order) {
                Some(penalty) => skipped.push((order, penalty)),
                None => return Ok(None),
            }
        }

        let mut out_routes = Vec::with_capacity(model.vehicle_count());
        for (vehicle, orders) in routes.iter().enumerate() {
            let eval =
                evaluate_route(model, vehicle, orders).ok_or("cannot evaluate a route of the final assignment")?;
            let stops = once(model.depot())
                .chain(orders.iter().copied())
                .chain(once(model.depot()))
                .zip(eval.cumuls)
                .map(|(node, cumuls)| Stop { node, cumuls })
                .collect();

            out_routes.push(Route {
                vehicle,
                stops,
                transit_cost: eval.transit_cost,
                soft_bound_cost: eval.soft_bound_cost,
            });
        }

        skipped.sort_unstable();
        let group_cost = total_group_cost(model, &vehicle_of);
        let assignment = Assignment { routes: out_routes, unassigned: skipped, group_cost };

        if parameters.log_search {
            (self.logger)(&format!(
                "search done in {}ms: {} routes used, {} orders unassigned, total cost {}",
                started.elapsed().as_millis(),
                assignment.routes.iter().filter(|route| !route.is_empty()).count(),
                assignment.unassigned.len(),
                assignment.total_cost()
            ));
        }

        Ok(Some(assignment))
    }
}

#[derive(Clone, Copy)]
struct Candidate {
    cost: Cost,
    order: Node,
    vehicle: usize,
    position: usize,
}

struct RouteEval {
    /// Cumulative values per stop per dimension, including both depot ends.
    cumuls: Vec<Vec<i64>>,
    transit_cost: Cost,
    soft_bound_cost: Cost,
}

/// Propagates all dimensions along `depot -> orders -> depot` and returns resolved
/// cumulative values with the route cost breakdown, or `None` if any bound is violated.
fn evaluate_route(model: &RoutingModel, vehicle: usize, orders: &[Node]) -> Option<RouteEval> {
    let depot = model.depot();
    let path = once(depot).chain(orders.iter().copied()).chain(once(depot)).collect::<Vec<_>>();
    let dimensions = model.dimensions();

    let mut cumuls = vec![vec![0_i64; dimensions.len()]; path.len()];
    for (dim_idx, dimension) in dimensions.iter().enumerate() {
        let mut cumul = if dimension.fix_start_cumul_to_zero() { 0 } else { dimension.cumul_bounds(depot).0 };
        cumuls[0][dim_idx] = cumul;

        for (stop_idx, arc) in path.windows(2).enumerate() {
            let (prev, next) = (arc[0], arc[1]);
            let arrival = cumul + model.transit(dimension.transit(), prev, next);
            let (lower, upper) = dimension.cumul_bounds(next);

            if arrival > upper {
                return None;
            }

            // waiting below the lower bound is modelled as slack and is bounded
            let reached = arrival.max(lower);
            if reached - arrival > dimension.slack_max() {
                return None;
            }

            cumul = reached;
            cumuls[stop_idx + 1][dim_idx] = cumul;
        }
    }

    let transit_cost = path.windows(2).map(|arc| model.arc_cost(arc[0], arc[1])).sum();
    let soft_bound_cost = dimensions
        .iter()
        .enumerate()
        .filter_map(|(dim_idx, dimension)| {
            dimension.end_soft_bound(vehicle).map(|soft| {
                let end = cumuls[path.len() - 1][dim_idx];
                (end - soft.bound).max(0) * soft.cost_per_unit
            })
        })
        .sum();

    Some(RouteEval { cumuls, transit_cost, soft_bound_cost })
}

fn insertion_cost(
    model: &RoutingModel,
    routes: &[Vec<Node>],
    evals: &[RouteEval],
    group_of: &[Option<usize>],
    vehicle_of: &[Option<usize>],
    order: Node,
    vehicle: usize,
    position: usize,
) -> Option<Cost> {
    let mut tentative = routes[vehicle].clone();
    tentative.insert(position, order);

    let eval = evaluate_route(model, vehicle, &tentative)?;
    let current = &evals[vehicle];

    Some(
        eval.transit_cost - current.transit_cost + eval.soft_bound_cost - current.soft_bound_cost
            + group_cost_delta(model, group_of, vehicle_of, order, vehicle),
    )
}

fn best_candidate(
    model: &RoutingModel,
    routes: &[Vec<Node>],
    evals: &[RouteEval],
    group_of: &[Option<usize>],
    vehicle_of: &[Option<usize>],
    order: Node,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for vehicle in 0..model.vehicle_count() {
        for position in 0..=routes[vehicle].len() {
            if let Some(cost) = insertion_cost(model, routes, evals, group_of, vehicle_of, order, vehicle, position) {
                let is_better = best
                    .as_ref()
                    .is_none_or(|best| (cost, vehicle, position) < (best.cost, best.vehicle, best.position));

                if is_better {
                    best = Some(Candidate { cost, order, vehicle, position });
                }
            }
        }
    }

    best
}

fn first_candidate(
    model: &RoutingModel,
    routes: &[Vec<Node>],
    evals: &[RouteEval],
    group_of: &[Option<usize>],
    vehicle_of: &[Option<usize>],
    order: Node,
) -> Option<Candidate> {
    for vehicle in 0..model.vehicle_count() {
        for position in 0..=routes[vehicle].len() {
            if let Some(cost) = insertion_cost(model, routes, evals, group_of, vehicle_of, order, vehicle, position) {
                return Some(Candidate { cost, order, vehicle, position });
            }
        }
    }

    None
}

/// Returns an extra cost of assigning the order to the vehicle given the current state of
/// its same vehicle group: only serving a non empty group with a new vehicle is charged.
fn group_cost_delta(
    model: &RoutingModel,
    group_of: &[Option<usize>],
    vehicle_of: &[Option<usize>],
    order: Node,
    vehicle: usize,
) -> Cost {
    let Some(group_idx) = group_of[order] else { return 0 };

    let group = &model.same_vehicle_groups()[group_idx];
    let used = group.nodes.iter().filter_map(|&node| vehicle_of[node]).collect::<FxHashSet<_>>();

    if used.is_empty() || used.contains(&vehicle) { 0 } else { group.cost }
}

fn total_group_cost(model: &RoutingModel, vehicle_of: &[Option<usize>]) -> Cost {
    model
        .same_vehicle_groups()
        .iter()
        .map(|group| {
            let used = group.nodes.iter().filter_map(|&node| vehicle_of[node]).collect::<FxHashSet<_>>();
            group.cost * used.len().saturating_sub(1) as i64
        })
        .sum()
}
