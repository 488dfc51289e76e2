#[cfg(test)]
#[path = "../tests/unit/report_test.rs"]
mod report_test;

use gridvrp_core::prelude::*;
use std::io::{BufWriter, Write};

/// Writes a human readable plan of the assignment: the cost breakdown, dropped orders and
/// one line per route with resolved dimension values at every stop.
pub fn write_plan<W: Write>(
    writer: &mut BufWriter<W>,
    model: &RoutingModel,
    assignment: &Assignment,
) -> GenericResult<()> {
    writer.write_all(
        format!(
            "Cost {}: transit {}, soft bound {}, penalty {}, group {}\n",
            assignment.total_cost(),
            assignment.transit_cost(),
            assignment.soft_bound_cost(),
            assignment.penalty_cost(),
            assignment.group_cost
        )
        .as_bytes(),
    )?;

    if !assignment.unassigned.is_empty() {
        let dropped = assignment.unassigned.iter().map(|(node, _)| node.to_string()).collect::<Vec<_>>().join(" ");
        writer.write_all(format!("Dropped orders: {dropped}\n").as_bytes())?;
    }

    for route in &assignment.routes {
        if route.is_empty() {
            writer.write_all(format!("Route {}: Empty\n", route.vehicle).as_bytes())?;
            continue;
        }

        let stops = route
            .stops
            .iter()
            .map(|stop| {
                let cumuls = model
                    .dimensions()
                    .iter()
                    .zip(stop.cumuls.iter())
                    .map(|(dimension, cumul)| format!(" {}({})", dimension.name(), cumul))
                    .collect::<String>();
                format!("{}{}", stop.node, cumuls)
            })
            .collect::<Vec<_>>()
            .join(" -> ");
        writer.write_all(format!("Route {}: {}\n", route.vehicle, stops).as_bytes())?;
    }

    Ok(())
}
