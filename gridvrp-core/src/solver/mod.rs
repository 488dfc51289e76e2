//! Provides a contract between a configured routing model and a routing engine together
//! with a reference construction solver.

use crate::models::model::RoutingModel;
use crate::models::solution::Assignment;
use crate::utils::GenericResult;

mod best_insertion;
pub use self::best_insertion::*;

mod params;
pub use self::params::*;

/// A routing engine which reads a sealed model and searches for an assignment.
pub trait RoutingSolver {
    /// Solves the model within the given search parameters. `Ok(None)` signals that no
    /// solution exists for the model rather than a solver failure.
    fn solve(&self, model: &RoutingModel, parameters: &SearchParameters) -> GenericResult<Option<Assignment>>;
}
