#[cfg(test)]
#[path = "../../tests/unit/solver/params_test.rs"]
mod params_test;

use crate::utils::GenericResult;
use serde::Deserialize;

/// A strategy used to build the first solution.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum FirstSolutionStrategy {
    /// Repeatedly inserts the globally cheapest feasible order.
    CheapestInsertion,
    /// Inserts orders in index order at their first feasible position.
    FirstFeasible,
}

/// Search parameters understood by routing solvers. A default set can be partially
/// overridden from a structured text, see [`SearchParameters::from_overrides`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SearchParameters {
    /// A strategy to build the solution.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// An optional limit on solving time, in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Whether a solver logs its search progress.
    pub log_search: bool,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self { first_solution_strategy: FirstSolutionStrategy::CheapestInsertion, time_limit_ms: None, log_search: false }
    }
}

impl SearchParameters {
    /// Returns default parameters overridden by the given partial json text. An empty
    /// text keeps the defaults, a malformed or unknown field is a configuration error.
    pub fn from_overrides(text: &str) -> GenericResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(text).map_err(|err| format!("cannot parse search parameters: {err}").into())
    }
}
