//! Common primitive types shared by the problem and solution models.

#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use serde::{Deserialize, Serialize};

/// Represents a travel distance in meters.
pub type Distance = i64;

/// Represents a time duration in seconds.
pub type Duration = i64;

/// Represents a point in time, in seconds from the start of the planning horizon.
pub type Timestamp = i64;

/// Represents a cost value.
pub type Cost = i64;

/// Represents a demand quantity.
pub type Demand = i64;

/// A node index within the routing index space.
pub type Node = usize;

/// An index of the depot node.
pub const DEPOT: Node = 0;

/// Represents a time window when a node can start to be served.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Earliest possible service start time.
    pub start: Timestamp,
    /// Latest possible service start time.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns a time window which covers the whole of the given horizon.
    pub fn full_horizon(horizon: Duration) -> Self {
        Self { start: 0, end: horizon }
    }

    /// Returns the width of the window.
    pub fn width(&self) -> Duration {
        self.end - self.start
    }

    /// Checks whether the given timestamp lies inside the window.
    pub fn contains(&self, time: Timestamp) -> bool {
        time >= self.start && time <= self.end
    }

    /// Checks whether this time window has intersection with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
