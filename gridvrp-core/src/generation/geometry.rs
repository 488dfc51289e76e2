#[cfg(test)]
#[path = "../../tests/unit/generation/geometry_test.rs"]
mod geometry_test;

use crate::models::common::{Distance, Duration, Node};
use crate::utils::Random;
use serde::Serialize;
use std::sync::Arc;

/// A point on the integer grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct GridPoint {
    /// The x coordinate, in meters.
    pub x: i64,
    /// The y coordinate, in meters.
    pub y: i64,
}

/// Stores node locations on a two dimensional integer grid and resolves Manhattan
/// distances and travel times between them.
#[derive(Clone, Serialize)]
pub struct LocationContainer {
    speed: i64,
    #[serde(skip_serializing)]
    random: Arc<dyn Random + Send + Sync>,
    locations: Vec<GridPoint>,
}

impl LocationContainer {
    /// Creates an empty container which derives travel times from the given speed.
    pub fn new(speed: i64, random: Arc<dyn Random + Send + Sync>) -> Self {
        Self { speed, random, locations: Default::default() }
    }

    /// Appends a node at the given coordinate.
    pub fn add_location(&mut self, x: i64, y: i64) {
        self.locations.push(GridPoint { x, y });
    }

    /// Appends a node at a uniformly random coordinate within `[0, x_max] x [0, y_max]`.
    pub fn add_random_location(&mut self, x_max: Distance, y_max: Distance) {
        let x = self.random.uniform_int(0, x_max);
        let y = self.random.uniform_int(0, y_max);

        self.add_location(x, y);
    }

    /// Returns the amount of stored locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Checks whether the container stores no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns the coordinate of the given node.
    pub fn location(&self, node: Node) -> GridPoint {
        self.locations[node]
    }

    /// Returns the Manhattan distance between two nodes, in meters.
    pub fn manhattan_distance(&self, from: Node, to: Node) -> Distance {
        let (from, to) = (self.locations[from], self.locations[to]);

        (from.x - to.x).abs() + (from.y - to.y).abs()
    }

    /// Returns the travel time between two nodes at the configured speed, rounded up
    /// to a whole second.
    pub fn travel_time(&self, from: Node, to: Node) -> Duration {
        (self.manhattan_distance(from, to) + self.speed - 1) / self.speed
    }
}
