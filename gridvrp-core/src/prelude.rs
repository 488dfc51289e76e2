//! This module reimports a common used types.

pub use crate::models::common::{Cost, DEPOT, Demand, Distance, Duration, Node, TimeWindow, Timestamp};
pub use crate::models::model::{ModelBuilder, RoutingModel, TransitCallback};
pub use crate::models::solution::{Assignment, Route, Stop};

pub use crate::generation::{GenerationParams, Instance, InstanceConfig, generate_instance};

pub use crate::construction::{CAPACITY_DIMENSION, TIME_DIMENSION, configure_routing_model};

pub use crate::solver::{BestInsertionSolver, FirstSolutionStrategy, RoutingSolver, SearchParameters};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Random};
