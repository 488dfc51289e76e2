//! Provides synthetic instance generation: geography, demand and time windows.

mod config;
pub use self::config::*;

mod demand;
pub use self::demand::*;

mod geometry;
pub use self::geometry::*;

mod instance;
pub use self::instance::*;

mod service;
pub use self::service::*;

mod time_windows;
pub use self::time_windows::*;
