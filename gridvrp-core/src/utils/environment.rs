use crate::utils::{DefaultRandom, Random, RandomStream, get_seed};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences generation and
/// solving behavior.
#[derive(Clone)]
pub struct Environment {
    /// Whether generator components draw their seeds from fixed, reproducible values.
    pub use_deterministic_seed: bool,
    /// A logger interface.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(use_deterministic_seed: bool, logger: InfoLogger) -> Self {
        Self { use_deterministic_seed, logger }
    }

    /// Creates an independent random stream for the given generator component according
    /// to the seeding policy.
    pub fn create_random(&self, stream: RandomStream) -> Arc<dyn Random + Send + Sync> {
        Arc::new(DefaultRandom::with_seed(get_seed(self.use_deterministic_seed, stream)))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(false, Arc::new(|msg: &str| println!("{msg}")))
    }
}
