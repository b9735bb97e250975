//! CarSim Core - vehicle survival game engine
//!
//! Wires the pure logic from `carsim_logic` to concrete direction
//! strategies and runs it as a turn-based session.
//!
//! # Example
//!
//! ```rust
//! use carsim_core::prelude::*;
//!
//! let mut engine = SimulationEngine::with_seed(7);
//! let report = engine.step(Action::DriveForward);
//! assert_eq!(report.status.hunger, 2);
//! ```

pub mod engine;
pub mod strategies;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{GameState, SimulationEngine, TurnReport};
    pub use crate::strategies::resolve_strategy;
    pub use carsim_logic::prelude::*;
}
