//! Pure simulation logic for CarSim.
//!
//! Everything here works on plain data: a caller-owned [`status::Status`]
//! is mutated in place by the action dispatcher and the turn-cost function.
//! Direction strategies are injected, so nothing in this crate knows how a
//! vehicle actually turns or drives.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Menu actions, movement kinds, dispatch outcomes |
//! | [`config`] | Resource maxima and depletion tuning (JSON loadable) |
//! | [`direction`] | Direction strategy trait, context, resolved strategy table |
//! | [`simulation`] | `SimulationLogicService`: action dispatch and status evolution |
//! | [`status`] | The energy/gas/hunger record and strategy-owned pose |

pub mod actions;
pub mod config;
pub mod direction;
pub mod simulation;
pub mod status;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::actions::{Action, ActionOutcome, MovementAction};
    pub use crate::config::SimulationConfig;
    pub use crate::direction::{
        DirectionContext, DirectionStrategy, StrategyContext, StrategyHandle,
    };
    pub use crate::simulation::SimulationLogicService;
    pub use crate::status::{Heading, Position, Status};
}
