//! Concrete direction strategies - how each movement changes the vehicle pose.
//!
//! Strategies only touch `heading` and `position`. Resource costs are charged
//! separately by the turn engine.

use std::rc::Rc;

use carsim_logic::actions::MovementAction;
use carsim_logic::direction::{DirectionStrategy, StrategyHandle};
use carsim_logic::status::Status;

/// Rotate 90° counter-clockwise in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnLeftStrategy;

impl DirectionStrategy for TurnLeftStrategy {
    fn execute(&self, status: &mut Status) {
        status.heading = status.heading.turned_left();
    }

    fn name(&self) -> &'static str {
        "turn-left"
    }
}

/// Rotate 90° clockwise in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnRightStrategy;

impl DirectionStrategy for TurnRightStrategy {
    fn execute(&self, status: &mut Status) {
        status.heading = status.heading.turned_right();
    }

    fn name(&self) -> &'static str {
        "turn-right"
    }
}

/// Advance one cell along the heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveForwardStrategy;

impl DirectionStrategy for DriveForwardStrategy {
    fn execute(&self, status: &mut Status) {
        status.position = status.position.stepped(status.heading, 1);
    }

    fn name(&self) -> &'static str {
        "drive-forward"
    }
}

/// Back up one cell, keeping the heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseStrategy;

impl DirectionStrategy for ReverseStrategy {
    fn execute(&self, status: &mut Status) {
        status.position = status.position.stepped(status.heading, -1);
    }

    fn name(&self) -> &'static str {
        "reverse"
    }
}

/// Default resolver handed to `SimulationLogicService::new`.
pub fn resolve_strategy(movement: MovementAction) -> StrategyHandle {
    match movement {
        MovementAction::Left => Rc::new(TurnLeftStrategy),
        MovementAction::Right => Rc::new(TurnRightStrategy),
        MovementAction::Forward => Rc::new(DriveForwardStrategy),
        MovementAction::Backward => Rc::new(ReverseStrategy),
    }
}
