//! Player actions - the closed menu of commands and their categories.

use serde::{Deserialize, Serialize};

/// A player-issued command. Menu codes 1-8; anything else is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    TurnLeft,
    TurnRight,
    DriveForward,
    Reverse,
    Rest,
    Refuel,
    Exit,
    Eat,
    Invalid,
}

impl Action {
    /// Every valid action in menu order.
    pub const MENU: [Action; 8] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::DriveForward,
        Action::Reverse,
        Action::Rest,
        Action::Refuel,
        Action::Exit,
        Action::Eat,
    ];

    /// Map a menu code to an action. Unknown codes become `Invalid`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Action::TurnLeft,
            2 => Action::TurnRight,
            3 => Action::DriveForward,
            4 => Action::Reverse,
            5 => Action::Rest,
            6 => Action::Refuel,
            7 => Action::Exit,
            8 => Action::Eat,
            _ => Action::Invalid,
        }
    }

    /// Parse raw console input. Non-numeric input is `Invalid`.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::from_code)
            .unwrap_or(Action::Invalid)
    }

    /// Menu code of this action (`Invalid` reports 0).
    pub fn code(self) -> i64 {
        match self {
            Action::TurnLeft => 1,
            Action::TurnRight => 2,
            Action::DriveForward => 3,
            Action::Reverse => 4,
            Action::Rest => 5,
            Action::Refuel => 6,
            Action::Exit => 7,
            Action::Eat => 8,
            Action::Invalid => 0,
        }
    }

    /// The movement kind, if this action moves the vehicle.
    pub fn movement(self) -> Option<MovementAction> {
        match self {
            Action::TurnLeft => Some(MovementAction::Left),
            Action::TurnRight => Some(MovementAction::Right),
            Action::DriveForward => Some(MovementAction::Forward),
            Action::Reverse => Some(MovementAction::Backward),
            _ => None,
        }
    }

    /// True for the four actions routed through a direction strategy.
    pub fn is_movement(self) -> bool {
        self.movement().is_some()
    }

    /// Rest, Refuel and Eat restore a resource instantly.
    pub fn is_restorative(self) -> bool {
        matches!(self, Action::Rest | Action::Refuel | Action::Eat)
    }

    /// Menu text for this action.
    pub fn label(self) -> &'static str {
        match self {
            Action::TurnLeft => "Turn left",
            Action::TurnRight => "Turn right",
            Action::DriveForward => "Drive forward",
            Action::Reverse => "Reverse",
            Action::Rest => "Rest",
            Action::Refuel => "Refuel",
            Action::Exit => "Exit",
            Action::Eat => "Eat",
            Action::Invalid => "Invalid",
        }
    }
}

/// The four movement kinds a direction strategy is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAction {
    Left,
    Right,
    Forward,
    Backward,
}

impl MovementAction {
    /// Every movement kind, in strategy-table slot order.
    pub const ALL: [MovementAction; 4] = [
        MovementAction::Left,
        MovementAction::Right,
        MovementAction::Forward,
        MovementAction::Backward,
    ];

    /// Slot index into a four-entry strategy table.
    pub fn index(self) -> usize {
        match self {
            MovementAction::Left => 0,
            MovementAction::Right => 1,
            MovementAction::Forward => 2,
            MovementAction::Backward => 3,
        }
    }

    /// The menu action that triggers this movement.
    pub fn action(self) -> Action {
        match self {
            MovementAction::Left => Action::TurnLeft,
            MovementAction::Right => Action::TurnRight,
            MovementAction::Forward => Action::DriveForward,
            MovementAction::Backward => Action::Reverse,
        }
    }
}

/// What `perform_action` did with the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The strategy for this movement ran.
    Moved(MovementAction),
    /// Movement refused on an empty tank; nothing changed.
    OutOfGas,
    Rested,
    Refueled,
    Ate,
    Exit,
    /// Unknown action; nothing changed.
    Ignored,
}

impl ActionOutcome {
    /// Whether this outcome spends a turn (and therefore resources).
    pub fn consumes_turn(self) -> bool {
        matches!(
            self,
            ActionOutcome::Moved(_)
                | ActionOutcome::Rested
                | ActionOutcome::Refueled
                | ActionOutcome::Ate
        )
    }
}
