//! Vehicle status - the three bounded resources plus strategy-owned pose.
//!
//! Resource ranges (with the default config):
//! - energy: 0 (exhausted) to 20 (rested)
//! - gas: 0 (empty tank) to 20 (full)
//! - hunger: 0 (fed) to 16 (starving)
//!
//! `heading` and `position` belong to the direction strategies. Action
//! dispatch and status evolution never read or write them.

use serde::{Deserialize, Serialize};

/// Compass heading of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Heading after a 90° counter-clockwise turn.
    pub fn turned_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a 90° clockwise turn.
    pub fn turned_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit grid step for one cell of travel (north is +y).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Display name used in the console status line.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        }
    }
}

/// Grid cell the vehicle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Cell at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position after moving `steps` cells along `heading` (negative = backwards).
    pub fn stepped(self, heading: Heading, steps: i32) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }
}

/// Mutable status record owned by the caller and passed by `&mut` into
/// every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    pub energy: i32,
    pub gas: i32,
    pub hunger: i32,
    #[serde(default)]
    pub heading: Heading,
    #[serde(default)]
    pub position: Position,
}

impl Status {
    /// Status with the given resources, facing north at the origin.
    pub fn new(energy: i32, gas: i32, hunger: i32) -> Self {
        Self {
            energy,
            gas,
            hunger,
            heading: Heading::North,
            position: Position::default(),
        }
    }

    /// True when the tank is empty and no movement action can run.
    pub fn is_out_of_gas(&self) -> bool {
        self.gas == 0
    }

    /// True when heading and position match `other`.
    pub fn same_pose(&self, other: &Status) -> bool {
        self.heading == other.heading && self.position == other.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_left_turns_return_to_start() {
        let mut h = Heading::East;
        for _ in 0..4 {
            h = h.turned_left();
        }
        assert_eq!(h, Heading::East);
    }

    #[test]
    fn test_left_then_right_is_identity() {
        for h in [Heading::North, Heading::East, Heading::South, Heading::West] {
            assert_eq!(h.turned_left().turned_right(), h);
        }
    }

    #[test]
    fn test_position_step_follows_heading() {
        let p = Position::new(2, 3);
        assert_eq!(p.stepped(Heading::North, 1), Position::new(2, 4));
        assert_eq!(p.stepped(Heading::West, 1), Position::new(1, 3));
        assert_eq!(p.stepped(Heading::East, -1), Position::new(1, 3));
    }

    #[test]
    fn test_new_status_faces_north_at_origin() {
        let s = Status::new(20, 20, 0);
        assert_eq!(s.heading, Heading::North);
        assert_eq!(s.position, Position::default());
        assert!(!s.is_out_of_gas());
        assert!(Status::new(5, 0, 3).is_out_of_gas());
    }

    #[test]
    fn test_status_deserializes_without_pose() {
        let s: Status = serde_json::from_str(r#"{"energy":7,"gas":3,"hunger":4}"#).unwrap();
        assert_eq!(s, Status::new(7, 3, 4));
    }
}
