/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Scan direction of the car. Decides which side of the current floor is
/// searched for the next stop, not whether the car is physically moving.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn reversed(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Signed floor delta of a single step in this direction.
    pub fn step(&self) -> i32 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Read-only snapshot of a car, used for reporting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarState {
    #[serde(rename = "floorCount")]
    pub floor_count: i32,
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    pub direction: Direction,
    #[serde(rename = "pendingRequests")]
    pub pending_requests: Vec<i32>,
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use super::{CarState, Direction};

    #[test]
    fn test_direction_reversed() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
        assert_eq!(Direction::default(), Direction::Up);
    }

    #[test]
    fn test_car_state_json_field_names() {
        // Arrange
        let state = CarState {
            floor_count: 6,
            current_floor: 1,
            direction: Direction::Up,
            pending_requests: vec![3, 5],
        };

        // Act
        let json = serde_json::to_value(&state).unwrap();

        // Assert
        assert_eq!(json["floorCount"], 6);
        assert_eq!(json["currentFloor"], 1);
        assert_eq!(json["direction"], "up");
        assert_eq!(json["pendingRequests"], serde_json::json!([3, 5]));
    }
}
