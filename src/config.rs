use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship cells on a fully placed board.
pub const FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Consecutive repeat shots tolerated from one side within a single turn.
pub const DEFAULT_MAX_REPEAT_SHOTS: usize = BOARD_CELLS;

/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
