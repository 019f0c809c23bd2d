//! Transition rule for Conway's Game of Life.
//!
//! The rule decides a cell's next state from its current state and the number
//! of live cells in its Moore neighborhood. Only B3/S23 is modeled.

/// Neighbor count at which a dead cell is born.
pub const BIRTH: u8 = 3;

/// Fewest live neighbors a live cell needs to survive.
pub const SURVIVE_MIN: u8 = 2;

/// Most live neighbors a live cell can have and still survive.
pub const SURVIVE_MAX: u8 = 3;

/// Compute the next state of a cell under B3/S23.
///
/// - Dead cell: alive iff `neighbors == 3`
/// - Live cell: survives iff `2 <= neighbors <= 3`
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        (SURVIVE_MIN..=SURVIVE_MAX).contains(&neighbors)
    } else {
        neighbors == BIRTH
    }
}

/// Outcome of applying the rule to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Born,
    Died,
    Unchanged,
}

impl Transition {
    #[inline]
    pub fn of(alive: bool, neighbors: u8) -> Self {
        match (alive, next_state(alive, neighbors)) {
            (false, true) => Transition::Born,
            (true, false) => Transition::Died,
            _ => Transition::Unchanged,
        }
    }
}
