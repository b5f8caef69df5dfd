/// Entities: the player and the pursuing enemy.

use super::tile::Letter;

/// Movement direction as a unit step in (row, col).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveDir {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDir {
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDir::Up => (-1, 0),
            MoveDir::Down => (1, 0),
            MoveDir::Left => (0, -1),
            MoveDir::Right => (0, 1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub row: usize,
    pub col: usize,
    /// Insertion order = collection order; each letter at most once.
    pub collected: Vec<Letter>,
}

impl Player {
    pub fn new(row: usize, col: usize) -> Self {
        Player { row, col, collected: Vec::with_capacity(4) }
    }

    pub fn has_collected(&self, letter: Letter) -> bool {
        self.collected.contains(&letter)
    }
}

/// The enemy stays inactive until the third distinct letter is collected,
/// then pursues until the session ends. Never deactivated.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub row: usize,
    pub col: usize,
    pub active: bool,
}

impl Enemy {
    pub fn dormant() -> Self {
        Enemy { row: 0, col: 0, active: false }
    }
}
