/// Events emitted by the session.
/// The presentation layer consumes these for popups and the daily record.

use crate::domain::tile::Letter;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameEvent {
    TrapSprung { row: usize, col: usize },
    TimeBonusTaken { row: usize, col: usize },
    LetterCollected(Letter),
    EnemySummoned,
    GameWon { elapsed: f64 },
    GameLost { elapsed: f64 },
}
