/// GameSession: the complete state of one day's play-through.
///
/// One instance per session, owned by the game loop and passed by
/// reference into movement and tick functions. The grid is mutable shared
/// world state: consumed features revert to Floor.
///
/// Movement and pursuit never run once `outcome` is set; the render loop
/// may keep drawing the final state harmlessly.

use crate::domain::ai::{self, Pursuit};
use crate::domain::entity::{Enemy, Player};
use crate::domain::maze::{self, GenerationError, START};
use crate::domain::tile::Tile;
use super::event::GameEvent;

const TIME_BONUS_SECONDS: f64 = 5.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Win,
    Loss,
}

pub struct GameSession {
    pub tiles: Vec<Vec<Tile>>,
    pub player: Player,
    pub enemy: Enemy,
    pub start: (usize, usize),
    /// Seconds since the session started; bonuses may pull it down,
    /// floored at zero.
    pub elapsed: f64,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Generate the day's maze and place the player at the start.
    pub fn new(seed: u32) -> Result<Self, GenerationError> {
        let tiles = maze::generate(seed)?;
        Ok(GameSession {
            tiles,
            player: Player::new(START.0, START.1),
            enemy: Enemy::dormant(),
            start: START,
            elapsed: 0.0,
            outcome: None,
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Tile query; out of bounds reads as Wall.
    pub fn tile_at(&self, row: usize, col: usize) -> Tile {
        if row < maze::ROWS && col < maze::COLS {
            self.tiles[row][col]
        } else {
            Tile::Wall
        }
    }

    /// Accumulate real time while the session is running.
    pub fn advance_time(&mut self, dt: f64) {
        if self.outcome.is_none() {
            self.elapsed += dt;
        }
    }

    // ── Player movement ──

    /// Attempt a one-cell move. Rejected moves (out of bounds, wall,
    /// session over) change nothing and return no events.
    pub fn try_move(&mut self, dr: i32, dc: i32) -> Vec<GameEvent> {
        if self.outcome.is_some() {
            return vec![];
        }

        let nr = self.player.row as i32 + dr;
        let nc = self.player.col as i32 + dc;
        if nr < 0 || nr >= maze::ROWS as i32 || nc < 0 || nc >= maze::COLS as i32 {
            return vec![];
        }
        let (nr, nc) = (nr as usize, nc as usize);
        if !self.tiles[nr][nc].is_passable_for_player() {
            return vec![];
        }

        self.player.row = nr;
        self.player.col = nc;

        let mut events = Vec::new();
        match self.tiles[nr][nc] {
            Tile::TimeBonus => {
                self.elapsed = (self.elapsed - TIME_BONUS_SECONDS).max(0.0);
                self.tiles[nr][nc] = Tile::Floor;
                events.push(GameEvent::TimeBonusTaken { row: nr, col: nc });
            }
            Tile::Trap => {
                self.tiles[nr][nc] = Tile::Floor;
                self.player.row = self.start.0;
                self.player.col = self.start.1;
                events.push(GameEvent::TrapSprung { row: nr, col: nc });
            }
            Tile::Key => {
                self.tiles[nr][nc] = Tile::Floor;
            }
            Tile::Letter(letter) => {
                if !self.player.has_collected(letter) {
                    self.player.collected.push(letter);
                    events.push(GameEvent::LetterCollected(letter));
                    if self.player.collected.len() == 3 && !self.enemy.active {
                        self.summon_enemy();
                        events.push(GameEvent::EnemySummoned);
                    }
                }
                self.tiles[nr][nc] = Tile::Floor;
                if self.player.collected.len() == 4 {
                    self.outcome = Some(Outcome::Win);
                    events.push(GameEvent::GameWon { elapsed: self.elapsed });
                }
            }
            Tile::Floor | Tile::CrackedWall | Tile::Wall => {}
        }

        events
    }

    /// Activate the enemy at the start cell. The start is always Floor,
    /// so it is always a legal enemy cell.
    pub fn summon_enemy(&mut self) {
        self.enemy.active = true;
        self.enemy.row = self.start.0;
        self.enemy.col = self.start.1;
    }

    // ── Pursuit ──

    /// One pursuit tick: full BFS toward the player's current cell,
    /// then a single step. Runs on its own fixed cadence, not per frame.
    pub fn enemy_tick(&mut self) -> Vec<GameEvent> {
        if self.outcome.is_some() || !self.enemy.active {
            return vec![];
        }

        match ai::pursue(
            &self.tiles,
            (self.enemy.row, self.enemy.col),
            (self.player.row, self.player.col),
        ) {
            Pursuit::Caught => {
                self.outcome = Some(Outcome::Loss);
                vec![GameEvent::GameLost { elapsed: self.elapsed }]
            }
            Pursuit::Step { row, col } => {
                self.enemy.row = row;
                self.enemy.col = col;
                vec![]
            }
            Pursuit::Hold => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tile::Letter;

    fn open_session() -> GameSession {
        // Real generated maze, then flatten everything passable to Floor so
        // tests can stage tiles precisely.
        let mut s = GameSession::new(1).unwrap();
        for row in s.tiles.iter_mut() {
            for t in row.iter_mut() {
                if *t != Tile::Wall {
                    *t = Tile::Floor;
                }
            }
        }
        s
    }

    /// Find a direction from the player's cell into the given tile kind,
    /// staging the tile on an adjacent floor cell first.
    fn stage_adjacent(s: &mut GameSession, kind: Tile) -> (i32, i32) {
        let (pr, pc) = (s.player.row, s.player.col);
        for (dr, dc) in [(-1i32, 0i32), (1, 0), (0, -1), (0, 1)] {
            let (nr, nc) = (pr as i32 + dr, pc as i32 + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if s.tile_at(nr, nc) == Tile::Floor {
                s.tiles[nr][nc] = kind;
                return (dr, dc);
            }
        }
        panic!("no adjacent floor cell to stage on");
    }

    #[test]
    fn generated_start_cell_is_floor_and_player_begins_there() {
        let s = GameSession::new(1).unwrap();
        assert_eq!(s.tile_at(1, 1), Tile::Floor);
        assert_eq!((s.player.row, s.player.col), (1, 1));
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut s = open_session();
        // Out of the maze: (1,1) -> (0,1) may be floor, so force a wall.
        s.tiles[0][1] = Tile::Wall;
        s.tiles[1][0] = Tile::Wall;
        let before = s.tiles.clone();
        assert!(s.try_move(-1, 0).is_empty());
        assert!(s.try_move(0, -1).is_empty());
        assert_eq!((s.player.row, s.player.col), (1, 1));
        assert_eq!(s.tiles, before);
    }

    #[test]
    fn trap_teleports_home_and_is_consumed() {
        let mut s = open_session();
        let (dr, dc) = stage_adjacent(&mut s, Tile::Trap);
        let trap = (
            (s.player.row as i32 + dr) as usize,
            (s.player.col as i32 + dc) as usize,
        );

        let events = s.try_move(dr, dc);
        assert_eq!(
            events,
            vec![GameEvent::TrapSprung { row: trap.0, col: trap.1 }]
        );
        assert_eq!((s.player.row, s.player.col), s.start);
        assert_eq!(s.tile_at(trap.0, trap.1), Tile::Floor);

        // Same step again: the trap is gone, plain floor walk.
        let events = s.try_move(dr, dc);
        assert!(events.is_empty());
        assert_eq!((s.player.row, s.player.col), trap);
    }

    #[test]
    fn time_bonus_never_drives_elapsed_below_zero() {
        let mut s = open_session();
        s.elapsed = 7.0;

        let (dr, dc) = stage_adjacent(&mut s, Tile::TimeBonus);
        s.try_move(dr, dc);
        assert!((s.elapsed - 2.0).abs() < 1e-9);

        let (dr, dc) = stage_adjacent(&mut s, Tile::TimeBonus);
        s.try_move(dr, dc);
        assert_eq!(s.elapsed, 0.0);
    }

    #[test]
    fn enemy_activates_on_third_distinct_letter_and_win_on_fourth() {
        let mut s = open_session();

        // Collect E, A, S, then N — scenario D ordering plus the finish.
        for (i, letter) in [Letter::E, Letter::A, Letter::S, Letter::N]
            .into_iter()
            .enumerate()
        {
            assert!(!s.is_over());
            let (dr, dc) = stage_adjacent(&mut s, Tile::Letter(letter));
            let events = s.try_move(dr, dc);

            assert!(events.contains(&GameEvent::LetterCollected(letter)));
            match i {
                0 | 1 => assert!(!s.enemy.active),
                2 => {
                    assert!(s.enemy.active);
                    assert!(events.contains(&GameEvent::EnemySummoned));
                    assert_eq!((s.enemy.row, s.enemy.col), s.start);
                }
                _ => {}
            }
        }

        assert_eq!(s.outcome(), Some(Outcome::Win));
        assert!(s.enemy.active);
        assert_eq!(s.player.collected, vec![Letter::E, Letter::A, Letter::S, Letter::N]);
    }

    #[test]
    fn win_fires_exactly_once_and_freezes_the_session() {
        let mut s = open_session();
        for letter in Letter::ALL {
            let (dr, dc) = stage_adjacent(&mut s, Tile::Letter(letter));
            s.try_move(dr, dc);
        }
        assert_eq!(s.outcome(), Some(Outcome::Win));

        // Further input and ticks are no-ops.
        let pos = (s.player.row, s.player.col);
        assert!(s.try_move(1, 0).is_empty());
        assert_eq!((s.player.row, s.player.col), pos);
        assert!(s.enemy_tick().is_empty());
    }

    #[test]
    fn coincident_enemy_is_an_immediate_loss_with_no_grid_mutation() {
        let mut s = open_session();
        s.summon_enemy();
        s.enemy.row = s.player.row;
        s.enemy.col = s.player.col;
        s.elapsed = 12.5;

        let before = s.tiles.clone();
        let events = s.enemy_tick();
        assert_eq!(events, vec![GameEvent::GameLost { elapsed: 12.5 }]);
        assert_eq!(s.outcome(), Some(Outcome::Loss));
        assert_eq!(s.tiles, before);
    }

    #[test]
    fn adjacent_enemy_loses_without_moving_onto_the_player() {
        let mut s = open_session();
        let (dr, dc) = stage_adjacent(&mut s, Tile::Floor);
        s.summon_enemy();
        s.enemy.row = (s.player.row as i32 + dr) as usize;
        s.enemy.col = (s.player.col as i32 + dc) as usize;
        let enemy_pos = (s.enemy.row, s.enemy.col);

        let events = s.enemy_tick();
        assert!(matches!(events.as_slice(), [GameEvent::GameLost { .. }]));
        assert_eq!((s.enemy.row, s.enemy.col), enemy_pos);
    }

    #[test]
    fn dormant_enemy_never_ticks() {
        let mut s = open_session();
        assert!(!s.enemy.active);
        assert!(s.enemy_tick().is_empty());
        assert!(s.outcome().is_none());
    }

    #[test]
    fn duplicate_letters_are_ignored() {
        let mut s = open_session();
        for _ in 0..2 {
            let (dr, dc) = stage_adjacent(&mut s, Tile::Letter(Letter::S));
            s.try_move(dr, dc);
        }
        assert_eq!(s.player.collected, vec![Letter::S]);
        assert!(s.outcome().is_none());
    }

    #[test]
    fn time_stops_accumulating_after_the_session_ends() {
        let mut s = open_session();
        s.advance_time(3.0);
        assert!((s.elapsed - 3.0).abs() < 1e-9);

        s.summon_enemy();
        s.enemy.row = s.player.row;
        s.enemy.col = s.player.col;
        s.enemy_tick();
        s.advance_time(10.0);
        assert!((s.elapsed - 3.0).abs() < 1e-9);
    }
}
