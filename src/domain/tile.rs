/// Tile types and their properties.
/// Passability is queried via methods, not stored as flags,
/// so the two allow-lists (player vs enemy) live in one place.

/// The four collectible letters, in canonical placement order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Letter {
    S,
    E,
    A,
    N,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::S, Letter::E, Letter::A, Letter::N];

    pub fn glyph(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::E => 'E',
            Letter::A => 'A',
            Letter::N => 'N',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Wall,
    Floor,
    /// Half-broken wall: the player squeezes through, the enemy cannot.
    CrackedWall,
    /// Stepping on it teleports the player back to the start.
    Trap,
    Key,
    /// Reduces elapsed time by 5 seconds when picked up.
    TimeBonus,
    Letter(Letter),
}

impl Tile {
    /// Everything except solid walls.
    pub fn is_passable_for_player(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// The enemy additionally refuses cracked walls.
    pub fn is_passable_for_enemy(self) -> bool {
        !matches!(self, Tile::Wall | Tile::CrackedWall)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passability_allow_lists_differ_only_on_cracked_walls() {
        let all = [
            Tile::Wall,
            Tile::Floor,
            Tile::CrackedWall,
            Tile::Trap,
            Tile::Key,
            Tile::TimeBonus,
            Tile::Letter(Letter::S),
            Tile::Letter(Letter::E),
            Tile::Letter(Letter::A),
            Tile::Letter(Letter::N),
        ];
        for t in all {
            match t {
                Tile::Wall => {
                    assert!(!t.is_passable_for_player());
                    assert!(!t.is_passable_for_enemy());
                }
                Tile::CrackedWall => {
                    assert!(t.is_passable_for_player());
                    assert!(!t.is_passable_for_enemy());
                }
                _ => {
                    assert!(t.is_passable_for_player());
                    assert!(t.is_passable_for_enemy());
                }
            }
        }
    }
}
