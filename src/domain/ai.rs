/// Enemy pursuit — BFS pathfinding toward the player.
///
/// The search runs from scratch on every pursuit tick; the player moves
/// between ticks, so a cached path would immediately go stale. A neighbor
/// expands if the enemy can pass it, with one exception: the goal cell
/// itself always expands, letting the enemy route onto the player even
/// when the underlying tile would block it.

use std::collections::VecDeque;

use super::tile::Tile;

/// Neighbor enumeration order breaks shortest-path ties: up, down, left, right.
const DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Result of one pursuit tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pursuit {
    /// Enemy occupies, or would next step onto, the player's cell.
    Caught,
    /// Move to this cell: the first step of a shortest path.
    Step { row: usize, col: usize },
    /// No route to the player this tick; hold position.
    Hold,
}

/// Compute the enemy's move for this tick.
pub fn pursue(
    tiles: &[Vec<Tile>],
    enemy: (usize, usize),
    player: (usize, usize),
) -> Pursuit {
    if enemy == player {
        return Pursuit::Caught;
    }

    let height = tiles.len();
    let width = if height > 0 { tiles[0].len() } else { 0 };

    let mut visited = vec![vec![false; width]; height];
    let mut parent: Vec<Vec<Option<(usize, usize)>>> = vec![vec![None; width]; height];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::with_capacity(64);

    visited[enemy.0][enemy.1] = true;
    queue.push_back(enemy);

    let mut found = false;
    while let Some((r, c)) = queue.pop_front() {
        if (r, c) == player {
            found = true;
            break;
        }
        for (dr, dc) in DIRS {
            let (nr, nc) = (r as i32 + dr, c as i32 + dc);
            if nr < 0 || nr >= height as i32 || nc < 0 || nc >= width as i32 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if visited[nr][nc] {
                continue;
            }
            if tiles[nr][nc].is_passable_for_enemy() || (nr, nc) == player {
                visited[nr][nc] = true;
                parent[nr][nc] = Some((r, c));
                queue.push_back((nr, nc));
            }
        }
    }

    if !found {
        return Pursuit::Hold;
    }

    // Walk parents from the goal back to (but excluding) the enemy cell;
    // the last cell visited on the way back is the first step forward.
    let mut first_step = player;
    let mut cur = player;
    while let Some(prev) = parent[cur.0][cur.1] {
        if prev == enemy {
            first_step = cur;
            break;
        }
        cur = prev;
    }

    if first_step == player {
        // Adjacent: stepping would land on the player.
        Pursuit::Caught
    } else {
        Pursuit::Step { row: first_step.0, col: first_step.1 }
    }
}
