/// Daily maze construction: seeded carve, cracked-wall pass, feature
/// placement. All three stages consume one continuous PRNG stream, so a
/// given seed always yields a byte-identical grid.
///
/// The carve is a recursive backtracker on the odd-coordinate lattice,
/// run with an explicit stack instead of native recursion. A cell's
/// direction list is shuffled the moment the cell is entered, which keeps
/// the draw order identical to the recursive formulation.

use super::rng::SeededRng;
use super::tile::{Letter, Tile};

pub const ROWS: usize = 20;
pub const COLS: usize = 20;

/// Carve origin; also the player spawn and the enemy spawn cell.
pub const START: (usize, usize) = (1, 1);

const TRAP_COUNT: usize = 5;
const TIME_BONUS_COUNT: usize = 4;
const CRACK_CHANCE: f64 = 0.05;

/// Rejection-sampling cap per feature. The fixed 20x20 density leaves far
/// more than enough floor cells, so hitting this means the configuration
/// is broken, not unlucky.
const PLACEMENT_RETRY_CAP: usize = 10_000;

/// Carve directions in the order they are shuffled: right, left, down, up.
const CARVE_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[derive(Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// A placement loop ran out of retries before finding a free floor cell.
    Exhausted { what: &'static str },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Exhausted { what } => {
                write!(f, "could not place {what}: no free floor cell found")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

/// Build the full maze for a seed: carve, crack walls, place features.
pub fn generate(seed: u32) -> Result<Vec<Vec<Tile>>, GenerationError> {
    let mut rng = SeededRng::new(seed);
    let mut tiles = vec![vec![Tile::Wall; COLS]; ROWS];

    carve(&mut tiles, &mut rng);
    crack_walls(&mut tiles, &mut rng);
    place_features(&mut tiles, &mut rng)?;

    Ok(tiles)
}

/// Is this cell inside the restricted rectangle around the start?
/// No trap, bonus or letter may land there.
pub fn in_restricted_area(row: usize, col: usize) -> bool {
    (1..=5).contains(&row) && (1..=5).contains(&col)
}

fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
}

// ── Carve ──

/// One stack frame: a visited cell plus its shuffled directions and the
/// index of the next direction to try.
struct CarveFrame {
    row: usize,
    col: usize,
    dirs: [(i32, i32); 4],
    next: usize,
}

fn enter_cell(
    tiles: &mut [Vec<Tile>],
    visited: &mut [Vec<bool>],
    rng: &mut SeededRng,
    row: usize,
    col: usize,
) -> CarveFrame {
    visited[row][col] = true;
    tiles[row][col] = Tile::Floor;

    // Fisher-Yates, one range(0, i) draw per swap.
    let mut dirs = CARVE_DIRS;
    for i in (1..dirs.len()).rev() {
        let j = rng.range(0, i as i32) as usize;
        dirs.swap(i, j);
    }

    CarveFrame { row, col, dirs, next: 0 }
}

fn carve(tiles: &mut [Vec<Tile>], rng: &mut SeededRng) {
    let mut visited = vec![vec![false; COLS]; ROWS];
    let mut stack: Vec<CarveFrame> = Vec::with_capacity(ROWS * COLS / 4);

    let frame = enter_cell(tiles, &mut visited, rng, START.0, START.1);
    stack.push(frame);

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.dirs.len() {
            stack.pop();
            continue;
        }
        let (dr, dc) = frame.dirs[frame.next];
        frame.next += 1;

        let (r, c) = (frame.row as i32, frame.col as i32);
        let (nr, nc) = (r + dr * 2, c + dc * 2);
        if in_bounds(nr, nc) && !visited[nr as usize][nc as usize] {
            // Open the wall between the two rooms, then descend.
            tiles[(r + dr) as usize][(c + dc) as usize] = Tile::Floor;
            let frame = enter_cell(tiles, &mut visited, rng, nr as usize, nc as usize);
            stack.push(frame);
        }
    }
}

// ── Cracked walls ──

/// Row-major sweep over the interior. Exactly one draw per Wall cell,
/// no draws for anything else; the order is part of the seed contract.
fn crack_walls(tiles: &mut [Vec<Tile>], rng: &mut SeededRng) {
    for r in 1..ROWS - 1 {
        for c in 1..COLS - 1 {
            if tiles[r][c] == Tile::Wall && rng.next() < CRACK_CHANCE {
                tiles[r][c] = Tile::CrackedWall;
            }
        }
    }
}

// ── Feature placement ──

fn place_features(tiles: &mut [Vec<Tile>], rng: &mut SeededRng) -> Result<(), GenerationError> {
    tiles[START.0][START.1] = Tile::Floor;

    for _ in 0..TRAP_COUNT {
        place_one(tiles, rng, Tile::Trap, "trap")?;
    }
    for _ in 0..TIME_BONUS_COUNT {
        place_one(tiles, rng, Tile::TimeBonus, "time bonus")?;
    }
    for letter in Letter::ALL {
        place_one(tiles, rng, Tile::Letter(letter), "letter")?;
    }

    Ok(())
}

/// Draw random interior cells until one is a free floor cell outside the
/// restricted rectangle, then overwrite it. Sequential placement means
/// earlier features remove candidacy from later ones, so no two features
/// ever share a cell.
fn place_one(
    tiles: &mut [Vec<Tile>],
    rng: &mut SeededRng,
    kind: Tile,
    what: &'static str,
) -> Result<(), GenerationError> {
    for _ in 0..PLACEMENT_RETRY_CAP {
        let r = rng.range(1, ROWS as i32 - 2) as usize;
        let c = rng.range(1, COLS as i32 - 2) as usize;
        if tiles[r][c] == Tile::Floor && !in_restricted_area(r, c) {
            tiles[r][c] = kind;
            return Ok(());
        }
    }
    Err(GenerationError::Exhausted { what })
}
