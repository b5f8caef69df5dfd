/// Presentation layer: crossterm terminal renderer.
///
/// All drawing commands for a frame are batched with `queue!` and flushed
/// once. Screens overwrite their own fixed-width lines in place, so the
/// terminal is only cleared on phase changes, not per frame.
///
/// The playfield uses two terminal columns per maze cell to keep the grid
/// roughly square, and hides everything outside the player's light radius
/// (Manhattan distance) behind fog.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::domain::maze::{COLS, ROWS};
use crate::domain::tile::{Letter, Tile};
use crate::sim::daily::DailyRecord;
use crate::sim::session::{GameSession, Outcome};

const GRID_TOP: u16 = 3;
const STATUS_ROW: u16 = GRID_TOP + ROWS as u16 + 1;
const FOOTER_ROW: u16 = STATUS_ROW + 1;

pub struct Renderer {
    out: BufWriter<Stdout>,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { out: BufWriter::new(io::stdout()) }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.out, Show, LeaveAlternateScreen, ResetColor)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Wipe the screen; call when switching between screens.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    // ── Screens ──

    pub fn render_rules(&mut self, day: i64) -> io::Result<()> {
        let lines = [
            format!("Daily Seanle #{day}"),
            String::new(),
            "Find S, E, A and N in the dark maze before Sean finds you.".into(),
            "You can only see a few tiles around you.".into(),
            "Traps send you back to the start. Time bonuses take 5".into(),
            "seconds off your clock. Collecting the third letter".into(),
            "summons Sean, and he knows the shortest way to you.".into(),
            String::new(),
            "One puzzle per day.".into(),
            String::new(),
            "Arrows / WASD to move.".into(),
            "Press Enter to start.".into(),
        ];
        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                MoveTo(2, 1 + i as u16),
                SetForegroundColor(if i == 0 { Color::Yellow } else { Color::White }),
                Print(format!("{line:<60}")),
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    pub fn render_playing(
        &mut self,
        session: &GameSession,
        day: i64,
        light_radius: i32,
        status: Option<&str>,
    ) -> io::Result<()> {
        self.draw_header(session, day)?;
        self.draw_grid(session, light_radius)?;

        queue!(
            self.out,
            MoveTo(0, STATUS_ROW),
            SetForegroundColor(Color::Red),
            Print(format!("{:<44}", status.unwrap_or(""))),
            MoveTo(0, FOOTER_ROW),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("{:<44}", "Arrows/WASD move · Q quit")),
            ResetColor,
        )?;
        self.out.flush()
    }

    /// End screen for a finished (or already locked) day. The final maze
    /// stays visible behind it when a live session is supplied.
    pub fn render_end(
        &mut self,
        session: Option<&GameSession>,
        day: i64,
        record: &DailyRecord,
        share: &str,
    ) -> io::Result<()> {
        if let Some(session) = session {
            self.draw_header(session, day)?;
            self.draw_grid(session, i32::MAX)?;
        } else {
            queue!(
                self.out,
                MoveTo(0, 0),
                SetForegroundColor(Color::Yellow),
                Print(format!("{:<44}", format!("Daily Seanle #{day}"))),
            )?;
        }

        let headline = match record.result {
            Outcome::Win => format!(
                "Congrats! You collected S, E, A, N in {:.2} seconds.",
                record.time
            ),
            Outcome::Loss => "You got Seaned! Try again tomorrow.".to_string(),
        };

        queue!(
            self.out,
            MoveTo(0, STATUS_ROW),
            SetForegroundColor(match record.result {
                Outcome::Win => Color::Green,
                Outcome::Loss => Color::Red,
            }),
            Print(format!("{headline:<60}")),
            MoveTo(0, STATUS_ROW + 1),
            SetForegroundColor(Color::White),
            Print(format!("{share:<100}")),
            MoveTo(0, STATUS_ROW + 2),
            SetForegroundColor(Color::DarkGrey),
            Print(format!("{:<44}", "Come back tomorrow · Q quit")),
            ResetColor,
        )?;
        self.out.flush()
    }

    // ── Pieces ──

    fn draw_header(&mut self, session: &GameSession, day: i64) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{:<28}",
                format!("Daily Seanle #{day}")
            )),
            SetForegroundColor(Color::White),
            Print(format!("Time: {:>8.2}", session.elapsed)),
            MoveTo(0, 1),
        )?;

        for letter in Letter::ALL {
            let got = session.player.has_collected(letter);
            queue!(
                self.out,
                SetForegroundColor(if got { Color::Magenta } else { Color::DarkGrey }),
                Print(format!("[{}] ", letter.glyph())),
            )?;
        }
        queue!(self.out, ResetColor)?;
        Ok(())
    }

    fn draw_grid(&mut self, session: &GameSession, light_radius: i32) -> io::Result<()> {
        for r in 0..ROWS {
            queue!(self.out, MoveTo(0, GRID_TOP + r as u16))?;
            for c in 0..COLS {
                let dist = (r as i32 - session.player.row as i32).abs()
                    + (c as i32 - session.player.col as i32).abs();

                let (glyph, color) = if dist > light_radius {
                    ("  ", Color::Black)
                } else if (r, c) == (session.player.row, session.player.col) {
                    ("@ ", Color::Yellow)
                } else if session.enemy.active && (r, c) == (session.enemy.row, session.enemy.col) {
                    ("X ", Color::Red)
                } else {
                    cell_appearance(session.tile_at(r, c))
                };

                queue!(self.out, SetForegroundColor(color), Print(glyph))?;
            }
        }
        queue!(self.out, ResetColor)?;
        Ok(())
    }
}

fn cell_appearance(tile: Tile) -> (&'static str, Color) {
    match tile {
        Tile::Wall => ("██", Color::DarkGrey),
        Tile::Floor => ("· ", Color::DarkGrey),
        Tile::CrackedWall => ("▒▒", Color::Grey),
        Tile::Trap => ("^ ", Color::Red),
        Tile::Key => ("k ", Color::Yellow),
        Tile::TimeBonus => ("+ ", Color::Cyan),
        Tile::Letter(Letter::S) => ("S ", Color::Magenta),
        Tile::Letter(Letter::E) => ("E ", Color::Magenta),
        Tile::Letter(Letter::A) => ("A ", Color::Magenta),
        Tile::Letter(Letter::N) => ("N ", Color::Magenta),
    }
}
