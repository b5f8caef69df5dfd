/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::GameConfig;
use domain::entity::MoveDir;
use sim::daily::{self, DailyRecord};
use sim::event::GameEvent;
use sim::session::GameSession;
use ui::input::InputState;
use ui::renderer::Renderer;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

const TRAP_POPUP_MS: f64 = 1000.0;
const BONUS_POPUP_MS: f64 = 1000.0;
const SUMMON_POPUP_MS: f64 = 500.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Rules,
    Playing,
    Ended,
}

/// Transient status-line popups, counted down in milliseconds.
#[derive(Default)]
struct Hud {
    trap_ms: f64,
    bonus_ms: f64,
    summon_ms: f64,
}

impl Hud {
    fn tick(&mut self, dt_ms: f64) {
        self.trap_ms = (self.trap_ms - dt_ms).max(0.0);
        self.bonus_ms = (self.bonus_ms - dt_ms).max(0.0);
        self.summon_ms = (self.summon_ms - dt_ms).max(0.0);
    }

    fn message(&self) -> Option<&'static str> {
        if self.summon_ms > 0.0 {
            Some("SEAN HAS BEEN SUMMONED!")
        } else if self.trap_ms > 0.0 {
            Some("You fell into a trap!")
        } else if self.bonus_ms > 0.0 {
            Some("-5 Seconds!")
        } else {
            None
        }
    }
}

fn main() {
    if std::env::args().any(|a| a == "--reset") {
        daily::clear_record();
        println!("Daily lock cleared.");
    }

    let config = GameConfig::load();
    let day = daily::day_index();

    if day < 1 {
        eprintln!("Daily Seanle starts on 2025-01-05; check your system clock.");
        return;
    }

    // One puzzle per day: a finished record for today goes straight to
    // the result screen.
    let prior = daily::load_record().filter(|r| r.is_for_today());

    let session = match GameSession::new(day as u32) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Could not generate today's maze: {e}");
            return;
        }
    };

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(session, prior, &mut renderer, &config, day);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match result {
        Ok(Some(record)) => {
            println!();
            println!("{}", daily::share_text(day, record.result, record.time));
        }
        Ok(None) => {}
        Err(e) => eprintln!("Game error: {e}"),
    }
}

const KEYS_LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const KEYS_RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const KEYS_UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const KEYS_DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc];
const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];

fn detect_movement(kb: &InputState) -> Option<MoveDir> {
    if kb.any_pressed(KEYS_UP) {
        Some(MoveDir::Up)
    } else if kb.any_pressed(KEYS_DOWN) {
        Some(MoveDir::Down)
    } else if kb.any_pressed(KEYS_LEFT) {
        Some(MoveDir::Left)
    } else if kb.any_pressed(KEYS_RIGHT) {
        Some(MoveDir::Right)
    } else {
        None
    }
}

/// Run the session to completion. Returns the day's record if one exists
/// when the player leaves (stored now, or stored on an earlier run today).
fn game_loop(
    mut session: GameSession,
    prior: Option<DailyRecord>,
    renderer: &mut Renderer,
    config: &GameConfig,
    day: i64,
) -> Result<Option<DailyRecord>, Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut hud = Hud::default();

    let mut record = prior;
    let mut phase = if record.is_some() { Phase::Ended } else { Phase::Rules };
    // A replay of an already-finished day shows the stored result only.
    let show_maze = record.is_none();

    let enemy_interval = Duration::from_millis(config.timing.enemy_move_interval_ms);
    let mut last_frame = Instant::now();
    let mut enemy_accum = Duration::ZERO;

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() || kb.any_pressed(KEYS_QUIT) {
            break;
        }

        let dt = last_frame.elapsed();
        last_frame = Instant::now();

        match phase {
            Phase::Rules => {
                if kb.any_pressed(KEYS_CONFIRM) {
                    phase = Phase::Playing;
                    renderer.clear()?;
                    last_frame = Instant::now();
                } else {
                    renderer.render_rules(day)?;
                }
            }

            Phase::Playing => {
                session.advance_time(dt.as_secs_f64());
                hud.tick(dt.as_secs_f64() * 1000.0);

                if let Some(dir) = detect_movement(&kb) {
                    let (dr, dc) = dir.delta();
                    let events = session.try_move(dr, dc);
                    process_events(&events, &mut hud);
                }

                // The pursuer steps on a fixed cadence regardless of the
                // player's pace.
                enemy_accum += dt;
                while enemy_accum >= enemy_interval && !session.is_over() {
                    enemy_accum -= enemy_interval;
                    let events = session.enemy_tick();
                    process_events(&events, &mut hud);
                }

                if let Some(outcome) = session.outcome() {
                    let stored = DailyRecord {
                        date: daily::today_string(),
                        result: outcome,
                        time: session.elapsed,
                    };
                    if let Err(e) = daily::store_record(outcome, session.elapsed) {
                        eprintln!("Warning: {e}");
                    }
                    record = Some(stored);
                    phase = Phase::Ended;
                    renderer.clear()?;
                } else {
                    renderer.render_playing(
                        &session,
                        day,
                        config.display.light_radius,
                        hud.message(),
                    )?;
                }
            }

            Phase::Ended => {
                // The record is always present in this phase.
                if let Some(ref rec) = record {
                    let share = daily::share_text(day, rec.result, rec.time);
                    let shown = if show_maze { Some(&session) } else { None };
                    renderer.render_end(shown, day, rec, &share)?;
                }
            }
        }

        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(record)
}

fn process_events(events: &[GameEvent], hud: &mut Hud) {
    for event in events {
        match event {
            GameEvent::TrapSprung { .. } => hud.trap_ms = TRAP_POPUP_MS,
            GameEvent::TimeBonusTaken { .. } => hud.bonus_ms = BONUS_POPUP_MS,
            GameEvent::EnemySummoned => hud.summon_ms = SUMMON_POPUP_MS,
            _ => {}
        }
    }
}
