/// Daily puzzle bookkeeping: day index, one-play-per-day lock, share text.
///
/// The day index is whole local calendar days since the reference date,
/// plus one. It is both the PRNG seed and the displayed puzzle number, and
/// is recomputed at every session start so a process left running past
/// midnight never reuses yesterday's seed.
///
/// The lock is a key-value file (`daily.dat`), written once at session end
/// and read once at startup:
///   lastPlayedDate=YYYY-MM-DD
///   gameResult=win|lose
///   gameTime=12.34

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::session::Outcome;

const RECORD_FILE: &str = "daily.dat";

fn reference_date() -> NaiveDate {
    // Puzzle #1 was played on 2025-01-05.
    NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid reference date")
}

/// Today's puzzle number (and PRNG seed).
pub fn day_index() -> i64 {
    day_index_for(Local::now().date_naive())
}

pub fn day_index_for(date: NaiveDate) -> i64 {
    (date - reference_date()).num_days() + 1
}

pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

// ── Record ──

#[derive(Clone, Debug, PartialEq)]
pub struct DailyRecord {
    /// ISO local calendar date of the last completed session.
    pub date: String,
    pub result: Outcome,
    /// Final elapsed seconds.
    pub time: f64,
}

impl DailyRecord {
    pub fn is_for_today(&self) -> bool {
        self.date == today_string()
    }
}

/// Store the outcome of today's session. Called exactly once, at session end.
pub fn store_record(result: Outcome, time: f64) -> Result<(), String> {
    let record = DailyRecord { date: today_string(), result, time };
    let path = record_path();
    std::fs::write(&path, serialize_record(&record))
        .map_err(|e| format!("could not write {}: {e}", path.display()))
}

pub fn load_record() -> Option<DailyRecord> {
    let content = std::fs::read_to_string(record_path()).ok()?;
    parse_record(&content)
}

/// Drop the daily lock (the `--reset` flag).
pub fn clear_record() {
    let _ = std::fs::remove_file(record_path());
}

// ── Share text ──

/// The (day, outcome, elapsed) triple rendered as the shareable result line.
pub fn share_text(day: i64, result: Outcome, time: f64) -> String {
    match result {
        Outcome::Win => format!(
            "I completed Daily Seanle #{day} in {time:.2} seconds! \
             Can you do better: https://dailyseanle.com"
        ),
        Outcome::Loss => format!(
            "I got Seaned on Daily Seanle #{day}! \
             Can you do better: https://dailyseanle.com"
        ),
    }
}

// ── Serialization ──

fn serialize_record(record: &DailyRecord) -> String {
    let result = match record.result {
        Outcome::Win => "win",
        Outcome::Loss => "lose",
    };
    format!(
        "lastPlayedDate={}\ngameResult={}\ngameTime={:.2}\n",
        record.date, result, record.time,
    )
}

fn parse_record(content: &str) -> Option<DailyRecord> {
    let mut date = None;
    let mut result = None;
    let mut time = None;

    for line in content.lines() {
        if let Some(val) = line.strip_prefix("lastPlayedDate=") {
            date = Some(val.trim().to_string());
        } else if let Some(val) = line.strip_prefix("gameResult=") {
            result = match val.trim() {
                "win" => Some(Outcome::Win),
                "lose" => Some(Outcome::Loss),
                _ => None,
            };
        } else if let Some(val) = line.strip_prefix("gameTime=") {
            time = val.trim().parse().ok();
        }
    }

    Some(DailyRecord { date: date?, result: result?, time: time? })
}

// ── Paths ──

fn record_path() -> PathBuf {
    save_dir().join(RECORD_FILE)
}

/// Where the record lives: exe directory when writable (portable installs),
/// else `~/.local/share/seanle`, else the working directory.
fn save_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            let probe = parent.join(".write_test_seanle");
            if std::fs::write(&probe, "").is_ok() {
                let _ = std::fs::remove_file(&probe);
                return parent.to_path_buf();
            }
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/seanle");
        if std::fs::create_dir_all(&xdg).is_ok() {
            return xdg;
        }
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
