/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Pursuit cadence; the enemy takes one BFS step per interval.
    pub enemy_move_interval_ms: u64,
}

#[derive(Clone, Debug)]
pub struct DisplayConfig {
    /// Manhattan radius of visible tiles around the player.
    pub light_radius: i32,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    display: TomlDisplay,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_enemy_interval")]
    enemy_move_interval_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlDisplay {
    #[serde(default = "default_light_radius")]
    light_radius: i32,
}

fn default_enemy_interval() -> u64 { 100 }
fn default_light_radius() -> i32 { 5 }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming { enemy_move_interval_ms: default_enemy_interval() }
    }
}

impl Default for TomlDisplay {
    fn default() -> Self {
        TomlDisplay { light_radius: default_light_radius() }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());
        GameConfig {
            timing: TimingConfig {
                enemy_move_interval_ms: toml_cfg.timing.enemy_move_interval_ms,
            },
            display: DisplayConfig {
                light_radius: toml_cfg.display.light_radius,
            },
        }
    }
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timing.enemy_move_interval_ms, 100);
        assert_eq!(cfg.display.light_radius, 5);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg: TomlConfig = toml::from_str("[display]\nlight_radius = 7\n").unwrap();
        assert_eq!(cfg.display.light_radius, 7);
        assert_eq!(cfg.timing.enemy_move_interval_ms, 100);
    }
}
