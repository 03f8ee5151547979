/// Difficulty profiles, the immutable game configuration, and the optional
/// `settings.json` that can override them.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::entities::{Level, DUCK_HEIGHT, DUCK_WIDTH, DUCK_X};
use crate::error::ConfigError;

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FPS: u32 = 60;

/// Minimum distance between a pipe gap and the top/bottom of the screen.
pub const SPAWN_MARGIN: f32 = 100.0;

/// The duck is grounded once `y` exceeds `screen_height - GROUND_CLEARANCE`.
pub const GROUND_CLEARANCE: f32 = 40.0;

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Per-session tuning. Picked once from the menu and never re-read mid-run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Added to the duck's velocity every tick.
    pub gravity: f32,
    /// Velocity the duck is set to on a flap (negative = up).
    pub flap_strength: f32,
    pub pipe_gap: f32,
    /// Pixels per tick.
    pub pipe_speed: f32,
    /// Ticks between spawns.
    pub pipe_frequency: u64,
}

impl DifficultyProfile {
    pub const EASY: DifficultyProfile = DifficultyProfile {
        gravity: 0.5,
        flap_strength: -10.0,
        pipe_gap: 250.0,
        pipe_speed: 3.0,
        pipe_frequency: 90,
    };

    pub const MEDIUM: DifficultyProfile = DifficultyProfile {
        gravity: 0.7,
        flap_strength: -11.0,
        pipe_gap: 200.0,
        pipe_speed: 5.0,
        pipe_frequency: 70,
    };

    pub const HARD: DifficultyProfile = DifficultyProfile {
        gravity: 0.9,
        flap_strength: -12.0,
        pipe_gap: 160.0,
        pipe_speed: 7.0,
        pipe_frequency: 60,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileTable {
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::EASY,
            medium: DifficultyProfile::MEDIUM,
            hard: DifficultyProfile::HARD,
        }
    }
}

impl ProfileTable {
    pub fn get(&self, level: Level) -> &DifficultyProfile {
        match level {
            Level::Easy => &self.easy,
            Level::Medium => &self.medium,
            Level::Hard => &self.hard,
        }
    }
}

// ── Game configuration ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Target ticks per second.
    pub fps: u32,
    pub profiles: ProfileTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            profiles: ProfileTable::default(),
        }
    }
}

impl GameConfig {
    pub fn profile(&self, level: Level) -> &DifficultyProfile {
        self.profiles.get(level)
    }

    /// Largest gap that still leaves a non-empty spawn range.
    pub fn max_gap(&self) -> f32 {
        self.screen_height - 2.0 * SPAWN_MARGIN
    }

    /// Inclusive bounds for a pipe's gap offset under `profile`.
    pub fn gap_offset_range(&self, profile: &DifficultyProfile) -> (i32, i32) {
        let lo = SPAWN_MARGIN as i32;
        let hi = (self.screen_height - profile.pipe_gap - SPAWN_MARGIN).floor() as i32;
        (lo, hi)
    }

    pub fn ground_line(&self) -> f32 {
        self.screen_height - GROUND_CLEARANCE
    }

    /// Rejects any profile that would make spawning degenerate. Run once at
    /// startup so the simulation never has to handle it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.screen_width < DUCK_X + DUCK_WIDTH || self.screen_height < 2.0 * DUCK_HEIGHT {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        for level in Level::ALL {
            let profile = self.profile(level);
            if profile.pipe_frequency == 0 {
                return Err(ConfigError::ZeroPipeFrequency { level });
            }
            if profile.pipe_speed <= 0.0 {
                return Err(ConfigError::NonPositiveSpeed {
                    level,
                    speed: profile.pipe_speed,
                });
            }
            if profile.flap_strength >= 0.0 {
                return Err(ConfigError::NonNegativeFlap {
                    level,
                    strength: profile.flap_strength,
                });
            }
            if profile.pipe_gap <= 0.0 {
                return Err(ConfigError::NonPositiveGap {
                    level,
                    gap: profile.pipe_gap,
                });
            }
            let (lo, hi) = self.gap_offset_range(profile);
            if profile.pipe_gap > self.max_gap() || hi < lo {
                return Err(ConfigError::GapTooLarge {
                    level,
                    gap: profile.pipe_gap,
                    max: self.max_gap(),
                });
            }
        }
        Ok(())
    }
}

// ── Settings file ────────────────────────────────────────────────────────────

/// User overrides read from `settings.json`. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps: Option<u32>,
    /// Fixed RNG seed for reproducible pipe layouts.
    pub seed: Option<u64>,
    pub profiles: Option<ProfileTable>,
}

impl Settings {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Layer these overrides on top of `base`. The result still needs
    /// `GameConfig::validate`.
    pub fn apply(&self, base: GameConfig) -> GameConfig {
        GameConfig {
            fps: self.fps.unwrap_or(base.fps),
            profiles: self.profiles.unwrap_or(base.profiles),
            ..base
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "flappy_duck", "FlappyDuck")
}

pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().join("settings.json"))
}

/// Directory for the log file; created on demand.
pub fn data_dir() -> Option<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Missing file means defaults; a malformed one is logged and ignored.
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(s) => match Settings::parse(&s) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("ignoring malformed {}: {e}", path.display());
                Settings::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            log::warn!("could not read {}: {e}", path.display());
            Settings::default()
        }
    }
}
