use std::fs;
use std::path::PathBuf;

use flappy_duck::config::*;
use flappy_duck::entities::Level;
use flappy_duck::error::ConfigError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flappy_duck_{}_{}", std::process::id(), name))
}

// ── Profiles ──────────────────────────────────────────────────────────────────

#[test]
fn presets_match_difficulty_table() {
    let config = GameConfig::default();
    let easy = config.profile(Level::Easy);
    assert_eq!(easy.gravity, 0.5);
    assert_eq!(easy.flap_strength, -10.0);
    assert_eq!(easy.pipe_gap, 250.0);
    assert_eq!(easy.pipe_speed, 3.0);
    assert_eq!(easy.pipe_frequency, 90);

    assert_eq!(config.profile(Level::Medium), &DifficultyProfile::MEDIUM);
    assert_eq!(config.profile(Level::Hard).pipe_frequency, 60);
}

#[test]
fn default_config_is_valid() {
    let config = GameConfig::default();
    assert_eq!(config.screen_width, 800.0);
    assert_eq!(config.screen_height, 600.0);
    assert_eq!(config.fps, 60);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn gap_offset_range_keeps_margins() {
    let config = GameConfig::default();
    assert_eq!(config.gap_offset_range(&DifficultyProfile::EASY), (100, 250));
    assert_eq!(config.gap_offset_range(&DifficultyProfile::MEDIUM), (100, 300));
    assert_eq!(config.gap_offset_range(&DifficultyProfile::HARD), (100, 340));
    assert_eq!(config.ground_line(), 560.0);
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn oversized_gap_is_rejected() {
    let mut config = GameConfig::default();
    config.profiles.medium.pipe_gap = 401.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::GapTooLarge {
            level: Level::Medium,
            gap: 401.0,
            max: 400.0,
        })
    );
}

#[test]
fn largest_gap_leaves_single_offset() {
    let mut config = GameConfig::default();
    config.profiles.hard.pipe_gap = 400.0;
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.gap_offset_range(&config.profiles.hard), (100, 100));
}

#[test]
fn zero_pipe_frequency_is_rejected() {
    let mut config = GameConfig::default();
    config.profiles.easy.pipe_frequency = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroPipeFrequency { level: Level::Easy })
    );
}

#[test]
fn non_positive_speed_is_rejected() {
    let mut config = GameConfig::default();
    config.profiles.hard.pipe_speed = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveSpeed { level: Level::Hard, .. })
    ));
}

#[test]
fn non_positive_gap_is_rejected() {
    let mut config = GameConfig::default();
    config.profiles.easy.pipe_gap = 0.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveGap {
            level: Level::Easy,
            gap: 0.0,
        })
    );
}

#[test]
fn downward_or_zero_flap_is_rejected() {
    let mut config = GameConfig::default();
    config.profiles.medium.flap_strength = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonNegativeFlap { level: Level::Medium, .. })
    ));

    config.profiles.medium.flap_strength = 4.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonNegativeFlap {
            level: Level::Medium,
            strength: 4.0,
        })
    );
}

#[test]
fn zero_tick_rate_is_rejected() {
    let config = GameConfig {
        fps: 0,
        ..GameConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
}

#[test]
fn tiny_screen_is_rejected() {
    let config = GameConfig {
        screen_width: 120.0,
        ..GameConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ScreenTooSmall { .. })
    ));
}

#[test]
fn config_error_messages_name_the_level() {
    let err = ConfigError::ZeroPipeFrequency { level: Level::Hard };
    assert!(err.to_string().contains("Hard"));
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn empty_settings_keep_defaults() {
    let settings = Settings::parse("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.apply(GameConfig::default()), GameConfig::default());
}

#[test]
fn settings_override_fps_and_seed() {
    let settings = Settings::parse(r#"{ "fps": 30, "seed": 7 }"#).unwrap();
    assert_eq!(settings.seed, Some(7));
    let config = settings.apply(GameConfig::default());
    assert_eq!(config.fps, 30);
    assert_eq!(config.profiles, ProfileTable::default());
    assert_eq!(config.screen_height, 600.0);
}

#[test]
fn settings_can_replace_profile_table() {
    let json = r#"{
        "profiles": {
            "easy":   { "gravity": 0.4, "flap_strength": -9.0,  "pipe_gap": 300.0, "pipe_speed": 2.0, "pipe_frequency": 120 },
            "medium": { "gravity": 0.7, "flap_strength": -11.0, "pipe_gap": 200.0, "pipe_speed": 5.0, "pipe_frequency": 70 },
            "hard":   { "gravity": 1.0, "flap_strength": -13.0, "pipe_gap": 150.0, "pipe_speed": 8.0, "pipe_frequency": 50 }
        }
    }"#;
    let config = Settings::parse(json).unwrap().apply(GameConfig::default());
    assert_eq!(config.profile(Level::Easy).pipe_frequency, 120);
    assert_eq!(config.profile(Level::Hard).pipe_gap, 150.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn settings_with_bad_profile_fail_validation() {
    let json = r#"{
        "profiles": {
            "easy":   { "gravity": 0.5, "flap_strength": -10.0, "pipe_gap": 450.0, "pipe_speed": 3.0, "pipe_frequency": 90 },
            "medium": { "gravity": 0.7, "flap_strength": -11.0, "pipe_gap": 200.0, "pipe_speed": 5.0, "pipe_frequency": 70 },
            "hard":   { "gravity": 0.9, "flap_strength": -12.0, "pipe_gap": 160.0, "pipe_speed": 7.0, "pipe_frequency": 60 }
        }
    }"#;
    let config = Settings::parse(json).unwrap().apply(GameConfig::default());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::GapTooLarge { level: Level::Easy, .. })
    ));
}

#[test]
fn settings_with_negative_gap_fail_validation() {
    // A negative gap would put the bottom segment above the top one
    let json = r#"{
        "profiles": {
            "easy":   { "gravity": 0.5, "flap_strength": -10.0, "pipe_gap": 250.0, "pipe_speed": 3.0, "pipe_frequency": 90 },
            "medium": { "gravity": 0.7, "flap_strength": -11.0, "pipe_gap": 200.0, "pipe_speed": 5.0, "pipe_frequency": 70 },
            "hard":   { "gravity": 0.9, "flap_strength": -12.0, "pipe_gap": -80.0, "pipe_speed": 7.0, "pipe_frequency": 60 }
        }
    }"#;
    let config = Settings::parse(json).unwrap().apply(GameConfig::default());
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveGap {
            level: Level::Hard,
            gap: -80.0,
        })
    );
}

#[test]
fn malformed_settings_fail_to_parse() {
    assert!(Settings::parse("{ fps: ").is_err());
    assert!(Settings::parse(r#"{ "fps": "fast" }"#).is_err());
}

#[test]
fn load_settings_missing_file_gives_defaults() {
    let path = temp_path("missing.json");
    let _ = fs::remove_file(&path);
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn load_settings_reads_file() {
    let path = temp_path("good.json");
    fs::write(&path, r#"{ "seed": 99 }"#).unwrap();
    let settings = load_settings(&path);
    let _ = fs::remove_file(&path);
    assert_eq!(settings.seed, Some(99));
}

#[test]
fn load_settings_ignores_malformed_file() {
    let path = temp_path("bad.json");
    fs::write(&path, "not json at all").unwrap();
    let settings = load_settings(&path);
    let _ = fs::remove_file(&path);
    assert_eq!(settings, Settings::default());
}
