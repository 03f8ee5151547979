use thiserror::Error;

use crate::entities::Level;

/// Configuration faults caught by `GameConfig::validate` before a session
/// can start. The running simulation itself has no error paths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{level:?}: pipe gap {gap} leaves no room to spawn (max {max} for this screen)")]
    GapTooLarge { level: Level, gap: f32, max: f32 },

    #[error("{level:?}: pipe gap must be positive, got {gap}")]
    NonPositiveGap { level: Level, gap: f32 },

    #[error("{level:?}: flap strength must be negative (upward), got {strength}")]
    NonNegativeFlap { level: Level, strength: f32 },

    #[error("{level:?}: pipe frequency must be at least one tick")]
    ZeroPipeFrequency { level: Level },

    #[error("{level:?}: pipe speed must be positive, got {speed}")]
    NonPositiveSpeed { level: Level, speed: f32 },

    #[error("tick rate must be at least 1 per second")]
    ZeroTickRate,

    #[error("screen {width}x{height} is too small for the duck")]
    ScreenTooSmall { width: f32, height: f32 },
}
