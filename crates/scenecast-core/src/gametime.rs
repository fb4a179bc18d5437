//! The `M:SS` game-clock format.
//!
//! Build-order steps and the overlay's clock both use minutes and
//! zero-padded seconds (`4:07`). Minutes are unbounded; seconds wrap at
//! sixty.

/// Errors from parsing an `M:SS` string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameTimeError {
    /// No `:` separator in the input.
    #[error("expected 'minutes:seconds', got '{input}'")]
    MissingSeparator { input: String },

    /// The minutes part is not a number.
    #[error("invalid minutes in '{input}'")]
    InvalidMinutes { input: String },

    /// The seconds part is not a number.
    #[error("invalid seconds in '{input}'")]
    InvalidSeconds { input: String },

    /// The seconds part is sixty or more.
    #[error("seconds out of range in '{input}'")]
    SecondsOutOfRange { input: String },
}

/// Render a game clock value (seconds) as `M:SS`. Fractional seconds
/// are truncated; the clock never goes negative.
pub fn format_game_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Parse an `M:SS` string back into whole seconds.
pub fn parse_game_time(input: &str) -> Result<u32, GameTimeError> {
    let (minutes, seconds) = input
        .split_once(':')
        .ok_or_else(|| GameTimeError::MissingSeparator {
            input: input.to_string(),
        })?;
    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| GameTimeError::InvalidMinutes {
            input: input.to_string(),
        })?;
    let seconds: u32 = seconds
        .trim()
        .parse()
        .map_err(|_| GameTimeError::InvalidSeconds {
            input: input.to_string(),
        })?;
    if seconds >= 60 {
        return Err(GameTimeError::SecondsOutOfRange {
            input: input.to_string(),
        });
    }
    Ok(minutes * 60 + seconds)
}

// ===========================================================================
// Tests
// ===========================================================================
