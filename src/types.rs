//! Core types shared across the engine.
//! This module contains pure data types and constants with no external dependencies.

/// Fixed render/update tick used by frontends (milliseconds).
pub const TICK_MS: u32 = 16;

/// Countdown before play starts: 3 ticks of ~1s each, then a short "go" flourish.
pub const COUNTDOWN_TICKS: u8 = 3;
pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const GO_FLOURISH_MS: u32 = 600;

/// Player-initiated swap animation duration (milliseconds).
pub const SWAP_DURATION_MS: u32 = 250;

/// Cosmetic shuffle script timing: short swaps with a fixed inter-swap gap.
pub const SHUFFLE_SWAP_MS: u32 = 50;
pub const SHUFFLE_GAP_MS: u32 = 60;
/// Scripted swaps per tile in the shuffle animation.
pub const SHUFFLE_PAIRS_PER_TILE: usize = 2;
/// Upper bound on the shuffle script length (5x5 grid at 2 pairs per tile).
pub const SHUFFLE_SCRIPT_MAX: usize = 50;

/// Ghost-preview window shown per hint; restarted, never stacked.
pub const HINT_WINDOW_MS: u32 = 2500;

/// Pause between a timed-mode solve and the next puzzle.
pub const STAGE_CLEARED_PAUSE_MS: u32 = 1500;

/// Timed-challenge session countdown granularity.
pub const SESSION_TICK_MS: u32 = 1000;
pub const DEFAULT_TIMED_MINUTES: u32 = 3;

/// Score formula: max(0, N^4 * 100 - T_ms / 50 - M * N * 10).
pub const SCORE_BASE_FACTOR: i64 = 100;
pub const SCORE_TIME_DIVISOR_MS: i64 = 50;
pub const SCORE_MOVE_FACTOR: i64 = 10;

/// Leaderboard: top 5 per difficulty, persisted whole under one key.
pub const LEADERBOARD_CAP: usize = 5;
pub const LEADERBOARD_KEY: &str = "tileswap.leaderboard.v1";

/// Largest supported grid (5x5).
pub const MAX_TILE_COUNT: usize = 25;

/// Requested capture resolution for the video source collaborator.
pub const CAPTURE_WIDTH: u32 = 1280;
pub const CAPTURE_HEIGHT: u32 = 720;

/// Grid side length for a session. Fixed once play starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    Three,
    Four,
    Five,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Four, GridSize::Five];

    /// Side length N.
    pub fn n(&self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    /// Total tile count N^2.
    pub fn tile_count(&self) -> usize {
        self.n() * self.n()
    }

    /// Hints granted per fresh puzzle: smaller grids get more.
    pub fn hint_budget(&self) -> u8 {
        match self {
            GridSize::Three => 5,
            GridSize::Four => 4,
            GridSize::Five => 3,
        }
    }

    /// Leaderboard bucket key in the persisted payload.
    pub fn bucket_key(&self) -> &'static str {
        match self {
            GridSize::Three => "3",
            GridSize::Four => "4",
            GridSize::Five => "5",
        }
    }

    pub fn from_n(n: usize) -> Option<Self> {
        match n {
            3 => Some(GridSize::Three),
            4 => Some(GridSize::Four),
            5 => Some(GridSize::Five),
            _ => None,
        }
    }
}

/// Top-level game phase. Exactly one value at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Countdown,
    Playing,
    Won,
    TimesUp,
    StageCleared,
    Error,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Countdown => "countdown",
            GamePhase::Playing => "playing",
            GamePhase::Won => "won",
            GamePhase::TimesUp => "times-up",
            GamePhase::StageCleared => "stage-cleared",
            GamePhase::Error => "error",
        }
    }
}

/// Game variant: single scored puzzle, or a clock-bounded multi-puzzle run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Classic,
    Timed,
}

/// Keyboard focus movement. Clamped at grid edges, no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Classified video-capture failure, mapped to a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFailure {
    NotFound,
    PermissionDenied,
    DeviceBusy,
    Unknown,
}

impl CaptureFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            CaptureFailure::NotFound => "No camera found. Connect one and try again.",
            CaptureFailure::PermissionDenied => {
                "Camera access was denied. Allow access and try again."
            }
            CaptureFailure::DeviceBusy => "The camera is in use by another application.",
            CaptureFailure::Unknown => "The camera could not be started.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureFailure::NotFound => "not-found",
            CaptureFailure::PermissionDenied => "permission-denied",
            CaptureFailure::DeviceBusy => "device-busy",
            CaptureFailure::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_tables() {
        assert_eq!(GridSize::Three.tile_count(), 9);
        assert_eq!(GridSize::Four.tile_count(), 16);
        assert_eq!(GridSize::Five.tile_count(), 25);

        assert_eq!(GridSize::Three.hint_budget(), 5);
        assert_eq!(GridSize::Four.hint_budget(), 4);
        assert_eq!(GridSize::Five.hint_budget(), 3);
    }

    #[test]
    fn test_grid_size_round_trip() {
        for size in GridSize::ALL {
            assert_eq!(GridSize::from_n(size.n()), Some(size));
        }
        assert_eq!(GridSize::from_n(6), None);
    }

    #[test]
    fn test_shuffle_script_max_covers_largest_grid() {
        assert!(GridSize::Five.tile_count() * SHUFFLE_PAIRS_PER_TILE <= SHUFFLE_SCRIPT_MAX);
    }
}
