//! Application-level configuration constants.

// Default lengths, in minutes
pub const DEFAULT_SESSION_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

// Min/Max limits for the length controls
pub const MIN_LENGTH_MINUTES: u32 = 1;
pub const MAX_LENGTH_MINUTES: u32 = 60;

// Countdown driver
pub const TICK_MS: u32 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;

// Alert cue
pub const BEEP_ELEMENT_ID: &str = "beep";
pub const BEEP_SRC: &str = "https://raw.githubusercontent.com/freeCodeCamp/cdn/master/build/testable-projects-fcc/audio/BeepSound.wav";

// UI constants
pub const TITLE: &str = "25 + 5 Clock";
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
