//! Core of the 25 + 5 clock: lengths, the session/break state machine and
//! the `mm:ss` formatter. Nothing in here touches the browser; the yew app
//! plugs its interval timer and audio element in through [`clock::Scheduler`]
//! and [`clock::AlertCue`].

pub mod clock;
pub mod config;

pub use clock::{
    AlertCue, ClockSnapshot, ClockState, Lengths, Phase, Scheduler, SessionClock, TickOutcome,
};

/// Format a duration in milliseconds as `mm:ss`.
///
/// Minutes are zero-padded to two digits but never truncated, so 100
/// minutes and up simply render wider.
pub fn format_clock(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = ms / 1_000 - minutes * 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_minutes() {
        assert_eq!(format_clock(1_500_000), "25:00");
        assert_eq!(format_clock(3_000_000), "50:00");
        assert_eq!(format_clock(3_600_000), "60:00");
    }

    #[test]
    fn formats_seconds_and_zero() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59_000), "00:59");
        assert_eq!(format_clock(61_000), "01:01");
        assert_eq!(format_clock(1_499_000), "24:59");
    }

    #[test]
    fn drops_sub_second_remainder() {
        assert_eq!(format_clock(999), "00:00");
        assert_eq!(format_clock(59_999), "00:59");
    }

    #[test]
    fn wide_minutes_pass_through() {
        assert_eq!(format_clock(100 * 60_000), "100:00");
        assert_eq!(format_clock(125 * 60_000 + 5_000), "125:05");
    }
}
