//! Countdown driver backed by a gloo interval timer.

use crate::{Msg, TimerWidget};
use gloo_timers::callback::Interval;
use session_clock::Scheduler;
use yew::html::Scope;

/// Posts a `Msg::Tick` to the widget every period.
///
/// Dropping the returned `Interval` clears it, which is how the clock
/// cancels the driver on pause, reset, phase switch and unmount.
pub struct IntervalScheduler {
    link: Scope<TimerWidget>,
}

impl IntervalScheduler {
    pub fn new(link: Scope<TimerWidget>) -> Self {
        Self { link }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&mut self, period_ms: u32) -> Interval {
        let link = self.link.clone();
        Interval::new(period_ms, move || link.send_message(Msg::Tick))
    }
}
