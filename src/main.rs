//! Main module for the 25 + 5 clock using Yew.
//! Wires the clock state machine to the interval driver, the beep element
//! and the view components.

use log::{debug, info, warn};
use session_clock::config::{BEEP_ELEMENT_ID, BEEP_SRC, LOG_LEVEL, TITLE};
use session_clock::{Phase, SessionClock, TickOutcome};
use yew::prelude::*;

mod audio;
mod components;
mod driver;
mod logging;

use audio::BeepCue;
use components::{Controls, LengthControl, TimerDisplay};
use driver::IntervalScheduler;

/// Everything that can change the clock: clicks and driver ticks.
pub enum Msg {
    Increment(Phase),
    Decrement(Phase),
    StartStop,
    Reset,
    Tick,
}

/// The timer widget. Owns the clock, which in turn owns the live interval.
pub struct TimerWidget {
    clock: SessionClock<IntervalScheduler, BeepCue>,
    beep: NodeRef,
}

impl TimerWidget {
    fn log_snapshot(&self) {
        match serde_json::to_string(&self.clock.snapshot()) {
            Ok(json) => debug!("Clock {}", json),
            Err(e) => warn!("Failed to serialize clock snapshot: {}", e),
        }
    }
}

impl Component for TimerWidget {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let beep = NodeRef::default();
        let clock = SessionClock::new(
            IntervalScheduler::new(ctx.link().clone()),
            BeepCue::new(beep.clone()),
        );
        Self { clock, beep }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Increment(phase) => self.clock.increment(phase),
            Msg::Decrement(phase) => self.clock.decrement(phase),
            Msg::StartStop => self.clock.toggle(),
            Msg::Reset => self.clock.reset(),
            Msg::Tick => match self.clock.tick() {
                // Stale tick from a driver cancelled mid-dispatch.
                TickOutcome::Idle => return false,
                TickOutcome::Expired(phase) => info!("{} reached 00:00", phase),
                TickOutcome::Counted | TickOutcome::Switched { .. } => {}
            },
        }
        self.log_snapshot();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let lengths = self.clock.lengths();

        html! {
            <div class="clock">
                <h1>{ TITLE }</h1>
                <div class="length-controls">
                    <LengthControl
                        id="break"
                        label="Break Length"
                        minutes={lengths.break_minutes()}
                        on_decrement={link.callback(|_: MouseEvent| Msg::Decrement(Phase::Break))}
                        on_increment={link.callback(|_: MouseEvent| Msg::Increment(Phase::Break))}
                    />
                    <LengthControl
                        id="session"
                        label="Session Length"
                        minutes={lengths.session_minutes()}
                        on_decrement={link.callback(|_: MouseEvent| Msg::Decrement(Phase::Session))}
                        on_increment={link.callback(|_: MouseEvent| Msg::Increment(Phase::Session))}
                    />
                </div>
                <TimerDisplay
                    label={self.clock.phase_label()}
                    time_left={self.clock.display()}
                />
                <Controls
                    running={self.clock.is_running()}
                    on_start_stop={link.callback(|_: MouseEvent| Msg::StartStop)}
                    on_reset={link.callback(|_: MouseEvent| Msg::Reset)}
                />
                <audio id={BEEP_ELEMENT_ID} ref={self.beep.clone()} src={BEEP_SRC} preload="auto" />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.clock.shutdown();
    }
}

/// App wrapper around the single timer widget.
#[function_component]
pub fn App() -> Html {
    html! {
        <TimerWidget />
    }
}

/// Entry point: installs the panic hook and logger, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    info!("Starting {}", TITLE);
    yew::Renderer::<App>::new().render();
}
