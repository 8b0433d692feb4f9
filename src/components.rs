//! Pure Yew view components for the clock UI.
//!
//! These render from props only; all state lives in the widget.

use yew::prelude::*;

/// Label, value and -/+ buttons for one of the two lengths.
///
/// `id` is the element id prefix, producing `{id}-label`, `{id}-decrement`,
/// `{id}-length` and `{id}-increment`.
#[derive(Properties, PartialEq)]
pub struct LengthControlProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub minutes: u32,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
}

#[function_component(LengthControl)]
pub fn length_control(props: &LengthControlProps) -> Html {
    let id = &props.id;
    html! {
        <div class="length-control">
            <div id={format!("{}-label", id)} class="length-label">
                { &*props.label }
            </div>
            <div class="length-buttons">
                <button id={format!("{}-decrement", id)}
                    type="button"
                    onclick={props.on_decrement.clone()}
                >
                    { "⮟" }
                </button>
                <div id={format!("{}-length", id)} class="length-value">
                    { props.minutes }
                </div>
                <button id={format!("{}-increment", id)}
                    type="button"
                    onclick={props.on_increment.clone()}
                >
                    { "⮝" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub label: &'static str,
    pub time_left: String,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div class="timer">
            <div id="timer-label">{ props.label }</div>
            <div id="time-left">{ props.time_left.clone() }</div>
        </div>
    }
}

/// Start/pause toggle and reset buttons.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub running: bool,
    pub on_start_stop: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    html! {
        <div class="controls">
            <button id="start_stop" type="button" onclick={props.on_start_stop.clone()}>
                { if props.running { "⏸" } else { "⯈" } }
            </button>
            <button id="reset" type="button" onclick={props.on_reset.clone()}>
                { "↻" }
            </button>
        </div>
    }
}
