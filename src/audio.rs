//! Alert cue backed by the `<audio id="beep">` element.

use log::warn;
use session_clock::AlertCue;
use std::fmt;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::NodeRef;

/// Failures talking to the audio element. Never shown to the user.
#[derive(Debug)]
pub enum AlertError {
    MissingElement,
    Pause(String),
    Play(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::MissingElement => write!(f, "Beep audio element is not mounted"),
            AlertError::Pause(reason) => write!(f, "Failed to pause beep: {}", reason),
            AlertError::Play(reason) => write!(f, "Failed to play beep: {}", reason),
        }
    }
}

impl std::error::Error for AlertError {}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Plays and rewinds the beep through the element behind `node`.
#[derive(Clone, Default)]
pub struct BeepCue {
    node: NodeRef,
}

impl BeepCue {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }

    fn element(&self) -> Result<HtmlAudioElement, AlertError> {
        self.node
            .cast::<HtmlAudioElement>()
            .ok_or(AlertError::MissingElement)
    }

    fn try_rewind(&self) -> Result<(), AlertError> {
        let audio = self.element()?;
        audio
            .pause()
            .map_err(|e| AlertError::Pause(describe(&e)))?;
        audio.set_current_time(0.0);
        Ok(())
    }

    fn try_play(&self) -> Result<(), AlertError> {
        let audio = self.element()?;
        let promise: js_sys::Promise = audio
            .play()
            .map_err(|e| AlertError::Play(describe(&e)))?;

        // Autoplay policy rejections arrive on the promise, not the call.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("{}", AlertError::Play(describe(&e)));
            }
        });
        Ok(())
    }
}

impl AlertCue for BeepCue {
    fn rewind(&mut self) {
        if let Err(e) = self.try_rewind() {
            warn!("{}", e);
        }
    }

    fn play(&mut self) {
        if let Err(e) = self.try_play() {
            warn!("{}", e);
        }
    }
}
