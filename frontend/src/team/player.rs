//! Playback control over the embedded team video.
//!
//! The YouTube IFrame API announces itself through a global
//! `onYouTubeIframeAPIReady` hook. That hook is only touched here; callers
//! hand [`load_youtube_player`] a callback and get a [`VideoPlayer`] back once
//! the player can take commands.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Object, Reflect};
use yew::Callback;

use crate::config;

pub trait VideoPlayer {
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool);
    fn play(&self);
    fn pause(&self);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player")]
    fn new(element_id: &str, options: &JsValue) -> YtPlayer;

    #[wasm_bindgen(method, js_class = "Player", js_name = getCurrentTime)]
    fn get_current_time(this: &YtPlayer) -> f64;

    #[wasm_bindgen(method, js_class = "Player", js_name = seekTo)]
    fn seek_to(this: &YtPlayer, seconds: f64, allow_seek_ahead: bool);

    #[wasm_bindgen(method, js_class = "Player", js_name = playVideo)]
    fn play_video(this: &YtPlayer);

    #[wasm_bindgen(method, js_class = "Player", js_name = pauseVideo)]
    fn pause_video(this: &YtPlayer);
}

pub struct YouTubePlayer {
    inner: YtPlayer,
}

impl VideoPlayer for YouTubePlayer {
    fn current_time(&self) -> f64 {
        self.inner.get_current_time()
    }

    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
        self.inner.seek_to(seconds, allow_seek_ahead);
    }

    fn play(&self) {
        self.inner.play_video();
    }

    fn pause(&self) {
        self.inner.pause_video();
    }
}

fn api_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("YT"))
        .and_then(|yt| Reflect::get(&yt, &JsValue::from_str("Player")))
        .map(|player| player.is_function())
        .unwrap_or(false)
}

fn inject_api_script() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document
        .query_selector(&format!("script[src=\"{}\"]", config::YOUTUBE_IFRAME_API))?
        .is_some()
    {
        return Ok(());
    }
    let script: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_src(config::YOUTUBE_IFRAME_API);
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&script)?;
    Ok(())
}

// Wraps the iframe `element_id` in a player and reports it once ready.
fn attach(element_id: &str, on_ready: Callback<Rc<dyn VideoPlayer>>) -> Result<(), JsValue> {
    let events = Object::new();
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("events"), &events)?;

    // YT.Player hands itself to onReady through event.target
    let ready = Closure::once_into_js(move |event: JsValue| {
        match Reflect::get(&event, &JsValue::from_str("target")) {
            Ok(target) if !target.is_undefined() => {
                log::info!("Team video player ready");
                let player: Rc<dyn VideoPlayer> = Rc::new(YouTubePlayer { inner: target.unchecked_into() });
                on_ready.emit(player);
            }
            _ => gloo_console::error!("YouTube onReady fired without a player"),
        }
    });
    Reflect::set(&events, &JsValue::from_str("onReady"), &ready)?;

    // The constructed player is also delivered through onReady
    let _ = YtPlayer::new(element_id, &options);
    Ok(())
}

/// Load the IFrame API if needed and bind the iframe with id `element_id`.
/// `on_ready` fires once; until then the caller has no player to command.
pub fn load_youtube_player(element_id: &'static str, on_ready: Callback<Rc<dyn VideoPlayer>>) {
    let result = if api_loaded() {
        attach(element_id, on_ready)
    } else {
        let hook = Closure::once_into_js(move || {
            if let Err(e) = attach(element_id, on_ready) {
                gloo_console::error!("Failed to bind team video:", e);
            }
        });
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|window| Reflect::set(&window, &JsValue::from_str("onYouTubeIframeAPIReady"), &hook))
            .and_then(|_| inject_api_script())
    };

    if let Err(e) = result {
        gloo_console::error!("Failed to load YouTube IFrame API:", e);
    }
}
