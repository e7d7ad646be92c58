//! Typed hero subtitle

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::model::{StopFlag, Typewriter, TypewriterTick};

use crate::state::effects::use_effects_context;

/// Reveal the configured text one character per tick.
///
/// The loop belongs to the calling component: it restarts only when that
/// component remounts and is cancelled when it is cleaned up.
pub fn use_typewriter() -> ReadSignal<String> {
    let config = use_effects_context().config().typewriter;
    let (typed, set_typed) = signal(String::new());
    let stop = StopFlag::new();

    let cleanup_stop = stop.clone();
    on_cleanup(move || cleanup_stop.stop());

    spawn_local(async move {
        let mut writer = Typewriter::new(config.text);
        loop {
            TimeoutFuture::new(config.tick_ms).await;
            if stop.is_stopped() {
                break;
            }
            match writer.tick() {
                TypewriterTick::Revealed => set_typed.set(writer.visible().to_string()),
                TypewriterTick::Finished => break,
            }
        }
        log::debug!("Typewriter stopped at {} chars", writer.visible().chars().count());
    });

    typed
}
