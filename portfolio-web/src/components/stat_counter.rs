//! Animated statistic counters

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::model::{CounterTick, StatCounter, StopFlag};

use crate::state::effects::use_effects_context;
use crate::utils::content::Statistic;

/// Count from 0 to `target` on a timer owned by the calling component.
fn use_stat_counter(target: u32) -> ReadSignal<u32> {
    let config = use_effects_context().config().counters;
    let (value, set_value) = signal(0u32);
    let stop = StopFlag::new();

    let cleanup_stop = stop.clone();
    on_cleanup(move || cleanup_stop.stop());

    spawn_local(async move {
        let mut counter = StatCounter::new(target, config.steps);
        loop {
            TimeoutFuture::new(config.tick_ms).await;
            if stop.is_stopped() {
                log::debug!("Counter to {} cancelled", target);
                break;
            }
            let tick = counter.tick();
            set_value.set(tick.value());
            if let CounterTick::Finished(_) = tick {
                break;
            }
        }
    });

    value
}

#[component]
pub fn StatCard(stat: &'static Statistic) -> impl IntoView {
    let value = use_stat_counter(stat.target);

    view! {
        <div class="stat-card">
            <span class="stat-icon">{stat.icon}</span>
            <span class="stat-number" data-target=stat.target.to_string()>{move || value.get()}</span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}
