//! Floating particles
//!
//! Each particle drifts across the viewport, fades out, reappears somewhere
//! else and goes again until the component is torn down. Teardown raises the
//! stop flag; a watcher task then cancels every in-flight animation so the
//! drift loops end at once instead of when their current flight lands.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::config::ParticleConfig;
use lib_core::model::{cancel_flights, FlightSlot, ParticleMotion, ParticleSystem, StopFlag};
use web_sys::{Animation, HtmlElement};

use crate::services::effects::{
    finished, place, seeded_rng, start_animation, viewport, DomContainer,
};
use crate::state::effects::use_effects_context;
use crate::utils::constants::{PARTICLES_ID, STOP_POLL_MS};

#[component]
pub fn Particles() -> impl IntoView {
    let effects = use_effects_context();
    let container_ref = NodeRef::<Div>::new();
    let stop = StopFlag::new();

    let cleanup_stop = stop.clone();
    on_cleanup(move || cleanup_stop.stop());

    Effect::new(move |_| {
        let container = container_ref.get().map(DomContainer::new);
        let config = effects.config().particles;
        let mut rng = seeded_rng();

        let system = ParticleSystem::new(&config);
        let spawned = match system.populate(container.as_ref(), viewport(), &stop, &mut rng) {
            Ok(spawned) => spawned,
            Err(err) => {
                log::warn!("Particles not rendered: {}", err);
                return;
            }
        };
        if spawned.is_empty() {
            return;
        }

        let mut slots = Vec::with_capacity(spawned.len());
        for (node, motion) in spawned {
            let slot = FlightSlot::new();
            slots.push(slot.clone());
            spawn_local(drift(node, motion, config.clone(), slot));
        }
        spawn_local(cancel_on_stop(stop.clone(), slots));
    });

    view! {
        <div class="particles" id=PARTICLES_ID node_ref=container_ref></div>
    }
}

async fn drift(
    node: HtmlElement,
    mut motion: ParticleMotion,
    config: ParticleConfig,
    slot: FlightSlot<Animation>,
) {
    let mut rng = seeded_rng();
    while let Some(flight) = motion.next_flight(&config, viewport(), &mut rng) {
        // A repopulated container detaches the previous batch.
        if !node.is_connected() {
            break;
        }
        let animation = match start_animation(&node, &flight) {
            Ok(animation) => animation,
            Err(err) => {
                log::warn!("Particle flight not started: {}", err);
                break;
            }
        };
        slot.begin(animation.clone());
        let landed = finished(&animation).await;
        slot.land();
        if let Err(err) = landed {
            log::debug!("Particle flight cancelled: {}", err);
            break;
        }

        let Some(position) = motion.complete(viewport(), &mut rng) else {
            break;
        };
        if let Err(err) = place(&node, position) {
            log::warn!("Failed to reposition particle: {}", err);
            break;
        }
    }
    log::debug!("Particle loop ended after {} cycles", motion.cycles());
}

/// Cancel whatever is still flying once `stop` is raised.
async fn cancel_on_stop(stop: StopFlag, slots: Vec<FlightSlot<Animation>>) {
    while !stop.is_stopped() {
        TimeoutFuture::new(STOP_POLL_MS).await;
    }
    let cancelled = cancel_flights(&slots, |animation| animation.cancel());
    log::debug!("Cancelled {} particle flights on teardown", cancelled);
}
