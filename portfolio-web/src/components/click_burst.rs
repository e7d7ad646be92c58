//! Click burst: particles radiating out of an element.

use leptos::task::spawn_local;
use lib_core::model::Container;
use web_sys::Element;

use crate::services::effects::{anchor_rect, animate, seeded_rng, DomContainer};
use crate::state::effects::EffectsContext;

/// Spawn one burst centred on `anchor`. Nodes go to `document.body` and each
/// removes itself once its flight completes.
pub fn emit_click_burst(effects: EffectsContext, anchor: Option<Element>) {
    let Some(body) = DomContainer::body() else {
        log::debug!("No document body, skipping burst");
        return;
    };
    let config = effects.config().burst;
    let arena = effects.bursts();
    let mut rng = seeded_rng();

    let spawned = arena
        .borrow_mut()
        .emit(&body, anchor.as_ref().map(anchor_rect), &config, &mut rng);
    let particles = match spawned {
        Ok(particles) => particles,
        Err(err) => {
            log::warn!("Click burst failed: {}", err);
            return;
        }
    };
    log::debug!("Burst of {} particles, {} on screen", particles.len(), body.len());

    for (particle, node) in particles {
        let spec = particle.animation(&config);
        let arena = arena.clone();
        let body = body.clone();
        spawn_local(async move {
            if let Err(err) = animate(&node, &spec).await {
                log::debug!("Burst particle animation interrupted: {}", err);
            }
            if let Err(err) = arena.borrow_mut().retire(&body, particle.id) {
                log::warn!("Failed to remove burst particle: {}", err);
            }
        });
    }
}
