//! Starfield background
//!
//! Fills its container with twinkling stars once the node is mounted.

use leptos::html::Div;
use leptos::prelude::*;
use lib_core::model::StarfieldGenerator;

use crate::services::effects::{seeded_rng, DomContainer};
use crate::state::effects::use_effects_context;
use crate::utils::constants::STARFIELD_ID;

#[component]
pub fn Starfield() -> impl IntoView {
    let effects = use_effects_context();
    let container_ref = NodeRef::<Div>::new();

    Effect::new(move |_| {
        let container = container_ref.get().map(DomContainer::new);
        let mut rng = seeded_rng();
        let result = effects.with_config(|config| {
            StarfieldGenerator::new(&config.starfield).populate(container.as_ref(), &mut rng)
        });
        if let Err(err) = result {
            log::warn!("Starfield not rendered: {}", err);
        }
    });

    view! {
        <div class="starfield" id=STARFIELD_ID node_ref=container_ref></div>
    }
}
