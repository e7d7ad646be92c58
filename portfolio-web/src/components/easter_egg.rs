//! Easter-egg modal opened from the hero title

use leptos::prelude::*;

#[component]
pub fn EasterEggModal(open: RwSignal<bool>) -> impl IntoView {
    let close = move |_| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="modal" style="display: block;">
                <div class="modal-content">
                    <span class="modal-close" on:click=close>"×"</span>
                    <h3>"🎉 You found an Easter Egg! 🎉"</h3>
                    <p>"Congratulations, fellow code explorer! You've discovered one of my hidden secrets."</p>
                    <p>"Here's a fun fact: this portfolio was built in Rust, compiled to WebAssembly, with zero templates!"</p>
                    <button class="btn btn-primary" on:click=close>"Awesome!"</button>
                </div>
            </div>
        </Show>
    }
}
