//! Home section: hero title, typed subtitle and the two call-to-action buttons.

use leptos::html::H1;
use leptos::prelude::*;
use lib_core::model::Section;
use web_sys::Element;

use crate::components::{download_resume, emit_click_burst};
use crate::state::effects::use_effects_context;
use crate::state::navigation::use_navigation_context;

const FLOATING_BLOCKS: [(&str, &str); 4] = [("0s", "⚡"), ("1s", "🔧"), ("2s", "💻"), ("3s", "🚀")];

/// `typed` is owned by the shell so the subtitle does not retype on every
/// visit to this section.
#[component]
pub fn HomePage(typed: ReadSignal<String>, easter_egg: RwSignal<bool>) -> impl IntoView {
    let effects = use_effects_context();
    let navigation = use_navigation_context();
    let title_ref = NodeRef::<H1>::new();

    let trigger_easter_egg = move |_| {
        easter_egg.set(true);
        emit_click_burst(effects, title_ref.get_untracked().map(Element::from));
    };

    view! {
        <section id="home" class="section active">
            <div class="hero-container">
                <div class="hero-content">
                    <div class="glitch-wrapper">
                        <h1
                            class="hero-title glitch"
                            data-text="DIGITAL REBEL"
                            node_ref=title_ref
                            on:click=trigger_easter_egg
                        >
                            "DIGITAL REBEL"
                        </h1>
                    </div>
                    <div class="hero-subtitle">
                        <span class="typing-text">{move || typed.get()}</span>
                        <span class="cursor">"|"</span>
                    </div>
                    <div class="hero-description">
                        <p>"Building the future one pixel at a time 🚀"</p>
                        <p class="subtitle">"Where creativity meets code in a galaxy far, far away..."</p>
                    </div>
                    <div class="hero-buttons">
                        <button class="btn btn-primary" on:click=move |_| navigation.navigate(Section::Projects)>
                            <span>"View Projects"</span>
                            <div class="btn-particles"></div>
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| download_resume()>
                            <span>"Download Resume"</span>
                            <div class="btn-particles"></div>
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="minecraft-character">
                        <div class="character-head"></div>
                        <div class="character-body"></div>
                        <div class="character-arms">
                            <div class="arm left"></div>
                            <div class="arm right"></div>
                        </div>
                        <div class="character-legs">
                            <div class="leg left"></div>
                            <div class="leg right"></div>
                        </div>
                    </div>
                    <div class="floating-elements">
                        {FLOATING_BLOCKS
                            .into_iter()
                            .map(|(delay, glyph)| {
                                view! {
                                    <div class="floating-block" style=format!("--delay: {}", delay)>
                                        {glyph}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
