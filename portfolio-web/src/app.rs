//! Digital Rebel portfolio - Leptos frontend
//!
//! Session gate in front of a single-page portfolio whose sections are
//! switched in place rather than routed.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use lib_core::dto::SessionIdentity;
use lib_core::model::Section;

use crate::components::{use_typewriter, EasterEggModal, Footer, Navbar, Particles, Starfield};
use crate::pages::{
    AboutPage, BlogPage, ContactPage, HomePage, NotFound, ProjectsPage, SignInPage, SkillsPage,
};
use crate::state::effects::provide_effects_context;
use crate::state::navigation::provide_navigation_context;
use crate::state::session::{provide_session_context, use_session_context};

#[component]
pub fn App() -> impl IntoView {
    provide_effects_context();
    let session = provide_session_context();

    // Resolve once mounted so the loading state is visible for at least a frame.
    Effect::new(move |_| session.resolve());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=SessionGate/>
            </Routes>
        </Router>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gate {
    Loading,
    SignIn,
    Portfolio,
}

#[component]
fn SessionGate() -> impl IntoView {
    let session = use_session_context();
    let gate = Memo::new(move |_| {
        session.identity.with(|identity| match identity {
            SessionIdentity::Loading => Gate::Loading,
            SessionIdentity::Absent => Gate::SignIn,
            SessionIdentity::Present(_) => Gate::Portfolio,
        })
    });

    move || match gate.get() {
        Gate::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        Gate::SignIn => view! { <SignInPage/> }.into_any(),
        Gate::Portfolio => view! { <Portfolio/> }.into_any(),
    }
}

/// Signed-in shell: background effects, navigation and the visible section.
///
/// Background loops and the typewriter live here, so switching sections never
/// restarts them.
#[component]
fn Portfolio() -> impl IntoView {
    let navigation = provide_navigation_context();
    let typed = use_typewriter();
    let easter_egg = RwSignal::new(false);
    let current = Memo::new(move |_| navigation.current());

    log::info!("Portfolio mounted on {}", current.get_untracked());

    view! {
        <div class="app">
            <Starfield/>
            <Particles/>
            <Navbar/>
            <main>
                {move || match current.get() {
                    Section::Home => view! { <HomePage typed=typed easter_egg=easter_egg/> }.into_any(),
                    Section::About => view! { <AboutPage/> }.into_any(),
                    Section::Projects => view! { <ProjectsPage/> }.into_any(),
                    Section::Skills => view! { <SkillsPage/> }.into_any(),
                    Section::Blog => view! { <BlogPage/> }.into_any(),
                    Section::Contact => view! { <ContactPage/> }.into_any(),
                }}
            </main>
            <Footer/>
            <EasterEggModal open=easter_egg/>
        </div>
    }
}
