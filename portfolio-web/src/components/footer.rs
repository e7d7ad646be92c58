//! Page footer

use leptos::prelude::*;
use lib_core::model::Section;

use super::resume::download_resume;
use crate::state::navigation::use_navigation_context;

#[component]
pub fn Footer() -> impl IntoView {
    let navigation = use_navigation_context();
    let link = move |section: Section, text: &'static str| {
        view! {
            <a
                href=section.href()
                on:click=move |ev| {
                    ev.prevent_default();
                    navigation.navigate(section);
                }
            >
                {text}
            </a>
        }
    };

    view! {
        <footer class="footer">
            <div class="container">
                <p>"© 2024 Digital Rebel. Crafted with ❤️ and lots of ☕"</p>
                <p class="footer-subtitle">"May the code be with you, always."</p>
                <div class="footer-links">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        download_resume();
                    }>
                        "Resume"
                    </a>
                    {link(Section::Blog, "Blog")}
                    {link(Section::Projects, "Projects")}
                    {link(Section::Contact, "Contact")}
                </div>
            </div>
        </footer>
    }
}
