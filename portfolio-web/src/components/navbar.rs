//! Navigation bar

use leptos::prelude::*;
use lib_core::model::Section;

use super::sign_out::SignOutButton;
use crate::state::navigation::use_navigation_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let navigation = use_navigation_context();

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <a
                        href=section.href()
                        class="nav-link"
                        class:active=move || navigation.is_active(section)
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigation.navigate(section);
                        }
                    >
                        <span class="nav-icon">{section.icon()}</span>
                        " "
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a
                    href=Section::Home.href()
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigation.navigate(Section::Home);
                    }
                >
                    <span class="glitch" data-text="DIGITAL_REBEL.exe">"DIGITAL_REBEL.exe"</span>
                </a>
                <ul class="nav-menu" class:active=move || navigation.is_menu_open()>
                    {links}
                    <li>
                        <SignOutButton/>
                    </li>
                </ul>
                <button
                    class="hamburger"
                    class:active=move || navigation.is_menu_open()
                    aria-label="Toggle navigation"
                    on:click=move |_| navigation.toggle_menu()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
