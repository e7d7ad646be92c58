//! Navigation state: the single visible section and the mobile menu.

use leptos::prelude::*;
use lib_core::model::{NavigationState, Section};

use crate::utils::url::{section_from_location, write_section_to_location};

/// Global navigation context
#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub state: RwSignal<NavigationState>,
}

impl NavigationContext {
    /// Start on the section named by the URL fragment, or Home.
    pub fn new() -> Self {
        let initial = section_from_location().unwrap_or_default();
        Self {
            state: RwSignal::new(NavigationState::new(initial)),
        }
    }

    pub fn current(&self) -> Section {
        self.state.with(|state| state.current())
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.state.with(|state| state.is_active(section))
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.with(|state| state.is_menu_open())
    }

    /// Show `section`, close the mobile menu and mirror it into the URL.
    pub fn navigate(&self, section: Section) {
        log::debug!("Navigating to {}", section);
        self.state.update(|state| *state = state.navigate(section));
        write_section_to_location(section);
    }

    pub fn toggle_menu(&self) {
        self.state.update(|state| *state = state.toggle_menu());
    }

    /// Follow back/forward and hand-edited fragments.
    fn sync_from_location(&self) {
        let section = section_from_location().unwrap_or_default();
        if section != self.current() {
            self.state.update(|state| *state = state.navigate(section));
        }
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_navigation_context() -> NavigationContext {
    let context = NavigationContext::new();
    provide_context(context);

    let handle =
        window_event_listener(leptos::ev::hashchange, move |_| context.sync_from_location());
    on_cleanup(move || handle.remove());

    context
}

pub fn use_navigation_context() -> NavigationContext {
    expect_context::<NavigationContext>()
}
