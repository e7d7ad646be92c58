//! # Section Navigation
//!
//! The page shows exactly one [`Section`] at a time. [`NavigationState`] is an
//! immutable value with a total transition function, so every reachable state
//! has exactly one current section.
//!
//! ```rust
//! use lib_core::model::{NavigationState, Section};
//!
//! let state = NavigationState::default().toggle_menu();
//! assert!(state.is_menu_open());
//!
//! let state = state.navigate(Section::Projects);
//! assert_eq!(state.current(), Section::Projects);
//! assert!(!state.is_menu_open());
//! ```
//!
//! ## URL Fragments
//!
//! The current section is mirrored in the URL fragment (`#projects`) so that
//! reloading or sharing a link opens the same section. Parsing a fragment is
//! fallible; an unknown fragment leaves the caller to pick a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Blog,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Blog,
        Section::Contact,
    ];

    /// Stable identifier, also used as the element id and URL fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Home => "🏠",
            Section::About => "👨‍💻",
            Section::Projects => "⚡",
            Section::Skills => "🛠️",
            Section::Blog => "📝",
            Section::Contact => "📡",
        }
    }

    /// `#projects` style link target.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Parse a URL fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        fragment.trim_start_matches('#').parse().ok()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == needle)
            .ok_or_else(|| AppError::NotFound(format!("unknown section '{}'", s)))
    }
}

/// Current section plus the mobile menu flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Section,
    menu_open: bool,
}

impl NavigationState {
    pub fn new(current: Section) -> Self {
        Self {
            current,
            menu_open: false,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.current == section
    }

    /// Show `section` and collapse the menu.
    #[must_use]
    pub fn navigate(self, section: Section) -> Self {
        Self {
            current: section,
            menu_open: false,
        }
    }

    #[must_use]
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}
