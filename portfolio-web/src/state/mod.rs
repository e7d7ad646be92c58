//! Global state shared through Leptos context

pub mod effects;
pub mod navigation;
pub mod session;
