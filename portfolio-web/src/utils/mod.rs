//! Constants, content tables and small browser helpers

pub mod config;
pub mod constants;
pub mod content;
pub mod url;
