//! Browser-facing services

pub mod download;
pub mod effects;
pub mod session;

pub use download::save_text_file;
