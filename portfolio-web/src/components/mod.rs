//! UI Components

pub mod click_burst;
pub mod easter_egg;
pub mod footer;
pub mod navbar;
pub mod particles;
pub mod resume;
pub mod sign_out;
pub mod starfield;
pub mod stat_counter;
pub mod typewriter;

pub use click_burst::emit_click_burst;
pub use easter_egg::EasterEggModal;
pub use footer::Footer;
pub use navbar::Navbar;
pub use particles::Particles;
pub use resume::download_resume;
pub use starfield::Starfield;
pub use stat_counter::StatCard;
pub use typewriter::use_typewriter;
