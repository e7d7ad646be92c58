//! Page modules: one per section plus the sign-in and 404 pages

pub mod about;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod sign_in;
pub mod skills;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use projects::ProjectsPage;
pub use sign_in::SignInPage;
pub use skills::SkillsPage;
