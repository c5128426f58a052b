//! UI components for the portfolio page.

mod about;
mod app;
mod contact;
mod footer;
mod hero;
mod loading_screen;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use app::App;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loading_screen::LoadingScreen;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
