//! Content blocks, one per tab.

pub mod about;
pub mod home;
pub mod projects;

pub use about::AboutView;
pub use home::HomeView;
pub use projects::ProjectsView;
