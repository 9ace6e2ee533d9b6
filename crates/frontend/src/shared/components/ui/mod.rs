pub mod badge;
pub mod button;

pub use badge::{Badge, TechBadges};
pub use button::Button;
