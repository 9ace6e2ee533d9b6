pub mod assets;
pub mod config;
pub mod contact;
pub mod error;
pub mod tabs;

pub use assets::AssetRef;
pub use config::SiteConfig;
pub use contact::{contact_links, ContactKind, ContactLink};
pub use error::AssetError;
pub use tabs::{PortfolioTab, TabController};
