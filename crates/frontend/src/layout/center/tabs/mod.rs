pub mod tab;
pub mod tabs;

pub use tab::Tab;
pub use tabs::Tabs;
