//! Tab content
//!
//! - `page` - TabPage wrapper around the content of the active tab
//! - `registry` - mapping PortfolioTab → View (single source of truth)

pub mod page;
pub mod registry;

pub use page::TabPage;
pub use registry::render_tab_content;
