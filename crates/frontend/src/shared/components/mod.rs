pub mod card_animated;
pub mod contact_item;
pub mod page_header;
pub mod project_icon;
pub mod ui;

pub use card_animated::CardAnimated;
pub use contact_item::ContactItem;
pub use page_header::SectionTitle;
pub use project_icon::ProjectIcon;
