//! Portfolio aggregate: the data model and its single static instance.

pub mod aggregate;
pub mod data;

pub use aggregate::{
    initials, Education, Experience, Organization, PersonalInfo, PortfolioRecord, Project,
};
pub use data::PORTFOLIO;
