//! Static content and view state of the portfolio page.
//!
//! Target-independent: everything here runs under plain `cargo test`.

pub mod domain;
pub mod shared;
