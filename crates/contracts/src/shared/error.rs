use thiserror::Error;

/// Reasons a static asset reference cannot be turned into a URL.
///
/// None of these stop rendering: the caller swaps in a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset reference is empty")]
    Empty,

    #[error("asset path `{0}` must start with '/'")]
    NotRooted(String),

    #[error("asset `{0}` is not a supported image format")]
    UnsupportedFormat(String),
}
