//! Static asset references.
//!
//! The page only knows image paths; bytes come from whatever serves the
//! `public/` directory. Resolution turns a path into a URL or explains why it
//! cannot be shown.

use serde::Serialize;
use std::fmt;

use super::error::AssetError;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "svg"];

/// Path of a static image, rooted at the asset base (e.g. `/kiosk.png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetRef(&'static str);

impl AssetRef {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &'static str {
        self.0
    }

    /// Join `base` and the path into a URL the browser can load.
    ///
    /// `base` may be empty (same origin) or carry a trailing slash.
    pub fn resolve(&self, base: &str) -> Result<String, AssetError> {
        let path = self.0.trim();
        if path.is_empty() {
            return Err(AssetError::Empty);
        }
        if !path.starts_with('/') {
            return Err(AssetError::NotRooted(path.to_string()));
        }

        let extension = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.contains('/'))
            .ok_or_else(|| AssetError::UnsupportedFormat(path.to_string()))?;
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AssetError::UnsupportedFormat(path.to_string()));
        }

        Ok(format!("{}{}", base.trim_end_matches('/'), path))
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_same_origin() {
        assert_eq!(AssetRef::new("/kiosk.png").resolve(""), Ok("/kiosk.png".to_string()));
    }

    #[test]
    fn test_resolve_with_base() {
        let icon = AssetRef::new("/rt_online_icon.webp");
        assert_eq!(
            icon.resolve("https://cdn.example.com/"),
            Ok("https://cdn.example.com/rt_online_icon.webp".to_string())
        );
        assert_eq!(
            icon.resolve("https://cdn.example.com"),
            Ok("https://cdn.example.com/rt_online_icon.webp".to_string())
        );
    }

    #[test]
    fn test_resolve_extension_case_insensitive() {
        assert!(AssetRef::new("/LOGO.PNG").resolve("").is_ok());
        assert!(AssetRef::new("/img/photo.JpEg").resolve("").is_ok());
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(AssetRef::new("").resolve(""), Err(AssetError::Empty));
        assert_eq!(AssetRef::new("  ").resolve(""), Err(AssetError::Empty));
        assert_eq!(
            AssetRef::new("kiosk.png").resolve(""),
            Err(AssetError::NotRooted("kiosk.png".to_string()))
        );
        assert_eq!(
            AssetRef::new("/notes.txt").resolve(""),
            Err(AssetError::UnsupportedFormat("/notes.txt".to_string()))
        );
        assert_eq!(
            AssetRef::new("/v1.2/icon").resolve(""),
            Err(AssetError::UnsupportedFormat("/v1.2/icon".to_string()))
        );
        assert_eq!(
            AssetRef::new("/icon").resolve(""),
            Err(AssetError::UnsupportedFormat("/icon".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AssetError::NotRooted("a.png".into()).to_string(),
            "asset path `a.png` must start with '/'"
        );
        assert_eq!(AssetError::Empty.to_string(), "asset reference is empty");
    }
}
