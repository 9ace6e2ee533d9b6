//! Site-wide settings. Compile-time constants, nothing is read at runtime.

/// Settings handed to components through context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix joined with every asset path. Empty means same origin.
    pub asset_base: &'static str,
    /// Console log level set up before mounting.
    pub log_level: log::Level,
    /// Badge shown above the name in the hero card.
    pub welcome: &'static str,
}

impl SiteConfig {
    pub const fn new() -> Self {
        Self {
            asset_base: "",
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            welcome: "Welcome to my portfolio",
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.asset_base, "");
        assert_eq!(config.welcome, "Welcome to my portfolio");
        if cfg!(debug_assertions) {
            assert_eq!(config.log_level, log::Level::Debug);
        }
    }
}
