//! Site configuration and shared site data.

use std::sync::Arc;

use minidocs_core::{Menu, PageRegistry, Result, SiteConfig};

/// Configuration bundled into the build.
pub const EMBEDDED_CONFIG: &str = include_str!("../config/site.json");

/// Parse the embedded configuration.
pub fn load() -> Result<SiteConfig> {
    SiteConfig::from_json(EMBEDDED_CONFIG)
}

/// Site-wide data provided through context.
#[derive(Clone, Debug)]
pub struct SiteContext {
    /// Active configuration.
    pub config: Arc<SiteConfig>,
    /// Navigation menu.
    pub menu: Menu,
    /// Page bodies.
    pub pages: Arc<PageRegistry>,
}

impl SiteContext {
    /// Build the site data from a configuration.
    pub fn new(config: SiteConfig) -> Self {
        let menu = config.menu();
        Self {
            config: Arc::new(config),
            menu,
            pages: Arc::new(PageRegistry::docs()),
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = load().unwrap();
        assert!(config.sidebar.initially_open.contains(&0));
        assert_eq!(config.markdown.default_language, "typescript");
    }

    #[test]
    fn test_site_context_uses_docs_menu() {
        let site = SiteContext::default();
        assert_eq!(site.menu, Menu::docs());
        assert!(site.pages.lookup("/").is_ok());
    }
}
