//! Site configuration.
//!
//! The site reads a single JSON document at start-up. Every field has a
//! default so an empty object (`{}`) is a valid configuration.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{Error, Result};
use crate::menu::{Menu, MenuSection};

/// Default site title.
pub const DEFAULT_TITLE: &str = "Mini Framework";

/// Language assumed for code blocks without an info string.
pub const DEFAULT_CODE_LANGUAGE: &str = "typescript";

/// Sidebar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarConfig {
    /// Section indices expanded when the sidebar mounts.
    #[serde(default = "default_open_sections")]
    pub initially_open: BTreeSet<usize>,
}

fn default_open_sections() -> BTreeSet<usize> {
    BTreeSet::from([0])
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            initially_open: default_open_sections(),
        }
    }
}

/// Markdown rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Enable GitHub flavored extensions (tables, strikethrough, task lists).
    #[serde(default = "default_true")]
    pub gfm: bool,
    /// Render single newlines as line breaks.
    #[serde(default = "default_true")]
    pub hard_breaks: bool,
    /// Language for code blocks that do not name one.
    #[serde(default = "default_language")]
    pub default_language: String,
}

const fn default_true() -> bool {
    true
}

fn default_language() -> String {
    DEFAULT_CODE_LANGUAGE.to_string()
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            gfm: true,
            hard_breaks: true,
            default_language: default_language(),
        }
    }
}

/// Top-level site configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Title shown in the header.
    #[serde(default = "default_title")]
    pub title: String,
    /// Sidebar settings.
    #[serde(default)]
    pub sidebar: SidebarConfig,
    /// Markdown rendering options.
    #[serde(default)]
    pub markdown: MarkdownOptions,
    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Navigation sections. The built-in documentation menu when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuSection>>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            sidebar: SidebarConfig::default(),
            markdown: MarkdownOptions::default(),
            log_level: default_log_level(),
            menu: None,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        if self.markdown.default_language.trim().is_empty() {
            return Err(Error::Configuration(
                "markdown.default_language must not be empty".to_string(),
            ));
        }
        if let Some(sections) = &self.menu {
            Menu::new(sections.clone()).validate()?;
        }
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<Level> {
        Level::from_str(&self.log_level).map_err(|_| {
            Error::Configuration(format!("unknown log level '{}'", self.log_level))
        })
    }

    /// The navigation menu to display.
    pub fn menu(&self) -> Menu {
        self.menu
            .as_ref()
            .map_or_else(Menu::docs, |sections| Menu::new(sections.clone()))
    }
}
