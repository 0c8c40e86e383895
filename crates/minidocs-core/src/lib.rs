//! `Minidocs` Core Library
//!
//! This crate provides the platform-independent parts of the documentation
//! site:
//! - The navigation menu data model and built-in menu table
//! - The sidebar state machine (collapsible sections, active link)
//! - The router path stream with scoped subscriptions
//! - Markdown rendering with anchored headings
//! - Site configuration and page content
//!
//! # Example
//!
//! ```rust
//! use minidocs_core::{Menu, NavigationSidebar, RouterService};
//!
//! let router = RouterService::new("/");
//! let sidebar = NavigationSidebar::new(Menu::docs()).mount(&router);
//!
//! router.navigate("/features/routing");
//! assert!(sidebar.is_active("/features/routing"));
//!
//! sidebar.toggle_section(2);
//! assert!(sidebar.is_section_open(2));
//! ```

pub mod config;
pub mod error;
pub mod markdown;
pub mod menu;
pub mod pages;
pub mod router;
pub mod sidebar;

pub use config::{
    DEFAULT_CODE_LANGUAGE, DEFAULT_TITLE, MarkdownOptions, SidebarConfig, SiteConfig,
};
pub use error::{Error, Result};
pub use markdown::{CodeBlock, Heading, RenderedMarkdown, render as render_markdown, slugify};
pub use menu::{Menu, MenuItem, MenuSection};
pub use pages::PageRegistry;
pub use router::{PathListener, PathStream, RouterService, Subscription};
pub use sidebar::{MountedSidebar, NavigationSidebar, SectionState, SidebarState};
