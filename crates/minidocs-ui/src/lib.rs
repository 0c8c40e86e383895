//! `Minidocs` UI - Leptos-based documentation site.
//!
//! This crate provides the frontend for the documentation site: layout,
//! navigation sidebar, markdown pages and the browser router binding.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser;
pub mod components;
pub mod logging;
pub mod site;
pub mod theme;

pub use app::App;
pub use browser::{BrowserRouter, Link, use_current_path};
pub use logging::{LoggingConfig, init_logging};
