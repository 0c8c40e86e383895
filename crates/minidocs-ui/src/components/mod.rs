//! UI components for the documentation site.

pub mod icon;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod sidebar;

pub use icon::{Icon, icons};
pub use layout::{Header, Layout, LayoutMain};
pub use markdown::{Markdown, PROSE_CLASSES, prose_class};
pub use page::{PageContent, PageView};
pub use sidebar::{NavigationSidebar, SidebarContext};
