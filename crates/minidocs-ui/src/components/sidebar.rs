//! Navigation sidebar component.
//!
//! Renders the menu as collapsible sections and highlights the item for the
//! current route. Open sections change only on header clicks; the current
//! route comes from the [`BrowserRouter`] in context.

use std::sync::Arc;

use leptos::prelude::*;
use minidocs_core::{Menu, MenuItem, MenuSection, PathStream, SidebarConfig, SidebarState};

use crate::browser::{BrowserRouter, Link};
use crate::components::icon::Icon;

/// Reactive handle to the sidebar state.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    state: RwSignal<SidebarState>,
}

impl SidebarContext {
    /// Create the state for a freshly mounted sidebar.
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            state: RwSignal::new(SidebarState::from_config(config)),
        }
    }

    /// Expand or collapse a section.
    pub fn toggle_section(&self, index: usize) {
        self.state.update(|state| state.toggle_section(index));
    }

    /// Whether a section is expanded. Tracks the state when read reactively.
    pub fn is_section_open(&self, index: usize) -> bool {
        self.state.with(|state| state.is_section_open(index))
    }

    /// Memo over one section's visibility.
    ///
    /// Route changes rerun the memo but leave its value alone, so views
    /// reading it are not rebuilt on navigation.
    pub fn section_open(&self, index: usize) -> Memo<bool> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_section_open(index)))
    }

    /// Signal that is true while `path` is the current route.
    pub fn is_active(&self, path: impl Into<String>) -> Signal<bool> {
        let path = path.into();
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.is_active(&path))).into()
    }

    /// Record a router emission.
    pub fn set_current_path(&self, path: &str) {
        self.state.update(|state| state.set_current_path(path));
    }
}

/// Classes for a sidebar link.
pub const fn link_class(active: bool) -> &'static str {
    if active {
        "sidebar-link sidebar-link-active"
    } else {
        "sidebar-link"
    }
}

/// Classes for the icon inside a sidebar link.
pub const fn link_icon_class(active: bool) -> &'static str {
    if active {
        "sidebar-link-icon sidebar-link-icon-active"
    } else {
        "sidebar-link-icon"
    }
}

/// Classes for a section's direction indicator.
pub const fn arrow_class(open: bool) -> &'static str {
    if open {
        "sidebar-arrow rotate-180"
    } else {
        "sidebar-arrow"
    }
}

/// The fixed navigation panel.
///
/// Subscribes to the router on mount and releases the subscription when
/// the component is cleaned up, whether or not a path was ever received.
#[component]

pub fn NavigationSidebar(
    /// Sections to display.
    menu: Menu,
    /// Initial open sections.
    #[prop(optional)]
    config: SidebarConfig,
) -> impl IntoView {
    let router = expect_context::<BrowserRouter>();
    let sidebar = SidebarContext::new(&config);
    provide_context(sidebar);

    let subscription = router
        .service()
        .subscribe(Arc::new(move |path: &str| sidebar.set_current_path(path)));
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <aside class="sidebar">
            <nav class="sidebar-nav">
                {menu
                    .sections()
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(index, section)| view! { <SidebarSection index=index section=section /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// A section header and, while open, its links.
#[component]
fn SidebarSection(index: usize, section: MenuSection) -> impl IntoView {
    let sidebar = expect_context::<SidebarContext>();
    let MenuSection { title, items } = section;
    let is_open = sidebar.section_open(index);

    view! {
        <div class="sidebar-section">
            <button
                class="sidebar-section-header"
                on:click=move |_| sidebar.toggle_section(index)
            >
                <span>{title}</span>
                <Icon
                    name="arrow-down"
                    class=Signal::derive(move || arrow_class(is_open.get()).to_string())
                    size=16
                />
            </button>
            {move || {
                is_open
                    .get()
                    .then(|| {
                        view! {
                            <ul class="sidebar-items">
                                {items
                                    .iter()
                                    .cloned()
                                    .map(|item| view! { <SidebarLink item=item /> })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
        </div>
    }
}

/// One menu item rendered as a router link.
#[component]
fn SidebarLink(item: MenuItem) -> impl IntoView {
    let sidebar = expect_context::<SidebarContext>();
    let MenuItem { title, path, icon } = item;
    let active = sidebar.is_active(path.clone());

    view! {
        <li>
            <Link href=path class=Signal::derive(move || link_class(active.get()).to_string())>
                <span class="sidebar-link-content">
                    <Icon
                        name=icon
                        class=Signal::derive(move || link_icon_class(active.get()).to_string())
                        size=16
                    />
                    {title}
                </span>
            </Link>
        </li>
    }
}
