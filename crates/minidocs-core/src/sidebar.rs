//! Navigation sidebar state.
//!
//! The sidebar tracks two things: which sections are expanded and which
//! route is current. Sections only change on explicit toggles; the current
//! path only changes when the router emits.
//!
//! [`SidebarState`] is the plain state machine. [`NavigationSidebar`] pairs
//! it with a menu behind a shared handle, and [`NavigationSidebar::mount`]
//! wires it to a [`PathStream`] for the lifetime of the returned
//! [`MountedSidebar`].

use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::SidebarConfig;
use crate::menu::{Menu, MenuItem};
use crate::router::{PathStream, Subscription};

/// Visibility of one section's item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Items hidden.
    Collapsed,
    /// Items shown.
    Expanded,
}

impl SectionState {
    /// Whether the section's items are shown.
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Expanded sections and the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    open_sections: BTreeSet<usize>,
    current_path: String,
}

impl SidebarState {
    /// Initial state: only the first section expanded, no current path.
    pub fn new() -> Self {
        Self::with_open_sections([0])
    }

    /// Initial state with the given sections expanded.
    pub fn with_open_sections(open: impl IntoIterator<Item = usize>) -> Self {
        Self {
            open_sections: open.into_iter().collect(),
            current_path: String::new(),
        }
    }

    /// Initial state from configuration.
    pub fn from_config(config: &SidebarConfig) -> Self {
        Self::with_open_sections(config.initially_open.iter().copied())
    }

    /// Expand the section if collapsed, collapse it if expanded.
    ///
    /// The index is not checked against the menu; an unknown index is
    /// tracked like any other and has no visible effect.
    pub fn toggle_section(&mut self, index: usize) {
        let expanded = if self.open_sections.remove(&index) {
            false
        } else {
            self.open_sections.insert(index);
            true
        };
        debug!(section = index, expanded, "Toggled sidebar section");
    }

    /// Whether the section's items are shown.
    pub fn is_section_open(&self, index: usize) -> bool {
        self.open_sections.contains(&index)
    }

    /// Visibility of the section at `index`.
    pub fn section_state(&self, index: usize) -> SectionState {
        if self.is_section_open(index) {
            SectionState::Expanded
        } else {
            SectionState::Collapsed
        }
    }

    /// Expanded section indices in ascending order.
    pub fn open_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.open_sections.iter().copied()
    }

    /// The last path received from the router.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Record a router emission. Last write wins.
    pub fn set_current_path(&mut self, path: &str) {
        self.current_path.clear();
        self.current_path.push_str(path);
    }

    /// Whether `path` is exactly the current path.
    ///
    /// No normalisation: trailing slashes, query strings and prefixes all
    /// count as different paths.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    /// The menu item matching the current path, with its section index.
    pub fn active_item<'m>(&self, menu: &'m Menu) -> Option<(usize, &'m MenuItem)> {
        menu.find_by_path(&self.current_path)
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

/// A menu with its shared sidebar state.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct NavigationSidebar {
    menu: Menu,
    state: Arc<Mutex<SidebarState>>,
}

impl NavigationSidebar {
    /// Sidebar over `menu` with the default initial state.
    pub fn new(menu: Menu) -> Self {
        Self::with_state(menu, SidebarState::new())
    }

    /// Sidebar over `menu` configured by `config`.
    pub fn with_config(menu: Menu, config: &SidebarConfig) -> Self {
        Self::with_state(menu, SidebarState::from_config(config))
    }

    fn with_state(menu: Menu, state: SidebarState) -> Self {
        Self {
            menu,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// The menu being displayed.
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// See [`SidebarState::toggle_section`].
    pub fn toggle_section(&self, index: usize) {
        self.state.lock().toggle_section(index);
    }

    /// See [`SidebarState::is_section_open`].
    pub fn is_section_open(&self, index: usize) -> bool {
        self.state.lock().is_section_open(index)
    }

    /// See [`SidebarState::is_active`].
    pub fn is_active(&self, path: &str) -> bool {
        self.state.lock().is_active(path)
    }

    /// The last path received from the router.
    pub fn current_path(&self) -> String {
        self.state.lock().current_path().to_string()
    }

    /// The currently highlighted item, if any.
    pub fn active_item(&self) -> Option<(usize, MenuItem)> {
        let state = self.state.lock();
        state
            .active_item(&self.menu)
            .map(|(section, item)| (section, item.clone()))
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SidebarState {
        self.state.lock().clone()
    }

    /// Start following `stream`.
    ///
    /// Every emission overwrites the current path until the returned handle
    /// is unmounted or dropped.
    pub fn mount(self, stream: &impl PathStream) -> MountedSidebar {
        let state = Arc::clone(&self.state);
        let subscription = stream.subscribe(Arc::new(move |path: &str| {
            state.lock().set_current_path(path);
        }));
        debug!(sections = self.menu.len(), "Sidebar mounted");
        MountedSidebar {
            sidebar: self,
            subscription,
        }
    }
}

/// A sidebar subscribed to a path stream.
///
/// Dropping it releases the subscription.
#[derive(Debug)]
pub struct MountedSidebar {
    sidebar: NavigationSidebar,
    subscription: Subscription,
}

impl MountedSidebar {
    /// Release the path subscription and hand back the sidebar.
    ///
    /// The returned sidebar keeps its last state but no longer follows
    /// navigation.
    pub fn unmount(self) -> NavigationSidebar {
        let Self {
            sidebar,
            subscription,
        } = self;
        subscription.unsubscribe();
        debug!("Sidebar unmounted");
        sidebar
    }
}

impl Deref for MountedSidebar {
    type Target = NavigationSidebar;

    fn deref(&self) -> &Self::Target {
        &self.sidebar
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use mockall::mock;

    use super::*;
    use crate::router::PathListener;

    mock! {
        Stream {}

        impl PathStream for Stream {
            fn current_path(&self) -> String;
            fn subscribe(&self, listener: PathListener) -> Subscription;
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SidebarState::new();
        assert!(state.is_section_open(0));
        assert!(!state.is_section_open(1));
        assert_eq!(state.current_path(), "");
        assert_eq!(state.section_state(0), SectionState::Expanded);
        assert_eq!(state.section_state(3), SectionState::Collapsed);
    }

    #[test]
    fn test_toggle_section() {
        let mut state = SidebarState::new();
        state.toggle_section(2);
        assert!(state.is_section_open(2));
        state.toggle_section(0);
        assert!(!state.is_section_open(0));
        assert_eq!(state.open_sections().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_toggle_out_of_range_is_absorbed() {
        let mut state = SidebarState::new();
        state.toggle_section(usize::MAX);
        assert!(state.is_section_open(usize::MAX));
        state.toggle_section(usize::MAX);
        assert_eq!(state, SidebarState::new());
    }

    #[test]
    fn test_is_active_is_exact_match() {
        let mut state = SidebarState::new();
        state.set_current_path("/core/jsx");
        assert!(state.is_active("/core/jsx"));
        assert!(!state.is_active("/core/jsx/"));
        assert!(!state.is_active("/core"));
        assert!(!state.is_active("/core/jsx?tab=1"));
    }

    #[test]
    fn test_active_item() {
        let menu = Menu::docs();
        let mut state = SidebarState::new();
        assert!(state.active_item(&menu).is_none());

        state.set_current_path("/api/signal");
        let (section, item) = state.active_item(&menu).unwrap();
        assert_eq!(section, 5);
        assert_eq!(item.title, "Signal API");
    }

    #[test]
    fn test_from_config() {
        let config = SidebarConfig {
            initially_open: BTreeSet::from([1, 3]),
        };
        let state = SidebarState::from_config(&config);
        assert!(!state.is_section_open(0));
        assert!(state.is_section_open(1));
        assert!(state.is_section_open(3));
    }

    #[test]
    fn test_mount_uses_replayed_path_and_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);

        let mut stream = MockStream::new();
        stream.expect_subscribe().times(1).returning(move |listener| {
            listener("/features/slots");
            let counter = Arc::clone(&counter);
            Subscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });

        let mounted = NavigationSidebar::new(Menu::docs()).mount(&stream);
        assert!(mounted.is_active("/features/slots"));
        assert_eq!(released.load(Ordering::SeqCst), 0);

        let sidebar = mounted.unmount();
        assert_eq!(released.load(Ordering::SeqCst), 1);
        assert_eq!(sidebar.current_path(), "/features/slots");
    }

    #[test]
    fn test_drop_before_any_emission_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&released);

        let mut stream = MockStream::new();
        stream.expect_subscribe().times(1).returning(move |_listener| {
            let counter = Arc::clone(&counter);
            Subscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });

        let mounted = NavigationSidebar::new(Menu::docs()).mount(&stream);
        assert_eq!(mounted.current_path(), "");
        drop(mounted);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }
}
