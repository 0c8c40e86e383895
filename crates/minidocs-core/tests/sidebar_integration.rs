//! Integration tests for the navigation sidebar driven by the router.
//!
//! These tests mount a sidebar over the built-in documentation menu and
//! exercise it through `RouterService` the way the UI does.

use minidocs_core::{Menu, NavigationSidebar, PathStream, RouterService, SidebarConfig};

fn all_paths(menu: &Menu) -> Vec<String> {
    menu.items().map(|item| item.path.clone()).collect()
}

fn active_count(sidebar: &NavigationSidebar) -> usize {
    all_paths(sidebar.menu())
        .iter()
        .filter(|path| sidebar.is_active(path))
        .count()
}

/// Only the first section is expanded right after construction.
#[test]
fn test_initial_sections() {
    let sidebar = NavigationSidebar::new(Menu::docs());
    assert!(sidebar.is_section_open(0));
    for index in 1..sidebar.menu().len() {
        assert!(!sidebar.is_section_open(index), "section {index} should start collapsed");
    }
}

/// Toggling twice restores the previous value for every section.
#[test]
fn test_toggle_pairs_restore_state() {
    let sidebar = NavigationSidebar::new(Menu::docs());
    for index in 0..sidebar.menu().len() {
        let before = sidebar.is_section_open(index);
        sidebar.toggle_section(index);
        assert_ne!(sidebar.is_section_open(index), before);
        sidebar.toggle_section(index);
        assert_eq!(sidebar.is_section_open(index), before);
    }
}

/// Toggling one section never affects another.
#[test]
fn test_toggle_independence() {
    let sidebar = NavigationSidebar::new(Menu::docs());
    let len = sidebar.menu().len();

    for target in 0..len {
        let before: Vec<bool> = (0..len).map(|i| sidebar.is_section_open(i)).collect();
        sidebar.toggle_section(target);
        for (other, was_open) in before.iter().enumerate() {
            if other != target {
                assert_eq!(sidebar.is_section_open(other), *was_open);
            }
        }
    }
}

/// Exactly one item is active for a path in the menu.
#[test]
fn test_active_link_correctness() {
    let router = RouterService::new("/features/routing");
    let sidebar = NavigationSidebar::new(Menu::docs()).mount(&router);

    assert!(sidebar.is_active("/features/routing"));
    assert!(!sidebar.is_active("/features/slots"));
    assert_eq!(active_count(&sidebar), 1);

    let (section, item) = sidebar.active_item().unwrap();
    assert_eq!(section, 2);
    assert_eq!(item.title, "Routing");
}

/// Navigation moves the highlight without re-subscribing.
#[test]
fn test_highlight_follows_navigation() {
    let router = RouterService::new("/");
    let sidebar = NavigationSidebar::new(Menu::docs()).mount(&router);
    assert!(sidebar.is_active("/"));

    router.navigate("/decorators/watch");
    assert!(!sidebar.is_active("/"));
    assert!(sidebar.is_active("/decorators/watch"));
    assert_eq!(active_count(&sidebar), 1);

    router.navigate("/not-in-menu");
    assert_eq!(active_count(&sidebar), 0);
    assert!(sidebar.active_item().is_none());
    assert_eq!(router.listener_count(), 1);
}

/// Navigation does not change which sections are expanded.
#[test]
fn test_navigation_leaves_sections_alone() {
    let router = RouterService::new("/");
    let sidebar = NavigationSidebar::new(Menu::docs()).mount(&router);
    sidebar.toggle_section(4);

    router.navigate("/guides/best-practices");
    assert!(sidebar.is_section_open(0));
    assert!(sidebar.is_section_open(4));
    assert!(!sidebar.is_section_open(6));
}

/// After unmounting, navigation has no observable effect.
#[test]
fn test_unmount_stops_following_router() {
    let router = RouterService::new("/core/jsx");
    let mounted = NavigationSidebar::new(Menu::docs()).mount(&router);
    assert_eq!(router.listener_count(), 1);

    let sidebar = mounted.unmount();
    assert_eq!(router.listener_count(), 0);

    router.navigate("/core/lifecycle");
    assert_eq!(sidebar.current_path(), "/core/jsx");
    assert!(!sidebar.is_active("/core/lifecycle"));
}

/// Dropping a mounted sidebar releases its subscription.
#[test]
fn test_drop_releases_subscription() {
    let router = RouterService::default();
    {
        let _first = NavigationSidebar::new(Menu::docs()).mount(&router);
        let _second = NavigationSidebar::new(Menu::docs()).mount(&router);
        assert_eq!(router.listener_count(), 2);
    }
    assert_eq!(router.listener_count(), 0);
    assert_eq!(router.current_path(), "/");
}

/// Configured open sections replace the default.
#[test]
fn test_configured_open_sections() {
    let config = SidebarConfig {
        initially_open: [1, 2].into_iter().collect(),
    };
    let sidebar = NavigationSidebar::with_config(Menu::docs(), &config);
    assert!(!sidebar.is_section_open(0));
    assert!(sidebar.is_section_open(1));
    assert!(sidebar.is_section_open(2));
}

/// Clones share state, so a toggle through one handle is seen by another.
#[test]
fn test_clones_share_state() {
    let sidebar = NavigationSidebar::new(Menu::docs());
    let handle = sidebar.clone();
    handle.toggle_section(3);
    assert!(sidebar.is_section_open(3));
    assert_eq!(sidebar.snapshot(), handle.snapshot());
}
