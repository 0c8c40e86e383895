//! Navigation menu data model.
//!
//! The menu is an immutable, ordered table of sections handed to the sidebar
//! at construction. [`Menu::docs`] is the built-in table for the
//! documentation site; other menus can be loaded from JSON.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single navigable link entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Display label.
    pub title: String,
    /// Route this item links to. Highlighting requires an exact match.
    pub path: String,
    /// Key into the icon registry.
    pub icon: String,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(title: impl Into<String>, path: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon: icon.into(),
        }
    }
}

/// A labeled, independently collapsible group of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuSection {
    /// Display label (e.g. "Getting Started").
    pub title: String,
    /// Items in display order.
    pub items: Vec<MenuItem>,
}

impl MenuSection {
    /// Create a new section.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Ordered, immutable set of menu sections.
///
/// Cloning is cheap: sections are shared behind an [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    sections: Arc<[MenuSection]>,
}

impl Menu {
    /// Create a menu from sections. No validation is performed.
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self {
            sections: sections.into(),
        }
    }

    /// Parse and validate a menu from a JSON array of sections.
    pub fn from_json(json: &str) -> Result<Self> {
        let sections: Vec<MenuSection> = serde_json::from_str(json)?;
        let menu = Self::new(sections);
        menu.validate()?;
        Ok(menu)
    }

    /// Serialize the menu as a JSON array of sections.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.sections)?)
    }

    /// Check the menu is usable for navigation.
    ///
    /// Item paths must be unique so that at most one item is active.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::InvalidMenu("menu has no sections".to_string()));
        }

        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(Error::InvalidMenu(format!("section {index} has an empty title")));
            }
            for item in &section.items {
                if !seen.insert(item.path.as_str()) {
                    return Err(Error::InvalidMenu(format!(
                        "duplicate item path '{}' in section '{}'",
                        item.path, section.title
                    )));
                }
            }
        }
        Ok(())
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Section at `index`, if any.
    pub fn section(&self, index: usize) -> Option<&MenuSection> {
        self.sections.get(index)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the menu has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every item across all sections, in display order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Find the item whose path is exactly `path`, with its section index.
    pub fn find_by_path(&self, path: &str) -> Option<(usize, &MenuItem)> {
        self.sections.iter().enumerate().find_map(|(index, section)| {
            section
                .items
                .iter()
                .find(|item| item.path == path)
                .map(|item| (index, item))
        })
    }

    /// The documentation site's navigation table.
    pub fn docs() -> Self {
        fn item(title: &str, path: &str, icon: &str) -> MenuItem {
            MenuItem::new(title, path, icon)
        }

        Self::new(vec![
            MenuSection::new(
                "Getting Started",
                vec![
                    item("Introduction", "/", "lightning"),
                    item("Quick Start", "/getting-started/quick-start", "code"),
                    item("Installation", "/getting-started/installation", "download"),
                    item("First Component", "/getting-started/first-component", "document"),
                    item("Basic Concepts", "/getting-started/basic-concepts", "book"),
                ],
            ),
            MenuSection::new(
                "Core Concepts",
                vec![
                    item("Reactivity & Signals", "/core/reactivity", "lightning"),
                    item("Components", "/core/components", "component"),
                    item("JSX Templates", "/core/jsx", "code"),
                    item("Lifecycle", "/core/lifecycle", "lifecycle"),
                    item("Props & Children", "/core/props-children", "layers"),
                ],
            ),
            MenuSection::new(
                "Features",
                vec![
                    item("Dependency Injection", "/features/dependency-injection", "adjustments"),
                    item("Routing", "/features/routing", "route"),
                    item("Guards & Resolvers", "/features/guards-resolvers", "shield"),
                    item("State Management", "/features/state-management", "database"),
                    item("Slots", "/features/slots", "slots"),
                    item("Loading States", "/features/loading-states", "lifecycle"),
                ],
            ),
            MenuSection::new(
                "Built-in Components",
                vec![
                    item("Link", "/built-in/link", "link"),
                    item("Loader", "/built-in/loader", "lifecycle"),
                    item("Provider", "/built-in/provider", "adjustments"),
                    item("RouteSwitcher", "/built-in/route-switcher", "route"),
                    item("ViewTransition", "/built-in/view-transition", "exchange"),
                ],
            ),
            MenuSection::new(
                "Decorators",
                vec![
                    item("@Child", "/decorators/child", "slots"),
                    item("@Inject", "/decorators/inject", "users"),
                    item("@LoadData", "/decorators/load-data", "lifecycle"),
                    item("@Mount", "/decorators/mount", "star"),
                    item("@PersistentState", "/decorators/persistent-state", "database"),
                    item("@Route", "/decorators/route", "route"),
                    item("@UseGuards", "/decorators/use-guards", "shield"),
                    item("@UseProviders", "/decorators/use-providers", "adjustments"),
                    item("@UseResolvers", "/decorators/use-resolvers", "database"),
                    item("@Watch", "/decorators/watch", "eye"),
                ],
            ),
            MenuSection::new(
                "API Reference",
                vec![
                    item("Component API", "/api/component", "document"),
                    item("Signal API", "/api/signal", "lightning"),
                    item("Router API", "/api/router", "route"),
                    item("Injector API", "/api/injector", "adjustments"),
                ],
            ),
            MenuSection::new(
                "Guides",
                vec![
                    item("Project Structure", "/guides/project-structure", "folder"),
                    item("Best Practices", "/guides/best-practices", "check"),
                    item("Migration from React", "/guides/migration-react", "exchange"),
                    item("Migration from Angular", "/guides/migration-angular", "exchange"),
                ],
            ),
        ])
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::docs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_menu_is_valid() {
        let menu = Menu::docs();
        assert!(menu.validate().is_ok());
        assert_eq!(menu.len(), 7);
        assert_eq!(menu.sections()[0].title, "Getting Started");
    }

    #[test]
    fn test_find_by_path() {
        let menu = Menu::docs();
        let (section, item) = menu.find_by_path("/features/routing").unwrap();
        assert_eq!(section, 2);
        assert_eq!(item.title, "Routing");
        assert!(menu.find_by_path("/features/routing/").is_none());
    }

    #[test]
    fn test_items_preserve_display_order() {
        let menu = Menu::docs();
        let titles: Vec<&str> = menu.items().take(3).map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Quick Start", "Installation"]);
        assert_eq!(menu.items().count(), 39);
    }

    #[test]
    fn test_validate_rejects_empty_menu() {
        let err = Menu::new(vec![]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidMenu(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_paths() {
        let menu = Menu::new(vec![
            MenuSection::new("A", vec![MenuItem::new("One", "/one", "code")]),
            MenuSection::new("B", vec![MenuItem::new("Also one", "/one", "code")]),
        ]);
        let err = menu.validate().unwrap_err();
        assert!(err.to_string().contains("/one"));
    }

    #[test]
    fn test_validate_rejects_blank_section_title() {
        let menu = Menu::new(vec![MenuSection::new("  ", vec![])]);
        assert!(menu.validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"title": "Guides", "items": [
                {"title": "Best Practices", "path": "/guides/best-practices", "icon": "check"}
            ]}
        ]"#;
        let menu = Menu::from_json(json).unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.sections()[0].items[0].icon, "check");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Menu::from_json("{not json").unwrap_err(),
            Error::Serialization(_)
        ));
        assert!(matches!(
            Menu::from_json("[]").unwrap_err(),
            Error::InvalidMenu(_)
        ));
    }
}
