//! Page view for the current route.

use leptos::prelude::*;
use minidocs_core::Error;

use crate::browser::use_current_path;
use crate::components::markdown::Markdown;
use crate::site::SiteContext;

/// What to show for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// A registered markdown page.
    Markdown(String),
    /// A menu entry without a written page.
    Placeholder {
        /// Menu item title.
        title: String,
    },
    /// Unknown route.
    NotFound,
}

impl PageContent {
    /// Resolve `path` against the site's pages and menu.
    pub fn resolve(site: &SiteContext, path: &str) -> Self {
        match site.pages.lookup(path) {
            Ok(markdown) => Self::Markdown(markdown.to_string()),
            Err(Error::PageNotFound(_)) => site
                .menu
                .find_by_path(path)
                .map_or(Self::NotFound, |(_, item)| Self::Placeholder {
                    title: item.title.clone(),
                }),
            Err(err) => {
                tracing::warn!(%err, path, "Page lookup failed");
                Self::NotFound
            }
        }
    }
}

/// Renders the page for the current route.
#[component]

pub fn PageView() -> impl IntoView {
    let site = expect_context::<SiteContext>();
    let path = use_current_path();

    view! {
        <article class="page">
            {move || {
                let options = site.config.markdown.clone();
                match PageContent::resolve(&site, &path.get()) {
                    PageContent::Markdown(content) => {
                        view! { <Markdown content=content options=options /> }.into_any()
                    }
                    PageContent::Placeholder { title } => {
                        view! { <h1 class="page-title">{title}</h1> }.into_any()
                    }
                    PageContent::NotFound => {
                        view! { <div class="page-not-found">"404 Not Found"</div> }.into_any()
                    }
                }
            }}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_registered_page() {
        let site = SiteContext::default();
        assert!(matches!(
            PageContent::resolve(&site, "/"),
            PageContent::Markdown(ref md) if md.starts_with("# Introduction")
        ));
    }

    #[test]
    fn test_resolve_menu_placeholder() {
        let site = SiteContext::default();
        assert_eq!(
            PageContent::resolve(&site, "/decorators/watch"),
            PageContent::Placeholder {
                title: "@Watch".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_unknown() {
        let site = SiteContext::default();
        assert_eq!(PageContent::resolve(&site, "/nowhere"), PageContent::NotFound);
        assert_eq!(PageContent::resolve(&site, "/core/jsx/"), PageContent::NotFound);
    }
}
