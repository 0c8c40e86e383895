//! Main application component.

use leptos::prelude::*;
use minidocs_core::SiteConfig;

use crate::browser::BrowserRouter;
use crate::components::{Layout, LayoutMain, NavigationSidebar, PageView};
use crate::site::SiteContext;
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App(
    /// Site configuration; the defaults when absent.
    #[prop(optional)]
    config: SiteConfig,
) -> impl IntoView {
    let css_vars = generate_css_variables();

    let site = SiteContext::new(config);
    let router = BrowserRouter::new();
    provide_context(site.clone());
    provide_context(router.clone());

    // Back/forward buttons change the location without going through Link.
    let popstate = window_event_listener(leptos::ev::popstate, move |_| {
        router.sync_with_location();
    });
    on_cleanup(move || popstate.remove());

    let title = site.config.title.clone();
    let sidebar_config = site.config.sidebar.clone();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Layout title=title>
            <NavigationSidebar menu=site.menu config=sidebar_config />
            <LayoutMain>
                <PageView />
            </LayoutMain>
        </Layout>
    }
}
