//! Browser history binding for the router.
//!
//! [`BrowserRouter`] keeps a [`RouterService`] in step with the address
//! bar: link clicks push history entries, and back/forward navigation is fed
//! back in from `popstate`.

use std::sync::Arc;

use leptos::prelude::*;
use minidocs_core::{PathStream, RouterService};
use tracing::debug;

/// Router bound to `window.history`.
#[derive(Clone, Debug)]
pub struct BrowserRouter {
    service: RouterService,
}

impl BrowserRouter {
    /// Create a router positioned at the current `location.pathname`.
    pub fn new() -> Self {
        let initial = location_path().unwrap_or_else(|| "/".to_string());
        debug!(path = %initial, "Browser router started");
        Self::with_service(RouterService::new(initial))
    }

    /// Wrap an existing router.
    pub const fn with_service(service: RouterService) -> Self {
        Self { service }
    }

    /// The underlying path stream.
    pub const fn service(&self) -> &RouterService {
        &self.service
    }

    /// Push a history entry for `path` and notify subscribers.
    pub fn navigate(&self, path: &str) {
        if self.service.current_path() == path {
            return;
        }
        push_history(path);
        self.service.navigate(path);
    }

    /// Pick up a path change made outside the router (back/forward).
    pub fn sync_with_location(&self) {
        if let Some(path) = location_path() {
            self.service.navigate(path);
        }
    }
}

impl Default for BrowserRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow the current route path from inside a component.
///
/// Subscribes on call and releases the subscription when the calling
/// component is cleaned up.
pub fn use_current_path() -> ReadSignal<String> {
    let router = expect_context::<BrowserRouter>();
    let (path, set_path) = signal(String::new());
    let subscription = router
        .service()
        .subscribe(Arc::new(move |current: &str| set_path.set(current.to_string())));
    on_cleanup(move || subscription.unsubscribe());
    path
}

/// Whether a click should be handled by the router instead of the browser.
///
/// Only plain primary-button clicks are intercepted; modified clicks keep
/// their usual meaning (new tab, new window, download).
pub const fn should_intercept_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !ctrl && !meta && !shift && !alt
}

/// Whether `href` is an in-app route.
pub fn is_internal_href(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

#[cfg(target_arch = "wasm32")]
fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
const fn location_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn push_history(path: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        tracing::warn!("History API unavailable");
        return;
    };
    if let Err(err) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
    {
        tracing::warn!(?err, path, "pushState failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
const fn push_history(_path: &str) {}

/// Anchor that navigates through the [`BrowserRouter`] in context.
#[component]
pub fn Link(
    /// Target route.
    #[prop(into)]
    href: String,
    /// CSS classes, possibly reactive.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let router = expect_context::<BrowserRouter>();
    let target = href.clone();

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        if !is_internal_href(&target)
            || !should_intercept_click(
                ev.button(),
                ev.ctrl_key(),
                ev.meta_key(),
                ev.shift_key(),
                ev.alt_key(),
            )
        {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=href class=move || class.get() on:click=handle_click>
            {children()}
        </a>
    }
}
