//! Layout components for the site structure.
//!
//! A fixed header on top, the navigation sidebar on the left and the page
//! content filling the rest.

use leptos::prelude::*;

/// The main layout component that provides the site structure.
#[component]

pub fn Layout(
    /// Title shown in the header.
    #[prop(into)]
    title: String,
    /// Sidebar and main content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout">
            <Header title=title />
            <div class="layout-container">
                {children()}
            </div>
        </div>
    }
}

/// Site header with the framework name.
#[component]

pub fn Header(
    /// Title text.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <header class="layout-header">
            <div class="logo">
                <span class="logo-text">{title}</span>
            </div>
        </header>
    }
}

/// Main content area component for use within Layout.
#[component]

pub fn LayoutMain(
    /// Content to render in the main area.
    children: Children,
) -> impl IntoView {
    view! {
        <main class="layout-content">
            <div class="layout-content-inner">
                {children()}
            </div>
        </main>
    }
}
