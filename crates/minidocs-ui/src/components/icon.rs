//! Icon registry and icon component.
//!
//! Icons are looked up by the symbolic names used in the navigation menu.

use leptos::prelude::*;

/// SVG path data for the named icons (24x24 viewBox).
pub mod icons {
    /// Lightning bolt.
    pub const LIGHTNING: &str = "M7 2v11h3v9l7-12h-4l4-8z";
    /// Angle brackets.
    pub const CODE: &str = "M9.4 16.6L4.8 12l4.6-4.6L8 6l-6 6 6 6 1.4-1.4zm5.2 0l4.6-4.6-4.6-4.6L16 6l6 6-6 6-1.4-1.4z";
    /// Download arrow.
    pub const DOWNLOAD: &str = "M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z";
    /// Page with lines.
    pub const DOCUMENT: &str = "M14 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z";
    /// Book with bookmark.
    pub const BOOK: &str = "M18 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 4h5v8l-2.5-1.5L6 12V4z";
    /// Widget blocks.
    pub const COMPONENT: &str = "M13 13v8h8v-8h-8zM3 21h8v-8H3v8zM3 3v8h8V3H3zm13.66-1.31L11 7.34 16.66 13l5.66-5.66-5.66-5.65z";
    /// Circular arrows.
    pub const LIFECYCLE: &str = "M12 6v3l4-4-4-4v3c-4.42 0-8 3.58-8 8 0 1.57.46 3.03 1.24 4.26L6.7 14.8c-.45-.83-.7-1.79-.7-2.8 0-3.31 2.69-6 6-6zm6.76 1.74L17.3 9.2c.44.84.7 1.79.7 2.8 0 3.31-2.69 6-6 6v-3l-4 4 4 4v-3c4.42 0 8-3.58 8-8 0-1.57-.46-3.03-1.24-4.26z";
    /// Stacked layers.
    pub const LAYERS: &str = "M11.99 18.54l-7.37-5.73L3 14.07l9 7 9-7-1.63-1.27-7.38 5.74zM12 16l7.36-5.73L21 9l-9-7-9 7 1.63 1.27L12 16z";
    /// Sliders.
    pub const ADJUSTMENTS: &str = "M3 17v2h6v-2H3zM3 5v2h10V5H3zm10 16v-2h8v-2h-8v-2h-2v6h2zM7 9v2H3v2h4v2h2V9H7zm14 4v-2H11v2h10zm-6-4h2V7h4V5h-4V3h-2v6z";
    /// Forking route.
    pub const ROUTE: &str = "M9.78 11.16l-1.42 1.42c-.68-.69-1.34-1.58-1.79-2.94l1.94-.49c.32.89.77 1.5 1.27 2.01zM11 6L7 2 3 6h3.02c.02.81.08 1.54.19 2.17l1.94-.49C8.08 7.2 8.03 6.63 8.02 6H11zm10 0l-4-4-4 4h2.99c-.1 3.68-1.28 4.75-2.54 5.88-.5.44-1.01.92-1.45 1.55-.34-.49-.73-.88-1.13-1.24L9.46 13.6c.93.85 1.54 1.54 1.54 3.4v5h2v-5c0-2.02.71-2.66 1.79-3.63 1.38-1.24 3.08-2.78 3.2-7.37H21z";
    /// Shield.
    pub const SHIELD: &str = "M12 1L3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4z";
    /// Storage rack.
    pub const DATABASE: &str = "M2 20h20v-4H2v4zm2-3h2v2H4v-2zM2 4v4h20V4H2zm4 3H4V5h2v2zm-4 7h20v-4H2v4zm2-3h2v2H4v-2z";
    /// Module grid.
    pub const SLOTS: &str = "M4 11h5V5H4v6zm0 7h5v-6H4v6zm6 0h5v-6h-5v6zm6 0h5v-6h-5v6zm-6-7h5V5h-5v6zm6-6v6h5V5h-5z";
    /// Chain link.
    pub const LINK: &str = "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8v2zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z";
    /// Opposing arrows.
    pub const EXCHANGE: &str = "M6.99 11L3 15l3.99 4v-3H14v-2H6.99v-3zM21 9l-3.99-4v3H10v2h7.01v3L21 9z";
    /// Two people.
    pub const USERS: &str = "M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5c-1.66 0-3 1.34-3 3s1.34 3 3 3zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5C6.34 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z";
    /// Star.
    pub const STAR: &str = "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z";
    /// Eye.
    pub const EYE: &str = "M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z";
    /// Folder.
    pub const FOLDER: &str = "M10 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V8c0-1.1-.9-2-2-2h-8l-2-2z";
    /// Check mark.
    pub const CHECK: &str = "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z";
    /// Chevron pointing down.
    pub const ARROW_DOWN: &str = "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z";

    /// Every registered icon name.
    pub const NAMES: &[&str] = &[
        "lightning",
        "code",
        "download",
        "document",
        "book",
        "component",
        "lifecycle",
        "layers",
        "adjustments",
        "route",
        "shield",
        "database",
        "slots",
        "link",
        "exchange",
        "users",
        "star",
        "eye",
        "folder",
        "check",
        "arrow-down",
    ];

    /// Path data for `name`, if registered.
    pub fn path_for(name: &str) -> Option<&'static str> {
        let path = match name {
            "lightning" => LIGHTNING,
            "code" => CODE,
            "download" => DOWNLOAD,
            "document" => DOCUMENT,
            "book" => BOOK,
            "component" => COMPONENT,
            "lifecycle" => LIFECYCLE,
            "layers" => LAYERS,
            "adjustments" => ADJUSTMENTS,
            "route" => ROUTE,
            "shield" => SHIELD,
            "database" => DATABASE,
            "slots" => SLOTS,
            "link" => LINK,
            "exchange" => EXCHANGE,
            "users" => USERS,
            "star" => STAR,
            "eye" => EYE,
            "folder" => FOLDER,
            "check" => CHECK,
            "arrow-down" => ARROW_DOWN,
            _ => return None,
        };
        Some(path)
    }
}

/// An icon from the registry. Unknown names render an empty svg.
#[component]

pub fn Icon(
    /// Registered icon name.
    #[prop(into)]
    name: String,
    /// CSS classes, possibly reactive.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Width and height in pixels.
    #[prop(default = 24)]
    size: u32,
) -> impl IntoView {
    let path = icons::path_for(&name);
    if path.is_none() {
        tracing::debug!(icon = %name, "Unknown icon");
    }

    view! {
        <svg
            class=move || class.get()
            viewBox="0 0 24 24"
            width=size
            height=size
            fill="currentColor"
            aria-hidden="true"
        >
            {path.map(|d| view! { <path d=d /> })}
        </svg>
    }
}
