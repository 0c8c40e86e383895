//! Markdown view.
//!
//! Renders markdown to HTML with the core renderer and hands code blocks
//! to the page's syntax highlighter once mounted.

use leptos::prelude::*;
use minidocs_core::{MarkdownOptions, render_markdown};

/// Typography classes applied when the caller does not pass its own.
pub const PROSE_CLASSES: &[&str] = &[
    "prose",
    "prose-invert",
    "max-w-none",
    "prose-headings:font-bold",
    "prose-h1:text-4xl",
    "prose-h2:text-3xl",
    "prose-h3:text-2xl",
    "prose-p:leading-relaxed",
    "prose-a:no-underline",
    "prose-code:rounded",
    "prose-pre:rounded-lg",
    "prose-blockquote:italic",
];

/// Default class attribute for rendered markdown.
pub fn prose_class() -> String {
    PROSE_CLASSES.join(" ")
}

#[cfg(target_arch = "wasm32")]
mod highlight {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Prism's global highlighter, when the page loads it.
        #[wasm_bindgen(js_namespace = ["window", "Prism"], js_name = highlightAll, catch)]
        fn prism_highlight_all() -> Result<(), JsValue>;
    }

    pub fn highlight_code_blocks() {
        if let Err(err) = prism_highlight_all() {
            tracing::debug!(?err, "Syntax highlighter unavailable");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod highlight {
    pub const fn highlight_code_blocks() {}
}

/// Rendered markdown content.
#[component]

pub fn Markdown(
    /// Markdown source.
    #[prop(into)]
    content: String,
    /// Rendering options.
    #[prop(optional)]
    options: MarkdownOptions,
    /// Class attribute; the prose classes when absent.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let rendered = render_markdown(&content, &options);
    let class = class.unwrap_or_else(prose_class);

    Effect::new(move |_| highlight::highlight_code_blocks());

    view! { <div class=class inner_html=rendered.html></div> }
}
