//! Markdown to HTML rendering for documentation pages.
//!
//! Headings become linkable anchors and code blocks carry a
//! `language-*` class for the client-side highlighter. Code block sources
//! are also returned so the UI can attach copy actions to them.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use serde::Serialize;
use tracing::debug;

use crate::config::MarkdownOptions;

/// A heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading depth, 1 through 6.
    pub level: u8,
    /// Plain text of the heading.
    pub text: String,
    /// Anchor id derived from the text.
    pub slug: String,
}

/// A fenced or indented code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Lower-cased language name.
    pub language: String,
    /// Raw source text.
    pub code: String,
}

/// Output of [`render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedMarkdown {
    /// Rendered HTML.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<Heading>,
    /// Code blocks in document order.
    pub code_blocks: Vec<CodeBlock>,
}

/// Turn heading text into an anchor id.
///
/// Lower-cases, collapses whitespace runs into `-`, then drops anything
/// that is not an ASCII letter, digit, `_` or `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        for lower in ch.to_lowercase() {
            if lower.is_ascii_alphanumeric() || lower == '_' || lower == '-' {
                slug.push(lower);
            }
        }
    }
    slug
}

const fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn code_language(kind: &CodeBlockKind<'_>, default_language: &str) -> String {
    let named = match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
        CodeBlockKind::Indented => None,
    };
    // The name ends up inside a class attribute.
    let language: String = named
        .unwrap_or(default_language)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#'))
        .collect::<String>()
        .to_lowercase();
    if language.is_empty() {
        default_language.to_lowercase()
    } else {
        language
    }
}

fn parser_options(options: &MarkdownOptions) -> Options {
    if options.gfm {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
    } else {
        Options::empty()
    }
}

/// Render `content` to HTML.
pub fn render(content: &str, options: &MarkdownOptions) -> RenderedMarkdown {
    let parser = Parser::new_ext(content, parser_options(options));

    let mut headings = Vec::new();
    let mut code_blocks = Vec::new();
    let mut events: Vec<Event<'_>> = Vec::new();

    // Heading events are buffered until the end tag so the slug can be
    // computed from the full text.
    let mut heading: Option<(u8, Vec<Event<'_>>, String)> = None;
    let mut code: Option<CodeBlock> = None;

    for event in parser {
        if let Some((level, buffered, text)) = heading.as_mut() {
            match event {
                Event::End(TagEnd::Heading(_)) => {
                    let level = *level;
                    let text = std::mem::take(text);
                    let inner = std::mem::take(buffered);
                    heading = None;

                    let slug = slugify(&text);
                    events.push(Event::Html(CowStr::from(format!(
                        r##"<a href="#{slug}"><h{level} id="{slug}" class="anchor">"##
                    ))));
                    events.extend(inner);
                    events.push(Event::Html(CowStr::from(format!("</h{level}></a>\n"))));
                    headings.push(Heading { level, text, slug });
                }
                Event::Text(ref t) | Event::Code(ref t) => {
                    text.push_str(t);
                    buffered.push(event);
                }
                other => buffered.push(other),
            }
            continue;
        }

        if let Some(block) = code.as_mut() {
            match event {
                Event::End(TagEnd::CodeBlock) => {
                    events.push(Event::Html(CowStr::from("</code></pre>\n")));
                    if let Some(block) = code.take() {
                        code_blocks.push(block);
                    }
                }
                Event::Text(text) => {
                    block.code.push_str(&text);
                    events.push(Event::Text(text));
                }
                other => events.push(other),
            }
            continue;
        }

        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((heading_depth(level), Vec::new(), String::new()));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = code_language(&kind, &options.default_language);
                events.push(Event::Html(CowStr::from(format!(
                    r#"<pre><code class="language-{language}">"#
                ))));
                code = Some(CodeBlock {
                    language,
                    code: String::new(),
                });
            }
            Event::SoftBreak if options.hard_breaks => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    debug!(
        headings = headings.len(),
        code_blocks = code_blocks.len(),
        "Rendered markdown"
    );

    RenderedMarkdown {
        html: out,
        headings,
        code_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_default(content: &str) -> RenderedMarkdown {
        render(content, &MarkdownOptions::default())
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("Props & Children"), "props--children");
        assert_eq!(slugify("  Leading  space"), "-leading-space");
        assert_eq!(slugify("@Inject()"), "inject");
        assert_eq!(slugify("snake_case-id"), "snake_case-id");
        assert_eq!(slugify("Café"), "caf");
    }

    #[test]
    fn test_empty_input() {
        let rendered = render_default("");
        assert!(rendered.html.is_empty());
        assert!(rendered.headings.is_empty());
        assert!(rendered.code_blocks.is_empty());
    }

    #[test]
    fn test_heading_anchor() {
        let rendered = render_default("## Quick Start");
        assert_eq!(
            rendered.html,
            "<a href=\"#quick-start\"><h2 id=\"quick-start\" class=\"anchor\">Quick Start</h2></a>\n"
        );
        assert_eq!(
            rendered.headings,
            vec![Heading {
                level: 2,
                text: "Quick Start".to_string(),
                slug: "quick-start".to_string(),
            }]
        );
    }

    #[test]
    fn test_heading_with_inline_code() {
        let rendered = render_default("# The `signal` API");
        assert_eq!(rendered.headings[0].text, "The signal API");
        assert_eq!(rendered.headings[0].slug, "the-signal-api");
        assert!(rendered.html.contains("<code>signal</code>"));
    }

    #[test]
    fn test_fenced_code_block() {
        let rendered = render_default("```TSX\nconst a = <b>1</b>;\n```\n");
        assert_eq!(
            rendered.code_blocks,
            vec![CodeBlock {
                language: "tsx".to_string(),
                code: "const a = <b>1</b>;\n".to_string(),
            }]
        );
        assert!(rendered.html.contains(r#"<pre><code class="language-tsx">"#));
        assert!(rendered.html.contains("&lt;b&gt;1&lt;/b&gt;"));
    }

    #[test]
    fn test_code_block_without_language_uses_default() {
        let rendered = render_default("```\nnpm install\n```\n");
        assert_eq!(rendered.code_blocks[0].language, "typescript");

        let options = MarkdownOptions {
            default_language: "bash".to_string(),
            ..MarkdownOptions::default()
        };
        let rendered = render("    npm install\n", &options);
        assert_eq!(rendered.code_blocks[0].language, "bash");
        assert_eq!(rendered.code_blocks[0].code, "npm install\n");
    }

    #[test]
    fn test_soft_breaks() {
        let rendered = render_default("one\ntwo");
        assert!(rendered.html.contains("one<br />"));

        let options = MarkdownOptions {
            hard_breaks: false,
            ..MarkdownOptions::default()
        };
        let rendered = render("one\ntwo", &options);
        assert!(!rendered.html.contains("<br />"));
    }

    #[test]
    fn test_gfm_tables() {
        let table = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(render_default(table).html.contains("<table>"));

        let options = MarkdownOptions {
            gfm: false,
            ..MarkdownOptions::default()
        };
        assert!(!render(table, &options).html.contains("<table>"));
    }
}
