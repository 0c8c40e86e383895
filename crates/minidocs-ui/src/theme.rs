//! Theme configuration for the documentation site.
//!
//! Dark slate background with a violet-to-pink accent, matching the code
//! block palette.

/// Color palette for the site.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#111827";
        /// Sidebar panel, translucent over the page gradient.
        pub const SIDEBAR: &str = "rgba(17, 24, 39, 0.5)";
        /// Hover state background.
        pub const HOVER: &str = "rgba(31, 41, 55, 0.5)";
        /// Code block background.
        pub const CODE: &str = "#282a36";
        /// Code block header background.
        pub const CODE_HEADER: &str = "#1e1f29";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#f3f4f6";
        /// Body copy.
        pub const SECONDARY: &str = "#d1d5db";
        /// Section labels.
        pub const MUTED: &str = "#9ca3af";
    }

    /// Accent colors.
    pub mod accent {
        /// Links and active markers.
        pub const PRIMARY: &str = "#a855f7";
        /// Active icon tint.
        pub const PRIMARY_LIGHT: &str = "#c084fc";
        /// Secondary accent.
        pub const SECONDARY: &str = "#ec4899";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "#1f2937";
        /// Code and table borders.
        pub const STRONG: &str = "#374151";
    }

    /// Gradient definitions.
    pub mod gradient {
        /// Page background.
        pub const PAGE: &str = "linear-gradient(to bottom right, #111827, #1f2937, #0f172a)";
        /// Active sidebar link.
        pub const ACTIVE_LINK: &str =
            "linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2))";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Monospace font stack for code.
    pub const FONT_FAMILY_MONO: &str =
        "'JetBrains Mono', 'Fira Code', ui-monospace, SFMono-Regular, Menlo, monospace";
}

/// Fixed layout dimensions.
pub mod layout {
    /// Header height; the sidebar starts below it.
    pub const HEADER_HEIGHT: &str = "5rem";
    /// Sidebar width.
    pub const SIDEBAR_WIDTH: &str = "18rem";
    /// Maximum content width.
    pub const CONTENT_MAX_WIDTH: &str = "64rem";
}

/// Animation timing.
pub mod animation {
    /// Section expand/collapse and link hover.
    pub const FAST: &str = "200ms ease";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --bg-primary: {bg_primary};
  --bg-sidebar: {bg_sidebar};
  --bg-hover: {bg_hover};
  --bg-code: {bg_code};
  --bg-code-header: {bg_code_header};

  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-muted: {text_muted};

  --accent-primary: {accent_primary};
  --accent-primary-light: {accent_primary_light};
  --accent-secondary: {accent_secondary};

  --border-default: {border_default};
  --border-strong: {border_strong};

  --gradient-page: {gradient_page};
  --gradient-active-link: {gradient_active_link};

  --font-family: {font_family};
  --font-family-mono: {font_family_mono};

  --header-height: {header_height};
  --sidebar-width: {sidebar_width};
  --content-max-width: {content_max_width};

  --transition-fast: {transition_fast};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_sidebar = colors::background::SIDEBAR,
        bg_hover = colors::background::HOVER,
        bg_code = colors::background::CODE,
        bg_code_header = colors::background::CODE_HEADER,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_muted = colors::text::MUTED,
        accent_primary = colors::accent::PRIMARY,
        accent_primary_light = colors::accent::PRIMARY_LIGHT,
        accent_secondary = colors::accent::SECONDARY,
        border_default = colors::border::DEFAULT,
        border_strong = colors::border::STRONG,
        gradient_page = colors::gradient::PAGE,
        gradient_active_link = colors::gradient::ACTIVE_LINK,
        font_family = typography::FONT_FAMILY,
        font_family_mono = typography::FONT_FAMILY_MONO,
        header_height = layout::HEADER_HEIGHT,
        sidebar_width = layout::SIDEBAR_WIDTH,
        content_max_width = layout::CONTENT_MAX_WIDTH,
        transition_fast = animation::FAST,
    )
}
