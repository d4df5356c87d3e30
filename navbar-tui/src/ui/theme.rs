use ratatui::style::Color;

/// All colors used by the navbar, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // ── Bar ───────────────────────────────────────────────────────
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub bar_border: Color,
    pub logo: Color,
    pub focus_fg: Color,
    pub focus_bg: Color,
    pub badge: Color,

    // ── Semantic status ───────────────────────────────────────────
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub info: Color,
    pub muted: Color,

    // ── Text ──────────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,

    // ── Menus ─────────────────────────────────────────────────────
    pub menu_bg: Color,
    pub menu_border: Color,
    pub menu_highlight: Color,
    pub menu_highlight_bg: Color,
}

impl Theme {
    /// Designed for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            bar_bg: Color::Rgb(25, 118, 210),
            bar_fg: Color::White,
            bar_border: Color::Cyan,
            logo: Color::Yellow,
            focus_fg: Color::Black,
            focus_bg: Color::Yellow,
            badge: Color::LightRed,

            positive: Color::Green,
            warning: Color::Yellow,
            negative: Color::Red,
            info: Color::Cyan,
            muted: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,

            menu_bg: Color::Black,
            menu_border: Color::Yellow,
            menu_highlight: Color::Yellow,
            menu_highlight_bg: Color::Rgb(40, 40, 40),
        }
    }

    /// Designed for terminals with a light background.
    pub fn light() -> Self {
        Self {
            bar_bg: Color::Rgb(21, 101, 192),
            bar_fg: Color::White,
            bar_border: Color::Blue,
            logo: Color::Rgb(255, 214, 0),
            focus_fg: Color::White,
            focus_bg: Color::Rgb(13, 71, 161),
            badge: Color::Rgb(198, 40, 40),

            positive: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 120, 0),
            negative: Color::Rgb(200, 0, 0),
            info: Color::Rgb(0, 100, 160),
            muted: Color::Rgb(120, 120, 120),

            text_primary: Color::Rgb(30, 30, 30),
            text_secondary: Color::Rgb(80, 80, 80),

            menu_bg: Color::Rgb(250, 250, 250),
            menu_border: Color::Rgb(21, 101, 192),
            menu_highlight: Color::Rgb(13, 71, 161),
            menu_highlight_bg: Color::Rgb(220, 230, 245),
        }
    }

    /// Detect theme from the `DOJONAV_THEME` environment variable.
    ///
    /// Set `DOJONAV_THEME=light` for light terminals. Defaults to dark.
    pub fn detect() -> Self {
        Self::from_preference(std::env::var("DOJONAV_THEME").ok().as_deref())
    }

    /// Create a theme from a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.text_primary == Color::White
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
