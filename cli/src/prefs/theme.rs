//! File: cli/src/prefs/theme.rs
//!
//! Visual themes of the portfolio site. The stored value is the theme id;
//! the document root carries exactly one `theme-<id>` class.

use crate::core::error::FolioError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Bauhaus,
    Terminal,
    NeoBrutalism,
    Sketch,
    Retro,
    Material,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Default,
        Theme::Bauhaus,
        Theme::Terminal,
        Theme::NeoBrutalism,
        Theme::Sketch,
        Theme::Retro,
        Theme::Material,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Bauhaus => "bauhaus",
            Theme::Terminal => "terminal",
            Theme::NeoBrutalism => "neo-brutalism",
            Theme::Sketch => "sketch",
            Theme::Retro => "retro",
            Theme::Material => "material",
        }
    }

    /// Class applied to the document root, e.g. `theme-terminal`.
    pub fn css_class(self) -> String {
        format!("theme-{}", self.id())
    }

    /// Comma-separated ids, for messages.
    pub fn available() -> String {
        Theme::ALL
            .iter()
            .map(|theme| theme.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    /// Ids are matched exactly; `Bauhaus` is not a theme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| FolioError::UnknownTheme {
                id: s.to_string(),
                available: Theme::available(),
            })
    }
}
