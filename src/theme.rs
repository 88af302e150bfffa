use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::Icon;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Display mode chosen by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme after `System` has been resolved against the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }

    /// Order used by the toggle button.
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Theme::Light => Icon::Sun,
            Theme::Dark => Icon::Moon,
            Theme::System => Icon::Monitor,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    /// Class applied to the page root so tailwind `dark:` variants kick in.
    pub fn class_name(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            ResolvedTheme::Dark => "/logo/logo_white_full.png",
            ResolvedTheme::Light => "/logo/logo_black_full.png",
        }
    }

    /// Name of the bundled syntect theme used for the hero snippets.
    pub fn highlight_theme(self) -> &'static str {
        match self {
            ResolvedTheme::Dark => "base16-ocean.dark",
            ResolvedTheme::Light => "InspiredGitHub",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_follows_preference() {
        assert_eq!(Theme::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(Theme::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_explicit_theme_ignores_preference() {
        assert_eq!(Theme::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(Theme::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn test_toggle_cycles_through_all_modes() {
        let start = Theme::Light;
        let mut t = start;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(t);
            t = t.next();
        }
        assert_eq!(t, start);
        assert_eq!(seen, vec![Theme::Light, Theme::Dark, Theme::System]);
    }

    #[test]
    fn test_each_mode_has_its_own_icon() {
        assert_eq!(Theme::Light.icon(), Icon::Sun);
        assert_eq!(Theme::Dark.icon(), Icon::Moon);
        assert_eq!(Theme::System.icon(), Icon::Monitor);
    }

    #[test]
    fn test_parse_and_display() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_logo_contrasts_with_background() {
        assert!(ResolvedTheme::Dark.logo_src().contains("white"));
        assert!(ResolvedTheme::Light.logo_src().contains("black"));
    }

    #[test]
    fn test_highlight_theme_per_mode() {
        assert_ne!(
            ResolvedTheme::Dark.highlight_theme(),
            ResolvedTheme::Light.highlight_theme()
        );
    }
}
