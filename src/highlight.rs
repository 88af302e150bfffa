use std::sync::LazyLock;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::ResolvedTheme;

#[cfg(feature = "ssr")]
use syntect::easy::HighlightLines;
#[cfg(feature = "ssr")]
use syntect::highlighting::{FontStyle, Style, ThemeSet};
#[cfg(feature = "ssr")]
use syntect::parsing::{SyntaxReference, SyntaxSet};
#[cfg(feature = "ssr")]
use syntect::util::LinesWithEndings;

/// Highlighted snippets per theme, in `SNIPPETS` order.
pub static GLOBAL_SNIPPET_CACHE: LazyLock<DashMap<ResolvedTheme, Vec<HighlightedSnippet>>> =
    LazyLock::new(DashMap::new);

/// Language tags the bundled grammars don't know, mapped to one they do.
#[cfg(feature = "ssr")]
const LANGUAGE_ALIASES: [(&str, &str); 2] = [("jsx", "js"), ("tsx", "js")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// `#rrggbb`, empty to inherit the surrounding colour.
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl Token {
    pub fn style(&self) -> String {
        let mut style = String::new();
        if !self.color.is_empty() {
            style.push_str(&format!("color:{};", self.color));
        }
        if self.bold {
            style.push_str("font-weight:bold;");
        }
        if self.italic {
            style.push_str("font-style:italic;");
        }
        style
    }

    #[cfg(feature = "ssr")]
    fn from_style(style: Style, text: &str) -> Self {
        let c = style.foreground;
        Token {
            text: text.to_string(),
            color: format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightedSnippet {
    pub lines: Vec<Vec<Token>>,
}

impl HighlightedSnippet {
    /// Unstyled rendition, one token per line.
    pub fn plain(code: &str) -> Self {
        let lines = code
            .lines()
            .map(|line| {
                if line.is_empty() {
                    Vec::new()
                } else {
                    vec![Token {
                        text: line.to_string(),
                        color: String::new(),
                        bold: false,
                        italic: false,
                    }]
                }
            })
            .collect();
        HighlightedSnippet { lines }
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|t| t.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("Unknown highlight theme: {0}")]
    UnknownTheme(String),
    #[error("Couldn't highlight snippet: {0}")]
    Syntect(String),
}

#[cfg(feature = "ssr")]
pub static HIGHLIGHTER: LazyLock<SnippetHighlighter> = LazyLock::new(SnippetHighlighter::new);

/// Loads the grammar and theme sets once; reuse it for every snippet.
#[cfg(feature = "ssr")]
pub struct SnippetHighlighter {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

#[cfg(feature = "ssr")]
impl Default for SnippetHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ssr")]
impl SnippetHighlighter {
    pub fn new() -> SnippetHighlighter {
        let syntaxset = SyntaxSet::load_defaults_newlines();
        let themeset = ThemeSet::load_defaults();

        SnippetHighlighter {
            syntaxset,
            themeset,
        }
    }

    /// Unknown language tags are highlighted as plain text.
    fn syntax_for(&self, language: &str) -> &SyntaxReference {
        self.syntaxset
            .find_syntax_by_token(language)
            .or_else(|| {
                LANGUAGE_ALIASES
                    .iter()
                    .find(|(tag, _)| *tag == language)
                    .and_then(|(_, target)| self.syntaxset.find_syntax_by_token(target))
            })
            .unwrap_or_else(|| self.syntaxset.find_syntax_plain_text())
    }

    pub fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: ResolvedTheme,
    ) -> Result<HighlightedSnippet, HighlightError> {
        let syntax = self.syntax_for(language);
        let theme_name = theme.highlight_theme();
        let theme = self
            .themeset
            .themes
            .get(theme_name)
            .ok_or_else(|| HighlightError::UnknownTheme(theme_name.to_string()))?;

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(code) {
            let ranges = highlighter
                .highlight_line(line, &self.syntaxset)
                .map_err(|e| HighlightError::Syntect(e.to_string()))?;
            let tokens = ranges
                .into_iter()
                .map(|(style, text)| Token::from_style(style, text.trim_end_matches('\n')))
                .filter(|t| !t.text.is_empty())
                .collect();
            lines.push(tokens);
        }

        Ok(HighlightedSnippet { lines })
    }
}

/// Highlight every hero snippet for `theme`, caching the result.
#[cfg(feature = "ssr")]
pub fn highlight_snippets(theme: ResolvedTheme) -> Result<Vec<HighlightedSnippet>, HighlightError> {
    use crate::snippets::SNIPPETS;

    let cache = &*GLOBAL_SNIPPET_CACHE;
    if let Some(s) = cache.get(&theme) {
        return Ok((*s).clone());
    }
    tracing::debug!(?theme, "highlighting hero snippets");
    let highlighted = SNIPPETS
        .iter()
        .map(|s| HIGHLIGHTER.highlight(s.code, s.language, theme))
        .collect::<Result<Vec<_>, _>>()?;
    cache.insert(theme, highlighted.clone());
    Ok(highlighted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keeps_lines() {
        let code = "a {\n\n  b: c;\n}";
        let plain = HighlightedSnippet::plain(code);
        assert_eq!(plain.lines.len(), 4);
        assert!(plain.lines[1].is_empty());
        assert_eq!(plain.text(), code);
    }

    #[test]
    fn test_token_style() {
        let token = Token {
            text: "fn".to_string(),
            color: "#ff0000".to_string(),
            bold: true,
            italic: false,
        };
        assert_eq!(token.style(), "color:#ff0000;font-weight:bold;");

        let plain = Token {
            text: "x".to_string(),
            color: String::new(),
            bold: false,
            italic: true,
        };
        assert_eq!(plain.style(), "font-style:italic;");
    }

    #[cfg(feature = "ssr")]
    mod engine {
        use std::collections::HashSet;

        use super::super::*;
        use crate::snippets::SNIPPETS;

        fn colors(s: &HighlightedSnippet) -> HashSet<String> {
            s.lines
                .iter()
                .flatten()
                .map(|t| t.color.clone())
                .collect()
        }

        #[test]
        fn test_highlight_preserves_text() {
            let highlighter = SnippetHighlighter::new();
            for snippet in SNIPPETS.iter() {
                let out = highlighter
                    .highlight(snippet.code, snippet.language, ResolvedTheme::Dark)
                    .unwrap();
                assert_eq!(out.text(), snippet.code);
                assert_eq!(out.lines.len(), snippet.code.lines().count());
            }
        }

        #[test]
        fn test_known_language_gets_colors() {
            let highlighter = SnippetHighlighter::new();
            let out = highlighter
                .highlight(SNIPPETS[0].code, "javascript", ResolvedTheme::Light)
                .unwrap();
            assert!(colors(&out).len() > 1);
        }

        #[test]
        fn test_jsx_uses_javascript_grammar() {
            let highlighter = SnippetHighlighter::new();
            let out = highlighter
                .highlight(SNIPPETS[1].code, "jsx", ResolvedTheme::Dark)
                .unwrap();
            assert!(colors(&out).len() > 1);
        }

        #[test]
        fn test_unknown_language_is_plain() {
            let highlighter = SnippetHighlighter::new();
            let code = "MOVE 1 TO X.\nDISPLAY X.";
            let out = highlighter
                .highlight(code, "not-a-language", ResolvedTheme::Dark)
                .unwrap();
            assert!(out.lines.iter().all(|l| l.len() == 1));
            assert_eq!(colors(&out).len(), 1);
            assert_eq!(out.text(), code);
        }

        #[test]
        fn test_themes_differ() {
            let highlighter = SnippetHighlighter::new();
            let dark = highlighter
                .highlight(SNIPPETS[3].code, "css", ResolvedTheme::Dark)
                .unwrap();
            let light = highlighter
                .highlight(SNIPPETS[3].code, "css", ResolvedTheme::Light)
                .unwrap();
            assert_ne!(dark, light);
        }

        #[test]
        fn test_highlight_snippets_caches() {
            let first = highlight_snippets(ResolvedTheme::Dark).unwrap();
            assert_eq!(first.len(), SNIPPETS.len());
            assert!(GLOBAL_SNIPPET_CACHE.contains_key(&ResolvedTheme::Dark));
            let second = highlight_snippets(ResolvedTheme::Dark).unwrap();
            assert_eq!(first, second);
        }
    }
}
