use std::sync::LazyLock;

use review_core::escape_html;
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };
const THEME: &str = "InspiredGitHub";

fn syntax_for(language: &str) -> &'static SyntaxReference {
    let token = language.trim().to_ascii_lowercase();
    let token = match token.as_str() {
        "c++" | "cxx" | "cc" => "cpp",
        other => other,
    };
    SYNTAX_SET
        .find_syntax_by_token(token)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

/// Highlight `source` as `language`, producing `<span class="hl-...">`
/// markup. Falls back to escaped plain text if highlighting fails.
#[must_use]
pub fn highlight_code(language: &str, source: &str) -> String {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax_for(language), &SYNTAX_SET, CLASS_STYLE);
    for line in LinesWithEndings::from(source) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::debug!(language, error = %err, "highlighting failed; showing plain code");
            return escape_html(source);
        }
    }
    generator.finalize()
}

/// Stylesheet for the classes emitted by [`highlight_code`].
#[must_use]
pub fn highlight_css() -> &'static str {
    static CSS: LazyLock<String> = LazyLock::new(|| {
        let themes = ThemeSet::load_defaults();
        let Some(theme) = themes.themes.get(THEME) else {
            return String::new();
        };
        css_for_theme_with_class_style(theme, CLASS_STYLE).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not build highlight stylesheet");
            String::new()
        })
    });
    &CSS
}
