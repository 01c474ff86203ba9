use serde::Serialize;
use utoipa::ToSchema;

/// Glyphs the client knows how to draw for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconGlyph {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Globe,
    Mail,
}

const ICON_TABLE: &[(&str, IconGlyph)] = &[
    ("Github", IconGlyph::Github),
    ("Linkedin", IconGlyph::Linkedin),
    ("Twitter", IconGlyph::Twitter),
    ("Instagram", IconGlyph::Instagram),
    ("Youtube", IconGlyph::Youtube),
    ("Globe", IconGlyph::Globe),
    ("Mail", IconGlyph::Mail),
];

impl IconGlyph {
    pub const DEFAULT: IconGlyph = IconGlyph::Mail;

    /// Names are matched exactly; anything unknown gets [`IconGlyph::DEFAULT`].
    pub fn resolve(name: &str) -> Self {
        ICON_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, glyph)| *glyph)
            .unwrap_or(Self::DEFAULT)
    }
}
