// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Identifies one attribute of the closed attribute vocabulary.
///
/// The declaration order is the order attributes are reported in when iterating over a position
/// of an [`AttributedString`](crate::AttributedString).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// The font of the text.
    Font,
    /// Paragraph-level layout settings.
    ParagraphStyle,
    /// The color of the glyphs.
    ForegroundColor,
    /// The color behind the glyphs.
    BackgroundColor,
    /// Whether ligatures are formed.
    Ligature,
    /// Extra spacing after each character, in points.
    Kern,
    /// Strikethrough line style.
    StrikethroughStyle,
    /// Underline line style.
    UnderlineStyle,
    /// The color of glyph outlines.
    StrokeColor,
    /// The width of glyph outlines, as a percentage of the font size.
    StrokeWidth,
    /// The shadow cast by the glyphs.
    Shadow,
    /// Horizontal or vertical glyph orientation.
    VerticalGlyphForm,
}

impl AttributeKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Font,
        Self::ParagraphStyle,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::Ligature,
        Self::Kern,
        Self::StrikethroughStyle,
        Self::UnderlineStyle,
        Self::StrokeColor,
        Self::StrokeWidth,
        Self::Shadow,
        Self::VerticalGlyphForm,
    ];

    /// The attribute's name as used by text systems that key attributes by string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::ParagraphStyle => "paragraphStyle",
            Self::ForegroundColor => "foregroundColor",
            Self::BackgroundColor => "backgroundColor",
            Self::Ligature => "ligature",
            Self::Kern => "kern",
            Self::StrikethroughStyle => "strikethroughStyle",
            Self::UnderlineStyle => "underlineStyle",
            Self::StrokeColor => "strokeColor",
            Self::StrokeWidth => "strokeWidth",
            Self::Shadow => "shadow",
            Self::VerticalGlyphForm => "verticalGlyphForm",
        }
    }

    /// Returns `true` for attributes whose value is stored as a [`Number`](crate::Number).
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Ligature
                | Self::Kern
                | Self::StrikethroughStyle
                | Self::UnderlineStyle
                | Self::StrokeWidth
                | Self::VerticalGlyphForm
        )
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeKey {
    type Err = ParseAttributeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or(ParseAttributeKeyError(()))
    }
}

/// Error returned when a string names no known attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAttributeKeyError(());

impl fmt::Display for ParseAttributeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown attribute name")
    }
}

impl core::error::Error for ParseAttributeKeyError {}
