// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types carried by attributes.

use alloc::sync::Arc;
use core::ops::{BitOr, BitOrAssign};

use peniko::kurbo::Vec2;

pub use peniko::Color;

use crate::Number;

/// A font description.
///
/// This names a font rather than holding font data; matching it against installed fonts is the
/// job of whatever consumes the attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name, such as `"Helvetica Neue"`.
    pub family: Arc<str>,
    /// Point size.
    pub size: f32,
    /// Weight on the 1 to 1000 scale, where 400 is normal and 700 is bold.
    pub weight: f32,
    /// Whether the italic or oblique face is requested.
    pub italic: bool,
}

impl Font {
    /// Creates a regular weight, upright font.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: 400.0,
            italic: false,
        }
    }

    /// Creates the platform's default UI font at `size`.
    pub fn system(size: f32) -> Self {
        Self::new("system-ui", size)
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with the italic flag set to `italic`.
    #[must_use]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Returns this font at a different point size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Horizontal alignment of lines within a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Align to the leading edge for the writing direction.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Center lines.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to fill the width, except the last.
    Justified,
}

/// What happens to a line that does not fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrap,
    /// Wrap at any character.
    CharWrap,
    /// Cut the line off at the edge.
    Clip,
    /// Elide the start of the line.
    TruncateHead,
    /// Elide the end of the line.
    TruncateTail,
    /// Elide the middle of the line.
    TruncateMiddle,
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WritingDirection {
    /// Derived from the first strong character.
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// Paragraph-level layout settings.
///
/// All lengths are in points. A zero `minimum_line_height`, `maximum_line_height` or
/// `line_height_multiple` means "no constraint".
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ParagraphStyle {
    /// Alignment of lines.
    pub alignment: TextAlignment,
    /// Extra space between lines.
    pub line_spacing: f32,
    /// Space after the paragraph.
    pub paragraph_spacing: f32,
    /// Space before the paragraph.
    pub paragraph_spacing_before: f32,
    /// Indent of the first line.
    pub first_line_head_indent: f32,
    /// Indent of lines other than the first.
    pub head_indent: f32,
    /// Trailing indent. Positive values are measured from the leading margin, zero or negative
    /// values from the trailing margin.
    pub tail_indent: f32,
    /// Lower bound on line height.
    pub minimum_line_height: f32,
    /// Upper bound on line height.
    pub maximum_line_height: f32,
    /// Multiplier applied to the natural line height.
    pub line_height_multiple: f32,
    /// Handling of lines too long for the container.
    pub line_break_mode: LineBreakMode,
    /// The base writing direction.
    pub base_writing_direction: WritingDirection,
}

impl ParagraphStyle {
    /// Creates the default paragraph style.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A shadow drawn beneath glyphs.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the glyphs, in points.
    pub offset: Vec2,
    /// Blur radius, in points.
    pub blur_radius: f64,
    /// Shadow color. `None` uses a translucent black chosen by the renderer.
    pub color: Option<Color>,
}

impl Shadow {
    /// Creates a shadow with the default color.
    pub fn new(offset: Vec2, blur_radius: f64) -> Self {
        Self {
            offset,
            blur_radius,
            color: None,
        }
    }

    /// Returns this shadow with an explicit color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, -3.0), 0.0)
    }
}

/// Ligature formation.
///
/// A transparent wrapper over the raw value so that values outside the named constants survive a
/// round trip through [`Number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct LigatureType(pub u32);

impl LigatureType {
    /// Standard ligatures are formed.
    pub const STANDARD: Self = Self(0);

    /// The default ligature setting.
    pub const NONE: Self = Self(1);
}

/// Glyph orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct VerticalGlyphForm(pub u32);

impl VerticalGlyphForm {
    /// Horizontal text.
    pub const HORIZONTAL: Self = Self(0);

    /// Vertical text.
    pub const VERTICAL: Self = Self(1);
}

/// Line style for underlines and strikethroughs.
///
/// The low byte selects the line style, the second byte the dash pattern, and [`Self::BY_WORD`]
/// restricts drawing to words. Combine with `|`:
///
/// ```
/// use text_attributes::UnderlineStyle;
///
/// let style = UnderlineStyle::DOUBLE | UnderlineStyle::PATTERN_DOT;
/// assert_eq!(style.line(), UnderlineStyle::DOUBLE);
/// assert_eq!(style.pattern(), UnderlineStyle::PATTERN_DOT);
/// assert!(!style.by_word());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct UnderlineStyle(pub u32);

impl UnderlineStyle {
    /// No line.
    pub const NONE: Self = Self(0x00);
    /// A single thin line.
    pub const SINGLE: Self = Self(0x01);
    /// A single thick line.
    pub const THICK: Self = Self(0x02);
    /// Two thin lines.
    pub const DOUBLE: Self = Self(0x09);

    /// A solid line.
    pub const PATTERN_SOLID: Self = Self(0x0000);
    /// A dotted line.
    pub const PATTERN_DOT: Self = Self(0x0100);
    /// A dashed line.
    pub const PATTERN_DASH: Self = Self(0x0200);
    /// Alternating dashes and dots.
    pub const PATTERN_DASH_DOT: Self = Self(0x0300);
    /// Alternating dashes and pairs of dots.
    pub const PATTERN_DASH_DOT_DOT: Self = Self(0x0400);

    /// Draw only beneath words, not whitespace.
    pub const BY_WORD: Self = Self(0x8000);

    const LINE_MASK: u32 = 0x00FF;
    const PATTERN_MASK: u32 = 0x0F00;

    /// The line style part.
    pub const fn line(self) -> Self {
        Self(self.0 & Self::LINE_MASK)
    }

    /// The dash pattern part.
    pub const fn pattern(self) -> Self {
        Self(self.0 & Self::PATTERN_MASK)
    }

    /// Whether the line is only drawn beneath words.
    pub const fn by_word(self) -> bool {
        self.0 & Self::BY_WORD.0 != 0
    }

    /// Returns `true` if no line is drawn.
    pub const fn is_none(self) -> bool {
        self.line().0 == 0
    }
}

impl BitOr for UnderlineStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for UnderlineStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

macro_rules! impl_number_conversions {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self::from(value.0)
                }
            }

            impl From<Number> for $ty {
                fn from(value: Number) -> Self {
                    Self(value.as_u32())
                }
            }
        )*
    };
}

impl_number_conversions!(LigatureType, VerticalGlyphForm, UnderlineStyle);
