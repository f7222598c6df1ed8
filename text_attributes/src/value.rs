// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use attribute_runs::RunAttribute;

use crate::{AttributeKey, Color, Font, Number, ParagraphStyle, Shadow};

/// The value of one attribute, tagged with which attribute it is.
///
/// Object-like values are reference counted so that the same font or paragraph style can be
/// applied over many ranges and stored in many dictionaries without copying.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// See [`AttributeKey::Font`].
    Font(Arc<Font>),
    /// See [`AttributeKey::ParagraphStyle`].
    ParagraphStyle(Arc<ParagraphStyle>),
    /// See [`AttributeKey::ForegroundColor`].
    ForegroundColor(Color),
    /// See [`AttributeKey::BackgroundColor`].
    BackgroundColor(Color),
    /// See [`AttributeKey::Ligature`].
    Ligature(Number),
    /// See [`AttributeKey::Kern`].
    Kern(Number),
    /// See [`AttributeKey::StrikethroughStyle`].
    StrikethroughStyle(Number),
    /// See [`AttributeKey::UnderlineStyle`].
    UnderlineStyle(Number),
    /// See [`AttributeKey::StrokeColor`].
    StrokeColor(Color),
    /// See [`AttributeKey::StrokeWidth`].
    StrokeWidth(Number),
    /// See [`AttributeKey::Shadow`].
    Shadow(Arc<Shadow>),
    /// See [`AttributeKey::VerticalGlyphForm`].
    VerticalGlyphForm(Number),
}

impl AttributeValue {
    /// The attribute this value belongs to.
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::Ligature(_) => AttributeKey::Ligature,
            Self::Kern(_) => AttributeKey::Kern,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::Shadow(_) => AttributeKey::Shadow,
            Self::VerticalGlyphForm(_) => AttributeKey::VerticalGlyphForm,
        }
    }

    /// Builds the value of a numeric attribute from its boxed number.
    ///
    /// Returns `None` if `key` is not numeric.
    pub fn from_number(key: AttributeKey, number: Number) -> Option<Self> {
        Some(match key {
            AttributeKey::Ligature => Self::Ligature(number),
            AttributeKey::Kern => Self::Kern(number),
            AttributeKey::StrikethroughStyle => Self::StrikethroughStyle(number),
            AttributeKey::UnderlineStyle => Self::UnderlineStyle(number),
            AttributeKey::StrokeWidth => Self::StrokeWidth(number),
            AttributeKey::VerticalGlyphForm => Self::VerticalGlyphForm(number),
            _ => return None,
        })
    }

    /// The boxed number of a numeric attribute.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Ligature(n)
            | Self::Kern(n)
            | Self::StrikethroughStyle(n)
            | Self::UnderlineStyle(n)
            | Self::StrokeWidth(n)
            | Self::VerticalGlyphForm(n) => Some(*n),
            _ => None,
        }
    }

    /// The color of a color attribute.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::ForegroundColor(c) | Self::BackgroundColor(c) | Self::StrokeColor(c) => Some(*c),
            _ => None,
        }
    }
}

impl RunAttribute for AttributeValue {
    type Key = AttributeKey;

    fn key(&self) -> AttributeKey {
        Self::key(self)
    }

    /// Numbers only merge when their representation matches too, so a float written next to an
    /// equal integer still reads back as a float.
    fn merges_with(&self, other: &Self) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => self.key() == other.key() && a.is_identical(b),
            _ => self == other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeValue;
    use crate::{AttributeKey, Number, Shadow};
    use attribute_runs::RunAttribute;
    use alloc::sync::Arc;
    use peniko::color::palette::css;

    #[test]
    fn key_matches_variant() {
        for key in AttributeKey::ALL.into_iter().filter(|key| key.is_numeric()) {
            let value = AttributeValue::from_number(key, Number::from(1_u32)).unwrap();
            assert_eq!(value.key(), key);
            assert_eq!(value.as_number(), Some(Number::from(1_u32)));
        }
        assert!(AttributeValue::from_number(AttributeKey::Font, Number::default()).is_none());
        assert_eq!(
            AttributeValue::StrokeColor(css::RED).key(),
            AttributeKey::StrokeColor
        );
    }

    #[test]
    fn shared_values_compare_by_content() {
        let a = AttributeValue::Shadow(Arc::new(Shadow::default()));
        let b = AttributeValue::Shadow(Arc::new(Shadow::default()));
        assert_eq!(a, b);
        assert_eq!(a.as_color(), None);
        assert_eq!(
            AttributeValue::BackgroundColor(css::BLUE).as_color(),
            Some(css::BLUE)
        );
    }

    #[test]
    fn numbers_merge_only_when_identical() {
        let int = AttributeValue::Kern(Number::from(2_u32));
        let float = AttributeValue::Kern(Number::from(2.0_f32));
        assert_eq!(int, float);
        assert!(!int.merges_with(&float));
        assert!(float.merges_with(&AttributeValue::Kern(Number::from(2.0_f64))));
        assert!(!int.merges_with(&AttributeValue::StrokeWidth(Number::from(2_u32))));
        assert!(
            AttributeValue::ForegroundColor(css::RED)
                .merges_with(&AttributeValue::ForegroundColor(css::RED))
        );
    }
}
