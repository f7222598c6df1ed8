// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use hashbrown::HashMap;

use crate::attrs::{self, Attribute, NumericAttribute};
use crate::{AttributeKey, AttributeValue, Color, Number};
use crate::{Font, LigatureType, ParagraphStyle, Shadow, UnderlineStyle, VerticalGlyphForm};

/// A set of attribute values, containing at most one value per attribute.
///
/// This is the form attributes take before they are applied to a range of an
/// [`AttributedString`](crate::AttributedString), and the form they are read back in. Entries are
/// unordered.
///
/// Numeric attributes have two views of the same entry: the boxed [`Number`], which is `None`
/// while the attribute is unset, and the unboxed scalar, which reads as the zero-equivalent while
/// unset. Both views always observe the same entry.
///
/// ```
/// use text_attributes::{AttributeDictionary, Number};
///
/// let mut dict = AttributeDictionary::new();
/// assert_eq!(dict.kern(), 0.0);
/// assert_eq!(dict.kern_number(), None);
///
/// dict.set_kern_number(Some(Number::from(2.5_f32)));
/// assert_eq!(dict.kern(), 2.5);
///
/// dict.set_kern_number(None);
/// assert_eq!(dict.kern(), 0.0);
/// assert!(dict.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeDictionary(HashMap<AttributeKey, AttributeValue>);

impl AttributeDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dictionary with room for `capacity` attributes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// Returns the number of attributes set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `value`, returning the value it replaced.
    pub fn insert(&mut self, value: AttributeValue) -> Option<AttributeValue> {
        self.0.insert(value.key(), value)
    }

    /// Removes the attribute `key`, returning its value.
    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.0.remove(&key)
    }

    /// Returns the value of the attribute `key`.
    pub fn value(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.0.get(&key)
    }

    /// Returns `true` if the attribute `key` is set.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Iterates over the values, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &AttributeValue> + '_ {
        self.0.values()
    }

    /// Iterates over the keys that are set, in no particular order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = AttributeKey> + '_ {
        self.0.keys().copied()
    }

    /// Keeps only the values for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&AttributeValue) -> bool) {
        self.0.retain(|_, value| f(value));
    }

    /// Removes every attribute.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Copies every attribute of `other` into this dictionary, replacing existing values.
    pub fn merge(&mut self, other: &Self) {
        self.extend(other.iter().cloned());
    }

    /// Returns the value of attribute `A`.
    pub fn get<A: Attribute>(&self) -> Option<&A::Value> {
        self.0.get(&A::KEY).and_then(A::unwrap)
    }

    /// Sets or, with `None`, clears attribute `A`.
    pub fn set<A: Attribute>(&mut self, value: Option<A::Value>) {
        match value {
            Some(value) => {
                self.0.insert(A::KEY, A::wrap(value));
            }
            None => {
                self.0.remove(&A::KEY);
            }
        }
    }

    /// Returns the boxed value of numeric attribute `A`, or `None` while it is unset.
    pub fn number<A: NumericAttribute>(&self) -> Option<Number> {
        self.get::<A>().copied()
    }

    /// Sets the boxed value of numeric attribute `A`. `None` clears the attribute.
    pub fn set_number<A: NumericAttribute>(&mut self, number: Option<Number>) {
        self.set::<A>(number);
    }

    /// Returns the unboxed value of numeric attribute `A`, or its zero-equivalent while unset.
    pub fn scalar<A: NumericAttribute>(&self) -> A::Scalar {
        self.scalar_or::<A>(A::DEFAULT)
    }

    /// Returns the unboxed value of numeric attribute `A`, or `default` while unset.
    pub fn scalar_or<A: NumericAttribute>(&self, default: A::Scalar) -> A::Scalar {
        self.number::<A>().map_or(default, A::to_scalar)
    }

    /// Sets the unboxed value of numeric attribute `A`.
    ///
    /// The unboxed form cannot express "unset", so this always stores a value.
    pub fn set_scalar<A: NumericAttribute>(&mut self, scalar: A::Scalar) {
        self.set::<A>(Some(A::to_number(scalar)));
    }
}

macro_rules! object_accessors {
    ($($(#[$meta:meta])* $marker:ident: $value:ty => $get:ident, $set:ident;)*) => {
        impl AttributeDictionary {
            $(
                $(#[$meta])*
                pub fn $get(&self) -> Option<&$value> {
                    self.get::<attrs::$marker>()
                }

                $(#[$meta])*
                ///
                /// `None` clears the attribute.
                pub fn $set(&mut self, value: Option<$value>) {
                    self.set::<attrs::$marker>(value);
                }
            )*
        }
    };
}

macro_rules! numeric_accessors {
    ($(
        $(#[$meta:meta])* $marker:ident: $scalar:ty =>
            $get_number:ident, $set_number:ident, $get:ident, $set:ident;
    )*) => {
        impl AttributeDictionary {
            $(
                $(#[$meta])*
                /// Boxed form; `None` while unset.
                pub fn $get_number(&self) -> Option<Number> {
                    self.number::<attrs::$marker>()
                }

                $(#[$meta])*
                /// Boxed form; `None` clears the attribute.
                pub fn $set_number(&mut self, number: Option<Number>) {
                    self.set_number::<attrs::$marker>(number);
                }

                $(#[$meta])*
                /// Unboxed form; the zero-equivalent while unset.
                pub fn $get(&self) -> $scalar {
                    self.scalar::<attrs::$marker>()
                }

                $(#[$meta])*
                /// Unboxed form; always stores a value.
                pub fn $set(&mut self, value: $scalar) {
                    self.set_scalar::<attrs::$marker>(value);
                }
            )*
        }
    };
}

object_accessors! {
    /// The font.
    Font: Arc<Font> => font, set_font;
    /// The paragraph style.
    ParagraphStyle: Arc<ParagraphStyle> => paragraph_style, set_paragraph_style;
    /// The glyph color.
    ForegroundColor: Color => foreground_color, set_foreground_color;
    /// The background color.
    BackgroundColor: Color => background_color, set_background_color;
    /// The glyph outline color.
    StrokeColor: Color => stroke_color, set_stroke_color;
    /// The shadow.
    Shadow: Arc<Shadow> => shadow, set_shadow;
}

numeric_accessors! {
    /// Ligature formation.
    Ligature: LigatureType => ligature_number, set_ligature_number, ligature, set_ligature;
    /// Kerning in points.
    Kern: f32 => kern_number, set_kern_number, kern, set_kern;
    /// Strikethrough style.
    StrikethroughStyle: UnderlineStyle =>
        strikethrough_style_number, set_strikethrough_style_number,
        strikethrough_style, set_strikethrough_style;
    /// Underline style.
    UnderlineStyle: UnderlineStyle =>
        underline_style_number, set_underline_style_number,
        underline_style, set_underline_style;
    /// Stroke width as a percentage of the font size.
    StrokeWidth: f32 => stroke_width_number, set_stroke_width_number, stroke_width, set_stroke_width;
    /// Glyph orientation.
    VerticalGlyphForm: VerticalGlyphForm =>
        vertical_glyph_form_number, set_vertical_glyph_form_number,
        vertical_glyph_form, set_vertical_glyph_form;
}

impl Extend<AttributeValue> for AttributeDictionary {
    fn extend<I: IntoIterator<Item = AttributeValue>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<AttributeValue> for AttributeDictionary {
    fn from_iter<I: IntoIterator<Item = AttributeValue>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeDictionary;
    use crate::attrs;
    use crate::{AttributeKey, AttributeValue, Font, LigatureType, Number};
    use crate::{UnderlineStyle, VerticalGlyphForm};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use peniko::color::palette::css;

    #[test]
    fn empty_dictionary_reads_defaults() {
        let dict = AttributeDictionary::new();
        assert_eq!(dict.kern(), 0.0);
        assert_eq!(dict.kern_number(), None);
        assert_eq!(dict.ligature(), LigatureType::STANDARD);
        assert_eq!(dict.underline_style(), UnderlineStyle::NONE);
        assert_eq!(dict.vertical_glyph_form(), VerticalGlyphForm::HORIZONTAL);
        assert_eq!(dict.stroke_width(), 0.0);
        assert_eq!(dict.font(), None);
        assert_eq!(dict.foreground_color(), None);
    }

    #[test]
    fn boxed_write_is_visible_unboxed() {
        let mut dict = AttributeDictionary::new();
        dict.set_kern_number(Some(Number::from(2.5_f32)));
        assert_eq!(dict.kern(), 2.5);

        dict.set_underline_style_number(Some(Number::from(0x0209_u32)));
        assert_eq!(
            dict.underline_style(),
            UnderlineStyle::DOUBLE | UnderlineStyle::PATTERN_DASH
        );
    }

    #[test]
    fn unboxed_write_is_visible_boxed() {
        let mut dict = AttributeDictionary::new();
        dict.set_stroke_width(-3.0);
        assert_eq!(dict.stroke_width_number(), Some(Number::from(-3.0_f32)));

        dict.set_vertical_glyph_form(VerticalGlyphForm::VERTICAL);
        assert_eq!(dict.vertical_glyph_form_number(), Some(Number::from(1_u32)));

        // Writing the zero-equivalent still sets the attribute.
        dict.set_kern(0.0);
        assert_eq!(dict.kern_number(), Some(Number::from(0_u32)));
        assert!(dict.contains(AttributeKey::Kern));
    }

    #[test]
    fn clearing_boxed_resets_unboxed() {
        let mut dict = AttributeDictionary::new();
        dict.set_ligature(LigatureType::NONE);
        assert_eq!(dict.ligature_number(), Some(Number::from(1_u32)));
        dict.set_ligature_number(None);
        assert_eq!(dict.ligature(), LigatureType::STANDARD);
        assert_eq!(dict.ligature_number(), None);
        assert!(dict.is_empty());
    }

    #[test]
    fn both_views_share_one_entry() {
        let mut dict = AttributeDictionary::new();
        dict.set_strikethrough_style(UnderlineStyle::SINGLE);
        dict.set_strikethrough_style_number(Some(Number::from(2_u32)));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.strikethrough_style(), UnderlineStyle::THICK);
        assert_eq!(
            dict.value(AttributeKey::StrikethroughStyle),
            Some(&AttributeValue::StrikethroughStyle(Number::from(2_u32)))
        );
    }

    #[test]
    fn explicit_default_policy() {
        let mut dict = AttributeDictionary::new();
        assert_eq!(dict.scalar_or::<attrs::StrokeWidth>(3.0), 3.0);
        dict.set_stroke_width(1.5);
        assert_eq!(dict.scalar_or::<attrs::StrokeWidth>(3.0), 1.5);
    }

    #[test]
    fn object_attributes() {
        let mut dict = AttributeDictionary::new();
        let font = Arc::new(Font::new("Georgia", 18.0));
        dict.set_font(Some(font.clone()));
        dict.set_foreground_color(Some(css::RED));
        dict.set_background_color(Some(css::WHITE));
        assert_eq!(dict.font(), Some(&font));
        assert_eq!(dict.foreground_color(), Some(&css::RED));
        assert_eq!(dict.len(), 3);

        dict.set_background_color(None);
        assert_eq!(dict.background_color(), None);
        assert!(!dict.contains(AttributeKey::BackgroundColor));
        // The dictionary shares the font rather than copying it.
        assert_eq!(Arc::strong_count(&font), 2);
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut dict = AttributeDictionary::new();
        assert_eq!(dict.insert(AttributeValue::ForegroundColor(css::RED)), None);
        assert_eq!(
            dict.insert(AttributeValue::ForegroundColor(css::BLUE)),
            Some(AttributeValue::ForegroundColor(css::RED))
        );
        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.remove(AttributeKey::ForegroundColor),
            Some(AttributeValue::ForegroundColor(css::BLUE))
        );
    }

    #[test]
    fn merge_and_collect() {
        let mut base: AttributeDictionary = [
            AttributeValue::Kern(Number::from(1_u32)),
            AttributeValue::StrokeColor(css::BLACK),
        ]
        .into_iter()
        .collect();
        let mut overlay = AttributeDictionary::new();
        overlay.set_kern(4.0);
        overlay.set_underline_style(UnderlineStyle::SINGLE);

        base.merge(&overlay);
        assert_eq!(base.len(), 3);
        assert_eq!(base.kern(), 4.0);
        assert_eq!(base.underline_style(), UnderlineStyle::SINGLE);

        base.retain(|value| value.key().is_numeric());
        let mut keys: Vec<_> = base.keys().collect();
        keys.sort();
        assert_eq!(keys, [AttributeKey::Kern, AttributeKey::UnderlineStyle]);
    }
}
