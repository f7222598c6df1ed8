// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt::Debug;
use core::ops::Range;

use attribute_runs::{AttributedText, Error, TextRange, TextStorage};

use crate::attrs::{self, Attribute, NumericAttribute};
use crate::{AttributeDictionary, AttributeKey, AttributeValue, Color};
use crate::{Font, LigatureType, ParagraphStyle, Shadow, UnderlineStyle, VerticalGlyphForm};

/// A string with attributes applied to byte ranges.
///
/// Each attribute is stored independently: adding an attribute over a range replaces only that
/// attribute inside the range, and removing it leaves every other attribute alone.
///
/// Ranges are UTF-8 byte offsets and must lie on character boundaries within the text. Mutators
/// report an invalid range as an [`Error`] and leave the string unchanged.
///
/// ```
/// use text_attributes::{attrs, AttributedString, UnderlineStyle};
///
/// let mut text = AttributedString::new("Hello World");
/// text.add_underline_style(UnderlineStyle::SINGLE, 0..11).unwrap();
/// text.remove_underline_style(3..8).unwrap();
///
/// assert_eq!(text.scalar_at::<attrs::UnderlineStyle>(2), Some(UnderlineStyle::SINGLE));
/// assert_eq!(text.scalar_at::<attrs::UnderlineStyle>(5), None);
/// assert_eq!(text.scalar_at::<attrs::UnderlineStyle>(8), Some(UnderlineStyle::SINGLE));
/// ```
#[derive(Clone, Debug)]
pub struct AttributedString<T: Debug + TextStorage = String> {
    attributed: AttributedText<T, AttributeValue>,
}

impl AttributedString<String> {
    /// Creates an owned string with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_storage(text.into())
    }

    /// Creates an owned string with `attributes` applied over all of it.
    ///
    /// ```
    /// use text_attributes::{AttributeDictionary, AttributedString};
    ///
    /// let mut bold = AttributeDictionary::new();
    /// bold.set_stroke_width(-3.0);
    ///
    /// let text = AttributedString::with_attributes("Hi there", &bold);
    /// assert_eq!(text.attributes_at(0), bold);
    /// assert_eq!(text.attributes_at(7), bold);
    /// ```
    pub fn with_attributes(text: impl Into<String>, attributes: &AttributeDictionary) -> Self {
        let mut string = Self::new(text);
        let range = TextRange::full(string.text());
        for value in attributes.iter() {
            string.attributed.add_attribute(range, value.clone());
        }
        string
    }
}

impl<T: Debug + TextStorage> AttributedString<T> {
    /// Creates a string with no attributes over any text storage.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use text_attributes::AttributedString;
    ///
    /// let shared: Arc<str> = Arc::from("shared text");
    /// let text = AttributedString::with_storage(shared);
    /// assert_eq!(text.len(), 11);
    /// ```
    pub fn with_storage(text: T) -> Self {
        Self {
            attributed: AttributedText::new(text),
        }
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        self.attributed.text()
    }

    /// Borrows the text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.attributed.as_str()
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.attributed.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.attributed.is_empty()
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        self.attributed.range(range)
    }

    /// Applies `value` over `range`, replacing that attribute's existing value there.
    pub fn add_value(&mut self, value: AttributeValue, range: Range<usize>) -> Result<(), Error> {
        self.attributed.add_attribute_bytes(range, value)
    }

    /// Removes the attribute `key` from `range`.
    pub fn remove_key(&mut self, key: AttributeKey, range: Range<usize>) -> Result<(), Error> {
        self.attributed.remove_attribute_bytes(range, key)
    }

    /// Applies attribute `A` over `range`.
    pub fn add<A: Attribute>(&mut self, value: A::Value, range: Range<usize>) -> Result<(), Error> {
        self.add_value(A::wrap(value), range)
    }

    /// Applies the unboxed value of numeric attribute `A` over `range`.
    pub fn add_scalar<A: NumericAttribute>(
        &mut self,
        scalar: A::Scalar,
        range: Range<usize>,
    ) -> Result<(), Error> {
        self.add::<A>(A::to_number(scalar), range)
    }

    /// Removes attribute `A` from `range`.
    pub fn remove<A: Attribute>(&mut self, range: Range<usize>) -> Result<(), Error> {
        self.remove_key(A::KEY, range)
    }

    /// Applies every attribute in `attributes` over `range`.
    ///
    /// Attributes not mentioned in `attributes` keep their existing values.
    pub fn add_attributes(
        &mut self,
        attributes: &AttributeDictionary,
        range: Range<usize>,
    ) -> Result<(), Error> {
        let range = self.range(range)?;
        log::trace!("adding {} attributes over {range:?}", attributes.len());
        for value in attributes.iter() {
            self.attributed.add_attribute(range, value.clone());
        }
        Ok(())
    }

    /// Replaces all attributes over `range` with `attributes`.
    ///
    /// Attributes not mentioned in `attributes` are removed from `range`.
    pub fn set_attributes(
        &mut self,
        attributes: &AttributeDictionary,
        range: Range<usize>,
    ) -> Result<(), Error> {
        let range = self.range(range)?;
        log::trace!("replacing attributes over {range:?} with {} values", attributes.len());
        for key in AttributeKey::ALL {
            match attributes.value(key) {
                Some(value) => self.attributed.add_attribute(range, value.clone()),
                None => self.attributed.remove_attribute(range, key),
            }
        }
        Ok(())
    }

    /// Returns the value of attribute `A` at byte `index`.
    pub fn get<A: Attribute>(&self, index: usize) -> Option<&A::Value> {
        self.attributed
            .attribute_at(A::KEY, index)
            .and_then(A::unwrap)
    }

    /// Returns the unboxed value of numeric attribute `A` at byte `index`.
    ///
    /// Unlike [`AttributeDictionary::scalar`] this does not substitute a default, since a position
    /// without the attribute is distinct from one where it is zero.
    pub fn scalar_at<A: NumericAttribute>(&self, index: usize) -> Option<A::Scalar> {
        self.get::<A>(index).copied().map(A::to_scalar)
    }

    /// Returns the value of attribute `key` at byte `index`, along with the longest range around
    /// `index` over which it holds that value.
    pub fn attribute_at(
        &self,
        key: AttributeKey,
        index: usize,
    ) -> Option<(&AttributeValue, Range<usize>)> {
        self.attributed.attribute_with_range(key, index)
    }

    /// Collects every attribute in effect at byte `index`.
    pub fn attributes_at(&self, index: usize) -> AttributeDictionary {
        self.attributed.attributes_at(index).cloned().collect()
    }

    /// Iterates over maximal ranges with a uniform set of attributes.
    ///
    /// The ranges cover the whole text in order; ranges with no attributes yield an empty
    /// dictionary.
    pub fn runs(&self) -> impl Iterator<Item = (Range<usize>, AttributeDictionary)> + '_ {
        self.attributed
            .segments()
            .map(|(range, active)| (range, active.iter().cloned().collect()))
    }

    /// Removes every attribute.
    pub fn clear_attributes(&mut self) {
        self.attributed.clear_attributes();
    }
}

macro_rules! string_mutators {
    ($($(#[$meta:meta])* $marker:ident($value:ty) => $add:ident, $remove:ident;)*) => {
        impl<T: Debug + TextStorage> AttributedString<T> {
            $(
                $(#[$meta])*
                pub fn $add(&mut self, value: $value, range: Range<usize>) -> Result<(), Error> {
                    self.add::<attrs::$marker>(value, range)
                }

                #[doc = concat!("Removes the attribute added by [`Self::", stringify!($add), "`] from `range`.")]
                pub fn $remove(&mut self, range: Range<usize>) -> Result<(), Error> {
                    self.remove::<attrs::$marker>(range)
                }
            )*
        }
    };
}

macro_rules! numeric_string_mutators {
    ($($(#[$meta:meta])* $marker:ident($scalar:ty) => $add:ident, $remove:ident;)*) => {
        impl<T: Debug + TextStorage> AttributedString<T> {
            $(
                $(#[$meta])*
                pub fn $add(&mut self, value: $scalar, range: Range<usize>) -> Result<(), Error> {
                    self.add_scalar::<attrs::$marker>(value, range)
                }

                #[doc = concat!("Removes the attribute added by [`Self::", stringify!($add), "`] from `range`.")]
                pub fn $remove(&mut self, range: Range<usize>) -> Result<(), Error> {
                    self.remove::<attrs::$marker>(range)
                }
            )*
        }
    };
}

string_mutators! {
    /// Sets the font over `range`.
    Font(Arc<Font>) => add_font, remove_font;
    /// Sets the paragraph style over `range`.
    ParagraphStyle(Arc<ParagraphStyle>) => add_paragraph_style, remove_paragraph_style;
    /// Sets the glyph color over `range`.
    ForegroundColor(Color) => add_foreground_color, remove_foreground_color;
    /// Sets the background color over `range`.
    BackgroundColor(Color) => add_background_color, remove_background_color;
    /// Sets the glyph outline color over `range`.
    StrokeColor(Color) => add_stroke_color, remove_stroke_color;
    /// Sets the shadow over `range`.
    Shadow(Arc<Shadow>) => add_shadow, remove_shadow;
}

numeric_string_mutators! {
    /// Sets ligature formation over `range`.
    Ligature(LigatureType) => add_ligature, remove_ligature;
    /// Sets kerning, in points, over `range`.
    Kern(f32) => add_kern, remove_kern;
    /// Sets the strikethrough style over `range`.
    StrikethroughStyle(UnderlineStyle) => add_strikethrough_style, remove_strikethrough_style;
    /// Sets the underline style over `range`.
    UnderlineStyle(UnderlineStyle) => add_underline_style, remove_underline_style;
    /// Sets the stroke width, as a percentage of the font size, over `range`.
    StrokeWidth(f32) => add_stroke_width, remove_stroke_width;
    /// Sets the glyph orientation over `range`.
    VerticalGlyphForm(VerticalGlyphForm) => add_vertical_glyph_form, remove_vertical_glyph_form;
}
