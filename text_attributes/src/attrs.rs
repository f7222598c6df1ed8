// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-level names for each attribute.
//!
//! Every attribute has a zero-sized marker type here. The markers select an attribute in the
//! generic accessors of [`AttributeDictionary`](crate::AttributeDictionary) and
//! [`AttributedString`](crate::AttributedString), which then take and return that attribute's
//! value type:
//!
//! ```
//! use text_attributes::{attrs, AttributeDictionary, Number};
//!
//! let mut dict = AttributeDictionary::new();
//! dict.set_number::<attrs::Kern>(Some(Number::from(2.5_f32)));
//! assert_eq!(dict.scalar::<attrs::Kern>(), 2.5);
//! ```

use alloc::sync::Arc;
use core::fmt::Debug;

use crate::{AttributeKey, AttributeValue, Color, Number};
use crate::{LigatureType, UnderlineStyle as UnderlineStyleValue};
use crate::{VerticalGlyphForm as VerticalGlyphFormValue, values};

/// An attribute of the closed vocabulary, named at the type level.
pub trait Attribute {
    /// The runtime identifier of this attribute.
    const KEY: AttributeKey;

    /// The value stored for this attribute.
    ///
    /// For numeric attributes this is the boxed [`Number`].
    type Value: Clone + PartialEq + Debug;

    /// Tags `value` as this attribute.
    fn wrap(value: Self::Value) -> AttributeValue;

    /// Borrows the value if `value` belongs to this attribute.
    fn unwrap(value: &AttributeValue) -> Option<&Self::Value>;
}

/// An attribute whose value is a boxed [`Number`] with a natural unboxed form.
///
/// The unboxed form cannot represent "not set"; readers that need a value anyway fall back to
/// [`Self::DEFAULT`], the zero-equivalent of the scalar.
pub trait NumericAttribute: Attribute<Value = Number> {
    /// The unboxed form.
    type Scalar: Copy + PartialEq + Debug;

    /// The zero-equivalent of [`Self::Scalar`].
    const DEFAULT: Self::Scalar;

    /// Unboxes `number`.
    fn to_scalar(number: Number) -> Self::Scalar;

    /// Boxes `scalar`.
    fn to_number(scalar: Self::Scalar) -> Number;
}

macro_rules! attribute {
    ($(#[$meta:meta])* $name:ident: $value:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Attribute for $name {
            const KEY: AttributeKey = AttributeKey::$name;
            type Value = $value;

            fn wrap(value: $value) -> AttributeValue {
                AttributeValue::$name(value)
            }

            fn unwrap(value: &AttributeValue) -> Option<&$value> {
                match value {
                    AttributeValue::$name(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

macro_rules! numeric_attribute {
    ($(#[$meta:meta])* $name:ident: $scalar:ty = $default:expr, $unbox:path) => {
        attribute!($(#[$meta])* $name: Number);

        impl NumericAttribute for $name {
            type Scalar = $scalar;
            const DEFAULT: $scalar = $default;

            fn to_scalar(number: Number) -> $scalar {
                $unbox(number)
            }

            fn to_number(scalar: $scalar) -> Number {
                Number::from(scalar)
            }
        }
    };
}

attribute!(
    /// The font of the text.
    Font: Arc<values::Font>
);
attribute!(
    /// Paragraph-level layout settings.
    ParagraphStyle: Arc<values::ParagraphStyle>
);
attribute!(
    /// The color of the glyphs.
    ForegroundColor: Color
);
attribute!(
    /// The color behind the glyphs.
    BackgroundColor: Color
);
numeric_attribute!(
    /// Whether ligatures are formed.
    Ligature: LigatureType = LigatureType::STANDARD, LigatureType::from
);
numeric_attribute!(
    /// Extra spacing after each character, in points.
    Kern: f32 = 0.0, Number::as_f32
);
numeric_attribute!(
    /// Strikethrough line style.
    StrikethroughStyle: UnderlineStyleValue = UnderlineStyleValue::NONE, UnderlineStyleValue::from
);
numeric_attribute!(
    /// Underline line style.
    UnderlineStyle: UnderlineStyleValue = UnderlineStyleValue::NONE, UnderlineStyleValue::from
);
attribute!(
    /// The color of glyph outlines.
    StrokeColor: Color
);
numeric_attribute!(
    /// The width of glyph outlines, as a percentage of the font size.
    ///
    /// Positive values stroke without filling, negative values stroke and fill.
    StrokeWidth: f32 = 0.0, Number::as_f32
);
attribute!(
    /// The shadow cast by the glyphs.
    Shadow: Arc<values::Shadow>
);
numeric_attribute!(
    /// Horizontal or vertical glyph orientation.
    VerticalGlyphForm: VerticalGlyphFormValue = VerticalGlyphFormValue::HORIZONTAL,
    VerticalGlyphFormValue::from
);
