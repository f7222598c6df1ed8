// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed rich-text attributes built on [`attribute_runs`].
//!
//! - [`AttributeKey`] and [`AttributeValue`] define a closed vocabulary of twelve attributes:
//!   font, paragraph style, foreground and background color, ligature, kern, strikethrough and
//!   underline style, stroke color and width, shadow, and vertical glyph form.
//! - [`attrs`] names each attribute at the type level, so generic accessors take and return the
//!   right value type.
//! - [`AttributeDictionary`] is a set of attribute values, used to build up attributes before
//!   applying them and to read them back.
//! - [`AttributedString`] applies and removes attributes over byte ranges of a string.
//!
//! ## Boxed and unboxed numbers
//!
//! Ligature, kern, strikethrough style, underline style, stroke width and vertical glyph form
//! are stored as a [`Number`]. The dictionary exposes each of them twice: as an
//! `Option<Number>` that is `None` while unset, and as the plain scalar, which reads as the
//! zero-equivalent while unset. The two views share one entry. Use
//! [`AttributeDictionary::scalar_or`] to choose a different fallback.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use text_attributes::{AttributeDictionary, AttributeKey, AttributedString, Font};
//! use peniko::color::palette::css;
//!
//! let mut title = AttributeDictionary::new();
//! title.set_font(Some(Arc::new(Font::new("Georgia", 24.0))));
//! title.set_kern(1.5);
//!
//! let mut text = AttributedString::new("Hello World");
//! text.add_attributes(&title, 0..11).unwrap();
//! text.add_foreground_color(css::RED, 0..5).unwrap();
//!
//! assert_eq!(text.attributes_at(0).len(), 3);
//! assert_eq!(text.attributes_at(6).foreground_color(), None);
//! assert_eq!(text.attributes_at(6).kern(), 1.5);
//!
//! let (_, range) = text.attribute_at(AttributeKey::ForegroundColor, 2).unwrap();
//! assert_eq!(range, 0..5);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` support in `peniko`.
//! - `libm`: Uses `libm` for floating point math in `peniko` when `std` is disabled.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod attrs;

mod dictionary;
mod key;
mod number;
mod string;
mod value;
mod values;


pub use attribute_runs::{Error, ErrorKind, TextRange, TextStorage};

pub use dictionary::AttributeDictionary;
pub use key::{AttributeKey, ParseAttributeKeyError};
pub use number::Number;
pub use string::AttributedString;
pub use value::AttributeValue;
pub use values::{
    Color, Font, LigatureType, LineBreakMode, ParagraphStyle, Shadow, TextAlignment,
    UnderlineStyle, VerticalGlyphForm, WritingDirection,
};
