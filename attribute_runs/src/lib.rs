// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute Runs stores keyed attribute values over byte ranges of UTF-8 text.
//!
//! Each attribute key owns a sorted list of disjoint runs. Adding a value over a range replaces
//! whatever that key held inside the range and leaves the rest of the text alone. Removing a key
//! over a range splits runs at the range edges and drops the coverage in between. Attributes with
//! different keys never interact.
//!
//! ## Example
//!
//! ```
//! use attribute_runs::{AttributedText, RunAttribute};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Attr {
//!     Bold(bool),
//!     Size(u32),
//! }
//!
//! impl RunAttribute for Attr {
//!     type Key = u8;
//!
//!     fn key(&self) -> u8 {
//!         match self {
//!             Self::Bold(_) => 0,
//!             Self::Size(_) => 1,
//!         }
//!     }
//! }
//!
//! let mut text = AttributedText::new("Hello World");
//! text.add_attribute_bytes(0..11, Attr::Bold(true)).unwrap();
//! text.add_attribute_bytes(6..11, Attr::Size(20)).unwrap();
//! text.remove_attribute_bytes(3..8, 0).unwrap();
//!
//! assert_eq!(text.attribute_at(0, 2), Some(&Attr::Bold(true)));
//! assert_eq!(text.attribute_at(0, 5), None);
//! assert_eq!(text.attribute_at(0, 9), Some(&Attr::Bold(true)));
//! assert_eq!(text.attribute_at(1, 7), Some(&Attr::Size(20)));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attributed_text;
mod error;
mod runs;
mod segments;
mod text_range;
mod text_storage;

pub use crate::attributed_text::AttributedText;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::runs::{AttributeRuns, Run, RunAttribute};
pub use crate::segments::{ActiveAttributes, Segments};
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
