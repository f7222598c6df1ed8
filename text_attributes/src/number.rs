// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A boxed numeric attribute value.
///
/// Numeric attributes (kerning, stroke width and the enumerated line and glyph styles) are stored
/// as a `Number` so that "not set" can be told apart from zero. A `Number` remembers whether it
/// was created from an integer or a float and converts to any of the primitive forms on read.
///
/// Equality compares numeric value, not representation:
///
/// ```
/// use text_attributes::Number;
///
/// assert_eq!(Number::from(2_u32), Number::from(2.0_f32));
/// assert_ne!(Number::from(-1_i32), Number::from(u64::MAX));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point value.
    Float(f64),
}

impl Number {
    /// Returns `true` if this number was created from a float.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// The value as an `f64`.
    ///
    /// Integers beyond 2^53 lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// The value as an `f32`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Attribute scalars are single precision."
    )]
    pub fn as_f32(self) -> f32 {
        self.as_f64() as f32
    }

    /// The value as an `i64`.
    ///
    /// Floats are truncated toward zero and saturate at the bounds of `i64`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float to integer casts saturate, which is the conversion we want."
    )]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(v) => v,
            Self::UInt(v) => i64::try_from(v).unwrap_or(i64::MAX),
            Self::Float(v) => v as i64,
        }
    }

    /// The value as a `u64`.
    ///
    /// Floats are truncated toward zero; negative values saturate at zero.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Float to integer casts saturate, which is the conversion we want."
    )]
    pub fn as_u64(self) -> u64 {
        match self {
            Self::Int(v) => u64::try_from(v).unwrap_or(0),
            Self::UInt(v) => v,
            Self::Float(v) => v as u64,
        }
    }

    /// Returns `true` if both numbers have the same representation and value.
    ///
    /// Unlike `==`, `Int(2)` and `Float(2.0)` are not identical.
    ///
    /// ```
    /// use text_attributes::Number;
    ///
    /// assert!(Number::from(2_u32) == Number::from(2.0_f64));
    /// assert!(!Number::from(2_u32).is_identical(Number::from(2.0_f64)));
    /// assert!(Number::from(2_u32).is_identical(Number::from(2_u64)));
    /// ```
    pub fn is_identical(self, other: Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }

    /// The value as a `u32`, saturating at the bounds of `u32`.
    pub fn as_u32(self) -> u32 {
        u32::try_from(self.as_u64()).unwrap_or(u32::MAX)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::UInt(b)) | (Self::UInt(b), Self::Int(a)) => {
                u64::try_from(a).is_ok_and(|a| a == b)
            }
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
                float_equals_integer(f, i.into())
            }
            (Self::UInt(u), Self::Float(f)) | (Self::Float(f), Self::UInt(u)) => {
                float_equals_integer(f, u.into())
            }
        }
    }
}

/// Exact comparison of a float with an integer.
///
/// Going through `f64` alone would round integers above 2^53 and make equality intransitive.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The cast back is only trusted once the float is known to be integral."
)]
fn float_equals_integer(float: f64, integer: i128) -> bool {
    // Integral floats are exactly the ones equal to their own rounding through an integer;
    // NaN and infinities fail the first test.
    float == integer as f64 && float as i128 == integer
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<bool> for Number {
    fn from(value: bool) -> Self {
        Self::UInt(value.into())
    }
}
