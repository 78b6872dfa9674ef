// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::borrow::Cow;

/// A construction input, resolved to either a textual or a numeric shape.
///
/// Textual inputs carry their original lexical form into the literal; numeric
/// inputs do not. `Unrepresentable` marks a numeric input that does not fit
/// the `i128` backing word, in which case construction proceeds with an
/// absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralInput {
    /// A textual form; the parsed value is derived from it.
    Text(String),
    /// An already-parsed numeric value.
    Number(i128),
    /// A numeric input outside the backing word.
    Unrepresentable,
}

/// The closed conversion capability for literal construction inputs.
///
/// Implementations exist for the primitive integer types and for the common
/// string shapes. Third-party value types opt in by implementing this trait;
/// anything else is rejected at compile time rather than probed at runtime.
///
/// # Examples
///
/// ```rust
/// # use lexint_model::input::{IntoLiteralInput, LiteralInput};
///
/// assert_eq!(42i32.into_literal_input(), LiteralInput::Number(42));
/// assert_eq!(
///     "007".into_literal_input(),
///     LiteralInput::Text("007".to_owned())
/// );
/// assert_eq!(u128::MAX.into_literal_input(), LiteralInput::Unrepresentable);
/// ```
pub trait IntoLiteralInput {
    /// Converts `self` into a [`LiteralInput`].
    fn into_literal_input(self) -> LiteralInput;
}

impl IntoLiteralInput for LiteralInput {
    #[inline]
    fn into_literal_input(self) -> LiteralInput {
        self
    }
}

impl IntoLiteralInput for &str {
    #[inline]
    fn into_literal_input(self) -> LiteralInput {
        LiteralInput::Text(self.to_owned())
    }
}

impl IntoLiteralInput for String {
    #[inline]
    fn into_literal_input(self) -> LiteralInput {
        LiteralInput::Text(self)
    }
}

impl IntoLiteralInput for Cow<'_, str> {
    #[inline]
    fn into_literal_input(self) -> LiteralInput {
        LiteralInput::Text(self.into_owned())
    }
}

macro_rules! into_input_exact {
    ($t:ty) => {
        impl IntoLiteralInput for $t {
            #[inline(always)]
            fn into_literal_input(self) -> LiteralInput {
                LiteralInput::Number(self as i128)
            }
        }
    };
}

macro_rules! into_input_checked {
    ($t:ty) => {
        impl IntoLiteralInput for $t {
            #[inline(always)]
            fn into_literal_input(self) -> LiteralInput {
                match i128::try_from(self) {
                    Ok(v) => LiteralInput::Number(v),
                    Err(_) => LiteralInput::Unrepresentable,
                }
            }
        }
    };
}

into_input_exact!(i8);
into_input_exact!(i16);
into_input_exact!(i32);
into_input_exact!(i64);
into_input_exact!(i128);
into_input_exact!(isize);

into_input_exact!(u8);
into_input_exact!(u16);
into_input_exact!(u32);
into_input_exact!(u64);

into_input_checked!(u128);
into_input_checked!(usize);
