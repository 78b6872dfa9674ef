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

//! Arbitrary-precision backing as an injected capability.
//!
//! Conversion to a big-integer handle is the only operation of the literal
//! model that needs an arbitrary-precision library, so the dependency is not
//! wired into the core: callers inject a [`BigIntegerProvider`], and the
//! `bigint` cargo feature ships a ready-made provider backed by
//! `num_bigint::BigInt`. Nothing is loaded implicitly, and no other
//! operation touches the capability.

use crate::error::LiteralError;
use crate::literal::IntegerLiteral;

/// A pluggable source of arbitrary-precision integer handles.
///
/// A provider turns a decimal text form (optional sign, digits) into its
/// backing handle. Returning `None` signals that the capability cannot
/// service the request, which surfaces as
/// [`LiteralError::CapabilityUnavailable`] at the point of use.
pub trait BigIntegerProvider {
    /// The arbitrary-precision handle produced by this provider.
    type Handle;

    /// Parses a decimal text form into a handle, or `None` if the backing
    /// capability is unavailable.
    fn from_decimal_text(&self, text: &str) -> Option<Self::Handle>;
}

impl IntegerLiteral {
    /// Converts the textual form of the literal into an arbitrary-precision
    /// handle supplied by `provider`.
    ///
    /// Fails with [`LiteralError::ValueAbsent`] when the literal has neither
    /// a lexical form nor a value, and with
    /// [`LiteralError::CapabilityUnavailable`] when the provider declines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "bigint")] {
    /// # use lexint_model::bigint::NumBigIntProvider;
    /// # use lexint_model::literal::IntegerLiteral;
    /// use num_bigint::BigInt;
    ///
    /// let literal = IntegerLiteral::new("-42");
    /// let big = literal.to_big_integer(&NumBigIntProvider).unwrap();
    /// assert_eq!(big, BigInt::from(-42));
    /// # }
    /// ```
    pub fn to_big_integer<P>(&self, provider: &P) -> Result<P::Handle, LiteralError>
    where
        P: BigIntegerProvider,
    {
        let text = self.to_text()?;
        provider
            .from_decimal_text(&text)
            .ok_or(LiteralError::CapabilityUnavailable)
    }
}

/// The default provider backed by `num_bigint::BigInt`.
#[cfg(feature = "bigint")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumBigIntProvider;

#[cfg(feature = "bigint")]
impl BigIntegerProvider for NumBigIntProvider {
    type Handle = num_bigint::BigInt;

    fn from_decimal_text(&self, text: &str) -> Option<Self::Handle> {
        text.parse::<num_bigint::BigInt>().ok()
    }
}
