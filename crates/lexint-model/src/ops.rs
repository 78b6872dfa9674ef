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

//! Numeric operations on integer literals.
//!
//! Every operation reads the parsed value and fails with
//! [`LiteralError::ValueAbsent`] when it is missing; nothing silently
//! coerces. Operations that produce a literal always wrap the result as a
//! fresh generic `integer` literal, regardless of the receiver's concrete
//! variant, matching the datatype-identity rules of the family.

use crate::error::LiteralError;
use crate::literal::IntegerLiteral;
use std::borrow::Cow;

impl IntegerLiteral {
    #[inline]
    fn require_value(&self) -> Result<i128, LiteralError> {
        self.value().ok_or(LiteralError::ValueAbsent)
    }

    /// Returns `value + 1` wrapped as a fresh generic `integer` literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::literal::IntegerLiteral;
    ///
    /// let forty = IntegerLiteral::new(40);
    /// let forty_two = forty.successor().unwrap().successor().unwrap();
    /// assert_eq!(forty_two.value(), Some(42));
    /// ```
    pub fn successor(&self) -> Result<IntegerLiteral, LiteralError> {
        let value = self.require_value()?;
        let next = value.checked_add(1).ok_or(LiteralError::Overflow)?;
        Ok(IntegerLiteral::new(next))
    }

    /// Alias for [`successor`](IntegerLiteral::successor).
    #[inline]
    pub fn next(&self) -> Result<IntegerLiteral, LiteralError> {
        self.successor()
    }

    /// Returns `value - 1` wrapped as a fresh generic `integer` literal.
    pub fn predecessor(&self) -> Result<IntegerLiteral, LiteralError> {
        let value = self.require_value()?;
        let prev = value.checked_sub(1).ok_or(LiteralError::Overflow)?;
        Ok(IntegerLiteral::new(prev))
    }

    /// Checks whether the value is even.
    #[inline]
    pub fn is_even(&self) -> Result<bool, LiteralError> {
        Ok(self.require_value()? % 2 == 0)
    }

    /// Checks whether the value is odd.
    #[inline]
    pub fn is_odd(&self) -> Result<bool, LiteralError> {
        Ok(self.require_value()? % 2 != 0)
    }

    /// Checks whether the value is zero.
    #[inline]
    pub fn is_zero(&self) -> Result<bool, LiteralError> {
        Ok(self.require_value()? == 0)
    }

    /// Returns the absolute value.
    ///
    /// Strictly positive receivers are returned as-is (`Cow::Borrowed`);
    /// zero and negative values produce a fresh generic `integer` literal
    /// (`Cow::Owned`). Only strictly positive receivers keep their
    /// identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::literal::IntegerLiteral;
    /// # use std::borrow::Cow;
    ///
    /// let positive = IntegerLiteral::new(5);
    /// assert!(matches!(positive.absolute_value().unwrap(), Cow::Borrowed(_)));
    ///
    /// let negative = IntegerLiteral::new(-5);
    /// let abs = negative.absolute_value().unwrap();
    /// assert!(matches!(abs, Cow::Owned(_)));
    /// assert_eq!(abs.value(), Some(5));
    /// ```
    pub fn absolute_value(&self) -> Result<Cow<'_, IntegerLiteral>, LiteralError> {
        let value = self.require_value()?;
        if value > 0 {
            return Ok(Cow::Borrowed(self));
        }
        let magnitude = value.checked_neg().ok_or(LiteralError::Overflow)?;
        Ok(Cow::Owned(IntegerLiteral::new(magnitude)))
    }

    /// Returns the receiver when the value is nonzero, or `None` for zero.
    ///
    /// The zero case is an explicit no-value result, not an error; only an
    /// absent value fails.
    pub fn nonzero(&self) -> Result<Option<&IntegerLiteral>, LiteralError> {
        let value = self.require_value()?;
        Ok((value != 0).then_some(self))
    }
}
