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

use num_traits::PrimInt;
use std::fmt;

/// An inclusive numeric interval `[lower, upper]`, where either bound may be
/// absent to denote unboundedness on that side.
///
/// A `ValueDomain` describes the set of values a datatype admits. Unlike a
/// half-open scheduling interval, both bounds are inclusive, matching the
/// way XML-Schema facets (`minInclusive`/`maxInclusive`) are stated.
///
/// # Invariants
/// If both bounds are present, `lower` must be less than or equal to `upper`.
///
/// # Examples
///
/// ```rust
/// # use lexint_core::datatype::domain::ValueDomain;
///
/// let byte = ValueDomain::bounded(-128i128, 127);
/// assert!(byte.contains(0));
/// assert!(!byte.contains(128));
///
/// let non_positive = ValueDomain::at_most(0i128);
/// assert!(non_positive.contains(-1_000_000));
/// assert!(!non_positive.contains(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ValueDomain<T>
where
    T: PrimInt,
{
    lower: Option<T>,
    upper: Option<T>,
}

impl<T> ValueDomain<T>
where
    T: PrimInt,
{
    /// Creates a new domain from optional inclusive bounds.
    ///
    /// # Panics
    ///
    /// Panics if both bounds are present and `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::domain::ValueDomain;
    ///
    /// let d = ValueDomain::new(Some(0i64), None);
    /// assert!(d.contains(i64::MAX));
    /// ```
    #[inline]
    pub fn new(lower: Option<T>, upper: Option<T>) -> Self {
        if let (Some(l), Some(u)) = (lower, upper) {
            assert!(
                l <= u,
                "ValueDomain requires lower <= upper for bounded domains"
            );
        }
        ValueDomain { lower, upper }
    }

    /// Creates the fully unbounded domain `(-inf, +inf)`.
    #[inline]
    pub fn unbounded() -> Self {
        ValueDomain {
            lower: None,
            upper: None,
        }
    }

    /// Creates the domain `[min, +inf)`.
    #[inline]
    pub fn at_least(min: T) -> Self {
        ValueDomain {
            lower: Some(min),
            upper: None,
        }
    }

    /// Creates the domain `(-inf, max]`.
    #[inline]
    pub fn at_most(max: T) -> Self {
        ValueDomain {
            lower: None,
            upper: Some(max),
        }
    }

    /// Creates the bounded domain `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[inline]
    pub fn bounded(min: T, max: T) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Returns the inclusive lower bound, or `None` if unbounded below.
    #[inline]
    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    /// Returns the inclusive upper bound, or `None` if unbounded above.
    #[inline]
    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    /// Checks whether the domain is bounded on both sides.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }

    /// Checks whether `value` lies inside the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::domain::ValueDomain;
    ///
    /// let positive = ValueDomain::at_least(1i128);
    /// assert!(positive.contains(1));
    /// assert!(!positive.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower.is_none_or(|l| value >= l) && self.upper.is_none_or(|u| value <= u)
    }

    /// Checks whether every value of `self` also lies in `other`.
    ///
    /// An absent bound on `other` admits anything on that side; an absent
    /// bound on `self` can only be covered by an absent bound on `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::domain::ValueDomain;
    ///
    /// let negative = ValueDomain::at_most(-1i128);
    /// let non_positive = ValueDomain::at_most(0i128);
    /// assert!(negative.is_subset_of(&non_positive));
    /// assert!(!non_positive.is_subset_of(&negative));
    /// ```
    pub fn is_subset_of(&self, other: &Self) -> bool {
        let lower_ok = match other.lower {
            None => true,
            Some(ol) => self.lower.is_some_and(|sl| sl >= ol),
        };
        let upper_ok = match other.upper {
            None => true,
            Some(ou) => self.upper.is_some_and(|su| su <= ou),
        };
        lower_ok && upper_ok
    }
}

impl<T> fmt::Display for ValueDomain<T>
where
    T: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(l) => write!(f, "[{}", l)?,
            None => write!(f, "(-inf")?,
        }
        write!(f, ", ")?;
        match self.upper {
            Some(u) => write!(f, "{}]", u),
            None => write!(f, "+inf)"),
        }
    }
}
