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

//! # The Integer Datatype Hierarchy
//!
//! The XML-Schema integer family forms a single-rooted derivation tree of
//! thirteen datatypes. Each datatype is identified by an IRI, derives from
//! exactly one parent (except the root `integer`), and may narrow its
//! parent's numeric domain and/or lexical grammar.
//!
//! XML Schema describes this as a thirteen-level derivation chain. Here it
//! is a fieldless enum plus lookup tables: `parent()`,
//! `domain()`, and `declared_grammar()` are `match` tables, and inherited
//! properties are resolved by walking parent links. No dispatch, no
//! allocation.
//!
//! ## Submodules
//!
//! - `domain`: Inclusive numeric intervals with optional bounds.
//! - `grammar`: Anchored regular-expression surface-form predicates.

pub mod domain;
pub mod grammar;

use domain::ValueDomain;
use grammar::LexicalGrammar;
use std::fmt;

/// The `http://www.w3.org/2001/XMLSchema#` namespace prefix shared by every
/// datatype IRI in the family.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// A concrete datatype of the XML-Schema integer family.
///
/// Variants are ordered root-first, sign-constrained branch, bit-width
/// branch, unsigned branch. The derivation tree:
///
/// ```text
/// integer
/// ├── nonPositiveInteger
/// │   └── negativeInteger
/// ├── long ── int ── short ── byte
/// └── nonNegativeInteger
///     ├── unsignedLong ── unsignedInt ── unsignedShort ── unsignedByte
///     └── positiveInteger
/// ```
///
/// # Examples
///
/// ```rust
/// # use lexint_core::datatype::IntegerDatatype;
///
/// let byte = IntegerDatatype::Byte;
/// assert_eq!(byte.parent(), Some(IntegerDatatype::Short));
/// assert!(byte.is_derived_from(IntegerDatatype::Long));
/// assert_eq!(byte.iri(), "http://www.w3.org/2001/XMLSchema#byte");
/// assert!(byte.domain().contains(-128));
/// assert!(!byte.domain().contains(128));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum IntegerDatatype {
    /// The unbounded root of the family.
    Integer,
    /// `(-inf, 0]`.
    NonPositiveInteger,
    /// `(-inf, -1]`.
    NegativeInteger,
    /// `[-2^63, 2^63 - 1]`.
    Long,
    /// `[-2^31, 2^31 - 1]`.
    Int,
    /// `[-2^15, 2^15 - 1]`.
    Short,
    /// `[-2^7, 2^7 - 1]`.
    Byte,
    /// `[0, +inf)`.
    NonNegativeInteger,
    /// `[0, 2^64 - 1]`.
    UnsignedLong,
    /// `[0, 2^32 - 1]`.
    UnsignedInt,
    /// `[0, 2^16 - 1]`.
    UnsignedShort,
    /// `[0, 2^8 - 1]`.
    UnsignedByte,
    /// `[1, +inf)`.
    PositiveInteger,
}

impl IntegerDatatype {
    /// Every datatype of the family, root first.
    pub const ALL: [IntegerDatatype; 13] = [
        IntegerDatatype::Integer,
        IntegerDatatype::NonPositiveInteger,
        IntegerDatatype::NegativeInteger,
        IntegerDatatype::Long,
        IntegerDatatype::Int,
        IntegerDatatype::Short,
        IntegerDatatype::Byte,
        IntegerDatatype::NonNegativeInteger,
        IntegerDatatype::UnsignedLong,
        IntegerDatatype::UnsignedInt,
        IntegerDatatype::UnsignedShort,
        IntegerDatatype::UnsignedByte,
        IntegerDatatype::PositiveInteger,
    ];

    /// Returns the local name within the XSD namespace.
    #[inline]
    pub fn local_name(self) -> &'static str {
        match self {
            IntegerDatatype::Integer => "integer",
            IntegerDatatype::NonPositiveInteger => "nonPositiveInteger",
            IntegerDatatype::NegativeInteger => "negativeInteger",
            IntegerDatatype::Long => "long",
            IntegerDatatype::Int => "int",
            IntegerDatatype::Short => "short",
            IntegerDatatype::Byte => "byte",
            IntegerDatatype::NonNegativeInteger => "nonNegativeInteger",
            IntegerDatatype::UnsignedLong => "unsignedLong",
            IntegerDatatype::UnsignedInt => "unsignedInt",
            IntegerDatatype::UnsignedShort => "unsignedShort",
            IntegerDatatype::UnsignedByte => "unsignedByte",
            IntegerDatatype::PositiveInteger => "positiveInteger",
        }
    }

    /// Returns the full IRI tag identifying the datatype.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::IntegerDatatype;
    ///
    /// assert_eq!(
    ///     IntegerDatatype::UnsignedShort.iri(),
    ///     "http://www.w3.org/2001/XMLSchema#unsignedShort"
    /// );
    /// ```
    #[inline]
    pub fn iri(self) -> &'static str {
        match self {
            IntegerDatatype::Integer => "http://www.w3.org/2001/XMLSchema#integer",
            IntegerDatatype::NonPositiveInteger => {
                "http://www.w3.org/2001/XMLSchema#nonPositiveInteger"
            }
            IntegerDatatype::NegativeInteger => {
                "http://www.w3.org/2001/XMLSchema#negativeInteger"
            }
            IntegerDatatype::Long => "http://www.w3.org/2001/XMLSchema#long",
            IntegerDatatype::Int => "http://www.w3.org/2001/XMLSchema#int",
            IntegerDatatype::Short => "http://www.w3.org/2001/XMLSchema#short",
            IntegerDatatype::Byte => "http://www.w3.org/2001/XMLSchema#byte",
            IntegerDatatype::NonNegativeInteger => {
                "http://www.w3.org/2001/XMLSchema#nonNegativeInteger"
            }
            IntegerDatatype::UnsignedLong => "http://www.w3.org/2001/XMLSchema#unsignedLong",
            IntegerDatatype::UnsignedInt => "http://www.w3.org/2001/XMLSchema#unsignedInt",
            IntegerDatatype::UnsignedShort => "http://www.w3.org/2001/XMLSchema#unsignedShort",
            IntegerDatatype::UnsignedByte => "http://www.w3.org/2001/XMLSchema#unsignedByte",
            IntegerDatatype::PositiveInteger => {
                "http://www.w3.org/2001/XMLSchema#positiveInteger"
            }
        }
    }

    /// Resolves an IRI tag back to its datatype.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::IntegerDatatype;
    ///
    /// let dt = IntegerDatatype::from_iri("http://www.w3.org/2001/XMLSchema#byte");
    /// assert_eq!(dt, Some(IntegerDatatype::Byte));
    /// assert_eq!(IntegerDatatype::from_iri("http://example.org/unknown"), None);
    /// ```
    pub fn from_iri(iri: &str) -> Option<Self> {
        let local = iri.strip_prefix(XSD_NAMESPACE)?;
        Self::ALL.into_iter().find(|dt| dt.local_name() == local)
    }

    /// Returns the parent datatype, or `None` for the root `integer`.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        match self {
            IntegerDatatype::Integer => None,
            IntegerDatatype::NonPositiveInteger => Some(IntegerDatatype::Integer),
            IntegerDatatype::NegativeInteger => Some(IntegerDatatype::NonPositiveInteger),
            IntegerDatatype::Long => Some(IntegerDatatype::Integer),
            IntegerDatatype::Int => Some(IntegerDatatype::Long),
            IntegerDatatype::Short => Some(IntegerDatatype::Int),
            IntegerDatatype::Byte => Some(IntegerDatatype::Short),
            IntegerDatatype::NonNegativeInteger => Some(IntegerDatatype::Integer),
            IntegerDatatype::UnsignedLong => Some(IntegerDatatype::NonNegativeInteger),
            IntegerDatatype::UnsignedInt => Some(IntegerDatatype::UnsignedLong),
            IntegerDatatype::UnsignedShort => Some(IntegerDatatype::UnsignedInt),
            IntegerDatatype::UnsignedByte => Some(IntegerDatatype::UnsignedShort),
            IntegerDatatype::PositiveInteger => Some(IntegerDatatype::NonNegativeInteger),
        }
    }

    /// Returns an iterator over the proper ancestors, nearest first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::IntegerDatatype;
    ///
    /// let chain: Vec<_> = IntegerDatatype::Byte.ancestors().collect();
    /// assert_eq!(
    ///     chain,
    ///     vec![
    ///         IntegerDatatype::Short,
    ///         IntegerDatatype::Int,
    ///         IntegerDatatype::Long,
    ///         IntegerDatatype::Integer,
    ///     ]
    /// );
    /// ```
    #[inline]
    pub fn ancestors(self) -> Ancestors {
        Ancestors {
            current: self.parent(),
        }
    }

    /// Checks whether `self` is `ancestor` or derives from it, directly or
    /// transitively.
    pub fn is_derived_from(self, ancestor: Self) -> bool {
        self == ancestor || self.ancestors().any(|a| a == ancestor)
    }

    /// Returns the inclusive numeric domain declared for this datatype.
    ///
    /// Bounds are expressed in `i128`, which accommodates every bounded
    /// domain of the family (`unsignedLong` tops out at `2^64 - 1`).
    #[inline]
    pub fn domain(self) -> ValueDomain<i128> {
        match self {
            IntegerDatatype::Integer => ValueDomain::unbounded(),
            IntegerDatatype::NonPositiveInteger => ValueDomain::at_most(0),
            IntegerDatatype::NegativeInteger => ValueDomain::at_most(-1),
            IntegerDatatype::Long => ValueDomain::bounded(i64::MIN as i128, i64::MAX as i128),
            IntegerDatatype::Int => ValueDomain::bounded(i32::MIN as i128, i32::MAX as i128),
            IntegerDatatype::Short => ValueDomain::bounded(i16::MIN as i128, i16::MAX as i128),
            IntegerDatatype::Byte => ValueDomain::bounded(i8::MIN as i128, i8::MAX as i128),
            IntegerDatatype::NonNegativeInteger => ValueDomain::at_least(0),
            IntegerDatatype::UnsignedLong => ValueDomain::bounded(0, u64::MAX as i128),
            IntegerDatatype::UnsignedInt => ValueDomain::bounded(0, u32::MAX as i128),
            IntegerDatatype::UnsignedShort => ValueDomain::bounded(0, u16::MAX as i128),
            IntegerDatatype::UnsignedByte => ValueDomain::bounded(0, u8::MAX as i128),
            IntegerDatatype::PositiveInteger => ValueDomain::at_least(1),
        }
    }

    /// Returns the grammar this datatype declares itself, if any.
    ///
    /// Only the root and the sign-constrained datatypes (plus `unsignedLong`,
    /// which forbids signs entirely) declare grammars; the bit-width chain
    /// inherits.
    #[inline]
    pub fn declared_grammar(self) -> Option<&'static LexicalGrammar> {
        match self {
            IntegerDatatype::Integer => Some(&grammar::INTEGER),
            IntegerDatatype::NonPositiveInteger => Some(&grammar::NON_POSITIVE),
            IntegerDatatype::NegativeInteger => Some(&grammar::NEGATIVE),
            IntegerDatatype::NonNegativeInteger => Some(&grammar::NON_NEGATIVE),
            IntegerDatatype::UnsignedLong => Some(&grammar::UNSIGNED),
            IntegerDatatype::PositiveInteger => Some(&grammar::POSITIVE),
            _ => None,
        }
    }

    /// Returns the effective grammar: the declared one, or the nearest
    /// ancestor's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::IntegerDatatype;
    ///
    /// // byte inherits the root integer grammar.
    /// assert!(IntegerDatatype::Byte.grammar().matches("-42"));
    /// // unsignedByte inherits the unsigned grammar from unsignedLong.
    /// assert!(!IntegerDatatype::UnsignedByte.grammar().matches("-42"));
    /// ```
    pub fn grammar(self) -> &'static LexicalGrammar {
        let mut current = self;
        loop {
            if let Some(g) = current.declared_grammar() {
                return g;
            }
            match current.parent() {
                Some(p) => current = p,
                // The root declares a grammar, so this is unreachable; fall
                // back to it anyway.
                None => return &grammar::INTEGER,
            }
        }
    }
}

/// An iterator walking parent links of an [`IntegerDatatype`] up to the root.
#[derive(Clone, Debug)]
pub struct Ancestors {
    current: Option<IntegerDatatype>,
}

impl Iterator for Ancestors {
    type Item = IntegerDatatype;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        self.current = result.parent();
        Some(result)
    }
}

impl std::iter::FusedIterator for Ancestors {}

impl fmt::Display for IntegerDatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_round_trip() {
        for dt in IntegerDatatype::ALL {
            assert_eq!(IntegerDatatype::from_iri(dt.iri()), Some(dt));
        }
    }

    #[test]
    fn test_from_iri_rejects_foreign() {
        assert_eq!(IntegerDatatype::from_iri("http://example.org/byte"), None);
        assert_eq!(
            IntegerDatatype::from_iri("http://www.w3.org/2001/XMLSchema#decimal"),
            None
        );
        assert_eq!(IntegerDatatype::from_iri(""), None);
    }

    #[test]
    fn test_single_root() {
        let roots: Vec<_> = IntegerDatatype::ALL
            .into_iter()
            .filter(|dt| dt.parent().is_none())
            .collect();
        assert_eq!(roots, vec![IntegerDatatype::Integer]);
    }

    #[test]
    fn test_every_chain_reaches_root() {
        for dt in IntegerDatatype::ALL {
            assert!(dt.is_derived_from(IntegerDatatype::Integer));
        }
    }

    #[test]
    fn test_ancestor_chain_byte() {
        let chain: Vec<_> = IntegerDatatype::Byte.ancestors().collect();
        assert_eq!(
            chain,
            vec![
                IntegerDatatype::Short,
                IntegerDatatype::Int,
                IntegerDatatype::Long,
                IntegerDatatype::Integer,
            ]
        );
    }

    #[test]
    fn test_is_derived_from() {
        assert!(IntegerDatatype::UnsignedByte.is_derived_from(IntegerDatatype::UnsignedLong));
        assert!(IntegerDatatype::UnsignedByte.is_derived_from(IntegerDatatype::NonNegativeInteger));
        assert!(!IntegerDatatype::UnsignedByte.is_derived_from(IntegerDatatype::PositiveInteger));
        assert!(!IntegerDatatype::Long.is_derived_from(IntegerDatatype::NonNegativeInteger));

        // Reflexive by convention.
        assert!(IntegerDatatype::Long.is_derived_from(IntegerDatatype::Long));
    }

    #[test]
    fn test_domains_narrow_along_the_tree() {
        for dt in IntegerDatatype::ALL {
            if let Some(parent) = dt.parent() {
                assert!(
                    dt.domain().is_subset_of(&parent.domain()),
                    "{} does not narrow {}",
                    dt,
                    parent
                );
            }
        }
    }

    #[test]
    fn test_declared_domains() {
        assert!(IntegerDatatype::Integer.domain().contains(i128::MIN));
        assert!(IntegerDatatype::NonPositiveInteger.domain().contains(0));
        assert!(!IntegerDatatype::NegativeInteger.domain().contains(0));
        assert_eq!(
            IntegerDatatype::Long.domain().lower(),
            Some(i64::MIN as i128)
        );
        assert_eq!(
            IntegerDatatype::UnsignedLong.domain().upper(),
            Some(u64::MAX as i128)
        );
        assert_eq!(IntegerDatatype::UnsignedByte.domain().upper(), Some(255));
        assert_eq!(IntegerDatatype::PositiveInteger.domain().lower(), Some(1));
        assert_eq!(IntegerDatatype::PositiveInteger.domain().upper(), None);
    }

    #[test]
    fn test_grammar_inheritance() {
        // Bit-width chain inherits the root grammar.
        for dt in [
            IntegerDatatype::Long,
            IntegerDatatype::Int,
            IntegerDatatype::Short,
            IntegerDatatype::Byte,
        ] {
            assert_eq!(dt.grammar().name(), "integer");
        }

        // Unsigned chain inherits from unsignedLong.
        for dt in [
            IntegerDatatype::UnsignedInt,
            IntegerDatatype::UnsignedShort,
            IntegerDatatype::UnsignedByte,
        ] {
            assert_eq!(dt.grammar().name(), "unsigned");
        }

        // Declaring datatypes use their own grammar.
        assert_eq!(IntegerDatatype::NegativeInteger.grammar().name(), "negative");
        assert_eq!(IntegerDatatype::PositiveInteger.grammar().name(), "positive");
    }

    #[test]
    fn test_inherited_grammars_accept_subset() {
        // Any text accepted by an inherited-grammar datatype is accepted by
        // its parent's effective grammar (they are literally the same
        // grammar), and every declaring datatype only narrows the root.
        let samples = ["0", "+0", "-0", "1", "+1", "-1", "007", "-007", "+007"];
        for dt in IntegerDatatype::ALL {
            if let Some(parent) = dt.parent() {
                if dt.declared_grammar().is_none() {
                    for s in samples {
                        assert_eq!(dt.grammar().matches(s), parent.grammar().matches(s));
                    }
                }
            }
            for s in samples {
                if dt.grammar().matches(s) {
                    assert!(
                        IntegerDatatype::Integer.grammar().matches(s),
                        "{} accepted {:?} but the root rejected it",
                        dt,
                        s
                    );
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(IntegerDatatype::Integer.to_string(), "integer");
        assert_eq!(
            IntegerDatatype::NonPositiveInteger.to_string(),
            "nonPositiveInteger"
        );
        assert_eq!(IntegerDatatype::UnsignedByte.to_string(), "unsignedByte");
    }

    #[test]
    fn test_ancestors_fused() {
        let mut iter = IntegerDatatype::NonPositiveInteger.ancestors();
        assert_eq!(iter.next(), Some(IntegerDatatype::Integer));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
