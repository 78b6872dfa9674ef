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

use crate::error::{DomainViolation, GrammarViolation, LiteralError};
use crate::input::{IntoLiteralInput, LiteralInput};
use lexint_core::datatype::IntegerDatatype;

/// Optional overrides applied during literal construction.
///
/// Built with chained setters, applied by [`IntegerLiteral::with_options`]
/// and [`IntegerLiteral::checked`].
///
/// # Examples
///
/// ```rust
/// # use lexint_model::literal::{IntegerLiteral, LiteralOptions};
/// # use lexint_core::datatype::IntegerDatatype;
///
/// let options = LiteralOptions::new()
///     .lexical("0042")
///     .datatype(IntegerDatatype::Short);
/// let literal = IntegerLiteral::with_options(42, options);
/// assert_eq!(literal.lexical(), Some("0042"));
/// assert_eq!(literal.datatype(), IntegerDatatype::Short);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralOptions {
    lexical: Option<String>,
    datatype: Option<IntegerDatatype>,
}

impl LiteralOptions {
    /// Creates an empty option set (no overrides).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the stored lexical form, taking precedence over a textual
    /// input.
    #[inline]
    pub fn lexical(mut self, text: impl Into<String>) -> Self {
        self.lexical = Some(text.into());
        self
    }

    /// Overrides the datatype tag; the default is the root `integer`.
    #[inline]
    pub fn datatype(mut self, datatype: IntegerDatatype) -> Self {
        self.datatype = Some(datatype);
        self
    }
}

/// A typed integer literal: a datatype tag, an optionally cached lexical
/// form, and a parsed value.
///
/// The value is immutable after construction. The lexical cache is mutated
/// only by [`canonicalize`](IntegerLiteral::canonicalize); recomputing it is
/// deterministic, so redundant canonicalization is harmless.
///
/// Construction is permissive by default: unparsable input yields a literal
/// with an absent value instead of an error, and neither grammar nor domain
/// is consulted. Use [`checked`](IntegerLiteral::checked) for strict
/// validation.
///
/// # Examples
///
/// ```rust
/// # use lexint_model::literal::IntegerLiteral;
///
/// let mut literal = IntegerLiteral::new("007");
/// assert_eq!(literal.value(), Some(7));
/// assert_eq!(literal.to_text().unwrap(), "007");
///
/// literal.canonicalize();
/// assert_eq!(literal.to_text().unwrap(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerLiteral {
    datatype: IntegerDatatype,
    value: Option<i128>,
    lexical: Option<String>,
}

impl IntegerLiteral {
    /// Constructs a literal from `input` with default options.
    ///
    /// Unparsable text yields a literal whose value is absent; construction
    /// itself never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::literal::IntegerLiteral;
    ///
    /// assert_eq!(IntegerLiteral::new(42).value(), Some(42));
    /// assert_eq!(IntegerLiteral::new("abc").value(), None);
    /// ```
    #[inline]
    pub fn new(input: impl IntoLiteralInput) -> Self {
        Self::with_options(input, LiteralOptions::default())
    }

    /// Constructs a literal from `input`, applying `options`.
    ///
    /// The stored lexical form is resolved in order: the explicit override,
    /// else the textual input itself, else absent. The value is parsed from
    /// textual input (accepting an optional leading sign and leading zeros)
    /// or taken directly from numeric input; parse failures are swallowed.
    ///
    /// Grammar and domain are deliberately not consulted here; validation
    /// is a separate, explicit step ([`checked`](IntegerLiteral::checked)).
    pub fn with_options(input: impl IntoLiteralInput, options: LiteralOptions) -> Self {
        let (value, input_text) = match input.into_literal_input() {
            LiteralInput::Text(text) => (parse_decimal(&text), Some(text)),
            LiteralInput::Number(v) => (Some(v), None),
            LiteralInput::Unrepresentable => (None, None),
        };

        IntegerLiteral {
            datatype: options.datatype.unwrap_or(IntegerDatatype::Integer),
            value,
            lexical: options.lexical.or(input_text),
        }
    }

    /// Constructs a literal strictly, enforcing grammar and domain.
    ///
    /// After permissive resolution, the literal is validated against its
    /// datatype: a present lexical form must match the effective grammar,
    /// and a present value must lie in the declared domain. An absent value
    /// with an admissible (or no) lexical form is rejected with
    /// [`LiteralError::Overflow`]: the form was a well-formed number that
    /// does not fit the `i128` backing word.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::error::LiteralError;
    /// # use lexint_model::literal::{IntegerLiteral, LiteralOptions};
    /// # use lexint_core::datatype::IntegerDatatype;
    ///
    /// let negative = LiteralOptions::new().datatype(IntegerDatatype::NegativeInteger);
    /// assert!(IntegerLiteral::checked("-5", negative.clone()).is_ok());
    ///
    /// let zero = IntegerLiteral::checked(
    ///     0,
    ///     LiteralOptions::new().datatype(IntegerDatatype::PositiveInteger),
    /// );
    /// assert!(matches!(zero, Err(LiteralError::Domain(_))));
    /// ```
    pub fn checked(
        input: impl IntoLiteralInput,
        options: LiteralOptions,
    ) -> Result<Self, LiteralError> {
        let literal = Self::with_options(input, options);

        if let Some(lexical) = &literal.lexical {
            if !literal.datatype.grammar().matches(lexical) {
                return Err(GrammarViolation {
                    datatype: literal.datatype,
                    lexical: lexical.clone(),
                }
                .into());
            }
        }

        match literal.value {
            Some(value) => {
                if !literal.datatype.domain().contains(value) {
                    return Err(DomainViolation {
                        datatype: literal.datatype,
                        value,
                    }
                    .into());
                }
                Ok(literal)
            }
            // Grammar (if any) matched, so the form was a well-formed number
            // that does not fit the backing word.
            None => Err(LiteralError::Overflow),
        }
    }

    /// Returns the datatype tag.
    #[inline]
    pub fn datatype(&self) -> IntegerDatatype {
        self.datatype
    }

    /// Returns the parsed value, or `None` if parsing failed.
    #[inline]
    pub fn value(&self) -> Option<i128> {
        self.value
    }

    /// Returns the cached lexical form, if one is stored.
    #[inline]
    pub fn lexical(&self) -> Option<&str> {
        self.lexical.as_deref()
    }

    /// Checks whether the literal carries a parsed value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the textual form: the cached lexical if present, else the
    /// decimal rendering of the value.
    ///
    /// Stored state is never mutated; rendering from the value is computed
    /// on demand. Fails with [`LiteralError::ValueAbsent`] when neither a
    /// lexical form nor a value is available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::literal::IntegerLiteral;
    ///
    /// // Numeric input stores no lexical; text is derived on demand.
    /// let literal = IntegerLiteral::new(-7);
    /// assert_eq!(literal.lexical(), None);
    /// assert_eq!(literal.to_text().unwrap(), "-7");
    /// assert_eq!(literal.lexical(), None);
    /// ```
    pub fn to_text(&self) -> Result<String, LiteralError> {
        if let Some(lexical) = &self.lexical {
            return Ok(lexical.clone());
        }
        match self.value {
            Some(value) => Ok(value.to_string()),
            None => Err(LiteralError::ValueAbsent),
        }
    }

    /// Rewrites the lexical cache to the canonical form of the value,
    /// returning `&mut self` for chaining.
    ///
    /// The canonical form is the minimal signed-decimal rendering: no
    /// leading zeros (except `"0"` itself), an explicit `-` for negatives,
    /// never a leading `+`. Idempotent. A literal with an absent value is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_model::literal::IntegerLiteral;
    ///
    /// let mut literal = IntegerLiteral::new("+0042");
    /// assert_eq!(literal.canonicalize().to_text().unwrap(), "42");
    /// ```
    pub fn canonicalize(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            self.lexical = Some(value.to_string());
        }
        self
    }
}

/// Parses a decimal integer, accepting an optional leading `+`/`-` and
/// leading zeros, exactly like `i128::from_str`.
#[inline]
fn parse_decimal(text: &str) -> Option<i128> {
    text.parse::<i128>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_number() {
        let literal = IntegerLiteral::new(42);
        assert_eq!(literal.value(), Some(42));
        assert_eq!(literal.lexical(), None);
        assert_eq!(literal.datatype(), IntegerDatatype::Integer);
        assert!(literal.is_valid());
    }

    #[test]
    fn test_new_from_text_caches_lexical() {
        let literal = IntegerLiteral::new("007");
        assert_eq!(literal.value(), Some(7));
        assert_eq!(literal.lexical(), Some("007"));
    }

    #[test]
    fn test_new_from_unparsable_text() {
        let literal = IntegerLiteral::new("abc");
        assert_eq!(literal.value(), None);
        assert_eq!(literal.lexical(), Some("abc"));
        assert!(!literal.is_valid());
        // The raw text is still reachable.
        assert_eq!(literal.to_text().unwrap(), "abc");
    }

    #[test]
    fn test_new_from_unrepresentable_number() {
        let literal = IntegerLiteral::new(u128::MAX);
        assert_eq!(literal.value(), None);
        assert_eq!(literal.lexical(), None);
        assert_eq!(literal.to_text(), Err(LiteralError::ValueAbsent));
    }

    #[test]
    fn test_lexical_override_precedence() {
        // An explicit override wins over the textual input.
        let literal = IntegerLiteral::with_options("42", LiteralOptions::new().lexical("0x2A"));
        assert_eq!(literal.value(), Some(42));
        assert_eq!(literal.lexical(), Some("0x2A"));
    }

    #[test]
    fn test_datatype_override() {
        let literal =
            IntegerLiteral::with_options(-5, LiteralOptions::new().datatype(IntegerDatatype::NegativeInteger));
        assert_eq!(literal.datatype(), IntegerDatatype::NegativeInteger);
        assert_eq!(literal.value(), Some(-5));
    }

    #[test]
    fn test_parse_accepts_signs_and_zeros() {
        assert_eq!(IntegerLiteral::new("+7").value(), Some(7));
        assert_eq!(IntegerLiteral::new("-0").value(), Some(0));
        assert_eq!(IntegerLiteral::new("000123").value(), Some(123));
    }

    #[test]
    fn test_permissive_ignores_grammar_and_domain() {
        // Permissive construction consults neither grammar nor domain.
        let literal = IntegerLiteral::with_options(
            0,
            LiteralOptions::new().datatype(IntegerDatatype::PositiveInteger),
        );
        assert_eq!(literal.value(), Some(0));

        // 10^23 - 1 is far outside the byte domain but fits the backing
        // word; permissive construction keeps it anyway.
        let literal = IntegerLiteral::with_options(
            "99999999999999999999999",
            LiteralOptions::new().datatype(IntegerDatatype::Byte),
        );
        assert_eq!(literal.value(), Some(99_999_999_999_999_999_999_999));
        assert_eq!(literal.lexical(), Some("99999999999999999999999"));

        // Past the backing word the value is absent, but construction still
        // succeeds and the text stays reachable.
        let huge = "999999999999999999999999999999999999999";
        let literal = IntegerLiteral::with_options(
            huge,
            LiteralOptions::new().datatype(IntegerDatatype::Byte),
        );
        assert_eq!(literal.value(), None);
        assert_eq!(literal.lexical(), Some(huge));
    }

    #[test]
    fn test_checked_accepts_conforming() {
        let literal = IntegerLiteral::checked(
            "-5",
            LiteralOptions::new().datatype(IntegerDatatype::NegativeInteger),
        )
        .unwrap();
        assert_eq!(literal.value(), Some(-5));

        let literal = IntegerLiteral::checked(
            200,
            LiteralOptions::new().datatype(IntegerDatatype::UnsignedByte),
        )
        .unwrap();
        assert_eq!(literal.value(), Some(200));
    }

    #[test]
    fn test_checked_rejects_domain_violation() {
        let result = IntegerLiteral::checked(
            0,
            LiteralOptions::new().datatype(IntegerDatatype::PositiveInteger),
        );
        match result {
            Err(LiteralError::Domain(e)) => {
                assert_eq!(e.datatype, IntegerDatatype::PositiveInteger);
                assert_eq!(e.value, 0);
            }
            other => panic!("expected domain violation, got {:?}", other),
        }

        let result = IntegerLiteral::checked(
            128,
            LiteralOptions::new().datatype(IntegerDatatype::Byte),
        );
        assert!(matches!(result, Err(LiteralError::Domain(_))));
    }

    #[test]
    fn test_checked_rejects_grammar_violation() {
        let result = IntegerLiteral::checked(
            "7",
            LiteralOptions::new().datatype(IntegerDatatype::NegativeInteger),
        );
        match result {
            Err(LiteralError::Grammar(e)) => {
                assert_eq!(e.lexical, "7");
            }
            other => panic!("expected grammar violation, got {:?}", other),
        }

        let result = IntegerLiteral::checked(
            "+1",
            LiteralOptions::new().datatype(IntegerDatatype::UnsignedLong),
        );
        assert!(matches!(result, Err(LiteralError::Grammar(_))));

        let result = IntegerLiteral::checked("abc", LiteralOptions::new());
        assert!(matches!(result, Err(LiteralError::Grammar(_))));
    }

    #[test]
    fn test_checked_rejects_backing_overflow() {
        // Well-formed per the grammar, but outside i128.
        let result = IntegerLiteral::checked(
            "170141183460469231731687303715884105728",
            LiteralOptions::new(),
        );
        assert_eq!(result, Err(LiteralError::Overflow));

        let result = IntegerLiteral::checked(u128::MAX, LiteralOptions::new());
        assert_eq!(result, Err(LiteralError::Overflow));
    }

    #[test]
    fn test_checked_grammar_on_sign_variants() {
        // "+0" matches the positive grammar, but 0 violates the domain.
        let result = IntegerLiteral::checked(
            "+0",
            LiteralOptions::new().datatype(IntegerDatatype::PositiveInteger),
        );
        assert!(matches!(result, Err(LiteralError::Domain(_))));

        // "-0" is a fine nonPositiveInteger.
        let literal = IntegerLiteral::checked(
            "-0",
            LiteralOptions::new().datatype(IntegerDatatype::NonPositiveInteger),
        )
        .unwrap();
        assert_eq!(literal.value(), Some(0));
    }

    #[test]
    fn test_to_text_prefers_lexical() {
        let literal = IntegerLiteral::new("007");
        assert_eq!(literal.to_text().unwrap(), "007");

        let literal = IntegerLiteral::new(7);
        assert_eq!(literal.to_text().unwrap(), "7");
    }

    #[test]
    fn test_to_text_does_not_mutate() {
        let literal = IntegerLiteral::new(-42);
        let _ = literal.to_text().unwrap();
        assert_eq!(literal.lexical(), None);
    }

    #[test]
    fn test_canonicalize_minimal_form() {
        let mut literal = IntegerLiteral::new("007");
        literal.canonicalize();
        assert_eq!(literal.lexical(), Some("7"));

        let mut literal = IntegerLiteral::new("+42");
        literal.canonicalize();
        assert_eq!(literal.lexical(), Some("42"));

        let mut literal = IntegerLiteral::new("-042");
        literal.canonicalize();
        assert_eq!(literal.lexical(), Some("-42"));

        let mut literal = IntegerLiteral::new("-0");
        literal.canonicalize();
        assert_eq!(literal.lexical(), Some("0"));
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let mut literal = IntegerLiteral::new("0007");
        literal.canonicalize();
        let once = literal.clone();
        literal.canonicalize();
        assert_eq!(literal, once);
    }

    #[test]
    fn test_canonicalize_absent_value_untouched() {
        let mut literal = IntegerLiteral::new("abc");
        literal.canonicalize();
        assert_eq!(literal.lexical(), Some("abc"));
        assert_eq!(literal.value(), None);
    }

    #[test]
    fn test_canonicalize_chains() {
        let mut literal = IntegerLiteral::new("+1");
        let text = literal.canonicalize().to_text().unwrap();
        assert_eq!(text, "1");
    }

    #[test]
    fn test_value_round_trip() {
        for text in ["0", "+0", "-0", "7", "+7", "-7", "007", "-007"] {
            let mut literal = IntegerLiteral::new(text);
            let value = literal.value().unwrap();
            literal.canonicalize();
            let reparsed = IntegerLiteral::new(literal.to_text().unwrap().as_str());
            assert_eq!(reparsed.value(), Some(value), "round trip of {:?}", text);
        }
    }
}
