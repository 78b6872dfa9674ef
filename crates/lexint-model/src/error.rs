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

use lexint_core::datatype::IntegerDatatype;
use std::fmt::{self, Display};

/// Details about a lexical form rejected by a datatype's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarViolation {
    /// The datatype whose grammar rejected the form.
    pub datatype: IntegerDatatype,
    /// The offending lexical form.
    pub lexical: String,
}

impl Display for GrammarViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexical form '{}' does not match the {} grammar of {}",
            self.lexical,
            self.datatype.grammar().name(),
            self.datatype
        )
    }
}

impl std::error::Error for GrammarViolation {}

/// Details about a value lying outside a datatype's declared domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainViolation {
    /// The datatype whose domain was violated.
    pub datatype: IntegerDatatype,
    /// The offending value.
    pub value: i128,
}

impl Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value {} lies outside the {} domain {}",
            self.value,
            self.datatype,
            self.datatype.domain()
        )
    }
}

impl std::error::Error for DomainViolation {}

/// The error type for operations on integer literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// A numeric operation was invoked on a literal whose value failed to
    /// parse and is therefore absent.
    ValueAbsent,
    /// Strict construction rejected the lexical form (see [`GrammarViolation`]).
    Grammar(GrammarViolation),
    /// Strict construction rejected the parsed value (see [`DomainViolation`]).
    Domain(DomainViolation),
    /// An arithmetic step left the range of the backing word.
    Overflow,
    /// The big-integer backing provider could not supply a handle.
    CapabilityUnavailable,
}

impl Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueAbsent => write!(f, "Literal has no parsed value"),
            Self::Grammar(e) => write!(f, "Grammar error: {}", e),
            Self::Domain(e) => write!(f, "Domain error: {}", e),
            Self::Overflow => write!(f, "Arithmetic overflow in literal operation"),
            Self::CapabilityUnavailable => {
                write!(f, "Big-integer backing capability is unavailable")
            }
        }
    }
}

impl std::error::Error for LiteralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grammar(e) => Some(e),
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GrammarViolation> for LiteralError {
    fn from(e: GrammarViolation) -> Self {
        Self::Grammar(e)
    }
}

impl From<DomainViolation> for LiteralError {
    fn from(e: DomainViolation) -> Self {
        Self::Domain(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let grammar = LiteralError::from(GrammarViolation {
            datatype: IntegerDatatype::NegativeInteger,
            lexical: "7".to_owned(),
        });
        let rendered = grammar.to_string();
        assert!(rendered.contains("'7'"));
        assert!(rendered.contains("negativeInteger"));

        let domain = LiteralError::from(DomainViolation {
            datatype: IntegerDatatype::Byte,
            value: 128,
        });
        let rendered = domain.to_string();
        assert!(rendered.contains("128"));
        assert!(rendered.contains("[-128, 127]"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = LiteralError::from(DomainViolation {
            datatype: IntegerDatatype::PositiveInteger,
            value: 0,
        });
        assert!(err.source().is_some());
        assert!(LiteralError::ValueAbsent.source().is_none());
        assert!(LiteralError::Overflow.source().is_none());
    }
}
