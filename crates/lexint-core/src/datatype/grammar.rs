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

use regex::Regex;
use std::sync::LazyLock;

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());
static NON_POSITIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[+-]?0+|-[0-9]+)$").unwrap());
static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-[0-9]+$").unwrap());
static NON_NEGATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[+-]?0+|\+?[0-9]+)$").unwrap());
static UNSIGNED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]+$").unwrap());

/// An anchored regular-expression predicate over candidate lexical forms.
///
/// A grammar decides surface syntax only. It never looks at the numeric
/// value, so a form like `+0` matches the [`POSITIVE`] grammar even though
/// zero lies outside the positive domain; domain checking is a separate
/// concern.
///
/// The six distinct grammars of the integer family are exposed as statics in
/// this module. Datatypes that do not redeclare a grammar inherit the nearest
/// ancestor's.
///
/// # Examples
///
/// ```rust
/// # use lexint_core::datatype::grammar;
///
/// assert!(grammar::INTEGER.matches("-042"));
/// assert!(grammar::NEGATIVE.matches("-7"));
/// assert!(!grammar::NEGATIVE.matches("7"));
/// assert!(!grammar::UNSIGNED.matches("+7"));
/// ```
pub struct LexicalGrammar {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
}

impl LexicalGrammar {
    /// Returns the short descriptive name of the grammar.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks whether `text` is an admissible lexical form.
    ///
    /// The match is anchored: the whole input must conform, with no
    /// surrounding whitespace tolerated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lexint_core::datatype::grammar;
    ///
    /// assert!(grammar::INTEGER.matches("+12"));
    /// assert!(!grammar::INTEGER.matches(" 12"));
    /// assert!(!grammar::INTEGER.matches("12.0"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl std::fmt::Debug for LexicalGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalGrammar")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

/// Optional sign followed by one or more digits.
pub static INTEGER: LexicalGrammar = LexicalGrammar {
    name: "integer",
    regex: &INTEGER_RE,
};

/// Signed or unsigned zero, or `-` followed by one or more digits.
pub static NON_POSITIVE: LexicalGrammar = LexicalGrammar {
    name: "non-positive",
    regex: &NON_POSITIVE_RE,
};

/// `-` followed by one or more digits.
pub static NEGATIVE: LexicalGrammar = LexicalGrammar {
    name: "negative",
    regex: &NEGATIVE_RE,
};

/// Signed or unsigned zero, or optional `+` followed by one or more digits.
pub static NON_NEGATIVE: LexicalGrammar = LexicalGrammar {
    name: "non-negative",
    regex: &NON_NEGATIVE_RE,
};

/// One or more digits, no sign.
pub static UNSIGNED: LexicalGrammar = LexicalGrammar {
    name: "unsigned",
    regex: &UNSIGNED_RE,
};

/// Optional `+` followed by one or more digits.
pub static POSITIVE: LexicalGrammar = LexicalGrammar {
    name: "positive",
    regex: &POSITIVE_RE,
};
