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

//! # Lexint Core
//!
//! Foundational primitives for the XML-Schema integer datatype family. This
//! crate defines the static shape of the type system: which datatypes exist,
//! how they derive from one another, which numeric values each admits, and
//! which textual surface forms each accepts.
//!
//! ## Modules
//!
//! - `datatype`: The thirteen-variant integer hierarchy (`IntegerDatatype`)
//!   with IRI tags, parent links, and table-driven inheritance resolution,
//!   plus its submodules:
//!   - `datatype::domain`: Inclusive, possibly half- or fully-unbounded
//!     numeric intervals (`ValueDomain`) with containment and subset queries.
//!   - `datatype::grammar`: Anchored regular-expression predicates
//!     (`LexicalGrammar`) over candidate lexical forms.
//!
//! ## Purpose
//!
//! Everything in this crate is pure and table-driven. No literal values live
//! here; the literal model (`lexint-model`) consults these tables to parse,
//! validate, and canonicalize. Keeping the hierarchy as data rather than as a
//! type-level tower avoids virtual dispatch and keeps inheritance resolution
//! a couple of array walks.
//!
//! Refer to each module for detailed APIs and examples.

pub mod datatype;
