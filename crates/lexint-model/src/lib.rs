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

//! # Lexint Model
//!
//! **The literal value model of the XML-Schema integer family.**
//!
//! This crate builds the [`IntegerLiteral`](literal::IntegerLiteral) on top
//! of the static tables in `lexint-core`: construction from text or numbers,
//! canonical-form generation, the numeric operations facade, and the
//! injected arbitrary-precision backing.
//!
//! ## Architecture
//!
//! * **`input`**: The closed conversion capability (`IntoLiteralInput`)
//!   accepted by every constructor; primitive integers and string shapes
//!   are supported out of the box, everything else opts in explicitly.
//! * **`literal`**: The literal itself plus `LiteralOptions` overrides,
//!   with permissive (`new`/`with_options`) and strict (`checked`)
//!   construction paths.
//! * **`ops`**: Successor/predecessor, parity, absolute value, and zero
//!   tests, all failing explicitly on an absent value.
//! * **`error`**: The error taxonomy (`LiteralError`) with payload structs
//!   for grammar and domain violations.
//! * **`bigint`**: The `BigIntegerProvider` capability; the `bigint` cargo
//!   feature ships a `num_bigint`-backed provider.
//!
//! ## Design Philosophy
//!
//! 1.  **No silent coercion**: an unparsable input produces a literal with
//!     an absent value, and every numeric operation on such a literal fails
//!     with an explicit error instead of falling back to a default.
//! 2.  **Permissive by default, strict on request**: `new`/`with_options`
//!     never consult grammars or domains, so construction cannot fail;
//!     `checked` enforces both for callers that want full validation.
//! 3.  **Value immutability**: only the lexical cache changes after
//!     construction, and only through idempotent canonicalization.

pub mod bigint;
pub mod error;
pub mod input;
pub mod literal;

mod ops;
