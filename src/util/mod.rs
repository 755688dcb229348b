// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by scoring, snippets and suggestions.
//!
//! Everything here works on lowercased text and literal substrings. There is
//! no tokenizer and no regex: query words are matched exactly as typed, so a
//! stray `(` or `*` in a query is just another character.

pub mod text;

pub use text::*;
