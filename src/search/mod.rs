// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query handling: where a string from the search box becomes results.
//!
//! [`QueryEngine`] owns the catalog and the active language. Everything it
//! does is a pure function of (catalog, language, query), so repeated calls
//! return identical responses.

pub mod engine;
pub mod snippet;
pub mod suggest;

#[cfg(feature = "parallel")]
pub mod shared;

pub use engine::QueryEngine;
pub use snippet::matched_text;
pub use suggest::{autocomplete, suggestions};

#[cfg(feature = "parallel")]
pub use shared::SharedQueryEngine;
