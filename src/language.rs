// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! UI languages and picking one at startup.
//!
//! The site remembers the user's choice in browser storage and otherwise
//! follows the browser locale. [`resolve_language`] is that rule, minus the
//! browser: the caller passes in whatever it read from storage and from the
//! locale.

use crate::types::Language;

/// Languages the built-in catalog ships with, in menu order.
pub const BUILTIN_LANGUAGES: [Language; 3] = [
    Language {
        code: "en",
        name: "English",
        flag: "🇺🇸",
    },
    Language {
        code: "ru",
        name: "Русский",
        flag: "🇷🇺",
    },
    Language {
        code: "az",
        name: "Azərbaycan",
        flag: "🇦🇿",
    },
];

/// Display metadata for a built-in language code.
pub fn language_info(code: &str) -> Option<&'static Language> {
    BUILTIN_LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Pick the starting language.
///
/// A saved non-empty preference wins. Otherwise the primary subtag of the
/// locale (`"ru-RU"` → `"ru"`). Otherwise `fallback`. The result is not
/// checked against any catalog, matching the permissive language switch.
pub fn resolve_language(saved: Option<&str>, locale: Option<&str>, fallback: &str) -> String {
    if let Some(saved) = saved.map(str::trim).filter(|s| !s.is_empty()) {
        return saved.to_string();
    }

    locale
        .and_then(|locale| locale.split('-').next())
        .map(str::trim)
        .filter(|primary| !primary.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| fallback.to_string())
}
