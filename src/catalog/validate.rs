// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog invariant checks.
//!
//! The query path assumes nothing about the catalog, so none of these checks
//! are needed for correctness of a single query. They catch data mistakes:
//! a page that can't be linked to, two pages fighting over one URL, or a
//! translation that forgot a page (which makes results change shape when the
//! user switches language mid-search).

use super::SearchIndex;
use crate::error::CatalogError;
use crate::types::Category;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Document at `index` has an empty URL.
    EmptyUrl { language: String, index: usize },
    /// Two documents in one language share a URL.
    DuplicateUrl { language: String, url: String },
    /// URLs other languages have that this one lacks.
    MissingUrls { language: String, urls: Vec<String> },
    /// A document uses a category that has no label in its language.
    UnlabeledCategory { language: String, category: Category },
}

impl CatalogIssue {
    /// Fatal issues break the URL invariant and make a catalog unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CatalogIssue::EmptyUrl { .. } | CatalogIssue::DuplicateUrl { .. }
        )
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::EmptyUrl { language, index } => {
                write!(f, "[{}] document {} has an empty url", language, index)
            }
            CatalogIssue::DuplicateUrl { language, url } => {
                write!(f, "[{}] duplicate url '{}'", language, url)
            }
            CatalogIssue::MissingUrls { language, urls } => {
                write!(f, "[{}] missing pages: {}", language, urls.join(", "))
            }
            CatalogIssue::UnlabeledCategory { language, category } => {
                write!(f, "[{}] category '{}' has no label", language, category)
            }
        }
    }
}

impl From<CatalogIssue> for CatalogError {
    fn from(issue: CatalogIssue) -> Self {
        match issue {
            CatalogIssue::EmptyUrl { language, index } => CatalogError::EmptyUrl { language, index },
            CatalogIssue::DuplicateUrl { language, url } => {
                CatalogError::DuplicateUrl { language, url }
            }
            other => CatalogError::Invalid(other.to_string()),
        }
    }
}

/// Run every check. Issues are reported per language, in language order.
pub fn validate(index: &SearchIndex) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let all_urls: BTreeSet<&str> = index
        .iter()
        .flat_map(|(_, catalog)| catalog.documents.iter())
        .map(|doc| doc.url.as_str())
        .filter(|url| !url.is_empty())
        .collect();

    for (language, catalog) in index.iter() {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut unlabeled = BTreeSet::new();

        for (i, doc) in catalog.documents.iter().enumerate() {
            if doc.url.is_empty() {
                issues.push(CatalogIssue::EmptyUrl {
                    language: language.to_string(),
                    index: i,
                });
            } else if !seen.insert(doc.url.as_str()) && reported.insert(doc.url.as_str()) {
                issues.push(CatalogIssue::DuplicateUrl {
                    language: language.to_string(),
                    url: doc.url.clone(),
                });
            }

            if !catalog.categories.contains_key(&doc.category) {
                unlabeled.insert(doc.category);
            }
        }

        let missing: Vec<String> = all_urls
            .iter()
            .filter(|url| !seen.contains(*url))
            .map(|url| url.to_string())
            .collect();
        if !missing.is_empty() {
            issues.push(CatalogIssue::MissingUrls {
                language: language.to_string(),
                urls: missing,
            });
        }

        for category in unlabeled {
            issues.push(CatalogIssue::UnlabeledCategory {
                language: language.to_string(),
                category,
            });
        }
    }

    issues
}
