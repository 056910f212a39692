//! Shared search query models and helpers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    DateUpdated,
    Name,
}

impl SortKey {
    /// Name the remote API expects in the `sorting` parameter.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SortKey::DateUpdated => "date_updated",
            SortKey::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub label: &'static str,
    pub key: SortKey,
    pub ascending: bool,
}

pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption { label: "Recently updated", key: SortKey::DateUpdated, ascending: false },
    SortOption { label: "Least recently updated", key: SortKey::DateUpdated, ascending: true },
    SortOption { label: "Name (A to Z)", key: SortKey::Name, ascending: true },
    SortOption { label: "Name (Z to A)", key: SortKey::Name, ascending: false },
];

impl SortOption {
    pub fn find(key: SortKey, ascending: bool) -> Option<usize> {
        SORT_OPTIONS.iter().position(|o| o.key == key && o.ascending == ascending)
    }
}

/// User controlled filter and sort state of the browse view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchFacets {
    /// Raw text in the search box, not yet committed as a term.
    pub free_text: String,
    /// Committed terms in insertion order, unique ignoring case.
    pub terms: Vec<String>,
    pub degree_filters: BTreeSet<String>,
    pub affiliation_filters: BTreeSet<String>,
    pub sort_key: SortKey,
    pub sort_ascending: bool,
}

impl SearchFacets {
    pub fn contains_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.terms.iter().any(|t| t.to_lowercase() == term)
    }

    /// Lowercase, space separated query string sent to the search API.
    pub fn effective_query(&self, include_free_text: bool) -> String {
        let free_text = self.free_text.trim();
        let mut parts: Vec<&str> = self.terms.iter().map(|t| t.as_str()).collect();
        if include_free_text && !free_text.is_empty() {
            parts.push(free_text);
        }
        parts.join(" ").to_lowercase()
    }
}

/// Removes case-insensitive duplicates, keeping the first spelling of each term.
pub fn dedup_terms(terms: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    terms
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileSearchRequest {
    pub token: Option<String>,
    pub query: String,
    pub page: u64,
    pub degrees: BTreeSet<String>,
    pub affiliations: BTreeSet<String>,
    pub sorting: SortKey,
    pub sort_ascending: bool,
}

impl ProfileSearchRequest {
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// URL query parameters for `GET /api/profiles`. Tag sets are comma joined.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string())];
        if !self.query.is_empty() {
            params.push(("query", self.query.clone()));
        }
        if !self.degrees.is_empty() {
            params.push(("degrees", join_tags(&self.degrees)));
        }
        if !self.affiliations.is_empty() {
            params.push(("affiliations", join_tags(&self.affiliations)));
        }
        params.push(("sorting", self.sorting.wire_name().to_string()));
        params.push(("asc", self.sort_ascending.to_string()));
        params
    }
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(|t| t.to_lowercase()).collect::<Vec<_>>().join(",")
}
