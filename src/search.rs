use crate::catalog::{Catalog, CatalogEntry, Category, EntryId};

/// Controls which entry fields take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Also match against the raw invocation string. The invocation is
    /// compared as-is against the lower-cased query, so an upper-case
    /// fragment of a command can never match.
    pub match_invocation: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            match_invocation: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub id: EntryId,
    pub category: &'a Category,
    pub entry: &'a CatalogEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty after normalization. Callers restore the
    /// category view instead of showing results.
    NotASearch,
    Matches {
        query: String,
        hits: Vec<SearchHit<'a>>,
    },
}

impl<'a> SearchOutcome<'a> {
    pub fn is_search(&self) -> bool {
        matches!(self, SearchOutcome::Matches { .. })
    }

    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchOutcome::NotASearch => &[],
            SearchOutcome::Matches { hits, .. } => hits,
        }
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn search<'a>(query: &str, catalog: &'a Catalog) -> SearchOutcome<'a> {
    search_with(query, catalog, SearchOptions::default())
}

/// Linear substring search over the catalog. Results keep registry order:
/// categories first, then entries within each category.
pub fn search_with<'a>(
    query: &str,
    catalog: &'a Catalog,
    options: SearchOptions,
) -> SearchOutcome<'a> {
    let query = normalize_query(query);
    if query.is_empty() {
        return SearchOutcome::NotASearch;
    }
    let hits = catalog
        .entries()
        .filter(|(_, _, entry)| entry_matches(entry, &query, options))
        .map(|(id, category, entry)| SearchHit {
            id,
            category,
            entry,
        })
        .collect::<Vec<_>>();
    tracing::debug!(query = %query, hits = hits.len(), "search");
    SearchOutcome::Matches { query, hits }
}

/// `query` must already be normalized.
pub fn entry_matches(entry: &CatalogEntry, query: &str, options: SearchOptions) -> bool {
    entry.name.to_lowercase().contains(query)
        || entry.description.to_lowercase().contains(query)
        || (options.match_invocation && entry.invocation.contains(query))
}
