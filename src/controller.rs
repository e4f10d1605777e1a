use crate::catalog::{AccentColor, Catalog, CatalogEntry, Category, EntryId, NotFoundError};
use crate::launcher::{DispatchError, Dispatcher, Launcher, SystemLauncher};
use crate::search::{search_with, SearchOptions, SearchOutcome};
use crate::selection::{SelectionState, DEFAULT_CATEGORY};

pub const NO_RESULTS_MESSAGE: &str = "No settings found matching your search";

pub fn settings_count_text(count: usize) -> String {
    format!("{count} settings available")
}

pub fn search_results_text(query: &str) -> String {
    format!("Search results for: \"{query}\"")
}

/// One clickable card in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub id: EntryId,
    pub entry: &'a CatalogEntry,
    pub accent: AccentColor,
}

/// What the content area shows for the current selection and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView<'a> {
    Category {
        category: &'a Category,
        cards: Vec<Card<'a>>,
    },
    SearchResults {
        query: String,
        cards: Vec<Card<'a>>,
    },
    NoResults {
        query: String,
    },
    /// The catalog has no categories at all.
    Empty,
}

impl<'a> ContentView<'a> {
    pub fn cards(&self) -> &[Card<'a>] {
        match self {
            ContentView::Category { cards, .. } | ContentView::SearchResults { cards, .. } => {
                cards
            }
            ContentView::NoResults { .. } | ContentView::Empty => &[],
        }
    }

    pub fn title(&self) -> String {
        match self {
            ContentView::Category { category, .. } => {
                format!("{} {}", category.icon, category.name)
            }
            ContentView::SearchResults { query, .. } | ContentView::NoResults { query } => {
                format!("🔍 {}", search_results_text(query))
            }
            ContentView::Empty => String::new(),
        }
    }

    pub fn subtitle(&self) -> Option<String> {
        match self {
            ContentView::Category { cards, .. } => Some(settings_count_text(cards.len())),
            ContentView::NoResults { .. } => Some(NO_RESULTS_MESSAGE.to_string()),
            ContentView::SearchResults { .. } | ContentView::Empty => None,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(
            self,
            ContentView::SearchResults { .. } | ContentView::NoResults { .. }
        )
    }
}

/// Owns the catalog, the active category and the live query, and turns them
/// into a [`ContentView`]. Clicks come back as [`EntryId`]s.
pub struct Controller<L: Launcher = SystemLauncher> {
    catalog: Catalog,
    selection: SelectionState,
    query: String,
    options: SearchOptions,
    dispatcher: Dispatcher<L>,
    error: Option<DispatchError>,
}

impl<L: Launcher> Controller<L> {
    pub fn new(catalog: Catalog, dispatcher: Dispatcher<L>) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            query: String::new(),
            options: SearchOptions::default(),
            dispatcher,
            error: None,
        }
    }

    pub fn with_search_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Make `name` the active category and leave search mode.
    ///
    /// Unknown names are a caller bug: they trip a debug assertion and are
    /// otherwise ignored.
    pub fn show_category(&mut self, name: &str) -> Result<(), NotFoundError> {
        if let Err(e) = self.catalog.get_category(name) {
            tracing::error!("{e}");
            debug_assert!(false, "{e}");
            return Err(e);
        }
        self.selection.select(name);
        self.query.clear();
        Ok(())
    }

    /// Replace the live query. Clearing a search re-selects the category it
    /// returns to.
    pub fn set_query(&mut self, text: &str) {
        let was_searching = self.is_searching();
        self.query = text.to_string();
        if was_searching && !self.is_searching() {
            if let Some(name) = self.active_category().map(|c| c.name.clone()) {
                self.selection.select(name);
            }
        }
    }

    /// Category rendered when no search is in progress.
    pub fn active_category(&self) -> Option<&Category> {
        let name = self.selection.clear_to_active_or_default(DEFAULT_CATEGORY);
        self.catalog
            .get_category(name)
            .ok()
            .or_else(|| self.catalog.list_categories().first())
    }

    /// Whether the sidebar should highlight `name`.
    pub fn is_highlighted(&self, name: &str) -> bool {
        !self.is_searching() && self.active_category().map(|c| c.name.as_str()) == Some(name)
    }

    pub fn is_searching(&self) -> bool {
        !crate::search::normalize_query(&self.query).is_empty()
    }

    pub fn view(&self) -> ContentView<'_> {
        match search_with(&self.query, &self.catalog, self.options) {
            SearchOutcome::NotASearch => match self.active_category() {
                Some(category) => {
                    let category_idx = self.catalog.category_index(&category.name).unwrap_or(0);
                    let cards = category
                        .entries
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| Card {
                            id: EntryId {
                                category: category_idx,
                                entry: i,
                            },
                            entry,
                            accent: category.color,
                        })
                        .collect();
                    ContentView::Category { category, cards }
                }
                None => ContentView::Empty,
            },
            SearchOutcome::Matches { query, hits } if hits.is_empty() => {
                ContentView::NoResults { query }
            }
            SearchOutcome::Matches { query, hits } => ContentView::SearchResults {
                query,
                cards: hits
                    .into_iter()
                    .map(|hit| Card {
                        id: hit.id,
                        entry: hit.entry,
                        accent: hit.category.color,
                    })
                    .collect(),
            },
        }
    }

    /// Launch the entry behind a clicked card. A failure is kept for the
    /// error dialog until [`Controller::dismiss_error`] and also returned.
    pub fn activate(&mut self, id: EntryId) -> Result<(), DispatchError> {
        let Some((_, entry)) = self.catalog.entry(id) else {
            tracing::error!(?id, "activated unknown entry");
            debug_assert!(false, "activated unknown entry {id:?}");
            return Ok(());
        };
        match self.dispatcher.execute(entry) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn error(&self) -> Option<&DispatchError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
