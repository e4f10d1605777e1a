/// Category shown on first launch and whenever nothing has been selected yet.
pub const DEFAULT_CATEGORY: &str = "System";

/// Which category is active in the content area.
///
/// Selection is not validated against the catalog; looking up an unknown
/// name later fails with [`crate::catalog::NotFoundError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.active = Some(category.into());
    }

    pub fn current(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Category to show once a search is cleared.
    pub fn clear_to_active_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        self.active.as_deref().unwrap_or(default)
    }
}
