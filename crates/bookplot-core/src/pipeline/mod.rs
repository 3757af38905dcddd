use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{self, PageFetcher};
use crate::chart;
use crate::models::{BookRecord, CoreError};
use crate::persistence::FavoritesStore;

pub type PipelineResult<T> = Result<T, CoreError>;

/// Request-scoped browse context. Carries the catalogue page identity that
/// the surrounding layer would otherwise keep in session state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageContext {
    pub page: u32,
}

impl Default for PageContext {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Outcome of the report flow.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportOutcome {
    /// Nothing favorited yet; no chart was attempted.
    NoFavorites,
    /// Encoded chart image bytes.
    Chart(Vec<u8>),
}

/// Sequences the scrape, persistence and chart components. Any hard error
/// aborts the whole flow; nothing is retried or compensated.
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    store: Arc<dyn FavoritesStore>,
    base_url: String,
}

impl Pipeline {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        store: Arc<dyn FavoritesStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            store,
            base_url: base_url.into(),
        }
    }

    /// Browse flow: fetch and extract one catalogue page. No persistence.
    pub fn browse(&self, context: &PageContext) -> PipelineResult<Vec<BookRecord>> {
        let url = catalog::page_url(&self.base_url, context.page);
        let markup = self.fetcher.fetch(&url)?;
        let books = catalog::extract(&markup);
        tracing::debug!(page = context.page, count = books.len(), "extracted catalogue page");
        Ok(books)
    }

    /// Favorite flow: re-scrape the page, keep the records whose titles are
    /// members of the selection, and upsert each one. Returns the titles that
    /// were stored.
    pub fn favorite(
        &self,
        context: &PageContext,
        selected_titles: &[String],
    ) -> PipelineResult<Vec<String>> {
        let books = self.browse(context)?;
        let selected: HashSet<&str> = selected_titles.iter().map(String::as_str).collect();

        let mut stored = Vec::new();
        for book in books
            .iter()
            .filter(|book| selected.contains(book.title.as_str()))
        {
            self.store
                .upsert(&book.title, book.price, &book.availability)?;
            stored.push(book.title.clone());
        }
        Ok(stored)
    }

    /// Unfavorite flow. Removing a title that was never favorited succeeds.
    pub fn unfavorite(&self, title: &str) -> PipelineResult<()> {
        self.store.remove(title)
    }

    /// Report flow: short-circuits on an empty store, otherwise renders the
    /// chart over every stored row.
    pub fn report(&self) -> PipelineResult<ReportOutcome> {
        let favorites = self.store.list_all()?;
        if favorites.is_empty() {
            return Ok(ReportOutcome::NoFavorites);
        }
        let payload = chart::render(&favorites)?;
        Ok(ReportOutcome::Chart(payload))
    }
}
