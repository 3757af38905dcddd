use crate::models::{CoreError, FavoriteRow};

pub type PersistenceResult<T> = Result<T, CoreError>;

/// Favorites storage, keyed by book title.
///
/// Callers are trusted to pass titles that came from a scraped
/// [`BookRecord`](crate::models::BookRecord); the store does not validate
/// provenance at write time.
pub trait FavoritesStore: Send + Sync {
    /// Insert a favorite, or update price and availability in place when a
    /// row with this title already exists.
    fn upsert(
        &self,
        title: &str,
        price: Option<f64>,
        availability: &str,
    ) -> PersistenceResult<()>;

    /// Delete the row with this title. Removing an absent title is a no-op.
    fn remove(&self, title: &str) -> PersistenceResult<()>;

    /// All stored favorites. Ordering is unspecified.
    fn list_all(&self) -> PersistenceResult<Vec<FavoriteRow>>;
}
