use serde::Serialize;

/// One catalogue item as observed during a single scrape pass.
///
/// Never persisted directly; a favorited record becomes a [`FavoriteRow`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub price: Option<f64>,
    pub availability: String,
}

/// Persisted, user-curated analog of a [`BookRecord`].
///
/// The price column is TEXT in the database, so the row carries the stored
/// string and every reader re-parses it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FavoriteRow {
    pub id: i64,
    pub title: String,
    pub price: Option<String>,
    pub availability: String,
}
