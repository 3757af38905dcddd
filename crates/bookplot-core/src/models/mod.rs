pub mod book;
pub mod error;

pub use book::{BookRecord, FavoriteRow};
pub use error::CoreError;
