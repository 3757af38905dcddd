pub mod extract;
pub mod fetch;

pub use extract::extract;
pub use fetch::{HttpFetcher, PageFetcher, page_url};
