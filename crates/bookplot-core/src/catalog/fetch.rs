use crate::models::CoreError;

/// Retrieves raw catalogue markup for a fully-qualified URL.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, CoreError>;
}

/// Blocking HTTP fetcher. Non-success statuses and transport failures both
/// surface as retrieval errors; there is no retry and no timeout override.
pub struct HttpFetcher;

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, CoreError> {
        let response = ureq::get(url)
            .call()
            .map_err(|error| retrieval_error(url, error.to_string()))?;
        response
            .into_string()
            .map_err(|error| retrieval_error(url, error.to_string()))
    }
}

/// Build the URL of one catalogue listing page.
pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{}/catalogue/page-{page}.html", base_url.trim_end_matches('/'))
}

fn retrieval_error(url: &str, message: String) -> CoreError {
    CoreError::Retrieval {
        url: url.to_string(),
        message,
    }
}
