use std::future::Future;

use crate::error::AppError;
use crate::models::{Catalog, Record};

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns one catalog page into records.
///
/// Never fails as a whole: malformed listings are dropped individually and
/// an empty result means the page had no listings.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<Record>;
}

/// Persists a finished catalog in tabular form.
pub trait TableWriter {
    fn write(&self, catalog: &Catalog) -> Result<(), AppError>;
}
