pub mod collector;
pub mod error;
pub mod listing;
pub mod models;
pub mod pages;
pub mod site;
pub mod traits;


pub use collector::{
    CatalogCollector, CollectorConfig, CollectorEvent, CollectorReporter, StopReason,
    TracingCollectorReporter,
};
pub use error::{AppError, ListingError};
pub use listing::{StarRating, normalize_rating, resolve_detail_url};
pub use models::{COLUMNS, Catalog, Page, Record};
pub use pages::CatalogPages;
pub use site::{CatalogSite, DEFAULT_CATALOG_BASE};
pub use traits::{Extractor, Fetcher, TableWriter};
