pub mod extractor;
pub mod fetcher;
pub mod writer;

pub use extractor::ListingExtractor;
pub use fetcher::ReqwestFetcher;
pub use writer::{CsvTableWriter, DEFAULT_OUTPUT};
