use serde::{Deserialize, Serialize};

/// Output column names, in write order.
pub const COLUMNS: [&str; 5] = ["Title", "Price", "Rating", "Availability", "URL"];

/// One book listing.
///
/// Field order matches [`COLUMNS`]; serialized names are the column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: String,
    /// Currency-prefixed, passed through as found (e.g. `£20.00`).
    #[serde(rename = "Price")]
    pub price: String,
    /// 1..=5, or 0 when the rating was absent or unrecognized.
    #[serde(rename = "Rating")]
    pub rating: u8,
    #[serde(rename = "Availability")]
    pub availability: String,
    /// Absolute URL of the detail page.
    #[serde(rename = "URL")]
    pub detail_url: String,
}

/// Ordered records accumulated over one scrape run.
///
/// Pages are appended whole, in page order. No deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's worth of records.
    pub fn append_page(&mut self, page: Vec<Record>) {
        self.records.extend(page);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// A fetched catalog page, not yet parsed.
#[derive(Debug, Clone)]
pub struct Page {
    pub index: u32,
    pub url: String,
    pub html: String,
}
