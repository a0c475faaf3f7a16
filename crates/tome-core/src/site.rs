use url::Url;

use crate::error::AppError;

/// Default catalog root of the target site.
pub const DEFAULT_CATALOG_BASE: &str = "http://books.toscrape.com/catalogue/";

/// Location of the paginated catalog.
///
/// The base always ends with `/`; page URLs and detail URLs are built by
/// appending to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSite {
    base: String,
}

impl CatalogSite {
    /// Validate and normalize a catalog base URL.
    ///
    /// Only `http` and `https` are accepted. A missing trailing slash is added.
    pub fn new(base: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(base)
            .map_err(|e| AppError::ConfigError(format!("Invalid catalog URL '{base}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::ConfigError(format!(
                    "URL scheme '{scheme}' is not allowed (only http/https)"
                )));
            }
        }

        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of the 1-based catalog page `index`.
    pub fn page_url(&self, index: u32) -> String {
        format!("{}page-{index}.html", self.base)
    }
}

impl Default for CatalogSite {
    fn default() -> Self {
        Self {
            base: DEFAULT_CATALOG_BASE.to_string(),
        }
    }
}
