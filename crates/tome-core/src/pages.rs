use crate::models::Page;
use crate::site::CatalogSite;
use crate::traits::Fetcher;

/// Fetches catalog pages by index.
///
/// Any fetch error is logged and reported as `None`: a failed page and the
/// page past the end of the catalog look the same to the caller.
#[derive(Clone)]
pub struct CatalogPages<F: Fetcher> {
    fetcher: F,
    site: CatalogSite,
}

impl<F: Fetcher> CatalogPages<F> {
    pub fn new(fetcher: F, site: CatalogSite) -> Self {
        Self { fetcher, site }
    }

    pub fn site(&self) -> &CatalogSite {
        &self.site
    }

    /// Fetch the 1-based catalog page `index`. No retry.
    pub async fn fetch(&self, index: u32) -> Option<Page> {
        let url = self.site.page_url(index);
        match self.fetcher.fetch(&url).await {
            Ok(html) => {
                tracing::debug!(page = index, bytes = html.len(), "Fetched page");
                Some(Page { index, url, html })
            }
            Err(e) => {
                tracing::warn!(page = index, %url, error = %e, "Page fetch failed");
                None
            }
        }
    }
}
