use scraper::{ElementRef, Html, Selector};
use tome_core::error::{AppError, ListingError};
use tome_core::listing::{normalize_rating, resolve_detail_url};
use tome_core::models::Record;
use tome_core::site::CatalogSite;
use tome_core::traits::Extractor;

const LISTING: &str = "article.product_pod";
const TITLE_LINK: &str = "h3 a";
const PRICE: &str = "p.price_color";
const AVAILABILITY: &str = "p.instock.availability";
const RATING: &str = "p.star-rating";

/// Extracts book listings from a catalog page using CSS selectors.
///
/// Each `article.product_pod` is parsed on its own; a listing missing a
/// required field is logged and skipped.
pub struct ListingExtractor {
    site: CatalogSite,
    listing: Selector,
    title_link: Selector,
    price: Selector,
    availability: Selector,
    rating: Selector,
}

impl ListingExtractor {
    pub fn new(site: CatalogSite) -> Result<Self, AppError> {
        Ok(Self {
            site,
            listing: parse_selector(LISTING)?,
            title_link: parse_selector(TITLE_LINK)?,
            price: parse_selector(PRICE)?,
            availability: parse_selector(AVAILABILITY)?,
            rating: parse_selector(RATING)?,
        })
    }

    fn parse_listing(&self, listing: ElementRef<'_>) -> Result<Record, ListingError> {
        let link = listing
            .select(&self.title_link)
            .next()
            .ok_or(ListingError::MissingField("title link"))?;
        let title = link
            .value()
            .attr("title")
            .ok_or(ListingError::MissingField("title"))?;

        let price = self
            .first_text(listing, &self.price)
            .ok_or(ListingError::MissingField("price"))?;
        let availability = self
            .first_text(listing, &self.availability)
            .ok_or(ListingError::MissingField("availability"))?;

        let rating = normalize_rating(
            listing
                .select(&self.rating)
                .next()
                .and_then(|marker| marker.value().attr("class")),
        );

        let href = link
            .value()
            .attr("href")
            .ok_or(ListingError::MissingField("detail link"))?;

        Ok(Record {
            title: title.to_string(),
            price,
            rating,
            availability,
            detail_url: resolve_detail_url(self.site.base(), href),
        })
    }

    fn first_text(&self, listing: ElementRef<'_>, selector: &Selector) -> Option<String> {
        listing
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }
}

impl Extractor for ListingExtractor {
    fn extract(&self, html: &str) -> Vec<Record> {
        let document = Html::parse_document(html);

        document
            .select(&self.listing)
            .enumerate()
            .filter_map(|(position, listing)| match self.parse_listing(listing) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(%position, error = %e, "Skipping malformed listing");
                    None
                }
            })
            .collect()
    }
}

fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::ParseError(format!("Invalid selector '{css}': {e}")))
}
