use std::time::Duration;

use tome_client::{CsvTableWriter, ListingExtractor, ReqwestFetcher};
use tome_core::models::Record;
use tome_core::traits::{Extractor, Fetcher, TableWriter};
use tome_core::{CatalogCollector, CatalogPages, CatalogSite, CollectorConfig, TracingCollectorReporter};

use crate::integration::common::{PAGE_ONE, PastEnd, spawn_catalog_server};

fn collector(base_url: &str) -> CatalogCollector<ReqwestFetcher, ListingExtractor> {
    let site = CatalogSite::new(base_url).unwrap();
    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(5)).unwrap();
    let extractor = ListingExtractor::new(site.clone()).unwrap();
    CatalogCollector::new(
        CatalogPages::new(fetcher, site),
        extractor,
        CollectorConfig::new(Duration::ZERO),
    )
}

#[tokio::test]
async fn scrapes_until_not_found_and_writes_csv() {
    let (base_url, shutdown, handle) = spawn_catalog_server(PastEnd::NotFound);

    let catalog = collector(&base_url)
        .collect(&TracingCollectorReporter)
        .await;

    assert_eq!(
        catalog.records(),
        &[
            Record {
                title: "Test Book".into(),
                price: "£20.00".into(),
                rating: 3,
                availability: "In stock".into(),
                detail_url: format!("{base_url}test-book_1/index.html"),
            },
            Record {
                title: "Unrated Book".into(),
                price: "£9.99".into(),
                rating: 0,
                availability: "In stock".into(),
                detail_url: format!("{base_url}unrated_3/index.html"),
            },
        ]
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books_data.csv");
    CsvTableWriter::new(&path).write(&catalog).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Title,Price,Rating,Availability,URL"));
    assert_eq!(
        lines.next(),
        Some(format!("Test Book,£20.00,3,In stock,{base_url}test-book_1/index.html").as_str())
    );
    assert_eq!(
        lines.next(),
        Some(format!("Unrated Book,£9.99,0,In stock,{base_url}unrated_3/index.html").as_str())
    );
    assert_eq!(lines.next(), None);

    let _ = shutdown.send(());
    let _ = handle.join();
}

#[tokio::test]
async fn stops_on_empty_page() {
    let (base_url, shutdown, handle) = spawn_catalog_server(PastEnd::EmptyPage);

    let catalog = collector(&base_url)
        .collect(&TracingCollectorReporter)
        .await;

    let titles: Vec<_> = catalog.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Test Book", "Unrated Book"]);

    let _ = shutdown.send(());
    let _ = handle.join();
}

#[tokio::test]
async fn fetcher_reports_error_status() {
    let (base_url, shutdown, handle) = spawn_catalog_server(PastEnd::NotFound);
    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(5)).unwrap();

    let html = fetcher
        .fetch(&format!("{base_url}page-1.html"))
        .await
        .unwrap();
    assert!(html.contains("£20.00"));

    let err = fetcher
        .fetch(&format!("{base_url}page-9.html"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("HTTP 404"));

    let _ = shutdown.send(());
    let _ = handle.join();
}

#[test]
fn malformed_listing_does_not_abort_page() {
    let site = CatalogSite::new("http://example.com/catalogue/").unwrap();
    let records = ListingExtractor::new(site).unwrap().extract(PAGE_ONE);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Test Book");
}
