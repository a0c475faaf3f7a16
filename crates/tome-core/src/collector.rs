use std::time::Duration;

use crate::models::Catalog;
use crate::pages::CatalogPages;
use crate::traits::{Extractor, Fetcher};

/// Settings for one collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Pause between a successful page and the next fetch.
    pub delay: Duration,
}

impl CollectorConfig {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CollectorConfig {
    /// One second between pages.
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

/// Why paging ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The page could not be fetched (error status or transport failure).
    FetchFailed,
    /// The page was fetched but held no listings.
    EmptyPage,
}

/// Events emitted by the collector for progress reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectorEvent {
    PageStarted {
        page: u32,
    },
    PageCollected {
        page: u32,
        records: usize,
        total: usize,
    },
    Stopped {
        page: u32,
        reason: StopReason,
        total: usize,
    },
}

/// Trait for receiving collector events (decoupled logging).
pub trait CollectorReporter: Send + Sync {
    fn report(&self, event: CollectorEvent) {
        let _ = event;
    }
}

/// Reporter that uses the `tracing` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCollectorReporter;

impl CollectorReporter for TracingCollectorReporter {
    fn report(&self, event: CollectorEvent) {
        match event {
            CollectorEvent::PageStarted { page } => {
                tracing::info!(%page, "Scraping page");
            }
            CollectorEvent::PageCollected {
                page,
                records,
                total,
            } => {
                tracing::info!(%page, %records, %total, "Page collected");
            }
            CollectorEvent::Stopped {
                page,
                reason: StopReason::EmptyPage,
                total,
            } => {
                tracing::info!(%page, %total, "No books found on page, assuming last page reached");
            }
            CollectorEvent::Stopped {
                page,
                reason: StopReason::FetchFailed,
                total,
            } => {
                tracing::info!(%page, %total, "Page unavailable, stopping");
            }
        }
    }
}

enum State {
    Running { page: u32 },
    Stopped { page: u32, reason: StopReason },
}

/// Drives pagination from page 1 until a page is unavailable or empty.
///
/// There is no page limit: termination relies on the site eventually
/// answering with an error or an empty page.
pub struct CatalogCollector<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pages: CatalogPages<F>,
    extractor: E,
    config: CollectorConfig,
}

impl<F, E> CatalogCollector<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(pages: CatalogPages<F>, extractor: E, config: CollectorConfig) -> Self {
        Self {
            pages,
            extractor,
            config,
        }
    }

    /// Run the paging loop and return everything collected.
    pub async fn collect<R: CollectorReporter>(&self, reporter: &R) -> Catalog {
        let mut catalog = Catalog::new();
        let mut state = State::Running { page: 1 };

        loop {
            match state {
                State::Running { page } => {
                    state = self.step(page, &mut catalog, reporter).await;
                }
                State::Stopped { page, reason } => {
                    reporter.report(CollectorEvent::Stopped {
                        page,
                        reason,
                        total: catalog.len(),
                    });
                    return catalog;
                }
            }
        }
    }

    async fn step<R: CollectorReporter>(
        &self,
        page: u32,
        catalog: &mut Catalog,
        reporter: &R,
    ) -> State {
        reporter.report(CollectorEvent::PageStarted { page });

        let Some(fetched) = self.pages.fetch(page).await else {
            return State::Stopped {
                page,
                reason: StopReason::FetchFailed,
            };
        };

        let records = self.extractor.extract(&fetched.html);
        if records.is_empty() {
            return State::Stopped {
                page,
                reason: StopReason::EmptyPage,
            };
        }

        let count = records.len();
        catalog.append_page(records);
        reporter.report(CollectorEvent::PageCollected {
            page,
            records: count,
            total: catalog.len(),
        });

        if !self.config.delay.is_zero() {
            tracing::debug!(sleep_ms = %self.config.delay.as_millis(), "Waiting before next page");
            tokio::time::sleep(self.config.delay).await;
        }

        State::Running { page: page + 1 }
    }
}
