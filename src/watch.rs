//! One watch pass: fetch, discover, compare, notify, persist.
//!
//! A pass is strictly sequential and keeps no state besides the seen-state
//! file. Notification is at-least-once: the file is only advanced after the
//! message for a new document was accepted, so a failed send is retried by
//! the next invocation.
//!
//! Two invocations running at the same time against the same state file can
//! both notify the same document. Scheduling is expected to keep runs apart;
//! nothing here locks the file.

use tracing::{error, info, warn};
use url::Url;

use crate::config::Config;
use crate::dom::ListingPage;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::listing::{document_candidates, CategoryFilter, DocumentRules};
use crate::notify::{document_message, failure_message, Notifier, TelegramNotifier, EMPTY_LISTING_MESSAGE};
use crate::result::Outcome;
use crate::store::SeenStateStore;
use crate::url_utils::normalize_url;
use crate::Result;

/// What a [`Watcher`] looks at and how it filters.
#[derive(Debug, Clone)]
pub struct WatchSettings {
    pub season_url: Url,
    pub rules: DocumentRules,
    pub category: CategoryFilter,

    /// Send [`EMPTY_LISTING_MESSAGE`] when the page has no document at all.
    pub notify_when_empty: bool,
}

impl WatchSettings {
    /// Settings with the default document rules, no category filter and no empty notice.
    #[must_use]
    pub fn new(season_url: Url) -> Self {
        Self {
            season_url,
            rules: DocumentRules::default(),
            category: CategoryFilter::any(),
            notify_when_empty: false,
        }
    }
}

impl From<&Config> for WatchSettings {
    fn from(config: &Config) -> Self {
        Self {
            season_url: config.fetch.season_url.clone(),
            rules: config.rules.clone(),
            category: config.category_filter(),
            notify_when_empty: config.notify_when_empty,
        }
    }
}

/// Change detector over one listing page.
pub struct Watcher<F, N> {
    fetcher: F,
    notifier: N,
    store: SeenStateStore,
    settings: WatchSettings,
}

impl Watcher<HttpFetcher, TelegramNotifier> {
    /// Wire the HTTP fetcher and Telegram notifier described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            HttpFetcher::new(&config.fetch)?,
            TelegramNotifier::new(&config.telegram, config.fetch.timeout)?,
            SeenStateStore::new(&config.state_path),
            WatchSettings::from(config),
        ))
    }
}

impl<F, N> Watcher<F, N>
where
    F: PageFetcher,
    N: Notifier,
{
    pub fn new(fetcher: F, notifier: N, store: SeenStateStore, settings: WatchSettings) -> Self {
        Self {
            fetcher,
            notifier,
            store,
            settings,
        }
    }

    #[must_use]
    pub fn store(&self) -> &SeenStateStore {
        &self.store
    }

    /// Run one pass, reporting a failure through the notifier before returning it.
    ///
    /// The failure report is best effort; if it cannot be delivered the
    /// original error is still the one returned.
    pub fn run(&self) -> Result<Outcome> {
        self.run_once().inspect_err(|e| {
            error!(error = %e, "watch pass failed");
            if let Err(report_err) = self.notifier.send(&failure_message(e)) {
                warn!(error = %report_err, "could not report failure");
            }
        })
    }

    /// Run one pass without failure reporting.
    pub fn run_once(&self) -> Result<Outcome> {
        let season_url = &self.settings.season_url;
        let bytes = self.fetcher.fetch_page(season_url)?;
        let page = ListingPage::parse_bytes(&bytes);
        info!(entries = page.len(), "parsed listing page");

        let previous = canonical_state(&self.store.load());

        let mut candidates =
            document_candidates(&page, season_url, &self.settings.rules).peekable();

        if candidates.peek().is_none() {
            info!("no document listed");
            self.store.save(&previous)?;
            if self.settings.notify_when_empty {
                self.notifier.send(EMPTY_LISTING_MESSAGE)?;
            }
            return Ok(Outcome::NoDocument);
        }

        // Newest document of the wanted category; newer documents of other kinds are skipped.
        let Some(document) = candidates.find(|candidate| self.settings.category.accepts(candidate))
        else {
            info!("no listed document matches the category filter");
            self.store.save(&previous)?;
            return Ok(Outcome::NoDocument);
        };

        if document.url == previous {
            info!(url = %document.url, "latest document already notified");
            self.store.save(&document.url)?;
            return Ok(Outcome::Unchanged { document });
        }

        info!(url = %document.url, event = %document.event_name, "new document");
        self.notifier.send(&document_message(&document))?;
        self.store.save(&document.url)?;
        Ok(Outcome::Notified { document })
    }
}

/// Stored values from older deployments may predate normalization.
fn canonical_state(stored: &str) -> String {
    if stored.is_empty() {
        String::new()
    } else {
        normalize_url(stored)
    }
}
