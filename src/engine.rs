use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};
use scraper::Html;

use crate::error::{LarderError, Result};
use crate::services::listing::{collect_links, resolve_max_page};
use crate::services::scrape::{detect_style, extract_recipe};
use crate::services::store::{recipe_filename, RecipeStore};
use crate::types::{CrawlFailure, CrawlReport, SiteConfig};

#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Sequences the whole crawl: discover the page count, walk every
/// listing page for links, then harvest each link. One request in
/// flight at a time, every step awaited before the next begins.
pub struct Engine<'a, RS: RecipeStore> {
    pub store: &'a RS,
    pub fetcher: &'a dyn Fetcher,
    pub site: SiteConfig,
}

impl<'a, RS: RecipeStore> Engine<'a, RS> {
    pub fn new(store: &'a RS, fetcher: &'a dyn Fetcher, site: SiteConfig) -> Self {
        Self {
            store,
            fetcher,
            site,
        }
    }

    /// Run the three crawl phases. Failures while discovering or
    /// paginating abort the whole run; a partial page set is worse
    /// than none. Failures on individual recipes are recorded and
    /// skipped.
    pub async fn crawl(&self) -> Result<CrawlReport> {
        // Discover
        let html = self.fetcher.fetch(self.site.list_url()).await?;
        let (pages, mut links) = {
            let doc = Html::parse_document(&html);
            let pages = match resolve_max_page(&doc) {
                Ok(n) => n,
                // A listing short enough for one page renders no
                // pagination control at all.
                Err(LarderError::NoPagination) => 1,
                Err(e) => return Err(e),
            };
            (pages, collect_links(&doc))
        };
        info!(
            "listing spans {pages} page(s), {} link(s) on page 1",
            links.len()
        );

        // Paginate
        for page in 2..=pages {
            let url = self.site.page_url(page);
            info!("fetching listing page {page}");
            let html = self.fetcher.fetch(&url).await?;
            let doc = Html::parse_document(&html);
            links.extend(collect_links(&doc));
        }
        info!("collected {} recipe link(s)", links.len());

        // Harvest
        let mut saved = Vec::new();
        let mut failures = Vec::new();
        for link in &links {
            match self.harvest_one(link).await {
                Ok(filename) => saved.push(filename),
                Err(e) => {
                    warn!("skipping {link}: {e}");
                    failures.push(CrawlFailure {
                        url: link.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(CrawlReport {
            pages,
            discovered: links.len(),
            saved,
            failures,
        })
    }

    /// Fetch, extract and persist a single recipe. Returns the
    /// filename the recipe was stored under. Nothing is written unless
    /// every step before it succeeded.
    pub async fn harvest_one(&self, url: &str) -> Result<String> {
        let html = self.fetcher.fetch(url).await?;
        let doc = Html::parse_document(&html);
        let style =
            detect_style(&doc).ok_or_else(|| LarderError::UnknownLayout(url.to_string()))?;
        info!("extracting {url} ({} card)", style.name());

        let recipe = extract_recipe(&doc, style).into_recipe(url, Utc::now());
        let filename = recipe_filename(&self.site.origin(), url);
        self.store.save(&filename, &recipe)?;
        Ok(filename)
    }
}
