use std::{num::NonZeroU32, sync::Arc, time::Duration};

use futures::{StreamExt, TryStreamExt, stream};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use tracing::debug;
use wreq::header::{ACCEPT_LANGUAGE, USER_AGENT};

use crate::{chart, error::AppResult, models::Listing};

/// Sub-pages appended to the main profile page, in this order.
pub const SUB_PAGES: [&str; 8] = [
    "parentalguide",
    "fullcredits",
    "awards",
    "business",
    "companycredits",
    "technical",
    "keywords",
    "plotsummary",
];

const AGENT: &str = concat!("moviescrape/", env!("CARGO_PKG_VERSION"));

pub struct ImdbClient {
    client: wreq::Client,
    base_url: String,
    max_concurrent: usize,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ImdbClient {
    pub fn new(
        base_url: String,
        rps: u32,
        max_concurrent: usize,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = wreq::Client::builder().timeout(timeout).build()?;
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN),
        )));
        Ok(Self { client, base_url, max_concurrent: max_concurrent.max(1), limiter })
    }

    pub fn movie_url(&self, imdb_movie_id: u32) -> String {
        format!("{}/title/tt{:07}", self.base_url.trim_end_matches('/'), imdb_movie_id)
    }

    /// Main page followed by every sub-page, concatenated as raw bytes.
    pub async fn fetch_movie_pages(&self, imdb_movie_id: u32) -> AppResult<Vec<u8>> {
        let main = self.movie_url(imdb_movie_id);
        let urls = std::iter::once(main.clone())
            .chain(SUB_PAGES.iter().map(|sub| format!("{main}/{sub}")))
            .collect::<Vec<_>>();

        debug!(imdb_movie_id, pages = urls.len(), "retrieving movie pages");

        let pages: Vec<Vec<u8>> = stream::iter(urls)
            .map(|url| self.fetch_bytes(url))
            .buffered(self.max_concurrent)
            .try_collect()
            .await?;

        Ok(pages.concat())
    }

    pub async fn fetch_chart_ids(&self, listing: Listing) -> AppResult<Vec<u32>> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), listing.path());
        let html = String::from_utf8_lossy(&self.fetch_bytes(url).await?).into_owned();
        let ids = chart::parse_chart_ids(&html);
        debug!(listing = listing.name(), count = ids.len(), "parsed chart");
        Ok(ids)
    }

    async fn fetch_bytes(&self, url: String) -> AppResult<Vec<u8>> {
        self.limiter.until_ready().await;
        debug!(url = %url, "fetching page");
        let body = self
            .client
            .get(&url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.8")
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(body.to_vec())
    }
}
