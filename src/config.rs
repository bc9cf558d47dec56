use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub imdb_base_url: String,
    pub database_url: String,
    pub cache_ttl_days: i64,
    pub imdb_rps: u32,
    pub max_concurrent: usize,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let imdb_base_url =
            std::env::var("IMDB_BASE_URL").unwrap_or_else(|_| "https://www.imdb.com".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://moviescrape.db?mode=rwc".to_string());

        let cache_ttl_days: i64 =
            std::env::var("CACHE_TTL_DAYS").ok().and_then(|s| s.parse().ok()).unwrap_or(30);

        let imdb_rps: u32 =
            std::env::var("IMDB_RPS").ok().and_then(|s| s.parse().ok()).unwrap_or(2);

        let max_concurrent: usize =
            std::env::var("MAX_CONCURRENT_REQUESTS").ok().and_then(|s| s.parse().ok()).unwrap_or(4);

        let http_timeout_secs: u64 =
            std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(30);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            imdb_base_url,
            database_url,
            cache_ttl_days,
            imdb_rps,
            max_concurrent,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}
