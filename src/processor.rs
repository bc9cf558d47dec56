use std::num::NonZeroU32;

use tracing::{debug, info, warn};

use crate::{
    cache::CacheManager, error::AppResult, extract, imdb::ImdbClient, models::MovieRecord,
};

/// Loads the movie's pages (from the cache when allowed and fresh) and
/// extracts its record.
pub async fn process_movie(
    client: &ImdbClient,
    cache: &CacheManager,
    imdb_movie_id: NonZeroU32,
    use_cache: bool,
) -> AppResult<MovieRecord> {
    let content = load_pages(client, cache, imdb_movie_id.get(), use_cache).await?;

    info!(imdb_movie_id = imdb_movie_id.get(), bytes = content.len(), "parsing movie pages");
    let record = extract::parse_movie_record(imdb_movie_id, &content)?;
    debug!(imdb_movie_id = imdb_movie_id.get(), title = %record.title_orig, "extracted movie");
    Ok(record)
}

async fn load_pages(
    client: &ImdbClient,
    cache: &CacheManager,
    imdb_movie_id: u32,
    use_cache: bool,
) -> AppResult<Vec<u8>> {
    if use_cache {
        match cache.get_page(imdb_movie_id).await {
            Ok(Some(content)) => {
                info!(imdb_movie_id, "loading cached pages");
                return Ok(content);
            },
            Ok(None) => info!(imdb_movie_id, "not found in cache"),
            Err(err) => warn!(imdb_movie_id, error = %err, "cache lookup failed"),
        }
    }

    info!(imdb_movie_id, url = %client.movie_url(imdb_movie_id), "retrieving movie pages");
    let content = client.fetch_movie_pages(imdb_movie_id).await?;

    if let Err(err) = cache.put_page(imdb_movie_id, &content).await {
        warn!(imdb_movie_id, error = %err, "failed to cache movie pages");
    }

    Ok(content)
}
