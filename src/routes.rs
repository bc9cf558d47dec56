use std::{num::NonZeroU32, sync::Arc};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppResult, InvalidMovieId, UnknownListing},
    models::{Listing, MovieRecord},
    processor,
};

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    #[serde(default)]
    refresh: bool,
}

pub async fn movie(
    State(state): State<Arc<AppState>>,
    Path(imdb_movie_id): Path<u32>,
    Query(q): Query<MovieQuery>,
) -> AppResult<Json<MovieRecord>> {
    let imdb_movie_id = NonZeroU32::new(imdb_movie_id).ok_or(InvalidMovieId(imdb_movie_id))?;
    let record =
        processor::process_movie(&state.imdb, &state.cache, imdb_movie_id, !q.refresh).await?;
    Ok(Json(record))
}

pub async fn chart(
    State(state): State<Arc<AppState>>,
    Path(listing): Path<String>,
) -> AppResult<Json<Vec<u32>>> {
    let listing = Listing::from_name(&listing).ok_or(UnknownListing(listing))?;
    let ids = state.imdb.fetch_chart_ids(listing).await?;
    Ok(Json(ids))
}
