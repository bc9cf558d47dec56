pub mod awards;
pub mod budget;
pub mod certificate;
pub mod credits;
pub mod genres;
pub mod plot;
pub mod rating;
pub mod runtime;
pub mod title;

use std::num::NonZeroU32;

use tracing::debug;

use crate::{document::MovieDocument, error::ExtractError, models::MovieRecord};

/// Decodes and parses the raw page blob once, then builds the record.
pub fn parse_movie_record(
    external_id: NonZeroU32,
    raw: &[u8],
) -> Result<MovieRecord, ExtractError> {
    let doc = MovieDocument::from_bytes(raw)?;
    build_movie_record(external_id, &doc)
}

/// Runs every field extractor against one parsed document. Title, year,
/// ratings and awards failures abort; every other field degrades on its own.
pub fn build_movie_record(
    external_id: NonZeroU32,
    doc: &MovieDocument,
) -> Result<MovieRecord, ExtractError> {
    debug!(imdb_movie_id = external_id.get(), "extracting movie record");

    let title_orig = title::extract_title(doc)?;
    let year = title::extract_year(doc)?;
    let duration_minutes = runtime::extract_runtime(doc);
    let content_rating = certificate::extract_content_rating(doc);
    let storyline = plot::extract_storyline(doc);
    let synopsis = plot::extract_synopsis(doc);
    let genres = genres::extract_genres(doc);
    let ratings = rating::extract_ratings(doc)?;
    let budget = budget::extract_budget(doc);
    let persons = credits::extract_persons(doc);
    let awards = awards::extract_awards(doc)?;

    debug!(
        imdb_movie_id = external_id.get(),
        title = %title_orig,
        year,
        genres = genres.len(),
        award_categories = awards.len(),
        "extracted movie record"
    );

    Ok(MovieRecord {
        external_id,
        title_orig,
        year,
        duration_minutes,
        content_rating,
        storyline,
        synopsis,
        genres,
        persons,
        awards,
        ratings,
        budget,
    })
}
