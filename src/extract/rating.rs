use std::sync::LazyLock;

use scraper::Selector;

use crate::{
    document::{MovieDocument, own_text},
    error::ExtractError,
    models::Ratings,
};

static RATING_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.imdbRating").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static RATING_VALUE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[itemprop='ratingValue']").unwrap());
static RATING_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[itemprop='ratingCount']").unwrap());

/// Position of the vote count among the rating block's spans; the ones in
/// between hold the `/` and `10` scale markers.
const COUNT_SPAN: usize = 3;

pub fn extract_ratings(doc: &MovieDocument) -> Result<Ratings, ExtractError> {
    let (rating, count) = match doc.find_first(&RATING_BLOCK) {
        Some(block) => {
            let spans: Vec<String> = block.select(&SPAN).map(own_text).collect();
            if spans.len() <= COUNT_SPAN {
                return Err(ExtractError::MalformedRatingBlock(format!(
                    "expected at least {} spans, found {}",
                    COUNT_SPAN + 1,
                    spans.len()
                )));
            }
            (spans[0].clone(), spans[COUNT_SPAN].clone())
        },
        None => {
            let value = doc.find_first(&RATING_VALUE);
            let count = doc.find_first(&RATING_COUNT);
            match (value, count) {
                (Some(value), Some(count)) => (own_text(value), own_text(count)),
                _ => {
                    return Err(ExtractError::MalformedRatingBlock(
                        "no rating container".to_string(),
                    ));
                },
            }
        },
    };

    Ok(Ratings { rating_imdb: parse_rating(&rating)?, rating_imdb_count: parse_count(&count)? })
}

fn parse_rating(text: &str) -> Result<f64, ExtractError> {
    let rating: f64 = text
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ExtractError::MalformedRatingBlock(format!("bad rating `{}`", text.trim())))?;
    if !(0.0..=10.0).contains(&rating) {
        return Err(ExtractError::MalformedRatingBlock(format!("rating {rating} out of range")));
    }
    Ok(rating)
}

fn parse_count(text: &str) -> Result<u64, ExtractError> {
    let digits: String =
        text.chars().filter(|c| !matches!(c, ',' | '.') && !c.is_whitespace()).collect();
    digits
        .parse()
        .map_err(|_| ExtractError::MalformedRatingBlock(format!("bad vote count `{}`", text.trim())))
}
