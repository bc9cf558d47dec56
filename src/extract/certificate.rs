use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use tracing::debug;

use crate::{document::MovieDocument, models::NO_CERTIFICATE};

static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static GERMAN_CERTIFICATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"certificates=(?:de|DE|imdb_wg|Germany):(\d+)").unwrap());

/// German minimum age (FSK) from the first certificate search link.
pub fn extract_content_rating(doc: &MovieDocument) -> u8 {
    let rating = doc
        .find_all(&LINK)
        .filter_map(|el| el.value().attr("href"))
        .find_map(|href| GERMAN_CERTIFICATE.captures(href))
        .and_then(|caps| caps[1].parse().ok());
    match rating {
        Some(age) => age,
        None => {
            debug!("no German certificate found");
            NO_CERTIFICATE
        },
    }
}
