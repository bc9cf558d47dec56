use std::{collections::BTreeSet, sync::LazyLock};

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::document::{MovieDocument, own_text};

static GENRE_GROUP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[itemprop='genre']").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static GENRE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href*='genres='], a[href^='/genre/']").unwrap());

pub fn extract_genres(doc: &MovieDocument) -> BTreeSet<String> {
    match doc.find_first(&GENRE_GROUP) {
        Some(group) => collect_names(group.select(&LINK)),
        None => {
            debug!("no genre group, falling back to genre links");
            collect_names(doc.find_all(&GENRE_LINK))
        },
    }
}

fn collect_names<'a>(links: impl Iterator<Item = ElementRef<'a>>) -> BTreeSet<String> {
    links
        .map(|link| own_text(link).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
