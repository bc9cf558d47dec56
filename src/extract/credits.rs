use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::{
    document::{MovieDocument, find_in, next_sibling_tag, own_text},
    models::Role,
};

static FULL_CREDITS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#fullcredits_content").unwrap());
static CAST_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.cast_list").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static ACTOR_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td[itemprop='actor']").unwrap());
static ACTOR_URL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[itemprop='url'][href]").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4").unwrap());
static PERSON_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/name/nm(\d+)").unwrap());

const DIRECTOR_HEADING: &str = "Directed by";

/// Actor ids in billing order, plus director ids when a director section exists.
pub fn extract_persons(doc: &MovieDocument) -> BTreeMap<Role, Vec<u32>> {
    let mut persons = BTreeMap::new();
    persons.insert(Role::Actor, extract_cast(doc));
    if let Some(directors) = extract_directors(doc) {
        persons.entry(Role::Director).or_insert_with(Vec::new).extend(directors);
    }
    for (role, ids) in &persons {
        debug!(role = role.as_str(), count = ids.len(), "extracted credits");
    }
    persons
}

/// Cast from the full-credits page when present, otherwise from anywhere in
/// the document. A `cast_list` table wins over `itemprop="actor"` cells.
pub fn extract_cast(doc: &MovieDocument) -> Vec<u32> {
    let scope = doc.find_first(&FULL_CREDITS).unwrap_or_else(|| doc.root());
    match find_in(scope, &CAST_TABLE).next() {
        Some(table) => cast_from_table(table),
        None => cast_from_cells(scope),
    }
}

fn cast_from_table(table: ElementRef<'_>) -> Vec<u32> {
    find_in(table, &ROW).filter_map(|row| find_in(row, &LINK).find_map(person_id)).collect()
}

fn cast_from_cells(scope: ElementRef<'_>) -> Vec<u32> {
    find_in(scope, &ACTOR_CELL)
        .filter_map(|cell| {
            find_in(cell, &ACTOR_URL)
                .find_map(person_id)
                .or_else(|| find_in(cell, &LINK).find_map(person_id))
        })
        .collect()
}

/// `None` when there is no "Directed by" heading.
pub fn extract_directors(doc: &MovieDocument) -> Option<Vec<u32>> {
    let heading = doc.find_all(&HEADING).find(|h| own_text(*h).contains(DIRECTOR_HEADING))?;
    let ids = match next_sibling_tag(heading, "table") {
        Some(table) => find_in(table, &LINK).filter_map(person_id).collect(),
        None => {
            debug!("director heading without a credits table");
            Vec::new()
        },
    };
    Some(ids)
}

fn person_id(link: ElementRef<'_>) -> Option<u32> {
    let href = link.value().attr("href")?;
    PERSON_PATH.captures(href)?[1].parse().ok()
}
