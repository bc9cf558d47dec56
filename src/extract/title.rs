use std::sync::LazyLock;

use scraper::Selector;

use crate::{
    document::{MovieDocument, own_text},
    error::ExtractError,
};

static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:title']").unwrap());
static TITLE_YEAR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#titleYear").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Raw `og:title` content, e.g. `"Carlos (TV Mini-Series 2010– )"`.
pub fn raw_title(doc: &MovieDocument) -> Option<&str> {
    doc.find_first(&OG_TITLE).and_then(|el| el.value().attr("content"))
}

pub fn extract_title(doc: &MovieDocument) -> Result<String, ExtractError> {
    let raw = raw_title(doc).ok_or(ExtractError::MissingRequiredField("title"))?;
    let (title, _) = split_trailing_parenthetical(raw);
    if title.is_empty() {
        return Err(ExtractError::MissingRequiredField("title"));
    }
    Ok(title.to_string())
}

/// Prefers the dedicated year anchor and falls back to the title suffix.
pub fn extract_year(doc: &MovieDocument) -> Result<u16, ExtractError> {
    year_from_anchor(doc)
        .or_else(|| raw_title(doc).and_then(year_from_title))
        .ok_or(ExtractError::MissingRequiredField("year"))
}

fn year_from_anchor(doc: &MovieDocument) -> Option<u16> {
    let el = doc.find_first(&TITLE_YEAR)?;
    let text = match el.select(&ANCHOR).next() {
        Some(anchor) => own_text(anchor),
        None => own_text(el),
    };
    let text = text.trim().trim_start_matches('(').trim_end_matches(')').trim();
    parse_year(text)
}

/// First four-digit year inside the trailing parenthetical, so a series range
/// like `(TV Series 2005–2013)` yields 2005.
pub fn year_from_title(raw: &str) -> Option<u16> {
    let (_, suffix) = split_trailing_parenthetical(raw);
    let suffix = suffix?;
    suffix
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(parse_year)
}

fn parse_year(text: &str) -> Option<u16> {
    if text.len() != 4 || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Splits `"Name (suffix)"` into the trimmed name and the suffix between the
/// parentheses. A trailing `- IMDb` site marker is dropped first.
fn split_trailing_parenthetical(raw: &str) -> (&str, Option<&str>) {
    let s = raw.trim();
    let s = s.strip_suffix("- IMDb").map(str::trim_end).unwrap_or(s);
    if !s.ends_with(')') {
        return (s, None);
    }
    let Some(open) = s.rfind('(') else {
        return (s, None);
    };
    (s[..open].trim_end(), Some(&s[open + 1..s.len() - 1]))
}
