use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use tracing::debug;

use crate::document::{MovieDocument, own_text};

static TIME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("time").unwrap());
static ISO_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?$").unwrap());
static HUMAN_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*min)?$").unwrap());

/// Runtime in minutes from the first `<time>` element that carries one.
pub fn extract_runtime(doc: &MovieDocument) -> Option<u32> {
    let from_attr = doc
        .find_all(&TIME)
        .filter_map(|el| el.value().attr("datetime"))
        .find_map(parse_iso_duration);
    let runtime = from_attr
        .or_else(|| doc.find_all(&TIME).find_map(|el| parse_human_duration(&own_text(el))));
    if runtime.is_none() {
        debug!("no runtime indicator found");
    }
    runtime
}

/// `PT152M` or `PT2H32M`.
fn parse_iso_duration(value: &str) -> Option<u32> {
    hours_and_minutes(&ISO_DURATION, value.trim())
}

/// `2h 32min`, `2h` or `131 min`.
fn parse_human_duration(text: &str) -> Option<u32> {
    hours_and_minutes(&HUMAN_DURATION, text.trim())
}

fn hours_and_minutes(pattern: &Regex, text: &str) -> Option<u32> {
    let caps = pattern.captures(text)?;
    let hours = caps.get(1).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
    let minutes = caps.get(2).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
    if hours.is_none() && minutes.is_none() {
        return None;
    }
    hours.unwrap_or(0).checked_mul(60)?.checked_add(minutes.unwrap_or(0))
}
