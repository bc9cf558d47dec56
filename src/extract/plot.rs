use std::sync::LazyLock;

use scraper::Selector;
use tracing::warn;

use crate::document::{MovieDocument, own_text};

static STORYLINE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.inline.canwrap").unwrap());
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static SYNOPSIS_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul#plot-synopsis-content").unwrap());

pub fn extract_storyline(doc: &MovieDocument) -> String {
    // genre and keyword boxes share the block classes but carry no paragraph
    let raw = doc.find_all(&STORYLINE_BLOCK).find_map(|block| {
        let paragraph = block.select(&PARAGRAPH).next()?;
        let inner = paragraph.select(&SPAN).next().unwrap_or(paragraph);
        Some(own_text(inner))
    });
    let storyline = clean(raw.as_deref().unwrap_or_default());
    if storyline.is_empty() {
        warn!("no storyline found");
    }
    storyline
}

pub fn extract_synopsis(doc: &MovieDocument) -> String {
    let raw = doc.find_first(&SYNOPSIS_BLOCK).map(own_text);
    let synopsis = clean(raw.as_deref().unwrap_or_default());
    if synopsis.is_empty() {
        warn!("no synopsis found");
    }
    synopsis
}

fn clean(text: &str) -> String {
    text.replace(['\n', '"'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storyline_descends_into_the_inline_span() {
        let doc = MovieDocument::parse(
            r#"<h2>Storyline</h2>
        <div class="inline canwrap">
            <p>
                <span>    In the aftermath of <a href="/title/tt3498820?ref_=tt_stry_pl">Captain America:
                Civil War</a> (2016), Scott Lang grapples with the "consequences" of his choices.</span>
                <em class="nobr">Written by
                <a href="/search/title?plot_author=Walt%20Disney%20Studios">Walt Disney Studios</a></em>
            </p>
        </div>"#,
        );
        let storyline = extract_storyline(&doc);
        assert!(storyline.starts_with("In the aftermath of Captain America:"));
        assert!(storyline.ends_with("of his choices."));
        assert!(!storyline.contains('"'));
        assert!(!storyline.contains("Written by"));
    }

    #[test]
    fn storyline_without_span_uses_the_paragraph() {
        let doc = MovieDocument::parse(
            r#"<div class="inline canwrap" itemprop="description"><p>A spy
            story.</p></div>"#,
        );
        assert!(extract_storyline(&doc).starts_with("A spy"));
    }

    #[test]
    fn missing_blocks_yield_empty_strings() {
        let doc = MovieDocument::parse("<div class='inline'>nothing here</div>");
        assert_eq!(extract_storyline(&doc), "");
        assert_eq!(extract_synopsis(&doc), "");
    }

    #[test]
    fn synopsis_reads_the_list_block() {
        let doc = MovieDocument::parse(
            r#"<ul class="ipl-zebra-list" id="plot-synopsis-content">
                <li class="ipl-zebra-list__item">Bond seeks "revenge".
                </li></ul>"#,
        );
        assert_eq!(extract_synopsis(&doc), "Bond seeks revenge.");
    }
}
