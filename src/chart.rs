use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;
use scraper::{Html, Selector};

static RIBBON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.wlb_ribbon[data-tconst]").unwrap());
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.titleColumn a[href], li.ipc-metadata-list-summary-item a[href^='/title/tt']")
        .unwrap()
});
static TITLE_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/title/tt(\d+)").unwrap());

/// Movie ids of a chart page in rank order, without duplicates.
pub fn parse_chart_ids(html: &str) -> Vec<u32> {
    let doc = Html::parse_document(html);

    let ribbons: Vec<u32> = doc
        .select(&RIBBON)
        .filter_map(|el| el.value().attr("data-tconst"))
        .filter_map(|tconst| tconst.trim().trim_start_matches('t').parse::<u32>().ok())
        .collect();

    let ids: Vec<u32> = if ribbons.is_empty() {
        doc.select(&TITLE_LINK)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(|href| TITLE_PATH.captures(href)?[1].parse::<u32>().ok())
            .collect()
    } else {
        ribbons
    };

    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ribbons_in_rank_order() {
        let html = r#"<table class="chart"><tbody>
            <tr><td class="posterColumn"></td><td class="titleColumn"><a href="/title/tt0111161/">The Shawshank Redemption</a></td>
                <td class="watchlistColumn"><div class="wlb_ribbon" data-tconst="tt0111161"></div></td></tr>
            <tr><td class="titleColumn"><a href="/title/tt0068646/">The Godfather</a></td>
                <td class="watchlistColumn"><div class="wlb_ribbon" data-tconst="tt0068646"></div></td></tr>
        </tbody></table>"#;
        assert_eq!(parse_chart_ids(html), vec![111161, 68646]);
    }

    #[test]
    fn title_links_when_no_ribbons() {
        let html = r#"<ul>
            <li class="ipc-metadata-list-summary-item"><a href="/title/tt0111161/?ref_=chttp_i_1"><img/></a>
                <a href="/title/tt0111161/?ref_=chttp_t_1">1. The Shawshank Redemption</a></li>
            <li class="ipc-metadata-list-summary-item"><a href="/title/tt0068646/?ref_=chttp_t_2">2. The Godfather</a></li>
        </ul>"#;
        assert_eq!(parse_chart_ids(html), vec![111161, 68646]);
    }

    #[test]
    fn empty_page() {
        assert!(parse_chart_ids("<html></html>").is_empty());
    }
}
