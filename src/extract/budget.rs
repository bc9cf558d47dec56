use tracing::debug;

use crate::document::MovieDocument;

const LABEL: &str = "Budget";

/// Budget from the text directly following the first `Budget` label.
pub fn extract_budget(doc: &MovieDocument) -> Option<u64> {
    let Some(text) = doc.text_after(LABEL) else {
        debug!("no budget label followed by text");
        return None;
    };
    let budget = parse_amount(text);
    if budget.is_none() {
        debug!(text = %text.trim(), "unparsable budget");
    }
    budget
}

/// `$200,000,000 ` → 200000000; `EUR 5.000.000` → 5000000.
fn parse_amount(text: &str) -> Option<u64> {
    let amount = text.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
    let digits: String = amount
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_budget_after_label() {
        let doc = MovieDocument::parse(
            r#"<div class="txt-block"><h4 class="inline">Budget:</h4>$200,000,000
            <span class="attribute">(estimated)</span></div>"#,
        );
        assert_eq!(extract_budget(&doc), Some(200_000_000));
    }

    #[test]
    fn currency_code_and_dot_separators() {
        assert_eq!(parse_amount(" EUR 5.000.000 "), Some(5_000_000));
        assert_eq!(parse_amount("£1,500"), Some(1500));
        assert_eq!(parse_amount("unknown"), None);
    }

    #[test]
    fn label_followed_by_element_is_absent() {
        let doc = MovieDocument::parse(
            r#"<h4>Budget</h4><span>$1,000</span>"#,
        );
        assert_eq!(extract_budget(&doc), None);
    }

    #[test]
    fn no_label_is_absent() {
        let doc = MovieDocument::parse("<p>Gross: $1,000</p>");
        assert_eq!(extract_budget(&doc), None);
    }
}
