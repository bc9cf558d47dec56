//! Award tables are a run of cells where an outcome cell ("Won" / "Nominated"
//! plus the award category) governs every description cell after it until
//! the next outcome cell. The walk is a fold over [`AwardCursor`].

use std::{collections::BTreeMap, sync::LazyLock};

use scraper::{ElementRef, Selector};

use crate::{
    document::{MovieDocument, find_in, own_text},
    error::ExtractError,
    models::Award,
};

static AWARD_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.awards").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

const OUTCOME_CLASS: &str = "title_award_outcome";
const DESCRIPTION_CLASS: &str = "award_description";

pub type Awards = BTreeMap<String, Vec<Award>>;

/// A table cell reduced to what the fold needs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AwardCell {
    Outcome { outcome: String, category: String },
    Description(String),
}

/// Running state of one award table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AwardCursor {
    current: Option<(String, String)>,
}

impl AwardCursor {
    /// Applies one cell: outcome cells move the cursor, description cells are
    /// recorded under the current category.
    pub fn step(self, cell: AwardCell, awards: &mut Awards) -> Result<Self, ExtractError> {
        match cell {
            AwardCell::Outcome { outcome, category } => {
                Ok(Self { current: Some((outcome, category)) })
            },
            AwardCell::Description(description) => {
                let Some((outcome, category)) = &self.current else {
                    return Err(ExtractError::UnrecognizedAwardCell(format!(
                        "description `{description}` before any outcome cell"
                    )));
                };
                awards
                    .entry(category.clone())
                    .or_default()
                    .push(Award { description, outcome: outcome.clone() });
                Ok(self)
            },
        }
    }
}

pub fn extract_awards(doc: &MovieDocument) -> Result<Awards, ExtractError> {
    let mut awards = Awards::new();
    for table in doc.find_all(&AWARD_TABLE) {
        find_in(table, &CELL)
            .map(classify_cell)
            .try_fold(AwardCursor::default(), |cursor, cell| cursor.step(cell?, &mut awards))?;
    }
    Ok(awards)
}

fn classify_cell(cell: ElementRef<'_>) -> Result<AwardCell, ExtractError> {
    // first class as written in the markup
    let class = cell.value().attr("class").and_then(|c| c.split_whitespace().next());
    match class {
        Some(OUTCOME_CLASS) => {
            let outcome = find_in(cell, &BOLD).next().map(own_text);
            let category = find_in(cell, &SPAN).next().map(own_text);
            let (Some(outcome), Some(category)) = (outcome, category) else {
                return Err(ExtractError::UnrecognizedAwardCell(format!(
                    "outcome cell without outcome and category: `{}`",
                    own_text(cell).trim()
                )));
            };
            Ok(AwardCell::Outcome {
                outcome: outcome.trim().to_string(),
                category: category.trim().to_string(),
            })
        },
        Some(DESCRIPTION_CLASS) => Ok(AwardCell::Description(description_line(&own_text(cell)))),
        other => Err(ExtractError::UnrecognizedAwardCell(format!(
            "cell class `{}`",
            other.unwrap_or("<none>")
        ))),
    }
}

/// The award name sits on the second line of the cell; the lines after it
/// list the honoured people.
fn description_line(text: &str) -> String {
    text.split('\n')
        .nth(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| text.trim())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(outcome: &str, category: &str) -> AwardCell {
        AwardCell::Outcome { outcome: outcome.to_string(), category: category.to_string() }
    }

    #[test]
    fn cursor_moves_on_outcome_and_emits_on_description() {
        let mut awards = Awards::new();
        let cursor = AwardCursor::default()
            .step(outcome("Won", "Oscar"), &mut awards)
            .unwrap();
        assert!(awards.is_empty());
        let cursor = cursor
            .step(AwardCell::Description("Best Picture".to_string()), &mut awards)
            .unwrap();
        cursor.step(AwardCell::Description("Best Director".to_string()), &mut awards).unwrap();
        assert_eq!(
            awards["Oscar"],
            vec![
                Award { description: "Best Picture".to_string(), outcome: "Won".to_string() },
                Award { description: "Best Director".to_string(), outcome: "Won".to_string() },
            ]
        );
    }

    #[test]
    fn description_before_outcome_fails() {
        let mut awards = Awards::new();
        let err = AwardCursor::default()
            .step(AwardCell::Description("Best Picture".to_string()), &mut awards)
            .unwrap_err();
        assert!(matches!(err, ExtractError::UnrecognizedAwardCell(_)));
    }

    #[test]
    fn two_row_table() {
        let doc = MovieDocument::parse(
            r#"<table class="awards">
              <tr><td class="title_award_outcome" rowspan="1"><b>Won</b><br/><span class="award_category">Best Picture</span></td></tr>
              <tr><td class="award_description">
                Academy Awards
              </td></tr>
            </table>"#,
        );
        let awards = extract_awards(&doc).unwrap();
        assert_eq!(awards.len(), 1);
        assert_eq!(
            awards["Best Picture"],
            vec![Award { description: "Academy Awards".to_string(), outcome: "Won".to_string() }]
        );
    }

    #[test]
    fn category_carries_across_rows() {
        let doc = MovieDocument::parse(
            r#"<table class="awards">
              <tr><td class="title_award_outcome" rowspan="2"><b>Nominated</b><br/><span class="award_category">BAFTA Film Award</span></td>
                  <td class="award_description">
                    Best Sound
                    <br/><a href="/name/nm0000001/">Someone</a>
                  </td></tr>
              <tr><td class="award_description">
                    Best Special Visual Effects
                  </td></tr>
            </table>"#,
        );
        let awards = extract_awards(&doc).unwrap();
        let nominated = |description: &str| Award {
            description: description.to_string(),
            outcome: "Nominated".to_string(),
        };
        assert_eq!(
            awards["BAFTA Film Award"],
            vec![nominated("Best Sound"), nominated("Best Special Visual Effects")]
        );
    }

    #[test]
    fn state_resets_per_table() {
        let doc = MovieDocument::parse(
            r#"<table class="awards">
              <tr><td class="title_award_outcome"><b>Won</b><span>Oscar</span></td></tr>
              <tr><td class="award_description">Best Picture</td></tr>
            </table>
            <table class="awards">
              <tr><td class="award_description">Orphan</td></tr>
            </table>"#,
        );
        let err = extract_awards(&doc).unwrap_err();
        assert!(matches!(err, ExtractError::UnrecognizedAwardCell(_)));
    }

    #[test]
    fn single_line_description_uses_whole_text() {
        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr>
              <td class="title_award_outcome"><b>Won</b><span>Saturn Award</span></td>
              <td class="award_description">Best Actor</td>
              <td class="award_description">
                Best Music
              </td>
            </tr></table>"#,
        );
        let awards = extract_awards(&doc).unwrap();
        let names: Vec<&str> =
            awards["Saturn Award"].iter().map(|a| a.description.as_str()).collect();
        assert_eq!(names, vec!["Best Actor", "Best Music"]);
    }

    #[test]
    fn classified_by_first_class_in_markup() {
        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr>
              <td class="title_award_outcome aa"><b>Won</b><br/><span class="award_category">Oscar</span></td>
              <td class="award_description zz-first">Best Picture</td>
            </tr></table>"#,
        );
        let awards = extract_awards(&doc).unwrap();
        assert_eq!(
            awards["Oscar"],
            vec![Award { description: "Best Picture".to_string(), outcome: "Won".to_string() }]
        );
    }

    #[test]
    fn later_class_does_not_classify_the_cell() {
        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr>
              <td class="aa title_award_outcome"><b>Won</b><span>Oscar</span></td>
            </tr></table>"#,
        );
        assert!(matches!(extract_awards(&doc), Err(ExtractError::UnrecognizedAwardCell(_))));
    }

    #[test]
    fn outcome_cell_missing_category_fails() {
        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr>
              <td class="title_award_outcome"><b>Won</b></td>
              <td class="award_description">Best Picture</td>
            </tr></table>"#,
        );
        assert!(matches!(extract_awards(&doc), Err(ExtractError::UnrecognizedAwardCell(_))));

        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr>
              <td class="title_award_outcome"><span>Oscar</span></td>
            </tr></table>"#,
        );
        assert!(matches!(extract_awards(&doc), Err(ExtractError::UnrecognizedAwardCell(_))));
    }

    #[test]
    fn unknown_cell_class_fails() {
        let doc = MovieDocument::parse(
            r#"<table class="awards"><tr><td class="something_else">?</td></tr></table>"#,
        );
        assert!(matches!(extract_awards(&doc), Err(ExtractError::UnrecognizedAwardCell(_))));
    }

    #[test]
    fn no_award_tables_is_empty() {
        let doc = MovieDocument::parse("<table><tr><td>x</td></tr></table>");
        assert!(extract_awards(&doc).unwrap().is_empty());
    }
}
