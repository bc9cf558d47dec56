//! Parsed movie page and the handful of tree queries the field extractors need.

use scraper::{ElementRef, Html, Selector, element_ref::Select};

use crate::error::ExtractError;

/// The concatenated main page and sub-pages of one movie, parsed once.
pub struct MovieDocument {
    html: Html,
}

impl MovieDocument {
    pub fn parse(raw: &str) -> Self {
        Self { html: Html::parse_document(raw) }
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, ExtractError> {
        let text = std::str::from_utf8(raw)?;
        Ok(Self::parse(text))
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub fn find_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    pub fn find_all<'a, 'b>(&'a self, selector: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Text of the node that directly follows the first text node containing
    /// `label` in document order. `None` when no such label exists or the
    /// following node is an element. Script and style bodies never match.
    pub fn text_after(&self, label: &str) -> Option<&str> {
        let mut nodes = self.html.tree.root().descendants();
        nodes.find(|node| {
            let Some(text) = node.value().as_text() else { return false };
            let raw = node
                .parent()
                .and_then(|p| p.value().as_element())
                .is_some_and(|e| matches!(e.name(), "script" | "style"));
            !raw && text.contains(label)
        })?;
        nodes.next()?.value().as_text().map(|t| &**t)
    }
}

/// All text below `el`, concatenated.
pub fn own_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn find_in<'a, 'b>(scope: ElementRef<'a>, selector: &'b Selector) -> Select<'a, 'b> {
    scope.select(selector)
}

/// Next element sibling with tag `name`, skipping text and other elements.
pub fn next_sibling_tag<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.next_siblings().filter_map(ElementRef::wrap).find(|sib| sib.value().name() == name)
}
