use crate::extraction::PageContent;

/// Word count of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTally {
    pub page_number: usize,
    pub words: usize,
}

/// Per-page word counts for one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTally {
    pub pages: Vec<PageTally>,
}

impl WordTally {
    pub fn total(&self) -> usize {
        self.pages.iter().map(|p| p.words).sum()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Number of maximal runs of non-separator characters in `text`.
///
/// Separators are the Unicode `White_Space` set (NBSP, ideographic space
/// and the like) plus the ASCII information separators U+001C..U+001F.
/// Empty text has zero words.
pub fn count_tokens(text: &str) -> usize {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .count()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn tally_pages(pages: &[PageContent]) -> WordTally {
    let pages = pages
        .iter()
        .map(|page| {
            let words = count_tokens(&page.text);
            log::debug!("page {}: {} words", page.page_number, words);
            PageTally {
                page_number: page.page_number,
                words,
            }
        })
        .collect();

    WordTally { pages }
}
