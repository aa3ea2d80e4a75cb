//! Page break planning for document export.
//!
//! Positions are in points measured from the bottom of the page, the way a
//! PDF canvas addresses them. The exporter only has to draw each placed
//! line at its `y`.

use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_height: f64,
    /// Baseline of the first line on the first page.
    pub first_line_y: f64,
    /// Baseline of the first line on every following page.
    pub continuation_y: f64,
    pub line_height: f64,
    /// A new page starts once the cursor drops below this.
    pub bottom_margin: f64,
}

impl PageLayout {
    /// US Letter portrait, 12 pt body text on 20 pt lines.
    pub const fn letter() -> Self {
        let page_height = 792.0;
        Self {
            page_height,
            first_line_y: page_height - 100.0,
            continuation_y: page_height - 50.0,
            line_height: 20.0,
            bottom_margin: 50.0,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLine<'a> {
    pub y: f64,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<PlacedLine<'a>>,
}

/// Assign every non-blank report line to a page and a baseline.
///
/// Blank lines are skipped entirely. No empty trailing page is produced.
pub fn paginate<'a>(report: &'a Report, layout: &PageLayout) -> Vec<Page<'a>> {
    let mut pages: Vec<Page<'a>> = Vec::new();
    let mut y = layout.first_line_y;
    let mut needs_new_page = true;

    for text in report.lines().iter().filter(|l| !l.trim().is_empty()) {
        if needs_new_page {
            pages.push(Page {
                number: pages.len() + 1,
                lines: Vec::new(),
            });
            needs_new_page = false;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { y, text });
        }
        y -= layout.line_height;
        if y < layout.bottom_margin {
            needs_new_page = true;
            y = layout.continuation_y;
        }
    }

    pages
}
