//! Paginated rendering of edit operations
//!
//! Expands an opcode list into one styled display line per token and packs
//! the lines onto fixed-capacity pages. The cursor state lives in an
//! explicit page-writer accumulator, so concurrent renders never share
//! anything. Downstream artifact generators map the display classes to
//! colors and markers; the `Display` impls here produce the equivalent
//! plain-text form (`word`, `[-word]`, `[+word]`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PageConfig;
use crate::diff::{EditKind, EditOp};
use crate::tokenizers::Token;

/// Header line placed at the top of the first page
///
/// Not counted against the page's line capacity.
pub const PAGE_HEADER: &str = "Differences between documents (word-level):";

/// Display class of a rendered token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    /// Rendered in the default text color
    Unchanged,
    /// Rendered red-toned with a `-` deletion marker
    Deleted,
    /// Rendered green-toned with a `+` insertion marker
    Inserted,
}

/// A token styled for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    /// The token text
    pub text: String,

    /// How to display it
    pub class: DisplayClass,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, class: DisplayClass) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }
}

impl fmt::Display for StyledRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            DisplayClass::Unchanged => write!(f, "{}", self.text),
            DisplayClass::Deleted => write!(f, "[-{}]", self.text),
            DisplayClass::Inserted => write!(f, "[+{}]", self.text),
        }
    }
}

/// A single rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Styled runs on this line, in display order
    pub runs: Vec<StyledRun>,
}

impl Line {
    /// Create a line holding a single run
    pub fn from_run(run: StyledRun) -> Self {
        Self { runs: vec![run] }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// One page of rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Header text, present on the first page only
    pub header: Option<String>,

    /// Rendered lines, at most `lines_per_page` of them
    pub lines: Vec<Line>,
}

impl Page {
    fn new(header: Option<String>) -> Self {
        Self {
            header,
            lines: Vec::new(),
        }
    }

    /// Number of lines on this page (the header is not a line)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Format the page as plain text, one rendered line per text line
    pub fn format(&self) -> String {
        let mut out = String::new();

        if let Some(header) = &self.header {
            out.push_str(header);
            out.push('\n');
        }

        for line in &self.lines {
            out.push_str(&line.to_string());
            out.push('\n');
        }

        out
    }
}

/// Accumulator that packs lines onto pages in order
struct PageWriter {
    pages: Vec<Page>,
    current: Page,
    capacity: usize,
}

impl PageWriter {
    fn new(lines_per_page: usize) -> Self {
        Self {
            pages: Vec::new(),
            current: Page::new(Some(PAGE_HEADER.to_string())),
            // a page always holds at least one line
            capacity: lines_per_page.max(1),
        }
    }

    fn push(&mut self, run: StyledRun) {
        if self.current.lines.len() == self.capacity {
            let full = std::mem::replace(&mut self.current, Page::new(None));
            self.pages.push(full);
        }
        self.current.lines.push(Line::from_run(run));
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Render an opcode list into an ordered sequence of pages
///
/// Each operation expands to one line per token: `Equal` and `Delete` draw
/// from the original range, `Insert` from the modified range, and
/// `Replace` draws all of its deleted lines before all of its inserted
/// lines. Page breaks only ever fall between lines, never inside an
/// operation's internal ordering. With no operations at all the result is
/// a single page carrying just the header.
pub fn render(
    original: &[Token],
    modified: &[Token],
    ops: &[EditOp],
    config: &PageConfig,
) -> Vec<Page> {
    let mut writer = PageWriter::new(config.lines_per_page);

    for op in ops {
        match op.kind {
            EditKind::Equal => {
                for token in &original[op.original.start..op.original.end] {
                    writer.push(StyledRun::new(&token.text, DisplayClass::Unchanged));
                }
            }
            EditKind::Delete => {
                for token in &original[op.original.start..op.original.end] {
                    writer.push(StyledRun::new(&token.text, DisplayClass::Deleted));
                }
            }
            EditKind::Insert => {
                for token in &modified[op.modified.start..op.modified.end] {
                    writer.push(StyledRun::new(&token.text, DisplayClass::Inserted));
                }
            }
            EditKind::Replace => {
                for token in &original[op.original.start..op.original.end] {
                    writer.push(StyledRun::new(&token.text, DisplayClass::Deleted));
                }
                for token in &modified[op.modified.start..op.modified.end] {
                    writer.push(StyledRun::new(&token.text, DisplayClass::Inserted));
                }
            }
        }
    }

    writer.finish()
}
