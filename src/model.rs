//! Result types for a skim pass.

/// Text recovered from a single page, reduced to its surviving lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Trimmed, non-empty content lines in page order
    pub lines: Vec<String>,
}

impl PageText {
    /// Create a page block from raw extracted text.
    ///
    /// Each line is trimmed of surrounding whitespace; lines that become
    /// empty are discarded. A page with no extractable text yields an empty
    /// block, which still gets its marker when rendered.
    pub fn from_raw(number: u32, raw: &str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { number, lines }
    }

    /// Check if the page yielded no content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The ordered result of skimming the first pages of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skim {
    /// Total page count of the source document
    pub total_pages: u32,

    /// Processed page blocks, in increasing page order
    pub pages: Vec<PageText>,
}

impl Skim {
    /// Number of pages that were actually processed.
    pub fn processed_pages(&self) -> usize {
        self.pages.len()
    }

    /// Render the skim as a display blob.
    ///
    /// Each page block is preceded by a blank line and a marker of the form
    /// `--- Page n / total ---`, followed by its content lines. All emitted
    /// lines are joined with single newlines.
    pub fn to_text(&self) -> String {
        let mut out_lines: Vec<String> = Vec::new();
        for page in &self.pages {
            out_lines.push(String::new());
            out_lines.push(format!(
                "--- Page {} / {} ---",
                page.number, self.total_pages
            ));
            out_lines.extend(page.lines.iter().cloned());
        }
        out_lines.join("\n")
    }
}
