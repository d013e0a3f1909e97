//! # pdfskim
//!
//! Quick plain-text skim of the first pages of a PDF document.
//!
//! This library opens a PDF, pulls the extractable text from a bounded number
//! of leading pages, filters blank lines, and renders the result with page
//! markers for fast human skimming. PDF decoding itself is delegated to
//! [lopdf](https://crates.io/crates/lopdf); no structural parsing, layout
//! analysis, or OCR happens here.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfskim::skim_file;
//!
//! fn main() -> pdfskim::Result<()> {
//!     // Skim the first 5 pages (the default)
//!     let skim = skim_file("document.pdf")?;
//!     println!("{}", skim.to_text());
//!
//!     Ok(())
//! }
//! ```
//!
//! Console output should additionally pass through
//! [`console::render_for_console`] so a page full of exotic characters never
//! aborts the run on a legacy terminal encoding.

pub mod console;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;

// Re-export commonly used types
pub use console::{console_encoding, render_for_console};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, Skimmer, DEFAULT_MAX_PAGES};
pub use model::{PageText, Skim};

use std::path::Path;

/// Skim a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use pdfskim::skim_file;
///
/// let skim = skim_file("document.pdf").unwrap();
/// println!("Pages: {}", skim.total_pages);
/// ```
pub fn skim_file<P: AsRef<Path>>(path: P) -> Result<Skim> {
    skim_file_with_options(path, &ExtractOptions::default())
}

/// Skim a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfskim::{skim_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_max_pages(2);
/// let skim = skim_file_with_options("document.pdf", &options).unwrap();
/// ```
pub fn skim_file_with_options<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Skim> {
    let skimmer = Skimmer::open(path)?;
    skimmer.skim(options)
}

/// Skim a PDF from bytes with default options.
pub fn skim_bytes(data: &[u8]) -> Result<Skim> {
    skim_bytes_with_options(data, &ExtractOptions::default())
}

/// Skim a PDF from bytes with custom options.
pub fn skim_bytes_with_options(data: &[u8], options: &ExtractOptions) -> Result<Skim> {
    let skimmer = Skimmer::from_bytes(data)?;
    skimmer.skim(options)
}
