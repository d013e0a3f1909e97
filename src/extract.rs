//! Document skimming over the lopdf decoding backend.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{PageText, Skim};

/// Default number of pages pulled when no limit is given.
pub const DEFAULT_MAX_PAGES: usize = 5;

/// Options for a skim pass.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum number of pages to extract (must be at least 1)
    pub max_pages: usize,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of pages to extract.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// A skimmer over a single opened document.
///
/// The document handle is owned exclusively by this value and is released
/// when it is dropped. The decoding library is consumed through two
/// capabilities only: the ordered page listing and per-page text extraction.
pub struct Skimmer {
    doc: LopdfDocument,
}

impl Skimmer {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify the header before handing the file to the decoder
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc)
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;

        Self::from_document(doc)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Total page count of the opened document.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract the first pages of the document into a [`Skim`].
    ///
    /// Processes `min(options.max_pages, total page count)` pages in
    /// increasing page order. A page whose text cannot be extracted
    /// contributes an empty block rather than failing the pass.
    pub fn skim(&self, options: &ExtractOptions) -> Result<Skim> {
        if options.max_pages == 0 {
            return Err(Error::InvalidPageLimit);
        }

        // get_pages keys are 1-based page numbers
        let mut page_numbers: Vec<u32> = self.doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        let total_pages = page_numbers.len() as u32;
        let take = options.max_pages.min(page_numbers.len());
        log::debug!("skimming {} of {} pages", take, total_pages);

        let pages = page_numbers[..take]
            .iter()
            .map(|&number| {
                let raw = match self.doc.extract_text(&[number]) {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("Failed to extract text from page {}: {}", number, e);
                        String::new()
                    }
                };
                PageText::from_raw(number, &raw)
            })
            .collect();

        Ok(Skim { total_pages, pages })
    }
}
