//! Page documents
//!
//! A document is a title and a body. The title names the file the body is
//! stored in (`{title}.txt`); it is never written into the file itself.

use std::borrow::Cow;

/// Extension appended to a title to form its file name
pub const PAGE_EXTENSION: &str = "txt";

/// Derives the file name for a title: `{title}.txt`
///
/// The title is used verbatim. Separators and reserved names are not
/// escaped, so a title like `a/b` resolves to a nested path.
pub fn filename(title: &str) -> String {
    format!("{}.{}", title, PAGE_EXTENSION)
}

/// A titled page held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Page title, also the file stem
    pub title: String,

    /// Raw page content
    pub body: Vec<u8>,
}

impl Document {
    /// Creates a document from a title and body
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the file name this document is stored under
    pub fn filename(&self) -> String {
        filename(&self.title)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns true if the body holds no bytes
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
