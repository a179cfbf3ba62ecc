//! Turns plain or lightly-marked-up text into a PDF file, written from scratch.
//!
//! Text goes through a fixed pipeline: markup markers are stripped, the
//! result is reduced to printable ASCII, lines are wrapped and split into
//! pages, each page becomes a content stream, and the numbered objects are
//! serialized together with a cross-reference table whose offsets match the
//! file byte for byte.
//!
//! ```
//! let bytes = textpdf::text_to_pdf_bytes("# Notes\nSome *plain* text.");
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! assert!(bytes.ends_with(b"%%EOF"));
//! ```

/// Content stream rendering and string escaping
pub mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Page geometry, word wrapping and pagination
pub mod layout;

/// Removal of lightweight markup markers
pub mod markup;

/// Numbered objects and their references
pub mod object;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub mod refs;

/// Reduction of text to printable ASCII
pub mod sanitize;

mod units;
pub use units::*;

/// Byte-level serialization of documents
pub mod writer;

/// Converts `text` into the bytes of a PDF file laid out with the default
/// [layout::Layout]. This never fails: any text produces a valid document.
pub fn text_to_pdf_bytes(text: &str) -> Vec<u8> {
    Document::from_text(text).to_bytes()
}
