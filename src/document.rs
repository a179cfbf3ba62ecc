use crate::{
    error::PDFError,
    font::{BuiltinFont, HELVETICA},
    layout::{paginate, wrap_line, Layout},
    markup::{logical_lines, strip_markup},
    object::ObjectGraph,
    page::Page,
    sanitize::sanitize,
    writer::serialize,
};
use std::io::Write;

/// A document is text that has been cleaned up, wrapped and split into pages
/// for a given [Layout]. It is built once from its input and then rendered out
/// with [Document::write] or [Document::to_bytes]; it is never edited.
#[derive(Debug, Clone)]
pub struct Document {
    layout: Layout,
    font: BuiltinFont,
    pages: Vec<Page>,
}

impl Document {
    /// Lays out `text` on US Letter pages with the default [Layout].
    pub fn from_text(text: &str) -> Document {
        Document::layout_text(text, Layout::default())
    }

    /// Lays out `text` with a custom page geometry. Fails only if the layout
    /// itself is unusable; any text is accepted.
    pub fn from_text_with_layout(text: &str, layout: &Layout) -> Result<Document, PDFError> {
        layout.validate()?;
        Ok(Document::layout_text(text, layout.clone()))
    }

    fn layout_text(text: &str, layout: Layout) -> Document {
        let mut lines: Vec<String> = Vec::new();
        for line in logical_lines(text) {
            let line = sanitize(&strip_markup(line));
            lines.extend(wrap_line(&line, layout.max_chars));
        }

        let line_count = lines.len();
        let pages = paginate(lines, layout.lines_per_page());
        log::debug!(
            "laid out {} input bytes as {} lines on {} pages",
            text.len(),
            line_count,
            pages.len()
        );

        Document {
            layout,
            font: HELVETICA,
            pages,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The pages of the document, in order. There is always at least one.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Builds the numbered objects that make up this document.
    pub fn object_graph(&self) -> ObjectGraph {
        ObjectGraph::build(&self.pages, &self.layout, &self.font)
    }

    /// Renders the complete PDF file into memory. The same document always
    /// renders to the same bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let graph = self.object_graph();
        let bytes = serialize(&graph);
        log::debug!(
            "serialized {} objects for {} pages into {} bytes",
            graph.len(),
            self.pages.len(),
            bytes.len()
        );
        bytes
    }

    /// Write the entire document to the writer. The document is rendered in
    /// memory first, then written out in one go.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), PDFError> {
        w.write_all(&self.to_bytes()).map_err(Into::into)
    }
}
