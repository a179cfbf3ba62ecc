/// A page of laid out text: an ordered list of physical lines, each already
/// sanitized and wrapped. A page without lines is valid and renders blank.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    pub fn new(lines: Vec<String>) -> Page {
        Page { lines }
    }

    /// The physical lines on this page, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}
