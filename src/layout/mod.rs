//! Page geometry and the text layout stages that run before anything is
//! rendered: greedy word wrapping and pagination.
//!
//! Layout here is character based. The built-in font is never measured; a
//! [`Layout`] caps each physical line at [`Layout::max_chars`] characters and
//! derives how many lines fit on a page from the page height, margin and
//! leading.
//!
//! # Example
//!
//! ```
//! use textpdf::layout::{paginate, wrap_line, Layout};
//!
//! let layout = Layout::default();
//! let lines = wrap_line("Hello, world!", layout.max_chars);
//! let pages = paginate(lines, layout.lines_per_page());
//! assert_eq!(pages.len(), 1);
//! ```

mod paginate;
mod wrap;

pub use paginate::*;
pub use wrap::*;

use crate::error::PDFError;
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pages never hold fewer lines than this, however cramped the geometry.
pub const MIN_LINES_PER_PAGE: usize = 10;

/// Fixed page geometry for a document. Every page in a document shares it.
///
/// The default is a US Letter page with 54pt margins, 12pt text on a 16pt
/// leading and lines wrapped at 90 characters. A layout can be loaded from
/// JSON with camelCase keys; missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    /// The size of every page
    pub page_size: PageSize,
    /// The margin applied to all four sides of the page
    pub margin: Pt,
    /// The size of the built-in font
    pub font_size: Pt,
    /// The vertical distance between consecutive baselines
    pub leading: Pt,
    /// The maximum number of characters on a physical line
    pub max_chars: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            page_size: pagesize::LETTER,
            margin: In(0.75).into(),
            font_size: Pt(12.0),
            leading: Pt(16.0),
            max_chars: 90,
        }
    }
}

impl Layout {
    /// Parses a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Layout, PDFError> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads and parses a layout from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Layout, PDFError> {
        let json = std::fs::read_to_string(path)?;
        Layout::from_json(&json)
    }

    /// Checks that the geometry leaves room for text.
    pub fn validate(&self) -> Result<(), PDFError> {
        let positive = [
            ("page width", self.page_size.width),
            ("page height", self.page_size.height),
            ("font size", self.font_size),
            ("leading", self.leading),
        ];
        for (name, value) in positive {
            if !value.is_finite() || *value <= 0.0 {
                return Err(PDFError::InvalidLayout(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.margin.is_finite() || *self.margin < 0.0 {
            return Err(PDFError::InvalidLayout(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.margin * 2.0 >= self.page_size.width || self.margin * 2.0 >= self.page_size.height
        {
            return Err(PDFError::InvalidLayout(format!(
                "margin {} leaves no room on a {}x{} page",
                self.margin, self.page_size.width, self.page_size.height
            )));
        }
        if self.max_chars == 0 {
            return Err(PDFError::InvalidLayout(
                "maximum line width must be at least one character".to_string(),
            ));
        }
        Ok(())
    }

    /// How many physical lines fit on one page: one less than the number of
    /// leadings that fit between the top and bottom margins, but never fewer
    /// than [`MIN_LINES_PER_PAGE`].
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_size.height - self.margin * 2.0;
        let fitting = (usable / self.leading).floor() as i64 - 1;
        fitting.max(MIN_LINES_PER_PAGE as i64) as usize
    }

    /// Where the baseline of the first line on a page starts: the top left
    /// corner of the area inside the margins.
    pub fn text_origin(&self) -> (Pt, Pt) {
        (self.margin, self.page_size.height - self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_geometry() {
        let layout = Layout::default();
        assert_eq!(layout.margin, Pt(54.0));
        assert_eq!(layout.lines_per_page(), 41);
        assert_eq!(layout.text_origin(), (Pt(54.0), Pt(738.0)));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn lines_per_page_has_a_floor() {
        let layout = Layout {
            leading: Pt(100.0),
            ..Layout::default()
        };
        assert_eq!(layout.lines_per_page(), MIN_LINES_PER_PAGE);
    }

    #[test]
    fn partial_json_takes_defaults() {
        let layout = Layout::from_json(r#"{ "maxChars": 60, "leading": 14 }"#).unwrap();
        assert_eq!(layout.max_chars, 60);
        assert_eq!(layout.leading, Pt(14.0));
        assert_eq!(layout.margin, Pt(54.0));
        assert_eq!(layout.page_size, pagesize::LETTER);
    }

    #[test]
    fn page_size_from_json() {
        let layout =
            Layout::from_json(r#"{ "pageSize": { "width": 300, "height": 400 } }"#).unwrap();
        assert_eq!(layout.page_size, PageSize::new(Pt(300.0), Pt(400.0)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            Layout::from_json("{ not json"),
            Err(PDFError::Config(_))
        ));
    }

    #[test]
    fn rejects_unusable_geometry() {
        let cases = [
            Layout {
                leading: Pt(0.0),
                ..Layout::default()
            },
            Layout {
                font_size: Pt(f32::NAN),
                ..Layout::default()
            },
            Layout {
                margin: Pt(-1.0),
                ..Layout::default()
            },
            Layout {
                margin: Pt(400.0),
                ..Layout::default()
            },
            Layout {
                max_chars: 0,
                ..Layout::default()
            },
        ];
        for layout in cases {
            assert!(
                matches!(layout.validate(), Err(PDFError::InvalidLayout(_))),
                "{layout:?}"
            );
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Layout::from_path("/definitely/not/here.json"),
            Err(PDFError::Io(_))
        ));
    }
}
