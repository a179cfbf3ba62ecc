//! Page dimensions for common paper formats.
//!
//! All sizes are provided in portrait orientation where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to
//! convert between portrait and landscape.
//!
//! ```
//! use textpdf::pagesize::{PageOrientation, LETTER, A4};
//!
//! assert_eq!(LETTER.width.0, 612.0);
//! let landscape = A4.landscape();
//! assert!(landscape.width > landscape.height);
//! ```

use crate::rect::Rect;
use crate::units::*;
use serde::{Deserialize, Serialize};

/// The width and height of a page, in points.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: Pt,
    pub height: Pt,
}

impl PageSize {
    pub const fn new(width: Pt, height: Pt) -> PageSize {
        PageSize { width, height }
    }

    /// The `MediaBox` of a page of this size, anchored at the origin.
    pub fn media_box(&self) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: self.width,
            y2: self.height,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        LETTER
    }
}

// north american sizes
pub const LETTER: PageSize = PageSize::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = PageSize::new(Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = PageSize::new(Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = PageSize::new(Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = PageSize::new(Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = PageSize::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = PageSize::new(Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.width <= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }

    fn landscape(self) -> PageSize {
        if self.width >= self.height {
            self
        } else {
            PageSize::new(self.height, self.width)
        }
    }
}
