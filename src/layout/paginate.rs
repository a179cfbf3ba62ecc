use crate::page::Page;

/// Splits the physical lines of a whole document into pages of at most
/// `lines_per_page` lines each, keeping their order.
///
/// No lines at all still makes one (blank) page.
///
/// # Panics
///
/// Panics if `lines_per_page` is zero.
pub fn paginate(lines: Vec<String>, lines_per_page: usize) -> Vec<Page> {
    assert!(lines_per_page > 0, "pages must hold at least one line");
    if lines.is_empty() {
        return vec![Page::default()];
    }

    let mut pages = Vec::with_capacity(lines.len().div_ceil(lines_per_page));
    let mut lines = lines.into_iter().peekable();
    while lines.peek().is_some() {
        pages.push(Page::new(lines.by_ref().take(lines_per_page).collect()));
    }
    pages
}
