//! Rendering of a page's lines into a content stream.

use crate::font::BuiltinFont;
use crate::layout::Layout;
use crate::page::Page;

/// Escapes `text` for use inside a literal `( ... )` string.
///
/// Backslashes are escaped before parentheses; the other order would escape
/// the backslashes that were just added in front of the parentheses.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Renders a page into the operators of its content stream.
///
/// One text object positions the first baseline at the top left corner of the
/// area inside the margins and sets the leading, so each following line is a
/// `T*` away. Blank lines still show an empty string to keep their slot. A
/// page without lines renders an empty `BT`/`ET` pair.
pub fn render_page(page: &Page, layout: &Layout, font: &BuiltinFont) -> Vec<u8> {
    let (x, y) = layout.text_origin();

    let mut operators: Vec<String> = Vec::with_capacity(page.lines().len() * 2 + 5);
    operators.push("BT".to_string());
    operators.push(format!("/{} {} Tf", font.resource_name(), layout.font_size));
    operators.push(format!("{x} {y} Td"));
    operators.push(format!("{} TL", layout.leading));
    for (i, line) in page.lines().iter().enumerate() {
        if i > 0 {
            operators.push("T*".to_string());
        }
        operators.push(format!("({}) Tj", escape_text(line)));
    }
    operators.push("ET".to_string());

    operators.join("\n").into_bytes()
}
