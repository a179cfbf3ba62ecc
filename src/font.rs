/// One of the standard Type 1 fonts every PDF reader ships with. Nothing is
/// embedded; the document only names the font, so text is limited to what the
/// font's standard encoding can show (printable ASCII, in practice).
///
/// Every page refers to the same font object through its resource dictionary
/// under [`BuiltinFont::resource_name`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BuiltinFont {
    base_font: &'static str,
    resource_name: &'static str,
}

/// Helvetica, available to content streams as `/F1`
pub const HELVETICA: BuiltinFont = BuiltinFont {
    base_font: "Helvetica",
    resource_name: "F1",
};

impl BuiltinFont {
    /// The PostScript name of the font
    pub fn base_font(&self) -> &'static str {
        self.base_font
    }

    /// The name content streams use to select this font with `Tf`
    pub fn resource_name(&self) -> &'static str {
        self.resource_name
    }

    /// The font's object dictionary
    pub(crate) fn dictionary(&self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Name /{} >>",
            self.base_font, self.resource_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_dictionary() {
        assert_eq!(
            HELVETICA.dictionary(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Name /F1 >>"
        );
    }
}
