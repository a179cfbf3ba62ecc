//! The indirect objects that make up a document, built before any byte of the
//! file is written.
//!
//! Object numbers for every page are reserved up front (see
//! [`ObjectReferences::for_pages`]), so the page tree can list its children
//! and each page can point at its content stream while the objects are
//! filled in strictly in number order. Nothing is patched afterwards.

use crate::content::render_page;
use crate::font::BuiltinFont;
use crate::layout::Layout;
use crate::page::Page;
use crate::refs::{ObjectReferences, Ref, RefType};

/// A numbered object together with everything between its `N 0 obj` and
/// `endobj` keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfObject {
    pub id: Ref,
    pub body: Vec<u8>,
}

/// Every object of a document, in object number order, plus the numbers of
/// the objects the serializer and readers need to find.
#[derive(Debug, Clone)]
pub struct ObjectGraph {
    objects: Vec<PdfObject>,
    catalog: Ref,
    page_tree: Ref,
    font: Ref,
    pages: Vec<Ref>,
}

impl ObjectGraph {
    /// Builds the objects for `pages`, all sharing one `font` declaration.
    pub fn build(pages: &[Page], layout: &Layout, font: &BuiltinFont) -> ObjectGraph {
        let refs = ObjectReferences::for_pages(pages.len());
        let reserved = |ref_type: RefType| {
            refs.get(ref_type)
                .unwrap_or_else(|| unreachable!("{ref_type:?} is reserved up front"))
        };

        let catalog = reserved(RefType::Catalog);
        let page_tree = reserved(RefType::PageTree);
        let font_id = reserved(RefType::Font);
        let page_ids: Vec<Ref> = (0..pages.len())
            .map(|page_index| reserved(RefType::Page(page_index)))
            .collect();

        let mut graph = ObjectGraph {
            objects: Vec::with_capacity(refs.len()),
            catalog,
            page_tree,
            font: font_id,
            pages: page_ids,
        };

        graph.push(
            catalog,
            format!("<< /Type /Catalog /Pages {page_tree} >>").into_bytes(),
        );

        let kids: Vec<String> = graph.pages.iter().map(Ref::to_string).collect();
        graph.push(
            page_tree,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                graph.pages.len()
            )
            .into_bytes(),
        );

        graph.push(font_id, font.dictionary().into_bytes());

        let media_box = layout.page_size.media_box();
        for (page_index, page) in pages.iter().enumerate() {
            let content_id = reserved(RefType::ContentForPage(page_index));
            let content = render_page(page, layout, font);
            log::trace!(
                "page {}: {} lines, {} content bytes",
                page_index + 1,
                page.lines().len(),
                content.len()
            );
            graph.push(content_id, stream_body(&content));

            graph.push(
                reserved(RefType::Page(page_index)),
                format!(
                    "<< /Type /Page /Parent {page_tree} /MediaBox {media_box} \
                     /Resources << /Font << /{} {font_id} >> >> /Contents {content_id} >>",
                    font.resource_name()
                )
                .into_bytes(),
            );
        }

        debug_assert_eq!(graph.objects.len(), refs.len());
        graph
    }

    fn push(&mut self, id: Ref, body: Vec<u8>) {
        debug_assert_eq!(
            id.get() as usize,
            self.objects.len() + 1,
            "objects must be filled in number order"
        );
        self.objects.push(PdfObject { id, body });
    }

    /// All objects, ordered by object number
    pub fn objects(&self) -> &[PdfObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The document catalog, i.e. the trailer's `/Root`
    pub fn catalog(&self) -> Ref {
        self.catalog
    }

    pub fn page_tree(&self) -> Ref {
        self.page_tree
    }

    pub fn font(&self) -> Ref {
        self.font
    }

    /// The page objects, in document order
    pub fn pages(&self) -> &[Ref] {
        &self.pages
    }
}

/// Wraps content in a stream object whose `/Length` is the exact content size.
fn stream_body(content: &[u8]) -> Vec<u8> {
    let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(b"\nendstream");
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::HELVETICA;
    use similar_asserts::assert_eq;

    fn body(graph: &ObjectGraph, id: u32) -> String {
        String::from_utf8(graph.objects()[id as usize - 1].body.clone()).unwrap()
    }

    fn pages(n: usize) -> Vec<Page> {
        (0..n)
            .map(|i| Page::new(vec![format!("page {i}")]))
            .collect()
    }

    #[test]
    fn single_page_layout() {
        let graph = ObjectGraph::build(&pages(1), &Layout::default(), &HELVETICA);
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.catalog().get(), 1);
        assert_eq!(graph.page_tree().get(), 2);
        assert_eq!(graph.font().get(), 3);
        assert_eq!(body(&graph, 1), "<< /Type /Catalog /Pages 2 0 R >>");
        assert_eq!(body(&graph, 2), "<< /Type /Pages /Kids [5 0 R] /Count 1 >>");
        assert_eq!(
            body(&graph, 5),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents 4 0 R >>"
        );
    }

    #[test]
    fn ids_are_contiguous() {
        let graph = ObjectGraph::build(&pages(4), &Layout::default(), &HELVETICA);
        assert_eq!(graph.len(), 3 + 2 * 4);
        for (i, object) in graph.objects().iter().enumerate() {
            assert_eq!(object.id.get() as usize, i + 1);
        }
    }

    #[test]
    fn page_tree_lists_pages_in_order() {
        let graph = ObjectGraph::build(&pages(3), &Layout::default(), &HELVETICA);
        let ids: Vec<u32> = graph.pages().iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![5, 7, 9]);
        assert_eq!(
            body(&graph, 2),
            "<< /Type /Pages /Kids [5 0 R 7 0 R 9 0 R] /Count 3 >>"
        );
        for (i, id) in ids.iter().enumerate() {
            assert!(body(&graph, *id).contains(&format!("/Contents {} 0 R", id - 1)));
            assert!(body(&graph, id - 1).contains(&format!("(page {i}) Tj")));
        }
    }

    #[test]
    fn stream_length_matches_content() {
        let graph = ObjectGraph::build(&pages(2), &Layout::default(), &HELVETICA);
        for id in [4, 6] {
            let body = body(&graph, id);
            let (dict, rest) = body.split_once("\nstream\n").unwrap();
            let declared: usize = dict
                .trim_start_matches("<< /Length ")
                .trim_end_matches(" >>")
                .parse()
                .unwrap();
            let content = rest.strip_suffix("\nendstream").unwrap();
            assert_eq!(declared, content.len());
        }
    }

    #[test]
    fn font_is_declared_once() {
        let graph = ObjectGraph::build(&pages(5), &Layout::default(), &HELVETICA);
        let fonts = graph
            .objects()
            .iter()
            .filter(|object| object.body.starts_with(b"<< /Type /Font"))
            .count();
        assert_eq!(fonts, 1);
    }
}
