//! Serialization of an [`ObjectGraph`] into the bytes of a PDF file.
//!
//! Output is append only: each object's offset is taken from the length of
//! the buffer right before its header is written, and no byte is touched
//! again afterwards. The cross-reference table therefore always matches the
//! file it is written into.

use crate::object::ObjectGraph;

/// Version comment followed by a comment of four bytes above 127, marking
/// the file as binary for tools that sniff the first lines.
pub const HEADER: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n";

/// The cross-reference entry for object 0, the head of the free list
const FREE_ENTRY: &[u8; 20] = b"0000000000 65535 f \n";

/// Byte offsets of every object's `N 0 obj` header, by object number.
/// Object 0 is implicit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct XrefTable {
    offsets: Vec<usize>,
}

impl XrefTable {
    fn record(&mut self, offset: usize) {
        debug_assert!(
            self.offsets.last().map_or(true, |&last| last < offset),
            "object offsets must grow"
        );
        self.offsets.push(offset);
    }

    /// The offset of object `id`, if it was written
    pub fn offset(&self, id: u32) -> Option<usize> {
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.offsets.get(index))
            .copied()
    }

    /// The number of entries in the table, the free entry included
    pub fn size(&self) -> usize {
        self.offsets.len() + 1
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format!("xref\n0 {}\n", self.size()).as_bytes());
        out.extend_from_slice(FREE_ENTRY);
        for offset in self.offsets.iter() {
            let entry = format!("{offset:010} 00000 n \n");
            debug_assert_eq!(entry.len(), 20);
            out.extend_from_slice(entry.as_bytes());
        }
    }
}

/// Writes the complete file for `graph`: header, objects in number order,
/// cross-reference table and trailer.
pub fn serialize(graph: &ObjectGraph) -> Vec<u8> {
    serialize_with_xref(graph).0
}

/// Like [`serialize`], but also hands back the cross-reference table that was
/// written into the file.
pub fn serialize_with_xref(graph: &ObjectGraph) -> (Vec<u8>, XrefTable) {
    let body_size: usize = graph.objects().iter().map(|o| o.body.len() + 32).sum();
    let mut out: Vec<u8> = Vec::with_capacity(HEADER.len() + body_size + 20 * graph.len() + 128);
    out.extend_from_slice(HEADER);

    let mut xref = XrefTable::default();
    for object in graph.objects() {
        xref.record(out.len());
        out.extend_from_slice(format!("{} 0 obj\n", object.id.get()).as_bytes());
        out.extend_from_slice(&object.body);
        out.extend_from_slice(b"\nendobj\n");
    }
    debug_assert_eq!(xref.size(), graph.len() + 1);

    let startxref = out.len();
    xref.write_to(&mut out);
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root {} >>\nstartxref\n{startxref}\n%%EOF",
            xref.size(),
            graph.catalog()
        )
        .as_bytes(),
    );

    (out, xref)
}
