use derive_more::Display;
use std::collections::HashMap;

/// The number of an indirect object. Written as `N 0 R` when referenced; the
/// generation is always 0 because objects are never rewritten.
#[derive(Display, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Debug)]
#[display("{_0} 0 R")]
pub struct Ref(u32);

impl Ref {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// The role an object plays in the document
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Font,
    ContentForPage(usize),
    Page(usize),
}

/// Hands out object numbers, contiguously and starting at 1, and remembers
/// which role each one was handed out for.
#[derive(Debug)]
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: u32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// Reserves every object number a document of `page_count` pages needs,
    /// in the order the objects are written: catalog, page tree, font, then a
    /// content stream and page object for each page.
    pub fn for_pages(page_count: usize) -> ObjectReferences {
        let mut refs = ObjectReferences::new();
        refs.gen(RefType::Catalog);
        refs.gen(RefType::PageTree);
        refs.gen(RefType::Font);
        for page_index in 0..page_count {
            refs.gen(RefType::ContentForPage(page_index));
            refs.gen(RefType::Page(page_index));
        }
        debug_assert_eq!(refs.len(), 3 + 2 * page_count);
        refs
    }

    fn new_id(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref(id)
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        debug_assert!(
            !self.refs.contains_key(&ref_type),
            "{ref_type:?} was already allocated"
        );
        let id = self.new_id();
        self.refs.insert(ref_type, id);
        id
    }

    /// How many object numbers have been handed out
    pub fn len(&self) -> usize {
        (self.next_id - 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ObjectReferences {
    fn default() -> Self {
        Self::new()
    }
}
