use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub offset: f64,
}

/// Section id -> scroll offset, iterated in document order.
///
/// Offsets live in a small ordered vector; the hash index only serves
/// lookups by id. A page rarely has more than a handful of sections.
#[derive(Clone, Debug, Default)]
pub struct SectionOffsets {
    entries: SmallVec<[SectionOffset; 8]>,
    index: FnvHashMap<String, usize>,
}

impl SectionOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every offset from `(id, element_top)` pairs given in document
    /// order. Empty ids are ignored. A repeated id keeps its first position
    /// and takes the latest offset.
    pub fn precompute<'a, I>(&mut self, sections: I, header_offset: f64)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        self.entries.clear();
        self.index.clear();
        for (id, top) in sections {
            if id.is_empty() {
                continue;
            }
            let offset = top - header_offset;
            match self.index.get(id) {
                Some(&i) => self.entries[i].offset = offset,
                None => {
                    self.index.insert(id.to_string(), self.entries.len());
                    self.entries.push(SectionOffset {
                        id: id.to_string(),
                        offset,
                    });
                }
            }
        }
    }

    pub fn offset_of(&self, id: &str) -> Option<f64> {
        self.index.get(id).map(|&i| self.entries[i].offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionOffset> {
        self.entries.iter()
    }

    /// Last section (document order) whose offset does not exceed
    /// `scroll_position`, or `default` when none qualifies.
    pub fn active_at<'a>(&'a self, scroll_position: f64, default: &'a str) -> &'a str {
        let mut current = default;
        for s in &self.entries {
            if scroll_position >= s.offset {
                current = s.id.as_str();
            }
        }
        current
    }
}
