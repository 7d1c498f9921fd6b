//! Lemma index: normalized word -> synsets containing it.

use ahash::AHashMap;

use crate::graph::{Graph, SynsetId};

/// Canonical form used for both indexing and lookup: lower-cased, with runs
/// of whitespace collapsed to one space and the ends trimmed.
///
/// ```
/// use wnram::index::normalize;
///
/// assert_eq!(normalize("  Ice   Cream "), "ice cream");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-owning map from normalized words to synset ids.
#[derive(Debug, Clone, Default)]
pub struct LemmaIndex {
    buckets: AHashMap<String, Vec<SynsetId>>,
}

impl LemmaIndex {
    /// Index every member word of every synset in `graph`.
    pub fn build(graph: &Graph) -> Self {
        let mut buckets: AHashMap<String, Vec<SynsetId>> = AHashMap::new();
        for (id, synset) in graph.iter() {
            for word in synset.words() {
                let bucket = buckets.entry(normalize(word.text())).or_default();
                // words of one synset arrive together
                if bucket.last() != Some(&id) {
                    bucket.push(id);
                }
            }
        }
        LemmaIndex { buckets }
    }

    /// Synsets for an already-normalized key.
    pub fn get(&self, key: &str) -> &[SynsetId] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct normalized words.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::parser::parse_line;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("good"), "good");
        assert_eq!(normalize(" Good "), "good");
        assert_eq!(normalize("Alimentary \t Paste"), "alimentary paste");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(&normalize(" A  B ")), normalize(" A  B "));
    }

    #[test]
    fn test_build_index() {
        let mut builder = GraphBuilder::default();
        for (i, line) in [
            "00000001 00 n 02 Cheese 0 cheese 1 000 | curd",
            "00000002 00 n 01 cheese 0 000 | a photo pose",
            "00000003 00 n 01 ice_cream 0 000 | frozen dessert",
        ]
        .iter()
        .enumerate()
        {
            let entry = parse_line(line.as_bytes(), i as u64 + 1).unwrap().unwrap();
            builder.add_entry(entry).unwrap();
        }
        let graph = builder.build().unwrap();
        let index = LemmaIndex::build(&graph);

        assert_eq!(index.get("cheese"), &[SynsetId(0), SynsetId(1)]);
        assert_eq!(index.get("ice cream"), &[SynsetId(2)]);
        assert!(index.get("milk").is_empty());
        assert_eq!(index.len(), 2);
    }
}
