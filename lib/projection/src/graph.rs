use crate::{ResourceId, Triple, UnsupportedTermError, Value};
use oxrdf::vocab::rdf;
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable-after-construction set of triples, e.g., the answer to a `DESCRIBE` query.
///
/// Triples are kept in insertion order and duplicates are dropped. As a result, every traversal
/// of a graph built from the same input yields the same order, which in turn makes the projected
/// JSON deterministic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: FxHashSet<Triple>,
    /// Positions in `triples`, grouped by subject.
    by_subject: FxHashMap<ResourceId, Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a triple. Returns `false` if the graph already contained it.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if !self.seen.insert(triple.clone()) {
            return false;
        }

        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(self.triples.len());
        self.triples.push(triple);
        true
    }

    /// Inserts a triple produced by an RDF parser.
    pub fn insert_rdf(&mut self, triple: oxrdf::Triple) -> Result<bool, UnsupportedTermError> {
        Ok(self.insert(triple.try_into()?))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    /// Returns the outgoing triples of `subject` in insertion order.
    pub fn triples_for_subject<'graph>(
        &'graph self,
        subject: &ResourceId,
    ) -> impl Iterator<Item = &'graph Triple> + 'graph {
        self.by_subject
            .get(subject)
            .into_iter()
            .flatten()
            .map(|&idx| &self.triples[idx])
    }

    /// Returns the graph's own handle of `resource` if it has at least one outgoing triple.
    pub fn subject(&self, resource: &ResourceId) -> Option<&ResourceId> {
        self.by_subject
            .get_key_value(resource)
            .map(|(subject, _)| subject)
    }

    pub fn has_outgoing(&self, resource: &ResourceId) -> bool {
        self.subject(resource).is_some()
    }

    /// Returns the distinct subjects with an `rdf:type` triple pointing to `type_iri`, in the
    /// order in which they were first asserted.
    pub fn subjects_of_type(&self, type_iri: &str) -> Vec<&ResourceId> {
        let mut subjects: Vec<&ResourceId> = Vec::new();
        for triple in &self.triples {
            let is_match = triple.predicate == rdf::TYPE.as_str()
                && matches!(&triple.object, Value::Resource(ResourceId::Iri(iri)) if iri == type_iri);
            if is_match && !subjects.contains(&&triple.subject) {
                subjects.push(&triple.subject);
            }
        }
        subjects
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl<'graph> IntoIterator for &'graph Graph {
    type Item = &'graph Triple;
    type IntoIter = std::slice::Iter<'graph, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
