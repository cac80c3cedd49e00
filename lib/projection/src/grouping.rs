use crate::{Graph, ResourceId, Value};
use rustc_hash::FxHashMap;

/// Properties with this local name are never projected, whatever their namespace.
pub const TYPE_PROPERTY: &str = "type";

/// Returns the local name of a predicate IRI, i.e. the text after the last `#` or `/`.
///
/// An IRI ending with a separator has no local name and is used as is.
pub fn local_name(predicate: &str) -> &str {
    match predicate.rfind(|c: char| c == '#' || c == '/') {
        Some(idx) if idx + 1 < predicate.len() => &predicate[idx + 1..],
        _ => predicate,
    }
}

/// The outgoing properties of a single resource, keyed by local property name.
///
/// This is an insertion-ordered multimap: names appear in the order of their first triple and
/// the values of each name appear in the order of their triples.
#[derive(Clone, Debug, Default)]
pub struct PropertyGroup<'graph> {
    entries: Vec<(&'graph str, Vec<&'graph Value>)>,
    index: FxHashMap<&'graph str, usize>,
}

impl<'graph> PropertyGroup<'graph> {
    fn push(&mut self, name: &'graph str, value: &'graph Value) {
        match self.index.get(name).copied() {
            Some(idx) => self.entries[idx].1.push(value),
            None => {
                self.index.insert(name, self.entries.len());
                self.entries.push((name, vec![value]));
            }
        }
    }

    /// Returns the values of the property `name`.
    pub fn get(&self, name: &str) -> Option<&[&'graph Value]> {
        self.index
            .get(name)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'graph str, &[&'graph Value])> + '_ {
        self.entries
            .iter()
            .map(|(name, values)| (*name, values.as_slice()))
    }

    /// Number of distinct property names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups the outgoing properties of `resource` by their local name.
///
/// The reserved [`TYPE_PROPERTY`] is skipped. A resource without outgoing triples yields an empty
/// group.
pub fn group_properties<'graph>(graph: &'graph Graph, resource: &ResourceId) -> PropertyGroup<'graph> {
    let mut group = PropertyGroup::default();
    for triple in graph.triples_for_subject(resource) {
        let name = local_name(&triple.predicate);
        if name == TYPE_PROPERTY {
            continue;
        }
        group.push(name, &triple.object);
    }
    group
}
