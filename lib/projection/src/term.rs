use crate::UnsupportedTermError;
use std::fmt::{Display, Formatter};

/// Identifies a resource, i.e. a node that can be the subject of triples.
///
/// Two identifiers are equal iff their IRIs (or blank node labels) are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceId {
    Iri(String),
    BlankNode(String),
}

impl ResourceId {
    /// Creates a resource identified by an IRI.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Creates a resource identified by a blank node label.
    pub fn blank_node(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    /// Returns the IRI of this resource. Blank nodes have none.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            ResourceId::Iri(iri) => Some(iri.as_str()),
            ResourceId::BlankNode(_) => None,
        }
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::Iri(iri) => write!(f, "<{iri}>"),
            ResourceId::BlankNode(label) => write!(f, "_:{label}"),
        }
    }
}

impl TryFrom<oxrdf::Subject> for ResourceId {
    type Error = UnsupportedTermError;

    fn try_from(value: oxrdf::Subject) -> Result<Self, Self::Error> {
        match value {
            oxrdf::Subject::NamedNode(node) => Ok(Self::Iri(node.into_string())),
            oxrdf::Subject::BlankNode(node) => Ok(Self::BlankNode(node.as_str().to_owned())),
            #[allow(unreachable_patterns, reason = "Only reachable with the rdf-star feature")]
            other => Err(UnsupportedTermError(other.to_string())),
        }
    }
}

/// The object of a triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A link to another resource.
    Resource(ResourceId),
    /// The lexical form of a literal. Datatypes and language tags are dropped.
    Literal(String),
}

impl Value {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn as_resource(&self) -> Option<&ResourceId> {
        match self {
            Value::Resource(resource) => Some(resource),
            Value::Literal(_) => None,
        }
    }
}

impl From<ResourceId> for Value {
    fn from(value: ResourceId) -> Self {
        Self::Resource(value)
    }
}

impl TryFrom<oxrdf::Term> for Value {
    type Error = UnsupportedTermError;

    fn try_from(value: oxrdf::Term) -> Result<Self, Self::Error> {
        match value {
            oxrdf::Term::NamedNode(node) => Ok(Self::Resource(ResourceId::Iri(node.into_string()))),
            oxrdf::Term::BlankNode(node) => {
                Ok(Self::Resource(ResourceId::BlankNode(node.as_str().to_owned())))
            }
            oxrdf::Term::Literal(literal) => Ok(Self::Literal(literal.value().to_owned())),
            #[allow(unreachable_patterns, reason = "Only reachable with the rdf-star feature")]
            other => Err(UnsupportedTermError(other.to_string())),
        }
    }
}

/// A single statement of a [`Graph`](crate::Graph).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: ResourceId,
    /// The full IRI of the predicate.
    pub predicate: String,
    pub object: Value,
}

impl Triple {
    pub fn new(subject: ResourceId, predicate: impl Into<String>, object: impl Into<Value>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl TryFrom<oxrdf::Triple> for Triple {
    type Error = UnsupportedTermError;

    fn try_from(value: oxrdf::Triple) -> Result<Self, Self::Error> {
        Ok(Self {
            subject: value.subject.try_into()?,
            predicate: value.predicate.into_string(),
            object: value.object.try_into()?,
        })
    }
}
