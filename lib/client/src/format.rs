use crate::QueryExecutionError;
use graphjson_projection::{Graph, ResourceId, Triple, Value};
use oxrdf::{BlankNode, Literal, NamedNode, Subject, Term};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};
use std::io;

/// Determines the RDF format of a response from its `Content-Type` header.
///
/// Endpoints that do not declare a content type are assumed to answer in Turtle.
pub fn format_from_content_type(
    content_type: Option<&str>,
) -> Result<RdfFormat, QueryExecutionError> {
    let Some(content_type) = content_type else {
        return Ok(RdfFormat::Turtle);
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim();
    RdfFormat::from_media_type(media_type)
        .ok_or_else(|| QueryExecutionError::UnsupportedContentType(content_type.to_owned()))
}

/// Parses an RDF document into a [`Graph`].
///
/// Triples of named graphs are merged into the result, as a `DESCRIBE` answer has no use for
/// graph names.
pub fn parse_graph(data: &[u8], format: RdfFormat) -> Result<Graph, QueryExecutionError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format).for_reader(data) {
        graph.insert_rdf(oxrdf::Triple::from(quad?))?;
    }
    Ok(graph)
}

/// Serializes a [`Graph`], e.g., to log the raw answer of the endpoint.
pub fn serialize_graph(graph: &Graph, format: RdfFormat) -> io::Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(format).for_writer(Vec::new());
    for triple in graph {
        serializer.serialize_triple(to_rdf_triple(triple).as_ref())?;
    }
    serializer.finish()
}

fn to_rdf_triple(triple: &Triple) -> oxrdf::Triple {
    let subject: Subject = match &triple.subject {
        ResourceId::Iri(iri) => NamedNode::new_unchecked(iri).into(),
        ResourceId::BlankNode(label) => BlankNode::new_unchecked(label).into(),
    };
    let object: Term = match &triple.object {
        Value::Resource(ResourceId::Iri(iri)) => NamedNode::new_unchecked(iri).into(),
        Value::Resource(ResourceId::BlankNode(label)) => BlankNode::new_unchecked(label).into(),
        Value::Literal(value) => Literal::new_simple_literal(value).into(),
    };
    oxrdf::Triple::new(subject, NamedNode::new_unchecked(&triple.predicate), object)
}
