use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use graphjson_projection::{project_document, Graph, ProjectionConfig, ResourceId, Triple, Value};
use oxrdf::vocab::rdf;

const EX: &str = "http://example.org/ontology#";

fn project_large_response(criterion: &mut Criterion) {
    let graph = generate_response(2048);
    let config = ProjectionConfig::default();

    criterion.bench_function("Projection: 2048 results", |b| {
        b.iter(|| {
            let document = project_document(&graph, &config);
            assert_eq!(document.len(), 1);
        })
    });
}

fn generate_response(count: usize) -> Graph {
    let root = ResourceId::iri(format!("{EX}getGraphOutput_Instance"));
    let mut graph = Graph::new();
    graph.insert(Triple::new(
        root.clone(),
        rdf::TYPE.as_str(),
        ResourceId::iri(format!("{EX}getGraphOutput")),
    ));
    for i in 0..count {
        let placeholder = ResourceId::iri(format!("{EX}results_Api{i}"));
        let detailed = ResourceId::iri(format!("{EX}Api{i}"));
        let version = ResourceId::iri(format!("{EX}Api{i}_v1"));
        graph.insert(Triple::new(root.clone(), format!("{EX}results"), placeholder));
        graph.insert(Triple::new(detailed.clone(), format!("{EX}name"), Value::literal(format!("Api {i}"))));
        graph.insert(Triple::new(detailed, format!("{EX}versions"), version.clone()));
        graph.insert(Triple::new(version, format!("{EX}number"), Value::literal("1.0.0")));
    }
    graph
}

criterion_group!(projection, project_large_response);
criterion_main!(projection);
