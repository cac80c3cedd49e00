use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use graphjson_client::{DescribeClient, HttpDescribeClient, QueryExecutionError, DEFAULT_TIMEOUT};
use graphjson_projection::{ResourceId, Value};
use std::collections::HashMap;

const DESCRIBE: &str = "PREFIX : <http://example.org/ontology#> DESCRIBE ?s WHERE { ?s a :getGraphOutput . }";

async fn query(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("query").map(String::as_str) != Some(DESCRIBE) {
        return (StatusCode::BAD_REQUEST, [(header::CONTENT_TYPE, "text/plain")], "unexpected query".to_owned());
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/turtle; charset=utf-8")],
        "@prefix : <http://example.org/ontology#> .\n:a :name \"A\" .\n".to_owned(),
    )
}

async fn broken() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/n-triples")],
        "<http://example.org/a> <http://example.org/p> .",
    )
}

async fn failing() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "dataset unavailable")
}

/// Starts a fake SPARQL endpoint and returns its base URL.
async fn start_endpoint() -> String {
    let app = Router::new()
        .route("/query", get(query))
        .route("/broken", get(broken))
        .route("/failing", get(failing));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_parses_graph() {
    let base = start_endpoint().await;
    let client = HttpDescribeClient::new(&format!("{base}/query"), DEFAULT_TIMEOUT).unwrap();

    let graph = client.execute_describe(DESCRIBE).await.unwrap();

    assert_eq!(graph.len(), 1);
    let triple = graph.iter().next().unwrap();
    assert_eq!(triple.subject, ResourceId::iri("http://example.org/ontology#a"));
    assert_eq!(triple.object, Value::literal("A"));
}

#[tokio::test]
async fn error_status_is_reported() {
    let base = start_endpoint().await;
    let client = HttpDescribeClient::new(&format!("{base}/failing"), DEFAULT_TIMEOUT).unwrap();

    let error = client.execute_describe(DESCRIBE).await.unwrap_err();

    match error {
        QueryExecutionError::Status { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "dataset unavailable");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[tokio::test]
async fn malformed_rdf_is_reported() {
    let base = start_endpoint().await;
    let client = HttpDescribeClient::new(&format!("{base}/broken"), DEFAULT_TIMEOUT).unwrap();

    let error = client.execute_describe(DESCRIBE).await.unwrap_err();

    assert!(matches!(error, QueryExecutionError::Parse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_reported() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpDescribeClient::new(&format!("http://{addr}/query"), DEFAULT_TIMEOUT).unwrap();

    let error = client.execute_describe(DESCRIBE).await.unwrap_err();

    assert!(matches!(error, QueryExecutionError::Request(_)));
}
