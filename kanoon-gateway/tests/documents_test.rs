mod common;

use common::{Reply, StubBackend, TestApp};
use serde_json::{json, Value};

#[tokio::test]
async fn get_document_returns_payload() {
    let backend = StubBackend::new(Reply::json(r#"{"tid":1,"title":"Kesavananda Bharati"}"#));
    let app = TestApp::spawn(backend.clone()).await;

    let response = app.client.get(app.url("/doc/1")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["tid"], 1);

    let fetches = backend.fetches.lock().unwrap();
    assert_eq!(fetches.as_slice(), &[("doc", 1, None)]);
}

#[tokio::test]
async fn missing_document_is_not_found() {
    let app = TestApp::spawn(StubBackend::new(Reply::Empty)).await;

    let response = app.client.get(app.url("/doc/1")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Document not found");
}

#[tokio::test]
async fn invalid_document_id_is_bad_request() {
    let backend = StubBackend::new(Reply::json("{}"));
    let app = TestApp::spawn(backend.clone()).await;

    for path in ["/doc/abc", "/doc/0", "/docmeta/-5", "/docmeta/1.5"] {
        let response = app.client.get(app.url(path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 400, "path: {}", path);
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "Document id must be a positive integer");
    }

    assert!(backend.fetches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn document_meta_follows_response_policy() {
    let ok = TestApp::spawn(StubBackend::new(Reply::json(r#"{"tid":9}"#))).await;
    let response = ok.client.get(ok.url("/docmeta/9")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let empty = TestApp::spawn(StubBackend::new(Reply::Empty)).await;
    let response = empty.client.get(empty.url("/docmeta/9")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Document metadata not found");

    let garbled = TestApp::spawn(StubBackend::new(Reply::json("<html>"))).await;
    let response = garbled.client.get(garbled.url("/docmeta/9")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn document_fragment_forwards_form_input() {
    let backend = StubBackend::new(Reply::json(r#"{"headline":["..."]}"#));
    let app = TestApp::spawn(backend.clone()).await;

    let response = app
        .client
        .post(app.url("/docfragment/3"))
        .json(&json!({"formInput": "right to life"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let fetches = backend.fetches.lock().unwrap();
    assert_eq!(
        fetches.as_slice(),
        &[("docfragment", 3, Some("right to life".to_string()))]
    );
}

#[tokio::test]
async fn document_fragment_requires_form_input() {
    let backend = StubBackend::new(Reply::json("{}"));
    let app = TestApp::spawn(backend.clone()).await;

    for body in [json!({}), json!({"formInput": ""}), json!({"query": "bail"})] {
        let response = app
            .client
            .post(app.url("/docfragment/3"))
            .json(&body)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 400, "body: {}", body);
        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "formInput is required");
    }

    assert!(backend.fetches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn document_fragment_empty_and_malformed_results() {
    let empty = TestApp::spawn(StubBackend::new(Reply::Empty)).await;
    let response = empty
        .client
        .post(empty.url("/docfragment/3"))
        .json(&json!({"formInput": "bail"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Document fragment not found");

    let garbled = TestApp::spawn(StubBackend::new(Reply::json("{oops"))).await;
    let response = garbled
        .client
        .post(garbled.url("/docfragment/3"))
        .json(&json!({"formInput": "bail"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn document_backend_failure_is_server_error() {
    let app = TestApp::spawn(StubBackend::new(Reply::Fail)).await;

    let response = app.client.get(app.url("/doc/4")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let error: Value = response.json().await.unwrap();
    assert!(error["error"].is_string());
}
