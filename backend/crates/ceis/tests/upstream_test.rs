//! End-to-end tests: proxy server -> reqwest gateway -> stub upstream

use axum::http::{StatusCode, header};
use axum::routing::post;
use axum::{Form, Router};
use ceis::{CeisConfig, ErrorEnvelope, InfosimplesGateway, ceis_router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const FOUND_BODY: &str = r#"{"code":200,"data_count":1,"data":[{"cadastro_receita":"ACME"}]}"#;

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Start a stub upstream that records form params and answers with a fixed reply.
async fn start_upstream(status: StatusCode, body: &'static str) -> (String, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let recorder = recorded.clone();

    let app = Router::new().route(
        "/ceis",
        post(move |Form(params): Form<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(params);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/ceis", addr), recorded)
}

/// Start the proxy pointed at the given upstream URL.
async fn start_proxy(api_url: &str) -> String {
    let config = CeisConfig::with_api_url(api_url);
    let gateway = InfosimplesGateway::from_config(&config).unwrap();
    let app = ceis_router(gateway);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post_lookup(base: &str, form: &[(&str, &str)]) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/lookup", base))
        .form(form)
        .send()
        .await
        .unwrap()
}

async fn read_envelope(response: reqwest::Response) -> ErrorEnvelope {
    let bytes = response.bytes().await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn relays_upstream_body_unchanged() {
    let (upstream, recorded) = start_upstream(StatusCode::OK, FOUND_BODY).await;
    let proxy = start_proxy(&upstream).await;

    let response = post_lookup(
        &proxy,
        &[("token", "secret"), ("taxId", "12345678000190")],
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), FOUND_BODY);

    let calls = recorded.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("token").map(String::as_str), Some("secret"));
    assert_eq!(calls[0].get("timeout").map(String::as_str), Some("300"));
    assert_eq!(
        calls[0].get("cnpj").map(String::as_str),
        Some("12345678000190")
    );
    assert!(!calls[0].contains_key("cpf"));
}

#[tokio::test]
async fn forwards_both_identifiers() {
    let (upstream, recorded) = start_upstream(StatusCode::OK, FOUND_BODY).await;
    let proxy = start_proxy(&upstream).await;

    let response = post_lookup(
        &proxy,
        &[
            ("token", "secret"),
            ("taxId", "12345678000190"),
            ("personId", "12345678901"),
        ],
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let calls = recorded.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].get("cnpj").map(String::as_str),
        Some("12345678000190")
    );
    assert_eq!(calls[0].get("cpf").map(String::as_str), Some("12345678901"));
}

#[tokio::test]
async fn upstream_503_becomes_500_with_upstream_code() {
    let (upstream, _) = start_upstream(StatusCode::SERVICE_UNAVAILABLE, "{}").await;
    let proxy = start_proxy(&upstream).await;

    let response = post_lookup(
        &proxy,
        &[("token", "secret"), ("taxId", "12345678000190")],
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let envelope = read_envelope(response).await;
    assert_eq!(envelope.code, 503);
    assert_eq!(envelope.code_message, "upstream communication error");
}

#[tokio::test]
async fn unreachable_upstream_is_transport_error() {
    // Bind then drop a listener to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let proxy = start_proxy(&format!("http://{}/ceis", addr)).await;

    let response = post_lookup(
        &proxy,
        &[("token", "secret"), ("personId", "12345678901")],
    )
    .await;

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let envelope = read_envelope(response).await;
    assert_eq!(envelope.code, 500);
    assert_eq!(envelope.code_message, "request processing error");
    assert!(!envelope.errors.is_empty());
    assert!(!envelope.errors[0].is_empty());
}

#[tokio::test]
async fn validation_never_reaches_upstream() {
    let (upstream, recorded) = start_upstream(StatusCode::OK, FOUND_BODY).await;
    let proxy = start_proxy(&upstream).await;

    let response = post_lookup(&proxy, &[("taxId", "12345678000190")]).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        read_envelope(response).await.errors,
        vec!["missing token".to_string()]
    );

    let response = post_lookup(&proxy, &[("token", "secret")]).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    assert!(recorded.lock().unwrap().is_empty());
}
