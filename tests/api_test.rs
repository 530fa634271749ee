//! HTTP API tests driven through the router without binding a socket

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use fairverify::api::create_app;
use fairverify::config::ApiConfig;
use fairverify::hash::digest;
use serde_json::{json, Value};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

fn app() -> Router {
    create_app(&ApiConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, request_id, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, request_id, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Running");
    assert!(request_id.is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();
    let (_, request_id, _) = send(request).await;
    assert_eq!(request_id.as_deref(), Some("client-supplied-id"));
}

#[tokio::test]
async fn test_games_listing() {
    let request = Request::builder().uri("/api/games").body(Body::empty()).unwrap();
    let (status, _, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let games = body["games"].as_array().unwrap();
    let ids: Vec<&str> = games.iter().map(|g| g["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["plinko", "dice", "blackjack", "roulette", "mines"]);

    let mines = &games[4]["options"];
    assert_eq!(mines[0]["name"], "size");
    assert_eq!(mines[0]["max"], 10);
    assert_eq!(games[2]["options"][0]["name"], "cards");
    assert_eq!(games[2]["options"][0]["max"], 52);
}

#[tokio::test]
async fn test_verify_hash() {
    let (status, _, body) = send(post_json(
        "/api/verify/hash",
        json!({"server_seed": "abc", "server_seed_hash": digest("abc").to_uppercase()}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], true);
    assert_eq!(body["expected_hash"], digest("abc"));
}

#[tokio::test]
async fn test_verify_outcome() {
    let (status, _, body) = send(post_json(
        "/api/verify/outcome",
        json!({
            "server_seed": "529b778e19d71a10d5d76b86",
            "client_seed": "placeholder",
            "nonce": 38,
            "server_seed_hash": digest("529b778e19d71a10d5d76b86"),
            "game": "mines",
            "options": {"size": 5, "mines": 5}
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["game"], "mines");
    assert_eq!(body["hash_valid"], true);
    assert_eq!(body["outcome"]["result"], "0000000000010111000000010");
    assert_eq!(body["outcome"]["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_hash_mismatch_is_ok_response() {
    let (status, _, body) = send(post_json(
        "/api/verify/outcome",
        json!({
            "server_seed": "91f225a82e80b438f0cee65f",
            "client_seed": "placeholder",
            "nonce": "926",
            "server_seed_hash": "not-the-hash",
            "game": "dice"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hash_valid"], false);
    assert_eq!(body["outcome"]["result"], "5378");
}

#[tokio::test]
async fn test_invalid_options_are_bad_request() {
    let (status, request_id, body) = send(post_json(
        "/api/verify/outcome",
        json!({
            "server_seed": "s",
            "client_seed": "c",
            "nonce": "1",
            "server_seed_hash": "h",
            "game": "plinko",
            "options": {"rows": 0}
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["details"]["field"], "rows");
    assert_eq!(body["request_id"].as_str(), request_id.as_deref());
}

#[tokio::test]
async fn test_huge_card_count_is_bad_request() {
    let (status, _, body) = send(post_json(
        "/api/verify/outcome",
        json!({
            "server_seed": "s",
            "client_seed": "c",
            "nonce": "1",
            "server_seed_hash": "h",
            "game": "blackjack",
            "options": {"cards": 4_000_000_000u64}
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"]["field"], "cards");
}

#[tokio::test]
async fn test_unknown_game_is_bad_request() {
    let (status, _, body) = send(post_json(
        "/api/verify/outcome",
        json!({
            "server_seed": "s",
            "client_seed": "c",
            "nonce": "1",
            "server_seed_hash": "h",
            "game": "keno"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].as_str().unwrap().contains("keno"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, _, body) = send(post_json("/api/verify/hash", json!({"server_seed": "abc"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
