use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pv_core::fixtures::{self, Fixture};
use pv_server::api::{AppState, SharedState};
use pv_server::keys::KeySource;

fn write_vk(dir: &Path, f: &Fixture) -> std::path::PathBuf {
    let path = dir.join("verification_key.json");
    std::fs::write(&path, serde_json::to_string_pretty(&f.vk).unwrap()).unwrap();
    path
}

fn make_state(keys: KeySource) -> SharedState {
    Arc::new(AppState {
        keys,
        verify_timeout: Duration::from_secs(30),
    })
}

async fn post_verify(app: &axum::Router, body: String) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verify")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn e2e_full_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::square_fixture(42, 1);
    let path = write_vk(tmp.path(), &f);
    let app = pv_server::api::router(make_state(KeySource::new(path, false).await.unwrap()));

    // ── 1. /v1/health ──────────────────────────────────────────────────
    let (status, json) = get_json(&app, "/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    // ── 2. /v1/vk summary ──────────────────────────────────────────────
    let (status, json) = get_json(&app, "/v1/vk").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["curve"], "bn128");
    assert_eq!(json["scheme"], "g16");
    assert_eq!(json["public_inputs"], 1);

    // ── 3. valid proof, public input "1" ───────────────────────────────
    let mut req = f.request.clone();
    req.inputs = vec!["1".into()];
    let (status, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "valid": true }));

    // ── 4. same proof, public input "2" ────────────────────────────────
    req.inputs = vec!["2".into()];
    let (status, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    assert_eq!(json["reason"], "pairing_mismatch");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn rejection_reasons_over_http() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::square_fixture(42, 1);
    let path = write_vk(tmp.path(), &f);
    let app = pv_server::api::router(make_state(KeySource::new(path, true).await.unwrap()));

    let mut req = f.request.clone();
    req.curve = "bls12_381".into();
    let (_, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(json["reason"], "scheme_or_curve_mismatch");

    let mut req = f.request.clone();
    req.inputs.push("1".into());
    let (_, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(json["reason"], "length_mismatch");

    let mut req = f.request.clone();
    req.proof.a = ["0x1".into(), "0x1".into()];
    let (_, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(json["reason"], "point_not_on_curve");

    let mut req = f.request.clone();
    req.proof.c[1] = "0xnothex".into();
    let (status, json) = post_verify(&app, serde_json::to_string(&req).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reason"], "malformed_input");
    assert!(json["message"].as_str().unwrap().contains("proof.c[1]"));
}

#[tokio::test]
async fn wrong_shape_is_malformed() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::square_fixture(42, 1);
    let path = write_vk(tmp.path(), &f);
    let app = pv_server::api::router(make_state(KeySource::new(path, false).await.unwrap()));

    // G1 with three coordinates
    let mut body = serde_json::to_value(&f.request).unwrap();
    body["proof"]["a"] = serde_json::json!(["0x1", "0x2", "0x1"]);
    let (status, json) = post_verify(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["valid"], false);
    assert_eq!(json["reason"], "malformed_input");

    let (status, json) = post_verify(&app, "not json".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn missing_key_is_service_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::square_fixture(42, 1);
    let missing = tmp.path().join("absent.json");
    let app = pv_server::api::router(make_state(KeySource::new(missing.clone(), false).await.unwrap()));

    let (status, json) = post_verify(&app, serde_json::to_string(&f.request).unwrap()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json.get("valid").is_none());
    assert!(json["error"].as_str().unwrap().contains("absent.json"));

    let (status, _) = get_json(&app, "/v1/vk").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // caching mode refuses to start without a key
    assert!(KeySource::new(missing, true).await.is_err());
}

#[tokio::test]
async fn key_file_replaced_without_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let first = fixtures::square_fixture(1, 1);
    let second = fixtures::square_fixture(2, 1);
    let path = write_vk(tmp.path(), &first);
    let app = pv_server::api::router(make_state(KeySource::new(path, false).await.unwrap()));

    let (_, json) = post_verify(&app, serde_json::to_string(&first.request).unwrap()).await;
    assert_eq!(json["valid"], true);

    write_vk(tmp.path(), &second);
    let (_, json) = post_verify(&app, serde_json::to_string(&first.request).unwrap()).await;
    assert_eq!(json["valid"], false);
    let (_, json) = post_verify(&app, serde_json::to_string(&second.request).unwrap()).await;
    assert_eq!(json["valid"], true);
}

#[tokio::test]
async fn concurrent_requests() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::product_fixture(9, 3, 5);
    let path = write_vk(tmp.path(), &f);
    let app = pv_server::api::router(make_state(KeySource::new(path, true).await.unwrap()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let app = app.clone();
        let mut req = f.request.clone();
        if i % 2 == 1 {
            req.inputs.swap(0, 1);
        }
        handles.push(tokio::spawn(async move {
            post_verify(&app, serde_json::to_string(&req).unwrap()).await
        }));
    }
    for (i, h) in handles.into_iter().enumerate() {
        let (status, json) = h.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], i % 2 == 0, "request {i}");
    }
}

#[tokio::test]
async fn expired_deadline_is_timeout_result() {
    let tmp = tempfile::tempdir().unwrap();
    let f = fixtures::product_fixture(11, 4, 6);
    let path = write_vk(tmp.path(), &f);
    let state = Arc::new(AppState {
        keys: KeySource::new(path, true).await.unwrap(),
        verify_timeout: Duration::ZERO,
    });
    let app = pv_server::api::router(state);

    let (status, json) = post_verify(&app, serde_json::to_string(&f.request).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["valid"], false);
    assert_eq!(json["reason"], "timeout");
    assert!(json["message"].is_string());
}
