mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use fan_registry::api::handlers::{list_fans_handler, register_fan_handler};
use fan_registry::application::services::RegistrationOptions;
use fan_registry::state::AppState;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/fans", get(list_fans_handler).post(register_fan_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_register_fan_success() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    let response = server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "529.982.247-25"))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["fan"]["name"], "Maria Silva");
    assert_eq!(json["fan"]["cpf"], "529.982.247-25");
    assert_eq!(json["fan"]["birth_date"], "1999-08-20");
    assert!(json["fan"]["twitter"].is_null());
    assert_eq!(json["document_check"], "skipped");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_then_list() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "52998224725"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/fans")
        .json(&common::registration_body("João Souza", "123.456.789-09"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/api/fans").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["name"], "Maria Silva");
    assert_eq!(json["items"][1]["name"], "João Souza");
}

#[tokio::test]
async fn test_list_empty_store() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    let response = server.get("/api/fans").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_invalid_fields_reports_all() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    let mut body = common::registration_body(" ", "529.982.247-24");
    body["instagram"] = "https://facebook.com/fan".into();
    body["document"] = serde_json::Value::Null;

    let response = server.post("/api/fans").json(&body).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    let details = &json["error"]["details"];
    assert_eq!(details["name"][0], "Name must not be blank");
    assert_eq!(details["cpf"][0], "Invalid CPF");
    assert_eq!(details["instagram"][0], "Invalid Instagram link");
    assert_eq!(details["document"][0], "Identity document was not provided");
}

#[tokio::test]
async fn test_register_duplicate_cpf() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "52998224725"))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/fans")
        .json(&common::registration_body("Maria S.", "529.982.247-25"))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "This CPF is already registered");
}

#[tokio::test]
async fn test_register_overlong_name_rejected() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    let name = "A".repeat(201);
    let response = server
        .post("/api/fans")
        .json(&common::registration_body(&name, "52998224725"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["name"][0], "Name is too long");
}

#[tokio::test]
async fn test_register_empty_document_filename_rejected() {
    let (state, _dir) = common::create_default_state();
    let server = server(state);

    let mut body = common::registration_body("Maria Silva", "52998224725");
    body["document"]["filename"] = "".into();

    let response = server.post("/api/fans").json(&body).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["details"]["document.filename"][0],
        "Invalid file name"
    );
}

#[tokio::test]
async fn test_register_verified_document() {
    let (state, _dir) = common::create_test_state(
        Arc::new(common::StaticExtractor("NOME\nMARIA SILVA\nCPF 529.982.247-25")),
        RegistrationOptions::default(),
    );
    let server = server(state);

    let response = server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "529.982.247-25"))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["document_check"], "verified");
    assert!(json["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_mismatch_warns() {
    let (state, _dir) = common::create_test_state(
        Arc::new(common::StaticExtractor("NOME MARIA SILVA")),
        RegistrationOptions::default(),
    );
    let server = server(state);

    let response = server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "529.982.247-25"))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["document_check"], "cpf_not_found");
    assert_eq!(json["warnings"][0], "CPF not found in document");
}

#[tokio::test]
async fn test_register_mismatch_strict_rejects() {
    let (state, _dir) = common::create_test_state(
        Arc::new(common::StaticExtractor("SOMEONE ELSE")),
        RegistrationOptions {
            strict_document_check: true,
            ..RegistrationOptions::default()
        },
    );
    let server = server(state);

    let response = server
        .post("/api/fans")
        .json(&common::registration_body("Maria Silva", "529.982.247-25"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["details"]["document"][0],
        "Name not found in document"
    );

    let list = server.get("/api/fans").await.json::<serde_json::Value>();
    assert_eq!(list["total"], 0);
}
