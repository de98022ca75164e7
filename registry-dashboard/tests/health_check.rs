use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use registry_dashboard::forms::{AddBusinessProps, AuthOptionKind, ConfiguredOption};
use registry_dashboard::i18n::KeyTranslator;
use registry_dashboard::models::BusinessDetails;
use registry_dashboard::services::directory::InMemoryDirectory;
use registry_dashboard::startup::build_router;
use registry_dashboard::AppState;
use std::sync::Arc;
use tower::util::ServiceExt;

fn firm_business() -> AddBusinessProps {
    AddBusinessProps {
        auth_options: vec![ConfiguredOption::new("Confirm your name", AuthOptionKind::Firm)],
        business_details: BusinessDetails {
            is_firm: true,
            name: "Birch Partners".to_string(),
            identifier: "FM1000025".to_string(),
            ..Default::default()
        },
        contact_email: "partners@example.com".to_string(),
        accounts: vec![],
        identifier: "FM1000025".to_string(),
    }
}

fn app() -> Router {
    let directory = InMemoryDirectory::new(vec![firm_business()]).unwrap();
    build_router(AppState::new(Arc::new(directory), Arc::new(KeyTranslator)))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_check_works() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn index_lists_businesses() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/businesses/FM1000025/add"));
}

#[tokio::test]
async fn add_business_page_renders_form() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/businesses/FM1000025/add")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("data-test=\"firm-input\""));
    assert!(html.contains("Confirm your name"));
    assert!(html.contains("name=\"authOption\" value=\"firm-option\""));
}

#[tokio::test]
async fn unknown_business_is_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/businesses/BC9999999/add")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failed_submit_rerenders_with_errors() {
    let response = app()
        .oneshot(form_post(
            "/businesses/FM1000025/add",
            "authOption=firm-option&partner.name=&intent=submit",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("form.manageBusiness.authOption.firm.fields.name.error.required"));
    assert!(html.contains("form.manageBusiness.authOption.firm.fields.certify.error"));
    assert!(html.contains("name=\"submitAttempted\" value=\"true\""));
}

#[tokio::test]
async fn successful_submit_returns_payload() {
    let response = app()
        .oneshot(form_post(
            "/businesses/FM1000025/add",
            "authOption=firm-option&partner.name=Jane+Doe&partner.certify=on&intent=submit",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["optionSelected"], "firm");
    assert_eq!(payload["values"]["partner.name"], "Jane Doe");
    assert_eq!(payload["values"]["partner.certify"], true);
}

#[tokio::test]
async fn unknown_auth_option_is_bad_request() {
    let response = app()
        .oneshot(form_post(
            "/businesses/FM1000025/add",
            "authOption=fax-option",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn modal_endpoint_returns_fragment() {
    let response = app()
        .oneshot(json_post(
            "/modals/business-unavailable",
            serde_json::json!({ "action": "change name" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("data-modal=\"Base\""));
    assert!(html.contains("error.businessUnavailable.changeName.title"));
}

#[tokio::test]
async fn name_request_modal_accepts_request_without_number() {
    let response = app()
        .oneshot(json_post(
            "/modals/manage-name-request",
            serde_json::json!({ "names": ["SEASIDE HOLDINGS LTD."], "id": 5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("data-modal=\"ManageNameRequest\""));
    assert!(html.contains("SEASIDE HOLDINGS LTD."));
    assert!(!html.contains("modal.manageNameRequest.nrNum"));
}

#[tokio::test]
async fn removal_modal_picks_type_from_corp_type() {
    let response = app()
        .oneshot(json_post(
            "/modals/remove-business",
            serde_json::json!({ "business": { "corpType": { "code": "SP" } } }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("data-modal=\"RemoveBusiness\""));
    assert!(html.contains("data-removal-type=\"generic\""));
}

#[tokio::test]
async fn close_returns_empty_fragment() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/modals/close")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");
}
