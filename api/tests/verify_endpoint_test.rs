//! Integration tests for the session verification endpoint

use actix_web::{http::StatusCode, test, web};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;

use se_api::{create_app, AppState};
use se_core::domain::entities::{Claims, Customer};
use se_core::repositories::MockCustomerRepository;
use se_core::services::session::{IdentityResolver, MemorySessionCache, VerificationService};
use se_core::services::token::{TokenConfig, TokenService};

const TEST_SECRET: &str = "verify-endpoint-test-secret";

/// Builds application state with the given customers seeded in the store
async fn test_state(customer_ids: &[&str]) -> web::Data<AppState> {
    let repo = Arc::new(MockCustomerRepository::new());
    for id in customer_ids {
        repo.insert(Customer::new(
            *id,
            format!("Customer {}", id),
            format!("{}@example.com", id),
            None,
        ))
        .await;
    }

    let tokens = TokenService::new(TokenConfig::new(TEST_SECRET)).unwrap();
    let resolver = IdentityResolver::new(repo, Arc::new(MemorySessionCache::new()), 300);
    let verification = Arc::new(VerificationService::new(tokens, resolver));

    web::Data::new(AppState::new(verification))
}

fn expired_token(customer_id: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: customer_id.to_string(),
        email: format!("{}@example.com", customer_id),
        iat: now - 7200,
        exp: now - 3600,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[actix_web::test]
async fn test_verify_allows_fresh_token() {
    let state = test_state(&["c1"]).await;
    let pair = state
        .verification
        .tokens()
        .issue_pair("c1", "c1@example.com")
        .unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
        .insert_header(("x-refresh-token", pair.refresh_token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["action"], "ALLOW_ACCESS");
    assert_eq!(body["customer"]["id"], "c1");
    assert!(body.get("accessToken").is_none());
}

#[actix_web::test]
async fn test_verify_rotates_expired_access() {
    let state = test_state(&["c1"]).await;
    let tokens = state.verification.tokens();
    let pair = tokens.issue_pair("c1", "c1@example.com").unwrap();
    let app = test::init_service(create_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .insert_header(("Authorization", format!("Bearer {}", expired_token("c1"))))
        .insert_header(("x-refresh-token", pair.refresh_token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["action"], "UPDATE_ACCESS_TOKEN");
    assert_eq!(body["customer"]["id"], "c1");

    // The replacement token verifies against the same service
    let rotated = body["accessToken"].as_str().unwrap();
    let claims = state.verification.tokens().verify_access(rotated).unwrap();
    assert_eq!(claims.sub, "c1");
}

#[actix_web::test]
async fn test_verify_rejects_when_both_expired() {
    let state = test_state(&["c1"]).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .insert_header(("Authorization", format!("Bearer {}", expired_token("c1"))))
        .insert_header(("x-refresh-token", expired_token("c1")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["action"], "REDIRECT_TO_LOGIN");
    assert!(body.get("accessToken").is_none());
    assert!(body.get("customer").is_none());
}

#[actix_web::test]
async fn test_verify_missing_credentials() {
    let state = test_state(&["c1"]).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post().uri("/api/v1/auth/verify").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["action"], "REDIRECT_TO_LOGIN");
}

#[actix_web::test]
async fn test_verify_unknown_customer_looks_like_invalid_token() {
    // The subject does not exist; on the wire this is indistinguishable
    // from a bad token
    let state = test_state(&[]).await;
    let pair = state
        .verification
        .tokens()
        .issue_pair("ghost", "ghost@example.com")
        .unwrap();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/verify")
        .insert_header(("Authorization", format!("Bearer {}", pair.access_token)))
        .insert_header(("x-refresh-token", pair.refresh_token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["action"], "REDIRECT_TO_LOGIN");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = test_state(&[]).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_returns_404_envelope() {
    let state = test_state(&[]).await;
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}
