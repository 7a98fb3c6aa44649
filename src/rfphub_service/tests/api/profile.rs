use chrono::Duration;
use serde_json::json;

use rfphub_core::{ProfileStore, Role, UserId};

use crate::helpers::TestApp;

#[tokio::test]
async fn me_returns_the_user_and_their_profile() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_up_user("buyer@example.com", "buyer").await;
    app.seed_profile(&user_id, "buyer@example.com", Role::Buyer)
        .await;

    let response = app.get_with_cookie("/api/profile/me", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["profile"]["id"], user_id.as_str());
    assert_eq!(body["profile"]["first_name"], "Ada");
}

#[tokio::test]
async fn me_without_a_session_is_a_401_and_never_reaches_the_store() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/profile/me").await;
    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not authenticated");
    assert_eq!(app.profiles.read_count().await, 0);
}

#[tokio::test]
async fn me_with_an_expired_cookie_is_a_401_not_authenticated() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.signed_up_user("buyer@example.com", "buyer").await;
    app.seed_profile(&user_id, "buyer@example.com", Role::Buyer)
        .await;

    let expired = app
        .provider
        .issue_session_with_ttl("buyer@example.com", Duration::seconds(-120))
        .await
        .unwrap();

    let response = app
        .get_with_cookie("/api/profile/me", expired.access_token.expose())
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not authenticated");
    assert_eq!(app.profiles.read_count().await, 0);
}

#[tokio::test]
async fn me_with_no_profile_row_is_a_404() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app.get_with_cookie("/api/profile/me", &token).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Profile not found");
}

#[tokio::test]
async fn profile_patch_round_trips_and_leaves_email_and_role_untouched() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_up_user("buyer@example.com", "buyer").await;
    app.seed_profile(&user_id, "buyer@example.com", Role::Buyer)
        .await;

    // The body also tries to smuggle email and role mutations.
    let response = app
        .client
        .put(format!("{}/api/profile", app.address))
        .header(reqwest::header::COOKIE, TestApp::cookie(&token))
        .json(&json!({
            "first_name": "Grace",
            "company_name": "Hopper Ltd",
            "email": "attacker@example.com",
            "role": "supplier",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let me: serde_json::Value = app
        .get_with_cookie("/api/profile/me", &token)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(me["profile"]["first_name"], "Grace");
    assert_eq!(me["profile"]["company_name"], "Hopper Ltd");
    assert_eq!(me["profile"]["last_name"], "Lovelace");
    assert_eq!(me["profile"]["email"], "buyer@example.com");
    assert_eq!(me["profile"]["role"], "buyer");
}

#[tokio::test]
async fn profile_updates_are_scoped_to_the_session_subject() {
    let app = TestApp::spawn().await;
    let (buyer_id, buyer_token) = app.signed_up_user("buyer@example.com", "buyer").await;
    let (supplier_id, _) = app.signed_up_user("supplier@example.com", "supplier").await;
    app.seed_profile(&buyer_id, "buyer@example.com", Role::Buyer)
        .await;
    app.seed_profile(&supplier_id, "supplier@example.com", Role::Supplier)
        .await;

    let response = app
        .client
        .put(format!("{}/api/profile", app.address))
        .header(reqwest::header::COOKIE, TestApp::cookie(&buyer_token))
        .json(&json!({ "first_name": "Changed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let buyer = app.profiles.get(&UserId::new(&*buyer_id)).await.unwrap();
    let supplier = app
        .profiles
        .get(&UserId::new(&*supplier_id))
        .await
        .unwrap();
    assert_eq!(buyer.first_name, "Changed");
    assert_eq!(supplier.first_name, "Ada");
}

#[tokio::test]
async fn update_with_no_profile_row_is_an_internal_failure_not_a_404() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app
        .client
        .put(format!("{}/api/profile", app.address))
        .header(reqwest::header::COOKIE, TestApp::cookie(&token))
        .json(&json!({ "first_name": "Ada" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn unauthenticated_update_never_touches_the_store() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(format!("{}/api/profile", app.address))
        .json(&json!({ "first_name": "Mallory" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(app.profiles.write_count().await, 0);
}

#[tokio::test]
async fn bearer_endpoint_resolves_the_token_without_a_cookie() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_up_user("supplier@example.com", "supplier").await;
    app.seed_profile(&user_id, "supplier@example.com", Role::Supplier)
        .await;

    let response = app
        .client
        .get(format!("{}/api/test/profile", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["profile"]["role"], "supplier");
}

#[tokio::test]
async fn bearer_endpoint_rejects_garbage_and_missing_tokens() {
    let app = TestApp::spawn().await;

    let garbage = app
        .client
        .get(format!("{}/api/test/profile", app.address))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(garbage.status().as_u16(), 401);

    let missing = app.get("/api/test/profile").await;
    assert_eq!(missing.status().as_u16(), 401);
    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body["error"], "Not authenticated");
}
