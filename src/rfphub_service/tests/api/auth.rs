use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn signup_returns_a_user_a_session_and_a_cookie() {
    let app = TestApp::spawn().await;

    let response = app.signup("buyer@example.com", "password123", "buyer").await;
    assert_eq!(response.status().as_u16(), 200);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("no session cookie set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("rfphub_session="));
    assert!(set_cookie.contains("HttpOnly"));

    let body: serde_json::Value = response.json().await.unwrap();
    // A 200 can never carry a null user.
    assert!(body["user"]["id"].is_string());
    assert_eq!(body["user"]["email"], "buyer@example.com");
    assert_eq!(body["user"]["role"], "buyer");
    assert!(body["session"]["access_token"].is_string());
}

#[tokio::test]
async fn duplicate_signup_surfaces_the_provider_message() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app.signup("buyer@example.com", "password123", "buyer").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already registered");
}

#[tokio::test]
async fn signup_with_missing_fields_is_a_400() {
    let app = TestApp::spawn().await;

    let cases = [
        (json!({ "password": "password123", "role": "buyer" }), "Email is required"),
        (json!({ "email": "a@b.com", "role": "buyer" }), "Password is required"),
        (
            json!({ "email": "a@b.com", "password": "password123" }),
            "Role must be \"buyer\" or \"supplier\"",
        ),
        (
            json!({ "email": "a@b.com", "password": "password123", "role": "admin" }),
            "Role must be \"buyer\" or \"supplier\"",
        ),
    ];

    for (body, expected) in cases {
        let response = app.post_json("/api/auth/signup", &body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        let error: serde_json::Value = response.json().await.unwrap();
        assert_eq!(error["error"], expected);
    }
}

#[tokio::test]
async fn login_with_wrong_credentials_is_a_400() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app
        .post_json(
            "/api/auth/login",
            &json!({ "email": "buyer@example.com", "password": "wrong-password" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid login credentials");
}

#[tokio::test]
async fn login_returns_a_fresh_session() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app
        .post_json(
            "/api/auth/login",
            &json!({ "email": "buyer@example.com", "password": "password123" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["session"]["access_token"].is_string());
}

#[tokio::test]
async fn forgot_password_with_an_empty_body_is_email_required() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/api/auth/forgot-password", &json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email is required");
}

#[tokio::test]
async fn forgot_password_does_not_disclose_account_existence() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/auth/forgot-password",
            &json!({ "email": "nobody@example.com" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn update_password_rotates_the_credential() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app
        .post_json_with_cookie(
            "/api/auth/update-password",
            &json!({ "password": "new-password-456" }),
            &token,
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let old = app
        .post_json(
            "/api/auth/login",
            &json!({ "email": "buyer@example.com", "password": "password123" }),
        )
        .await;
    assert_eq!(old.status().as_u16(), 400);

    let new = app
        .post_json(
            "/api/auth/login",
            &json!({ "email": "buyer@example.com", "password": "new-password-456" }),
        )
        .await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn update_password_without_a_password_is_a_400() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app
        .post_json_with_cookie("/api/auth/update-password", &serde_json::json!({}), &token)
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Password is required");
}

#[tokio::test]
async fn session_endpoint_returns_the_current_session() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app.get_with_cookie("/api/auth/session", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["session"]["access_token"], token.as_str());
    assert_eq!(body["session"]["token_type"], "bearer");
}

#[tokio::test]
async fn session_endpoint_without_a_cookie_is_a_400() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/auth/session").await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No session");
}

#[tokio::test]
async fn user_endpoint_returns_the_provider_view() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_up_user("supplier@example.com", "supplier").await;

    let response = app.get_with_cookie("/api/auth/user", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["user"]["role"], "supplier");
}

#[tokio::test]
async fn logout_invalidates_the_session_and_is_idempotent() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_up_user("buyer@example.com", "buyer").await;
    app.seed_profile(&user_id, "buyer@example.com", rfphub_core::Role::Buyer)
        .await;

    let first = app
        .post_json_with_cookie("/api/auth/logout", &json!({}), &token)
        .await;
    assert_eq!(first.status().as_u16(), 200);
    let removal = first.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(removal.starts_with("rfphub_session="));

    // A second logout with the same dead token still succeeds.
    let second = app
        .post_json_with_cookie("/api/auth/logout", &json!({}), &token)
        .await;
    assert_eq!(second.status().as_u16(), 200);

    // And so does one with no cookie at all.
    let third = app.post_json("/api/auth/logout", &json!({})).await;
    assert_eq!(third.status().as_u16(), 200);

    let me = app.get_with_cookie("/api/profile/me", &token).await;
    assert_eq!(me.status().as_u16(), 401);
}

#[tokio::test]
async fn callback_exchanges_the_code_and_lands_on_the_dashboard() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;
    let code = app
        .provider
        .issue_confirmation_code("buyer@example.com")
        .await
        .unwrap();

    let response = app.get(&format!("/auth/callback?code={code}")).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("no session cookie set")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("rfphub_session="));
}

#[tokio::test]
async fn callback_with_a_used_or_missing_code_falls_back_to_login() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;
    let code = app
        .provider
        .issue_confirmation_code("buyer@example.com")
        .await
        .unwrap();
    app.get(&format!("/auth/callback?code={code}")).await;

    // The code is single-use.
    let reused = app.get(&format!("/auth/callback?code={code}")).await;
    assert_eq!(reused.status().as_u16(), 303);
    assert_eq!(reused.headers().get("location").unwrap(), "/auth/login");

    let missing = app.get("/auth/callback").await;
    assert_eq!(missing.status().as_u16(), 303);
    assert_eq!(missing.headers().get("location").unwrap(), "/auth/login");
}
