use chrono::Duration;

use crate::helpers::TestApp;

#[tokio::test]
async fn guarded_pages_redirect_to_login_without_a_session() {
    let app = TestApp::spawn().await;

    for path in ["/dashboard", "/rfps"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 303, "path: {path}");
        assert_eq!(response.headers().get("location").unwrap(), "/auth/login");

        // No protected content is composed on the way out.
        let body = response.text().await.unwrap();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn guarded_pages_render_with_a_live_session() {
    let app = TestApp::spawn().await;
    let (_, token) = app.signed_up_user("buyer@example.com", "buyer").await;

    let response = app.get_with_cookie("/dashboard", &token).await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("Dashboard"));
}

#[tokio::test]
async fn an_expired_session_is_redirected_like_no_session() {
    let app = TestApp::spawn().await;
    app.signed_up_user("buyer@example.com", "buyer").await;

    let expired = app
        .provider
        .issue_session_with_ttl("buyer@example.com", Duration::seconds(-120))
        .await
        .unwrap();

    let response = app
        .get_with_cookie("/rfps", expired.access_token.expose())
        .await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("location").unwrap(), "/auth/login");
}

#[tokio::test]
async fn the_login_page_is_public() {
    let app = TestApp::spawn().await;

    let response = app.get("/auth/login").await;
    assert_eq!(response.status().as_u16(), 200);
}
