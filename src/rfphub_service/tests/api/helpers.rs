use reqwest::header::COOKIE;

use rfphub_adapters::{
    InMemoryIdentityProvider, InMemoryProfileStore,
    config::constants::{SESSION_COOKIE_NAME, test},
};
use rfphub_core::{Profile, Role, UserId};
use rfphub_service::MarketService;

/// One service instance on an ephemeral port, backed by the in-memory
/// provider and store so tests can reach behind the HTTP surface.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub provider: InMemoryIdentityProvider,
    pub profiles: InMemoryProfileStore,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let provider = InMemoryIdentityProvider::new();
        let profiles = InMemoryProfileStore::new();
        let service = MarketService::new(
            provider.clone(),
            profiles.clone(),
            SESSION_COOKIE_NAME,
            "/auth/update-password",
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(service.run_standalone(listener, None));

        // Redirects and cookies are asserted on directly, so the client
        // follows neither.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            client,
            provider,
            profiles,
        }
    }

    pub fn cookie(token: &str) -> String {
        format!("{SESSION_COOKIE_NAME}={token}")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post_json_with_cookie(
        &self,
        path: &str,
        body: &serde_json::Value,
        token: &str,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.address))
            .header(COOKIE, Self::cookie(token))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get_with_cookie(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.address))
            .header(COOKIE, Self::cookie(token))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn signup(&self, email: &str, password: &str, role: &str) -> reqwest::Response {
        self.post_json(
            "/api/auth/signup",
            &serde_json::json!({ "email": email, "password": password, "role": role }),
        )
        .await
    }

    /// Signs up and returns (user id, access token).
    pub async fn signed_up_user(&self, email: &str, role: &str) -> (String, String) {
        let response = self.signup(email, "password123", role).await;
        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        (
            body["user"]["id"].as_str().unwrap().to_string(),
            body["session"]["access_token"].as_str().unwrap().to_string(),
        )
    }

    pub async fn seed_profile(&self, user_id: &str, email: &str, role: Role) {
        self.profiles
            .insert(Profile {
                id: UserId::new(user_id),
                email: email.to_string(),
                role,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                company_name: String::new(),
                contact_phone: String::new(),
            })
            .await;
    }
}
