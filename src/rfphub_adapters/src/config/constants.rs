pub mod env {
    pub const PROVIDER_BASE_URL_ENV_VAR: &str = "RFPHUB_PROVIDER__BASE_URL";
    pub const PROVIDER_JWT_KEY_ENV_VAR: &str = "RFPHUB_PROVIDER__JWT_KEY";
    pub const DATABASE_URL_ENV_VAR: &str = "RFPHUB_POSTGRES__URL";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "RFPHUB_APP__ALLOWED_ORIGINS";
}

pub const SESSION_COOKIE_NAME: &str = "rfphub_session";
pub const LOGIN_PAGE_PATH: &str = "/auth/login";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod identity_provider {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod identity_provider {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
