//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Backend used when `HEADLINE_API_URL` is not set at build time
    pub const DEFAULT_API_URL: &'static str =
        "https://headlineai.graycoast-7c0c32b7.eastus.azurecontainerapps.io";

    /// Delay before leaving the login page after a successful login
    pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_000;

    /// Delay before leaving the signup page after a successful signup
    pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 3_000;

    pub const USER_AGENT: &'static str = concat!("headline-web/", env!("CARGO_PKG_VERSION"));

    /// Base URL of the auth and agent API
    #[must_use]
    pub fn api_base_url() -> &'static str {
        option_env!("HEADLINE_API_URL").unwrap_or(Self::DEFAULT_API_URL)
    }
}
