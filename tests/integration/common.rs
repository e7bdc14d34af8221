use serde_json::json;
use sforce_lite::AuthConfig;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "access_token==";
pub const PASSWORD: &str = "K33p0nTruck1n";

/// Initialize tracing once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Login config pointed at `login_host`, API version `1.0`.
pub fn auth_config(login_host: &MockServer) -> AuthConfig {
    AuthConfig::new("consumer key", "sweet sweet secret", "jsmith", PASSWORD)
        .with_login_host(login_host.uri())
        .with_api_version("1.0")
        .with_user_agent("test-user-agent")
}

/// A login host that accepts only [`PASSWORD`] and hands out a session on
/// `instance`. Any other password gets the OAuth `invalid_grant` answer.
pub async fn mock_login_host(instance: &MockServer) -> MockServer {
    let login_host = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=consumer+key"))
        .and(body_string_contains("client_secret=sweet+sweet+secret"))
        .and(body_string_contains("username=jsmith"))
        .and(body_string_contains(format!("password={PASSWORD}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "instance_url": instance.uri(),
            "token_type": "Bearer"
        })))
        .with_priority(1)
        .mount(&login_host)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "authentication failure"
        })))
        .with_priority(2)
        .mount(&login_host)
        .await;

    login_host
}

/// Login config for a real org, read from the environment.
pub fn live_config() -> AuthConfig {
    match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => panic!(
            "\n\nLive integration tests need SF_CONSUMER_KEY, SF_CONSUMER_SECRET, \
             SF_USERNAME and SF_PASSWORD to be set: {e}\n\n"
        ),
    }
}
