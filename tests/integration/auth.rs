//! Login flow tests.

use super::common::{auth_config, init_tracing, mock_login_host, ACCESS_TOKEN};
use sforce_lite::auth::{ErrorKind, PasswordAuth};
use sforce_lite::{login, Credentials, SalesforceRestClient};
use wiremock::MockServer;

#[tokio::test]
async fn test_login_with_correct_password() {
    init_tracing();
    let instance = MockServer::start().await;
    let login_host = mock_login_host(&instance).await;

    let session = login(&auth_config(&login_host))
        .await
        .expect("login should succeed");

    assert_eq!(session.access_token(), ACCESS_TOKEN);
    assert_eq!(session.instance_url(), instance.uri());
    assert_eq!(session.api_version(), "1.0");
    assert!(session.is_valid());
}

#[tokio::test]
async fn test_login_with_incorrect_password() {
    init_tracing();
    let instance = MockServer::start().await;
    let login_host = mock_login_host(&instance).await;

    let config = sforce_lite::AuthConfig::new("consumer key", "sweet sweet secret", "jsmith", "123")
        .with_login_host(login_host.uri());
    let err = PasswordAuth::new(config)
        .unwrap()
        .login()
        .await
        .expect_err("login should fail");

    assert!(err.is_rejected());
    assert!(matches!(err.kind, ErrorKind::OAuth { status: 400, .. }));
    assert!(err.to_string().starts_with("Error logging in to Salesforce:"));
    assert!(!err.to_string().contains("123"));
}

#[tokio::test]
async fn test_rest_client_login_failure() {
    let instance = MockServer::start().await;
    let login_host = mock_login_host(&instance).await;

    let config = sforce_lite::AuthConfig::new("consumer key", "sweet sweet secret", "jsmith", "nope")
        .with_login_host(login_host.uri());
    let err = SalesforceRestClient::login(&config)
        .await
        .expect_err("login should fail");
    assert!(err.is_auth_error());
}
