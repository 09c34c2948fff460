use http::Uri;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

use crate::config::Config;
use crate::error::MetricsError;

/// Create a GitHub client that sends the configured token as a bearer
/// credential on every request.
///
/// Octocrab's built-in retries are switched off: the first failed call
/// ends the run.
pub fn create_client(config: &Config) -> Result<Octocrab, MetricsError> {
    // Library callers may skip cli::init; a no-op if already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    let base_uri: Uri = config
        .api_base_url
        .parse()
        .map_err(|e: http::uri::InvalidUri| MetricsError::InvalidUrl {
            url: config.api_base_url.clone(),
            message: e.to_string(),
        })?;

    Octocrab::builder()
        .personal_token(config.token.clone())
        .add_retry_config(RetryConfig::None)
        .base_uri(base_uri)
        .map_err(|e| MetricsError::from_octocrab("build client", &e))?
        .build()
        .map_err(|e| MetricsError::from_octocrab("build client", &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_rejects_invalid_base_url() {
        let config = Config::new("t").with_api_base_url("not a url");
        let result = create_client(&config);
        assert!(matches!(result, Err(MetricsError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_builds_without_process_init() {
        // No cli::init here, so no TLS provider was installed beforehand
        let result = create_client(&Config::new("t"));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_requests_carry_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/pulls"))
            .and(header("Authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config::new("secret-token").with_api_base_url(server.uri());
        let client = create_client(&config).unwrap();

        let page: octocrab::Page<serde_json::Value> = client
            .get("/repos/acme/widgets/pulls", None::<&()>)
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }
}
