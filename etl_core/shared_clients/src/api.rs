use common::error::diagnostics::DiagnosticMessage;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("connectivity error: {context}")]
    FailedToConnect { context: DiagnosticMessage },
    #[error("unexpected response status: {context}")]
    UnexpectedStatus {
        status: StatusCode,
        context: DiagnosticMessage,
    },
    #[error("malformed response body: {context}")]
    MalformedBody { context: DiagnosticMessage },
    #[error("unexpected error: {context}")]
    UnexpectedError { context: DiagnosticMessage },
}

impl ApiClientError {
    #[track_caller]
    pub fn failed_to_connect(message: impl Into<String>) -> Self {
        Self::FailedToConnect {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unexpected_status(status: StatusCode, url: &str) -> Self {
        Self::UnexpectedStatus {
            status,
            context: DiagnosticMessage::new(format!("GET {} returned {}", url, status)),
        }
    }

    #[track_caller]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedError {
            context: DiagnosticMessage::new(message.into()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ApiClientError::failed_to_connect(err.to_string())
        } else if err.is_decode() {
            ApiClientError::malformed_body(err.to_string())
        } else {
            ApiClientError::unexpected(format!(
                "Unexpected error trying to send API request: {}",
                err
            ))
        }
    }
}

/// Thin GET-a-JSON-document client. One request per call, no retries.
#[derive(Debug, Default)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Issue one GET and parse the body strictly as JSON.
    ///
    /// A non-2xx status is reported without reading the body.
    pub async fn get_json(&self, url: &str) -> Result<Value, ApiClientError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiClientError::unexpected_status(status, url));
        }

        let body: Value = resp.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_returns_parsed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Ann"}])),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new();
        let body = client
            .get_json(&format!("{}/users", server.uri()))
            .await
            .expect("2xx with a JSON body");
        assert_eq!(body, json!([{"id": 1, "name": "Ann"}]));
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
            .mount(&server)
            .await;

        let client = ApiClient::new();
        let err = client
            .get_json(&format!("{}/users", server.uri()))
            .await
            .expect_err("503 must fail");
        assert!(matches!(
            err,
            ApiClientError::UnexpectedStatus {
                status: StatusCode::SERVICE_UNAVAILABLE,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new();
        let err = client
            .get_json(&format!("{}/posts", server.uri()))
            .await
            .expect_err("unparseable body must fail");
        assert!(matches!(err, ApiClientError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_connectivity_error() {
        // Bind to an ephemeral port and drop the listener so the GET is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = ApiClient::new();
        let err = client
            .get_json(&format!("http://{}/users", addr))
            .await
            .expect_err("nothing is listening");
        assert!(matches!(err, ApiClientError::FailedToConnect { .. }));
    }
}
