//! HTTP dispatcher for the tools and manage services.
//!
//! Every call is a single attempt: the request is routed by path prefix,
//! authorized with the `apikey` header, and its outcome normalized into
//! [`ToolsResult<ApiResponse>`]. HTTP failures and transport errors both
//! come back as values, never panics.

use std::error::Error as _;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Url};
use tracing::{debug, warn};

use crate::domain::errors::{ToolsError, ToolsResult};
use crate::domain::models::{ApiRequest, ApiResponse, CredentialSet, HttpMethod};
use crate::infrastructure::logging::SecretScrubber;

/// Header carrying the stored API key.
pub const API_KEY_HEADER: &str = "apikey";

const JSON_MEDIA_TYPE: &str = "application/json";

/// Sends [`ApiRequest`]s on behalf of a [`CredentialSet`].
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    http: Client,
    scrubber: SecretScrubber,
}

impl RequestDispatcher {
    /// Create a dispatcher with a default `reqwest` client.
    pub fn new() -> ToolsResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("mastools/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolsError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(http))
    }

    /// Create a dispatcher around an existing client.
    pub fn with_client(http: Client) -> Self {
        Self {
            http,
            scrubber: SecretScrubber::new(),
        }
    }

    /// Build the outgoing request without sending it.
    ///
    /// Fails with [`ToolsError::InvalidEndpoint`] for paths outside both
    /// service prefixes, and [`ToolsError::InvalidUrl`] when the stored base
    /// URL does not parse.
    pub fn build(&self, credentials: &CredentialSet, request: &ApiRequest) -> ToolsResult<Request> {
        let route = request.route()?;
        let target = request.target_url(credentials)?;
        let url = Url::parse(&target).map_err(|_| {
            let field = route.base_url_field();
            ToolsError::InvalidUrl {
                field,
                value: credentials.value(field).to_string(),
            }
        })?;

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(ACCEPT, JSON_MEDIA_TYPE);

        if request.method == HttpMethod::Post {
            builder = builder.header(CONTENT_TYPE, JSON_MEDIA_TYPE);
            if let Some(body) = &request.body {
                let bytes = serde_json::to_vec(body).map_err(|e| {
                    ToolsError::Transport(format!("Failed to encode request body: {e}"))
                })?;
                builder = builder.body(bytes);
            }
        }

        builder
            .build()
            .map_err(|e| ToolsError::Transport(format!("Failed to build request: {e}")))
    }

    /// Perform one request/response round trip.
    pub async fn call(
        &self,
        credentials: &CredentialSet,
        request: &ApiRequest,
    ) -> ToolsResult<ApiResponse> {
        let outgoing = self.build(credentials, request)?;

        debug!(
            method = %request.method,
            url = %self.scrubber.scrub(outgoing.url().as_str()),
            query = ?request.query,
            has_body = request.body.is_some(),
            "dispatching request"
        );

        let response = self.http.execute(outgoing).await.map_err(|e| {
            let message = error_chain(&e);
            warn!(path = %request.path, error = %message, "request failed before a response");
            ToolsError::Transport(message)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let message = error_chain(&e);
            warn!(path = %request.path, error = %message, "failed to read response body");
            ToolsError::Transport(message)
        })?;

        if status.as_u16() >= 400 {
            warn!(
                path = %request.path,
                status = status.as_u16(),
                body = %self.scrubber.scrub_value(&body, &credentials.api_key),
                "request rejected"
            );
            return Err(ToolsError::RemoteFailure {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        debug!(path = %request.path, status = status.as_u16(), bytes = body.len(), "request succeeded");
        Ok(ApiResponse::from_body(body))
    }
}

/// `reqwest` errors hide the useful part (DNS, TLS, refused) in their sources.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn creds() -> CredentialSet {
        CredentialSet::new("https://tools.example/", "https://manage.example", "key-123")
    }

    fn dispatcher() -> RequestDispatcher {
        RequestDispatcher::with_client(Client::new())
    }

    #[test]
    fn test_build_attaches_headers() {
        let request = dispatcher()
            .build(&creds(), &ApiRequest::get("/toolsapi/toolservice/toolslog"))
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://tools.example/toolsapi/toolservice/toolslog");
        assert_eq!(request.headers()[API_KEY_HEADER], "key-123");
        assert_eq!(request.headers()[ACCEPT], JSON_MEDIA_TYPE);
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_post_sets_content_type_and_body() {
        let api_request = ApiRequest::post("/maximo/api/service/logging").with_body(json!({"a": 1}));
        let request = dispatcher().build(&creds(), &api_request).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.headers()[CONTENT_TYPE], JSON_MEDIA_TYPE);
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"a":1}"#);
    }

    #[test]
    fn test_build_post_without_body() {
        let request = dispatcher()
            .build(&creds(), &ApiRequest::post("/toolsapi/toolservice/managestop"))
            .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], JSON_MEDIA_TYPE);
        assert!(request.body().is_none());
    }

    #[test]
    fn test_build_keeps_single_encoding() {
        let api_request = ApiRequest::get("/toolsapi/toolservice/toolslog")
            .with_query("logfile", "Validate Key (1) #2.log");
        let request = dispatcher().build(&creds(), &api_request).unwrap();
        assert_eq!(
            request.url().query(),
            Some("logfile=Validate%20Key%20%281%29%20%232.log")
        );
    }

    #[test]
    fn test_build_rejects_unknown_prefix() {
        let err = dispatcher()
            .build(&creds(), &ApiRequest::get("/api/other"))
            .unwrap_err();
        assert!(matches!(err, ToolsError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_build_rejects_unparseable_base() {
        let bad = CredentialSet::new("not a url", "https://m", "k");
        let err = dispatcher()
            .build(&bad, &ApiRequest::get("/toolsapi/x"))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolsError::InvalidUrl { field: crate::domain::models::CredentialField::ToolsUrl, .. }
        ));
    }
}
