//! Shared REST client for the school backend.
//!
//! Owns the reqwest client, the base URL and outbound decoration: every
//! request except login and refresh carries the current bearer token. Response
//! bodies wrapped in the backend's `{success, data}` envelope are unwrapped
//! before reaching a gateway, and failures are classified into [`ApiError`].

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ApiEnvelope;
use crate::error::{ApiError, FieldError, Result};
use crate::port::{ApiResult, TokenSource};

/// Paths that must never carry the ambient access token.
const UNAUTHENTICATED_PATHS: [&str; 2] = ["/api/auth/login", "/api/auth/refresh"];

/// Which bearer token, if any, a request carries.
#[derive(Debug, Clone, Copy)]
pub enum Bearer<'a> {
    /// The token from the configured [`TokenSource`].
    Ambient,
    /// A token supplied by the caller.
    Explicit(&'a str),
}

/// HTTP client for the school REST API.
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g., `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
            tokens: None,
        })
    }

    /// Attach the source of the ambient bearer token.
    #[must_use]
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.call::<(), T>(Method::GET, path, query, None, Bearer::Ambient)
            .await
    }

    /// Send a request with an optional JSON body and decode a JSON resource.
    pub async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        bearer: Bearer<'_>,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.execute(method, path, query, body, bearer).await?;
        decode_body(&text)
    }

    /// Send a state-transition request and return its opaque confirmation.
    pub async fn confirm(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        bearer: Bearer<'_>,
    ) -> ApiResult<String> {
        let text = self
            .execute::<()>(method, path, query, None, bearer)
            .await?;
        Ok(decode_confirmation(&text))
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        bearer: Bearer<'_>,
    ) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request = self.decorate(request, path, bearer);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            debug!(method = %method, url = %url, status = status.as_u16(), "Request succeeded");
            Ok(text)
        } else {
            let err = error_from_response(status.as_u16(), &text);
            warn!(method = %method, url = %url, status = status.as_u16(), error = %err, "Request failed");
            Err(err)
        }
    }

    fn decorate(&self, request: RequestBuilder, path: &str, bearer: Bearer<'_>) -> RequestBuilder {
        match bearer {
            Bearer::Explicit(token) => request.bearer_auth(token),
            Bearer::Ambient if is_unauthenticated(path) => request,
            Bearer::Ambient => match self.tokens.as_ref().and_then(|t| t.access_token()) {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
        }
    }
}

/// Whether a path is exempt from ambient bearer decoration.
#[must_use]
pub fn is_unauthenticated(path: &str) -> bool {
    UNAUTHENTICATED_PATHS.iter().any(|p| path.contains(p))
}

/// Strip the `{success, data}` envelope if present.
#[must_use]
pub fn unwrap_envelope(value: Value) -> Value {
    let is_envelope = value.get("success").is_some() && value.get("data").is_some();
    if !is_envelope {
        return value;
    }
    match serde_json::from_value::<ApiEnvelope<Value>>(value) {
        Ok(envelope) => envelope.data.unwrap_or(Value::Null),
        Err(_) => Value::Null,
    }
}

/// Decode a success body, unwrapping the envelope first.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let value: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a confirmation body.
///
/// Accepts a JSON string, an envelope whose data or message is text, or raw
/// text. Never fails; the value is informational only.
#[must_use]
pub fn decode_confirmation(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(value) if value.get("success").is_some() => {
            match serde_json::from_value::<ApiEnvelope<Value>>(value) {
                Ok(envelope) => match envelope.data {
                    Some(Value::String(text)) => text,
                    _ => envelope.message.unwrap_or_default(),
                },
                Err(_) => String::new(),
            }
        }
        Ok(value) => value.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
}

/// Classify a non-2xx response.
#[must_use]
pub fn error_from_response(status: u16, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed.as_ref().and_then(|b| b.message.clone());
    let errors = parsed
        .and_then(|b| b.errors)
        .map(field_errors)
        .unwrap_or_default();

    if status == 400 && !errors.is_empty() {
        ApiError::Validation { message, errors }
    } else {
        ApiError::Http { status, message }
    }
}

/// Percent-encode a value for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn field_errors(value: Value) -> Vec<FieldError> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(field, message)| FieldError {
                field,
                message: match message {
                    Value::String(text) => text,
                    other => other.to_string(),
                },
            })
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| {
                let field = item.get("field")?.as_str()?.to_string();
                let message = item.get("message")?.as_str()?.to_string();
                Some(FieldError { field, message })
            })
            .collect(),
        _ => Vec::new(),
    }
}
