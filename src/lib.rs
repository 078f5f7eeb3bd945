#![doc = include_str!("../README.md")]

mod artist;
mod book;
mod collection;
mod common;
mod entity;
mod envelope;
mod normalize;
mod playlist;
mod podcast;
mod profile;
mod queries;
mod release;
mod search;
mod stream;
mod track;

pub mod blocking;

pub use artist::*;
pub use book::*;
pub use collection::*;
pub use common::*;
pub use entity::Entity;
pub use playlist::*;
pub use podcast::*;
pub use profile::*;
pub use release::*;
pub use search::*;
pub use stream::*;
pub use track::*;

use arc_swap::ArcSwapOption;
use envelope::Envelope;
use normalize::normalize_value;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::{AsRefStr, EnumString};

pub(crate) static ZVUK_GRAPHQL_URL: &str = "https://zvuk.com/api/v1/graphql";
pub(crate) static ZVUK_TINY_API_URL: &str = "https://zvuk.com/api/tiny";

static DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
static DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when talking to the Zvuk API.
///
/// Transport failures, HTTP status classes, response-shape problems, and
/// GraphQL-level errors each map to their own variant, so callers can match
/// on what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    TimedOut,
    /// Connection-level failure, or an HTTP status with no better mapping
    #[error("Network error: {0}")]
    Network(String),
    /// The token was rejected (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// The server rejected the request as malformed (400)
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// The requested resource does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),
    /// The body could not be decoded as UTF-8 JSON
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
    /// The anti-bot layer served a challenge page instead of JSON
    #[error("Bot protection triggered: {0}")]
    BotDetected(String),
    /// The operation completed over HTTP but the GraphQL layer reported
    /// errors; the raw error objects are preserved alongside the joined
    /// message
    #[error("GraphQL error: {message}")]
    GraphQL { message: String, errors: Vec<Value> },
    /// The requested audio quality needs a paid subscription
    #[error("Subscription required: {0}")]
    SubscriptionRequired(String),
    /// The requested audio quality does not exist for this item
    #[error("Quality not available: {0}")]
    QualityUnavailable(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::TimedOut
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl Error {
    pub(crate) fn graphql(errors: Vec<Value>) -> Self {
        let message = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; ");
        let message = if message.is_empty() {
            "GraphQL request failed".to_string()
        } else {
            message
        };
        Error::GraphQL { message, errors }
    }
}

/// Sort field for collection listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum OrderBy {
    #[strum(serialize = "alphabet")]
    Alphabet,
    #[strum(serialize = "artist")]
    Artist,
    #[strum(serialize = "dateAdded")]
    DateAdded,
}

/// Sort direction for collection listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
pub enum OrderDirection {
    #[strum(serialize = "asc")]
    Asc,
    #[strum(serialize = "desc")]
    Desc,
}

/// Client for the Zvuk music-streaming API.
///
/// Authenticates every request with an `X-Auth-Token` header. The token can
/// be a registered user's token (copy it from `https://zvuk.com/api/tiny/profile`
/// while logged in) or an anonymous one from [`ZvukClient::anonymous`],
/// which gets mid-quality streaming only and no collection access.
///
/// # Example
///
/// ```no_run
/// use zvukrs::ZvukClient;
///
/// # async fn example() -> Result<(), zvukrs::Error> {
/// let client = ZvukClient::new("your_token");
/// let tracks = client.tracks(&["128672726"]).await?;
/// for track in tracks {
///     println!("{} — {}", track.artists_str(), track.title);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Thread safety
///
/// The client is `Send + Sync`; the token can be swapped at runtime with
/// [`ZvukClient::set_token`] without exclusive access.
pub struct ZvukClient {
    pub client: reqwest::Client,
    token: ArcSwapOption<String>,
    user_agent: String,
    timeout: Duration,
}

impl ZvukClient {
    /// Create a client with the given auth token. An empty token leaves
    /// the client unauthenticated.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            client: reqwest::Client::new(),
            token: if token.is_empty() {
                ArcSwapOption::from(None)
            } else {
                ArcSwapOption::from_pointee(token)
            },
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client with a freshly issued anonymous token.
    ///
    /// Anonymous sessions are limited: mid quality (128kbps) only, no
    /// collection access, no likes.
    pub async fn anonymous() -> Result<Self, Error> {
        let client = Self::new("");
        let token = client
            .profile()
            .await?
            .and_then(|profile| profile.result)
            .map(|result| result.token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                Error::MalformedResponse("Profile response carried no token".to_string())
            })?;
        client.set_token(&token);
        Ok(client)
    }

    /// Set a custom HTTP client using the builder pattern.
    ///
    /// Useful for proxies or other connection-level settings.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Set the User-Agent sent with every request using the builder
    /// pattern. Changing it can help when the anti-bot layer starts
    /// rejecting the default.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout using the builder pattern. Defaults to
    /// ten seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the auth token. Takes effect for all subsequent requests,
    /// including those from other threads.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            self.token.store(None);
        } else {
            self.token.store(Some(Arc::new(token.to_string())));
        }
    }

    /// The current auth token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.load_full().map(|token| (*token).clone())
    }

    /// Execute a GraphQL operation and return its normalized result object.
    pub(crate) async fn graphql(
        &self,
        operation_name: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, Error> {
        let payload = serde_json::json!({
            "query": document,
            "operationName": operation_name,
            "variables": variables,
        });

        let body = self.request(self.client.post(ZVUK_GRAPHQL_URL).json(&payload)).await?;

        let envelope = parse_body(&body)?;
        let Some(envelope) = envelope else {
            return Ok(Value::Null);
        };

        if envelope.has_errors() {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("GraphQL operation {operation_name} failed:");
                for message in envelope.error_messages() {
                    log::debug!("  {message}");
                }
            }
            return Err(Error::graphql(envelope.errors));
        }

        let result = envelope.result.unwrap_or(Value::Null);

        if log::log_enabled!(log::Level::Trace) {
            let pretty = serde_json::to_string_pretty(&result).unwrap_or_default();
            log::trace!("GraphQL operation {operation_name} result:");
            log::trace!("{pretty}");
        }

        Ok(result)
    }

    /// GET a path of the tiny REST API and return the normalized body.
    pub(crate) async fn tiny_get(&self, path: &str) -> Result<Value, Error> {
        let url = format!("{ZVUK_TINY_API_URL}/{path}");
        let body = self.request(self.client.get(&url)).await?;

        let result = parse_body(&body)?
            .and_then(|envelope| envelope.result)
            .unwrap_or(Value::Null);

        if log::log_enabled!(log::Level::Trace) {
            let pretty = serde_json::to_string_pretty(&result).unwrap_or_default();
            log::trace!("GET {url} result:");
            log::trace!("{pretty}");
        }

        Ok(result)
    }

    /// Attach the session headers, send, and map non-2xx statuses to
    /// errors. Returns the raw body bytes of successful responses.
    async fn request(&self, req: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
        let mut req = req
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
            .header(
                reqwest::header::ACCEPT_LANGUAGE,
                "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7",
            )
            .header(reqwest::header::REFERER, "https://zvuk.com/")
            .header(reqwest::header::ORIGIN, "https://zvuk.com")
            .timeout(self.timeout);

        if let Some(token) = self.token.load_full() {
            req = req.header("X-Auth-Token", token.as_str());
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(status_error(status, &body))
        }
    }
}

/// Decode a response body into a normalized [`Envelope`].
///
/// Rejects non-UTF-8 bodies, anti-bot challenge pages, and non-JSON text
/// before key normalization runs.
pub(crate) fn parse_body(body: &[u8]) -> Result<Option<Envelope>, Error> {
    let text = std::str::from_utf8(body).map_err(|_| {
        log::debug!("raw invalid UTF-8 response: {body:?}");
        Error::MalformedResponse("Server response could not be decoded using UTF-8".to_string())
    })?;

    let lower = text.to_lowercase();
    let head: String = lower.chars().take(100).collect();
    if lower.contains("bot activity") || head.contains("<html") {
        return Err(Error::BotDetected(
            "API detected bot activity. Try using a different User-Agent.".to_string(),
        ));
    }

    let mut value: Value = serde_json::from_str(text)
        .map_err(|_| Error::MalformedResponse("Invalid server response (not JSON)".to_string()))?;

    normalize_value(&mut value);

    Ok(Envelope::from_value(&value))
}

/// Map a non-2xx status to an error, pulling the message out of the body
/// when it parses.
pub(crate) fn status_error(status: reqwest::StatusCode, body: &[u8]) -> Error {
    let message = match parse_body(body) {
        Ok(Some(envelope)) => envelope.first_error_message(),
        Ok(None) => "Unknown error".to_string(),
        Err(_) => "Unknown HTTPError".to_string(),
    };

    match status.as_u16() {
        401 | 403 => Error::Unauthorized(message),
        400 => Error::BadRequest(message),
        404 => Error::NotFound(message),
        409 | 413 => Error::Network(message),
        502 => Error::Network("Bad Gateway".to_string()),
        code => Error::Network(format!("{message} ({code})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_graphql_message() {
        let body = br#"{"data": null, "errors": [{"message": "Not found"}]}"#;
        let err = status_error(reqwest::StatusCode::NOT_FOUND, body);
        assert!(matches!(err, Error::NotFound(message) if message == "Not found"));
    }

    #[test]
    fn html_challenge_page_is_bot_detected() {
        let body = b"<html><head><title>Checking your browser</title></head></html>";
        assert!(matches!(parse_body(body), Err(Error::BotDetected(_))));

        let err = status_error(reqwest::StatusCode::FORBIDDEN, body);
        assert!(matches!(err, Error::Unauthorized(message) if message == "Unknown HTTPError"));
    }

    #[test]
    fn bot_activity_text_is_bot_detected() {
        let body = br#"{"error": "Suspicious bot activity detected"}"#;
        assert!(matches!(parse_body(body), Err(Error::BotDetected(_))));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_body(b"not json at all"),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_body(&[0xff, 0xfe, 0x00]),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_object_body_is_no_envelope() {
        assert!(parse_body(b"{}").unwrap().is_none());
    }

    #[test]
    fn success_body_is_normalized() {
        let body = br#"{"data": {"getTracks": [{"id": "1", "hasFlac": true}]}}"#;
        let envelope = parse_body(body).unwrap().unwrap();
        let result = envelope.result.unwrap();
        let track = &result["get_tracks"][0];
        assert_eq!(track["has_flac"], serde_json::json!(true));
    }

    #[test]
    fn graphql_messages_are_joined() {
        let errors = vec![
            serde_json::json!({"message": "first"}),
            serde_json::json!({"message": "second"}),
            serde_json::json!({"path": ["no", "message"]}),
        ];
        let err = Error::graphql(errors);
        match err {
            Error::GraphQL { message, errors } => {
                assert_eq!(message, "first; second");
                assert_eq!(errors.len(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn graphql_without_messages_gets_a_fallback() {
        let err = Error::graphql(vec![serde_json::json!({"code": 500})]);
        assert!(matches!(
            err,
            Error::GraphQL { message, .. } if message == "GraphQL request failed"
        ));
    }

    #[test]
    fn order_enums_serialize_to_wire_names() {
        assert_eq!(OrderBy::DateAdded.as_ref(), "dateAdded");
        assert_eq!(OrderBy::Alphabet.as_ref(), "alphabet");
        assert_eq!(OrderDirection::Desc.as_ref(), "desc");
    }
}
