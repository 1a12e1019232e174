//! Webhook client that posts formatted messages to zoom.us.

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;

use crate::config::WebhookConfig;
use crate::message::{Message, format_payload};

use super::{HttpClient, HttpRequest, ReqwestClient, WebhookError};

/// Header carrying the webhook verification token.
pub const ZOOM_TOKEN_HEADER: &str = "x-zoom-token";

/// Client for a single zoom.us incoming webhook.
///
/// Holds the parsed endpoint, the fixed request headers and the transport.
/// All of it is immutable after construction, so one client can serve any
/// number of concurrent [`send`](Self::send) calls.
///
/// The token header is marked sensitive, so it never shows up in `Debug`
/// output or logs.
///
/// # Example
///
/// ```no_run
/// use zoomus::{Message, WebhookClient};
///
/// # async fn example() -> Result<(), zoomus::WebhookError> {
/// let client = WebhookClient::new("https://inbots.zoom.us/incoming/hook/abc", "secret")?;
/// client.send(&Message::new("deploy", "v1.2.0", "rolled out")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H = ReqwestClient> {
    client: H,
    url: url::Url,
    headers: http::HeaderMap,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Config`] if either argument is empty, the
    /// URL is not an absolute http(s) URL, or the token is not a valid
    /// header value.
    pub fn new(webhook: &str, token: &str) -> Result<Self, WebhookError> {
        Self::with_client(ReqwestClient::new(), webhook, token)
    }

    /// Creates a client from a [`WebhookConfig`].
    ///
    /// A configured timeout is applied to the reqwest transport.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::new`]. A transport that cannot be
    /// initialized with the timeout is also reported as
    /// [`WebhookError::Config`].
    pub fn from_config(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let client = match config.timeout {
            Some(timeout) => ReqwestClient::with_timeout(timeout)
                .map_err(|e| WebhookError::config(e.to_string()))?,
            None => ReqwestClient::new(),
        };
        Self::with_client(client, &config.webhook_url, &config.token)
    }
}

impl<H> WebhookClient<H> {
    /// Creates a client around a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// See [`WebhookClient::new`].
    pub fn with_client(client: H, webhook: &str, token: &str) -> Result<Self, WebhookError> {
        if webhook.is_empty() {
            return Err(WebhookError::config("webhook url is missing"));
        }
        if token.is_empty() {
            return Err(WebhookError::config("token is missing"));
        }

        let url = url::Url::parse(webhook)
            .map_err(|e| WebhookError::config(format!("failed to parse url '{webhook}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebhookError::config(format!(
                "unsupported url scheme '{}'",
                url.scheme()
            )));
        }

        let mut token_value = HeaderValue::from_str(token)
            .map_err(|_| WebhookError::config("token is not a valid header value"))?;
        token_value.set_sensitive(true);

        let mut headers = http::HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static(ZOOM_TOKEN_HEADER), token_value);

        Ok(Self {
            client,
            url,
            headers,
        })
    }

    /// Returns the webhook endpoint.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Posts a message to the webhook.
    ///
    /// Performs exactly one request. Succeeds only on a 200 OK response;
    /// the response body is ignored.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Message`] if the message has an invalid action
    /// - [`WebhookError::Transport`] if the request fails on the wire
    /// - [`WebhookError::Remote`] if the webhook answers with any other status
    pub async fn send(&self, msg: &Message) -> Result<(), WebhookError> {
        let body = format_payload(msg)?;
        let request = HttpRequest::post(self.url.clone())
            .with_headers(&self.headers)
            .with_body(body);

        tracing::debug!(
            url = %self.url,
            bytes = request.body.as_ref().map_or(0, Vec::len),
            "Sending webhook message"
        );

        let response = self.client.request(request).await.map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "Webhook request failed");
            e
        })?;

        tracing::debug!(status = %response.status, "Checking webhook response status");

        if response.is_ok() {
            return Ok(());
        }

        tracing::warn!(
            url = %self.url,
            status = %response.status,
            body_bytes = response.body.len(),
            "Webhook rejected message"
        );

        Err(WebhookError::Remote {
            status: response.status,
            url: self.url.clone(),
        })
    }

    /// Posts a message, aborting if `cancel` fires first.
    ///
    /// An already-cancelled token prevents the request from being sent.
    /// Dropping the in-flight request aborts it.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Cancelled`] on cancellation, otherwise the
    /// same errors as [`send`](Self::send).
    pub async fn send_cancellable(
        &self,
        msg: &Message,
        cancel: &CancellationToken,
    ) -> Result<(), WebhookError> {
        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                tracing::info!(url = %self.url, "Webhook send cancelled");
                Err(WebhookError::Cancelled)
            }
            result = self.send(msg) => result,
        }
    }
}
