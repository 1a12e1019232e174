//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn hook_url() -> url::Url {
    url::Url::parse("https://example.com/hook").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn post_creates_empty_post_request() {
        let req = HttpRequest::post(hook_url());

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.url, hook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::post(hook_url()).with_body(b"{}".to_vec());
        assert_eq!(req.body, Some(b"{}".to_vec()));
    }

    #[test]
    fn with_headers_copies_all_entries() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert("x-zoom-token", http::HeaderValue::from_static("t"));

        let req = HttpRequest::post(hook_url()).with_headers(&headers);

        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.headers["x-zoom-token"], "t");
    }

    #[test]
    fn with_headers_keeps_existing_values() {
        let mut first = http::HeaderMap::new();
        first.insert(http::header::ACCEPT, http::HeaderValue::from_static("text/html"));
        let mut second = http::HeaderMap::new();
        second.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );

        let req = HttpRequest::post(hook_url())
            .with_headers(&first)
            .with_headers(&second);

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    fn response(status: http::StatusCode, body: &[u8]) -> HttpResponse {
        HttpResponse::new(status, http::HeaderMap::new(), body.to_vec())
    }

    #[test]
    fn is_ok_only_for_200() {
        assert!(response(http::StatusCode::OK, b"").is_ok());

        for status in [
            http::StatusCode::CREATED,
            http::StatusCode::ACCEPTED,
            http::StatusCode::NO_CONTENT,
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::UNAUTHORIZED,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            assert!(!response(status, b"").is_ok(), "Expected {status} to not be ok");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        assert_eq!(
            response(http::StatusCode::OK, b"accepted").body_text(),
            Some("accepted")
        );
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        assert!(response(http::StatusCode::OK, &[0xFF, 0xFE]).body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.source().unwrap().to_string().contains("refused"));
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn invalid_request_displays_reason() {
        let error = HttpError::InvalidRequest("bad header".to_string());

        assert!(error.to_string().contains("Invalid request"));
        assert!(error.to_string().contains("bad header"));
        assert!(error.source().is_none());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod arc_client {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    impl HttpClient for CountingClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpResponse::new(
                http::StatusCode::OK,
                http::HeaderMap::new(),
                vec![],
            ))
        }
    }

    #[tokio::test]
    async fn shared_client_delegates_to_inner() {
        let inner = Arc::new(CountingClient::default());
        let shared = Arc::clone(&inner);

        shared.request(HttpRequest::post(hook_url())).await.unwrap();
        shared.request(HttpRequest::post(hook_url())).await.unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
