//! Fetch-based HTTP transport
//!
//! Browser implementation of [`HttpTransport`] on `gloo-net`. `fetch` has no timeout of its
//! own, so the whole exchange (headers and body) is raced against a `gloo-timers` timeout.
//! A request that loses the race is not aborted; its response is simply never observed.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use lib_core::error::TransportError;
use lib_core::transport::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn post_json(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = Request::post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let pending = builder.body(request.body).map_err(classify)?;

        let exchange = async move {
            let response = pending.send().await.map_err(classify)?;
            let status = response.status();
            let body = response.text().await.map_err(classify);
            HttpResponse::from_body_read(status, body)
        };

        let timeout_ms = timeout_millis(request.timeout);
        let timer = TimeoutFuture::new(timeout_ms);
        futures::pin_mut!(exchange, timer);

        match select(exchange, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::warn!("No response from {} within {} ms", request.url, timeout_ms);
                Err(TransportError::NoResponse(format!(
                    "no response within {} ms",
                    timeout_ms
                )))
            }
        }
    }
}

/// `fetch` rejects with a JS `TypeError` when nothing comes back (offline, DNS, CORS),
/// which gloo-net surfaces as `JsError`. Everything else is a local failure.
fn classify(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) => TransportError::NoResponse(js.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}

fn timeout_millis(timeout: std::time::Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_secs(10)), 10_000);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 2)), u32::MAX);
    }

    #[test]
    fn test_non_js_errors_are_local_failures() {
        let err = classify(gloo_net::Error::GlooError("body already used".to_string()));
        assert!(matches!(err, TransportError::Other(_)));
    }
}
