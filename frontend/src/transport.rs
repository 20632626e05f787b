//! `HttpBackend` over the browser `fetch` API.

use gloo_net::http::Request;
use viewmodel::api::{HttpBackend, HttpRequest, HttpResponse, Method, TransportError};
use web_sys::AbortController;

/// Aborts the underlying fetch if the request future is dropped before the
/// response body has been read, e.g. when the page cancels its loads.
struct AbortOnDrop(Option<AbortController>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if let Some(controller) = self.0.take() {
            controller.abort();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooBackend;

impl HttpBackend for GlooBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);
        let mut guard = AbortOnDrop(controller);

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .abort_signal(signal.as_ref());

        let response = match &request.body {
            Some(body) => builder.json(body).map_err(network)?.send().await,
            None => builder.send().await,
        }
        .map_err(network)?;

        let status = response.status();
        let body = response.text().await.map_err(network)?;
        guard.0 = None;
        Ok(HttpResponse::new(status, body))
    }
}

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::Network(err.to_string())
}
