use std::fmt;
use std::future::Future;
use std::pin::pin;

use common::model::category::Category;
use common::model::product::Product;
use common::model::review::Review;
use common::model::user::User;
use common::requests::ReviewDraft;
use futures::future::{self, Either};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::config::ApiConfig;
use super::error::TransportError;

pub const CATEGORIES_PATH: &str = "/categories/";
pub const PRODUCTS_PATH: &str = "/products/";
pub const USERS_PATH: &str = "/users/";
pub const REVIEWS_PATH: &str = "/reviews/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
        })
    }
}

/// A fully resolved request handed to an [`HttpBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP exchange.
///
/// Implementations report network failures as [`TransportError::Network`] and
/// return every HTTP response as-is, whatever its status. Dropping the returned
/// future must abandon the request; this is how cancellation reaches the wire.
#[allow(async_fn_in_trait)]
pub trait HttpBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// JSON client for the reviews service.
#[derive(Debug, Clone)]
pub struct ApiClient<B> {
    config: ApiConfig,
    backend: B,
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn new(config: ApiConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn get(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<Value, TransportError> {
        self.send(Method::Get, path, None, cancel).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Value,
        cancel: &CancellationToken,
    ) -> Result<Value, TransportError> {
        self.send(Method::Post, path, Some(body), cancel).await
    }

    pub async fn categories(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Category>, TransportError> {
        decode(self.get(CATEGORIES_PATH, cancel).await?)
    }

    pub async fn products(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Product>, TransportError> {
        decode(self.get(PRODUCTS_PATH, cancel).await?)
    }

    pub async fn users(&self, cancel: &CancellationToken) -> Result<Vec<User>, TransportError> {
        decode(self.get(USERS_PATH, cancel).await?)
    }

    pub async fn reviews(&self, cancel: &CancellationToken) -> Result<Vec<Review>, TransportError> {
        decode(self.get(REVIEWS_PATH, cancel).await?)
    }

    /// Creates a review. The service answers with the stored review,
    /// associations included.
    pub async fn create_review(
        &self,
        draft: &ReviewDraft,
        cancel: &CancellationToken,
    ) -> Result<Review, TransportError> {
        let body = serde_json::to_value(draft).map_err(|e| TransportError::Encode(e.to_string()))?;
        decode(self.post(REVIEWS_PATH, body, cancel).await?)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        cancel: &CancellationToken,
    ) -> Result<Value, TransportError> {
        let request = HttpRequest {
            method,
            url: self.config.resolve(path),
            body,
        };

        let result = cancellable(cancel, async {
            let response = self.backend.execute(request).await?;
            if !response.is_success() {
                return Err(TransportError::Status {
                    status: response.status,
                });
            }
            serde_json::from_str::<Value>(&response.body)
                .map_err(|e| TransportError::Decode(e.to_string()))
        })
        .await;

        match &result {
            Err(TransportError::Cancelled) => debug!("{} {} cancelled", method, path),
            Err(err) => error!("Error on {} {}: {}", method, path, err),
            Ok(_) => debug!("{} {} ok", method, path),
        }
        result
    }
}

/// Runs `fut` unless `cancel` fires first, in which case `fut` is dropped.
pub(crate) async fn cancellable<T, F>(
    cancel: &CancellationToken,
    fut: F,
) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
{
    if cancel.is_cancelled() {
        return Err(TransportError::Cancelled);
    }
    let cancelled = pin!(cancel.cancelled());
    let fut = pin!(fut);
    match future::select(cancelled, fut).await {
        Either::Left(_) => Err(TransportError::Cancelled),
        Either::Right((result, _)) => result,
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, Reply};
    use futures::executor::block_on;
    use serde_json::json;

    fn client(backend: FakeBackend) -> ApiClient<FakeBackend> {
        ApiClient::new(ApiConfig::new("http://svc"), backend)
    }

    #[test]
    fn get_resolves_path_and_parses_json() {
        let backend = FakeBackend::new().route(
            Method::Get,
            "http://svc/categories/",
            Reply::json(200, json!([{ "id": 1, "name": "Ruta" }])),
        );
        let client = client(backend);

        let categories = block_on(client.categories(&CancellationToken::new())).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Ruta");
        assert_eq!(client.backend().requests()[0].url, "http://svc/categories/");
    }

    #[test]
    fn non_success_status_is_a_transport_error() {
        let backend = FakeBackend::new().route(
            Method::Get,
            "http://svc/users/",
            Reply::json(500, json!({ "detail": "boom" })),
        );
        let err = block_on(client(backend).users(&CancellationToken::new())).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn network_failure_is_propagated_unchanged() {
        let backend = FakeBackend::new().route(
            Method::Get,
            "http://svc/products/",
            Reply::Fail(TransportError::Network("connection refused".into())),
        );
        let err = block_on(client(backend).products(&CancellationToken::new())).unwrap_err();
        assert_eq!(err, TransportError::Network("connection refused".into()));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let backend = FakeBackend::new().route(
            Method::Get,
            "http://svc/reviews/",
            Reply::Respond(HttpResponse::new(200, "<html>")),
        );
        let err = block_on(client(backend).reviews(&CancellationToken::new())).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn post_sends_draft_as_json_body() {
        let backend = FakeBackend::new().route(
            Method::Post,
            "http://svc/reviews/",
            Reply::json(
                201,
                json!({ "id": 11, "rating": 4, "comment": "Great", "user_id": 2, "product_id": 5 }),
            ),
        );
        let client = client(backend);
        let draft = ReviewDraft {
            rating: 4,
            comment: "Great".into(),
            user_id: 2,
            product_id: 5,
        };

        let review = block_on(client.create_review(&draft, &CancellationToken::new())).unwrap();

        assert_eq!(review.id, 11);
        let sent = &client.backend().requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body, Some(serde_json::to_value(&draft).unwrap()));
    }

    #[test]
    fn cancelled_token_short_circuits_before_sending() {
        let client = client(FakeBackend::new());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = block_on(client.get(REVIEWS_PATH, &cancel)).unwrap_err();

        assert!(err.is_cancelled());
        assert!(client.backend().requests().is_empty());
    }

    #[test]
    fn cancelling_abandons_a_hanging_request() {
        let backend = FakeBackend::new().route(Method::Get, "http://svc/reviews/", Reply::Hang);
        let client = client(backend);
        let cancel = CancellationToken::new();

        let result = block_on(async {
            let request = client.get(REVIEWS_PATH, &cancel);
            let trigger = async {
                cancel.cancel();
                Ok::<_, TransportError>(Value::Null)
            };
            futures::join!(request, trigger).0
        });

        assert_eq!(result, Err(TransportError::Cancelled));
    }
}
