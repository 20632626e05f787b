//! Fixtures shared by the unit tests: an in-memory `HttpBackend` and review builders.

use std::cell::RefCell;
use std::collections::HashMap;

use common::model::category::Category;
use common::model::product::Product;
use common::model::review::Review;
use common::model::user::User;
use serde_json::Value;

use crate::api::{HttpBackend, HttpRequest, HttpResponse, Method, TransportError};

#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    Fail(TransportError),
    /// Never resolves.
    Hang,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Reply::Respond(HttpResponse::new(status, body.to_string()))
    }
}

/// Answers from a fixed routing table and records every request. Unknown
/// routes answer `404`.
#[derive(Debug, Default)]
pub struct FakeBackend {
    routes: HashMap<(Method, String), Reply>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: Method, url: &str, reply: Reply) -> Self {
        self.routes.insert((method, url.to_string()), reply);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpBackend for FakeBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        match self.routes.get(&(request.method, request.url.clone())) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(err)) => Err(err.clone()),
            Some(Reply::Hang) => futures::future::pending().await,
            None => Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#)),
        }
    }
}

/// Bare review with no associations.
pub fn review(id: i64, rating: u8) -> Review {
    Review {
        id,
        rating,
        comment: String::new(),
        user_id: 1,
        product_id: 1,
        user: None,
        product: None,
        date: None,
        likes: None,
        verified: None,
    }
}

pub fn with_likes(mut review: Review, likes: u32) -> Review {
    review.likes = Some(likes);
    review
}

pub fn with_comment(mut review: Review, comment: &str) -> Review {
    review.comment = comment.to_string();
    review
}

pub fn with_user(mut review: Review, id: i64, username: &str) -> Review {
    review.user_id = id;
    review.user = Some(User {
        id,
        username: username.to_string(),
        email: None,
        role: None,
    });
    review
}

pub fn with_product(
    mut review: Review,
    id: i64,
    name: &str,
    category: Option<(i64, &str)>,
) -> Review {
    review.product_id = id;
    review.product = Some(Product {
        id,
        name: name.to_string(),
        description: None,
        category_id: None,
        category: category.map(|(id, name)| Category {
            id,
            name: name.to_string(),
            description: None,
        }),
    });
    review
}

pub fn ids<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Vec<i64> {
    reviews.into_iter().map(|r| r.id).collect()
}
