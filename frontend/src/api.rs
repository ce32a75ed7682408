//! HTTP client for the remote bookings API.
//!
//! Endpoints
//! - `GET  <base>`                  full listing
//! - `GET  <base>/search?<f>=<v>`   filtered listing
//! - `POST <base>`                  create from a `BookingDraft`

use std::fmt;

use common::model::booking::{Booking, BookingDraft};
use common::requests::{render_error_body, SearchRequest, UNEXPECTED_LISTING};
use gloo_net::http::{Request, Response};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete (offline, CORS, DNS...).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// The body could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) | ApiError::Decode(message) => f.write_str(message),
            ApiError::Status { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Booking>, ApiError> {
        debug!("GET {}", self.base);
        let resp = Request::get(&self.base).send().await?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                message: UNEXPECTED_LISTING.to_string(),
            });
        }
        Ok(resp.json::<Vec<Booking>>().await?)
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Booking>, ApiError> {
        let url = format!("{}/search", self.base);
        let (field, value) = request.query_pair();
        debug!("GET {}?{}={}", url, field, value);
        let resp = Request::get(&url).query([(field, value)]).send().await?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(resp.json::<Vec<Booking>>().await?)
    }

    /// Only the status decides success; the body of a 2xx answer is ignored.
    pub async fn create(&self, draft: &BookingDraft) -> Result<(), ApiError> {
        debug!("POST {}", self.base);
        let resp = Request::post(&self.base).json(draft)?.send().await?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
}

async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: render_error_body(status, &resp.status_text(), &body),
    }
}
