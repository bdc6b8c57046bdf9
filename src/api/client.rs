use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::error::{ApiError, Operation};
use crate::model::{Book, BookId, NewBook};

/// Collection name on the store.
pub const COLLECTION: &str = "books";

/// Typed round trips against the `books` collection.
///
/// Each call is exactly one request: no retries, no caching. Cloning is
/// cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BookClient {
    http: Client,
    collection_url: Url,
}

impl BookClient {
    /// Client for `{base_url}/books`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut collection_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(collection_url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}'",
                collection_url.scheme()
            )));
        }
        collection_url
            .path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(COLLECTION);

        Ok(Self {
            http: Client::new(),
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &str {
        self.collection_url.as_str()
    }

    /// All records, in store order.
    pub async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_url.clone();
        let response = self
            .send(Operation::List, &url, self.http.get(url.clone()))
            .await?;
        decode(Operation::List, &url, response).await
    }

    /// One record. Any non-success status is reported as not found.
    pub async fn get_by_id(&self, id: &BookId) -> Result<Book, ApiError> {
        let url = self.record_url(id);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::request(Operation::Get, url.as_str(), e))?;

        let status = response.status();
        tracing::debug!(method = "GET", url = %url, status = status.as_u16(), "Request completed");
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Record not found");
            return Err(ApiError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        decode(Operation::Get, &url, response).await
    }

    /// Persist a new record; the returned record carries the store's id.
    pub async fn create(&self, draft: &NewBook) -> Result<Book, ApiError> {
        let url = self.collection_url.clone();
        let response = self
            .send(Operation::Create, &url, self.http.post(url.clone()).json(draft))
            .await?;
        decode(Operation::Create, &url, response).await
    }

    /// Replace the record stored under `id` with `record`.
    pub async fn update(&self, id: &BookId, record: &Book) -> Result<Book, ApiError> {
        let url = self.record_url(id);
        let response = self
            .send(Operation::Update, &url, self.http.put(url.clone()).json(record))
            .await?;
        decode(Operation::Update, &url, response).await
    }

    pub async fn delete(&self, id: &BookId) -> Result<(), ApiError> {
        let url = self.record_url(id);
        self.send(Operation::Delete, &url, self.http.delete(url.clone()))
            .await?;
        Ok(())
    }

    fn record_url(&self, id: &BookId) -> Url {
        let mut url = self.collection_url.clone();
        // Checked in `new`: http(s) URLs always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    async fn send(
        &self,
        operation: Operation,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = operation.method(), url = %url, error = %e, "Request failed");
            ApiError::request(operation, url.as_str(), e)
        })?;

        let status = response.status();
        tracing::debug!(
            method = operation.method(),
            url = %url,
            status = status.as_u16(),
            "Request completed"
        );

        if !status.is_success() {
            tracing::warn!(
                method = operation.method(),
                url = %url,
                status = status.as_u16(),
                "Store rejected request"
            );
            return Err(ApiError::status(operation, url.as_str(), status.as_u16()));
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(
    operation: Operation,
    url: &Url,
    response: Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::request(operation, url.as_str(), e))
}
