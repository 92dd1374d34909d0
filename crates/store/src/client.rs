//! HTTP client for the registrant store.
//!
//! [`HttpVisitorStore`] wraps the store's five REST endpoints using
//! [`reqwest`]. Screens talk to the [`VisitorStore`] trait instead of the
//! concrete client, so they can be driven by an in-memory fake in tests.

use async_trait::async_trait;

use regdesk_core::hall::Hall;

use crate::error::StoreError;
use crate::wire::{NewVisitor, VisitorPatch, VisitorRecord};

/// The registrant store as the screens see it.
///
/// One method per collaborator endpoint. Mutating calls return the store's
/// authoritative record so callers reconcile from the server response, never
/// from their local draft.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    /// `GET /visitors`
    async fn list_visitors(&self) -> Result<Vec<VisitorRecord>, StoreError>;

    /// `POST /visitors` -- returns the created record with its
    /// server-assigned id.
    async fn create_visitor(&self, visitor: &NewVisitor) -> Result<VisitorRecord, StoreError>;

    /// `PUT /visitors/{id}` -- returns the confirmed record.
    async fn update_visitor(
        &self,
        id: &str,
        patch: &VisitorPatch,
    ) -> Result<VisitorRecord, StoreError>;

    /// `DELETE /visitors/{id}`
    async fn delete_visitor(&self, id: &str) -> Result<(), StoreError>;

    /// `GET /halls`
    async fn list_halls(&self) -> Result<Vec<Hall>, StoreError>;
}

/// HTTP implementation of [`VisitorStore`].
pub struct HttpVisitorStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVisitorStore {
    /// Create a client for a store instance.
    ///
    /// * `base_url` - base HTTP URL without a trailing slash, e.g.
    ///   `http://host:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling or preconfigured timeouts).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the store.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`StoreError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Ensure success, then decode the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Ensure success, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl VisitorStore for HttpVisitorStore {
    async fn list_visitors(&self) -> Result<Vec<VisitorRecord>, StoreError> {
        let response = self
            .client
            .get(format!("{}/visitors", self.base_url))
            .send()
            .await?;

        let records: Vec<VisitorRecord> = Self::parse_response(response).await?;
        tracing::debug!(count = records.len(), "Fetched visitor list");
        Ok(records)
    }

    async fn create_visitor(&self, visitor: &NewVisitor) -> Result<VisitorRecord, StoreError> {
        let response = self
            .client
            .post(format!("{}/visitors", self.base_url))
            .json(visitor)
            .send()
            .await?;

        let record: VisitorRecord = Self::parse_response(response).await?;
        tracing::info!(visitor_id = %record.id, "Created visitor");
        Ok(record)
    }

    async fn update_visitor(
        &self,
        id: &str,
        patch: &VisitorPatch,
    ) -> Result<VisitorRecord, StoreError> {
        let response = self
            .client
            .put(format!("{}/visitors/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;

        let record: VisitorRecord = Self::parse_response(response).await?;
        tracing::info!(visitor_id = %record.id, hall = ?record.hall, "Updated visitor");
        Ok(record)
    }

    async fn delete_visitor(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/visitors/{id}", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(visitor_id = %id, "Deleted visitor");
        Ok(())
    }

    async fn list_halls(&self) -> Result<Vec<Hall>, StoreError> {
        let response = self
            .client
            .get(format!("{}/halls", self.base_url))
            .send()
            .await?;

        let halls: Vec<Hall> = Self::parse_response(response).await?;
        tracing::debug!(count = halls.len(), "Fetched hall list");
        Ok(halls)
    }
}
