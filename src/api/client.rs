// src/api/client.rs
//! Thin reqwest wrapper for the Notion API.
//!
//! Handles authentication headers and request logging; parsing lives in
//! `parser`, and the `NotionRepository` impl at the bottom ties the two
//! together. No retries: every failure is returned to the caller as-is.

use super::batching::send_in_batches;
use super::pagination::fetch_all_pages;
use super::parser::parse_api_response;
use super::types::{AppendChildren, DatabaseQuery, PagedQuery, PaginatedResponse};
use crate::constants::{NOTION_API_BASE_URL, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{Block, PageSummary};
use crate::types::{ApiKey, NotionId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to `endpoint` (path without base URL).
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response, AppError> {
        let url = format!("{}/{}", NOTION_API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).query(query).send().await?)
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", NOTION_API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "   Body: {}",
                serde_json::to_string_pretty(body)
                    .unwrap_or_else(|_| "Failed to serialize".to_string())
            );
        }

        let response = self.client.post(url).json(body).send().await?;
        log::debug!("POST {} -> {}", endpoint, response.status());
        Ok(response)
    }

    /// Makes a PATCH request with a JSON body.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", NOTION_API_BASE_URL, endpoint);
        log::debug!("PATCH {}", url);

        let response = self.client.patch(url).json(body).send().await?;
        log::debug!("PATCH {} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(
        &self,
        database: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Vec<PageSummary>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        fetch_all_pages(
            |page_size, start_cursor| {
                let endpoint = endpoint.clone();
                async move {
                    let body = PagedQuery {
                        query,
                        page_size,
                        start_cursor,
                    };
                    let response = self.post(&endpoint, &body).await?;
                    let result = extract_response_text(response).await?;
                    parse_api_response::<PaginatedResponse<PageSummary>>(result)
                }
            },
            None,
        )
        .await
    }

    async fn append_children(&self, parent: &NotionId, children: &[Block]) -> Result<(), AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let endpoint = &endpoint;

        let requests = send_in_batches(children, |batch| async move {
            let response = self
                .patch(endpoint, &AppendChildren { children: batch })
                .await?;
            let result = extract_response_text(response).await?;
            parse_api_response::<serde_json::Value>(result).map(|_| ())
        })
        .await?;

        log::debug!(
            "Appended {} blocks to {} in {} request(s)",
            children.len(),
            parent,
            requests
        );
        Ok(())
    }

    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<serde_json::Value>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        fetch_all_pages(
            |page_size, start_cursor| {
                let endpoint = endpoint.clone();
                async move {
                    let mut query = vec![("page_size", page_size.to_string())];
                    if let Some(cursor) = start_cursor {
                        query.push(("start_cursor", cursor));
                    }
                    let response = self.get(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    parse_api_response::<PaginatedResponse<serde_json::Value>>(result)
                }
            },
            None,
        )
        .await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
