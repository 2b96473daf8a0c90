// src/api/mod.rs
//! Notion API interaction: the document-store operations the workflows need.

mod batching;
pub mod client;
mod pagination;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::model::{Block, PageSummary};
use crate::types::NotionId;
use types::DatabaseQuery;

/// The document-store operations used by the resolver and the notebook.
///
/// Business logic depends on this trait, never on HTTP details; tests
/// substitute an in-memory implementation.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Returns every row of `database` matching `query`, in the order the API sorted them.
    async fn query_database(
        &self,
        database: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Vec<PageSummary>, AppError>;

    /// Appends `children` to the end of the page or block `parent`.
    ///
    /// Notion takes at most 100 children per request, so longer slices are
    /// sent as consecutive requests. If one of them fails, the blocks from
    /// earlier requests remain on the page.
    async fn append_children(&self, parent: &NotionId, children: &[Block]) -> Result<(), AppError>;

    /// Lists every child block of `parent`, following pagination cursors.
    async fn retrieve_children(&self, parent: &NotionId) -> Result<Vec<serde_json::Value>, AppError>;
}

pub use batching::send_in_batches;
pub use client::{ApiResponse, NotionHttpClient};
pub use pagination::fetch_all_pages;
