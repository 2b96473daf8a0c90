// src/notebook.rs
//! The append workflow: resolve the daily page, convert, submit.

use crate::api::NotionRepository;
use crate::error::AppError;
use crate::markdown;
use crate::model::PageReference;
use crate::resolver::{DailyNoteQuery, PageResolver};
use crate::types::NotionId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// What happened to an append request.
#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    Appended {
        page: PageReference,
        block_count: usize,
    },
    /// Neither today's nor yesterday's daily note exists; nothing was sent.
    NoDailyPage,
}

/// Appends Markdown notes to the current daily page.
///
/// Pages are only ever looked up, never created: with no daily note for
/// today or yesterday the append is skipped.
pub struct DailyNotebook {
    repository: Arc<dyn NotionRepository>,
    query: DailyNoteQuery,
}

impl DailyNotebook {
    pub fn new(repository: Arc<dyn NotionRepository>, query: DailyNoteQuery) -> Self {
        Self { repository, query }
    }

    /// Resolves the daily page as of `now` without writing anything.
    pub async fn resolve(&self, now: DateTime<Utc>) -> Result<Option<PageReference>, AppError> {
        PageResolver::new(self.repository.as_ref(), &self.query)
            .resolve_at(now)
            .await
    }

    /// Appends `content` to the daily page for `now`.
    pub async fn append(&self, content: &str, now: DateTime<Utc>) -> Result<AppendOutcome, AppError> {
        let Some(page) = self.resolve(now).await? else {
            return Ok(AppendOutcome::NoDailyPage);
        };

        let blocks = markdown::convert(content);
        log::info!("Appending {} blocks to page {}", blocks.len(), page.id);
        self.repository.append_children(&page.id, &blocks).await?;
        log::info!("Successfully appended blocks to page");

        Ok(AppendOutcome::Appended {
            page,
            block_count: blocks.len(),
        })
    }
}

/// All child blocks currently on `page`, as returned by the API.
pub async fn page_blocks(
    repository: &dyn NotionRepository,
    page: &NotionId,
) -> Result<Vec<serde_json::Value>, AppError> {
    log::info!("Fetching blocks for page: {}", page);
    let blocks = repository.retrieve_children(page).await?;
    log::info!("Finished fetching all blocks, total count: {}", blocks.len());
    Ok(blocks)
}
