// src/api/pagination.rs
//! Cursor pagination over Notion list endpoints.

use super::types::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Calls `fetch_fn` with successive cursors until the API reports no more
/// results (or `max_pages` is reached) and returns everything collected.
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    max_pages: Option<u32>,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::debug!("Reached maximum page limit: {}", max);
                break;
            }
        }

        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor).await?;
        pages_fetched += 1;
        log::debug!(
            "Retrieved {} results in page {}",
            response.results.len(),
            pages_fetched
        );

        all_items.extend(response.results);
        cursor = response.next_cursor;

        if !response.has_more || cursor.is_none() {
            break;
        }
    }

    Ok(all_items)
}
