// src/api/batching.rs
//! Splitting block appends into requests Notion will accept.

use crate::constants::NOTION_MAX_BLOCKS_PER_APPEND;
use crate::error::AppError;
use crate::model::Block;

/// Sends `children` through `send_fn` in order, at most
/// `NOTION_MAX_BLOCKS_PER_APPEND` blocks per call, and returns how many
/// calls were made.
///
/// An empty slice is still sent once. The first failing call stops the loop;
/// batches sent before it stay applied.
pub async fn send_in_batches<'a, F, Fut>(
    children: &'a [Block],
    mut send_fn: F,
) -> Result<usize, AppError>
where
    F: FnMut(&'a [Block]) -> Fut,
    Fut: std::future::Future<Output = Result<(), AppError>>,
{
    if children.is_empty() {
        send_fn(children).await?;
        return Ok(1);
    }

    let mut sent = 0;
    for batch in children.chunks(NOTION_MAX_BLOCKS_PER_APPEND) {
        log::debug!("Sending batch {} ({} blocks)", sent + 1, batch.len());
        send_fn(batch).await?;
        sent += 1;
    }

    Ok(sent)
}
