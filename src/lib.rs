// src/lib.rs
//! notion-daily library: appends Markdown notes to a Notion daily-note page.
//!
//! # Public API
//!
//! - **Conversion**: `markdown::convert`, `parse_text_with_links`, `Block`, `RichSpan`
//! - **Resolution**: `PageResolver`, `DailyNoteQuery`, `DateMatch`, `candidate_days`
//! - **Workflow**: `DailyNotebook`, `AppendOutcome`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, request/response types
//! - **Errors and configuration**: `AppError`, `ValidationError`, `CommandLineInput`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod markdown;
pub mod model;
pub mod notebook;
pub mod resolver;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Domain Model ---
pub use crate::model::{Block, CandidateDay, PageReference, PageSummary, RichSpan};
pub use crate::types::{ApiKey, NotionId};

// --- Conversion ---
pub use crate::markdown::{convert, parse_text_with_links, render_spans};

// --- Resolution and Workflow ---
pub use crate::notebook::{AppendOutcome, DailyNotebook};
pub use crate::resolver::{candidate_days, DailyNoteQuery, DateMatch, PageResolver};

// --- API Client ---
pub use crate::api::{ApiResponse, NotionHttpClient, NotionRepository};
