// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results (API maximum).
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Maximum children accepted by one "append block children" request.
pub const NOTION_MAX_BLOCKS_PER_APPEND: usize = 100;

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Daily note conventions
// ---------------------------------------------------------------------------

/// Select property that marks a row as a daily note.
pub const DAILY_NOTE_CATEGORY_PROPERTY: &str = "topic";

/// Value of the category property on daily notes.
pub const DAILY_NOTE_CATEGORY: &str = "Daily Note";

/// Date property matched against the day being searched.
pub const DAILY_NOTE_DATE_PROPERTY: &str = "created";

/// Date format used by the exact-date strategy and in log messages.
pub const DAILY_NOTE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Day boundaries are taken in Asia/Hong_Kong, which is UTC+8 with no DST.
pub const DAILY_NOTE_UTC_OFFSET_SECS: i32 = 8 * 3600;

// ---------------------------------------------------------------------------
// Markdown conversion
// ---------------------------------------------------------------------------

/// Language given to code fences that do not name one.
pub const DEFAULT_CODE_LANGUAGE: &str = "typescript";
