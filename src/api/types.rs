// src/api/types.rs
//! Request and response shapes for the Notion endpoints this crate calls.

use crate::model::Block;
use serde::{Deserialize, Serialize};

// --- Database query ---

/// Body of a `databases/{id}/query` request, minus pagination fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseQuery {
    pub filter: Filter,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

/// A query filter: a single property condition or a conjunction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Filter {
    And { and: Vec<Filter> },
    Property(PropertyFilter),
}

impl Filter {
    pub fn property(property: impl Into<String>, condition: Condition) -> Self {
        Filter::Property(PropertyFilter {
            property: property.into(),
            condition,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    #[serde(flatten)]
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Select { equals: String },
    Date(DateCondition),
}

/// Date comparisons; values are ISO 8601 dates or date-times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    Equals(String),
    OnOrAfter(String),
    Before(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sort {
    pub timestamp: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Most recently created rows first.
    pub fn newest_first() -> Self {
        Self {
            timestamp: "created_time".to_string(),
            direction: SortDirection::Descending,
        }
    }
}

/// Sort order of a query; the resolver only ever wants the newest rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Descending,
}

/// What is actually posted: the query plus the pagination cursor.
#[derive(Debug, Serialize)]
pub(super) struct PagedQuery<'a> {
    #[serde(flatten)]
    pub query: &'a DatabaseQuery,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

// --- Block children ---

#[derive(Debug, Serialize)]
pub(super) struct AppendChildren<'a> {
    pub children: &'a [Block],
}

// --- Responses ---

/// Generic paginated list response from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}
