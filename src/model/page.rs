// src/model/page.rs
use crate::types::NotionId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fmt;

/// The subset of a database row the resolver needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageSummary {
    pub id: NotionId,
    pub created_time: DateTime<Utc>,
}

/// Which day a fallback step searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateDay {
    Today,
    Yesterday,
}

impl fmt::Display for CandidateDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateDay::Today => write!(f, "today"),
            CandidateDay::Yesterday => write!(f, "yesterday"),
        }
    }
}

/// A resolved daily page and the step that found it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReference {
    pub id: NotionId,
    pub day: CandidateDay,
    pub date: NaiveDate,
}
