// src/model/mod.rs
//! Value types exchanged with the document store.
//!
//! Blocks are built per request by `markdown::convert`, handed to the
//! append call, and dropped.

pub mod block;
mod page;

pub use block::{Block, RichSpan};
pub use page::{CandidateDay, PageReference, PageSummary};
