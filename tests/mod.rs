// tests/mod.rs
//! Test suite for notion-daily.
//!
//! `unit` exercises the converter through the public API; `integration`
//! runs resolution and the append workflow against an in-memory Notion.
