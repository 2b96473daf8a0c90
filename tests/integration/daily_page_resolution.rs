// tests/integration/daily_page_resolution.rs
//! Today-then-yesterday resolution and the append workflow, against an
//! in-memory Notion.

use chrono::{DateTime, TimeZone, Utc};
use crate::common::{database_id, day, row, InMemoryNotion};
use notion_daily::{
    AppError, AppendOutcome, Block, CandidateDay, DailyNoteQuery, DailyNotebook, DateMatch,
    NotionErrorCode, PageResolver, RichSpan,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const TODAY_PAGE: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const YESTERDAY_PAGE: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// Noon on 2026-10-17 in Hong Kong.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 4, 0, 0).unwrap()
}

fn query() -> DailyNoteQuery {
    DailyNoteQuery::new(database_id())
}

#[tokio::test]
async fn todays_page_wins_and_yesterday_is_never_queried() {
    let notion = InMemoryNotion::with_rows(vec![
        row(TODAY_PAGE, "Daily Note", day(2026, 10, 17), 1),
        row(YESTERDAY_PAGE, "Daily Note", day(2026, 10, 16), 1),
    ]);
    let query = query();

    let page = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap()
        .expect("today's page should resolve");

    assert_eq!(page.id.as_str(), TODAY_PAGE);
    assert_eq!(page.day, CandidateDay::Today);
    assert_eq!(page.date, day(2026, 10, 17));
    assert_eq!(notion.query_count(), 1);
}

#[tokio::test]
async fn falls_back_to_yesterday() {
    let notion = InMemoryNotion::with_rows(vec![row(
        YESTERDAY_PAGE,
        "Daily Note",
        day(2026, 10, 16),
        23,
    )]);
    let query = query();

    let page = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap()
        .expect("yesterday's page should resolve");

    assert_eq!(page.id.as_str(), YESTERDAY_PAGE);
    assert_eq!(page.day, CandidateDay::Yesterday);
    assert_eq!(notion.query_count(), 2);
}

#[tokio::test]
async fn no_page_is_absence_not_an_error() {
    let notion = InMemoryNotion::with_rows(vec![
        row(TODAY_PAGE, "Meeting", day(2026, 10, 17), 1),
        row(YESTERDAY_PAGE, "Daily Note", day(2026, 10, 15), 1),
    ]);
    let query = query();

    let resolved = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap();

    assert_eq!(resolved, None);
    assert_eq!(notion.query_count(), 2);
}

#[tokio::test]
async fn query_failure_propagates_without_fallback() {
    let notion = InMemoryNotion {
        fail_queries: true,
        ..InMemoryNotion::default()
    };
    let query = query();

    let err = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap_err();

    assert_eq!(err.notion_code(), Some(&NotionErrorCode::Unauthorized));
    assert_eq!(notion.query_count(), 1);
}

#[tokio::test]
async fn duplicate_daily_notes_pick_the_newest() {
    let newest = "cccccccccccccccccccccccccccccccc";
    let notion = InMemoryNotion::with_rows(vec![
        row(TODAY_PAGE, "Daily Note", day(2026, 10, 17), 1),
        row(newest, "Daily Note", day(2026, 10, 17), 3),
    ]);
    let query = query();

    let page = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.id.as_str(), newest);
}

#[tokio::test]
async fn day_boundary_follows_hong_kong_not_utc() {
    // 2026-10-16 16:30 UTC is already 2026-10-17 00:30 in Hong Kong.
    let notion = InMemoryNotion::with_rows(vec![row(
        TODAY_PAGE,
        "Daily Note",
        day(2026, 10, 17),
        0,
    )]);
    let query = query();

    let page = PageResolver::new(&notion, &query)
        .resolve_at(Utc.with_ymd_and_hms(2026, 10, 16, 16, 30, 0).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.day, CandidateDay::Today);
    assert_eq!(page.date, day(2026, 10, 17));
}

#[tokio::test]
async fn exact_date_strategy_resolves_the_same_page() {
    let notion = InMemoryNotion::with_rows(vec![row(
        YESTERDAY_PAGE,
        "Daily Note",
        day(2026, 10, 16),
        8,
    )]);
    let query = DailyNoteQuery {
        date_match: DateMatch::ExactDate {
            format: "%d/%m/%Y".to_string(),
        },
        ..query()
    };

    let page = PageResolver::new(&notion, &query)
        .resolve_at(now())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.id.as_str(), YESTERDAY_PAGE);
    assert_eq!(page.day, CandidateDay::Yesterday);
}

#[tokio::test]
async fn append_submits_converted_blocks_to_resolved_page() {
    let notion = Arc::new(InMemoryNotion::with_rows(vec![row(
        TODAY_PAGE,
        "Daily Note",
        day(2026, 10, 17),
        1,
    )]));
    let notebook = DailyNotebook::new(notion.clone(), query());

    let outcome = notebook
        .append("# Standup\n- read [[https://x.com/]]", now())
        .await
        .unwrap();

    let AppendOutcome::Appended { page, block_count } = outcome else {
        panic!("expected the content to be appended");
    };
    assert_eq!(page.id.as_str(), TODAY_PAGE);
    assert_eq!(block_count, 2);

    let appended = notion.appended.lock().unwrap();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].0.as_str(), TODAY_PAGE);
    assert_eq!(
        appended[0].1,
        vec![
            Block::Heading1(vec![RichSpan::plain("Standup")]),
            Block::BulletListItem(vec![
                RichSpan::plain("read "),
                RichSpan::link("https://x.com"),
            ]),
        ]
    );
}

#[tokio::test]
async fn append_without_daily_page_sends_nothing() {
    let notion = Arc::new(InMemoryNotion::default());
    let notebook = DailyNotebook::new(notion.clone(), query());

    let outcome = notebook.append("hello", now()).await.unwrap();

    assert_eq!(outcome, AppendOutcome::NoDailyPage);
    assert!(notion.appended.lock().unwrap().is_empty());
    assert_eq!(notion.query_count(), 2);
}

#[tokio::test]
async fn append_failure_propagates() {
    let notion = Arc::new(InMemoryNotion {
        fail_appends: true,
        ..InMemoryNotion::with_rows(vec![row(TODAY_PAGE, "Daily Note", day(2026, 10, 17), 1)])
    });
    let notebook = DailyNotebook::new(notion, query());

    let result = notebook.append("hello", now()).await;
    assert!(matches!(result, Err(AppError::NotionService { .. })));
}

#[tokio::test]
async fn page_blocks_returns_every_child() {
    let notion = InMemoryNotion::default();
    notion
        .children
        .lock()
        .unwrap()
        .extend([serde_json::json!({"type": "paragraph"}), serde_json::json!({"type": "code"})]);

    let blocks = notion_daily::notebook::page_blocks(&notion, &database_id())
        .await
        .unwrap();
    assert_eq!(blocks.len(), 2);
}
