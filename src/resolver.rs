// src/resolver.rs
//! Finds the daily note that should receive new content.
//!
//! Days are computed in a fixed UTC offset (Asia/Hong_Kong, +08:00, no DST)
//! so the server's own time zone never moves a day boundary. Candidates are
//! searched in order (today, then yesterday) and the search stops at the
//! first day with a matching row.

use crate::api::types::{Condition, DatabaseQuery, DateCondition, Filter, Sort};
use crate::api::NotionRepository;
use crate::constants::{
    DAILY_NOTE_CATEGORY, DAILY_NOTE_CATEGORY_PROPERTY, DAILY_NOTE_DATE_FORMAT,
    DAILY_NOTE_DATE_PROPERTY, DAILY_NOTE_UTC_OFFSET_SECS,
};
use crate::error::AppError;
use crate::model::{CandidateDay, PageReference, PageSummary};
use crate::types::NotionId;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// How a row's date property is compared against the searched day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateMatch {
    /// `equals` against the day rendered with a chrono format string.
    ExactDate { format: String },
    /// `on_or_after` local midnight and `before` the next local midnight.
    #[default]
    DayRange,
}

/// Fixed UTC+8 offset used for all day computations.
pub fn hong_kong_offset() -> FixedOffset {
    FixedOffset::east_opt(DAILY_NOTE_UTC_OFFSET_SECS).expect("UTC+8 is a valid offset")
}

/// Where daily notes live and how they are recognised.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyNoteQuery {
    pub database_id: NotionId,
    pub category_property: String,
    pub category: String,
    pub date_property: String,
    pub date_match: DateMatch,
    pub utc_offset: FixedOffset,
}

impl DailyNoteQuery {
    /// Query settings with the standard daily-note conventions.
    pub fn new(database_id: NotionId) -> Self {
        Self {
            database_id,
            category_property: DAILY_NOTE_CATEGORY_PROPERTY.to_string(),
            category: DAILY_NOTE_CATEGORY.to_string(),
            date_property: DAILY_NOTE_DATE_PROPERTY.to_string(),
            date_match: DateMatch::default(),
            utc_offset: hong_kong_offset(),
        }
    }

    /// The calendar day `now` falls on in the configured offset.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.utc_offset).date_naive()
    }

    /// Builds the database query matching daily notes for `day`.
    pub fn for_day(&self, day: NaiveDate) -> DatabaseQuery {
        let mut conditions = vec![Filter::property(
            self.category_property.clone(),
            Condition::Select {
                equals: self.category.clone(),
            },
        )];
        conditions.extend(self.date_conditions(day).into_iter().map(|condition| {
            Filter::property(self.date_property.clone(), Condition::Date(condition))
        }));

        DatabaseQuery {
            filter: Filter::And { and: conditions },
            sorts: vec![Sort::newest_first()],
        }
    }

    fn date_conditions(&self, day: NaiveDate) -> Vec<DateCondition> {
        match &self.date_match {
            DateMatch::ExactDate { format } => {
                vec![DateCondition::Equals(day.format(format).to_string())]
            }
            DateMatch::DayRange => {
                let mut conditions = vec![DateCondition::OnOrAfter(self.local_midnight(day))];
                // Only the last representable day lacks a successor.
                if let Some(next) = day.succ_opt() {
                    conditions.push(DateCondition::Before(self.local_midnight(next)));
                }
                conditions
            }
        }
    }

    fn local_midnight(&self, day: NaiveDate) -> String {
        format!("{}T00:00:00{}", day.format("%Y-%m-%d"), self.utc_offset)
    }
}

/// The ordered fallback list: today, then the calendar day before it.
pub fn candidate_days(today: NaiveDate) -> impl Iterator<Item = (CandidateDay, NaiveDate)> {
    [
        (CandidateDay::Today, Some(today)),
        (CandidateDay::Yesterday, today.pred_opt()),
    ]
    .into_iter()
    .filter_map(|(candidate, date)| date.map(|date| (candidate, date)))
}

/// Picks the most recently created row; ties keep the API's order.
fn most_recent(pages: Vec<PageSummary>) -> Option<PageSummary> {
    pages
        .into_iter()
        .reduce(|best, page| if page.created_time > best.created_time { page } else { best })
}

/// Resolves today's daily note, falling back to yesterday's.
pub struct PageResolver<'a, R: NotionRepository + ?Sized> {
    repository: &'a R,
    query: &'a DailyNoteQuery,
}

impl<'a, R: NotionRepository + ?Sized> PageResolver<'a, R> {
    pub fn new(repository: &'a R, query: &'a DailyNoteQuery) -> Self {
        Self { repository, query }
    }

    /// Resolves against the current time.
    pub async fn resolve(&self) -> Result<Option<PageReference>, AppError> {
        self.resolve_at(Utc::now()).await
    }

    /// Resolves as if the current time were `now`.
    ///
    /// `Ok(None)` means neither day has a daily note. A failing query is
    /// returned immediately and later candidates are not tried.
    pub async fn resolve_at(&self, now: DateTime<Utc>) -> Result<Option<PageReference>, AppError> {
        let today = self.query.today(now);
        log::debug!("Resolving daily note for {}", today);

        for (day, date) in candidate_days(today) {
            if let Some(page) = self.find_page_for(date).await? {
                log::info!("Found {}'s daily note ({}): {}", day, date, page.id);
                if day == CandidateDay::Yesterday {
                    log::info!(
                        "Today's page not found. Using yesterday's page ({}) instead.",
                        date.format(DAILY_NOTE_DATE_FORMAT)
                    );
                }
                return Ok(Some(PageReference {
                    id: page.id,
                    day,
                    date,
                }));
            }
            log::debug!("No daily note for {} ({})", day, date);
        }

        log::info!("No daily note found for today or yesterday");
        Ok(None)
    }

    async fn find_page_for(&self, date: NaiveDate) -> Result<Option<PageSummary>, AppError> {
        let query = self.query.for_day(date);
        let pages = self
            .repository
            .query_database(&self.query.database_id, &query)
            .await?;
        if pages.len() > 1 {
            log::warn!(
                "{} daily notes match {}; using the most recently created",
                pages.len(),
                date
            );
        }
        Ok(most_recent(pages))
    }
}
