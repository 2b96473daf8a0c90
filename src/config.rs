// src/config.rs
use crate::constants::{
    DAILY_NOTE_CATEGORY, DAILY_NOTE_CATEGORY_PROPERTY, DAILY_NOTE_DATE_FORMAT,
    DAILY_NOTE_DATE_PROPERTY,
};
use crate::error::AppError;
use crate::resolver::{DailyNoteQuery, DateMatch};
use crate::types::{ApiKey, NotionId, ValidationError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

const API_KEY_VAR: &str = "NOTION_API_KEY";
const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append Markdown to today's daily note (or yesterday's if today has none)
    Append {
        /// Markdown file to append; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        daily_note: DailyNoteArgs,
    },

    /// Print the ID of the page new content would be appended to
    Resolve {
        #[command(flatten)]
        daily_note: DailyNoteArgs,
    },

    /// Print the blocks a Markdown document converts to, without sending them
    Convert {
        /// Markdown file to convert; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the Notion JSON payload or a one-line-per-block preview
        #[arg(long, value_enum, default_value_t = ConvertFormat::Json)]
        format: ConvertFormat,
    },

    /// List every block on a page as JSON
    Blocks {
        /// Notion page URL or ID
        page: String,
    },
}

/// How daily notes are recognised in the database.
#[derive(Args, Debug, Clone)]
pub struct DailyNoteArgs {
    /// Select property that marks daily notes
    #[arg(long, default_value = DAILY_NOTE_CATEGORY_PROPERTY)]
    pub category_property: String,

    /// Value of the select property on daily notes
    #[arg(long, default_value = DAILY_NOTE_CATEGORY)]
    pub category: String,

    /// Date property compared against the day
    #[arg(long, default_value = DAILY_NOTE_DATE_PROPERTY)]
    pub date_property: String,

    /// How the date property is matched
    #[arg(long, value_enum, default_value_t = DateMatchArg::Range)]
    pub date_match: DateMatchArg,

    /// chrono format for `--date-match exact`
    #[arg(long, default_value = DAILY_NOTE_DATE_FORMAT)]
    pub date_format: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertFormat {
    Json,
    Text,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMatchArg {
    /// Local-midnight to local-midnight range
    Range,
    /// Equality against the formatted date
    Exact,
}

impl DailyNoteArgs {
    /// Builds the resolver query for `database_id`.
    pub fn into_query(self, database_id: NotionId) -> Result<DailyNoteQuery, ValidationError> {
        for (name, value) in [
            ("category-property", &self.category_property),
            ("category", &self.category),
            ("date-property", &self.date_property),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidSetting {
                    name,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        let date_match = match self.date_match {
            DateMatchArg::Range => DateMatch::DayRange,
            DateMatchArg::Exact => DateMatch::ExactDate {
                format: self.date_format,
            },
        };

        Ok(DailyNoteQuery {
            category_property: self.category_property,
            category: self.category,
            date_property: self.date_property,
            date_match,
            ..DailyNoteQuery::new(database_id)
        })
    }
}

/// Credentials and target database, read from the environment.
#[derive(Debug, Clone)]
pub struct NotionSettings {
    pub api_key: ApiKey,
    pub database_id: Option<NotionId>,
}

impl NotionSettings {
    /// Reads `NOTION_API_KEY` (required) and `NOTION_DATABASE_ID` (optional here).
    pub fn from_env() -> Result<Self, AppError> {
        let api_key_str = std::env::var(API_KEY_VAR).map_err(|_| {
            AppError::MissingConfiguration(format!("{} environment variable not set", API_KEY_VAR))
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let database_id = match std::env::var(DATABASE_ID_VAR) {
            Ok(raw) => Some(NotionId::parse(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            database_id,
        })
    }

    /// The database ID, or an error naming the missing variable.
    pub fn require_database(&self) -> Result<NotionId, AppError> {
        self.database_id.clone().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                DATABASE_ID_VAR
            ))
        })
    }
}

/// Reads a whole document from `file`, or stdin when `None`.
pub fn read_document(file: Option<&PathBuf>) -> Result<String, AppError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
