// src/main.rs

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_daily::config::{
    read_document, Command, CommandLineInput, ConvertFormat, NotionSettings,
};
use notion_daily::markdown::preview;
use notion_daily::notebook::page_blocks;
use notion_daily::{
    convert, AppError, AppendOutcome, DailyNotebook, NotionHttpClient, NotionId,
    NotionRepository,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging: console (stderr) at warn or debug, plus a debug log file.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_daily.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries command output (JSON, page IDs), so logs go to stderr.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("console", Box::new(console_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .loggers(
            ["hyper", "hyper_util", "reqwest", "rustls"]
                .into_iter()
                .map(|name| Logger::builder().build(name, LevelFilter::Info)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(LevelFilter::Debug),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn connect(settings: &NotionSettings) -> Result<Arc<dyn NotionRepository>, AppError> {
    Ok(Arc::new(NotionHttpClient::new(&settings.api_key)?))
}

/// Adds a hint for the most common setup mistake.
fn explain(err: AppError) -> anyhow::Error {
    let not_found = err.notion_code().is_some_and(|code| code.is_not_found());
    let err = anyhow::Error::new(err);
    if not_found {
        err.context("Notion could not find the object; is it shared with the integration?")
    } else {
        err
    }
}

async fn run(cli: CommandLineInput) -> anyhow::Result<()> {
    match cli.command {
        Command::Convert { file, format } => {
            let content = read_document(file.as_ref())?;
            let blocks = convert(&content);
            match format {
                ConvertFormat::Json => println!("{}", serde_json::to_string_pretty(&blocks)?),
                ConvertFormat::Text => {
                    for block in &blocks {
                        println!("{}", preview(block));
                    }
                }
            }
        }

        Command::Resolve { daily_note } => {
            let settings = NotionSettings::from_env()?;
            let query = daily_note.into_query(settings.require_database()?)?;
            let notebook = DailyNotebook::new(connect(&settings)?, query);

            match notebook.resolve(Utc::now()).await.map_err(explain)? {
                Some(page) => println!("{}", page.id.to_hyphenated()),
                None => {
                    eprintln!("No daily note found for today or yesterday.");
                    std::process::exit(2);
                }
            }
        }

        Command::Append { file, daily_note } => {
            let content = read_document(file.as_ref())
                .with_context(|| "Failed to read the document to append")?;
            let settings = NotionSettings::from_env()?;
            let query = daily_note.into_query(settings.require_database()?)?;
            let notebook = DailyNotebook::new(connect(&settings)?, query);

            match notebook.append(&content, Utc::now()).await.map_err(explain)? {
                AppendOutcome::Appended { page, block_count } => {
                    println!(
                        "✓ Appended {} blocks to {}'s page ({})",
                        block_count,
                        page.day,
                        page.id.to_hyphenated()
                    );
                }
                AppendOutcome::NoDailyPage => {
                    eprintln!("⚠️  No daily note found for today or yesterday; nothing appended.");
                    std::process::exit(2);
                }
            }
        }

        Command::Blocks { page } => {
            let settings = NotionSettings::from_env()?;
            let page = NotionId::parse(&page)?;
            let repository = connect(&settings)?;
            let blocks = page_blocks(repository.as_ref(), &page)
                .await
                .map_err(explain)?;
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    run(cli).await
}
