//! Command implementations for alibi.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands assemble an [`ExcuseRequest`] from flags and
//! config, drive the generator, and hand the result to the session.

use crate::cli::{Command, HistoryArgs, RephraseArgs, RequestArgs};
use crate::config::{Config, CONFIG_FILE};
use crate::error::{AlibiError, Result};
use crate::generator::Generator;
use crate::history::{self, Session};
use crate::request::{Audience, Category, ExcuseRequest, Length, Tone};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => cmd_generate(args),
        Command::Rephrase(args) => cmd_rephrase(args),
        Command::History(args) => cmd_history(args),
    }
}

fn cmd_generate(args: RequestArgs) -> Result<()> {
    let config = Config::load_or_default(CONFIG_FILE)?;
    let request = build_request(&args, &config)?;

    let mut generator = Generator::new()?;
    let text = generator.generate(&request);

    deliver(&request, &config, text)
}

fn cmd_rephrase(args: RephraseArgs) -> Result<()> {
    let config = Config::load_or_default(CONFIG_FILE)?;
    let request = build_request(&args.request, &config)?;

    let mut generator = Generator::new()?;
    let text = generator.rephrase(&request, &args.prior_text);

    deliver(&request, &config, text)
}

fn cmd_history(args: HistoryArgs) -> Result<()> {
    let config = Config::load_or_default(CONFIG_FILE)?;
    let dir = args
        .history_dir
        .unwrap_or_else(|| PathBuf::from(&config.history_dir));

    let date = match args.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y%m%d").map_err(|e| {
            AlibiError::UserError(format!("invalid date '{}' (expected YYYYMMDD): {}", raw, e))
        })?,
        None => Local::now().date_naive(),
    };

    let records = history::read_day(&dir, date)?;
    if records.is_empty() {
        println!("No history for {}.", date.format("%Y-%m-%d"));
        return Ok(());
    }

    for record in &records {
        println!("{}  {}", record.timestamp.format("%H:%M:%S"), record.text);
    }
    Ok(())
}

/// Print the excuse, record it in the session, and persist it when asked.
fn deliver(request: &ExcuseRequest, config: &Config, text: String) -> Result<()> {
    let dir = request
        .persist_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.history_dir));
    let mut session = Session::new(dir);
    session.record(text.clone());

    if request.persist_history {
        session.persist(&text)?;
    }

    println!("{}", text);
    Ok(())
}

/// Resolve flags against config defaults into a typed request.
///
/// Unknown display names are rejected here; the library-level string
/// fallback (unknown category -> General) stays behind the typed boundary.
fn build_request(args: &RequestArgs, config: &Config) -> Result<ExcuseRequest> {
    let category_name = args.category.as_deref().unwrap_or(&config.default_category);
    let category = Category::from_str(category_name).ok_or_else(|| {
        AlibiError::UserError(format!(
            "unknown category '{}' (expected one of: {})",
            category_name,
            join_names(&Category::all().map(|c| c.as_str()))
        ))
    })?;

    let audience = match args.audience.as_deref() {
        Some(name) => Audience::from_str(name).ok_or_else(|| {
            AlibiError::UserError(format!(
                "unknown audience '{}' (expected one of: {})",
                name,
                join_names(&Audience::all().map(|a| a.as_str()))
            ))
        })?,
        None => Audience::default(),
    };

    let tone_name = args.tone.as_deref().unwrap_or(&config.default_tone);
    let tone = Tone::from_str(tone_name).ok_or_else(|| {
        AlibiError::UserError(format!(
            "unknown tone '{}' (expected one of: {})",
            tone_name,
            join_names(&Tone::all().map(|t| t.as_str()))
        ))
    })?;

    let length_name = args.length.as_deref().unwrap_or(&config.default_length);
    let length = Length::from_str(length_name).ok_or_else(|| {
        AlibiError::UserError(format!(
            "unknown length '{}' (expected one of: {})",
            length_name,
            join_names(&Length::all().map(|l| l.as_str()))
        ))
    })?;

    Ok(ExcuseRequest {
        category,
        audience,
        tone,
        specificity: args.specificity,
        length,
        custom_context: args.context.clone().filter(|c| !c.is_empty()),
        seed: args.seed,
        persist_history: args.save,
        persist_dir: args.history_dir.clone(),
    })
}

fn join_names(names: &[&str]) -> String {
    names.join(", ")
}
