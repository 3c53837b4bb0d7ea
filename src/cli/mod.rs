//! CLI argument parsing for alibi.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Alibi: template-driven excuse generator.
///
/// Generates short, templated excuse messages from a handful of knobs:
/// scenario category, audience, tone, specificity, and length. Optionally
/// appends each generated excuse to a daily NDJSON history log.
#[derive(Parser, Debug)]
#[command(name = "alibi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for alibi.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an excuse.
    ///
    /// Picks a phrase template for the category/tone, fills in the
    /// time-derived placeholders, and applies the length policy.
    Generate(RequestArgs),

    /// Re-roll an excuse for the same request.
    ///
    /// With a seed, rephrasing is reproducible but distinct from the
    /// same-seed generate call.
    Rephrase(RephraseArgs),

    /// Show persisted excuses for a day.
    History(HistoryArgs),
}

/// Request knobs shared by `generate` and `rephrase`.
///
/// Choice flags take the display names used by the original form, e.g.
/// `--category "Work Deadline"` or `--tone Casual`. Omitted flags fall back
/// to `alibi.yaml`, then to the built-in defaults.
#[derive(Parser, Debug)]
pub struct RequestArgs {
    /// Scenario category (Work Deadline, School Assignment, Social Event,
    /// Appointment, Travel/Commute, General).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Audience (Manager, Professor, Friend, Family, Client, Other).
    /// Carried on the request; generation does not consume it.
    #[arg(short, long)]
    pub audience: Option<String>,

    /// Tone (Professional, Casual, Sincere, Brief, Light-hearted).
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Detail dial, 0-10. Higher values add concrete temporal details.
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub specificity: u8,

    /// Output length (Short, Medium, Long).
    #[arg(short, long)]
    pub length: Option<String>,

    /// Optional free-text context (project name, course, event, constraints).
    #[arg(long)]
    pub context: Option<String>,

    /// Random seed for reproducible template selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append the generated excuse to the daily history log.
    #[arg(long)]
    pub save: bool,

    /// History directory (overrides the config file).
    #[arg(long)]
    pub history_dir: Option<PathBuf>,
}

/// Arguments for the `rephrase` command.
#[derive(Parser, Debug)]
pub struct RephraseArgs {
    /// The previously generated excuse being re-rolled.
    pub prior_text: String,

    #[command(flatten)]
    pub request: RequestArgs,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Day to show, as YYYYMMDD. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// History directory (overrides the config file).
    #[arg(long)]
    pub history_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::try_parse_from(["alibi", "generate"]).unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert!(args.category.is_none());
                assert_eq!(args.specificity, 6);
                assert!(!args.save);
                assert!(args.seed.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_generate_with_all_flags() {
        let cli = Cli::try_parse_from([
            "alibi",
            "generate",
            "--category",
            "Social Event",
            "--audience",
            "Friend",
            "--tone",
            "Casual",
            "--specificity",
            "9",
            "--length",
            "Short",
            "--context",
            "birthday dinner",
            "--seed",
            "42",
            "--save",
            "--history-dir",
            "/tmp/excuses",
        ])
        .unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.category.as_deref(), Some("Social Event"));
                assert_eq!(args.audience.as_deref(), Some("Friend"));
                assert_eq!(args.tone.as_deref(), Some("Casual"));
                assert_eq!(args.specificity, 9);
                assert_eq!(args.length.as_deref(), Some("Short"));
                assert_eq!(args.context.as_deref(), Some("birthday dinner"));
                assert_eq!(args.seed, Some(42));
                assert!(args.save);
                assert_eq!(args.history_dir.as_deref(), Some(std::path::Path::new("/tmp/excuses")));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn specificity_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["alibi", "generate", "--specificity", "11"]).is_err());
    }

    #[test]
    fn parses_rephrase_with_prior_text() {
        let cli =
            Cli::try_parse_from(["alibi", "rephrase", "Sorry, can't make it.", "--seed", "7"])
                .unwrap();
        match cli.command {
            Command::Rephrase(args) => {
                assert_eq!(args.prior_text, "Sorry, can't make it.");
                assert_eq!(args.request.seed, Some(7));
            }
            _ => panic!("expected rephrase"),
        }
    }

    #[test]
    fn parses_history_with_date() {
        let cli = Cli::try_parse_from(["alibi", "history", "--date", "20260803"]).unwrap();
        match cli.command {
            Command::History(args) => {
                assert_eq!(args.date.as_deref(), Some("20260803"));
            }
            _ => panic!("expected history"),
        }
    }
}
