//! Analyze command: profile every qualifying author in a CSV corpus.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use comfort_map_core::{AuthorProfile, analyze_person};

use crate::corpus;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV corpus file (Kaggle Enron layout, `message` column).
    pub file: Utf8PathBuf,

    /// Minimum messages an author needs to be profiled.
    #[arg(long)]
    pub min_emails: Option<usize>,

    /// Cap on CSV rows read.
    #[arg(long)]
    pub max_emails: Option<usize>,

    /// Only analyze this author (still subject to the message threshold).
    #[arg(long)]
    pub person: Option<String>,

    /// Write the full profiles as JSON to this file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Profile every author with enough messages in the corpus.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_messages: usize,
    config_max_emails: Option<usize>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let min_messages = args.min_emails.unwrap_or(config_min_messages);
    let max_emails = args.max_emails.or(config_max_emails);
    debug!(min_messages, ?max_emails, "executing analyze command");

    super::ensure_input_size(&args.file, max_input)?;

    let records = corpus::load_csv(&args.file, max_emails)?;
    let mut authors = corpus::group_by_author(records, min_messages);
    if let Some(ref person) = args.person {
        authors.retain(|(sender, _)| sender == person);
        if authors.is_empty() {
            anyhow::bail!(
                "{person} has no {min_messages}+ usable messages in {}",
                args.file
            );
        }
    }
    if authors.is_empty() {
        anyhow::bail!(
            "no author in {} has {min_messages}+ usable messages",
            args.file
        );
    }
    info!(authors = authors.len(), "authors above threshold");

    let bar = if global_json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(authors.len() as u64).with_style(
            ProgressStyle::default_bar()
                .template("{bar:30} {pos}/{len} {msg}")
                .context("invalid progress template")?,
        )
    };

    let mut profiles: Vec<AuthorProfile> = Vec::with_capacity(authors.len());
    for (person, messages) in &authors {
        bar.set_message(person.clone());
        profiles.push(analyze_person(person, messages)?);
        bar.inc(1);
    }
    bar.finish_and_clear();

    if let Some(ref output) = args.output {
        let json =
            serde_json::to_string_pretty(&profiles).context("failed to serialize profiles")?;
        std::fs::write(output.as_std_path(), json)
            .with_context(|| format!("failed to write {output}"))?;
        info!(output = %output, "profiles written");
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!(
        "{} authors profiled from {}",
        profiles.len().to_string().bold(),
        args.file
    );
    println!();
    for profile in &profiles {
        println!(
            "  {}  {} emails, {} unique words, diversity {:.1}%, reading ease {:.1}",
            profile.person.cyan(),
            profile.total_emails,
            profile.vocabulary_diversity.unique_words,
            profile.vocabulary_diversity.lexical_diversity * 100.0,
            profile.writing_style.reading_ease,
        );
    }
    if let Some(ref output) = args.output {
        println!();
        println!("Full profiles written to {}", output.to_string().green());
    }

    Ok(())
}
