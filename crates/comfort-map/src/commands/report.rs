//! Report command: render saved profiles as plain text.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde_json::Value;
use tracing::{debug, instrument};

use comfort_map_core::AuthorProfile;

use crate::report;

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Profiles JSON file produced by `analyze --output` or `profile --output`.
    pub file: Utf8PathBuf,

    /// Write the rendered report to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Only render this author.
    #[arg(long)]
    pub person: Option<String>,
}

/// Render saved profiles as a plain-text report.
#[instrument(name = "cmd_report", skip_all, fields(file = %args.file))]
pub fn cmd_report(args: ReportArgs, max_input: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing report command");

    let json = super::read_input_file(&args.file, max_input)?;

    // Accept either a single profile object or an array of profiles.
    let value: Value = serde_json::from_str(&json)
        .with_context(|| format!("{} is not valid JSON", args.file))?;
    let mut profiles: Vec<AuthorProfile> = if value.is_array() {
        serde_json::from_value(value)
            .with_context(|| format!("{} does not contain author profiles", args.file))?
    } else {
        vec![
            serde_json::from_value(value)
                .with_context(|| format!("{} does not contain an author profile", args.file))?,
        ]
    };

    if let Some(ref person) = args.person {
        profiles.retain(|p| &p.person == person);
        if profiles.is_empty() {
            anyhow::bail!("no profile for {person} in {}", args.file);
        }
    }

    let rendered = report::render_profiles(&profiles);

    match args.output {
        Some(ref output) => {
            std::fs::write(output.as_std_path(), &rendered)
                .with_context(|| format!("failed to write {output}"))?;
            println!("Report written to {output}");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
