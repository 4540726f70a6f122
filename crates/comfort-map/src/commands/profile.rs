//! Profile command: analyze one author from plain-text message files.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use comfort_map_core::analyze_person;

use crate::report;

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Message files, one message per file.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Author name for the profile.
    #[arg(short, long, default_value = "author")]
    pub person: String,

    /// Write the profile as JSON to this file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Build a profile from loose text files treated as one author's messages.
#[instrument(name = "cmd_profile", skip_all, fields(person = %args.person, files = args.files.len()))]
pub fn cmd_profile(
    args: ProfileArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = args.files.len(), "executing profile command");

    let mut messages = Vec::with_capacity(args.files.len());
    for file in &args.files {
        messages.push(super::read_input_file(file, max_input)?);
    }

    let profile = analyze_person(&args.person, &messages)
        .with_context(|| format!("failed to profile {}", args.person))?;

    if let Some(ref output) = args.output {
        let json =
            serde_json::to_string_pretty(&profile).context("failed to serialize profile")?;
        std::fs::write(output.as_std_path(), json)
            .with_context(|| format!("failed to write {output}"))?;
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", report::render_profile(&profile));
    }

    Ok(())
}
