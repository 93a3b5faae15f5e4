//! Build sprint retrospective slide data from an entity stream exported
//! by the activity backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use retroboard_aggregate::SprintIndex;
use retroboard_core::{Entity, Timestamp};
use retroboard_slides::{prepare_data, PrepareOptions};

#[derive(Parser)]
#[command(name = "retroboard", version, about = "Sprint retrospective slides from activity data")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the five slide payloads for a sprint
    Build {
        /// Path to the entity stream (JSON array)
        #[arg(short, long)]
        input: PathBuf,
        /// Target sprint id
        #[arg(short, long)]
        sprint: u64,
        /// Write the slides to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the slide JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List the sprint timeline found in an entity stream
    Sprints {
        /// Path to the entity stream (JSON array)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build {
            input,
            sprint,
            output,
            pretty,
        } => build(&input, sprint, output.as_deref(), pretty),
        Command::Sprints { input } => list_sprints(&input),
    }
}

fn load_entities(path: &Path) -> anyhow::Result<Vec<Entity>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading entity stream from {}", path.display()))?;
    let entities: Vec<Entity> =
        serde_json::from_str(&raw).context("parsing entity stream")?;
    debug!(entities = entities.len(), "loaded entity stream");
    Ok(entities)
}

fn build(input: &Path, sprint: u64, output: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let entities = load_entities(input)?;
    info!(entities = entities.len(), sprint, "building slides");

    let slides = prepare_data(&entities, &PrepareOptions::for_sprint(sprint))?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&slides)?
    } else {
        serde_json::to_string(&slides)?
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing slides to {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}

fn list_sprints(input: &Path) -> anyhow::Result<()> {
    let entities = load_entities(input)?;
    let sprints: Vec<_> = entities
        .iter()
        .filter_map(|entity| match entity {
            Entity::Sprint(sprint) => Some(sprint.clone()),
            _ => None,
        })
        .collect();

    if sprints.is_empty() {
        println!("No sprints in the stream.");
        return Ok(());
    }

    let timeline = SprintIndex::new(sprints);
    for sprint in timeline.ordered() {
        println!(
            "{:>6}  {}  ..  {}  {}",
            sprint.id,
            format_moment(sprint.start_at),
            format_moment(sprint.finish_at),
            sprint.name,
        );
    }
    Ok(())
}

fn format_moment(timestamp: Timestamp) -> String {
    time::OffsetDateTime::from_unix_timestamp(timestamp.div_euclid(1_000))
        .ok()
        .and_then(|moment| {
            moment
                .format(&time::format_description::well_known::Rfc3339)
                .ok()
        })
        .unwrap_or_else(|| timestamp.to_string())
}
