//! Diff command
//!
//! Usage: revdiff diff <ENTITY_TYPE> <OLD.json> <NEW.json> [--json] [--output <FILE>]

use clap::Args;
use revdiff_core::diff::engine::compute_changes;
use revdiff_core::diff::{format_entity_diffs, EntityRevisionDiff};
use revdiff_core::render::render_entity_diffs;
use revdiff_core_types::{Bbid, EntityType, RequestContext};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Entity type of both snapshots (Author, Edition, EditionGroup, Publisher, Work)
    pub entity_type: String,

    /// Path to the parent revision's snapshot
    pub old: PathBuf,

    /// Path to the current revision's snapshot
    pub new: PathBuf,

    /// Emit the formatted diff as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(ctx: &RequestContext, args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entity_type = EntityType::parse(&args.entity_type)
        .ok_or_else(|| format!("unknown entity type: {}", args.entity_type))?;

    let old: Value = serde_json::from_str(&fs::read_to_string(&args.old)?)?;
    let new: Value = serde_json::from_str(&fs::read_to_string(&args.new)?)?;

    revdiff_core::log_op_start!(
        "diff",
        request_id = %ctx.request_id,
        entity_type = %entity_type,
    );

    let entity_id = snapshot_bbid(&new)
        .or_else(|| snapshot_bbid(&old))
        .unwrap_or_default();
    let changes = compute_changes(&old, &new)?;
    let diff = EntityRevisionDiff {
        entity_type,
        entity_id,
        changes,
    };
    let (formatted, stats) = format_entity_diffs(std::slice::from_ref(&diff));

    revdiff_core::log_op_end!(
        "diff",
        request_id = %ctx.request_id,
        formatted_count = stats.formatted,
        unmapped = stats.unmapped,
        malformed = stats.malformed,
    );

    let rendered = if args.json {
        let mut text = serde_json::to_string_pretty(&formatted)?;
        text.push('\n');
        text
    } else {
        render_entity_diffs(&formatted)
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn snapshot_bbid(snapshot: &Value) -> Option<Bbid> {
    snapshot
        .get("bbid")
        .and_then(Value::as_str)
        .and_then(|s| Bbid::parse(s).ok())
}
