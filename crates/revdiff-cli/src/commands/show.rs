//! Show command
//!
//! Usage: revdiff show <REVISION.json> [--json] [--output <FILE>]

use clap::Args;
use revdiff_core::diff::{format_revision, EntityRevisionDiff};
use revdiff_core::model::Revision;
use revdiff_core::render::render_revision_summary;
use revdiff_core_types::RequestContext;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A stored revision document: metadata plus the raw per-entity diffs.
#[derive(Debug, Deserialize)]
struct RevisionDocument {
    revision: Revision,
    #[serde(default)]
    entity_diffs: Vec<EntityRevisionDiff>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Path to a revision document
    pub revision: PathBuf,

    /// Emit the formatted revision diff as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute show command
pub fn execute(ctx: &RequestContext, args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc: RevisionDocument = serde_json::from_str(&fs::read_to_string(&args.revision)?)?;

    revdiff_core::log_op_start!(
        "show",
        request_id = %ctx.request_id,
        revision_id = doc.revision.id,
    );

    let (revision_diff, stats) = format_revision(doc.revision, &doc.entity_diffs);

    revdiff_core::log_op_end!(
        "show",
        request_id = %ctx.request_id,
        formatted_count = stats.formatted,
        unmapped = stats.unmapped,
        malformed = stats.malformed,
    );

    let rendered = if args.json {
        let mut text = serde_json::to_string_pretty(&revision_diff)?;
        text.push('\n');
        text
    } else {
        render_revision_summary(&revision_diff)
    };

    match args.output {
        Some(path) => fs::write(&path, rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
