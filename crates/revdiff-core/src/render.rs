//! Human-readable summary renderer for revision diffs.

use crate::diff::{FormattedChange, FormattedDiff};
use crate::model::RevisionDiff;

/// Render a human-readable Markdown/text summary of a [`RevisionDiff`].
///
/// The summary is intended for revision pages and review tooling. It is
/// informational only and does not affect the structured diff.
pub fn render_revision_summary(diff: &RevisionDiff) -> String {
    let mut out = String::new();

    let revision = &diff.revision;
    out.push_str(&format!(
        "## Revision #{} by {}\n\n",
        revision.id, revision.author.name
    ));
    out.push_str(&format!(
        "**Created**: {}\n",
        revision.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if revision.is_merge() {
        let parents: Vec<String> = revision.parent_ids.iter().map(u64::to_string).collect();
        out.push_str(&format!(
            "**Merge revision** (parents: {})\n",
            parents.join(", ")
        ));
    }
    out.push('\n');

    if diff.diffs.is_empty() {
        out.push_str("_No entity changes in this revision._\n");
    }
    out.push_str(&render_entity_diffs(&diff.diffs));

    if !revision.notes.is_empty() {
        out.push_str("### Notes\n\n");
        for note in &revision.notes {
            out.push_str(&format!(
                "- {} ({}): {}\n",
                note.author.name,
                note.posted_at.format("%Y-%m-%d %H:%M"),
                note.content
            ));
        }
    }

    out
}

/// Render just the per-entity change sections, without revision metadata.
pub fn render_entity_diffs(diffs: &[FormattedDiff]) -> String {
    let mut out = String::new();
    for entity_diff in diffs {
        render_entity(&mut out, entity_diff);
    }
    out
}

fn render_entity(out: &mut String, diff: &FormattedDiff) {
    out.push_str(&format!("### {} `{}`\n\n", diff.entity_type, diff.entity_id));
    if diff.changes.is_empty() {
        out.push_str("_No displayable changes._\n\n");
        return;
    }
    for change in &diff.changes {
        render_change(out, change);
    }
    out.push('\n');
}

fn render_change(out: &mut String, change: &FormattedChange) {
    out.push_str(&format!(
        "- **{}** [{}]: {} \u{2192} {}\n",
        change.label,
        change.severity.as_str(),
        side(&change.old),
        side(&change.new),
    ));
}

/// One side of a change; an empty side renders as an em-dash placeholder.
fn side(lines: &[String]) -> String {
    if lines.is_empty() {
        "\u{2014}".to_string()
    } else {
        lines.join(", ")
    }
}
