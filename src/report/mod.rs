//! Text rendering of commit reports.
//!
//! Every function writes plain lines to `out`; styling only happens through
//! the [`Palette`], which is a no-op unless colour is enabled.

pub mod styles;

use std::io::Write;

use crate::error::Result;
use crate::model::{CommitDetail, CommitSummary, short_sha};

pub use styles::Palette;

pub const SEPARATOR_WIDTH: usize = 50;

pub fn render_commit_count(out: &mut impl Write, count: usize) -> Result<()> {
    writeln!(out, "Found {} commits\n", count)?;
    Ok(())
}

/// Writes one block per commit for the first `limit` entries, in order.
pub fn render_commit_summaries(
    out: &mut impl Write,
    commits: &[CommitSummary],
    limit: usize,
    palette: Palette,
) -> Result<()> {
    for commit in commits.iter().take(limit) {
        writeln!(
            out,
            "Commit: {}",
            palette.paint(styles::sha_style(), commit.short_sha())
        )?;
        writeln!(out, "Author: {}", commit.author)?;
        writeln!(out, "Message: {}", commit.headline())?;
        writeln!(out, "Date: {}", palette.paint(styles::dim_style(), &commit.date))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Reports a non-200 answer. The body is only echoed when given.
pub fn render_api_error(
    out: &mut impl Write,
    status: u16,
    body: Option<&str>,
    palette: Palette,
) -> Result<()> {
    let line = format!("ERROR: {}", status);
    writeln!(out, "{}", palette.paint(styles::error_style(), &line))?;
    if let Some(body) = body {
        writeln!(out, "{}", body)?;
    }
    Ok(())
}

pub fn render_detail_heading(out: &mut impl Write, sha: &str, palette: Palette) -> Result<()> {
    writeln!(
        out,
        "Getting details for commit: {}",
        palette.paint(styles::sha_style(), short_sha(sha))
    )?;
    Ok(())
}

pub fn render_commit_detail(
    out: &mut impl Write,
    detail: &CommitDetail,
    palette: Palette,
) -> Result<()> {
    writeln!(out, "Message: {}", detail.message)?;
    writeln!(out, "Files changed: {}", detail.file_count())?;
    writeln!(out, "Total additions: +{}", detail.stats.additions)?;
    writeln!(out, "Total deletions: -{}\n", detail.stats.deletions)?;

    for (idx, file) in detail.files.iter().enumerate() {
        let header = format!("--- File {}: {} ---", idx + 1, file.display_name());
        writeln!(out, "{}", palette.paint(styles::file_header_style(), &header))?;
        writeln!(
            out,
            "Status: {}",
            palette.paint(styles::file_status_style(file.status), file.status.as_str())
        )?;
        writeln!(out, "Changes: +{} -{}", file.additions, file.deletions)?;

        if let Some(patch) = &file.patch {
            writeln!(out, "{}", palette.paint(styles::header_style(), "FULL DIFF:"))?;
            writeln!(out, "{}", palette.paint_patch(patch))?;
            writeln!(out, "\n{}\n", "=".repeat(SEPARATOR_WIDTH))?;
        }
    }
    Ok(())
}
