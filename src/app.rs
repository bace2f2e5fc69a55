use std::io::Write;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::github::{ApiOutcome, GitHubClient, HttpClient};
use crate::model::CommitSummary;
use crate::report::{self, Palette};

pub const DEFAULT_LIST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: usize,
    pub exclude_bots: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            exclude_bots: false,
        }
    }
}

/// Drives the request sequence and writes the report.
///
/// A non-200 answer is part of the report, not an error: it is printed and
/// the run ends with `Ok(())`. Only transport, decoding and write failures
/// surface as `Err`.
pub struct Reporter<'a, H: HttpClient> {
    client: GitHubClient<'a, H>,
    palette: Palette,
}

impl<'a, H: HttpClient> Reporter<'a, H> {
    pub fn new(http: &'a H, config: &'a Config, palette: Palette) -> Self {
        Self {
            client: GitHubClient::new(http, config),
            palette,
        }
    }

    /// Count plus summaries of the most recent commits.
    pub fn list(&self, out: &mut impl Write, options: ListOptions) -> Result<()> {
        let Some(commits) = self.fetch_commits(out, options.exclude_bots, true)? else {
            return Ok(());
        };

        report::render_commit_count(out, commits.len())?;
        report::render_commit_summaries(out, &commits, options.limit, self.palette)?;
        Ok(())
    }

    /// Full message, stats and per-file diffs of one commit. Without an
    /// explicit SHA the most recent listed commit is used.
    pub fn show(&self, out: &mut impl Write, sha: Option<&str>) -> Result<()> {
        let sha = match sha {
            Some(sha) => sha.to_string(),
            None => {
                let Some(commits) = self.fetch_commits(out, false, false)? else {
                    return Ok(());
                };
                report::render_commit_count(out, commits.len())?;

                match commits.into_iter().next() {
                    Some(latest) => latest.sha,
                    None => {
                        warn!("repository has no commits");
                        writeln!(out, "No commits to inspect")?;
                        return Ok(());
                    }
                }
            }
        };

        report::render_detail_heading(out, &sha, self.palette)?;

        match self.client.get_commit(&sha)? {
            ApiOutcome::Ok(detail) => {
                info!(files = detail.file_count(), patches = detail.patch_count(), "rendering commit detail");
                report::render_commit_detail(out, &detail, self.palette)
            }
            ApiOutcome::Failed { status, .. } => {
                report::render_api_error(out, status, None, self.palette)
            }
        }
    }

    /// `None` once a failed status has been reported.
    fn fetch_commits(
        &self,
        out: &mut impl Write,
        exclude_bots: bool,
        echo_body: bool,
    ) -> Result<Option<Vec<CommitSummary>>> {
        match self.client.list_commits()? {
            ApiOutcome::Ok(mut commits) => {
                if exclude_bots {
                    let before = commits.len();
                    commits.retain(|c| !c.is_bot());
                    info!(dropped = before - commits.len(), "filtered bot commits");
                }
                Ok(Some(commits))
            }
            ApiOutcome::Failed { status, body } => {
                let body = echo_body.then_some(body.as_str());
                report::render_api_error(out, status, body, self.palette)?;
                Ok(None)
            }
        }
    }
}
