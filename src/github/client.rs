use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::github::http::HttpClient;
use crate::github::types::{ApiCommit, ApiCommitDetail};
use crate::model::{CommitDetail, CommitSummary};

const USER_AGENT: &str = concat!("commit-reporter/", env!("CARGO_PKG_VERSION"));

/// Result of one API call: either the parsed payload or the status the
/// server answered with.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Ok(T),
    Failed { status: u16, body: String },
}

pub struct GitHubClient<'a, H: HttpClient> {
    http: &'a H,
    config: &'a Config,
}

impl<'a, H: HttpClient> GitHubClient<'a, H> {
    pub fn new(http: &'a H, config: &'a Config) -> Self {
        Self { http, config }
    }

    pub fn commits_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            self.config.api_url, self.config.repository.owner, self.config.repository.name
        )
    }

    pub fn commit_url(&self, sha: &str) -> String {
        format!("{}/{}", self.commits_url(), sha)
    }

    fn headers(&self) -> [(&'static str, String); 4] {
        [
            ("authorization", self.config.credential.authorization()),
            ("accept", "application/vnd.github+json".to_string()),
            ("user-agent", USER_AGENT.to_string()),
            ("x-github-api-version", "2022-11-28".to_string()),
        ]
    }

    /// `GET /repos/{owner}/{repo}/commits`, first page only.
    pub fn list_commits(&self) -> Result<ApiOutcome<Vec<CommitSummary>>> {
        let url = self.commits_url();
        debug!(%url, "listing commits");

        let response = self.http.get(&url, &self.headers())?;
        if !response.is_ok() {
            warn!(status = response.status, repo = %self.config.repository, "commit list request failed");
            return Ok(ApiOutcome::Failed {
                status: response.status,
                body: response.text(),
            });
        }

        let commits: Vec<ApiCommit> = response.json()?;
        debug!(count = commits.len(), "received commits");
        Ok(ApiOutcome::Ok(
            commits.into_iter().map(CommitSummary::from).collect(),
        ))
    }

    /// `GET /repos/{owner}/{repo}/commits/{sha}` including per-file patches.
    pub fn get_commit(&self, sha: &str) -> Result<ApiOutcome<CommitDetail>> {
        let url = self.commit_url(sha);
        debug!(%url, "fetching commit detail");

        let response = self.http.get(&url, &self.headers())?;
        if !response.is_ok() {
            warn!(status = response.status, sha, "commit detail request failed");
            return Ok(ApiOutcome::Failed {
                status: response.status,
                body: response.text(),
            });
        }

        let detail: ApiCommitDetail = response.json()?;
        debug!(files = detail.files.len(), "received commit detail");
        Ok(ApiOutcome::Ok(CommitDetail::from(detail)))
    }
}
